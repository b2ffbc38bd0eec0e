use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store;
use crate::model::record::TaskListRecord;
use crate::tui::task::new_id;
use crate::tui::task_list::DEFAULT_GROUP;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, data_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    match cli.command {
        None => Err("no subcommand given".into()),
        Some(cmd) => match cmd {
            Commands::Lists => cmd_lists(data_path, json),
            Commands::Check => cmd_check(data_path, json),
            Commands::New(args) => cmd_new(args, data_path, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_lists(data_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let records = store::load_lists(data_path)?;

    if json {
        let out = records
            .iter()
            .map(list_to_json)
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if records.is_empty() {
        println!("No lists in {}", data_path.display());
    } else {
        let blocks = records
            .iter()
            .map(format_list)
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", blocks.join("\n\n"));
    }
    Ok(())
}

fn cmd_check(data_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match store::load_lists(data_path) {
        Ok(records) => {
            if json {
                let out = CheckJson {
                    valid: true,
                    lists: records.len(),
                    error: None,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("ok: {} lists", records.len());
            }
            Ok(())
        }
        Err(e) => {
            if json {
                let out = CheckJson {
                    valid: false,
                    lists: 0,
                    error: Some(e.to_string()),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            Err(e.into())
        }
    }
}

fn cmd_new(args: NewArgs, data_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = store::load_lists(data_path)?;
    let record = TaskListRecord {
        name: args.name,
        group: args.group.unwrap_or_else(|| DEFAULT_GROUP.to_string()),
        id: new_id(),
        tasks: Vec::new(),
    };

    let out = list_to_json(&record)?;
    let summary = format!("created {} [{}]", record.name, record.group);
    records.push(record);
    // Report only once the list is on disk
    store::save_lists(data_path, &records)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", summary);
    }
    Ok(())
}
