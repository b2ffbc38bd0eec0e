use clap::Parser;
use tudo::cli::commands::Cli;
use tudo::cli::handlers;
use tudo::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config_io::config_path);
    let config = match config_io::read_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let data_path = cli
        .data
        .clone()
        .or_else(|| config.storage.path.clone())
        .unwrap_or_else(config_io::default_data_path);

    logging::init_logging(&config.log, &data_path);

    let result = match cli.command {
        // No subcommand → launch TUI
        None => tudo::tui::run(&config, &data_path),
        Some(_) => handlers::dispatch(cli, &data_path),
    };
    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
