use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::store::{self, StoreError};
use crate::model::{Config, TaskListRecord};

use super::filter::{self, ListFilter};
use super::input;
use super::render;
use super::tag::TagStyles;
use super::task_list::{Mode, TaskList};
use super::theme::Theme;

/// Main application state: a board of task lists
pub struct App {
    pub lists: Vec<TaskList>,
    /// Index into `lists` of the list receiving keys
    pub focus: usize,
    /// Open `/` prompt, if any
    pub filter_prompt: Option<ListFilter>,
    /// Applied filter query (empty = show all)
    pub filter_query: String,
    pub theme: Theme,
    pub tag_styles: TagStyles,
    pub show_key_hints: bool,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub should_quit: bool,
    pub data_path: PathBuf,
}

impl App {
    pub fn new(lists: Vec<TaskList>, config: &Config, data_path: PathBuf) -> Self {
        let theme = Theme::from_config(&config.ui);
        let tag_styles = TagStyles::from_theme(&theme);
        App {
            lists,
            focus: 0,
            filter_prompt: None,
            filter_query: String::new(),
            theme,
            tag_styles,
            show_key_hints: config.ui.show_key_hints,
            status_message: None,
            status_is_error: false,
            should_quit: false,
            data_path,
        }
    }

    /// Load every list from the data file
    pub fn load(config: &Config, data_path: &Path) -> Result<Self, StoreError> {
        let records = store::load_lists(data_path)?;
        let lists = records
            .iter()
            .map(|record| {
                TaskList::from_record(record).map_err(|source| StoreError::InvalidRecord {
                    list: record.name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(path = %data_path.display(), lists = lists.len(), "loaded lists");
        Ok(App::new(lists, config, data_path.to_path_buf()))
    }

    pub fn export(&self) -> Vec<TaskListRecord> {
        self.lists.iter().map(TaskList::export).collect()
    }

    pub fn save(&mut self) -> Result<(), StoreError> {
        store::save_lists(&self.data_path, &self.export())
    }

    /// Save and report the outcome in the status row
    pub fn save_with_status(&mut self) -> bool {
        match self.save() {
            Ok(()) => {
                self.status_message = Some(format!("saved {} lists", self.lists.len()));
                self.status_is_error = false;
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "save failed");
                self.status_message = Some(format!("save failed: {}", e));
                self.status_is_error = true;
                false
            }
        }
    }

    /// The query currently narrowing the board: the open prompt's text, or
    /// the last applied query.
    pub fn active_query(&self) -> &str {
        match &self.filter_prompt {
            Some(prompt) => prompt.query(),
            None => &self.filter_query,
        }
    }

    fn active_regex(&self) -> Option<Regex> {
        filter::query_regex(self.active_query())
    }

    /// Indices of lists passing the filter, in board order
    pub fn visible(&self) -> Vec<usize> {
        let re = self.active_regex();
        (0..self.lists.len())
            .filter(|&i| filter::list_matches(&self.lists[i], re.as_ref()))
            .collect()
    }

    pub fn focused_list(&self) -> Option<&TaskList> {
        if self.visible().contains(&self.focus) {
            self.lists.get(self.focus)
        } else {
            None
        }
    }

    pub fn focused_list_mut(&mut self) -> Option<&mut TaskList> {
        if self.visible().contains(&self.focus) {
            self.lists.get_mut(self.focus)
        } else {
            None
        }
    }

    pub fn is_editing(&self) -> bool {
        self.focused_list()
            .is_some_and(|list| list.mode() == Mode::Edit)
    }

    /// Move list focus by `delta` among visible lists, wrapping around
    pub fn cycle_focus(&mut self, delta: isize) {
        let visible = self.visible();
        if visible.is_empty() {
            return;
        }
        let current = visible.iter().position(|&i| i == self.focus).unwrap_or(0);
        let len = visible.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        self.focus = visible[next];
    }

    /// Keep focus on a visible list after the filter changes
    pub fn clamp_focus(&mut self) {
        let visible = self.visible();
        if !visible.contains(&self.focus)
            && let Some(&first) = visible.first()
        {
            self.focus = first;
        }
    }

    /// Append a fresh list and focus it
    pub fn new_list(&mut self) {
        let list = TaskList::new();
        tracing::info!(list = %list.id(), "created list");
        self.lists.push(list);
        self.focus = self.lists.len() - 1;
        if !self.visible().contains(&self.focus) {
            self.filter_query.clear();
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config, data_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::load(config, data_path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
