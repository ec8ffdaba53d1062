use anyhow::Result;
use chatmark_config::{Config, OutputFormat};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    io::{self, Stdout, stdout},
    path::PathBuf,
    process,
};

mod messages;
mod render;

use messages::Message;

/// View chat messages with inline code and code blocks laid out for reading.
#[derive(Debug, Parser)]
#[command(name = "chatmark", version, about)]
struct Args {
    /// Message files or folders to show; `-` reads one message from stdin.
    /// Defaults to `messages_path` from the config file.
    paths: Vec<PathBuf>,

    /// Print to stdout instead of opening the viewer.
    #[arg(long)]
    print: bool,

    /// Output format for --print: styled, markup or json.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Use this config file instead of ~/.config/chatmark/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

struct App {
    config: Config,
    messages: Vec<Message>,
    list_state: ListState,
    current_lines: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(messages: Vec<Message>, config: Config) -> Self {
        let mut app = Self {
            config,
            messages,
            list_state: ListState::default(),
            current_lines: Vec::new(),
            scroll: 0,
        };

        // Select first message if available
        if !app.messages.is_empty() {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }

        app
    }

    fn next_message(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.messages.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_message(&mut self) {
        if self.messages.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.messages.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn scroll_down(&mut self, by: u16) {
        let max = u16::try_from(self.current_lines.len()).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(by).min(max.saturating_sub(1));
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        if let Some(message) = self
            .list_state
            .selected()
            .and_then(|index| self.messages.get(index))
        {
            log::debug!("Rendering message {}", message.name);
            self.current_lines = render::to_lines(&message.text, &self.config);
        }
    }
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from_path(&config_path) {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::info!("No config at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let paths = if !args.paths.is_empty() {
        args.paths.clone()
    } else if let Some(messages_path) = &config.messages_path {
        vec![messages_path.clone()]
    } else {
        eprintln!("Error: No message files provided and no messages_path configured");
        eprintln!("Usage: chatmark [--print] <message-file|folder|->...");
        eprintln!("Or set messages_path in {}", config_path.display());
        process::exit(1);
    };

    let messages = messages::load_paths(&paths)?;

    if args.print {
        let format = args.format.unwrap_or(config.format);
        let mut out = stdout().lock();
        return render::write_messages(&mut out, &messages, &config, format);
    }

    if messages.is_empty() {
        eprintln!("Error: No messages found in the given paths");
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(messages, config);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_message(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_message(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                KeyCode::Char('J') => app.scroll_down(1),
                KeyCode::Char('K') => app.scroll_up(1),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(rows[0]);

    // Message list panel
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|m| ListItem::new(Line::from(m.name.clone())))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    // Content panel
    let content = Paragraph::new(app.current_lines.clone())
        .block(Block::default().borders(Borders::ALL).title("Message"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgUp/PgDn, K/J: Scroll"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}
