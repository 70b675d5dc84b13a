//! Interactive demo for the gridfield widgets: an email field, a password
//! field with a reveal icon, a read-only field and a grid table, all driven
//! by one [`Host`] per terminal session.

use std::{
    fs::{self, File},
    io::Stdout,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridfield_tui::{
    FrameContext, GridTable, Host, InputField, stack,
    theme::{self, Theme, catalog},
};
use ratatui::{Terminal, layout::Size, prelude::CrosstermBackend};
use serde_json::{Value, json};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type Term = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Parser)]
#[command(name = "gridfield", version, about = "Try the input field and grid table widgets in your terminal")]
struct Args {
    /// Theme id or alias; GRIDFIELD_THEME takes precedence.
    #[arg(long)]
    theme: Option<String>,

    /// JSON file holding the table rows: an array of objects, or an object
    /// whose first array field holds them.
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Print the available themes and exit.
    #[arg(long)]
    list_themes: bool,

    /// Where tracing output is written while the terminal is in raw mode.
    #[arg(long, value_name = "FILE", default_value = "gridfield.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.list_themes {
        print_themes();
        return Ok(());
    }
    init_tracing(&args.log_file)?;

    let loaded = theme::load(args.theme.as_deref());
    info!(theme = loaded.definition.id, "starting demo");
    let rows = match &args.data {
        Some(path) => read_rows(path)?,
        None => sample_rows(),
    };
    let mut demo = Demo::new(loaded.theme, rows)?;

    let mut terminal = setup_terminal()?;
    let outcome = run(&mut terminal, &mut demo);
    cleanup_terminal(&mut terminal)?;
    outcome
}

fn print_themes() {
    for definition in catalog::all() {
        let mut flags = Vec::new();
        if definition.is_high_contrast {
            flags.push("high contrast");
        }
        if definition.is_ansi_fallback {
            flags.push("256 colors");
        }
        let flags = if flags.is_empty() { String::new() } else { format!(" ({})", flags.join(", ")) };
        println!("{:<20} {:<24} {}{flags}", definition.id, definition.label, definition.description);
    }
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn read_rows(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn sample_rows() -> Value {
    json!([
        {"name": "billing-api", "region": "us", "dynos": 4, "maintenance": false},
        {"name": "billing-web", "region": "us", "dynos": 2, "maintenance": false},
        {"name": "reports", "region": "eu", "dynos": 1, "maintenance": true},
        {"name": "sandbox", "region": "eu", "dynos": 0, "maintenance": null},
    ])
}

struct Demo {
    email: InputField,
    password: InputField,
    account: InputField,
    table: GridTable,
}

impl Demo {
    fn new(theme: Arc<dyn Theme>, rows: Value) -> Result<Self> {
        let mut email = InputField::new(Arc::clone(&theme), "Email", None);
        let prefix = theme.hint_style();
        email.set_leading(move |ctx| {
            let width = ctx.set_string(0, 0, "@ ", prefix);
            Size::new(width, 1)
        });

        let mut password = InputField::new(Arc::clone(&theme), "Password", None);
        password
            .password()
            .set_on_icon_click(|| debug!("reveal icon clicked"));

        let mut account = InputField::new(Arc::clone(&theme), "", Some("acct-0042"));
        account.read_only();

        let mut table = GridTable::new(theme);
        table.set_json(rows).context("table data must be a list of objects")?;

        Ok(Self {
            email,
            password,
            account,
            table,
        })
    }

    fn layout(&mut self, ctx: &mut FrameContext<'_>) -> Size {
        stack(
            ctx,
            &mut [&mut self.email, &mut self.password, &mut self.account, &mut self.table],
            1,
        )
    }
}

/// Put the terminal into raw mode and enter the alternate screen with mouse
/// reporting enabled.
fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draws a frame, then blocks for input and feeds everything that arrived
/// to the host before drawing again.
fn run(terminal: &mut Term, demo: &mut Demo) -> Result<()> {
    let mut host = Host::new();
    loop {
        terminal.draw(|frame| {
            host.frame(frame.buffer_mut(), |ctx| demo.layout(ctx));
        })?;

        let mut next = Some(event::read().context("failed to read terminal input")?);
        while let Some(event) = next.take() {
            if is_quit(&event) {
                info!(email = demo.email.text(), "demo finished");
                return Ok(());
            }
            host.push(event);
            if event::poll(Duration::ZERO)? {
                next = Some(event::read()?);
            }
        }
    }
}

fn is_quit(event: &Event) -> bool {
    let Event::Key(key) = event else {
        return false;
    };
    key.kind == KeyEventKind::Press
        && (key.code == KeyCode::Esc || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)))
}
