//! `bluemedix` — terminal admin console for the BlueMedix demo store.
//!
//! # Usage
//!
//! ```
//! bluemedix                                   # interactive console
//! bluemedix --api-url https://fakestoreapi.com
//! bluemedix users add --name "Om Rane" --email om@bluemedix.com \
//!   --username omrane --password secret
//! bluemedix products remove 6
//! ```

mod app;
mod ui;

use std::{io, sync::Arc, time::Duration};

use anyhow::{Context, Result, bail};
use app::App;
use bluemedix_core::{
  controller::{ListController, Severity},
  entity::Draft as _,
  product::{Product, ProductDraft},
  user::{User, UserDraft},
};
use bluemedix_store_http::{DEFAULT_BASE_URL, HttpStore};
use clap::{Parser, Subcommand};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "bluemedix",
  about = "Terminal admin console for the BlueMedix demo store"
)]
struct Args {
  /// Path to a TOML config file (api_url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the REST backend (default: https://fakestoreapi.com).
  #[arg(long, env = "BLUEMEDIX_API_URL")]
  api_url: Option<String>,

  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Manage staff accounts.
  Users {
    #[command(subcommand)]
    action: UserAction,
  },
  /// Manage pharmaceutical products.
  Products {
    #[command(subcommand)]
    action: ProductAction,
  },
}

#[derive(Subcommand, Debug)]
enum UserAction {
  /// Create a staff account.
  Add {
    /// Display name; split into first/last on the wire.
    #[arg(long)]
    name:     String,
    #[arg(long)]
    email:    String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    phone:    Option<String>,
  },
  /// Replace the account with the given id.
  Update {
    id:       u64,
    #[arg(long)]
    name:     String,
    #[arg(long)]
    email:    String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    phone:    Option<String>,
  },
  /// Delete the account with the given id.
  Remove { id: u64 },
}

#[derive(Subcommand, Debug)]
enum ProductAction {
  /// Create a product.
  Add {
    #[arg(long)]
    title:       String,
    /// Decimal price, e.g. 85 or 449.50.
    #[arg(long)]
    price:       String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    category:    String,
    #[arg(long)]
    image:       String,
  },
  /// Replace the product with the given id.
  Update {
    id:          u64,
    #[arg(long)]
    title:       String,
    #[arg(long)]
    price:       String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    category:    String,
    #[arg(long)]
    image:       String,
  },
  /// Delete the product with the given id.
  Remove { id: u64 },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  api_url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides the default origin.
  let api_url = args
    .api_url
    .or_else(|| (!file_cfg.api_url.is_empty()).then(|| file_cfg.api_url.clone()))
    .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

  init_tracing(args.command.is_none())?;

  let store = Arc::new(HttpStore::new(api_url).context("building HTTP client")?);

  match args.command {
    Some(command) => run_command(store, command).await,
    None => run_tui(store).await,
  }
}

/// In console mode the alternate screen owns the terminal, so logs go to a
/// file; one-shot commands log to stderr.
fn init_tracing(tui: bool) -> Result<()> {
  let filter = EnvFilter::from_default_env();
  if tui {
    let path = std::env::temp_dir().join("bluemedix.log");
    let file = std::fs::File::create(&path)
      .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(file)
      .with_ansi(false)
      .init();
  } else {
    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(io::stderr)
      .init();
  }
  Ok(())
}

// ─── One-shot commands ────────────────────────────────────────────────────────

async fn run_command(store: Arc<HttpStore>, command: Command) -> Result<()> {
  match command {
    Command::Users { action } => {
      let mut ctrl = ListController::<User, _>::new(store);
      match action {
        UserAction::Add { name, email, username, password, phone } => {
          let draft = UserDraft { name, email, username, password, phone };
          draft.validate()?;
          let ok = ctrl.create(&draft).await;
          finish(&mut ctrl, ok)
        }
        UserAction::Update { id, name, email, username, password, phone } => {
          let draft = UserDraft { name, email, username, password, phone };
          draft.validate()?;
          let ok = ctrl.update(id, &draft).await;
          finish(&mut ctrl, ok)
        }
        UserAction::Remove { id } => {
          let ok = ctrl.remove(id).await;
          finish(&mut ctrl, ok)
        }
      }
    }
    Command::Products { action } => {
      let mut ctrl = ListController::<Product, _>::new(store);
      match action {
        ProductAction::Add { title, price, description, category, image } => {
          let draft = ProductDraft { title, price, description, category, image };
          draft.validate()?;
          let ok = ctrl.create(&draft).await;
          finish(&mut ctrl, ok)
        }
        ProductAction::Update { id, title, price, description, category, image } => {
          let draft = ProductDraft { title, price, description, category, image };
          draft.validate()?;
          let ok = ctrl.update(id, &draft).await;
          finish(&mut ctrl, ok)
        }
        ProductAction::Remove { id } => {
          let ok = ctrl.remove(id).await;
          finish(&mut ctrl, ok)
        }
      }
    }
  }
}

/// Print the operation's notification and map failure to a non-zero exit.
fn finish<E, S>(ctrl: &mut ListController<E, S>, ok: bool) -> Result<()>
where
  E: bluemedix_core::entity::Entity,
  S: bluemedix_core::store::RemoteStore<E>,
{
  if let Some(notice) = ctrl.take_notice() {
    match notice.severity {
      Severity::Success => println!("{}", notice.message),
      Severity::Error => eprintln!("{}", notice.message),
    }
  }
  if ok { Ok(()) } else { bail!("operation failed") }
}

// ─── Interactive console ──────────────────────────────────────────────────────

async fn run_tui(store: Arc<HttpStore>) -> Result<()> {
  let mut app = App::new(store);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Initial fetch for both tabs. A failure is not fatal: the load error is
  // rendered in place of the list.
  app.load_all().await;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(evt) = maybe_event {
      match evt {
        Event::Key(key) => {
          if !app.handle_key(key).await {
            break;
          }
        }
        Event::Resize(_, _) => {
          // Terminal will redraw on next iteration.
        }
        _ => {}
      }
    }
  }

  Ok(())
}
