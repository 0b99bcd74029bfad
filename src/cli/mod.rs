use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::application::PropertyLedger;
use crate::domain::Catalog;
use crate::io::load_catalog_file;

mod render;
mod session;

pub use render::*;
pub use session::Session;

/// Frontdesk - Hotel front desk
#[derive(Parser)]
#[command(name = "frontdesk")]
#[command(about = "Register guests, check them in and out, take orders and settle bills")]
#[command(version)]
pub struct Cli {
    /// JSON catalog with rooms and menu (defaults to the built-in hotel)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an interactive front-desk session (default)
    Session,

    /// Print the menu
    Menu,

    /// List available rooms
    Rooms {
        /// Only rooms of this class (e.g. "Deluxe")
        #[arg(short = 't', long = "type")]
        room_type: Option<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let catalog = match &self.catalog {
            Some(path) => load_catalog_file(path)?,
            None => Catalog::standard(),
        };
        let mut ledger = PropertyLedger::new(catalog);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command.unwrap_or(Commands::Session) {
            Commands::Session => {
                let stdin = io::stdin();
                Session::new(&mut ledger, stdin.lock(), &mut out).run()?;
            }

            Commands::Menu => {
                write_menu(&ledger, &mut out)?;
            }

            Commands::Rooms { room_type } => {
                write_available_rooms(&ledger, room_type.as_deref(), &mut out)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

/// Install the log subscriber. `RUST_LOG` wins; otherwise `--verbose`
/// shows debug events from this crate. Logs go to stderr.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "frontdesk=debug"
    } else {
        "frontdesk=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
