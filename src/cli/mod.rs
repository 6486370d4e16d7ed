use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::fs::File;
use std::io::{stdin, stdout, BufReader, Write};
use std::path::Path;

use crate::application::ShopService;
use crate::domain::{parse_cents, MenuItem};

pub mod logging;
pub mod session;

pub use session::{parse_order_spec, render_report, write_menu, Session, SessionCommand};

/// Barista - Coffee Shop Order Ledger
#[derive(Parser)]
#[command(name = "barista")]
#[command(about = "Take coffee orders and report on the day's sales")]
#[command(version)]
pub struct Cli {
    /// JSON menu file replacing the house menu
    #[arg(short, long, global = true)]
    pub menu: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the menu with prices
    Menu,

    /// Check whether a drink is on the menu
    Check {
        /// Drink name (case-sensitive)
        drink: String,
    },

    /// Place orders and print the daily report
    Report {
        /// Order as "CUSTOMER:DRINK" (repeatable)
        #[arg(short, long = "order")]
        orders: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Run an order session from a script file or stdin
    Session {
        /// Script file (stdin if omitted)
        #[arg(short, long)]
        script: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// One entry of a menu file: `{ "name": "Latte", "price": "4.00" }`
#[derive(Debug, Deserialize)]
struct MenuFileEntry {
    name: String,
    price: String,
}

/// Load and validate a custom menu from a JSON file.
pub fn load_menu(path: &Path) -> Result<Vec<MenuItem>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open menu file '{}'", path.display()))?;
    let entries: Vec<MenuFileEntry> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse menu file '{}'", path.display()))?;

    entries
        .into_iter()
        .map(|entry| {
            let price = parse_cents(&entry.price).with_context(|| {
                format!("Invalid price '{}' for '{}'", entry.price, entry.name)
            })?;
            Ok(MenuItem::new(entry.name, price))
        })
        .collect()
}

impl Cli {
    fn open_service(&self) -> Result<ShopService> {
        match &self.menu {
            Some(path) => {
                let items = load_menu(Path::new(path))?;
                tracing::debug!(items = items.len(), path = %path, "Loaded custom menu");
                Ok(ShopService::with_menu(items)?)
            }
            None => Ok(ShopService::new()),
        }
    }

    pub fn run(self) -> Result<()> {
        logging::init(self.verbose);
        let service = self.open_service()?;
        let mut out = stdout().lock();

        match self.command {
            Commands::Menu => {
                write_menu(&service, &mut out)?;
            }

            Commands::Check { drink } => match service.check_availability(&drink) {
                Some(availability) => writeln!(out, "{}", availability)?,
                None => writeln!(out, "No drink given.")?,
            },

            Commands::Report { orders, format } => {
                for spec in &orders {
                    let (customer, drink) = parse_order_spec(spec)?;
                    service
                        .submit_order(&customer, &drink)
                        .with_context(|| format!("Order '{}' was rejected", spec))?;
                }
                write!(out, "{}", render_report(&service, format)?)?;
            }

            Commands::Session { script } => {
                let summary = match script {
                    Some(path) => {
                        let file = File::open(&path)
                            .with_context(|| format!("Failed to open script '{}'", path))?;
                        Session::new(&service).run(BufReader::new(file), &mut out)?
                    }
                    None => Session::new(&service).run(stdin().lock(), &mut out)?,
                };

                if self.verbose {
                    eprintln!(
                        "Session ended: {} accepted, {} rejected, {} invalid line(s)",
                        summary.accepted, summary.rejected, summary.invalid_lines
                    );
                }
            }
        }

        out.flush()?;
        Ok(())
    }
}
