use anyhow::{anyhow, bail, Result};
use chrono::Local;
use std::io::{BufRead, ErrorKind, Write};
use std::ops::ControlFlow;

use crate::application::ShopService;
use crate::domain::format_cents;
use crate::io::Exporter;

use super::ReportFormat;

const HELP: &str = "\
Commands:
  order <customer>: <drink>   Place an order
  check <drink>               Check whether a drink is on the menu
  report [json]               Print the daily report
  menu                        List the menu
  export                      Write all orders as CSV
  help                        Show this help
  quit | exit                 End the session";

/// One line of a session script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Order { customer: String, drink: String },
    Check(String),
    Report(ReportFormat),
    Menu,
    Export,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a script line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_lowercase().as_str() {
            "order" => {
                let (customer, drink) = parse_order_spec(rest)?;
                SessionCommand::Order { customer, drink }
            }
            "check" => SessionCommand::Check(rest.to_string()),
            "report" => match rest.to_lowercase().as_str() {
                "" | "text" => SessionCommand::Report(ReportFormat::Text),
                "json" => SessionCommand::Report(ReportFormat::Json),
                other => bail!("Unknown report format '{}'. Use: text, json", other),
            },
            "menu" => SessionCommand::Menu,
            "export" => SessionCommand::Export,
            "help" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => bail!("Unknown command '{}'. Type 'help' for a list", other),
        };
        Ok(Some(command))
    }
}

/// Split `"<customer>: <drink>"` into its trimmed halves.
///
/// The customer may be blank here; the ledger decides whether it is valid.
pub fn parse_order_spec(spec: &str) -> Result<(String, String)> {
    let (customer, drink) = spec
        .split_once(':')
        .ok_or_else(|| anyhow!("Invalid order '{}'. Use '<customer>: <drink>'", spec))?;
    Ok((customer.trim().to_string(), drink.trim().to_string()))
}

/// Counters for a finished session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub invalid_lines: usize,
}

/// Runs session commands against a service, writing every response to `out`.
pub struct Session<'a> {
    service: &'a ShopService,
}

impl<'a> Session<'a> {
    pub fn new(service: &'a ShopService) -> Self {
        Self { service }
    }

    /// Execute commands from `input` until it ends or a quit command is read.
    /// Bad lines and rejected orders are reported and skipped.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        for (number, line) in input.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(err) if err.kind() == ErrorKind::InvalidData => {
                    writeln!(out, "error (line {}): {}", number + 1, err)?;
                    summary.invalid_lines += 1;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            let command = match SessionCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(out, "error (line {}): {}", number + 1, err)?;
                    summary.invalid_lines += 1;
                    continue;
                }
            };

            if self.execute(command, out, &mut summary)?.is_break() {
                break;
            }
        }

        Ok(summary)
    }

    /// Run one command. `Break` ends the session.
    fn execute<W: Write>(
        &self,
        command: SessionCommand,
        out: &mut W,
        summary: &mut SessionSummary,
    ) -> Result<ControlFlow<()>> {
        match command {
            SessionCommand::Order { customer, drink } => {
                match self.service.submit_order(&customer, &drink) {
                    Ok(receipt) => {
                        writeln!(out, "{}", receipt)?;
                        summary.accepted += 1;
                    }
                    Err(err) => {
                        writeln!(out, "error: {}", err)?;
                        summary.rejected += 1;
                    }
                }
            }
            SessionCommand::Check(drink) => match self.service.check_availability(&drink) {
                Some(availability) => writeln!(out, "{}", availability)?,
                None => writeln!(out, "No drink given.")?,
            },
            SessionCommand::Report(format) => {
                write!(out, "{}", render_report(self.service, format)?)?;
            }
            SessionCommand::Menu => write_menu(self.service, out)?,
            SessionCommand::Export => {
                Exporter::new(self.service).export_orders_csv(&mut *out)?;
            }
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }
}

/// Render today's report in the requested format. Output ends with a newline.
pub fn render_report(service: &ShopService, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(service.generate_daily_report()),
        ReportFormat::Json => {
            let report = service.daily_report(Local::now().date_naive());
            Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
        }
    }
}

pub fn write_menu<W: Write>(service: &ShopService, out: &mut W) -> Result<()> {
    let menu = service.menu();
    writeln!(out, "{:<20} {:>8}", "DRINK", "PRICE")?;
    writeln!(out, "{}", "-".repeat(29))?;
    for item in menu.items() {
        writeln!(out, "{:<20} {:>8}", item.name, format_cents(item.price))?;
    }
    Ok(())
}
