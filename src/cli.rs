use std::fmt::Write as _;

use anyhow::{bail, Context, Result};

use crate::board::icons::{icon_for, status_icon, ticket_priority_icon};
use crate::board::{self, heading_for, Group};
use crate::config::AppConfig;
use crate::model::display::{GroupingMode, OrderingMode};
use crate::prefs::file::FilePreferenceStore;
use crate::prefs::Preferences;
use crate::source::http::HttpTicketSource;
use crate::source::TicketSource;
use crate::ui::theme::icon_glyph;

/// Options for `ticketboard print`. Unset fields fall back to the saved
/// preferences; nothing given here is written back.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PrintArgs {
    pub grouping: Option<GroupingMode>,
    pub ordering: Option<OrderingMode>,
}

/// Fetch once and print the board as plain text.
pub async fn handle_print(args: &[String], config: &AppConfig) -> Result<()> {
    let args = parse_print_args(args)?;

    let source = HttpTicketSource::new(config.endpoint(), config.timeout())?;
    let snapshot = source
        .fetch_snapshot()
        .await
        .context("Failed to fetch tickets")?;

    let prefs = Preferences::load(Box::new(FilePreferenceStore::new()));
    let grouping = args.grouping.or(prefs.grouping());
    let ordering = args.ordering.or(prefs.ordering());

    let groups = board::transform(&snapshot.tickets, grouping, ordering);
    if groups.is_empty() {
        println!("No grouping selected. Pass -g ByUser|ByPriority|ByStatus or pick one in the TUI.");
        return Ok(());
    }
    print!("{}", format_board(&groups));
    Ok(())
}

/// Parse `print` arguments.
///
/// Supported forms:
///   ticketboard print
///   ticketboard print -g ByStatus
///   ticketboard print --group ByUser --order Title
pub fn parse_print_args(args: &[String]) -> Result<PrintArgs> {
    let mut parsed = PrintArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "-g" | "--group" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("Missing value for -g/--group flag");
                };
                parsed.grouping = Some(GroupingMode::parse(value).with_context(|| {
                    format!("Unknown grouping '{value}' (expected ByUser, ByPriority or ByStatus)")
                })?);
            }
            "-o" | "--order" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("Missing value for -o/--order flag");
                };
                parsed.ordering = Some(OrderingMode::parse(value).with_context(|| {
                    format!("Unknown ordering '{value}' (expected Priority or Title)")
                })?);
            }
            other => bail!("Unexpected argument '{other}'"),
        }
        i += 1;
    }

    Ok(parsed)
}

pub fn format_board(groups: &[Group<'_>]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(
            out,
            "{} {} ({})",
            icon_glyph(icon_for(&group.key)),
            heading_for(&group.key),
            group.tickets.len()
        );
        for ticket in &group.tickets {
            let _ = write!(
                out,
                "  {} {:<8} {} [{}]",
                icon_glyph(ticket_priority_icon(ticket.priority)),
                ticket.id,
                ticket.title,
                icon_glyph(status_icon(&ticket.status)),
            );
            if !ticket.tag.is_empty() {
                let _ = write!(out, " {}", ticket.tag);
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

pub fn print_help() {
    println!("ticketboard: terminal kanban view of remote tickets\n");
    println!("USAGE:");
    println!("  ticketboard               Launch the TUI board");
    println!("  ticketboard print         Fetch once and print the board");
    println!("  ticketboard help          Show this message");
    println!();
    println!("PRINT OPTIONS:");
    println!("  -g, --group <mode>   ByUser, ByPriority or ByStatus (this run only)");
    println!("  -o, --order <mode>   Priority or Title (this run only)");
    println!();
    println!("Config: ~/.ticketboard/config.toml (endpoint, timeout_secs, log_level)");
}
