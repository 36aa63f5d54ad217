//! Headless mode execution
//!
//! Loads once and prints the dashboard as plain text

use super::{
    SessionData,
    messages::{print_session_shutdown, print_session_starting},
};
use crate::dates::DateStyle;
use crate::logging::init_console_logger;
use crate::model::TransactionsResponse;
use crate::print_cmd_error;
use crate::ui::dashboard::view_model::{TABLE_HEADERS, balance_cards, transaction_rows};
use crate::workers::{DataLoader, LoadOutcome};
use std::error::Error;
use std::fmt::Write;
use tokio_util::sync::CancellationToken;

/// Width of a column: the longest cell, counted in characters.
fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or_default()
}

/// The dashboard as text: the three balance cards followed by the transactions table.
pub fn render_report(response: &TransactionsResponse, date_style: DateStyle) -> String {
    let mut out = String::new();

    for card in balance_cards(Some(&response.balance)) {
        let _ = writeln!(
            out,
            "{} {:<9} {:>16}",
            card.kind.icon(),
            card.kind.label(),
            card.amount
        );
    }
    out.push('\n');

    let rows = transaction_rows(&response.transactions, date_style);
    if rows.is_empty() {
        out.push_str("Nenhuma transação\n");
        return out;
    }

    let widths = [
        column_width(TABLE_HEADERS[0], rows.iter().map(|r| r.title.as_str())),
        column_width(TABLE_HEADERS[1], rows.iter().map(|r| r.price.as_str())),
        column_width(TABLE_HEADERS[2], rows.iter().map(|r| r.category.as_str())),
        column_width(TABLE_HEADERS[3], rows.iter().map(|r| r.date.as_str())),
    ];

    let mut push_line = |cells: [&str; 4]| {
        let line = format!(
            "{:<w0$}  {:>w1$}  {:<w2$}  {:<w3$}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
        let _ = writeln!(out, "{}", line.trim_end());
    };

    push_line(TABLE_HEADERS);
    for row in &rows {
        push_line([
            row.title.as_str(),
            row.price.as_str(),
            row.category.as_str(),
            row.date.as_str(),
        ]);
    }
    out
}

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console logging
/// 2. A single load, cancelled on Ctrl+C
/// 3. Printing the dashboard, or the failure
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - The dashboard was printed (or the run was interrupted)
/// * `Err` - The transactions could not be loaded
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    init_console_logger();
    print_session_starting("headless", &session.api_url());

    let cancel = CancellationToken::new();
    let loader = DataLoader::new(session.api.clone(), session.event_sender.clone());
    let (mut outcome_receiver, handle) = loader.spawn(cancel.clone());

    // Echo loader events until the outcome arrives or the user interrupts
    let outcome = loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                println!("{}", event);
            }
            outcome = &mut outcome_receiver => {
                break Some(outcome.unwrap_or_else(|_| {
                    LoadOutcome::Failed("The loader stopped without a result".to_string())
                }));
            }
            _ = tokio::signal::ctrl_c() => {
                cancel.cancel();
                break None;
            }
        }
    };
    let _ = handle.await;
    while let Ok(event) = session.event_receiver.try_recv() {
        println!("{}", event);
    }

    match outcome {
        Some(LoadOutcome::Loaded(response)) => {
            println!();
            print!("{}", render_report(&response, session.date_style));
            Ok(())
        }
        Some(LoadOutcome::Failed(message)) => {
            print_cmd_error!("Failed to load transactions", message.as_str());
            Err(message.into())
        }
        None => {
            print_session_shutdown();
            Ok(())
        }
    }
}
