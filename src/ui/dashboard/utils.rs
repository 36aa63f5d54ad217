//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::model::TransactionType;
use ratatui::prelude::Color;

/// Get a ratatui color for an activity event based on where it came from
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::Loader => Color::Cyan,
        Source::View => Color::LightBlue,
    }
}

/// Price color: income is green, outcome is red.
pub fn get_transaction_color(kind: TransactionType) -> Color {
    match kind {
        TransactionType::Income => Color::LightGreen,
        TransactionType::Outcome => Color::LightRed,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD HH:MM from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    let compact = match (parts.next(), parts.next()) {
        (Some(date_part), Some(time_part)) => date_part
            .get(5..10)
            .zip(time_part.get(0..5))
            .map(|(month_day, hour_min)| format!("{} {}", month_day, hour_min)),
        _ => None,
    };
    // Fallback to original timestamp if parsing fails
    compact.unwrap_or_else(|| timestamp.to_string())
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose reqwest error chains with cleaner messages
    if msg.contains("error sending request") && msg.contains("timed out") {
        return "Failed to fetch transactions: request timed out".to_string();
    }
    if msg.contains("error sending request") {
        return "Failed to fetch transactions: network error".to_string();
    }
    msg.to_string()
}
