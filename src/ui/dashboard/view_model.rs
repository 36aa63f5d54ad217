//! Display-ready values for the dashboard
//!
//! Turns the API model into the strings the cards and the table show, independent of any
//! terminal backend so headless output and the TUI agree.

use crate::currency::{ZERO_PLACEHOLDER, format_brl};
use crate::dates::{DateStyle, format_created_at};
use crate::model::{Balance, Transaction, TransactionType};

/// Column titles of the transactions table.
pub const TABLE_HEADERS: [&str; 4] = ["Título", "Preço", "Categoria", "Data"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Income,
    Outcome,
    Total,
}

impl CardKind {
    pub const ALL: [CardKind; 3] = [CardKind::Income, CardKind::Outcome, CardKind::Total];

    pub fn label(&self) -> &'static str {
        match self {
            CardKind::Income => "Entradas",
            CardKind::Outcome => "Saídas",
            CardKind::Total => "Total",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CardKind::Income => "↑",
            CardKind::Outcome => "↓",
            CardKind::Total => "$",
        }
    }

    fn amount(&self, balance: &Balance) -> Option<f64> {
        match self {
            CardKind::Income => balance.income,
            CardKind::Outcome => balance.outcome,
            CardKind::Total => balance.total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceCard {
    pub kind: CardKind,
    pub amount: String,
}

/// The text of a card: the formatted amount when it is a truthy number, the zero placeholder
/// otherwise. A real balance of exactly zero therefore looks the same as "not loaded".
pub fn card_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value != 0.0 && !value.is_nan() => format_brl(value),
        _ => ZERO_PLACEHOLDER.to_string(),
    }
}

/// The three summary cards, in display order. `None` means nothing has been loaded.
pub fn balance_cards(balance: Option<&Balance>) -> [BalanceCard; 3] {
    CardKind::ALL.map(|kind| BalanceCard {
        kind,
        amount: card_amount(balance.and_then(|b| kind.amount(b))),
    })
}

/// One table row, keyed by the transaction id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub key: String,
    pub title: String,
    pub price: String,
    pub kind: TransactionType,
    pub category: String,
    pub date: String,
}

/// Income shows the bare amount, outcome gets a `- ` prefix.
pub fn price_text(transaction: &Transaction) -> String {
    let amount = format_brl(transaction.magnitude());
    match transaction.kind {
        TransactionType::Income => amount,
        TransactionType::Outcome => format!("- {}", amount),
    }
}

/// Rows in the same order as the input list.
pub fn transaction_rows(transactions: &[Transaction], style: DateStyle) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|transaction| TransactionRow {
            key: transaction.id.clone(),
            title: transaction.title.clone(),
            price: price_text(transaction),
            kind: transaction.kind,
            category: transaction.category.title.clone(),
            date: format_created_at(&transaction.created_at, style),
        })
        .collect()
}
