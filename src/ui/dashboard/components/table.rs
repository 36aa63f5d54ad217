//! Transactions table component
//!
//! Renders the transaction list, or a message while there is nothing to list

use super::super::state::{DashboardState, LoadState};
use super::super::utils::get_transaction_color;
use super::super::view_model::{TABLE_HEADERS, transaction_rows};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, TableState, Wrap,
};

fn table_block() -> Block<'static> {
    Block::default()
        .title("TRANSAÇÕES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}

fn header_row() -> Row<'static> {
    Row::new(TABLE_HEADERS.map(Cell::from)).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
}

/// Message shown in place of the rows.
fn render_message(f: &mut Frame, area: Rect, lines: Vec<Line>) {
    let message = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(table_block());
    f.render_widget(message, area);
}

/// Render the transactions table.
pub fn render_transactions_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let transactions = match state.load_state() {
        LoadState::Loading => {
            render_message(f, area, vec![Line::from("Carregando transações...")]);
            return;
        }
        LoadState::Failed(message) => {
            render_message(
                f,
                area,
                vec![
                    Line::styled(message.clone(), Style::default().fg(Color::LightRed)),
                    Line::from(""),
                    Line::styled(
                        "[R] Tentar novamente",
                        Style::default().fg(Color::Cyan),
                    ),
                ],
            );
            return;
        }
        LoadState::Loaded(response) => &response.transactions,
    };

    if transactions.is_empty() {
        render_message(f, area, vec![Line::from("Nenhuma transação")]);
        return;
    }

    let rows = transaction_rows(transactions, state.date_style)
        .into_iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.title),
                Cell::from(row.price).style(Style::default().fg(get_transaction_color(row.kind))),
                Cell::from(row.category),
                Cell::from(row.date),
            ])
        });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(header_row())
    .block(table_block())
    .row_highlight_style(
        Style::default()
            .bg(Color::Rgb(40, 44, 52))
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(state.selected_index());
    f.render_stateful_widget(table, area, &mut table_state);
}
