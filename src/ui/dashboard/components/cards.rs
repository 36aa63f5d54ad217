//! Balance cards component
//!
//! Renders the Entradas, Saídas and Total summary cards side by side

use super::super::state::DashboardState;
use super::super::view_model::{BalanceCard, CardKind, balance_cards};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

fn card_color(kind: CardKind) -> Color {
    match kind {
        CardKind::Income => Color::LightGreen,
        CardKind::Outcome => Color::LightRed,
        CardKind::Total => Color::LightYellow,
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &BalanceCard, with_background_color: bool) {
    let color = card_color(card.kind);
    let mut block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::raw(card.kind.label()),
            Span::raw(" "),
            Span::styled(card.kind.icon(), Style::default().fg(color)),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    // The total card is the highlighted one
    block = match card.kind {
        CardKind::Total if with_background_color => block
            .border_type(BorderType::Thick)
            .style(Style::default().bg(Color::Rgb(40, 36, 20))),
        CardKind::Total => block.border_type(BorderType::Thick),
        CardKind::Income | CardKind::Outcome => block.border_type(BorderType::Rounded),
    };

    let amount = Paragraph::new(card.amount.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(block);
    f.render_widget(amount, area);
}

/// Render the three balance cards.
pub fn render_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = balance_cards(state.load_state().balance());
    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        render_card(f, *chunk, card, state.with_background_color);
    }
}
