//! Dashboard header component
//!
//! Renders the title, the API being used and the load status

use super::super::state::{DashboardState, LoadState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Color of the status badge for a load state.
fn status_color(state: &LoadState) -> Color {
    match state {
        LoadState::Loading => Color::LightYellow,
        LoadState::Loaded(_) => Color::LightGreen,
        LoadState::Failed(_) => Color::LightRed,
    }
}

/// Render header with title and load status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("GO FINANCES v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Spinner only while the request is in flight
    let load_state = state.load_state();
    let spinner = match load_state {
        LoadState::Loading => ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"][state.tick % 10],
        LoadState::Loaded(_) | LoadState::Failed(_) => "●",
    };
    let uptime = state.start_time.elapsed().as_secs();
    let status = Line::from(vec![
        Span::styled(
            format!(
                "API: {} | {}m {:02}s | ",
                state.environment.api_url(),
                uptime / 60,
                uptime % 60
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{} {}", spinner, load_state.label()),
            Style::default()
                .fg(status_color(load_state))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        header_chunks[1],
    );
}
