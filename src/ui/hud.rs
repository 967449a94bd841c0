use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::{THEME, Theme};
use crate::game::GameState;

/// Supplemental values displayed next to the session state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub high_score: u32,
}

/// Renders the one-line score display and returns the play area above it.
///
/// The line is redrawn every frame, so any score change and every reset is
/// reflected immediately.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: HudInfo) -> Rect {
    let [play_area, score_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state.score, info.high_score, &THEME))
            .alignment(Alignment::Center),
        score_area,
    );

    play_area
}

fn score_line(score: u32, high_score: u32, theme: &Theme) -> Line<'static> {
    let score_style = Style::default().fg(theme.hud_score);
    let muted_style = Style::default().fg(theme.hud_muted);

    Line::from(vec![
        Span::styled("Score: ", muted_style),
        Span::styled(score.to_string(), score_style),
        Span::styled("  │  Hi: ", muted_style),
        Span::styled(high_score.to_string(), score_style),
    ])
}
