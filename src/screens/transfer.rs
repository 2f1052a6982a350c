//! Transfer screen.
//!
//! Placeholder form matching the original wallet: the full transfer flow is
//! driven by the account layer and is not modeled here yet.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::account::AccountStore;
use crate::flow::WalletFlow;
use crate::styles::theme;

pub fn render<S: AccountStore>(frame: &mut Frame, area: Rect, flow: &WalletFlow<S>) {
    let t = theme();

    let layout = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    let symbol = flow.transfer_symbol().unwrap_or("?");
    let title = Paragraph::new(format!("{symbol} TRANSFER"))
        .alignment(Alignment::Center)
        .style(t.title_style());
    frame.render_widget(title, layout[0]);

    let hints = Paragraph::new("Esc: Back   x: Close")
        .alignment(Alignment::Center)
        .style(t.muted_style());
    frame.render_widget(hints, layout[2]);
}

pub fn handle_key<S: AccountStore>(flow: &mut WalletFlow<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => flow.pop(),
        KeyCode::Char('x') => flow.close_to_accounts(),
        _ => {}
    }
}
