//! Status-only screens: Loading, Sending, Confirming.

use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::account::AccountStore;
use crate::flow::WalletFlow;
use crate::nav::WalletScreen;
use crate::styles::theme;

/// Centered single-line status text.
pub fn centered_text(frame: &mut Frame, area: Rect, text: &str) {
    let t = theme();
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(t.text_style());
    frame.render_widget(paragraph, line_area);
}

pub fn render<S: AccountStore>(frame: &mut Frame, area: Rect, flow: &WalletFlow<S>) {
    let text = match flow.current_screen() {
        WalletScreen::Loading => {
            if flow.store().is_ready() {
                "Starting...".to_string()
            } else {
                flow.store().status_message()
            }
        }
        WalletScreen::Sending => "Sending transaction...".to_string(),
        WalletScreen::Confirming => format!(
            "Confirming transaction {}...",
            flow.tx_hash().unwrap_or("<unknown>")
        ),
        _ => return,
    };
    centered_text(frame, area, &text);
}
