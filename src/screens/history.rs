//! Transaction history screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::account::AccountStore;
use crate::flow::WalletFlow;
use crate::nav::WalletScreen;
use crate::screens::ScreenUi;
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};

pub fn render<S: AccountStore>(
    frame: &mut Frame,
    area: Rect,
    flow: &WalletFlow<S>,
    ui: &mut ScreenUi,
) {
    let ScreenUi::History { selected } = ui else {
        return;
    };
    let t = theme();
    let store = flow.store();

    if store.is_refreshing() {
        super::status::centered_text(frame, area, "Fetching history...");
        return;
    }

    let layout = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    let title = Paragraph::new("TRANSACTION HISTORY")
        .alignment(Alignment::Center)
        .style(t.title_style());
    frame.render_widget(title, layout[0]);

    let Some(history) = store.current_history() else {
        super::status::centered_text(frame, layout[1], "Temporary error, cannot display history...");
        return;
    };

    if history.is_empty() {
        super::status::centered_text(frame, layout[1], "No transactions found for this account.");
    } else {
        *selected = (*selected).min(history.len() - 1);
        let items: Vec<ListItem> = history
            .iter()
            .map(|entry| {
                let date = entry.date.format("%Y-%m-%d %H:%M");
                ListItem::new(format!("{}   {date}", entry.hash))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).border_style(t.border_style()))
            .style(t.text_style())
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        let mut state = ListState::default();
        state.select(Some(*selected));
        frame.render_stateful_widget(list, layout[1], &mut state);
    }

    let hints = Paragraph::new("Enter: View in explorer   Tab: Balances   Esc: Close")
        .alignment(Alignment::Center)
        .style(t.muted_style());
    frame.render_widget(hints, layout[2]);

    super::balances::render_tabs(frame, layout[3], flow);
}

pub fn handle_key<S: AccountStore>(flow: &mut WalletFlow<S>, ui: &mut ScreenUi, key: KeyEvent) {
    let ScreenUi::History { selected } = ui else {
        return;
    };
    let count = flow.store().current_history().map_or(0, <[_]>::len);

    match key.code {
        KeyCode::Up => *selected = selected.saturating_sub(1),
        KeyCode::Down if count > 0 => *selected = (*selected + 1).min(count - 1),
        KeyCode::Enter => {
            let entry = flow
                .store()
                .current_history()
                .and_then(|h| h.get(*selected).cloned());
            if let Some(entry) = entry {
                if entry.explorer_url.is_empty() {
                    flow.message("No explorer link known for this transaction", None);
                } else {
                    flow.message(format!("View transaction at:\n{}", entry.explorer_url), None);
                }
            }
        }
        KeyCode::Tab => flow.switch_tab(WalletScreen::Balances),
        KeyCode::Esc | KeyCode::Char('x') => flow.close_to_accounts(),
        _ => {}
    }
}
