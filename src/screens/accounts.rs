//! Accounts screen: pick an account to open, or jump to settings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::account::AccountStore;
use crate::flow::WalletFlow;
use crate::screens::ScreenUi;
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};

pub fn render<S: AccountStore>(
    frame: &mut Frame,
    area: Rect,
    flow: &WalletFlow<S>,
    ui: &mut ScreenUi,
) {
    let ScreenUi::Accounts { selected } = ui else {
        return;
    };
    let t = theme();

    let layout = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    let title = Paragraph::new("ACCOUNTS")
        .alignment(Alignment::Center)
        .style(t.title_style());
    frame.render_widget(title, layout[0]);

    let accounts = flow.store().accounts();
    if accounts.is_empty() {
        super::status::centered_text(frame, layout[1], "No accounts available");
    } else {
        *selected = (*selected).min(accounts.len() - 1);
        let items: Vec<ListItem> = accounts
            .iter()
            .map(|account| {
                let marker = if account.is_protected() { " [locked]" } else { "" };
                ListItem::new(format!("{}{marker}", account.display_name))
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

    let hints = Paragraph::new("Enter: Open   s: Settings   q: Quit")
        .alignment(Alignment::Center)
        .style(t.muted_style());
    frame.render_widget(hints, layout[2]);
}

pub fn handle_key<S: AccountStore>(flow: &mut WalletFlow<S>, ui: &mut ScreenUi, key: KeyEvent) {
    let ScreenUi::Accounts { selected } = ui else {
        return;
    };
    let count = flow.store().accounts().len();

    match key.code {
        KeyCode::Up => *selected = selected.saturating_sub(1),
        KeyCode::Down if count > 0 => *selected = (*selected + 1).min(count - 1),
        KeyCode::Enter if count > 0 => {
            flow.store_mut().select_account(*selected);
            flow.open_selected_account();
        }
        KeyCode::Char('s') => flow.open_settings(),
        _ => {}
    }
}
