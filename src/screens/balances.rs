//! Balances screen: token rows with send/stake/claim actions.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::account::{AccountSnapshot, AccountStore};
use crate::flow::WalletFlow;
use crate::nav::WalletScreen;
use crate::screens::ScreenUi;
use crate::script;
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};

/// Secondary action available for a token row.
struct SecondaryAction {
    label: &'static str,
    enabled: bool,
}

fn secondary_action(symbol: &str, snapshot: &AccountSnapshot, amount: f64) -> Option<SecondaryAction> {
    match symbol {
        "SOUL" => Some(SecondaryAction {
            label: "Stake",
            enabled: snapshot.stake == 0.0 && amount > 0.0,
        }),
        "KCAL" => Some(SecondaryAction {
            label: "Claim",
            enabled: snapshot.claimable > 0.0,
        }),
        _ => None,
    }
}

/// KCAL on hand determines how the stake script orders its gas allowance.
fn fee_balance(snapshot: &AccountSnapshot) -> f64 {
    snapshot
        .balances
        .iter()
        .filter(|b| b.symbol == "KCAL")
        .map(|b| b.amount)
        .sum()
}

pub(super) fn render_tabs<S: AccountStore>(frame: &mut Frame, area: Rect, flow: &WalletFlow<S>) {
    let t = theme();
    let current = flow.current_screen();
    let line: Vec<Span> = crate::nav::BOTTOM_TABS
        .iter()
        .flat_map(|tab| {
            let style = if *tab == current {
                t.title_style()
            } else {
                t.muted_style()
            };
            vec![Span::styled(format!("[ {tab} ]"), style), Span::raw("  ")]
        })
        .collect();
    let tabs = Paragraph::new(Line::from(line)).alignment(Alignment::Center);
    frame.render_widget(tabs, area);
}

pub fn render<S: AccountStore>(
    frame: &mut Frame,
    area: Rect,
    flow: &WalletFlow<S>,
    ui: &mut ScreenUi,
) {
    let ScreenUi::Balances { selected } = ui else {
        return;
    };
    let t = theme();
    let store = flow.store();

    if store.is_refreshing() {
        super::status::centered_text(frame, area, "Fetching balances...");
        return;
    }

    let layout = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    let title = Paragraph::new("BALANCES")
        .alignment(Alignment::Center)
        .style(t.title_style());
    frame.render_widget(title, layout[0]);

    let Some(snapshot) = store.current_state() else {
        super::status::centered_text(frame, layout[2], "Temporary error, cannot display balances...");
        return;
    };

    let address = Paragraph::new(snapshot.address.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(t.secondary));
    frame.render_widget(address, layout[1]);

    if snapshot.balances.is_empty() {
        super::status::centered_text(frame, layout[2], "No assets found in this account.");
    } else {
        *selected = (*selected).min(snapshot.balances.len() - 1);
        let items: Vec<ListItem> = snapshot
            .balances
            .iter()
            .map(|balance| {
                let worth = store.token_worth(&balance.symbol, balance.amount);
                let mut text = format!("{} {} ({worth})", balance.amount, balance.symbol);
                if let Some(action) = secondary_action(&balance.symbol, snapshot, balance.amount) {
                    if action.enabled {
                        text.push_str(&format!("   [{}]", action.label));
                    }
                }
                ListItem::new(text)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).border_style(t.border_style()))
            .style(t.text_style())
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        let mut state = ListState::default();
        state.select(Some(*selected));
        frame.render_stateful_widget(list, layout[2], &mut state);
    }

    let hints =
        Paragraph::new("s: Send   a: Stake/Claim   Tab: History   Esc: Close")
            .alignment(Alignment::Center)
            .style(t.muted_style());
    frame.render_widget(hints, layout[3]);

    render_tabs(frame, layout[4], flow);
}

pub fn handle_key<S: AccountStore>(flow: &mut WalletFlow<S>, ui: &mut ScreenUi, key: KeyEvent) {
    let ScreenUi::Balances { selected } = ui else {
        return;
    };

    let row = flow
        .store()
        .current_state()
        .and_then(|snapshot| snapshot.balances.get(*selected).cloned());
    let count = flow
        .store()
        .current_state()
        .map_or(0, |snapshot| snapshot.balances.len());

    match key.code {
        KeyCode::Up => *selected = selected.saturating_sub(1),
        KeyCode::Down if count > 0 => *selected = (*selected + 1).min(count - 1),
        KeyCode::Char('s') => {
            if let Some(balance) = row {
                flow.begin_transfer(balance.symbol);
            }
        }
        KeyCode::Char('a') => {
            let Some(balance) = row else { return };
            let Some(snapshot) = flow.store().current_state().cloned() else {
                return;
            };
            let Some(action) = secondary_action(&balance.symbol, &snapshot, balance.amount)
            else {
                return;
            };
            if !action.enabled {
                return;
            }
            let bytes = match balance.symbol.as_str() {
                "SOUL" => script::stake(
                    &snapshot.address,
                    balance.amount,
                    balance.decimals,
                    fee_balance(&snapshot),
                ),
                "KCAL" => script::claim(&snapshot.address),
                _ => return,
            };
            flow.send_transaction(script::MAIN_CHAIN, bytes);
        }
        KeyCode::Tab => flow.switch_tab(WalletScreen::History),
        KeyCode::Esc | KeyCode::Char('x') => flow.close_to_accounts(),
        _ => {}
    }
}
