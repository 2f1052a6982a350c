//! Settings screen: RPC endpoints and display currency.
//!
//! Edits write through to the collaborator's settings live; the validation
//! gate runs when the screen is closed and may veto the close.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::account::AccountStore;
use crate::flow::WalletFlow;
use crate::screens::{ScreenUi, SETTINGS_URL_FIELDS};
use crate::styles::theme;
use crate::widgets::TextInputWidget;

const FIELD_TITLES: [&str; SETTINGS_URL_FIELDS] =
    ["Phantasma RPC URL", "Neo RPC URL", "Neoscan API URL"];

/// Index of the currency selector row, after the URL fields.
const CURRENCY_ROW: usize = SETTINGS_URL_FIELDS;

pub fn render<S: AccountStore>(
    frame: &mut Frame,
    area: Rect,
    flow: &WalletFlow<S>,
    ui: &mut ScreenUi,
) {
    let ScreenUi::Settings(settings_ui) = ui else {
        return;
    };
    let t = theme();

    let layout = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    let title = Paragraph::new("SETTINGS")
        .alignment(Alignment::Center)
        .style(t.title_style());
    frame.render_widget(title, layout[0]);

    for (i, field) in settings_ui.fields.iter().enumerate() {
        TextInputWidget::new(field, FIELD_TITLES[i])
            .focused(settings_ui.focus == i)
            .render(frame, layout[i + 1]);
    }

    let currency = &flow.store().settings().currency;
    let currency_style = if settings_ui.focus == CURRENCY_ROW {
        t.highlight_style()
    } else {
        t.text_style()
    };
    let currency_line = Paragraph::new(format!("Currency: {currency}  (Enter to change)"))
        .style(currency_style);
    frame.render_widget(currency_line, layout[4]);

    let hints = Paragraph::new("Tab: Next field   Esc: Save & Close")
        .alignment(Alignment::Center)
        .style(t.muted_style());
    frame.render_widget(hints, layout[6]);
}

pub fn handle_key<S: AccountStore>(flow: &mut WalletFlow<S>, ui: &mut ScreenUi, key: KeyEvent) {
    let ScreenUi::Settings(settings_ui) = ui else {
        return;
    };

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            settings_ui.focus = (settings_ui.focus + 1) % (SETTINGS_URL_FIELDS + 1);
        }
        KeyCode::BackTab | KeyCode::Up => {
            settings_ui.focus =
                (settings_ui.focus + SETTINGS_URL_FIELDS) % (SETTINGS_URL_FIELDS + 1);
        }
        KeyCode::Enter | KeyCode::Char(' ') if settings_ui.focus == CURRENCY_ROW => {
            flow.cycle_currency();
        }
        KeyCode::Esc => {
            settings_ui.apply(flow.store_mut().settings_mut());
            flow.close_settings();
        }
        code if settings_ui.focus < SETTINGS_URL_FIELDS => {
            let field = &mut settings_ui.fields[settings_ui.focus];
            match code {
                KeyCode::Char(c) => field.insert_char(c),
                KeyCode::Backspace => field.backspace(),
                KeyCode::Left => field.move_left(),
                KeyCode::Right => field.move_right(),
                KeyCode::Home => field.move_home(),
                KeyCode::End => field.move_end(),
                _ => return,
            }
            // Live write-through, like the original wallet's settings form.
            settings_ui.apply(flow.store_mut().settings_mut());
        }
        _ => {}
    }
}
