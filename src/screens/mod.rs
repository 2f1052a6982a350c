//! Per-screen rendering and input handling.
//!
//! Each screen module exposes `render` and `handle_key` free functions over
//! the wallet flow. The dispatch tables here are keyed off
//! [`WalletScreen`]; entry side effects live in the flow layer, so these
//! modules only draw and translate keys into flow calls.

pub mod accounts;
pub mod balances;
pub mod history;
pub mod settings;
pub mod status;
pub mod transfer;

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::account::AccountStore;
use crate::config::Settings;
use crate::flow::WalletFlow;
use crate::nav::WalletScreen;
use crate::utils::TextInput;

/// Number of URL fields on the settings screen.
pub const SETTINGS_URL_FIELDS: usize = 3;

/// Transient UI state for the settings screen.
#[derive(Debug)]
pub struct SettingsUi {
    /// 0..3 are the URL fields, 3 is the currency selector row.
    pub focus: usize,
    pub fields: [TextInput; SETTINGS_URL_FIELDS],
}

impl SettingsUi {
    fn seeded(settings: &Settings) -> Self {
        Self {
            focus: 0,
            fields: [
                TextInput::with_text(&settings.phantasma_rpc_url),
                TextInput::with_text(&settings.neo_rpc_url),
                TextInput::with_text(&settings.neoscan_url),
            ],
        }
    }

    /// Write the edited field values through to the settings.
    pub fn apply(&self, settings: &mut Settings) {
        settings.phantasma_rpc_url = self.fields[0].text().to_string();
        settings.neo_rpc_url = self.fields[1].text().to_string();
        settings.neoscan_url = self.fields[2].text().to_string();
    }
}

/// Transient per-screen UI state (selection indices, edit buffers).
///
/// Recreated whenever the navigator lands on a different screen, so stale
/// selections never leak between visits.
#[derive(Debug)]
pub enum ScreenUi {
    Accounts { selected: usize },
    Balances { selected: usize },
    History { selected: usize },
    Transfer,
    Settings(SettingsUi),
    /// Loading, Sending and Confirming render a status line only.
    Status,
}

impl ScreenUi {
    pub fn for_screen(screen: WalletScreen, settings: &Settings) -> Self {
        match screen {
            WalletScreen::Accounts => Self::Accounts { selected: 0 },
            WalletScreen::Balances => Self::Balances { selected: 0 },
            WalletScreen::History => Self::History { selected: 0 },
            WalletScreen::Transfer => Self::Transfer,
            WalletScreen::Settings => Self::Settings(SettingsUi::seeded(settings)),
            WalletScreen::Loading | WalletScreen::Sending | WalletScreen::Confirming => {
                Self::Status
            }
        }
    }
}

/// Render the current screen into the (possibly sliding) wallet window.
pub fn render<S: AccountStore>(
    frame: &mut Frame,
    area: Rect,
    flow: &WalletFlow<S>,
    ui: &mut ScreenUi,
) {
    match flow.current_screen() {
        WalletScreen::Loading | WalletScreen::Sending | WalletScreen::Confirming => {
            status::render(frame, area, flow);
        }
        WalletScreen::Accounts => accounts::render(frame, area, flow, ui),
        WalletScreen::Balances => balances::render(frame, area, flow, ui),
        WalletScreen::History => history::render(frame, area, flow, ui),
        WalletScreen::Transfer => transfer::render(frame, area, flow),
        WalletScreen::Settings => settings::render(frame, area, flow, ui),
    }
}

/// Route a key press to the current screen. The transient status screens
/// take no input.
pub fn handle_key<S: AccountStore>(flow: &mut WalletFlow<S>, ui: &mut ScreenUi, key: KeyEvent) {
    match flow.current_screen() {
        WalletScreen::Loading | WalletScreen::Sending | WalletScreen::Confirming => {}
        WalletScreen::Accounts => accounts::handle_key(flow, ui, key),
        WalletScreen::Balances => balances::handle_key(flow, ui, key),
        WalletScreen::History => history::handle_key(flow, ui, key),
        WalletScreen::Transfer => transfer::handle_key(flow, key),
        WalletScreen::Settings => settings::handle_key(flow, ui, key),
    }
}
