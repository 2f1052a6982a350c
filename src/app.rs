//! Application shell: terminal loop around the wallet flow.
//!
//! Runs the fixed frame order from the flow (startup choreography, then
//! animation, then modal resolution) and afterwards renders and dispatches
//! input for whatever screen the navigator says is current. A pending modal
//! captures all keyboard input until it resolves.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Margin, Rect};
use tracing::info;

use crate::account::AccountStore;
use crate::flow::WalletFlow;
use crate::modal::ModalKind;
use crate::nav::WalletScreen;
use crate::screens::{self, ScreenUi};
use crate::tui::Tui;
use crate::utils::offset_rect;
use crate::widgets::Dialog;

/// Frame cadence while animations or refreshes may be pending. Short enough
/// that the half-second slides stay smooth.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

pub struct App<S: AccountStore> {
    tui: Tui,
    flow: WalletFlow<S>,
    screen_ui: ScreenUi,
    /// Track the last screen to detect transitions.
    last_screen: WalletScreen,
    should_quit: bool,
}

impl<S: AccountStore> App<S> {
    pub fn new(store: S) -> Result<Self> {
        let flow = WalletFlow::new(store);
        let screen_ui = ScreenUi::for_screen(flow.current_screen(), flow.store().settings());
        Ok(Self {
            tui: Tui::new()?,
            last_screen: flow.current_screen(),
            flow,
            screen_ui,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        loop {
            self.flow.tick(Instant::now());

            // Screen changed under us (navigation, choreography callback):
            // rebuild the transient UI state for the new screen.
            let current = self.flow.current_screen();
            if current != self.last_screen {
                self.screen_ui = ScreenUi::for_screen(current, self.flow.store().settings());
                self.last_screen = current;
            }

            self.draw()?;

            if self.should_quit {
                break;
            }

            if let Some(event) = self.tui.poll_event(FRAME_INTERVAL)? {
                self.handle_event(event);
            }
        }

        self.tui.exit()?;
        info!("wallet closed");
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let flow = &self.flow;
        let screen_ui = &mut self.screen_ui;

        self.tui.terminal_mut().draw(|frame| {
            let area = frame.area();

            // The wallet window slides as a whole; whatever is off-viewport
            // is simply not drawn.
            let window = area.inner(Margin::new(1, 1));
            let (dx, dy) = flow.window_offset(area);
            let window = offset_rect(window, dx, dy, area);
            if window.width > 0 && window.height > 0 {
                screens::render(frame, window, flow, screen_ui);
            }

            if flow.modal().active() {
                render_modal(frame, area, flow);
            }
        })?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+C always quits.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.flow.modal().active() {
            self.handle_modal_key(key);
            return;
        }

        if key.code == KeyCode::Char('q')
            && self.flow.current_screen() == WalletScreen::Accounts
        {
            self.should_quit = true;
            return;
        }

        screens::handle_key(&mut self.flow, &mut self.screen_ui, key);
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let modal = self.flow.modal_mut();
        match key.code {
            KeyCode::Enter => modal.confirm(),
            KeyCode::Esc => modal.cancel(),
            KeyCode::Backspace => modal.backspace(),
            KeyCode::Char(c) => modal.push_char(c),
            _ => {}
        }
    }
}

fn render_modal<S: AccountStore>(frame: &mut ratatui::Frame, area: Rect, flow: &WalletFlow<S>) {
    let modal = flow.modal();
    let mut dialog = Dialog::new(modal.title(), modal.caption())
        .allow_cancel(modal.allow_cancel())
        .can_confirm(modal.can_confirm());

    match modal.kind() {
        Some(ModalKind::Input) => dialog = dialog.input(modal.input()),
        Some(ModalKind::Password) => dialog = dialog.input(modal.input()).masked(true),
        _ => {}
    }

    frame.render_widget(dialog, area);
}
