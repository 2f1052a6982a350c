//! Top-level wallet flow: the per-frame driver tying navigation, animation
//! and modal prompts together.
//!
//! Screens never touch the animator or modal controller directly; they call
//! the choreography methods here. Everything runs on the frame thread: the
//! animator and modal controller hand their continuations back with their
//! slots already cleared, so a continuation that pushes navigation state and
//! starts the next slide is safe to run inside the same tick.

use std::sync::mpsc;
use std::time::Instant;

use ratatui::layout::Rect;
use tracing::{debug, error, info};

use crate::account::{AccountStore, MAX_PASSWORD_LENGTH};
use crate::animation::{Animator, SlideDirection, SlideDone};
use crate::config::{is_valid_url, Settings};
use crate::modal::{ModalController, ModalKind};
use crate::nav::{Navigator, WalletScreen};

/// Continuation invoked with the flow once a choreography step lands.
pub type FlowDone<S> = SlideDone<WalletFlow<S>>;

/// Continuation for the password gate: `true` means authorized.
pub type AuthDone<S> = Box<dyn FnOnce(&mut WalletFlow<S>, bool)>;

/// Owns the navigator, the single animation slot, the single modal slot and
/// the injected account/data collaborator.
pub struct WalletFlow<S: AccountStore> {
    nav: Navigator,
    animator: Animator<WalletFlow<S>>,
    modal: ModalController<WalletFlow<S>>,
    store: S,
    /// Clock of the current frame, refreshed at the top of every tick.
    now: Instant,
    /// Currency options snapshotted once at startup.
    currencies: Vec<String>,
    currency_index: usize,
    transfer_symbol: Option<String>,
    tx_hash: Option<String>,
    tx_sender: mpsc::Sender<Option<String>>,
    tx_results: mpsc::Receiver<Option<String>>,
}

impl<S: AccountStore> WalletFlow<S> {
    pub fn new(store: S) -> Self {
        let currencies = store.currencies();
        let (tx_sender, tx_results) = mpsc::channel();
        Self {
            nav: Navigator::new(),
            animator: Animator::new(),
            modal: ModalController::new(),
            store,
            now: Instant::now(),
            currencies,
            currency_index: 0,
            transfer_symbol: None,
            tx_hash: None,
            tx_sender,
            tx_results,
        }
    }

    // --- frame driver ---------------------------------------------------

    /// Advance one frame. Fixed order: startup choreography, animation,
    /// modal resolution, transaction results. Screen render/input dispatch
    /// happens afterwards in the shell, keyed off [`Self::current_screen`].
    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        if self.nav.current() == WalletScreen::Loading
            && self.store.is_ready()
            && !self.animator.active()
        {
            info!("account layer ready, entering accounts screen");
            self.animate(
                SlideDirection::Up,
                true,
                Some(Box::new(|flow| {
                    flow.nav.reset(WalletScreen::Loading);
                    flow.push(WalletScreen::Accounts);
                    flow.animate(SlideDirection::Down, false, None);
                })),
            );
        }

        if let Some(done) = self.animator.tick(now) {
            done(self);
        }

        if let Some((resolve, value)) = self.modal.tick() {
            resolve(self, value);
        }

        while let Ok(result) = self.tx_results.try_recv() {
            self.handle_tx_result(result);
        }
    }

    fn handle_tx_result(&mut self, hash: Option<String>) {
        match hash {
            Some(hash) => {
                info!(%hash, "transaction accepted, awaiting confirmation");
                self.tx_hash = Some(hash);
                self.push(WalletScreen::Confirming);
            }
            None => {
                error!("transaction submission failed");
                self.message(
                    "Transaction could not be submitted",
                    Some(Box::new(|flow| {
                        // Acknowledging returns to the screen that sent.
                        if flow.nav.current() == WalletScreen::Sending {
                            flow.nav.pop();
                        }
                    })),
                );
            }
        }
    }

    // --- navigation -----------------------------------------------------

    pub fn current_screen(&self) -> WalletScreen {
        self.nav.current()
    }

    pub fn nav(&self) -> &Navigator {
        &self.nav
    }

    /// Push a screen and run its entry side effect.
    pub fn push(&mut self, screen: WalletScreen) {
        debug!(%screen, "push");
        self.nav.push(screen);
        self.run_entry_effect(screen);
    }

    /// Return to the previous screen. Entry side effects do not re-run.
    pub fn pop(&mut self) {
        let screen = self.nav.pop();
        debug!(%screen, "pop");
    }

    /// Bottom-menu tab switch: replaces the current screen so sibling
    /// round trips leave the return stack untouched, but still re-runs the
    /// target's entry side effect.
    pub fn switch_tab(&mut self, screen: WalletScreen) {
        if self.nav.current() == screen {
            return;
        }
        debug!(%screen, "tab switch");
        self.nav.replace(screen);
        self.run_entry_effect(screen);
    }

    /// Entry side effects, kept apart from the navigator's stack discipline
    /// and from rendering.
    fn run_entry_effect(&mut self, screen: WalletScreen) {
        match screen {
            WalletScreen::Balances => self.store.refresh_balances(false),
            WalletScreen::History => self.store.refresh_history(false),
            WalletScreen::Settings => {
                let current = &self.store.settings().currency;
                self.currency_index = self
                    .currencies
                    .iter()
                    .position(|c| c == current)
                    .unwrap_or(0);
            }
            _ => {}
        }
    }

    // --- animation ------------------------------------------------------

    /// Start a slide from the current frame's clock. Overwrites any
    /// in-flight slide; the superseded completion is dropped unseen.
    pub fn animate(
        &mut self,
        direction: SlideDirection,
        inverted: bool,
        on_done: Option<FlowDone<S>>,
    ) {
        self.animator.animate(direction, inverted, self.now, on_done);
    }

    pub fn animating(&self) -> bool {
        self.animator.active()
    }

    /// Window offset for the current frame, for the renderer.
    pub fn window_offset(&self, viewport: Rect) -> (i32, i32) {
        self.animator.offset(viewport)
    }

    // --- modal prompts --------------------------------------------------

    pub fn modal(&self) -> &ModalController<WalletFlow<S>> {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut ModalController<WalletFlow<S>> {
        &mut self.modal
    }

    /// Single-acknowledgement message prompt.
    pub fn message(&mut self, caption: impl Into<String>, then: Option<FlowDone<S>>) {
        self.modal.show(
            "Attention",
            caption,
            ModalKind::Message,
            0,
            false,
            Box::new(move |flow, _input| {
                if let Some(then) = then {
                    then(flow);
                }
            }),
        );
    }

    /// Password gate for the selected account.
    ///
    /// Resolves immediately with failure when nothing is selected, and
    /// immediately with success when the selected account has no secret
    /// configured. Otherwise prompts; success requires the entered text to
    /// equal the stored secret exactly (case-sensitive, no trimming).
    pub fn request_password(&mut self, then: AuthDone<S>) {
        if !self.store.has_selection() {
            then(self, false);
            return;
        }
        let account = self
            .store
            .current_account()
            .expect("selection implies a current account");
        if !account.is_protected() {
            then(self, true);
            return;
        }

        let name = account.display_name.clone();
        let secret = account.secret.clone().unwrap_or_default();
        self.modal.show(
            "Account Authorization",
            format!("Account: {name}\nInsert password to proceed"),
            ModalKind::Password,
            MAX_PASSWORD_LENGTH,
            true,
            Box::new(move |flow, input| {
                let success = input.as_deref() == Some(secret.as_str());
                then(flow, success);
            }),
        );
    }

    // --- choreographies -------------------------------------------------

    /// Open the selected account: password gate, then the two-stage slide
    /// into the balances screen.
    pub fn open_selected_account(&mut self) {
        let name = self
            .store
            .current_account()
            .map(|a| a.display_name.clone())
            .unwrap_or_default();

        self.request_password(Box::new(move |flow, success| {
            if success {
                flow.store.refresh_token_prices();
                flow.animate(
                    SlideDirection::Down,
                    true,
                    Some(Box::new(|flow| {
                        flow.push(WalletScreen::Balances);
                        flow.animate(SlideDirection::Up, false, None);
                    })),
                );
            } else {
                flow.message(format!("Could not open '{name}' account"), None);
            }
        }));
    }

    /// Slide out to the settings screen.
    pub fn open_settings(&mut self) {
        self.animate(
            SlideDirection::Up,
            true,
            Some(Box::new(|flow| {
                flow.push(WalletScreen::Settings);
                flow.animate(SlideDirection::Down, false, None);
            })),
        );
    }

    /// The X/close action on account-detail screens: unselect the account
    /// and slide back out to the accounts list.
    pub fn close_to_accounts(&mut self) {
        self.animate(
            SlideDirection::Down,
            true,
            Some(Box::new(|flow| {
                flow.store.unselect_account();
                flow.nav.reset(WalletScreen::Loading);
                flow.push(WalletScreen::Accounts);
                flow.animate(SlideDirection::Up, false, None);
            })),
        );
    }

    /// Close the settings screen: the validation gate may veto the close
    /// with a message prompt naming the offending field; on success the
    /// settings are saved and the screen pops.
    pub fn close_settings(&mut self) {
        if let Some((field, value)) = invalid_url_field(self.store.settings()) {
            self.message(format!("Invalid URL for {field}\n{value}"), None);
            return;
        }

        self.store.refresh_token_prices();
        if let Err(err) = self.store.save_settings() {
            error!(?err, "failed to save settings");
            self.message(format!("Could not save settings\n{err}"), None);
            return;
        }

        self.animate(
            SlideDirection::Down,
            true,
            Some(Box::new(|flow| {
                flow.pop();
                flow.animate(SlideDirection::Up, false, None);
            })),
        );
    }

    /// Submit a transaction: slide into the sending screen, hand the script
    /// to the account layer, and let [`Self::tick`] pick up the result on a
    /// later frame.
    pub fn send_transaction(&mut self, chain: &str, script: Vec<u8>) {
        let chain = chain.to_string();
        self.animate(
            SlideDirection::Right,
            true,
            Some(Box::new(move |flow| {
                flow.push(WalletScreen::Sending);
                let sender = flow.tx_sender.clone();
                flow.store.submit_transaction(
                    &chain,
                    script,
                    Box::new(move |hash| {
                        let _ = sender.send(hash);
                    }),
                );
                flow.animate(SlideDirection::Left, false, None);
            })),
        );
    }

    /// Begin a transfer of the given token.
    pub fn begin_transfer(&mut self, symbol: impl Into<String>) {
        self.transfer_symbol = Some(symbol.into());
        self.push(WalletScreen::Transfer);
    }

    // --- accessors ------------------------------------------------------

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn currencies(&self) -> &[String] {
        &self.currencies
    }

    pub fn currency_index(&self) -> usize {
        self.currency_index
    }

    /// Advance the currency selector and write the choice through to the
    /// settings.
    pub fn cycle_currency(&mut self) {
        if self.currencies.is_empty() {
            return;
        }
        self.currency_index = (self.currency_index + 1) % self.currencies.len();
        let currency = self.currencies[self.currency_index].clone();
        self.store.settings_mut().currency = currency;
    }

    pub fn transfer_symbol(&self) -> Option<&str> {
        self.transfer_symbol.as_deref()
    }

    pub fn tx_hash(&self) -> Option<&str> {
        self.tx_hash.as_deref()
    }
}

/// First settings URL that fails the validity predicate, as
/// (field label, current value).
fn invalid_url_field(settings: &Settings) -> Option<(&'static str, String)> {
    [
        ("Phantasma RPC URL", &settings.phantasma_rpc_url),
        ("Neo RPC URL", &settings.neo_rpc_url),
        ("Neoscan API URL", &settings.neoscan_url),
    ]
    .into_iter()
    .find(|(_, value)| !is_valid_url(value))
    .map(|(field, value)| (field, value.clone()))
}
