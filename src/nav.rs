//! Stack-based screen navigation.
//!
//! The `Navigator` tracks the current screen and the screens to return to.
//! It is deliberately collaborator-agnostic: entry side effects (refreshes,
//! selector seeding) live in the flow layer, keyed off the same enum, so the
//! stack discipline here can be tested in isolation.

use std::fmt;

/// One named mode of the wallet interface, mutually exclusive with all others.
///
/// `Loading` is the only entry state; `Sending` and `Confirming` are
/// transient, non-interactive states representing blocking work in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletScreen {
    Loading,
    Accounts,
    Balances,
    History,
    Transfer,
    Sending,
    Confirming,
    Settings,
}

impl fmt::Display for WalletScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loading => "Loading",
            Self::Accounts => "Accounts",
            Self::Balances => "Balances",
            Self::History => "History",
            Self::Transfer => "Transfer",
            Self::Sending => "Sending",
            Self::Confirming => "Confirming",
            Self::Settings => "Settings",
        };
        f.write_str(name)
    }
}

/// Screens reachable through the bottom tab menu.
pub const BOTTOM_TABS: [WalletScreen; 2] = [WalletScreen::Balances, WalletScreen::History];

/// Current screen plus a LIFO stack of screens to return to.
///
/// Invariants: the stack never contains the currently displayed screen, and
/// never `Loading` (the sentinel is not a valid return target).
#[derive(Debug)]
pub struct Navigator {
    current: WalletScreen,
    stack: Vec<WalletScreen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: WalletScreen::Loading,
            stack: Vec::new(),
        }
    }

    /// The currently displayed screen.
    pub fn current(&self) -> WalletScreen {
        self.current
    }

    /// Number of screens recorded as return targets.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Make `screen` current, recording the previous screen as a return
    /// target. The `Loading` sentinel is never recorded.
    pub fn push(&mut self, screen: WalletScreen) {
        if self.current != WalletScreen::Loading {
            self.stack.push(self.current);
        }
        self.current = screen;
    }

    /// Make `screen` current without touching the stack.
    ///
    /// Used by the bottom tab menu: switching between sibling tabs must not
    /// grow the return stack.
    pub fn replace(&mut self, screen: WalletScreen) {
        self.current = screen;
    }

    /// Return to the most recently recorded screen.
    ///
    /// # Panics
    ///
    /// Panics when the stack is empty. That is a programming-contract
    /// violation, not a recoverable user error.
    pub fn pop(&mut self) -> WalletScreen {
        self.current = self
            .stack
            .pop()
            .expect("navigation pop with an empty return stack");
        self.current
    }

    /// Clear all return targets and set the current screen directly,
    /// bypassing push bookkeeping.
    pub fn reset(&mut self, screen: WalletScreen) {
        self.stack.clear();
        self.current = screen;
    }
}
