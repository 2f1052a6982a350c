//! Account/data collaborator surface.
//!
//! The navigation engine never talks to the network or builds transactions
//! itself; everything observable about accounts comes through this trait.
//! Refreshes are fire-and-forget and report through later polls; transaction
//! submission reports through a one-shot callback fired from a later frame.

use chrono::{DateTime, Utc};

use crate::config::Settings;

/// Longest password the authorization prompt will accept.
pub const MAX_PASSWORD_LENGTH: usize = 32;

/// A wallet account as listed on the accounts screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub display_name: String,
    /// Stored secret gating access to the account. Empty or absent means no
    /// protection is configured.
    pub secret: Option<String>,
}

impl Account {
    /// Whether opening this account requires the password gate.
    pub fn is_protected(&self) -> bool {
        self.secret.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// One token balance row.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBalance {
    pub symbol: String,
    pub amount: f64,
    pub decimals: u32,
}

/// Snapshot of the selected account's on-chain state.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    pub address: String,
    pub balances: Vec<TokenBalance>,
    /// Currently staked amount (SOUL).
    pub stake: f64,
    /// Claimable reward amount (KCAL).
    pub claimable: f64,
}

/// One transaction history row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub hash: String,
    pub date: DateTime<Utc>,
    /// Block-explorer link, empty when none is known.
    pub explorer_url: String,
}

/// One-shot completion for a submitted transaction: `Some(hash)` on
/// acceptance, `None` on failure. Fired from a later frame, never
/// synchronously inside `submit_transaction`.
pub type TxResult = Box<dyn FnOnce(Option<String>) + Send>;

/// The external account/data layer consumed by the wallet flow.
///
/// The `'static` bound lets flow continuations that mention the store type
/// live inside boxed callbacks.
pub trait AccountStore: 'static {
    /// Whether startup work is done and the wallet may leave the loading
    /// screen.
    fn is_ready(&self) -> bool;

    /// Status line shown while loading.
    fn status_message(&self) -> String;

    fn accounts(&self) -> &[Account];

    fn select_account(&mut self, index: usize);
    fn unselect_account(&mut self);
    fn has_selection(&self) -> bool;
    fn current_account(&self) -> Option<&Account>;

    /// Request a balance refresh. `force` bypasses any recent-fetch
    /// short-circuit; screen entry always passes `false`.
    fn refresh_balances(&mut self, force: bool);
    fn refresh_history(&mut self, force: bool);
    fn refresh_token_prices(&mut self);

    /// Whether a refresh is still in flight (drives the fetching
    /// interstitials).
    fn is_refreshing(&self) -> bool;

    fn current_state(&self) -> Option<&AccountSnapshot>;
    fn current_history(&self) -> Option<&[HistoryEntry]>;

    /// Submit a signed transaction script. The callback fires from a later
    /// frame with the transaction hash, or `None` on failure. There is no
    /// cancellation once submitted.
    fn submit_transaction(&mut self, chain: &str, script: Vec<u8>, on_result: TxResult);

    fn settings(&self) -> &Settings;
    fn settings_mut(&mut self) -> &mut Settings;
    fn save_settings(&mut self) -> anyhow::Result<()>;

    /// Supported display currencies. The flow snapshots this once at
    /// startup.
    fn currencies(&self) -> Vec<String>;

    /// Fiat-equivalent display string for a token amount, e.g. `"3.20 USD"`.
    fn token_worth(&self, symbol: &str, amount: f64) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protection_requires_non_empty_secret() {
        let unset = Account {
            display_name: "main".into(),
            secret: None,
        };
        let empty = Account {
            display_name: "main".into(),
            secret: Some(String::new()),
        };
        let set = Account {
            display_name: "main".into(),
            secret: Some("hunter2".into()),
        };
        assert!(!unset.is_protected());
        assert!(!empty.is_protected());
        assert!(set.is_protected());
    }
}
