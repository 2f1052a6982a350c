//! Shared test fixtures: a scripted account store with recorded calls.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use chrono::{TimeZone, Utc};

use specter::account::{
    Account, AccountSnapshot, AccountStore, HistoryEntry, TokenBalance, TxResult,
};
use specter::config::Settings;
use specter::flow::WalletFlow;
use specter::nav::WalletScreen;

/// Account store that records every call the flow makes and lets the test
/// drive readiness and transaction results by hand.
pub struct MockStore {
    pub ready: bool,
    pub accounts: Vec<Account>,
    pub selected: Option<usize>,
    pub snapshots: Vec<AccountSnapshot>,
    pub histories: Vec<Vec<HistoryEntry>>,
    /// `force` flag of every balance refresh, in call order.
    pub balance_refreshes: Vec<bool>,
    pub history_refreshes: Vec<bool>,
    pub price_refreshes: u32,
    /// (chain, script) of every submission, in call order.
    pub submitted: Vec<(String, Vec<u8>)>,
    /// Result callbacks not yet fired by the test.
    pub pending_results: Vec<TxResult>,
    pub settings: Settings,
    pub saves: u32,
    pub fail_save: bool,
}

impl MockStore {
    pub fn new() -> Self {
        let accounts = vec![
            Account {
                display_name: "main".to_string(),
                secret: None,
            },
            Account {
                display_name: "savings".to_string(),
                secret: Some("abc".to_string()),
            },
        ];
        let snapshots = vec![
            AccountSnapshot {
                address: "P2Kmock1".to_string(),
                balances: vec![
                    TokenBalance {
                        symbol: "SOUL".to_string(),
                        amount: 10.0,
                        decimals: 8,
                    },
                    TokenBalance {
                        symbol: "KCAL".to_string(),
                        amount: 3.0,
                        decimals: 10,
                    },
                ],
                stake: 0.0,
                claimable: 1.5,
            },
            AccountSnapshot {
                address: "P2Kmock2".to_string(),
                balances: Vec::new(),
                stake: 0.0,
                claimable: 0.0,
            },
        ];
        let histories = vec![
            vec![HistoryEntry {
                hash: "0xaaaa".to_string(),
                date: Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap(),
                explorer_url: "https://explorer.example.com/tx/0xaaaa".to_string(),
            }],
            Vec::new(),
        ];

        Self {
            ready: true,
            accounts,
            selected: None,
            snapshots,
            histories,
            balance_refreshes: Vec::new(),
            history_refreshes: Vec::new(),
            price_refreshes: 0,
            submitted: Vec::new(),
            pending_results: Vec::new(),
            settings: Settings::default(),
            saves: 0,
            fail_save: false,
        }
    }

    /// Fire the oldest pending transaction result.
    pub fn fire_result(&mut self, hash: Option<&str>) {
        let cb = self.pending_results.remove(0);
        cb(hash.map(ToString::to_string));
    }
}

impl AccountStore for MockStore {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn status_message(&self) -> String {
        "mock".to_string()
    }

    fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    fn select_account(&mut self, index: usize) {
        if index < self.accounts.len() {
            self.selected = Some(index);
        }
    }

    fn unselect_account(&mut self) {
        self.selected = None;
    }

    fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    fn current_account(&self) -> Option<&Account> {
        self.selected.map(|i| &self.accounts[i])
    }

    fn refresh_balances(&mut self, force: bool) {
        self.balance_refreshes.push(force);
    }

    fn refresh_history(&mut self, force: bool) {
        self.history_refreshes.push(force);
    }

    fn refresh_token_prices(&mut self) {
        self.price_refreshes += 1;
    }

    fn is_refreshing(&self) -> bool {
        false
    }

    fn current_state(&self) -> Option<&AccountSnapshot> {
        self.selected.map(|i| &self.snapshots[i])
    }

    fn current_history(&self) -> Option<&[HistoryEntry]> {
        self.selected.map(|i| self.histories[i].as_slice())
    }

    fn submit_transaction(&mut self, chain: &str, script: Vec<u8>, on_result: TxResult) {
        self.submitted.push((chain.to_string(), script));
        self.pending_results.push(on_result);
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn save_settings(&mut self) -> Result<()> {
        if self.fail_save {
            bail!("disk full");
        }
        self.saves += 1;
        Ok(())
    }

    fn currencies(&self) -> Vec<String> {
        vec!["USD".to_string(), "EUR".to_string(), "GBP".to_string()]
    }

    fn token_worth(&self, _symbol: &str, amount: f64) -> String {
        format!("{amount:.2} USD")
    }
}

/// Tick the flow twice per slide until all animation settles, stepping well
/// past the half-second duration each time. Returns the clock after the
/// last tick.
pub fn settle(flow: &mut WalletFlow<MockStore>, mut now: Instant) -> Instant {
    for _ in 0..8 {
        now += Duration::from_millis(600);
        flow.tick(now);
        if !flow.animating() {
            break;
        }
    }
    assert!(!flow.animating(), "animation did not settle");
    now
}

/// Fresh flow driven through the startup choreography, resting on the
/// accounts screen.
pub fn flow_on_accounts() -> (WalletFlow<MockStore>, Instant) {
    let mut flow = WalletFlow::new(MockStore::new());
    let t0 = Instant::now();
    flow.tick(t0);
    let now = settle(&mut flow, t0);
    assert_eq!(flow.current_screen(), WalletScreen::Accounts);
    (flow, now)
}

/// Continue from [`flow_on_accounts`]: select and open the unprotected
/// account, resting on the balances screen.
pub fn flow_on_balances() -> (WalletFlow<MockStore>, Instant) {
    let (mut flow, now) = flow_on_accounts();
    flow.store_mut().select_account(0);
    flow.open_selected_account();
    let now = settle(&mut flow, now);
    assert_eq!(flow.current_screen(), WalletScreen::Balances);
    (flow, now)
}
