//! Offline demo account layer.
//!
//! Lets the wallet run without any node connectivity: a couple of canned
//! accounts, synthetic balances and history, and transaction submissions
//! that resolve from a background thread a moment later. Useful for trying
//! the interface and for manual testing of the navigation choreography.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{TimeZone, Utc};
use tracing::info;

use crate::account::{
    Account, AccountSnapshot, AccountStore, HistoryEntry, TokenBalance, TxResult,
};
use crate::config::Settings;

const STARTUP_DELAY: Duration = Duration::from_millis(1200);
const REFRESH_DELAY: Duration = Duration::from_millis(700);
const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

pub struct DemoStore {
    created: Instant,
    accounts: Vec<Account>,
    selected: Option<usize>,
    snapshots: Vec<AccountSnapshot>,
    histories: Vec<Vec<HistoryEntry>>,
    refreshing_until: Option<Instant>,
    settings: Settings,
    settings_path: PathBuf,
    tx_counter: u32,
}

impl DemoStore {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        let accounts = vec![
            Account {
                display_name: "main".to_string(),
                secret: None,
            },
            Account {
                display_name: "savings".to_string(),
                secret: Some("hunter2".to_string()),
            },
        ];

        let snapshots = vec![
            AccountSnapshot {
                address: "P2KFNXEbt65rQiWqogAWqkdacavtau8hBVkmCKsVZZYzpnj".to_string(),
                balances: vec![
                    TokenBalance {
                        symbol: "SOUL".to_string(),
                        amount: 120.0,
                        decimals: 8,
                    },
                    TokenBalance {
                        symbol: "KCAL".to_string(),
                        amount: 14.5,
                        decimals: 10,
                    },
                ],
                stake: 0.0,
                claimable: 2.25,
            },
            AccountSnapshot {
                address: "P2K9LW1HzUvMPVYmBfYGFLPzJ5p74vUJ8sDr2G1pcRTsQqt".to_string(),
                balances: vec![TokenBalance {
                    symbol: "SOUL".to_string(),
                    amount: 5000.0,
                    decimals: 8,
                }],
                stake: 5000.0,
                claimable: 0.0,
            },
        ];

        let histories = vec![
            vec![
                HistoryEntry {
                    hash: "0x5f3a9cbb6c1a84d2".to_string(),
                    date: Utc.with_ymd_and_hms(2026, 8, 12, 9, 41, 0).unwrap(),
                    explorer_url: "https://explorer.phantasma.io/tx/0x5f3a9cbb6c1a84d2"
                        .to_string(),
                },
                HistoryEntry {
                    hash: "0x91be07d2a44cf0e1".to_string(),
                    date: Utc.with_ymd_and_hms(2026, 8, 3, 17, 2, 0).unwrap(),
                    explorer_url: String::new(),
                },
            ],
            Vec::new(),
        ];

        Self {
            created: Instant::now(),
            accounts,
            selected: None,
            snapshots,
            histories,
            refreshing_until: None,
            settings,
            settings_path,
            tx_counter: 0,
        }
    }

    fn mark_refreshing(&mut self) {
        self.refreshing_until = Some(Instant::now() + REFRESH_DELAY);
    }
}

impl AccountStore for DemoStore {
    fn is_ready(&self) -> bool {
        self.created.elapsed() >= STARTUP_DELAY
    }

    fn status_message(&self) -> String {
        if self.is_ready() {
            "Starting...".to_string()
        } else {
            "Connecting to demo ledger...".to_string()
        }
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
        info!(force, "refreshing balances");
        self.mark_refreshing();
    }

    fn refresh_history(&mut self, force: bool) {
        info!(force, "refreshing history");
        self.mark_refreshing();
    }

    fn refresh_token_prices(&mut self) {
        info!("refreshing token prices");
    }

    fn is_refreshing(&self) -> bool {
        self.refreshing_until
            .is_some_and(|until| Instant::now() < until)
    }

    fn current_state(&self) -> Option<&AccountSnapshot> {
        self.selected.map(|i| &self.snapshots[i])
    }

    fn current_history(&self) -> Option<&[HistoryEntry]> {
        self.selected.map(|i| self.histories[i].as_slice())
    }

    fn submit_transaction(&mut self, chain: &str, script: Vec<u8>, on_result: TxResult) {
        self.tx_counter += 1;
        let hash = format!("0xdemo{:08x}", self.tx_counter);
        info!(chain, script_len = script.len(), %hash, "submitting transaction");

        // Resolve off-thread after a delay, like a real node round trip.
        std::thread::spawn(move || {
            std::thread::sleep(SUBMIT_DELAY);
            on_result(Some(hash));
        });
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn save_settings(&mut self) -> Result<()> {
        self.settings.save(&self.settings_path)
    }

    fn currencies(&self) -> Vec<String> {
        ["USD", "EUR", "GBP", "JPY", "CAD", "AUD"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn token_worth(&self, symbol: &str, amount: f64) -> String {
        let price = match symbol {
            "SOUL" => 0.72,
            "KCAL" => 0.018,
            "NEO" => 11.40,
            "GAS" => 3.95,
            _ => 0.0,
        };
        format!("{:.2} {}", amount * price, self.settings.currency)
    }
}
