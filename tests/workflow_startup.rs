//! Startup: the wallet holds on the loading screen until the account layer
//! is ready, then slides into the accounts list.

mod common;

use std::time::{Duration, Instant};

use common::{flow_on_accounts, settle, MockStore};
use specter::flow::WalletFlow;
use specter::nav::WalletScreen;

#[test]
fn stays_loading_until_store_ready() {
    let mut store = MockStore::new();
    store.ready = false;
    let mut flow = WalletFlow::new(store);

    let t0 = Instant::now();
    for i in 0u64..5 {
        flow.tick(t0 + Duration::from_millis(600 * i));
    }
    assert_eq!(flow.current_screen(), WalletScreen::Loading);
    assert!(!flow.animating(), "nothing to animate while loading");
}

#[test]
fn readiness_triggers_two_stage_entry() {
    let mut store = MockStore::new();
    store.ready = false;
    let mut flow = WalletFlow::new(store);

    let t0 = Instant::now();
    flow.tick(t0);
    assert_eq!(flow.current_screen(), WalletScreen::Loading);

    flow.store_mut().ready = true;
    let t1 = t0 + Duration::from_millis(600);
    flow.tick(t1);
    assert!(flow.animating(), "exit slide starts on the ready tick");
    assert_eq!(
        flow.current_screen(),
        WalletScreen::Loading,
        "screen changes only when the exit slide lands"
    );

    settle(&mut flow, t1);
    assert_eq!(flow.current_screen(), WalletScreen::Accounts);
    assert_eq!(flow.nav().depth(), 0, "accounts is the root screen");
}

#[test]
fn startup_runs_once() {
    let (mut flow, now) = flow_on_accounts();

    // Further ticks on a ready store must not re-trigger the choreography.
    flow.tick(now + Duration::from_millis(600));
    assert!(!flow.animating());
    assert_eq!(flow.current_screen(), WalletScreen::Accounts);
}
