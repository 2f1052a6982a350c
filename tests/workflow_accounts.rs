//! Opening accounts: the password gate and the slide into the balances
//! screen.

mod common;

use common::{flow_on_accounts, flow_on_balances, settle};
use specter::account::AccountStore;
use specter::modal::ModalKind;
use specter::nav::WalletScreen;

#[test]
fn unprotected_account_opens_without_prompt() {
    let (mut flow, now) = flow_on_accounts();
    flow.store_mut().select_account(0);
    flow.open_selected_account();

    assert!(!flow.modal().active(), "no password gate without a secret");
    assert_eq!(flow.store().price_refreshes, 1);

    settle(&mut flow, now);
    assert_eq!(flow.current_screen(), WalletScreen::Balances);
    assert_eq!(flow.nav().depth(), 1, "accounts recorded as return target");
    assert_eq!(
        flow.store().balance_refreshes,
        vec![false],
        "screen entry refreshes without forcing"
    );
}

#[test]
fn protected_account_prompts_and_opens_on_match() {
    let (mut flow, now) = flow_on_accounts();
    flow.store_mut().select_account(1);
    flow.open_selected_account();

    assert_eq!(flow.modal().kind(), Some(ModalKind::Password));
    assert!(flow.modal().caption().contains("savings"));

    for c in "abc".chars() {
        flow.modal_mut().push_char(c);
    }
    flow.modal_mut().confirm();
    settle(&mut flow, now);

    assert_eq!(flow.current_screen(), WalletScreen::Balances);
    assert_eq!(flow.store().price_refreshes, 1);
}

#[test]
fn password_comparison_is_exact() {
    for wrong in ["ABC", "ab", "abc ", " abc"] {
        let (mut flow, now) = flow_on_accounts();
        flow.store_mut().select_account(1);
        flow.open_selected_account();

        for c in wrong.chars() {
            flow.modal_mut().push_char(c);
        }
        flow.modal_mut().confirm();
        settle(&mut flow, now);

        assert_eq!(
            flow.current_screen(),
            WalletScreen::Accounts,
            "wrong password {wrong:?} must not open the account"
        );
        assert_eq!(flow.modal().kind(), Some(ModalKind::Message));
        assert!(
            flow.modal().caption().contains("Could not open 'savings' account"),
            "failure names the account"
        );
        assert_eq!(flow.store().price_refreshes, 0);
    }
}

#[test]
fn empty_password_cannot_confirm() {
    let (mut flow, now) = flow_on_accounts();
    flow.store_mut().select_account(1);
    flow.open_selected_account();

    flow.modal_mut().confirm();
    settle(&mut flow, now);

    assert_eq!(flow.modal().kind(), Some(ModalKind::Password), "prompt still up");
    assert_eq!(flow.current_screen(), WalletScreen::Accounts);
}

#[test]
fn cancelled_prompt_reports_failure() {
    let (mut flow, now) = flow_on_accounts();
    flow.store_mut().select_account(1);
    flow.open_selected_account();

    flow.modal_mut().cancel();
    settle(&mut flow, now);

    assert_eq!(flow.modal().kind(), Some(ModalKind::Message));
    assert!(flow.modal().caption().contains("Could not open"));
    assert_eq!(flow.current_screen(), WalletScreen::Accounts);
}

#[test]
fn opening_without_selection_fails_immediately() {
    let (mut flow, _now) = flow_on_accounts();
    flow.open_selected_account();

    assert_eq!(flow.modal().kind(), Some(ModalKind::Message));
    assert!(!flow.animating());
    assert_eq!(flow.current_screen(), WalletScreen::Accounts);
}

#[test]
fn tab_switch_keeps_return_stack_depth() {
    let (mut flow, _now) = flow_on_balances();
    let depth = flow.nav().depth();

    flow.switch_tab(WalletScreen::History);
    assert_eq!(flow.current_screen(), WalletScreen::History);
    assert_eq!(flow.nav().depth(), depth);
    assert_eq!(
        flow.store().history_refreshes,
        vec![false],
        "tab entry refreshes history"
    );

    flow.switch_tab(WalletScreen::Balances);
    assert_eq!(flow.current_screen(), WalletScreen::Balances);
    assert_eq!(flow.nav().depth(), depth, "round trip leaves the stack alone");
    assert_eq!(flow.store().balance_refreshes.len(), 2);
}

#[test]
fn tab_switch_to_current_screen_is_a_no_op() {
    let (mut flow, _now) = flow_on_balances();
    let refreshes = flow.store().balance_refreshes.len();
    flow.switch_tab(WalletScreen::Balances);
    assert_eq!(flow.store().balance_refreshes.len(), refreshes);
}

#[test]
fn closing_returns_to_accounts_and_unselects() {
    let (mut flow, now) = flow_on_balances();
    flow.close_to_accounts();
    settle(&mut flow, now);

    assert_eq!(flow.current_screen(), WalletScreen::Accounts);
    assert_eq!(flow.nav().depth(), 0);
    assert!(!flow.store().has_selection());
}
