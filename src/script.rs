//! Transaction script payloads.
//!
//! Actual script compilation and signing belong to the account layer; the
//! interface only needs opaque bytes to hand to
//! [`crate::account::AccountStore::submit_transaction`]. The payloads encode
//! the same call sequences the wallet has always issued for staking and
//! claiming, as a JSON list of ops.

use serde::{Deserialize, Serialize};

/// Chain the stake/claim contract lives on.
pub const MAIN_CHAIN: &str = "main";

/// One step of a transaction script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    AllowGas {
        from: String,
        price: u64,
        limit: u64,
    },
    CallContract {
        contract: String,
        method: String,
        args: Vec<String>,
    },
    SpendGas {
        from: String,
    },
}

fn fixed_point(amount: f64, decimals: u32) -> String {
    let scaled = amount * 10f64.powi(decimals as i32);
    format!("{}", scaled.round() as i128)
}

fn stake_call(address: &str, amount: f64, decimals: u32) -> ScriptOp {
    ScriptOp::CallContract {
        contract: "stake".to_string(),
        method: "Stake".to_string(),
        args: vec![address.to_string(), fixed_point(amount, decimals)],
    }
}

fn claim_call(address: &str) -> ScriptOp {
    ScriptOp::CallContract {
        contract: "stake".to_string(),
        method: "Claim".to_string(),
        args: vec![address.to_string(), address.to_string()],
    }
}

fn encode(ops: &[ScriptOp]) -> Vec<u8> {
    serde_json::to_vec(ops).expect("script ops serialize")
}

/// Stake `amount` SOUL. When the account holds no KCAL to pay fees, a claim
/// is folded in after the stake so the gas allowance can settle.
pub fn stake(address: &str, amount: f64, decimals: u32, fee_balance: f64) -> Vec<u8> {
    let ops = if fee_balance > 0.0 {
        vec![
            ScriptOp::AllowGas {
                from: address.to_string(),
                price: 1,
                limit: 9999,
            },
            stake_call(address, amount, decimals),
            ScriptOp::SpendGas {
                from: address.to_string(),
            },
        ]
    } else {
        vec![
            stake_call(address, amount, decimals),
            claim_call(address),
            ScriptOp::AllowGas {
                from: address.to_string(),
                price: 1,
                limit: 9999,
            },
            ScriptOp::SpendGas {
                from: address.to_string(),
            },
        ]
    };
    encode(&ops)
}

/// Claim accumulated KCAL rewards.
pub fn claim(address: &str) -> Vec<u8> {
    let ops = vec![
        ScriptOp::AllowGas {
            from: address.to_string(),
            price: 1,
            limit: 9999,
        },
        claim_call(address),
        ScriptOp::SpendGas {
            from: address.to_string(),
        },
    ];
    encode(&ops)
}
