//! Specter - a terminal wallet interface for the Phantasma and Neo networks.
//!
//! This library provides the screen navigation stack, slide animations,
//! modal prompt handling and the per-frame orchestration that tie the
//! wallet screens together, along with the account-layer trait the UI is
//! written against.

// Core modules
pub mod account;
pub mod animation;
pub mod app;
pub mod cli;
pub mod config;
pub mod demo;
pub mod flow;
pub mod modal;
pub mod nav;
pub mod screens;
pub mod script;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use account::{Account, AccountSnapshot, AccountStore, HistoryEntry, TokenBalance};
pub use animation::{Animator, SlideDirection};
pub use config::Settings;
pub use flow::WalletFlow;
pub use modal::{ModalController, ModalKind, PromptResult};
pub use nav::{Navigator, WalletScreen};
