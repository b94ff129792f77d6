//! acctview-core — account view library.
//!
//! Provides:
//! - `models` — account snapshot, transactions, sample data
//! - `service` — backend capability (`AccountService`) and its simulated implementation
//! - `config` — view settings and account data loading
//! - `fmt` — formatting helpers (points, keys, timestamps)
//!
//! With `tui` feature (default):
//! - `tui` — terminal rendering (ratatui/crossterm), state, input, widgets
//! - `view` — view models derived from tui state

pub mod config;
pub mod fmt;
pub mod models;
pub mod service;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "tui")]
pub mod view;
