// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification engine for the Iced GUI framework.
//!
//! Inline notifications pile up in a corner and leave on their own.
//! Blocking notifications sit alone above a backdrop until it is clicked.
//! The crate ships the engine, its widgets and a small demo application
//! with Fluent localization, TOML preferences and a diagnostics log.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;
