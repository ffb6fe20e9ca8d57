// SPDX-License-Identifier: MPL-2.0
//! `iced_kit` is a variant-driven component library for the Iced GUI
//! framework.
//!
//! It provides styled leaf controls, a hierarchical checkbox group, and
//! alert and toast providers that hand their callbacks back to the host
//! application as messages. The [`gallery`] module is a runnable showcase
//! of all of them.

pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
