// SPDX-License-Identifier: MPL-2.0
//! Modal alerts.
//!
//! - [`request`] - `AlertRequest` builder with confirm, cancel and close callbacks
//! - [`provider`] - `AlertProvider`, a single slot that hands callbacks back
//! - [`dialog`] - `AlertDialog` widget, usable without the provider

pub mod dialog;
pub mod provider;
pub mod request;

pub use dialog::AlertDialog;
pub use provider::{AlertProvider, Message};
pub use request::AlertRequest;
