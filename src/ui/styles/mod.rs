// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all components.

pub mod button;
pub mod container;
pub mod text_input;
pub mod toggle;
pub mod tooltip;
