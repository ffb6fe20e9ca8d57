// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern:
//! stateless builders render from caller-owned data, and the two providers
//! hand callbacks back to the host as messages instead of running them.
//!
//! # Components
//!
//! - [`components`] - Leaf controls (button, checkbox, input, radio)
//! - [`checkbox_group`] - Hierarchical checkboxes with derived parent state
//! - [`alert`] - Modal alert dialog and its single-slot provider
//! - [`toast`] - Toast cards and the time-expiring toast provider
//! - [`providers`] - Mount/unmount registry for the alert and toast providers
//!
//! # Shared Infrastructure
//!
//! - [`variant`] - `(intent, variant, emphasis, size)` resolution
//! - [`styles`] - Iced style functions built from resolved variants
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG glyphs

pub mod alert;
pub mod checkbox_group;
pub mod components;
pub mod design_tokens;
pub mod icons;
pub mod providers;
pub mod styles;
pub mod theming;
pub mod toast;
pub mod variant;
