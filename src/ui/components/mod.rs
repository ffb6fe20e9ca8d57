// SPDX-License-Identifier: MPL-2.0
//! Leaf controls.
//!
//! # Components
//!
//! - [`button`] - Variant-driven button with optional leading icon
//! - [`checkbox`] - Tri-state checkbox with label and description
//! - [`input`] - Text, password, search, email and file inputs
//! - [`radio`] - Radio group of labelled options

pub mod button;
pub mod checkbox;
pub mod input;
pub mod radio;

pub use button::Button;
pub use checkbox::{CheckState, Checkbox};
pub use input::{FieldState, Input, InputKind, InputState, InputVariant};
pub use radio::{RadioGroup, RadioItem};
