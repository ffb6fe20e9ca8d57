// SPDX-License-Identifier: MPL-2.0
//! Toast notifications with timed auto-dismiss.
//!
//! # Components
//!
//! - [`entry`] - `Toast`, `ToastId` and the `ToastRequest` builder
//! - [`provider`] - `ToastProvider` for ordering, expiry and removal
//! - [`view`] - `ToastView` card widget
//!
//! # Usage
//!
//! ```ignore
//! use iced_kit::ui::toast::{ToastProvider, ToastRequest};
//!
//! let mut toasts = ToastProvider::new();
//! toasts.add_toast(ToastRequest::new().title("Saved").on_dismiss(Message::Saved));
//!
//! // subscription
//! toasts.subscription().map(Message::Toast)
//!
//! // update
//! Message::Toast(msg) => {
//!     let follow_ups = toasts.handle_message(msg);
//!     Task::batch(follow_ups.into_iter().map(Task::done))
//! }
//! ```
//!
//! Durations default to 5 seconds; a zero duration keeps the toast until it
//! is dismissed. Toasts stack bottom-right in insertion order.

pub mod entry;
pub mod provider;
pub mod view;

pub use entry::{Toast, ToastId, ToastRequest, ToastVariant};
pub use provider::{Message, ToastProvider};
pub use view::ToastView;
