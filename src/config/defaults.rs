// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the library. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss duration and expiry re-check interval
//! - **Alert**: Backdrop behavior

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss duration for a toast (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Maximum accepted toast duration (in milliseconds). Zero disables expiry.
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Default interval between expiry re-checks when a timer wakes before its
/// deadline.
pub const DEFAULT_TOAST_TICK_MS: u64 = 100;

/// Minimum re-check interval (in milliseconds).
pub const MIN_TOAST_TICK_MS: u64 = 16;

/// Maximum re-check interval (in milliseconds).
pub const MAX_TOAST_TICK_MS: u64 = 1000;

// ==========================================================================
// Alert Defaults
// ==========================================================================

/// Whether clicking the dimmed backdrop behind an alert closes it.
pub const DEFAULT_ALERT_CLOSE_ON_BACKDROP: bool = true;
