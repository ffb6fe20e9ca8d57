// SPDX-License-Identifier: MPL-2.0
//! Alert request record.

use crate::ui::variant::{Intent, Size};

/// Contents and callbacks of one alert.
///
/// Callbacks are host messages; the provider hands the matching one back
/// when the alert is confirmed, cancelled or closed.
#[derive(Debug, Clone)]
pub struct AlertRequest<M> {
    pub title: Option<String>,
    pub description: Option<String>,
    pub intent: Intent,
    pub size: Size,
    /// Cancel button label; localized default when `None`.
    pub cancel_text: Option<String>,
    /// Confirm button label; localized default when `None`.
    pub confirm_text: Option<String>,
    pub on_confirm: Option<M>,
    pub on_cancel: Option<M>,
    pub on_close: Option<M>,
}

impl<M> Default for AlertRequest<M> {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            intent: Intent::default(),
            size: Size::default(),
            cancel_text: None,
            confirm_text: None,
            on_confirm: None,
            on_cancel: None,
            on_close: None,
        }
    }
}

impl<M> AlertRequest<M> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = intent;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn on_confirm(mut self, message: M) -> Self {
        self.on_confirm = Some(message);
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, message: M) -> Self {
        self.on_cancel = Some(message);
        self
    }

    #[must_use]
    pub fn on_close(mut self, message: M) -> Self {
        self.on_close = Some(message);
        self
    }
}
