// SPDX-License-Identifier: MPL-2.0
//! Single-slot alert state.
//!
//! At most one alert is open. Opening another replaces it outright and the
//! replaced request's callbacks are dropped unseen.

use super::dialog::AlertDialog;
use super::request::AlertRequest;
use crate::config::AlertConfig;
use crate::i18n::fluent::I18n;
use iced::Element;

/// Messages emitted by the provider's dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Confirm,
    Cancel,
    Close,
    /// Click on the dimmed area around the dialog.
    Backdrop,
}

/// Holds the open alert, if any.
#[derive(Debug, Clone)]
pub struct AlertProvider<M> {
    slot: Option<AlertRequest<M>>,
    close_on_backdrop: bool,
}

impl<M: Clone> Default for AlertProvider<M> {
    fn default() -> Self {
        Self::from_config(&AlertConfig::default())
    }
}

impl<M: Clone> AlertProvider<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &AlertConfig) -> Self {
        Self {
            slot: None,
            close_on_backdrop: config.close_on_backdrop,
        }
    }

    /// Shows `request`, replacing any open alert without running its callbacks.
    pub fn open_alert(&mut self, request: AlertRequest<M>) {
        if let Some(previous) = self.slot.replace(request) {
            tracing::debug!(title = ?previous.title, "alert replaced");
        }
    }

    /// Clears the slot without running any callback.
    pub fn close_alert(&mut self) {
        if self.slot.take().is_some() {
            tracing::debug!("alert closed");
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.slot.is_some()
    }

    /// The open request, if any.
    pub fn current(&self) -> Option<&AlertRequest<M>> {
        self.slot.as_ref()
    }

    /// Empties the slot and returns the confirm callback.
    pub fn confirm(&mut self) -> Option<M> {
        self.slot.take().and_then(|request| request.on_confirm)
    }

    /// Empties the slot and returns the cancel callback.
    pub fn cancel(&mut self) -> Option<M> {
        self.slot.take().and_then(|request| request.on_cancel)
    }

    /// Empties the slot and returns the close callback.
    pub fn close(&mut self) -> Option<M> {
        self.slot.take().and_then(|request| request.on_close)
    }

    /// Handles a dialog message, returning the host message to dispatch.
    pub fn handle_message(&mut self, message: Message) -> Option<M> {
        match message {
            Message::Confirm => self.confirm(),
            Message::Cancel => self.cancel(),
            Message::Close => self.close(),
            Message::Backdrop if self.close_on_backdrop => self.close(),
            Message::Backdrop => None,
        }
    }

    /// Renders the open alert with close, cancel and confirm controls.
    pub fn view<'a>(&'a self, i18n: &I18n) -> Option<Element<'a, Message>> {
        let request = self.slot.as_ref()?;
        Some(
            AlertDialog::from_request(request)
                .on_close(Message::Close)
                .on_cancel(Message::Cancel)
                .on_confirm(Message::Confirm)
                .on_backdrop(Message::Backdrop)
                .view(i18n),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Host {
        Confirmed(&'static str),
        Cancelled(&'static str),
        Closed(&'static str),
    }

    fn request(name: &'static str) -> AlertRequest<Host> {
        AlertRequest::new(name)
            .on_confirm(Host::Confirmed(name))
            .on_cancel(Host::Cancelled(name))
            .on_close(Host::Closed(name))
    }

    #[test]
    fn open_then_confirm_returns_callback_and_clears() {
        let mut provider = AlertProvider::new();
        provider.open_alert(request("a"));
        assert!(provider.is_open());
        assert_eq!(provider.confirm(), Some(Host::Confirmed("a")));
        assert!(!provider.is_open());
    }

    #[test]
    fn replacing_drops_previous_callbacks() {
        let mut provider = AlertProvider::new();
        provider.open_alert(request("a"));
        provider.open_alert(request("b"));
        assert_eq!(provider.current().and_then(|r| r.title.as_deref()), Some("b"));
        assert_eq!(provider.cancel(), Some(Host::Cancelled("b")));
        assert_eq!(provider.cancel(), None);
    }

    #[test]
    fn close_alert_runs_nothing() {
        let mut provider = AlertProvider::new();
        provider.open_alert(request("a"));
        provider.close_alert();
        assert!(!provider.is_open());
        assert_eq!(provider.close(), None);
    }

    #[test]
    fn missing_callback_still_clears_slot() {
        let mut provider: AlertProvider<Host> = AlertProvider::new();
        provider.open_alert(AlertRequest::new("no callbacks"));
        assert_eq!(provider.confirm(), None);
        assert!(!provider.is_open());
    }

    #[test]
    fn backdrop_respects_config() {
        let mut provider = AlertProvider::new();
        provider.open_alert(request("a"));
        assert_eq!(
            provider.handle_message(Message::Backdrop),
            Some(Host::Closed("a"))
        );

        let mut provider = AlertProvider::from_config(&AlertConfig {
            close_on_backdrop: false,
        });
        provider.open_alert(request("a"));
        assert_eq!(provider.handle_message(Message::Backdrop), None);
        assert!(provider.is_open());
    }

    #[test]
    fn view_is_none_when_closed() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        let mut provider = AlertProvider::new();
        assert!(provider.view(&i18n).is_none());
        provider.open_alert(request("a"));
        assert!(provider.view(&i18n).is_some());
    }
}
