// SPDX-License-Identifier: MPL-2.0
//! Registry for the alert and toast providers.
//!
//! Hosts keep one `Providers` value in their state, mount the providers
//! they need at startup and reach them through [`Providers::alert`] and
//! [`Providers::toast`]. Asking for a provider that isn't mounted is a
//! wiring mistake and comes back as [`Error::ProviderNotMounted`].
//!
//! # Usage
//!
//! ```ignore
//! let mut providers = Providers::new();
//! providers.mount_alert(&config.alert);
//! providers.mount_toast(&config.toast);
//!
//! // anywhere in update
//! providers.toast()?.add_toast(ToastRequest::new().title("Saved"));
//!
//! // subscription
//! providers.subscription().map(Message::Providers)
//!
//! // update
//! Message::Providers(msg) => {
//!     let follow_ups = providers.update(msg);
//!     Task::batch(follow_ups.into_iter().map(Task::done))
//! }
//!
//! // view
//! providers.view(content, &i18n, Message::Providers)
//! ```

use crate::config::{AlertConfig, ToastConfig};
use crate::error::{Error, ProviderKind, Result};
use crate::i18n::fluent::I18n;
use crate::ui::alert::{self, AlertProvider};
use crate::ui::toast::{self, ToastProvider};
use iced::widget::Stack;
use iced::{Element, Length, Subscription};

/// Messages routed to the mounted providers.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderMessage {
    Alert(alert::Message),
    Toast(toast::Message),
}

/// Holds the mounted providers.
#[derive(Debug, Clone)]
pub struct Providers<M> {
    alert: Option<AlertProvider<M>>,
    toast: Option<ToastProvider<M>>,
}

impl<M> Default for Providers<M> {
    fn default() -> Self {
        Self {
            alert: None,
            toast: None,
        }
    }
}

impl<M: Clone + 'static> Providers<M> {
    /// Creates a registry with nothing mounted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a fresh alert provider, replacing any mounted one.
    pub fn mount_alert(&mut self, config: &AlertConfig) {
        tracing::debug!("alert provider mounted");
        self.alert = Some(AlertProvider::from_config(config));
    }

    /// Mounts a fresh toast provider, replacing any mounted one.
    pub fn mount_toast(&mut self, config: &ToastConfig) {
        tracing::debug!("toast provider mounted");
        self.toast = Some(ToastProvider::from_config(config));
    }

    /// Drops the alert provider and its open alert, if any.
    pub fn unmount_alert(&mut self) {
        if self.alert.take().is_some() {
            tracing::debug!("alert provider unmounted");
        }
    }

    /// Drops the toast provider with all its toasts and timers.
    pub fn unmount_toast(&mut self) {
        if self.toast.take().is_some() {
            tracing::debug!("toast provider unmounted");
        }
    }

    #[must_use]
    pub fn is_mounted(&self, kind: ProviderKind) -> bool {
        match kind {
            ProviderKind::Alert => self.alert.is_some(),
            ProviderKind::Toast => self.toast.is_some(),
        }
    }

    /// The mounted alert provider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProviderNotMounted`] if no alert provider is mounted.
    pub fn alert(&mut self) -> Result<&mut AlertProvider<M>> {
        self.alert
            .as_mut()
            .ok_or(Error::ProviderNotMounted(ProviderKind::Alert))
    }

    /// The mounted toast provider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProviderNotMounted`] if no toast provider is mounted.
    pub fn toast(&mut self) -> Result<&mut ToastProvider<M>> {
        self.toast
            .as_mut()
            .ok_or(Error::ProviderNotMounted(ProviderKind::Toast))
    }

    /// Routes a message to its provider and returns the host messages to
    /// dispatch. Messages for an unmounted provider are dropped.
    pub fn update(&mut self, message: ProviderMessage) -> Vec<M> {
        match message {
            ProviderMessage::Alert(message) => self
                .alert
                .as_mut()
                .and_then(|alert| alert.handle_message(message))
                .into_iter()
                .collect(),
            ProviderMessage::Toast(message) => self
                .toast
                .as_mut()
                .map(|toast| toast.handle_message(message))
                .unwrap_or_default(),
        }
    }

    /// Toast expiry timer while a mounted toast provider has timed toasts.
    pub fn subscription(&self) -> Subscription<ProviderMessage> {
        self.toast
            .as_ref()
            .map_or_else(Subscription::none, |toast| {
                toast.subscription().map(ProviderMessage::Toast)
            })
    }

    /// Layers toasts, then the open alert, over `content`.
    ///
    /// `on_message` wraps provider messages into the host's message type.
    pub fn view<'a, Message: 'a>(
        &'a self,
        content: impl Into<Element<'a, Message>>,
        i18n: &I18n,
        on_message: impl Fn(ProviderMessage) -> Message + Clone + 'a,
    ) -> Element<'a, Message> {
        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content);

        if let Some(toast) = self.toast.as_ref().filter(|toast| !toast.is_empty()) {
            let wrap = on_message.clone();
            stack = stack.push(
                toast
                    .view(i18n)
                    .map(move |message| wrap(ProviderMessage::Toast(message))),
            );
        }
        if let Some(dialog) = self.alert.as_ref().and_then(|alert| alert.view(i18n)) {
            stack = stack
                .push(dialog.map(move |message| on_message(ProviderMessage::Alert(message))));
        }

        stack.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::alert::AlertRequest;
    use crate::ui::toast::ToastRequest;
    use std::time::{Duration, Instant};

    #[derive(Debug, Clone, PartialEq)]
    enum Host {
        Confirmed,
        Dismissed,
    }

    fn mounted() -> Providers<Host> {
        let mut providers = Providers::new();
        providers.mount_alert(&AlertConfig::default());
        providers.mount_toast(&ToastConfig::default());
        providers
    }

    #[test]
    fn hooks_fail_when_not_mounted() {
        let mut providers: Providers<Host> = Providers::new();
        assert_eq!(
            providers.alert().err(),
            Some(Error::ProviderNotMounted(ProviderKind::Alert))
        );
        assert_eq!(
            providers.toast().err(),
            Some(Error::ProviderNotMounted(ProviderKind::Toast))
        );
    }

    #[test]
    fn mount_and_unmount_track_state() {
        let mut providers = mounted();
        assert!(providers.is_mounted(ProviderKind::Alert));
        assert!(providers.is_mounted(ProviderKind::Toast));
        providers.unmount_toast();
        assert!(!providers.is_mounted(ProviderKind::Toast));
        assert!(providers.toast().is_err());
        assert!(providers.alert().is_ok());
    }

    #[test]
    fn unmount_drops_pending_toasts() {
        let mut providers = mounted();
        providers
            .toast()
            .expect("toast provider mounted")
            .add_toast(ToastRequest::new().on_dismiss(Host::Dismissed));
        providers.unmount_toast();
        providers.mount_toast(&ToastConfig::default());
        assert!(providers.toast().expect("remounted").is_empty());
    }

    #[test]
    fn update_routes_to_providers() {
        let mut providers = mounted();
        providers
            .alert()
            .expect("alert provider mounted")
            .open_alert(AlertRequest::new("a").on_confirm(Host::Confirmed));
        assert_eq!(
            providers.update(ProviderMessage::Alert(alert::Message::Confirm)),
            vec![Host::Confirmed]
        );

        let now = Instant::now();
        let request = ToastRequest::new()
            .duration(Duration::from_millis(100))
            .on_dismiss(Host::Dismissed);
        providers
            .toast()
            .expect("toast provider mounted")
            .add_toast_at(request, now);
        assert_eq!(
            providers.update(ProviderMessage::Toast(toast::Message::Tick(
                now + Duration::from_millis(150)
            ))),
            vec![Host::Dismissed]
        );
    }

    #[test]
    fn view_layers_overlays() {
        let i18n = I18n::new(Some("en-US".to_string()), &crate::config::Config::default());
        let mut providers = mounted();
        providers
            .alert()
            .expect("alert provider mounted")
            .open_alert(AlertRequest::new("a"));
        providers
            .toast()
            .expect("toast provider mounted")
            .add_toast(ToastRequest::new().title("t"));
        let _: Element<'_, ProviderMessage> =
            providers.view(iced::widget::text("content"), &i18n, |message| message);
    }

    #[test]
    fn messages_for_unmounted_providers_are_dropped() {
        let mut providers: Providers<Host> = Providers::new();
        assert!(providers
            .update(ProviderMessage::Alert(alert::Message::Close))
            .is_empty());
    }
}
