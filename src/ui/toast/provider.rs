// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastProvider` keeps toasts in insertion order and removes them on
//! dismissal or when their deadline passes. Each removal hands back the
//! toast's `on_dismiss` message for the host to dispatch.
//!
//! Expiry is driven by a timer armed for the earliest pending deadline.
//! When that toast goes, the timer is re-armed for the next one, so a toast
//! disappears as soon as its own duration has elapsed.

use super::entry::{Toast, ToastId, ToastRequest};
use super::view::ToastView;
use crate::config::ToastConfig;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use iced::futures::SinkExt;
use iced::stream;
use iced::widget::{Column, Container};
use iced::{alignment, Element, Length, Subscription};
use std::time::{Duration, Instant};

/// Subscription ID for the expiry timer.
/// A new earliest deadline recreates the subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ExpiryTimerId(Instant);

/// Messages for toast state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Timer tick for checking deadlines.
    Tick(Instant),
}

/// Holds the visible toasts.
#[derive(Debug, Clone)]
pub struct ToastProvider<M> {
    toasts: Vec<Toast<M>>,
    default_duration: Duration,
    /// Re-check interval used if a wake-up lands before its deadline.
    tick_interval: Duration,
}

impl<M: Clone> Default for ToastProvider<M> {
    fn default() -> Self {
        Self::from_config(&ToastConfig::default())
    }
}

impl<M: Clone> ToastProvider<M> {
    /// Creates an empty provider with default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty provider with timings from `config`.
    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        Self {
            toasts: Vec::new(),
            default_duration: config.default_duration(),
            tick_interval: config.tick_interval(),
        }
    }

    /// Duration used for requests that don't set one.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Appends a toast and starts its countdown.
    pub fn add_toast(&mut self, request: ToastRequest<M>) -> ToastId {
        self.add_toast_at(request, Instant::now())
    }

    /// Appends a toast whose countdown starts at `now`.
    pub fn add_toast_at(&mut self, request: ToastRequest<M>, now: Instant) -> ToastId {
        let toast = Toast::from_request(request, self.default_duration, now);
        let id = toast.id();
        tracing::debug!(%id, duration = ?toast.duration(), "toast added");
        self.toasts.push(toast);
        id
    }

    /// Removes the toast with `id`, returning its dismiss message.
    ///
    /// Removing an unknown or already removed id does nothing.
    pub fn remove_toast(&mut self, id: ToastId) -> Option<M> {
        let pos = self.toasts.iter().position(|toast| toast.id() == id)?;
        let toast = self.toasts.remove(pos);
        tracing::debug!(%id, "toast removed");
        toast.on_dismiss
    }

    /// Removes every toast whose deadline has passed at `now`.
    ///
    /// Returns the dismiss messages of the removed toasts in display order.
    pub fn tick(&mut self, now: Instant) -> Vec<M> {
        let mut messages = Vec::new();
        self.toasts.retain_mut(|toast| {
            if toast.is_expired(now) {
                tracing::debug!(id = %toast.id(), "toast expired");
                messages.extend(toast.on_dismiss.take());
                false
            } else {
                true
            }
        });
        messages
    }

    /// Handles a toast message, returning the host messages to dispatch.
    pub fn handle_message(&mut self, message: Message) -> Vec<M> {
        match message {
            Message::Dismiss(id) => self.remove_toast(id).into_iter().collect(),
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Removes all toasts without emitting their dismiss messages.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Returns the toasts in display order.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast<M>> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.iter().any(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Whether any toast is waiting on a deadline.
    #[must_use]
    pub fn has_timers(&self) -> bool {
        self.toasts.iter().any(|toast| toast.deadline().is_some())
    }

    /// Earliest deadline among the timed toasts.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts.iter().filter_map(Toast::deadline).min()
    }

    /// Emits a [`Message::Tick`] once the earliest deadline has passed.
    ///
    /// Nothing runs while no toast is timed.
    pub fn subscription(&self) -> Subscription<Message> {
        let Some(deadline) = self.next_deadline() else {
            return Subscription::none();
        };
        let retry = self.tick_interval;

        Subscription::run_with(
            (ExpiryTimerId(deadline), retry),
            |&(ExpiryTimerId(deadline), retry)| {
                stream::channel(
                    1,
                    move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
                        tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
                        loop {
                            if output.send(Message::Tick(Instant::now())).await.is_err() {
                                break;
                            }
                            // Only reached if the tick above left the toast in place.
                            tokio::time::sleep(retry).await;
                        }
                    },
                )
            },
        )
    }

    /// Renders the toast stack in the bottom-right corner.
    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = self
            .toasts
            .iter()
            .map(|toast| {
                ToastView::from_toast(toast)
                    .on_dismiss(Message::Dismiss(toast.id()))
                    .view(i18n)
            })
            .collect();

        if toasts.is_empty() {
            return Container::new(Column::new())
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Host {
        Dismissed(&'static str),
    }

    fn request(title: &'static str, millis: u64) -> ToastRequest<Host> {
        ToastRequest::new()
            .title(title)
            .duration(Duration::from_millis(millis))
            .on_dismiss(Host::Dismissed(title))
    }

    #[test]
    fn new_provider_is_empty() {
        let provider: ToastProvider<Host> = ToastProvider::new();
        assert!(provider.is_empty());
        assert!(!provider.has_timers());
        assert_eq!(provider.default_duration(), Duration::from_millis(5000));
    }

    #[test]
    fn toasts_keep_insertion_order() {
        let mut provider = ToastProvider::new();
        let a = provider.add_toast(request("a", 1000));
        let b = provider.add_toast(request("b", 1000));
        let ids: Vec<_> = provider.toasts().map(Toast::id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn remove_returns_dismiss_message_once() {
        let mut provider = ToastProvider::new();
        let id = provider.add_toast(request("a", 1000));
        assert_eq!(provider.remove_toast(id), Some(Host::Dismissed("a")));
        assert!(provider.is_empty());
        assert_eq!(provider.remove_toast(id), None);
    }

    #[test]
    fn removed_toast_does_not_fire_on_tick() {
        let mut provider = ToastProvider::new();
        let now = Instant::now();
        let id = provider.add_toast_at(request("a", 100), now);
        let _ = provider.remove_toast(id);
        assert!(provider.tick(now + Duration::from_millis(150)).is_empty());
    }

    #[test]
    fn tick_removes_only_expired_toasts() {
        let mut provider = ToastProvider::new();
        let now = Instant::now();
        provider.add_toast_at(request("short", 100), now);
        let long = provider.add_toast_at(request("long", 300), now);

        let fired = provider.tick(now + Duration::from_millis(150));
        assert_eq!(fired, vec![Host::Dismissed("short")]);
        assert_eq!(provider.len(), 1);
        assert!(provider.contains(long));
    }

    #[test]
    fn zero_duration_toast_outlives_ticks() {
        let mut provider = ToastProvider::new();
        let now = Instant::now();
        provider.add_toast_at(request("sticky", 0), now);
        assert!(!provider.has_timers());
        assert!(provider.tick(now + Duration::from_secs(600)).is_empty());
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn handle_message_dispatches() {
        let mut provider = ToastProvider::new();
        let now = Instant::now();
        let id = provider.add_toast_at(request("a", 100), now);
        provider.add_toast_at(request("b", 100), now);

        assert_eq!(
            provider.handle_message(Message::Dismiss(id)),
            vec![Host::Dismissed("a")]
        );
        assert_eq!(
            provider.handle_message(Message::Tick(now + Duration::from_millis(100))),
            vec![Host::Dismissed("b")]
        );
        assert!(provider.is_empty());
    }

    #[test]
    fn toasts_with_distinct_durations_all_expire() {
        let mut provider = ToastProvider::new();
        let now = Instant::now();
        let durations: [(&'static str, u64); 6] = [
            ("d", 400),
            ("a", 100),
            ("f", 600),
            ("c", 300),
            ("e", 500),
            ("b", 200),
        ];
        for (title, millis) in durations {
            provider.add_toast_at(request(title, millis), now);
        }

        let mut fired = Vec::new();
        for step in 1..=7 {
            fired.extend(provider.tick(now + Duration::from_millis(step * 100)));
        }

        assert!(provider.is_empty());
        assert!(!provider.has_timers());
        assert_eq!(
            fired,
            ["a", "b", "c", "d", "e", "f"].map(Host::Dismissed).to_vec()
        );
    }

    #[test]
    fn next_deadline_tracks_earliest_toast() {
        let mut provider = ToastProvider::new();
        let now = Instant::now();
        assert_eq!(provider.next_deadline(), None);

        provider.add_toast_at(request("long", 5000), now);
        provider.add_toast_at(request("sticky", 0), now);
        assert_eq!(
            provider.next_deadline(),
            Some(now + Duration::from_millis(5000))
        );

        let later = now + Duration::from_millis(101);
        provider.add_toast_at(request("short", 100), later);
        assert_eq!(
            provider.next_deadline(),
            Some(later + Duration::from_millis(100))
        );

        // Expiring the short toast hands the timer back to the long one.
        assert_eq!(
            provider.tick(later + Duration::from_millis(100)),
            vec![Host::Dismissed("short")]
        );
        assert_eq!(
            provider.next_deadline(),
            Some(now + Duration::from_millis(5000))
        );
    }

    #[test]
    fn huge_duration_is_accepted_without_timer() {
        let mut provider = ToastProvider::new();
        let id = provider.add_toast(ToastRequest::<Host>::new().duration(Duration::MAX));
        assert!(provider.contains(id));
        assert!(!provider.has_timers());
        assert_eq!(provider.next_deadline(), None);
    }

    #[test]
    fn clear_drops_without_messages() {
        let mut provider = ToastProvider::new();
        provider.add_toast(request("a", 1000));
        provider.clear();
        assert!(provider.is_empty());
    }

    #[test]
    fn config_duration_is_used_as_default() {
        let config = ToastConfig {
            default_duration_ms: 250,
            ..ToastConfig::default()
        };
        let mut provider: ToastProvider<Host> = ToastProvider::from_config(&config);
        let now = Instant::now();
        provider.add_toast_at(ToastRequest::new().title("x"), now);
        assert_eq!(provider.tick(now + Duration::from_millis(250)).len(), 0);
        assert!(provider.is_empty());
    }
}
