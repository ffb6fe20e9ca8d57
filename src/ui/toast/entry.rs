// SPDX-License-Identifier: MPL-2.0
//! Toast data structures.

use crate::ui::variant::{Intent, Size};
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
///
/// Drawn from a process-wide counter, so an id is never reused even after
/// its toast is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Toast chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastVariant {
    /// Filled with the intent color.
    #[default]
    Solid,
    /// Surface color with an intent border and text.
    Outline,
}

/// Everything needed to show a toast, minus its id.
///
/// Both `title` and `description` are optional; a toast without either
/// still renders its icon and close button.
#[derive(Debug, Clone)]
pub struct ToastRequest<M> {
    pub title: Option<String>,
    pub description: Option<String>,
    pub intent: Intent,
    pub variant: ToastVariant,
    pub size: Size,
    /// Time before auto-dismiss. `None` uses the provider default;
    /// `Some(Duration::ZERO)` and durations too long to schedule keep the
    /// toast until dismissed.
    pub duration: Option<Duration>,
    /// Emitted when the toast goes away, whether dismissed or expired.
    pub on_dismiss: Option<M>,
}

impl<M> Default for ToastRequest<M> {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            intent: Intent::default(),
            variant: ToastVariant::default(),
            size: Size::default(),
            duration: None,
            on_dismiss: None,
        }
    }
}

impl<M> ToastRequest<M> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
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
    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, message: M) -> Self {
        self.on_dismiss = Some(message);
        self
    }
}

/// A toast held by the provider.
#[derive(Debug, Clone)]
pub struct Toast<M> {
    id: ToastId,
    title: Option<String>,
    description: Option<String>,
    intent: Intent,
    variant: ToastVariant,
    size: Size,
    duration: Duration,
    deadline: Option<Instant>,
    pub(crate) on_dismiss: Option<M>,
}

impl<M> Toast<M> {
    /// Builds the entry for `request`, starting its countdown at `now`.
    pub(crate) fn from_request(request: ToastRequest<M>, default: Duration, now: Instant) -> Self {
        let duration = request.duration.unwrap_or(default);
        Self {
            id: ToastId::next(),
            title: request.title,
            description: request.description,
            intent: request.intent,
            variant: request.variant,
            size: request.size,
            duration,
            // A deadline past the clock's range means the toast never expires.
            deadline: (!duration.is_zero())
                .then(|| now.checked_add(duration))
                .flatten(),
            on_dismiss: request.on_dismiss,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn intent(&self) -> Intent {
        self.intent
    }

    #[must_use]
    pub fn variant(&self) -> ToastVariant {
        self.variant
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Instant after which the toast auto-dismisses, if timed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: Duration = Duration::from_millis(5000);

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = ToastId::next();
        let b = ToastId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn default_duration_applies_when_unset() {
        let now = Instant::now();
        let toast = Toast::from_request(ToastRequest::<()>::new().title("x"), DEFAULT, now);
        assert_eq!(toast.duration(), DEFAULT);
        assert_eq!(toast.deadline(), Some(now + DEFAULT));
    }

    #[test]
    fn zero_duration_never_expires() {
        let now = Instant::now();
        let request = ToastRequest::<()>::new().duration(Duration::ZERO);
        let toast = Toast::from_request(request, DEFAULT, now);
        assert!(toast.deadline().is_none());
        assert!(!toast.is_expired(now + Duration::from_secs(3600)));
    }

    #[test]
    fn unschedulable_duration_never_expires() {
        let now = Instant::now();
        let request = ToastRequest::<()>::new().duration(Duration::MAX);
        let toast = Toast::from_request(request, DEFAULT, now);
        assert_eq!(toast.duration(), Duration::MAX);
        assert!(toast.deadline().is_none());
        assert!(!toast.is_expired(now + Duration::from_secs(3600)));
    }

    #[test]
    fn expires_at_deadline() {
        let now = Instant::now();
        let request = ToastRequest::<()>::new().duration(Duration::from_millis(100));
        let toast = Toast::from_request(request, DEFAULT, now);
        assert!(!toast.is_expired(now + Duration::from_millis(99)));
        assert!(toast.is_expired(now + Duration::from_millis(100)));
    }

    #[test]
    fn request_without_text_is_accepted() {
        let toast = Toast::from_request(ToastRequest::<()>::new(), DEFAULT, Instant::now());
        assert!(toast.title().is_none());
        assert!(toast.description().is_none());
    }
}
