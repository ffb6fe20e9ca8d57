// SPDX-License-Identifier: MPL-2.0
//! Component gallery: one window showing every control, the alert provider
//! and the toast provider wired together the way a host application would.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::alert::AlertRequest;
use crate::ui::checkbox_group::{CheckboxGroup, CheckboxItem, Selection};
use crate::ui::components::input::{Event as InputEvent, InputState};
use crate::ui::components::FieldState;
use crate::ui::providers::Providers;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::ToastRequest;
use crate::ui::variant::Intent;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

const SHORT_TOAST: Duration = Duration::from_millis(1500);
const MIN_NAME_LEN: usize = 3;

/// Entry point used by `main.rs`.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a reusable boot function
    let boot = move || Gallery::new(flags.clone());

    iced::application(boot, Gallery::update, Gallery::view)
        .title(Gallery::title)
        .theme(Gallery::theme)
        .subscription(Gallery::subscription)
        .run()
}

/// Gallery state.
pub struct Gallery {
    i18n: I18n,
    theme_mode: ThemeMode,
    providers: Providers<Message>,

    name: String,
    password: String,
    search: String,
    name_input: InputState,
    password_input: InputState,
    search_input: InputState,
    attachment_input: InputState,

    terms: bool,
    plan: Option<String>,
    fruits: CheckboxGroup,
    basket: Selection,
    next_toast: u32,
}

impl fmt::Debug for Gallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gallery")
            .field("theme_mode", &self.theme_mode)
            .field("terms", &self.terms)
            .field("plan", &self.plan)
            .field("basket", &self.basket)
            .finish_non_exhaustive()
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::with_config(None, &Config::default())
    }
}

impl Gallery {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let mut gallery = Self::with_config(flags.lang, &config);
        if let Some(theme) = flags.theme {
            gallery.theme_mode = theme;
        }

        if let Some(key) = warning {
            gallery.push_toast(
                ToastRequest::new()
                    .intent(Intent::Warning)
                    .title(gallery.i18n.tr(&key)),
            );
        }

        (gallery, Task::none())
    }

    fn with_config(lang: Option<String>, config: &Config) -> Self {
        let i18n = I18n::new(lang, config);
        let mut providers = Providers::new();
        providers.mount_alert(&config.alert);
        providers.mount_toast(&config.toast);

        let fruits = CheckboxGroup::new(fruit_tree())
            .label(i18n.tr("gallery-fruits"))
            .description(i18n.tr("gallery-fruits-description"));

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            providers,
            name: String::new(),
            password: String::new(),
            search: String::new(),
            name_input: InputState::new(),
            password_input: InputState::new(),
            search_input: InputState::new(),
            attachment_input: InputState::new().with_filter("Images", &["png", "jpg", "svg"]),
            terms: false,
            plan: None,
            fruits,
            basket: Selection::new(),
            next_toast: 0,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("gallery-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.providers.subscription().map(Message::Providers)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Providers(message) => {
                let follow_ups = self.providers.update(message);
                Task::batch(follow_ups.into_iter().map(Task::done))
            }
            Message::ButtonPressed(intent) => {
                let name = format!("{intent:?}");
                let title = self
                    .i18n
                    .tr_with_args("gallery-pressed", &[("intent", name.as_str())]);
                self.push_toast(ToastRequest::new().intent(intent).title(title));
                Task::none()
            }
            Message::ToggleTheme => {
                self.theme_mode = if self.theme_mode.is_dark() {
                    ThemeMode::Light
                } else {
                    ThemeMode::Dark
                };
                Task::none()
            }
            Message::OpenAlert => {
                self.open_alert(self.delete_alert());
                Task::none()
            }
            Message::ReplaceAlert => {
                self.open_alert(self.delete_alert());
                self.open_alert(
                    AlertRequest::new(self.i18n.tr("gallery-second-alert-title"))
                        .intent(Intent::Warning)
                        .on_confirm(Message::AlertConfirmed)
                        .on_cancel(Message::AlertCancelled),
                );
                Task::none()
            }
            Message::AlertConfirmed => {
                let title = self.i18n.tr("gallery-alert-confirmed");
                self.push_toast(ToastRequest::new().intent(Intent::Success).title(title));
                Task::none()
            }
            Message::AlertCancelled => {
                let title = self.i18n.tr("gallery-alert-cancelled");
                self.push_toast(ToastRequest::new().intent(Intent::Secondary).title(title));
                Task::none()
            }
            Message::AddToast(intent) => {
                let request = self.saved_toast().intent(intent);
                self.push_toast(request);
                Task::none()
            }
            Message::AddShortToast => {
                let request = self.saved_toast().duration(SHORT_TOAST);
                self.push_toast(request);
                Task::none()
            }
            Message::ToastDismissed(number) => {
                tracing::info!(number, "toast dismissed");
                Task::none()
            }
            Message::Name(message) => {
                let (event, task) = self.name_input.update(message);
                if let Some(event) = event {
                    self.on_text_event(event, Field::Name);
                }
                task.map(Message::Name)
            }
            Message::Password(message) => {
                let (event, task) = self.password_input.update(message);
                if let Some(event) = event {
                    self.on_text_event(event, Field::Password);
                }
                task.map(Message::Password)
            }
            Message::Search(message) => {
                let (event, task) = self.search_input.update(message);
                if let Some(event) = event {
                    self.on_text_event(event, Field::Search);
                }
                task.map(Message::Search)
            }
            Message::Attachment(message) => {
                let (event, task) = self.attachment_input.update(message);
                if let Some(InputEvent::FileSelected(Some(_))) = event {
                    let name = self.attachment_input.file_name().unwrap_or_default();
                    let title = self
                        .i18n
                        .tr_with_args("gallery-file-selected", &[("name", name.as_str())]);
                    self.push_toast(ToastRequest::new().title(title));
                }
                task.map(Message::Attachment)
            }
            Message::TermsToggled(checked) => {
                self.terms = checked;
                Task::none()
            }
            Message::PlanSelected(plan) => {
                self.plan = Some(plan);
                Task::none()
            }
            Message::FruitsChanged(selection) => {
                self.basket = selection;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Validation state of the name field.
    fn name_state(&self) -> FieldState {
        match self.name.chars().count() {
            0 => FieldState::Default,
            n if n < MIN_NAME_LEN => FieldState::Error,
            _ => FieldState::Success,
        }
    }

    fn on_text_event(&mut self, event: InputEvent, field: Field) {
        match event {
            InputEvent::Changed(value) => match field {
                Field::Name => self.name = value,
                Field::Password => self.password = value,
                Field::Search => self.search = value,
            },
            InputEvent::Submitted => {
                let value = match field {
                    Field::Name => self.name.clone(),
                    Field::Password => "*".repeat(self.password.chars().count()),
                    Field::Search => self.search.clone(),
                };
                let title = self
                    .i18n
                    .tr_with_args("gallery-submitted", &[("value", value.as_str())]);
                self.push_toast(ToastRequest::new().title(title));
            }
            InputEvent::FileSelected(_) => {}
        }
    }

    fn delete_alert(&self) -> AlertRequest<Message> {
        AlertRequest::new(self.i18n.tr("gallery-alert-title"))
            .description(self.i18n.tr("gallery-alert-description"))
            .intent(Intent::Danger)
            .on_confirm(Message::AlertConfirmed)
            .on_cancel(Message::AlertCancelled)
    }

    fn saved_toast(&self) -> ToastRequest<Message> {
        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        ToastRequest::new()
            .title(self.i18n.tr("gallery-toast-title"))
            .description(
                self.i18n
                    .tr_with_args("gallery-toast-description", &[("time", time.as_str())]),
            )
    }

    fn open_alert(&mut self, request: AlertRequest<Message>) {
        match self.providers.alert() {
            Ok(alert) => alert.open_alert(request),
            Err(err) => tracing::warn!("{}", err),
        }
    }

    fn push_toast(&mut self, request: ToastRequest<Message>) {
        self.next_toast += 1;
        let request = request.on_dismiss(Message::ToastDismissed(self.next_toast));
        match self.providers.toast() {
            Ok(toast) => {
                toast.add_toast(request);
            }
            Err(err) => tracing::warn!("{}", err),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Password,
    Search,
}

fn fruit_tree() -> Vec<CheckboxItem> {
    vec![
        CheckboxItem::new("fruits", "Fruits").children([
            CheckboxItem::new("apple", "Apple"),
            CheckboxItem::new("banana", "Banana").description("Ripe only"),
            CheckboxItem::new("citrus", "Citrus").children([
                CheckboxItem::new("orange", "Orange"),
                CheckboxItem::new("lemon", "Lemon"),
            ]),
        ]),
        CheckboxItem::new("nuts", "Nuts"),
    ]
}
