// SPDX-License-Identifier: MPL-2.0
//! Text field with label, helper message and validation state.
//!
//! Covers plain text, email, search, password (with a reveal toggle) and file
//! inputs. The file kind renders a clickable field that opens the native file
//! picker; the selected path lives in [`InputState`] alongside the password
//! reveal flag, while text values stay with the caller.
//!
//! # Usage
//!
//! ```ignore
//! // update
//! Message::Password(msg) => {
//!     let (event, task) = self.password_state.update(msg);
//!     if let Some(input::Event::Changed(value)) = event {
//!         self.password = value;
//!     }
//!     return task.map(Message::Password);
//! }
//!
//! // view
//! Input::new(InputKind::Password)
//!     .label("Password")
//!     .value(&self.password)
//!     .view(&self.password_state, &self.i18n)
//!     .map(Message::Password)
//! ```

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, text_input as field_styles, tooltip};
use crate::ui::theming::ColorScheme;
use crate::ui::variant::{Intent, Size};
use iced::widget::{button, container, text, text_input, Column, Row, Space, Stack};
use iced::{alignment, Element, Length, Padding, Task, Theme};
use std::path::{Path, PathBuf};

/// Kind of value the input collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Search,
    Email,
    File,
}

/// Field chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputVariant {
    #[default]
    Outline,
    Solid,
    Ghost,
    Underline,
}

/// Validation state, reflected in border, label and message colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldState {
    #[default]
    Default,
    Error,
    Success,
}

/// Messages emitted by an input.
#[derive(Debug, Clone)]
pub enum Message {
    Changed(String),
    Submitted,
    ToggleReveal,
    PickFile,
    FilePicked(Option<PathBuf>),
    ClearFile,
}

/// Events surfaced to the owner after [`InputState::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Changed(String),
    Submitted,
    /// A file was picked, or cleared when `None`.
    FileSelected(Option<PathBuf>),
}

/// Component-local state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    revealed: bool,
    file: Option<PathBuf>,
    filter: Option<(String, Vec<String>)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the file picker to the given extensions.
    pub fn with_filter(mut self, name: impl Into<String>, extensions: &[&str]) -> Self {
        self.filter = Some((
            name.into(),
            extensions.iter().map(|ext| (*ext).to_string()).collect(),
        ));
        self
    }

    /// Whether the password is shown in clear text.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Display name of the selected file.
    pub fn file_name(&self) -> Option<String> {
        self.file
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// Applies a message and reports what the owner needs to know.
    pub fn update(&mut self, message: Message) -> (Option<Event>, Task<Message>) {
        match message {
            Message::Changed(value) => (Some(Event::Changed(value)), Task::none()),
            Message::Submitted => (Some(Event::Submitted), Task::none()),
            Message::ToggleReveal => {
                self.revealed = !self.revealed;
                (None, Task::none())
            }
            Message::PickFile => {
                let filter = self.filter.clone();
                let directory = self
                    .file
                    .as_deref()
                    .and_then(Path::parent)
                    .map(Path::to_path_buf);
                let task = Task::perform(
                    async move {
                        let mut dialog = rfd::AsyncFileDialog::new();
                        if let Some((name, extensions)) = &filter {
                            dialog = dialog.add_filter(name.as_str(), extensions.as_slice());
                        }
                        if let Some(dir) = directory {
                            if dir.exists() {
                                dialog = dialog.set_directory(&dir);
                            }
                        }
                        dialog.pick_file().await.map(|h| h.path().to_path_buf())
                    },
                    Message::FilePicked,
                );
                (None, task)
            }
            // A cancelled dialog keeps the previous selection.
            Message::FilePicked(None) => (None, Task::none()),
            Message::FilePicked(Some(path)) => {
                tracing::debug!(path = %path.display(), "file selected");
                self.file = Some(path.clone());
                (Some(Event::FileSelected(Some(path))), Task::none())
            }
            Message::ClearFile => {
                if self.file.take().is_some() {
                    (Some(Event::FileSelected(None)), Task::none())
                } else {
                    (None, Task::none())
                }
            }
        }
    }
}

/// Configuration for the Input component.
#[derive(Debug, Clone, Default)]
pub struct Input {
    kind: InputKind,
    variant: InputVariant,
    size: Size,
    state: FieldState,
    value: String,
    label: Option<String>,
    message: Option<String>,
    placeholder: Option<String>,
    disabled: bool,
}

struct FieldMetrics {
    height: f32,
    padding_x: f32,
    font_size: f32,
}

impl Input {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Inputs come in Sm, Md and Lg; Xl renders as Lg.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn state(mut self, state: FieldState) -> Self {
        self.state = state;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Helper or validation message shown below the field.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn metrics(&self) -> FieldMetrics {
        match self.size {
            Size::Sm => FieldMetrics {
                height: sizing::INPUT_SM,
                padding_x: spacing::SM,
                font_size: typography::CAPTION,
            },
            Size::Md => FieldMetrics {
                height: sizing::CONTROL_MD,
                padding_x: spacing::SM,
                font_size: typography::BODY,
            },
            Size::Lg | Size::Xl => FieldMetrics {
                height: sizing::INPUT_LG,
                padding_x: spacing::MD,
                font_size: typography::BODY_LG,
            },
        }
    }

    pub fn view<'a>(self, state: &InputState, i18n: &I18n) -> Element<'a, Message> {
        let field = match self.kind {
            InputKind::File => self.file_field(state, i18n),
            _ => self.text_field(state, i18n),
        };

        let field = if self.variant == InputVariant::Underline {
            Column::new()
                .push(field)
                .push(
                    container(Space::new())
                        .width(Length::Fill)
                        .height(Length::Fixed(border::WIDTH_MD))
                        .style(field_styles::underline(self.state)),
                )
                .into()
        } else {
            field
        };

        let mut column = Column::new().spacing(spacing::XS).width(Length::Fill);
        if let Some(label) = self.label.clone() {
            let (field_state, disabled) = (self.state, self.disabled);
            column = column.push(text(label).size(typography::BODY).style(
                move |theme: &Theme| text::Style {
                    color: Some(label_color(theme, field_state, disabled)),
                },
            ));
        }
        column = column.push(field);
        if let Some(message) = self.message.clone() {
            let field_state = self.state;
            column = column.push(text(message).size(typography::CAPTION).style(
                move |theme: &Theme| text::Style {
                    color: Some(
                        field_styles::state_color(field_state)
                            .unwrap_or(ColorScheme::for_theme(theme).text_muted),
                    ),
                },
            ));
        }

        column.into()
    }

    fn text_field<'a>(&self, state: &InputState, i18n: &I18n) -> Element<'a, Message> {
        let metrics = self.metrics();
        let icon_size = sizing::ICON_SM;
        let inset = metrics.padding_x + icon_size + spacing::XS;

        let placeholder = match (&self.placeholder, self.kind) {
            (Some(placeholder), _) => placeholder.clone(),
            (None, InputKind::Search) => i18n.tr("input-search-placeholder"),
            (None, _) => String::new(),
        };

        let left = (self.kind == InputKind::Search).then(|| {
            Element::from(muted_icon(icons::search(), icon_size))
        });
        let right = self.right_adornment(state, i18n, icon_size);

        let padding_y = ((metrics.height - metrics.font_size * 1.3) / 2.0).max(0.0);
        let padding = Padding {
            top: padding_y,
            bottom: padding_y,
            left: if left.is_some() { inset } else { metrics.padding_x },
            right: if right.is_some() { inset } else { metrics.padding_x },
        };

        let mut input = text_input(&placeholder, &self.value)
            .secure(self.kind == InputKind::Password && !state.is_revealed())
            .size(metrics.font_size)
            .padding(padding)
            .width(Length::Fill)
            .style(field_styles::field(self.variant, self.state));
        if !self.disabled {
            input = input
                .on_input(Message::Changed)
                .on_submit(Message::Submitted);
        }

        let overlay = adornment_row(left, right, metrics.padding_x, metrics.height);

        Stack::new()
            .push(input)
            .push(overlay)
            .width(Length::Fill)
            .into()
    }

    fn file_field<'a>(&self, state: &InputState, i18n: &I18n) -> Element<'a, Message> {
        let metrics = self.metrics();
        let icon_size = sizing::ICON_SM;
        let file_name = state.file_name();

        let leading = if file_name.is_some() {
            icons::file()
        } else {
            icons::upload()
        };
        let has_file = file_name.is_some();
        let display = file_name
            .or_else(|| self.placeholder.clone())
            .unwrap_or_else(|| i18n.tr("input-file-placeholder"));

        let label = text(display)
            .size(metrics.font_size)
            .width(Length::Fill)
            .style(move |theme: &Theme| {
                let scheme = ColorScheme::for_theme(theme);
                text::Style {
                    color: Some(if has_file {
                        scheme.text_primary
                    } else {
                        scheme.text_muted
                    }),
                }
            });

        let picker = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(muted_icon(leading, icon_size))
                .push(label),
        )
        .padding(0)
        .width(Length::Fill)
        .on_press_maybe((!self.disabled).then_some(Message::PickFile))
        .style(button_styles::bare);

        let mut row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(picker);
        if let Some(adornment) = self.right_adornment(state, i18n, icon_size) {
            row = row.push(adornment);
        }

        container(row)
            .padding([0.0, metrics.padding_x])
            .width(Length::Fill)
            .height(Length::Fixed(metrics.height))
            .align_y(alignment::Vertical::Center)
            .style(field_styles::file_field(
                self.variant,
                self.state,
                self.disabled,
            ))
            .into()
    }

    /// Clear button for a selected file, reveal toggle for passwords,
    /// otherwise the validation icon.
    fn right_adornment<'a>(
        &self,
        state: &InputState,
        i18n: &I18n,
        icon_size: f32,
    ) -> Option<Element<'a, Message>> {
        match self.kind {
            InputKind::File if state.selected_file().is_some() => Some(adornment_button(
                icons::x(),
                icon_size,
                i18n.tr("input-file-clear"),
                (!self.disabled).then_some(Message::ClearFile),
            )),
            InputKind::Password => {
                let (icon, tip) = if state.is_revealed() {
                    (icons::eye_off(), i18n.tr("input-password-hide"))
                } else {
                    (icons::eye(), i18n.tr("input-password-show"))
                };
                Some(adornment_button(
                    icon,
                    icon_size,
                    tip,
                    (!self.disabled).then_some(Message::ToggleReveal),
                ))
            }
            _ => match self.state {
                FieldState::Default => None,
                FieldState::Error => Some(
                    icons::tinted(icons::circle_alert(), icon_size, Intent::Danger.color()).into(),
                ),
                FieldState::Success => Some(
                    icons::tinted(icons::circle_check(), icon_size, Intent::Primary.color())
                        .into(),
                ),
            },
        }
    }
}

fn label_color(theme: &Theme, state: FieldState, disabled: bool) -> iced::Color {
    let scheme = ColorScheme::for_theme(theme);
    if disabled {
        return scheme.text_muted;
    }
    field_styles::state_color(state).unwrap_or(scheme.text_primary)
}

fn muted_icon(icon: iced::widget::Svg<'static>, size: f32) -> iced::widget::Svg<'static> {
    icons::sized(icon, size).style(|theme: &Theme, _status| iced::widget::svg::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    })
}

fn adornment_button<'a>(
    icon: iced::widget::Svg<'static>,
    size: f32,
    tip: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let glyph = icons::sized(icon, size).style(|theme: &Theme, status| {
        let scheme = ColorScheme::for_theme(theme);
        iced::widget::svg::Style {
            color: Some(match status {
                iced::widget::svg::Status::Hovered => scheme.text_primary,
                iced::widget::svg::Status::Idle => scheme.text_muted,
            }),
        }
    });
    let control = button(glyph)
        .padding(spacing::XXS)
        .on_press_maybe(on_press)
        .style(|theme: &Theme, status| {
            button_styles::adornment(ColorScheme::for_theme(theme).text_primary)(theme, status)
        });
    tooltip::styled(control, tip, tooltip::Position::Top).into()
}

/// Icons layered over a text input, pinned to its left and right edges.
fn adornment_row<'a>(
    left: Option<Element<'a, Message>>,
    right: Option<Element<'a, Message>>,
    padding_x: f32,
    height: f32,
) -> Element<'a, Message> {
    let mut row = Row::new()
        .align_y(alignment::Vertical::Center)
        .padding([0.0, padding_x])
        .height(Length::Fixed(height))
        .width(Length::Fill);
    if let Some(left) = left {
        row = row.push(left);
    }
    row = row.push(Space::new().width(Length::Fill));
    if let Some(right) = right {
        row = row.push(right);
    }
    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn toggle_reveal_flips_state_without_event() {
        let mut state = InputState::new();
        let (event, _) = state.update(Message::ToggleReveal);
        assert!(event.is_none());
        assert!(state.is_revealed());
        let _ = state.update(Message::ToggleReveal);
        assert!(!state.is_revealed());
    }

    #[test]
    fn changed_and_submitted_are_forwarded() {
        let mut state = InputState::new();
        let (event, _) = state.update(Message::Changed("abc".to_string()));
        assert_eq!(event, Some(Event::Changed("abc".to_string())));
        let (event, _) = state.update(Message::Submitted);
        assert_eq!(event, Some(Event::Submitted));
    }

    #[test]
    fn picked_file_is_stored_and_reported() {
        let mut state = InputState::new();
        let path = PathBuf::from("/tmp/report.pdf");
        let (event, _) = state.update(Message::FilePicked(Some(path.clone())));
        assert_eq!(event, Some(Event::FileSelected(Some(path.clone()))));
        assert_eq!(state.selected_file(), Some(path.as_path()));
        assert_eq!(state.file_name().as_deref(), Some("report.pdf"));
    }

    #[test]
    fn cancelled_picker_keeps_previous_file() {
        let mut state = InputState::new();
        let path = PathBuf::from("/tmp/a.txt");
        let _ = state.update(Message::FilePicked(Some(path.clone())));
        let (event, _) = state.update(Message::FilePicked(None));
        assert!(event.is_none());
        assert_eq!(state.selected_file(), Some(path.as_path()));
    }

    #[test]
    fn clear_file_reports_once() {
        let mut state = InputState::new();
        let _ = state.update(Message::FilePicked(Some(PathBuf::from("/tmp/a.txt"))));
        let (event, _) = state.update(Message::ClearFile);
        assert_eq!(event, Some(Event::FileSelected(None)));
        assert!(state.selected_file().is_none());
        let (event, _) = state.update(Message::ClearFile);
        assert!(event.is_none());
    }

    #[test]
    fn xl_uses_large_metrics() {
        let lg = Input::new(InputKind::Text).size(Size::Lg).metrics();
        let xl = Input::new(InputKind::Text).size(Size::Xl).metrics();
        assert_eq!(lg.height, xl.height);
        assert_eq!(xl.height, sizing::INPUT_LG);
    }

    #[test]
    fn view_builds_for_every_kind_and_variant() {
        let i18n = i18n();
        let mut state = InputState::new();
        let _ = state.update(Message::FilePicked(Some(PathBuf::from("/tmp/a.txt"))));
        for kind in [
            InputKind::Text,
            InputKind::Password,
            InputKind::Search,
            InputKind::Email,
            InputKind::File,
        ] {
            for variant in [
                InputVariant::Outline,
                InputVariant::Solid,
                InputVariant::Ghost,
                InputVariant::Underline,
            ] {
                let _ = Input::new(kind)
                    .variant(variant)
                    .state(FieldState::Error)
                    .label("Field")
                    .message("Required")
                    .view(&state, &i18n);
            }
        }
    }
}
