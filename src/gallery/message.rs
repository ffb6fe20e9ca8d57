// SPDX-License-Identifier: MPL-2.0
//! Gallery messages and launch flags.

use crate::ui::checkbox_group::Selection;
use crate::ui::components::input;
use crate::ui::providers::ProviderMessage;
use crate::ui::theming::ThemeMode;
use crate::ui::variant::Intent;

/// Command-line options passed to the gallery.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override (`--lang ko-KR`).
    pub lang: Option<String>,
    /// Theme override (`--theme dark`).
    pub theme: Option<ThemeMode>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Providers(ProviderMessage),
    ButtonPressed(Intent),
    ToggleTheme,

    OpenAlert,
    /// Opens two alerts back to back; only the second stays visible.
    ReplaceAlert,
    AlertConfirmed,
    AlertCancelled,

    AddToast(Intent),
    AddShortToast,
    ToastDismissed(u32),

    Name(input::Message),
    Password(input::Message),
    Search(input::Message),
    Attachment(input::Message),

    TermsToggled(bool),
    PlanSelected(String),
    FruitsChanged(Selection),
}
