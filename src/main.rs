// SPDX-License-Identifier: MPL-2.0
use iced_kit::gallery::{self, Flags};
use iced_kit::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

fn parse_theme(value: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(value).ok_or_else(|| format!("unknown theme '{value}'"))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!("Ignoring --lang: {}", err);
        None
    });
    let theme = args
        .opt_value_from_fn("--theme", parse_theme)
        .unwrap_or_else(|err| {
            tracing::warn!("Ignoring --theme: {}", err);
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!("Ignoring unexpected arguments: {:?}", remaining);
    }

    gallery::run(Flags { lang, theme })
}
