// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG glyphs.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. Glyphs are drawn in black and recolored at render
//! time with [`tinted`], so one asset serves every intent and theme.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `x` not `dismiss_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Selection Indicators
// =============================================================================

define_icon!(check, "check.svg", "Check mark: checked checkbox indicator.");
define_icon!(minus, "minus.svg", "Horizontal bar: indeterminate checkbox indicator.");
define_icon!(circle, "circle.svg", "Filled circle: selected radio indicator.");

// =============================================================================
// Intent Icons
// =============================================================================

define_icon!(info, "info.svg", "Circled letter i.");
define_icon!(circle_alert, "circle_alert.svg", "Circled exclamation mark.");
define_icon!(circle_check, "circle_check.svg", "Circled check mark.");
define_icon!(triangle_alert, "triangle_alert.svg", "Triangle with exclamation mark.");

// =============================================================================
// Input Adornments
// =============================================================================

define_icon!(x, "x.svg", "Diagonal cross: close and clear actions.");
define_icon!(eye, "eye.svg", "Open eye: reveal password.");
define_icon!(eye_off, "eye_off.svg", "Struck-through eye: hide password.");
define_icon!(search, "search.svg", "Magnifying glass.");
define_icon!(upload, "upload.svg", "Tray with upward arrow: empty file input.");
define_icon!(file, "file.svg", "Document sheet: selected file.");

// =============================================================================
// Helpers
// =============================================================================

/// Sizes an icon to a square of `size` pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Sizes an icon and recolors it.
pub fn tinted(icon: Svg<'static>, size: f32, color: Color) -> Svg<'static> {
    sized(icon, size).style(move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(color),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load() {
        // Just verify icons don't panic when created
        let _ = check();
        let _ = minus();
        let _ = circle();
        let _ = info();
        let _ = circle_alert();
        let _ = circle_check();
        let _ = triangle_alert();
        let _ = x();
        let _ = eye();
        let _ = eye_off();
        let _ = search();
        let _ = upload();
        let _ = file();
    }

    #[test]
    fn tinted_icon_builds() {
        let _ = tinted(check(), 16.0, Color::WHITE);
    }
}
