// SPDX-License-Identifier: MPL-2.0
//! Variant resolution: maps an `(intent, variant, emphasis, size)` tuple to a
//! concrete [`Appearance`].
//!
//! Every visual component goes through [`resolve`], so a given combination
//! always looks the same wherever it's used. The function is pure: no theme,
//! no state, no failure path.
//!
//! # Example
//!
//! ```
//! use iced_kit::ui::variant::{resolve, Intent, Variant, VariantSpec};
//!
//! let spec = VariantSpec::new(Intent::Danger, Variant::Outline);
//! let appearance = resolve(spec);
//! assert!(appearance.resting.background.is_none());
//! assert!(appearance.hovered.background.is_some());
//! ```

use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Semantic role of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::Primary,
        Intent::Secondary,
        Intent::Success,
        Intent::Danger,
        Intent::Warning,
    ];

    /// Base color of the intent.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Intent::Primary => palette::PRIMARY_500,
            Intent::Secondary => palette::SECONDARY_500,
            Intent::Success => palette::SUCCESS_500,
            Intent::Danger => palette::DANGER_500,
            Intent::Warning => palette::WARNING_500,
        }
    }

    /// Text color drawn on a filled intent background.
    #[must_use]
    pub fn foreground(self) -> Color {
        match self {
            Intent::Warning => palette::ON_WARNING,
            _ => palette::ON_INTENT,
        }
    }

    /// Intent color washed over the surface.
    #[must_use]
    pub fn tint(self) -> Color {
        with_alpha(self.color(), opacity::TINT)
    }
}

/// Visual style of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Solid,
    Outline,
    /// Outline whose hover state is neutral gray.
    OutlineMuted,
    /// Outline whose hover state is an intent tint.
    OutlineSoft,
    Soft,
    Text,
    Link,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::Solid,
        Variant::Outline,
        Variant::OutlineMuted,
        Variant::OutlineSoft,
        Variant::Soft,
        Variant::Text,
        Variant::Link,
    ];

    fn is_outline(self) -> bool {
        matches!(
            self,
            Variant::Outline | Variant::OutlineMuted | Variant::OutlineSoft
        )
    }
}

/// How strongly a solid variant fills its background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    #[default]
    Filled,
    Soft,
}

/// Component size scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::Sm, Size::Md, Size::Lg, Size::Xl];

    #[must_use]
    pub fn metrics(self) -> SizeMetrics {
        match self {
            Size::Sm => SizeMetrics {
                height: sizing::CONTROL_SM,
                padding_x: spacing::SM,
                padding_y: spacing::XXS,
                font_size: typography::CAPTION,
                icon_size: sizing::ICON_XS,
                toggle_size: sizing::TOGGLE_SM,
                radius: radius::MD,
                dialog_width: sizing::DIALOG_SM,
            },
            Size::Md => SizeMetrics {
                height: sizing::CONTROL_MD,
                padding_x: spacing::MD,
                padding_y: spacing::XS,
                font_size: typography::BODY,
                icon_size: sizing::ICON_SM,
                toggle_size: sizing::TOGGLE_MD,
                radius: radius::MD,
                dialog_width: sizing::DIALOG_MD,
            },
            Size::Lg => SizeMetrics {
                height: sizing::CONTROL_LG,
                padding_x: spacing::XL,
                padding_y: spacing::XS,
                font_size: typography::BODY_LG,
                icon_size: sizing::ICON_MD,
                toggle_size: sizing::TOGGLE_LG,
                radius: radius::MD,
                dialog_width: sizing::DIALOG_LG,
            },
            Size::Xl => SizeMetrics {
                height: sizing::CONTROL_LG,
                padding_x: spacing::XL,
                padding_y: spacing::SM,
                font_size: typography::BODY_LG,
                icon_size: sizing::ICON_MD,
                toggle_size: sizing::TOGGLE_LG,
                radius: radius::MD,
                dialog_width: sizing::DIALOG_XL,
            },
        }
    }
}

/// Dimensions derived from a [`Size`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub font_size: f32,
    pub icon_size: f32,
    /// Edge length of checkbox and radio boxes.
    pub toggle_size: f32,
    pub radius: f32,
    /// Maximum width of a dialog at this size.
    pub dialog_width: f32,
}

/// A fully specified variant combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantSpec {
    pub intent: Intent,
    pub variant: Variant,
    pub emphasis: Option<Emphasis>,
    pub size: Size,
}

impl Default for VariantSpec {
    fn default() -> Self {
        Self::new(Intent::default(), Variant::default())
    }
}

impl VariantSpec {
    /// Creates a spec with the default size and emphasis for `variant`.
    #[must_use]
    pub fn new(intent: Intent, variant: Variant) -> Self {
        Self {
            intent,
            variant,
            emphasis: default_emphasis(variant),
            size: Size::default(),
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = Some(emphasis);
        self
    }

    /// Emphasis actually applied: links never carry one.
    #[must_use]
    pub fn effective_emphasis(&self) -> Option<Emphasis> {
        match self.variant {
            Variant::Link => None,
            _ => Some(self.emphasis.unwrap_or_default()),
        }
    }
}

fn default_emphasis(variant: Variant) -> Option<Emphasis> {
    match variant {
        Variant::Link => None,
        _ => Some(Emphasis::Filled),
    }
}

/// Colors for one interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateStyle {
    /// `None` means the surface shows through.
    pub background: Option<Color>,
    pub text: Color,
    pub border: Option<Color>,
}

/// Presentation attributes for a [`VariantSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub resting: StateStyle,
    pub hovered: StateStyle,
    pub pressed: StateStyle,
    pub border_width: f32,
    pub underline: bool,
    pub metrics: SizeMetrics,
}

/// Resolves a variant combination to its presentation attributes.
#[must_use]
pub fn resolve(spec: VariantSpec) -> Appearance {
    let intent = spec.intent;
    let base = intent.color();
    let muted = with_alpha(palette::GRAY_400, opacity::OVERLAY_SUBTLE);
    let outline = spec.variant.is_outline();
    let border = outline.then_some(base);

    let (resting, hovered) = match (spec.variant, spec.effective_emphasis()) {
        (Variant::Solid, Some(Emphasis::Soft)) => (
            state(Some(intent.tint()), base, None),
            state(Some(with_alpha(base, opacity::OVERLAY_SUBTLE)), base, None),
        ),
        (Variant::Solid, _) => (
            state(Some(base), intent.foreground(), None),
            state(Some(with_alpha(base, opacity::HOVER)), intent.foreground(), None),
        ),
        (Variant::Outline, _) => (
            state(None, base, border),
            state(Some(base), intent.foreground(), border),
        ),
        (Variant::OutlineMuted, _) => (state(None, base, border), state(Some(muted), base, border)),
        (Variant::OutlineSoft, _) => (
            state(None, base, border),
            state(Some(intent.tint()), base, border),
        ),
        (Variant::Soft, _) => (state(None, base, None), state(Some(intent.tint()), base, None)),
        (Variant::Text, _) => (state(None, base, None), state(Some(muted), base, None)),
        (Variant::Link, _) => (state(None, base, None), state(None, base, None)),
    };

    Appearance {
        resting,
        hovered,
        pressed: resting,
        border_width: if outline { border::WIDTH_SM } else { 0.0 },
        underline: spec.variant == Variant::Link,
        metrics: spec.size.metrics(),
    }
}

fn state(background: Option<Color>, text: Color, border: Option<Color>) -> StateStyle {
    StateStyle {
        background,
        text,
        border,
    }
}

pub(crate) fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}
