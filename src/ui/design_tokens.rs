// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the library's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base and intent colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_kit::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// A tinted background for a soft variant
let tint = Color {
    a: opacity::TINT,
    ..palette::PRIMARY_500
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const GRAY_700: Color = Color::from_rgb(0.25, 0.25, 0.29);
    pub const GRAY_500: Color = Color::from_rgb(0.44, 0.44, 0.48);
    pub const GRAY_400: Color = Color::from_rgb(0.63, 0.63, 0.67);
    pub const GRAY_200: Color = Color::from_rgb(0.89, 0.89, 0.91);
    pub const GRAY_100: Color = Color::from_rgb(0.96, 0.96, 0.97);

    // Primary (blue)
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.58, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.23, 0.47, 0.96);
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.38, 0.86);

    // Secondary (slate)
    pub const SECONDARY_400: Color = Color::from_rgb(0.58, 0.64, 0.72);
    pub const SECONDARY_500: Color = Color::from_rgb(0.39, 0.45, 0.55);
    pub const SECONDARY_600: Color = Color::from_rgb(0.28, 0.33, 0.41);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.13, 0.64, 0.36);
    pub const DANGER_500: Color = Color::from_rgb(0.86, 0.15, 0.15);
    pub const WARNING_500: Color = Color::from_rgb(0.96, 0.62, 0.04);

    // Foregrounds drawn on top of a filled intent background
    pub const ON_INTENT: Color = WHITE;
    pub const ON_WARNING: Color = GRAY_900;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Soft variants: intent color washed over the surface (`bg-intent/10`).
    pub const TINT: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Muted text for secondary copy and dismiss glyphs (`/70`).
    pub const MUTED: f32 = 0.7;
    /// Hovered filled buttons (`/90`).
    pub const HOVER: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
    pub const LG: f32 = 24.0; // 6 units
    pub const XL: f32 = 32.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_XS: f32 = 12.0;
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    // Control heights (`h-8` ... `h-12`)
    pub const CONTROL_SM: f32 = 36.0;
    pub const CONTROL_MD: f32 = 40.0;
    pub const CONTROL_LG: f32 = 44.0;
    pub const INPUT_SM: f32 = 32.0;
    pub const INPUT_LG: f32 = 48.0;

    // Checkbox and radio boxes
    pub const TOGGLE_SM: f32 = 14.0;
    pub const TOGGLE_MD: f32 = 16.0;
    pub const TOGGLE_LG: f32 = 20.0;

    // Overlay widths
    pub const TOAST_WIDTH: f32 = 400.0;
    pub const TOAST_MIN_HEIGHT: f32 = 64.0;
    pub const DIALOG_SM: f32 = 384.0;
    pub const DIALOG_MD: f32 = 512.0;
    pub const DIALOG_LG: f32 = 672.0;
    pub const DIALOG_XL: f32 = 896.0;

    /// Horizontal offset of nested checkbox group items.
    pub const GROUP_INDENT: f32 = 28.0;
    /// Offset of the guide line drawn beside nested items.
    pub const GROUP_GUIDE_OFFSET: f32 = 7.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Dialog title
    pub const TITLE: f32 = 18.0;

    /// Large body - Large inputs and buttons
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Descriptions, helper messages, small buttons
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Outlines, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Underline inputs
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    /// Checkbox corners (`rounded-[3px]`)
    pub const XS: f32 = 3.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.15,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TINT > 0.0 && opacity::TINT < opacity::MUTED);

    assert!(sizing::CONTROL_LG > sizing::CONTROL_MD);
    assert!(sizing::CONTROL_MD > sizing::CONTROL_SM);
    assert!(sizing::TOGGLE_LG > sizing::TOGGLE_MD);
    assert!(sizing::TOGGLE_MD > sizing::TOGGLE_SM);
    assert!(sizing::DIALOG_XL > sizing::DIALOG_LG);
    assert!(sizing::DIALOG_LG > sizing::DIALOG_MD);
    assert!(sizing::DIALOG_MD > sizing::DIALOG_SM);

    assert!(typography::TITLE > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn intent_colors_are_distinct() {
        let colors = [
            palette::PRIMARY_500,
            palette::SECONDARY_500,
            palette::SUCCESS_500,
            palette::DANGER_500,
            palette::WARNING_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
