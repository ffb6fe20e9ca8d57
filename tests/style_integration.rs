// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate variant resolution and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_kit::ui::design_tokens::{palette, sizing};
    use iced_kit::ui::styles::{button, container};
    use iced_kit::ui::theming::{ColorScheme, ThemeMode};
    use iced_kit::ui::variant::{resolve, Emphasis, Intent, Size, Variant, VariantSpec};

    #[test]
    fn every_combination_resolves() {
        for intent in Intent::ALL {
            for variant in Variant::ALL {
                for size in Size::ALL {
                    let spec = VariantSpec::new(intent, variant).with_size(size);
                    let appearance = resolve(spec);
                    assert_eq!(appearance.metrics, size.metrics());
                    assert_eq!(appearance.underline, variant == Variant::Link);
                }
            }
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let spec = VariantSpec::new(Intent::Warning, Variant::OutlineSoft).with_size(Size::Lg);
        assert_eq!(resolve(spec), resolve(spec));
    }

    #[test]
    fn soft_emphasis_only_changes_solid() {
        let filled = resolve(VariantSpec::new(Intent::Success, Variant::Solid));
        let soft = resolve(
            VariantSpec::new(Intent::Success, Variant::Solid).with_emphasis(Emphasis::Soft),
        );
        assert_ne!(filled.resting.background, soft.resting.background);
        assert_eq!(filled.resting.background, Some(palette::SUCCESS_500));

        let outline = resolve(VariantSpec::new(Intent::Success, Variant::Outline));
        let outline_soft = resolve(
            VariantSpec::new(Intent::Success, Variant::Outline).with_emphasis(Emphasis::Soft),
        );
        assert_eq!(outline, outline_soft);
    }

    #[test]
    fn larger_sizes_are_taller() {
        let heights: Vec<f32> = Size::ALL.iter().map(|s| s.metrics().height).collect();
        assert!(heights.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(heights[0] >= sizing::CONTROL_SM);
    }

    #[test]
    fn styles_are_callable_for_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let spec = VariantSpec::new(Intent::Danger, Variant::Outline);
            let _ = button::variant(resolve(spec))(&theme, iced::widget::button::Status::Hovered);
            let _ = container::dialog(&theme);
            let _ = container::backdrop(&theme);
            let _ = container::surface(&theme);
        }
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        assert!(light.surface.r > dark.surface.r);
        assert!(light.text_primary.r < dark.text_primary.r);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
    }
}
