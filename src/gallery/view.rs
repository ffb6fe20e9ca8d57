// SPDX-License-Identifier: MPL-2.0
//! Gallery layout.

use super::{Gallery, Message};
use crate::ui::components::{
    Button, CheckState, Checkbox, FieldState, Input, InputKind, InputVariant, RadioGroup,
    RadioItem,
};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::variant::{Emphasis, Intent, Size, Variant};
use crate::ui::{icons, styles};
use iced::widget::{container, rule, scrollable, text, Column, Row};
use iced::{Element, Length};

pub(super) fn view(gallery: &Gallery) -> Element<'_, Message> {
    let i18n = &gallery.i18n;

    let header = Row::new()
        .spacing(spacing::MD)
        .align_y(iced::Alignment::Center)
        .push(
            text(i18n.tr("gallery-title"))
                .size(typography::TITLE)
                .width(Length::Fill),
        )
        .push(
            Button::new(i18n.tr("gallery-theme"))
                .intent(Intent::Secondary)
                .variant(Variant::OutlineMuted)
                .size(Size::Sm)
                .on_press(Message::ToggleTheme)
                .view(),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(960.0)
        .push(header)
        .push(section(i18n.tr("gallery-buttons"), buttons()))
        .push(section(i18n.tr("gallery-inputs"), inputs(gallery)))
        .push(section(i18n.tr("gallery-selection"), selection(gallery)))
        .push(section(i18n.tr("gallery-overlays"), overlays(gallery)));

    let page = scrollable(
        container(content).center_x(Length::Fill),
    )
    .height(Length::Fill);

    let page = container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::surface);

    gallery.providers.view(page, i18n, Message::Providers)
}

fn section<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(text(title).size(typography::BODY_LG))
        .push(rule::horizontal(1))
        .push(body)
        .into()
}

/// One row per variant, one button per intent.
fn buttons() -> Element<'static, Message> {
    let mut rows = Column::new().spacing(spacing::XS);
    for variant in Variant::ALL {
        let mut row = Row::new().spacing(spacing::XS);
        for intent in Intent::ALL {
            row = row.push(
                Button::new(format!("{intent:?}"))
                    .intent(intent)
                    .variant(variant)
                    .on_press(Message::ButtonPressed(intent))
                    .view(),
            );
        }
        rows = rows.push(row);
    }

    let mut sizes = Row::new()
        .spacing(spacing::XS)
        .align_y(iced::Alignment::Center);
    for size in Size::ALL {
        sizes = sizes.push(
            Button::new(format!("{size:?}"))
                .size(size)
                .icon(icons::circle_check)
                .on_press(Message::ButtonPressed(Intent::Primary))
                .view(),
        );
    }
    sizes = sizes
        .push(
            Button::new("Soft")
                .intent(Intent::Success)
                .emphasis(Emphasis::Soft)
                .on_press(Message::ButtonPressed(Intent::Success))
                .view(),
        )
        .push(Button::<Message>::new("Disabled").view());

    rows.push(sizes).into()
}

fn inputs(gallery: &Gallery) -> Element<'_, Message> {
    let i18n = &gallery.i18n;

    let name_state = gallery.name_state();
    let mut name = Input::new(InputKind::Text)
        .label(i18n.tr("gallery-name-label"))
        .placeholder(i18n.tr("gallery-name-placeholder"))
        .value(gallery.name.as_str())
        .state(name_state);
    match name_state {
        FieldState::Error => {
            name = name.message(i18n.tr("gallery-name-too-short"));
        }
        FieldState::Success => {
            name = name.message(i18n.tr("gallery-name-ok"));
        }
        FieldState::Default => {}
    }

    let password = Input::new(InputKind::Password)
        .variant(InputVariant::Solid)
        .label(i18n.tr("gallery-password-label"))
        .value(gallery.password.as_str());

    let search = Input::new(InputKind::Search)
        .variant(InputVariant::Underline)
        .label(i18n.tr("gallery-search-label"))
        .value(gallery.search.as_str());

    let attachment = Input::new(InputKind::File)
        .variant(InputVariant::Ghost)
        .label(i18n.tr("gallery-file-label"));

    Column::new()
        .spacing(spacing::MD)
        .push(
            name.view(&gallery.name_input, i18n).map(Message::Name),
        )
        .push(
            password
                .view(&gallery.password_input, i18n)
                .map(Message::Password),
        )
        .push(
            search
                .view(&gallery.search_input, i18n)
                .map(Message::Search),
        )
        .push(
            attachment
                .view(&gallery.attachment_input, i18n)
                .map(Message::Attachment),
        )
        .push(
            Input::new(InputKind::Email)
                .size(Size::Sm)
                .placeholder("name@example.com")
                .disabled(true)
                .view(&gallery.name_input, i18n)
                .map(Message::Name),
        )
        .into()
}

fn selection(gallery: &Gallery) -> Element<'_, Message> {
    let i18n = &gallery.i18n;

    let terms = Checkbox::new(CheckState::from_bool(gallery.terms))
        .intent(Intent::Success)
        .label(i18n.tr("gallery-terms"))
        .description(i18n.tr("gallery-terms-description"))
        .on_toggle(Message::TermsToggled)
        .view();

    let plans = RadioGroup::new(
        vec![
            RadioItem::new("free").label(i18n.tr("gallery-plan-free")),
            RadioItem::new("pro").label(i18n.tr("gallery-plan-pro")),
            RadioItem::new("team")
                .label(i18n.tr("gallery-plan-team"))
                .description(i18n.tr("gallery-plan-team-description"))
                .disabled(true),
        ],
        gallery.plan.as_deref(),
    )
    .on_select(Message::PlanSelected)
    .view();

    let count = gallery.basket.len().to_string();
    let basket = text(i18n.tr_with_args("gallery-selected", &[("count", count.as_str())]))
        .size(typography::CAPTION);

    Column::new()
        .spacing(spacing::MD)
        .push(terms)
        .push(plans)
        .push(gallery.fruits.view(&gallery.basket, Message::FruitsChanged))
        .push(basket)
        .into()
}

fn overlays(gallery: &Gallery) -> Element<'_, Message> {
    let i18n = &gallery.i18n;

    let alerts = Row::new()
        .spacing(spacing::XS)
        .push(
            Button::new(i18n.tr("gallery-open-alert"))
                .intent(Intent::Danger)
                .on_press(Message::OpenAlert)
                .view(),
        )
        .push(
            Button::new(i18n.tr("gallery-replace-alert"))
                .intent(Intent::Warning)
                .variant(Variant::Outline)
                .on_press(Message::ReplaceAlert)
                .view(),
        );

    let mut toasts = Row::new().spacing(spacing::XS);
    for intent in Intent::ALL {
        toasts = toasts.push(
            Button::new(format!("{} ({intent:?})", i18n.tr("gallery-add-toast")))
                .intent(intent)
                .variant(Variant::Soft)
                .size(Size::Sm)
                .on_press(Message::AddToast(intent))
                .view(),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .push(alerts)
        .push(toasts)
        .push(
            Button::new(i18n.tr("gallery-add-short-toast"))
                .variant(Variant::Link)
                .on_press(Message::AddShortToast)
                .view(),
        )
        .into()
}
