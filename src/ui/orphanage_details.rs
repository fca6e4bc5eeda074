// SPDX-License-Identifier: MPL-2.0
//! Details screen reached from the map callout.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the details screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    BackToMap,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BackToMap,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToMap => Event::BackToMap,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("details-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToMap)
    .style(styles::button::link);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .push(back_button)
        .push(Text::new(ctx.i18n.tr("details-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("details-placeholder")).size(typography::BODY));

    Container::new(
        Container::new(content)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .padding(spacing::XL)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .into()
}
