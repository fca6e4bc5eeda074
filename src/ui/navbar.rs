// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar sits above every screen and switches between the map and the
//! registration form. The active destination is highlighted.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Destinations reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Map,
    Register,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Highlighted destination, if the current screen is one of them.
    pub active: Option<Destination>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenMap,
    OpenRegister,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Destination),
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenMap => Event::Navigate(Destination::Map),
        Message::OpenRegister => Event::Navigate(Destination::Register),
    }
}

/// Render the navigation bar.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("app-title"))
        .size(typography::TITLE_SM)
        .color(palette::PRIMARY_700);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(nav_button(
            ctx.i18n.tr("navbar-map-button"),
            Message::OpenMap,
            ctx.active == Some(Destination::Map),
        ))
        .push(nav_button(
            ctx.i18n.tr("navbar-register-button"),
            Message::OpenRegister,
            ctx.active == Some(Destination::Register),
        ));

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn nav_button<'a>(label: String, message: Message, active: bool) -> Element<'a, Message> {
    let style = if active {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            active: Some(Destination::Map),
        });
    }

    #[test]
    fn navbar_view_renders_without_active_destination() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            active: None,
        });
    }

    #[test]
    fn buttons_emit_navigation_events() {
        assert_eq!(
            update(&Message::OpenMap),
            Event::Navigate(Destination::Map)
        );
        assert_eq!(
            update(&Message::OpenRegister),
            Event::Navigate(Destination::Register)
        );
    }
}
