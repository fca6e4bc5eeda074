// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the navbar on top and toasts floating
//! over everything.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::map::TileCache;
use crate::ui::create_orphanage;
use crate::ui::navbar::{self, Destination, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::orphanage_details;
use crate::ui::orphanages_map;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub map: &'a orphanages_map::State,
    pub form: Option<&'a create_orphanage::State>,
    pub tiles: &'a TileCache,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Map => ctx
            .map
            .view(orphanages_map::ViewContext {
                i18n: ctx.i18n,
                tiles: ctx.tiles,
            })
            .map(Message::Map),
        Screen::CreateOrphanage => match ctx.form {
            Some(form) => form
                .view(create_orphanage::ViewContext {
                    i18n: ctx.i18n,
                    tiles: ctx.tiles,
                })
                .map(Message::CreateOrphanage),
            None => Container::new(iced::widget::text("")).into(),
        },
        Screen::Details => orphanage_details::view(orphanage_details::ViewContext { i18n: ctx.i18n })
            .map(Message::Details),
    };

    let active = match ctx.screen {
        Screen::Map => Some(Destination::Map),
        Screen::CreateOrphanage => Some(Destination::Register),
        Screen::Details => None,
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active,
    })
    .map(Message::Navbar);

    let column = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column.width(Length::Fill).height(Length::Fill))
        .push(toasts)
        .into()
}
