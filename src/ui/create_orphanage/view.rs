// SPDX-License-Identifier: MPL-2.0
//! Rendering of the registration form and its acknowledgment dialog.

use super::{Message, State};
use crate::domain::orphanage::ABOUT_MAX_CHARS;
use crate::i18n::fluent::I18n;
use crate::map::TileCache;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{AnimatedSpinner, MapCanvas};
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, scrollable, text_input, Column, Container, Row, Stack, Text},
    Element, Length,
};

/// Edge of the location lookup spinner.
const LOCATION_SPINNER_SIZE: f32 = 80.0;

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tiles: &'a TileCache,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let data_section = Column::new()
            .spacing(spacing::MD)
            .push(legend(i18n.tr("form-section-data")))
            .push(self.location_picker(&ctx))
            .push(
                Text::new(i18n.tr("form-map-hint"))
                    .size(typography::BODY_SM)
                    .color(palette::SLATE_400),
            )
            .push(labeled(
                i18n.tr("form-name-label"),
                text_input("", self.draft.name())
                    .on_input(Message::NameChanged)
                    .padding(spacing::SM)
                    .into(),
            ))
            .push(self.about_field(i18n))
            .push(self.images_field(i18n));

        let visiting_section = Column::new()
            .spacing(spacing::MD)
            .push(legend(i18n.tr("form-section-visiting")))
            .push(labeled(
                i18n.tr("form-instructions-label"),
                text_input("", self.draft.instructions())
                    .on_input(Message::InstructionsChanged)
                    .padding(spacing::SM)
                    .into(),
            ))
            .push(labeled(
                i18n.tr("form-opening-hours-label"),
                text_input("", self.draft.opening_hours())
                    .on_input(Message::OpeningHoursChanged)
                    .padding(spacing::SM)
                    .into(),
            ))
            .push(self.weekend_field(i18n));

        let form = Column::new()
            .spacing(spacing::XL)
            .padding(spacing::XL)
            .push(data_section)
            .push(visiting_section)
            .push(self.submit_button(i18n));

        let panel = Container::new(form)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .style(styles::container::panel);

        let page = scrollable(
            Container::new(panel)
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        if self.acknowledgment_open {
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(page)
                .push(acknowledgment_dialog(i18n))
                .into()
        } else {
            page.into()
        }
    }

    fn location_picker<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let content: Element<'a, Message> = if self.location.is_pending() {
            Container::new(
                AnimatedSpinner::new(palette::PRIMARY_500, self.spinner_rotation)
                    .size(LOCATION_SPINNER_SIZE)
                    .into_element(),
            )
            .width(Length::Fill)
            .height(Length::Fixed(sizing::FORM_MAP_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
        } else {
            self.location_map(ctx.tiles)
                .into_element(Length::Fixed(sizing::FORM_MAP_HEIGHT))
        };

        Container::new(content)
            .width(Length::Fill)
            .style(styles::container::framed)
            .into()
    }

    /// Location picker canvas. The pin only shows the chosen position, so
    /// a press on it moves the position like any other press.
    pub(super) fn location_map<'a>(&'a self, tiles: &'a TileCache) -> MapCanvas<'a, Message> {
        let position = self.draft.position();
        let map = MapCanvas::new(&self.viewport, tiles, Message::Map).interactive_markers(false);
        if position.is_unset() {
            map
        } else {
            map.marker(position)
        }
    }

    fn about_field<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let max = ABOUT_MAX_CHARS.to_string();
        let hint = i18n.tr_with_args("form-about-hint", &[("max", max.as_str())]);
        let remaining = self.draft.about_remaining().to_string();
        let counter = i18n.tr_with_args("form-about-remaining", &[("count", remaining.as_str())]);

        let header = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("form-about-label")).size(typography::BODY))
            .push(
                Text::new(hint)
                    .size(typography::CAPTION)
                    .color(palette::SLATE_400),
            );

        Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(
                text_input("", self.draft.about())
                    .on_input(Message::AboutChanged)
                    .padding(spacing::SM),
            )
            .push(
                Container::new(Text::new(counter).size(typography::CAPTION))
                    .width(Length::Fill)
                    .align_x(Horizontal::Right),
            )
            .into()
    }

    fn images_field<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut previews = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

        for id in self.draft.image_previews() {
            if let Some(handle) = self.previews.handle(*id) {
                previews = previews.push(
                    Container::new(
                        Image::new(handle.clone())
                            .width(Length::Fixed(sizing::PREVIEW_SIZE))
                            .height(Length::Fixed(sizing::PREVIEW_SIZE)),
                    )
                    .style(styles::container::framed),
                );
            }
        }

        let add_button = button(
            Text::new("+")
                .size(typography::TITLE_LG)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .width(Length::Fixed(sizing::PREVIEW_SIZE))
        .height(Length::Fixed(sizing::PREVIEW_SIZE))
        .on_press(Message::SelectImages)
        .style(styles::button::unselected);

        labeled(
            i18n.tr("form-images-label"),
            scrollable(previews.push(add_button))
                .direction(scrollable::Direction::Horizontal(
                    scrollable::Scrollbar::new(),
                ))
                .into(),
        )
    }

    fn weekend_field<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let yes = button(
            Text::new(i18n.tr("form-weekends-yes"))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .on_press(Message::OpenOnWeekendsSelected(true))
        .style(styles::button::weekend_yes(self.is_choice_active(true)));

        let no = button(
            Text::new(i18n.tr("form-weekends-no"))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .on_press(Message::OpenOnWeekendsSelected(false))
        .style(styles::button::weekend_no(self.is_choice_active(false)));

        labeled(
            i18n.tr("form-weekends-label"),
            Row::new().spacing(spacing::XS).push(yes).push(no).into(),
        )
    }

    fn submit_button<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let label = if self.submitting {
            i18n.tr("form-submitting")
        } else {
            i18n.tr("form-submit")
        };

        let content = Text::new(label)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        button(content)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::FOOTER_HEIGHT))
            .padding(spacing::MD)
            .on_press_maybe((!self.submitting).then_some(Message::Submit))
            .style(styles::button::primary)
            .into()
    }
}

fn legend<'a>(label: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(label)
                .size(typography::TITLE_LG)
                .color(palette::SLATE_400),
        )
        .push(rule::horizontal(1))
        .into()
}

fn labeled<'a>(label: String, field: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(label).size(typography::BODY))
        .push(field)
        .into()
}

fn acknowledgment_dialog(i18n: &I18n) -> Element<'_, Message> {
    let confirm = button(
        Text::new(i18n.tr("dialog-ok"))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(120.0))
    .on_press(Message::AcknowledgmentConfirmed)
    .style(styles::button::primary);

    let card = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("form-submit-success")).size(typography::BODY_LG))
        .push(confirm);

    let dialog = Container::new(card)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog);

    // The backdrop swallows clicks so the form underneath stays inert
    iced::widget::opaque(
        Container::new(dialog)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::backdrop),
    )
}
