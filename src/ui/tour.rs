/// Virtual tour section
///
/// The one interactive piece of the page: the photo carousel with its
/// arrow buttons, indicator dots, and hover suspension. The widget tree is
/// a pure function of the carousel state machine; every control press and
/// pointer crossing goes back through the update loop as a message.
use iced::widget::{button, column, container, image, mouse_area, row, text, Space};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Shadow, Theme};

use crate::assets::LoadedPhoto;
use crate::state::carousel::TourCarousel;
use crate::ui::{scene, sections, theme};
use crate::Message;

/// Height of the photo viewport.
const PHOTO_HEIGHT: f32 = 520.0;
/// Diameter of an indicator dot.
const DOT_SIZE: f32 = 12.0;

/// Build the whole tour section around the current carousel state.
pub fn virtual_tour<'a>(
    tour: &'a TourCarousel,
    photo: Option<&'a LoadedPhoto>,
) -> Element<'a, Message> {
    let current = tour.current_image();

    let caption = text(format!(
        "{} · {} of {}",
        current.label,
        tour.current_index() + 1,
        tour.len()
    ))
    .size(14)
    .color(theme::TEXT_MUTED);

    let body = column![
        photo_viewport(photo),
        caption,
        controls(tour),
    ]
    .spacing(18)
    .align_x(Alignment::Center);

    // Backdrop tinted per location, cycling with the current photo.
    let tint = scene::location_tint(tour.current_index());
    let stage = container(body)
        .width(Length::Fill)
        .padding(24)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            text_color: None,
            background: Some(Background::Color(tint)),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 12.0.into(),
            },
            shadow: Shadow::default(),
        });

    // The hover region covers the photo AND the controls, so reaching for
    // an arrow does not let the timer advance under the pointer.
    let hoverable = mouse_area(stage)
        .on_enter(Message::TourHoverEntered)
        .on_exit(Message::TourHoverExited);

    sections::section(
        column![
            sections::section_header(
                "Virtual Tour",
                "Virtual ",
                "Tour",
                "Explore our elite training facility from anywhere with our \
immersive gallery.",
            ),
            hoverable,
        ]
        .spacing(48)
        .align_x(Alignment::Center)
        .into(),
    )
}

/// The photo itself, or a quiet placeholder while it loads.
fn photo_viewport(photo: Option<&LoadedPhoto>) -> Element<'_, Message> {
    match photo {
        Some(loaded) => image(loaded.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(PHOTO_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(
            text("Loading tour photo…")
                .size(18)
                .color(theme::TEXT_MUTED),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fixed(PHOTO_HEIGHT))
        .into(),
    }
}

/// Previous/next arrows around one indicator dot per gallery image.
fn controls(tour: &TourCarousel) -> Element<'_, Message> {
    let previous = button(text("‹").size(24))
        .style(theme::arrow_button)
        .padding([2, 14])
        .on_press(Message::TourPrevious);

    let next = button(text("›").size(24))
        .style(theme::arrow_button)
        .padding([2, 14])
        .on_press(Message::TourNext);

    let mut dots = row![].spacing(8).align_y(Alignment::Center);
    for index in 0..tour.len() {
        dots = dots.push(indicator_dot(index, index == tour.current_index()));
    }

    row![previous, dots, next]
        .spacing(16)
        .align_y(Alignment::Center)
        .into()
}

/// One clickable dot; the active one takes the accent color.
fn indicator_dot(index: usize, active: bool) -> Element<'static, Message> {
    let fill = if active {
        theme::ACCENT_BRIGHT
    } else {
        theme::DOT_INACTIVE
    };

    button(Space::new(DOT_SIZE, DOT_SIZE))
        .padding(0)
        .on_press(Message::TourJump(index))
        .style(move |_theme: &Theme, _status| iced::widget::button::Style {
            background: Some(Background::Color(fill)),
            text_color: theme::TEXT_PRIMARY,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 999.0.into(),
            },
            shadow: Shadow::default(),
        })
        .into()
}
