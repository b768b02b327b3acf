/// Brand palette and widget styles
///
/// Colors are lifted from the site's dark red/black scheme. Views pull these
/// constants and style helpers instead of hardcoding colors inline.
use iced::font::Weight;
use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Font, Shadow, Theme};

/// Heavier weight of the default font, for headings and emphasis.
pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Near-black page background.
pub const BACKGROUND: Color = Color { r: 0.016, g: 0.016, b: 0.027, a: 1.0 };
/// Card surface (gray-900, slightly translucent over the page).
pub const SURFACE: Color = Color { r: 0.067, g: 0.094, b: 0.153, a: 0.8 };
/// Raised surface (gray-800).
pub const SURFACE_RAISED: Color = Color { r: 0.122, g: 0.161, b: 0.216, a: 1.0 };
/// Brand red (red-600).
pub const ACCENT: Color = Color { r: 0.863, g: 0.149, b: 0.149, a: 1.0 };
/// Pressed/hover red (red-700).
pub const ACCENT_DEEP: Color = Color { r: 0.725, g: 0.110, b: 0.110, a: 1.0 };
/// Bright red for highlights (red-500).
pub const ACCENT_BRIGHT: Color = Color { r: 0.937, g: 0.267, b: 0.267, a: 1.0 };
/// Soft red for secondary accents (red-400).
pub const ACCENT_SOFT: Color = Color { r: 0.973, g: 0.443, b: 0.443, a: 1.0 };
/// Primary text.
pub const TEXT_PRIMARY: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
/// Body copy (gray-300).
pub const TEXT_BODY: Color = Color { r: 0.820, g: 0.835, b: 0.859, a: 1.0 };
/// Muted captions (gray-400).
pub const TEXT_MUTED: Color = Color { r: 0.612, g: 0.639, b: 0.686, a: 1.0 };
/// Inactive indicator dots (gray-600).
pub const DOT_INACTIVE: Color = Color { r: 0.294, g: 0.333, b: 0.388, a: 1.0 };
/// Review stars (yellow-400).
pub const STAR_GOLD: Color = Color { r: 0.980, g: 0.800, b: 0.082, a: 1.0 };

/// The application theme built on the brand palette.
pub fn kiosk_theme() -> Theme {
    Theme::custom(
        String::from("PowerFit"),
        Palette {
            background: BACKGROUND,
            text: TEXT_PRIMARY,
            primary: ACCENT,
            success: ACCENT_SOFT,
            danger: ACCENT_DEEP,
        },
    )
}

/// Solid red call-to-action button ("Join Now", "Start Your Journey").
pub fn cta_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT_DEEP,
        _ => ACCENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: rounded_border(10.0),
        shadow: Shadow::default(),
    }
}

/// Transparent nav-link button that warms to the accent on hover.
pub fn link_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT_SOFT,
        _ => TEXT_BODY,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

/// Outlined secondary button ("Watch Tour").
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(Color { a: 0.4, ..ACCENT })), ACCENT_SOFT)
        }
        _ => (None, DOT_INACTIVE),
    };

    button::Style {
        background,
        text_color: TEXT_PRIMARY,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 10.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Round previous/next arrow button for the carousel.
pub fn arrow_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT,
        _ => SURFACE_RAISED,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: rounded_border(999.0),
        shadow: Shadow::default(),
    }
}

/// Standard content card (features, pricing, reviews).
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: None,
        background: Some(Background::Color(SURFACE)),
        border: rounded_border(16.0),
        shadow: Shadow::default(),
    }
}

/// Raised card variant (equipment zones).
pub fn card_raised(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: None,
        background: Some(Background::Color(Color { a: 0.6, ..SURFACE_RAISED })),
        border: rounded_border(16.0),
        shadow: Shadow::default(),
    }
}

/// Promoted pricing card: same surface with an accent ring.
pub fn card_popular(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: None,
        background: Some(Background::Color(SURFACE)),
        border: Border {
            color: Color { a: 0.4, ..ACCENT_BRIGHT },
            width: 2.0,
            radius: 16.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Small pill container (section badges, the "Most Popular" ribbon).
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(ACCENT_SOFT),
        background: Some(Background::Color(Color { a: 0.15, ..ACCENT_BRIGHT })),
        border: rounded_border(999.0),
        shadow: Shadow::default(),
    }
}

fn rounded_border(radius: f32) -> Border {
    Border {
        color: Color::TRANSPARENT,
        width: 0.0,
        radius: radius.into(),
    }
}
