/// Static page sections
///
/// Navigation, hero, features, equipment, pricing, reviews, and footer.
/// Each builder renders one section straight from the content module;
/// nothing here owns state. The virtual tour section lives in tour.rs
/// because it is the one piece with behavior.
use chrono::{Datelike, Utc};
use iced::widget::{button, canvas, column, container, horizontal_rule, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::state::content::{self, Feature, HeroStat, MembershipPlan, Review};
use crate::ui::scene::HeroScene;
use crate::ui::theme;
use crate::{Message, Section};

/// Fixed card widths, sized against the kiosk's 1280 px layout.
const FEATURE_CARD_WIDTH: f32 = 540.0;
const ZONE_CARD_WIDTH: f32 = 270.0;
const PLAN_CARD_WIDTH: f32 = 350.0;
const REVIEW_CARD_WIDTH: f32 = 360.0;

/// The always-visible navigation bar with section links.
pub fn nav_bar() -> Element<'static, Message> {
    let links = [
        ("Home", Section::Home),
        ("Virtual Tour", Section::Tour),
        ("Features", Section::Features),
        ("Equipment", Section::Equipment),
        ("Pricing", Section::Pricing),
        ("Reviews", Section::Reviews),
    ];

    let mut bar = row![text(content::BRAND).size(22).font(theme::BOLD)]
        .spacing(8)
        .align_y(Alignment::Center);

    bar = bar.push(Space::with_width(Length::Fill));

    for (label, section) in links {
        bar = bar.push(
            button(text(label).size(15))
                .style(theme::link_button)
                .padding([6, 10])
                .on_press(Message::GoToSection(section)),
        );
    }

    bar = bar.push(
        button(text("Join Now").size(15).font(theme::BOLD))
            .style(theme::cta_button)
            .padding([8, 18])
            .on_press(Message::GoToSection(Section::Pricing)),
    );

    container(bar)
        .width(Length::Fill)
        .padding([12, 24])
        .into()
}

/// Hero banner: badge, headline, copy, calls to action, stats row, and the
/// decorative dumbbell scene.
pub fn hero(scene_elapsed: f32) -> Element<'static, Message> {
    let actions = row![
        button(text("Start Your Journey").size(17))
            .style(theme::cta_button)
            .padding([14, 30])
            .on_press(Message::GoToSection(Section::Pricing)),
        button(text("▶  Watch Tour").size(17))
            .style(theme::ghost_button)
            .padding([14, 30])
            .on_press(Message::GoToSection(Section::Tour)),
    ]
    .spacing(16);

    let mut stats = row![].spacing(44);
    for stat in content::hero_stats() {
        stats = stats.push(hero_stat(stat));
    }

    let copy = column![
        badge_pill(content::HERO_BADGE),
        text(content::HERO_HEADLINE.0).size(58).font(theme::BOLD),
        text(content::HERO_HEADLINE.1)
            .size(58)
            .font(theme::BOLD)
            .color(theme::ACCENT_BRIGHT),
        text(content::HERO_COPY).size(19).color(theme::TEXT_BODY),
        actions,
        stats,
    ]
    .spacing(18)
    .max_width(640.0);

    let art = canvas(HeroScene {
        elapsed: scene_elapsed,
    })
    .width(Length::Fill)
    .height(Length::Fixed(420.0));

    section(
        row![
            copy.width(Length::FillPortion(3)),
            container(art).width(Length::FillPortion(2)),
        ]
        .spacing(32)
        .align_y(Alignment::Center)
        .into(),
    )
}

fn hero_stat(stat: HeroStat) -> Element<'static, Message> {
    column![
        text(stat.value)
            .size(30)
            .font(theme::BOLD)
            .color(theme::ACCENT_BRIGHT),
        text(stat.caption).size(13).color(theme::TEXT_MUTED),
    ]
    .align_x(Alignment::Center)
    .into()
}

/// "Why choose us" cards, two per line.
pub fn features() -> Element<'static, Message> {
    let cards: Vec<Element<'static, Message>> =
        content::features().into_iter().map(feature_card).collect();

    section(
        column![
            section_header(
                "Why Choose PowerFit",
                "Dominate Your ",
                "Fitness Goals",
                "Experience the perfect fusion of power, precision, and performance \
in our elite training facility.",
            ),
            iced_aw::Wrap::with_elements(cards)
                .spacing(24.0)
                .line_spacing(24.0),
        ]
        .spacing(48)
        .align_x(Alignment::Center)
        .into(),
    )
}

fn feature_card(feature: Feature) -> Element<'static, Message> {
    container(
        column![
            text(feature.icon).size(30),
            text(feature.title).size(22).font(theme::BOLD),
            text(feature.description).size(15).color(theme::TEXT_MUTED),
        ]
        .spacing(12),
    )
    .padding(28)
    .width(Length::Fixed(FEATURE_CARD_WIDTH))
    .style(theme::card)
    .into()
}

/// Equipment zone cards, four across.
pub fn equipment() -> Element<'static, Message> {
    let cards: Vec<Element<'static, Message>> = content::equipment_zones()
        .into_iter()
        .map(|zone| {
            let mut items = column![].spacing(8);
            for item in zone.items {
                items = items.push(check_line(item));
            }

            container(
                column![
                    text(zone.name)
                        .size(19)
                        .font(theme::BOLD)
                        .color(theme::ACCENT_SOFT),
                    items,
                ]
                .spacing(14),
            )
            .padding(22)
            .width(Length::Fixed(ZONE_CARD_WIDTH))
            .style(theme::card_raised)
            .into()
        })
        .collect();

    section(
        column![
            section_header(
                "Premium Equipment",
                "",
                "Premium Equipment",
                "Train with professional-grade equipment designed for champions \
and built to last.",
            ),
            iced_aw::Wrap::with_elements(cards)
                .spacing(24.0)
                .line_spacing(24.0),
        ]
        .spacing(48)
        .align_x(Alignment::Center)
        .into(),
    )
}

/// Membership plan cards; the popular plan gets the ribbon and the ring.
pub fn pricing() -> Element<'static, Message> {
    let mut cards = row![].spacing(24).align_y(Alignment::Start);
    for plan in content::membership_plans() {
        cards = cards.push(plan_card(plan));
    }

    section(
        column![
            section_header(
                "Membership Plans",
                "Choose Your ",
                "Power Level",
                "Flexible membership options designed to match your ambition and \
accelerate your results.",
            ),
            cards,
        ]
        .spacing(48)
        .align_x(Alignment::Center)
        .into(),
    )
}

fn plan_card(plan: MembershipPlan) -> Element<'static, Message> {
    let mut body = column![].spacing(18).align_x(Alignment::Center);

    if plan.popular {
        body = body.push(
            container(text("Most Popular").size(13).font(theme::BOLD))
                .padding([6, 16])
                .style(theme::badge),
        );
    }

    let title_color = if plan.popular {
        theme::ACCENT_BRIGHT
    } else {
        theme::TEXT_PRIMARY
    };

    body = body.push(text(plan.name).size(24).font(theme::BOLD).color(title_color));
    body = body.push(
        row![
            text(plan.price)
                .size(44)
                .font(theme::BOLD)
                .color(theme::ACCENT_BRIGHT),
            text(plan.period).size(16).color(theme::TEXT_MUTED),
        ]
        .align_y(Alignment::End)
        .spacing(4),
    );

    let mut items = column![].spacing(10);
    for feature in plan.features {
        items = items.push(check_line(feature));
    }
    body = body.push(items);

    container(body)
        .padding(30)
        .width(Length::Fixed(PLAN_CARD_WIDTH))
        .style(if plan.popular {
            theme::card_popular
        } else {
            theme::card
        })
        .into()
}

/// Member review cards.
pub fn reviews() -> Element<'static, Message> {
    let mut cards = row![].spacing(24);
    for review in content::reviews() {
        cards = cards.push(review_card(review));
    }

    section(
        column![
            section_header(
                "Success Stories",
                "What Our ",
                "Regulars Say",
                "Real transformations, real power, real people sharing their \
PowerFit journey.",
            ),
            cards,
        ]
        .spacing(48)
        .align_x(Alignment::Center)
        .into(),
    )
}

fn review_card(review: Review) -> Element<'static, Message> {
    let stars = "★".repeat(usize::from(review.rating));

    container(
        column![
            text("❝").size(30).color(theme::ACCENT_SOFT),
            text(review.name).size(18).font(theme::BOLD),
            text(stars).size(15).color(theme::STAR_GOLD),
            text(review.comment).size(15).color(theme::TEXT_BODY),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .padding(28)
    .width(Length::Fixed(REVIEW_CARD_WIDTH))
    .style(theme::card)
    .into()
}

/// Footer: brand, both branch addresses, phone, and the current year.
pub fn footer() -> Element<'static, Message> {
    let year = Utc::now().year();

    let addresses = column![
        text(format!("📍 {}", content::ADDRESS_PANDU))
            .size(14)
            .color(theme::TEXT_MUTED),
        text(format!("📍 {}", content::ADDRESS_MALIGAON))
            .size(14)
            .color(theme::TEXT_MUTED),
    ]
    .spacing(6);

    let contact = row![
        text(content::BRAND).size(20).font(theme::BOLD),
        Space::with_width(Length::Fill),
        text(content::PHONE).size(15).color(theme::TEXT_MUTED),
    ]
    .align_y(Alignment::Center);

    column![
        horizontal_rule(1),
        container(
            column![
                contact,
                addresses,
                text(format!("© {} {}", year, content::BRAND))
                    .size(13)
                    .color(theme::TEXT_MUTED),
            ]
            .spacing(18),
        )
        .width(Length::Fill)
        .padding([36, 48]),
    ]
    .into()
}

/// Shared header block: badge pill, two-tone heading, and intro copy.
pub fn section_header<'a>(
    badge: &'a str,
    title_plain: &'a str,
    title_accent: &'a str,
    copy: &'a str,
) -> Element<'a, Message> {
    let heading = row![
        text(title_plain).size(40).font(theme::BOLD),
        text(title_accent)
            .size(40)
            .font(theme::BOLD)
            .color(theme::ACCENT_BRIGHT),
    ];

    column![
        badge_pill(badge),
        heading,
        text(copy).size(17).color(theme::TEXT_MUTED),
    ]
    .spacing(14)
    .align_x(Alignment::Center)
    .into()
}

/// Small rounded badge above a section heading.
pub fn badge_pill(label: &str) -> Element<'_, Message> {
    container(text(label).size(13))
        .padding([6, 16])
        .style(theme::badge)
        .into()
}

/// Uniform outer wrapper so the sections share horizontal rhythm.
pub fn section(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .padding([72, 48])
        .into()
}

/// A "✔ item" line used by equipment zones and plan features.
fn check_line(label: &'static str) -> Element<'static, Message> {
    row![
        text("✔").size(14).color(theme::ACCENT_SOFT),
        text(label).size(15).color(theme::TEXT_BODY),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
