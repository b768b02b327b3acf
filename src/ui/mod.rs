/// Widget tree builders
///
/// The page is a single scrollable column composed from these modules:
/// - theme.rs: brand palette and widget styles
/// - sections.rs: the static sections (nav, hero, cards, footer)
/// - tour.rs: the virtual tour carousel
/// - scene.rs: the decorative animated canvas

pub mod scene;
pub mod sections;
pub mod theme;
pub mod tour;
