/// State management module
///
/// This module holds everything the kiosk knows outside the widget tree:
/// - The carousel state machine for the virtual tour (carousel.rs)
/// - The static site content arrays (content.rs)

pub mod carousel;
pub mod content;
