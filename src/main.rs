use std::time::{Duration, Instant};

use iced::widget::{column, scrollable};
use iced::{Element, Length, Subscription, Task, Theme};

// Declare the application modules
mod assets;
mod config;
mod state;
mod ui;

use assets::LoadedPhoto;
use config::KioskConfig;
use state::carousel::TourCarousel;
use state::content;

/// Cadence of the decorative scene animation. A gentle sway does not need
/// more than ~30 frames per second.
const SCENE_FRAME: Duration = Duration::from_millis(33);

/// Identifier of the page scrollable, for section navigation.
fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

/// Main application state
struct Kiosk {
    /// The virtual tour state machine.
    tour: TourCarousel,
    /// Tour photos, filled in as the background loads complete.
    photos: Vec<Option<LoadedPhoto>>,
    /// Launch instant, the zero point of the decorative animation.
    launched_at: Instant,
    /// Seconds since launch, advanced by the scene subscription.
    scene_elapsed: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The auto-advance timer fired.
    TourTick,
    /// User pressed the next arrow.
    TourNext,
    /// User pressed the previous arrow.
    TourPrevious,
    /// User pressed an indicator dot.
    TourJump(usize),
    /// Pointer entered the tour region.
    TourHoverEntered,
    /// Pointer left the tour region.
    TourHoverExited,
    /// A background photo load finished.
    TourPhotoLoaded(LoadedPhoto),
    /// Decorative scene animation frame.
    ScenePulse(Instant),
    /// A navigation link was pressed.
    GoToSection(Section),
}

/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Tour,
    Features,
    Equipment,
    Pricing,
    Reviews,
}

impl Section {
    /// Scroll offset of the section, measured against the fixed kiosk
    /// layout. The window is not resizable by content, so constants are
    /// simpler than chasing dynamic layout geometry.
    fn scroll_offset(self) -> f32 {
        match self {
            Section::Home => 0.0,
            Section::Tour => 660.0,
            Section::Features => 1600.0,
            Section::Equipment => 2300.0,
            Section::Pricing => 2840.0,
            Section::Reviews => 3560.0,
        }
    }
}

impl Kiosk {
    /// Create a new instance of the application
    fn new(config: KioskConfig) -> (Self, Task<Message>) {
        // If this fails, we panic because a kiosk without a single tour
        // photo descriptor has nothing to display.
        let tour = TourCarousel::new(content::tour_gallery(), config.interval())
            .expect("Tour gallery is empty. Check state/content.rs.");

        println!(
            "🏋️  PowerFit kiosk ready: {} tour photos, advancing every {} ms",
            tour.len(),
            tour.interval().as_millis()
        );

        // Kick off one background load per gallery slot.
        let loads: Vec<Task<Message>> = tour
            .images()
            .iter()
            .enumerate()
            .map(|(index, image)| {
                Task::perform(
                    assets::load_photo(index, image.source.to_string()),
                    Message::TourPhotoLoaded,
                )
            })
            .collect();

        let photos = vec![None; tour.len()];

        (
            Kiosk {
                tour,
                photos,
                launched_at: Instant::now(),
                scene_elapsed: 0.0,
            },
            Task::batch(loads),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TourTick => {
                self.tour.tick();
                Task::none()
            }
            Message::TourNext => {
                self.tour.advance_next();
                Task::none()
            }
            Message::TourPrevious => {
                self.tour.advance_previous();
                Task::none()
            }
            Message::TourJump(index) => {
                // Out-of-range means a wiring bug between the dots and the
                // gallery; surface it instead of clamping.
                if let Err(e) = self.tour.jump_to(index) {
                    eprintln!("⚠️  Rejected tour jump: {}", e);
                }
                Task::none()
            }
            Message::TourHoverEntered => {
                self.tour.suspend();
                Task::none()
            }
            Message::TourHoverExited => {
                self.tour.resume();
                Task::none()
            }
            Message::TourPhotoLoaded(photo) => {
                if photo.fallback {
                    println!("🖼️  Tour slot {} is showing a placeholder", photo.index + 1);
                }
                let index = photo.index;
                if index < self.photos.len() {
                    self.photos[index] = Some(photo);
                }
                Task::none()
            }
            Message::ScenePulse(now) => {
                self.scene_elapsed = now.duration_since(self.launched_at).as_secs_f32();
                Task::none()
            }
            Message::GoToSection(section) => scrollable::scroll_to(
                page_scroll_id(),
                scrollable::AbsoluteOffset {
                    x: 0.0,
                    y: section.scroll_offset(),
                },
            ),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let current_photo = self.photos[self.tour.current_index()].as_ref();

        let page = column![
            ui::sections::hero(self.scene_elapsed),
            ui::tour::virtual_tour(&self.tour, current_photo),
            ui::sections::features(),
            ui::sections::equipment(),
            ui::sections::pricing(),
            ui::sections::reviews(),
            ui::sections::footer(),
        ];

        column![
            ui::sections::nav_bar(),
            scrollable(page).id(page_scroll_id()).height(Length::Fill),
        ]
        .into()
    }

    /// Compose the background event streams.
    fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![iced::time::every(SCENE_FRAME).map(Message::ScenePulse)];

        // The auto-advance timer only exists while the tour is not hovered:
        // dropping the subscription stops the stream outright, so no missed
        // ticks pile up during a hover. The epoch key swaps in a fresh
        // stream after manual navigation or resume.
        if !self.tour.is_suspended() {
            subs.push(auto_advance(self.tour.timer_epoch(), self.tour.interval()));
        }

        Subscription::batch(subs)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::theme::kiosk_theme()
    }
}

/// The auto-advance timer stream: sleep one full interval, tick, repeat.
///
/// The identity includes the carousel's timer epoch, so bumping the epoch
/// replaces the running stream with a fresh one whose first tick is a whole
/// interval away. That is what makes manual navigation and resume restart
/// the countdown instead of inheriting a stale schedule.
fn auto_advance(epoch: u64, interval: Duration) -> Subscription<Message> {
    Subscription::run_with_id(
        ("tour-auto-advance", epoch, interval),
        iced::futures::stream::unfold(interval, |interval| async move {
            tokio::time::sleep(interval).await;
            Some((Message::TourTick, interval))
        }),
    )
}

fn main() -> iced::Result {
    let config = KioskConfig::load_or_default();

    iced::application("RC Fitness", Kiosk::update, Kiosk::view)
        .subscription(Kiosk::subscription)
        .theme(Kiosk::theme)
        .window_size(iced::Size::new(config.window_width, config.window_height))
        .centered()
        .run_with(move || Kiosk::new(config))
}
