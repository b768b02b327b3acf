/// Virtual tour carousel state machine
///
/// This is the only stateful component in the kiosk. It cycles through the
/// fixed tour gallery as a ring: the index wraps in both directions and the
/// automatic advance keeps running until the pointer hovers the tour region.
///
/// The machine is deliberately UI-free so every property can be tested
/// without spinning up a window. The iced layer drives it with three kinds
/// of events: timer ticks, manual navigation, and hover enter/leave.
use std::time::Duration;

use thiserror::Error;

use super::content::TourImage;

/// Cadence of the automatic advance, measured from the most recent
/// state change (startup, manual navigation, or resume).
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

/// Caller-misuse errors. Both are rejected immediately instead of being
/// clamped, so a bad integration surfaces right away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("the tour gallery must contain at least one image")]
    EmptyGallery,
    #[error("image index {index} is out of range (gallery holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The tour carousel.
///
/// Invariant: `current` is always a valid index into `images`.
pub struct TourCarousel {
    /// The fixed, ordered gallery. Never mutated after construction.
    images: Vec<TourImage>,
    /// Index of the image currently on display.
    current: usize,
    /// True while the pointer hovers the tour region. The timer
    /// subscription is dropped entirely while suspended, so no backlog of
    /// missed ticks can fire in a burst on resume.
    suspended: bool,
    /// Identity of the current auto-advance schedule. Bumping it drops the
    /// running timer stream and starts a fresh one, which is how manual
    /// navigation and resume restart the countdown phase.
    timer_epoch: u64,
    /// Time between automatic advances.
    interval: Duration,
}

impl TourCarousel {
    /// Create the carousel over a non-empty gallery.
    ///
    /// An empty gallery is a precondition violation: there is nothing to
    /// display, so construction fails and the caller treats it as fatal.
    pub fn new(images: Vec<TourImage>, interval: Duration) -> Result<Self, CarouselError> {
        if images.is_empty() {
            return Err(CarouselError::EmptyGallery);
        }

        Ok(TourCarousel {
            images,
            current: 0,
            suspended: false,
            timer_epoch: 0,
            interval,
        })
    }

    /// Number of images in the gallery. Always at least 1.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Index of the image currently on display.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The image currently on display.
    pub fn current_image(&self) -> &TourImage {
        // Safe by the construction invariant: current < images.len()
        &self.images[self.current]
    }

    /// The full gallery, for rendering the indicator dots.
    pub fn images(&self) -> &[TourImage] {
        &self.images
    }

    /// True while automatic advancement is halted by pointer hover.
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Time between automatic advances.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Identity of the current auto-advance schedule. The timer
    /// subscription is keyed on this value.
    pub fn timer_epoch(&self) -> u64 {
        self.timer_epoch
    }

    /// Automatic advance, driven by the timer.
    ///
    /// Does NOT bump the timer epoch: the running schedule keeps its own
    /// phase and fires again one interval later. Ignored while suspended
    /// (the timer is stopped then, so this is a belt-and-braces guard).
    pub fn tick(&mut self) {
        if self.suspended {
            return;
        }
        self.current = self.step_forward(self.current);
    }

    /// Manual advance to the next image. Restarts the timer countdown so
    /// an automatic tick cannot fire within one interval of this action.
    pub fn advance_next(&mut self) {
        self.current = self.step_forward(self.current);
        self.restart_timer();
    }

    /// Manual step to the previous image. Exact inverse of `advance_next`.
    pub fn advance_previous(&mut self) {
        self.current = self.step_back(self.current);
        self.restart_timer();
    }

    /// Jump directly to `index` (indicator dot press).
    ///
    /// Out-of-range indices are rejected without mutating any state.
    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.images.len() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.images.len(),
            });
        }

        self.current = index;
        self.restart_timer();
        Ok(())
    }

    /// Halt automatic advancement (pointer entered the tour region).
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Resume automatic advancement (pointer left the tour region).
    /// The countdown restarts from the resume instant, not from the
    /// schedule that was running before the hover.
    pub fn resume(&mut self) {
        if !self.suspended {
            return;
        }
        self.suspended = false;
        self.restart_timer();
    }

    /// Ring arithmetic: one step forward with wraparound.
    fn step_forward(&self, index: usize) -> usize {
        (index + 1) % self.images.len()
    }

    /// Ring arithmetic: one step back with wraparound.
    fn step_back(&self, index: usize) -> usize {
        (index + self.images.len() - 1) % self.images.len()
    }

    /// Drop the running timer stream and start a fresh countdown.
    fn restart_timer(&mut self) {
        self.timer_epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small test gallery. Index math never looks at the descriptors,
    /// so identical entries are fine.
    fn gallery(n: usize) -> Vec<TourImage> {
        (0..n)
            .map(|_| TourImage {
                source: "assets/tour/test.jpg",
                label: "Test stop",
            })
            .collect()
    }

    fn carousel(n: usize) -> TourCarousel {
        TourCarousel::new(gallery(n), DEFAULT_INTERVAL).unwrap()
    }

    #[test]
    fn test_starts_at_first_image() {
        for n in 1..=8 {
            let tour = carousel(n);
            assert_eq!(tour.current_index(), 0);
            assert!(!tour.is_suspended());
            assert_eq!(tour.len(), n);
        }
    }

    #[test]
    fn test_empty_gallery_is_rejected() {
        let result = TourCarousel::new(Vec::new(), DEFAULT_INTERVAL);
        assert_eq!(result.err(), Some(CarouselError::EmptyGallery));
    }

    #[test]
    fn test_next_wraps_around() {
        let mut tour = carousel(3);
        tour.advance_next();
        assert_eq!(tour.current_index(), 1);
        tour.advance_next();
        assert_eq!(tour.current_index(), 2);
        tour.advance_next();
        assert_eq!(tour.current_index(), 0);
    }

    #[test]
    fn test_cycle_closure_from_any_start() {
        // Advancing exactly N times returns to the starting index.
        for start in 0..5 {
            let mut tour = carousel(5);
            tour.jump_to(start).unwrap();
            for _ in 0..5 {
                tour.advance_next();
            }
            assert_eq!(tour.current_index(), start);
        }
    }

    #[test]
    fn test_previous_is_inverse_of_next() {
        let mut tour = carousel(4);
        for start in 0..4 {
            tour.jump_to(start).unwrap();
            tour.advance_next();
            tour.advance_previous();
            assert_eq!(tour.current_index(), start);
        }

        // And it wraps backwards from the first image.
        tour.jump_to(0).unwrap();
        tour.advance_previous();
        assert_eq!(tour.current_index(), 3);
    }

    #[test]
    fn test_jump_to_valid_index() {
        let mut tour = carousel(8);
        tour.jump_to(5).unwrap();
        assert_eq!(tour.current_index(), 5);
        assert!(!tour.is_suspended());
    }

    #[test]
    fn test_jump_out_of_range_leaves_state_untouched() {
        let mut tour = carousel(8);
        tour.jump_to(3).unwrap();
        let epoch = tour.timer_epoch();

        let result = tour.jump_to(8);
        assert_eq!(
            result.err(),
            Some(CarouselError::IndexOutOfRange { index: 8, len: 8 })
        );
        assert_eq!(tour.current_index(), 3);
        assert_eq!(tour.timer_epoch(), epoch);
    }

    #[test]
    fn test_suspended_tick_is_ignored() {
        let mut tour = carousel(8);
        tour.suspend();

        // However many ticks arrive, the index must not move.
        for _ in 0..20 {
            tour.tick();
        }
        assert_eq!(tour.current_index(), 0);
        assert!(tour.is_suspended());
    }

    #[test]
    fn test_automatic_tick_keeps_schedule() {
        let mut tour = carousel(8);
        let epoch = tour.timer_epoch();

        tour.tick();

        assert_eq!(tour.current_index(), 1);
        // The running timer keeps its phase across automatic ticks.
        assert_eq!(tour.timer_epoch(), epoch);
    }

    #[test]
    fn test_manual_navigation_restarts_timer() {
        let mut tour = carousel(8);

        let before = tour.timer_epoch();
        tour.advance_next();
        assert!(tour.timer_epoch() > before);

        let before = tour.timer_epoch();
        tour.advance_previous();
        assert!(tour.timer_epoch() > before);

        let before = tour.timer_epoch();
        tour.jump_to(4).unwrap();
        assert!(tour.timer_epoch() > before);
    }

    #[test]
    fn test_resume_restarts_countdown() {
        let mut tour = carousel(8);
        let epoch = tour.timer_epoch();

        // Suspending only stops the timer; it does not reschedule.
        tour.suspend();
        assert_eq!(tour.timer_epoch(), epoch);

        // Resuming restarts the countdown from the resume instant.
        tour.resume();
        assert!(tour.timer_epoch() > epoch);
        assert!(!tour.is_suspended());

        // A stray resume without a matching suspend must not reschedule.
        let epoch = tour.timer_epoch();
        tour.resume();
        assert_eq!(tour.timer_epoch(), epoch);
    }

    #[test]
    fn test_eight_ticks_complete_the_ring() {
        // The observed configuration: 8 images, one tick every 3000 ms.
        // After 8 ticks (24 s of idle display) the tour is back at the start.
        let mut tour = carousel(8);
        for expected in [1, 2, 3, 4, 5, 6, 7, 0] {
            tour.tick();
            assert_eq!(tour.current_index(), expected);
        }
    }

    #[test]
    fn test_hover_then_leave_scenario() {
        // Pointer enters before the first tick would fire: nothing moves
        // while hovered, and leaving reschedules a fresh countdown.
        let mut tour = carousel(8);
        let epoch = tour.timer_epoch();

        tour.suspend();
        tour.tick(); // a tick that would have fired mid-hover
        assert_eq!(tour.current_index(), 0);

        tour.resume();
        assert!(tour.timer_epoch() > epoch);
        tour.tick();
        assert_eq!(tour.current_index(), 1);
    }
}
