//! Timing state for the auto-advancing feature carousel.
//!
//! A single 50 ms tick drives both the progress bar and the index advance:
//! elapsed time is accumulated in whole milliseconds and the carousel moves
//! on once a full interval has gone by, so the bar and the switch can never
//! drift apart.

use crate::config::{ADVANCE_INTERVAL_MS, DESKTOP_MIN_WIDTH, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Desktop,
    Mobile,
}

impl Viewport {
    /// Unknown width counts as desktop so the carousel never stalls.
    pub fn from_width(width: Option<f64>) -> Viewport {
        match width {
            Some(w) if w.is_finite() && w < DESKTOP_MIN_WIDTH => Viewport::Mobile,
            _ => Viewport::Desktop,
        }
    }

    pub fn is_desktop(&self) -> bool {
        matches!(self, Viewport::Desktop)
    }
}

/// Source of the current viewport class, injected so tests can fake it.
pub trait ViewportClassifier {
    fn classify(&self) -> Viewport;
}

impl<F> ViewportClassifier for F
where
    F: Fn() -> Viewport,
{
    fn classify(&self) -> Viewport {
        self()
    }
}

/// Reads `window.innerWidth`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowClassifier;

impl ViewportClassifier for WindowClassifier {
    fn classify(&self) -> Viewport {
        let width = web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64());
        Viewport::from_width(width)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselController {
    len: usize,
    active: usize,
    elapsed_ms: u32,
    viewport: Viewport,
}

impl CarouselController {
    pub fn new(len: usize, viewport: Viewport) -> Self {
        Self {
            len,
            active: 0,
            elapsed_ms: 0,
            viewport,
        }
    }

    pub fn with_classifier(len: usize, classifier: &impl ViewportClassifier) -> Self {
        Self::new(len, classifier.classify())
    }

    /// Re-reads the viewport, e.g. after a resize. True when it changed.
    pub fn refresh_viewport(&mut self, classifier: &impl ViewportClassifier) -> bool {
        self.set_viewport(classifier.classify())
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the tick timer should be scheduled at all.
    pub fn is_running(&self) -> bool {
        self.viewport.is_desktop() && self.len > 0
    }

    /// Percent of the current interval elapsed. Mobile shows the bar full.
    pub fn progress(&self) -> f64 {
        if !self.viewport.is_desktop() {
            return 100.0;
        }
        f64::from(self.elapsed_ms) * 100.0 / f64::from(ADVANCE_INTERVAL_MS)
    }

    /// One 50 ms step. Returns true when the active index moved.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed_ms += TICK_MS;
        if self.elapsed_ms >= ADVANCE_INTERVAL_MS {
            self.active = (self.active + 1) % self.len;
            self.elapsed_ms = 0;
            return true;
        }
        false
    }

    /// User picked an item: jump there and restart the interval.
    pub fn select(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.active = index % self.len;
        self.elapsed_ms = 0;
    }

    /// Returns true when the viewport class actually changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        self.elapsed_ms = 0;
        true
    }
}

/// Cross-fade of the large feature image whenever the active index changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFade {
    displayed: String,
    pending: Option<String>,
    opacity: f64,
}

impl ImageFade {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            displayed: initial.into(),
            pending: None,
            opacity: 1.0,
        }
    }

    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn is_fading(&self) -> bool {
        self.pending.is_some()
    }

    /// Fade out and remember what to show next. A later call replaces an
    /// earlier pending image.
    pub fn begin(&mut self, next: impl Into<String>) {
        self.pending = Some(next.into());
        self.opacity = 0.0;
    }

    /// Swap in the pending image and fade back in.
    pub fn complete(&mut self) {
        if let Some(next) = self.pending.take() {
            self.displayed = next;
        }
        self.opacity = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKS_PER_INTERVAL: u32 = ADVANCE_INTERVAL_MS / TICK_MS;

    fn run(controller: &mut CarouselController, ticks: u32) -> usize {
        (0..ticks).filter(|_| controller.tick()).count()
    }

    #[test]
    fn desktop_starts_empty_and_mobile_starts_full() {
        let desktop = CarouselController::new(4, Viewport::Desktop);
        assert_eq!(desktop.active_index(), 0);
        assert_eq!(desktop.progress(), 0.0);

        let mobile = CarouselController::new(4, Viewport::Mobile);
        assert_eq!(mobile.active_index(), 0);
        assert_eq!(mobile.progress(), 100.0);
    }

    #[test]
    fn one_interval_advances_exactly_once() {
        let mut controller = CarouselController::new(4, Viewport::Desktop);
        assert_eq!(TICKS_PER_INTERVAL, 80);
        assert_eq!(run(&mut controller, TICKS_PER_INTERVAL - 1), 0);
        assert!((controller.progress() - 98.75).abs() < 1e-9);
        assert!(controller.tick());
        assert_eq!(controller.active_index(), 1);
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn progress_grows_by_one_and_a_quarter_per_tick() {
        let mut controller = CarouselController::new(3, Viewport::Desktop);
        controller.tick();
        assert!((controller.progress() - 1.25).abs() < 1e-9);
        controller.tick();
        assert!((controller.progress() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn three_intervals_reach_the_last_of_four() {
        let mut controller = CarouselController::new(4, Viewport::Desktop);
        assert_eq!(run(&mut controller, 3 * TICKS_PER_INTERVAL), 3);
        assert_eq!(controller.active_index(), 3);
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn advance_wraps_to_first_item() {
        let mut controller = CarouselController::new(4, Viewport::Desktop);
        run(&mut controller, 4 * TICKS_PER_INTERVAL);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn manual_select_restarts_interval_on_desktop() {
        let mut controller = CarouselController::new(4, Viewport::Desktop);
        run(&mut controller, 40);
        controller.select(2);
        assert_eq!(controller.active_index(), 2);
        assert_eq!(controller.progress(), 0.0);

        assert_eq!(run(&mut controller, TICKS_PER_INTERVAL - 1), 0);
        assert!(controller.tick());
        assert_eq!(controller.active_index(), 3);
    }

    #[test]
    fn manual_select_on_mobile_shows_full_progress() {
        let mut controller = CarouselController::new(4, Viewport::Mobile);
        controller.select(3);
        assert_eq!(controller.active_index(), 3);
        assert_eq!(controller.progress(), 100.0);
    }

    #[test]
    fn select_out_of_range_wraps() {
        let mut controller = CarouselController::new(4, Viewport::Desktop);
        controller.select(6);
        assert_eq!(controller.active_index(), 2);
    }

    #[test]
    fn switching_to_mobile_stops_advancing() {
        let mut controller = CarouselController::new(4, Viewport::Desktop);
        run(&mut controller, 100);
        let index = controller.active_index();

        assert!(controller.set_viewport(Viewport::Mobile));
        assert_eq!(controller.progress(), 100.0);
        assert!(!controller.is_running());
        assert_eq!(run(&mut controller, 10 * TICKS_PER_INTERVAL), 0);
        assert_eq!(controller.active_index(), index);
        assert_eq!(controller.progress(), 100.0);
    }

    #[test]
    fn switching_back_to_desktop_restarts_fresh() {
        let mut controller = CarouselController::new(4, Viewport::Desktop);
        run(&mut controller, 30);
        controller.set_viewport(Viewport::Mobile);
        assert!(controller.set_viewport(Viewport::Desktop));
        assert_eq!(controller.progress(), 0.0);
        assert!(controller.is_running());
        assert!(!controller.set_viewport(Viewport::Desktop));
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut controller = CarouselController::new(0, Viewport::Desktop);
        assert!(!controller.is_running());
        controller.select(3);
        assert_eq!(run(&mut controller, 200), 0);
        assert_eq!(controller.active_index(), 0);
    }

    #[test]
    fn viewport_threshold_and_unknown_width() {
        assert_eq!(Viewport::from_width(Some(767.0)), Viewport::Mobile);
        assert_eq!(Viewport::from_width(Some(768.0)), Viewport::Desktop);
        assert_eq!(Viewport::from_width(None), Viewport::Desktop);
        assert_eq!(Viewport::from_width(Some(f64::NAN)), Viewport::Desktop);
    }

    #[test]
    fn classifier_is_consulted_on_start_and_refresh() {
        let narrow = || Viewport::Mobile;
        let wide = || Viewport::Desktop;

        let mut controller = CarouselController::with_classifier(4, &narrow);
        assert_eq!(controller.viewport(), Viewport::Mobile);
        assert_eq!(controller.progress(), 100.0);

        assert!(controller.refresh_viewport(&wide));
        assert_eq!(controller.progress(), 0.0);
        assert!(!controller.refresh_viewport(&wide));
    }

    #[test]
    fn image_fade_swaps_after_completion() {
        let mut fade = ImageFade::new("/images/benefit-01.svg");
        assert_eq!(fade.opacity(), 1.0);

        fade.begin("/images/benefit-02.svg");
        assert_eq!(fade.opacity(), 0.0);
        assert_eq!(fade.displayed(), "/images/benefit-01.svg");
        assert!(fade.is_fading());

        fade.begin("/images/benefit-03.svg");
        fade.complete();
        assert_eq!(fade.displayed(), "/images/benefit-03.svg");
        assert_eq!(fade.opacity(), 1.0);
        assert!(!fade.is_fading());
    }
}
