//! Scroll-driven page chrome: the compact header and the back-to-top button
//!
//! Both effects are throttled independently. A throttled-out scroll event
//! changes nothing, so a reading taken at the start of a window stands until
//! the next window opens.

use std::time::Instant;

use crate::config::ScrollConfig;
use crate::timing::Throttle;

/// A state change the page should apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollChange {
    HeaderScrolled(bool),
    BackToTopVisible(bool),
}

#[derive(Debug, Clone)]
pub struct ScrollEffects {
    threshold: f64,
    header_throttle: Throttle,
    back_to_top_throttle: Throttle,
    header_scrolled: bool,
    back_to_top_visible: bool,
}

impl ScrollEffects {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            threshold: config.header_threshold_px,
            header_throttle: Throttle::new(config.header_throttle()),
            back_to_top_throttle: Throttle::new(config.back_to_top_throttle()),
            header_scrolled: false,
            back_to_top_visible: false,
        }
    }

    pub fn header_scrolled(&self) -> bool {
        self.header_scrolled
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top_visible
    }

    /// Handle a scroll event; returns only the states that flipped
    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
        now: Instant,
    ) -> Vec<ScrollChange> {
        let mut changes = Vec::new();

        if self.header_throttle.try_acquire(now) {
            let scrolled = scroll_y > self.threshold;
            if scrolled != self.header_scrolled {
                self.header_scrolled = scrolled;
                changes.push(ScrollChange::HeaderScrolled(scrolled));
            }
        }

        if self.back_to_top_throttle.try_acquire(now) {
            let visible = scroll_y > viewport_height / 2.0;
            if visible != self.back_to_top_visible {
                self.back_to_top_visible = visible;
                changes.push(ScrollChange::BackToTopVisible(visible));
            }
        }

        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::{Clock, ManualClock};

    fn effects() -> ScrollEffects {
        ScrollEffects::new(&ScrollConfig::default())
    }

    #[test]
    fn test_header_flips_past_threshold() {
        let clock = ManualClock::new();
        let mut effects = effects();

        assert!(effects.on_scroll(10.0, 800.0, clock.now()).is_empty());
        clock.advance_ms(300);
        assert_eq!(
            effects.on_scroll(60.0, 800.0, clock.now()),
            vec![ScrollChange::HeaderScrolled(true)]
        );
        assert!(effects.header_scrolled());
    }

    #[test]
    fn test_back_to_top_after_half_viewport() {
        let clock = ManualClock::new();
        let mut effects = effects();

        let changes = effects.on_scroll(500.0, 800.0, clock.now());
        assert_eq!(
            changes,
            vec![
                ScrollChange::HeaderScrolled(true),
                ScrollChange::BackToTopVisible(true),
            ]
        );
        assert!(effects.back_to_top_visible());
    }

    #[test]
    fn test_events_inside_window_are_dropped() {
        let clock = ManualClock::new();
        let mut effects = effects();

        effects.on_scroll(500.0, 800.0, clock.now());
        clock.advance_ms(50);
        // Back at the top, but both windows are still open
        assert!(effects.on_scroll(0.0, 800.0, clock.now()).is_empty());
        assert!(effects.header_scrolled());

        clock.advance_ms(60);
        // Header window (100ms) has closed, back-to-top (200ms) has not
        assert_eq!(
            effects.on_scroll(0.0, 800.0, clock.now()),
            vec![ScrollChange::HeaderScrolled(false)]
        );

        clock.advance_ms(100);
        assert_eq!(
            effects.on_scroll(0.0, 800.0, clock.now()),
            vec![ScrollChange::BackToTopVisible(false)]
        );
    }
}
