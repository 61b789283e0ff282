//! One-shot viewport visibility.
//!
//! A section reveals the first time it intersects the viewport and stays
//! revealed for the rest of its lifetime, regardless of later scrolling.

use std::fmt;

/// A flag that moves from unset to set exactly once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Latch(bool);

impl Latch {
    pub fn new() -> Self {
        Self(false)
    }

    /// Sets the latch. Returns true only for the call that flipped it.
    pub fn trigger(&mut self) -> bool {
        let flipped = !self.0;
        self.0 = true;
        flipped
    }

    pub fn is_set(&self) -> bool {
        self.0
    }
}

/// Viewport margin in px. Positive grows the viewport, negative shrinks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMargin(pub i32);

impl RootMargin {
    pub const SECTION: RootMargin = RootMargin(-100);
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::SECTION
    }
}

/// Formats as an IntersectionObserver `rootMargin` value.
impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Client-space bounding box, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub fn intersects(rect: &Rect, viewport: &Viewport, margin: RootMargin) -> bool {
    let m = f64::from(margin.0);
    let (top, left) = (-m, -m);
    let (bottom, right) = (viewport.height + m, viewport.width + m);
    if bottom <= top || right <= left {
        return false;
    }
    rect.top < bottom && rect.bottom > top && rect.left < right && rect.right > left
}

/// Per-section visibility state. Feed it observer entries or a mount-time
/// rect; it reports when the section should reveal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionVisibility {
    seen: Latch,
    margin: RootMargin,
}

impl SectionVisibility {
    pub fn new(margin: RootMargin) -> Self {
        Self {
            seen: Latch::new(),
            margin,
        }
    }

    pub fn margin(&self) -> RootMargin {
        self.margin
    }

    pub fn has_been_seen(&self) -> bool {
        self.seen.is_set()
    }

    /// Observer callback input. Returns true if this entry revealed the section.
    pub fn observe_entry(&mut self, is_intersecting: bool) -> bool {
        is_intersecting && self.seen.trigger()
    }

    /// Mount-time check for sections that start inside the viewport.
    pub fn observe_rect(&mut self, rect: &Rect, viewport: &Viewport) -> bool {
        intersects(rect, viewport, self.margin) && self.seen.trigger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    fn rect_at(top: f64, height: f64) -> Rect {
        Rect {
            top,
            left: 0.0,
            bottom: top + height,
            right: 1280.0,
        }
    }

    #[test]
    fn test_latch_flips_once() {
        let mut latch = Latch::new();
        assert!(!latch.is_set());
        assert!(latch.trigger());
        assert!(!latch.trigger());
        assert!(latch.is_set());
    }

    #[test]
    fn test_root_margin_format() {
        assert_eq!(RootMargin::SECTION.to_string(), "-100px");
        assert_eq!(RootMargin(100).to_string(), "100px");
        assert_eq!(RootMargin::default(), RootMargin(-100));
    }

    #[test]
    fn test_negative_margin_requires_depth() {
        // 50px into the viewport is not enough with a -100px margin
        let peeking = rect_at(750.0, 400.0);
        assert!(intersects(&peeking, &VIEWPORT, RootMargin(0)));
        assert!(!intersects(&peeking, &VIEWPORT, RootMargin(-100)));
        assert!(intersects(&rect_at(650.0, 400.0), &VIEWPORT, RootMargin(-100)));
    }

    #[test]
    fn test_positive_margin_triggers_early() {
        let below = rect_at(850.0, 400.0);
        assert!(!intersects(&below, &VIEWPORT, RootMargin(0)));
        assert!(intersects(&below, &VIEWPORT, RootMargin(100)));
    }

    #[test]
    fn test_margin_larger_than_viewport() {
        let tiny = Viewport {
            width: 150.0,
            height: 150.0,
        };
        assert!(!intersects(&rect_at(0.0, 150.0), &tiny, RootMargin(-100)));
    }

    #[test]
    fn test_section_stays_seen_after_scrolling_out() {
        let mut section = SectionVisibility::new(RootMargin::SECTION);
        assert!(!section.observe_entry(false));
        assert!(!section.has_been_seen());

        assert!(section.observe_entry(true));
        assert!(section.has_been_seen());

        // scroll out, scroll back in: no second reveal, still seen
        assert!(!section.observe_entry(false));
        assert!(section.has_been_seen());
        assert!(!section.observe_entry(true));
        assert!(section.has_been_seen());
    }

    #[test]
    fn test_section_in_view_at_mount() {
        let mut section = SectionVisibility::new(RootMargin::SECTION);
        assert!(section.observe_rect(&rect_at(0.0, 600.0), &VIEWPORT));
        assert!(section.has_been_seen());
        // a later observer callback doesn't reveal again
        assert!(!section.observe_entry(true));
    }

    #[test]
    fn test_sections_are_independent() {
        let mut about = SectionVisibility::new(RootMargin::SECTION);
        let mut contact = SectionVisibility::new(RootMargin::SECTION);

        about.observe_rect(&rect_at(100.0, 600.0), &VIEWPORT);
        contact.observe_rect(&rect_at(3000.0, 600.0), &VIEWPORT);

        assert!(about.has_been_seen());
        assert!(!contact.has_been_seen());
    }

    #[test]
    fn test_observer_margin_is_the_tested_margin() {
        let mut section = SectionVisibility::new(RootMargin(-100));
        assert_eq!(section.margin().to_string(), "-100px");

        // 50px into the viewport: the observer with this margin stays quiet,
        // and so does the mount-time check
        assert!(!section.observe_rect(&rect_at(750.0, 400.0), &VIEWPORT));
        assert!(!section.has_been_seen());
        assert!(section.observe_rect(&rect_at(650.0, 400.0), &VIEWPORT));
        assert!(section.has_been_seen());
    }
}
