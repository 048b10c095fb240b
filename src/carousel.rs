//! Carousel controllers.
//!
//! Both carousels keep a circular cursor over a fixed number of rendered
//! cards. The pure pieces live here; `static/site.js` binds the same rules to
//! DOM events, and the renderers use them to emit the initial card classes.
//!
//! ## Ring layout
//!
//! The desktop experience carousel lays cards out on a ring around the active
//! one. [`ring_position`] folds each card's signed offset from the cursor into
//! `[-⌊n/2⌋, ⌈n/2⌉)`:
//!
//! ```text
//! n = 5, active = 0
//! index:    0       1      2          3          4
//! offset:   0       1      2         -2         -1
//! class:  active   next  far-right  far-left    prev
//! ```
//!
//! Exactly one card is active and at most one each is prev/next.
//!
//! ## Mobile project carousel
//!
//! [`MobileCarousel`] only acts below a viewport breakpoint. Instead of
//! re-classing cards it asks the caller to scroll a card into view, except on
//! the first mount, so loading the page never jumps.

/// Where a card sits relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingPosition {
    Active,
    Prev,
    Next,
    FarLeft,
    FarRight,
}

impl RingPosition {
    /// CSS class applied to the card.
    pub fn class(self) -> &'static str {
        match self {
            RingPosition::Active => "active",
            RingPosition::Prev => "prev",
            RingPosition::Next => "next",
            RingPosition::FarLeft => "hidden-left",
            RingPosition::FarRight => "hidden-right",
        }
    }
}

/// Position category of card `index` when `active` is the cursor.
///
/// `count` must be non-zero and both indices in range; out-of-range input is
/// folded with `rem_euclid` first.
pub fn ring_position(index: usize, active: usize, count: usize) -> RingPosition {
    let n = count.max(1) as i64;
    let mut offset = (index as i64).rem_euclid(n) - (active as i64).rem_euclid(n);
    let lower = -(n / 2);
    let upper = (n + 1) / 2;
    if offset >= upper {
        offset -= n;
    } else if offset < lower {
        offset += n;
    }

    match offset {
        0 => RingPosition::Active,
        -1 => RingPosition::Prev,
        1 => RingPosition::Next,
        o if o < -1 => RingPosition::FarLeft,
        _ => RingPosition::FarRight,
    }
}

/// Circular cursor over `count` cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    active: usize,
    count: usize,
}

impl Carousel {
    pub fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn next(&mut self) {
        self.go_to(self.active as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.active as isize - 1);
    }

    /// Jump to slide `index`. Below range lands on the last card, above range
    /// on the first, so `prev` and `next` wrap.
    pub fn go_to(&mut self, index: isize) {
        if self.count == 0 {
            return;
        }
        self.active = if index < 0 {
            self.count - 1
        } else if index as usize >= self.count {
            0
        } else {
            index as usize
        };
    }

    /// Ring position of every card, in card order.
    pub fn positions(&self) -> Vec<RingPosition> {
        (0..self.count)
            .map(|i| ring_position(i, self.active, self.count))
            .collect()
    }

    /// Whether dot `index` is the highlighted one.
    pub fn dot_is_active(&self, index: usize) -> bool {
        index == self.active
    }
}

/// Vertical extent of an element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    /// True when any part of the element is inside a viewport of `height`.
    pub fn intersects_viewport(&self, height: f64) -> bool {
        self.top < height && self.bottom > 0.0
    }
}

/// Which way a horizontal swipe went, if it went far enough.
///
/// Dragging left (start to the right of end) means "next".
pub fn swipe_direction(start_x: f64, end_x: f64, threshold: f64) -> Option<Step> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        None
    } else if diff > 0.0 {
        Some(Step::Next)
    } else {
        Some(Step::Prev)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

/// Everything a user can do to a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    PrevButton,
    NextButton,
    Dot(usize),
    /// Click on card `index`; only side cards navigate.
    CardClick(usize),
    Swipe { start_x: f64, end_x: f64 },
    /// Arrow key press, with the carousel's on-screen bounds at that moment.
    Key {
        key: ArrowKey,
        track: Bounds,
        viewport_height: f64,
    },
}

/// Desktop experience carousel: a ring of cards with one active.
#[derive(Debug, Clone)]
pub struct ExperienceCarousel {
    ring: Carousel,
    swipe_threshold: f64,
}

impl ExperienceCarousel {
    pub fn new(count: usize, swipe_threshold: f64) -> Self {
        Self {
            ring: Carousel::new(count),
            swipe_threshold,
        }
    }

    pub fn ring(&self) -> &Carousel {
        &self.ring
    }

    /// Apply one input. Returns `true` when the active card changed.
    pub fn handle(&mut self, input: CarouselInput) -> bool {
        let before = self.ring.active();
        match input {
            CarouselInput::PrevButton => self.ring.prev(),
            CarouselInput::NextButton => self.ring.next(),
            CarouselInput::Dot(i) => self.ring.go_to(i as isize),
            CarouselInput::CardClick(i) => {
                match ring_position(i, self.ring.active(), self.ring.count()) {
                    RingPosition::Prev => self.ring.prev(),
                    RingPosition::Next => self.ring.next(),
                    _ => {}
                }
            }
            CarouselInput::Swipe { start_x, end_x } => {
                match swipe_direction(start_x, end_x, self.swipe_threshold) {
                    Some(Step::Next) => self.ring.next(),
                    Some(Step::Prev) => self.ring.prev(),
                    None => {}
                }
            }
            CarouselInput::Key {
                key,
                track,
                viewport_height,
            } => {
                if track.intersects_viewport(viewport_height) {
                    match key {
                        ArrowKey::Left => self.ring.prev(),
                        ArrowKey::Right => self.ring.next(),
                    }
                }
            }
        }
        self.ring.active() != before
    }
}

/// Project carousel for narrow viewports.
///
/// Enabled only at or below the breakpoint width; re-checks on resize. Navigation
/// yields the card index to scroll into view.
#[derive(Debug, Clone)]
pub struct MobileCarousel {
    ring: Carousel,
    breakpoint: u32,
    swipe_threshold: f64,
    enabled: bool,
    mounted: bool,
}

impl MobileCarousel {
    pub fn new(count: usize, viewport_width: u32, breakpoint: u32, swipe_threshold: f64) -> Self {
        Self {
            ring: Carousel::new(count),
            breakpoint,
            swipe_threshold,
            enabled: viewport_width <= breakpoint,
            mounted: false,
        }
    }

    pub fn ring(&self) -> &Carousel {
        &self.ring
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set up the carousel for the current viewport.
    ///
    /// The first mount never scrolls, so loading the page does not jump. A
    /// later mount (after the viewport left and re-entered the breakpoint)
    /// brings the current card back into view.
    pub fn mount(&mut self) -> Option<usize> {
        if !self.enabled || self.ring.is_empty() {
            return None;
        }
        if self.mounted {
            return Some(self.ring.active());
        }
        self.mounted = true;
        None
    }

    /// Viewport width changed. Crossing below the breakpoint mounts again.
    pub fn resize(&mut self, viewport_width: u32) -> Option<usize> {
        let was_enabled = self.enabled;
        self.enabled = viewport_width <= self.breakpoint;
        if self.enabled && !was_enabled {
            return self.mount();
        }
        None
    }

    /// Apply one input; returns the card to bring into view, if any.
    pub fn handle(&mut self, input: CarouselInput) -> Option<usize> {
        if !self.enabled || self.ring.is_empty() {
            return None;
        }
        match input {
            CarouselInput::PrevButton => self.ring.prev(),
            CarouselInput::NextButton => self.ring.next(),
            CarouselInput::Dot(i) => self.ring.go_to(i as isize),
            CarouselInput::Swipe { start_x, end_x } => {
                match swipe_direction(start_x, end_x, self.swipe_threshold) {
                    Some(Step::Next) => self.ring.next(),
                    Some(Step::Prev) => self.ring.prev(),
                    None => return None,
                }
            }
            // Cards scroll natively on mobile; no click or key bindings.
            CarouselInput::CardClick(_) | CarouselInput::Key { .. } => return None,
        }
        self.mounted = true;
        Some(self.ring.active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_directions() {
        let mut c = Carousel::new(5);
        c.prev();
        assert_eq!(c.active(), 4);
        c.next();
        assert_eq!(c.active(), 0);
    }

    #[test]
    fn go_to_out_of_range() {
        let mut c = Carousel::new(3);
        c.go_to(7);
        assert_eq!(c.active(), 0);
        c.go_to(-4);
        assert_eq!(c.active(), 2);
        c.go_to(1);
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        c.go_to(3);
        assert_eq!(c.active(), 0);
        assert!(c.positions().is_empty());
    }

    #[test]
    fn ring_of_five() {
        let c = Carousel::new(5);
        assert_eq!(
            c.positions(),
            vec![
                RingPosition::Active,
                RingPosition::Next,
                RingPosition::FarRight,
                RingPosition::FarLeft,
                RingPosition::Prev,
            ]
        );
    }

    #[test]
    fn ring_from_last_card() {
        let mut c = Carousel::new(5);
        c.go_to(4);
        let positions = c.positions();
        assert_eq!(positions[4], RingPosition::Active);
        assert_eq!(positions[0], RingPosition::Next);
        assert_eq!(positions[3], RingPosition::Prev);
    }

    #[test]
    fn ring_invariants_hold_for_all_sizes() {
        for n in 1..12 {
            for active in 0..n {
                let positions: Vec<_> = (0..n).map(|i| ring_position(i, active, n)).collect();
                let count = |p: RingPosition| positions.iter().filter(|&&x| x == p).count();
                assert_eq!(count(RingPosition::Active), 1, "n={n} active={active}");
                assert!(count(RingPosition::Prev) <= 1, "n={n} active={active}");
                assert!(count(RingPosition::Next) <= 1, "n={n} active={active}");
            }
        }
    }

    #[test]
    fn two_cards_have_no_next() {
        assert_eq!(ring_position(1, 0, 2), RingPosition::Prev);
        assert_eq!(ring_position(0, 1, 2), RingPosition::Prev);
    }

    #[test]
    fn position_classes() {
        assert_eq!(RingPosition::FarLeft.class(), "hidden-left");
        assert_eq!(RingPosition::Active.class(), "active");
    }

    #[test]
    fn swipe_threshold() {
        assert_eq!(swipe_direction(200.0, 100.0, 50.0), Some(Step::Next));
        assert_eq!(swipe_direction(100.0, 200.0, 50.0), Some(Step::Prev));
        assert_eq!(swipe_direction(100.0, 140.0, 50.0), None);
        assert_eq!(swipe_direction(100.0, 150.0, 50.0), None);
    }

    #[test]
    fn side_card_click_navigates() {
        let mut c = ExperienceCarousel::new(5, 50.0);
        assert!(c.handle(CarouselInput::CardClick(4)));
        assert_eq!(c.ring().active(), 4);
        assert!(c.handle(CarouselInput::CardClick(0)));
        assert_eq!(c.ring().active(), 0);
        // Far cards and the active card ignore clicks.
        assert!(!c.handle(CarouselInput::CardClick(2)));
        assert!(!c.handle(CarouselInput::CardClick(0)));
    }

    #[test]
    fn arrow_keys_only_when_visible() {
        let mut c = ExperienceCarousel::new(3, 50.0);
        let off_screen = Bounds {
            top: 1200.0,
            bottom: 1600.0,
        };
        assert!(!c.handle(CarouselInput::Key {
            key: ArrowKey::Right,
            track: off_screen,
            viewport_height: 800.0,
        }));
        let on_screen = Bounds {
            top: 300.0,
            bottom: 700.0,
        };
        assert!(c.handle(CarouselInput::Key {
            key: ArrowKey::Left,
            track: on_screen,
            viewport_height: 800.0,
        }));
        assert_eq!(c.ring().active(), 2);
    }

    #[test]
    fn dots_and_buttons() {
        let mut c = ExperienceCarousel::new(4, 50.0);
        c.handle(CarouselInput::Dot(2));
        assert!(c.ring().dot_is_active(2));
        c.handle(CarouselInput::NextButton);
        c.handle(CarouselInput::NextButton);
        assert_eq!(c.ring().active(), 0);
        c.handle(CarouselInput::PrevButton);
        assert_eq!(c.ring().active(), 3);
    }

    #[test]
    fn mobile_disabled_above_breakpoint() {
        let mut m = MobileCarousel::new(3, 1280, 768, 50.0);
        assert!(!m.is_enabled());
        assert_eq!(m.handle(CarouselInput::NextButton), None);
        assert_eq!(m.ring().active(), 0);
    }

    #[test]
    fn mobile_first_mount_does_not_scroll() {
        let mut m = MobileCarousel::new(3, 375, 768, 50.0);
        assert_eq!(m.mount(), None);
        assert_eq!(m.handle(CarouselInput::NextButton), Some(1));
        assert_eq!(m.handle(CarouselInput::PrevButton), Some(0));
        assert_eq!(m.handle(CarouselInput::PrevButton), Some(2));
    }

    #[test]
    fn mobile_enables_on_resize() {
        let mut m = MobileCarousel::new(3, 1024, 768, 50.0);
        assert_eq!(m.resize(600), None);
        assert!(m.is_enabled());
        assert_eq!(
            m.handle(CarouselInput::Swipe {
                start_x: 300.0,
                end_x: 100.0
            }),
            Some(1)
        );
        m.resize(1024);
        assert!(!m.is_enabled());
    }

    #[test]
    fn mobile_remount_restores_current_card() {
        let mut m = MobileCarousel::new(4, 375, 768, 50.0);
        assert_eq!(m.mount(), None);
        m.handle(CarouselInput::Dot(2));

        assert_eq!(m.resize(1280), None);
        assert_eq!(m.handle(CarouselInput::NextButton), None);
        assert_eq!(m.resize(500), Some(2));
        assert_eq!(m.resize(400), None);
    }

    #[test]
    fn mobile_first_mount_after_resize_does_not_scroll() {
        let mut m = MobileCarousel::new(3, 1280, 768, 50.0);
        assert_eq!(m.mount(), None);
        assert_eq!(m.resize(375), None);
        assert_eq!(m.resize(1280), None);
        assert_eq!(m.resize(375), Some(0));
    }

    #[test]
    fn mobile_ignores_short_swipes_and_keys() {
        let mut m = MobileCarousel::new(3, 375, 768, 50.0);
        m.mount();
        assert_eq!(
            m.handle(CarouselInput::Swipe {
                start_x: 100.0,
                end_x: 120.0
            }),
            None
        );
        assert_eq!(m.handle(CarouselInput::CardClick(1)), None);
    }

    #[test]
    fn bounds_intersection() {
        let b = Bounds {
            top: -100.0,
            bottom: 10.0,
        };
        assert!(b.intersects_viewport(800.0));
        let b = Bounds {
            top: -100.0,
            bottom: 0.0,
        };
        assert!(!b.intersects_viewport(800.0));
    }
}
