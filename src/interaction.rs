//! Page-level interaction state outside the carousels.
//!
//! - [`NavSheet`]: the mobile navigation sheet, open or closed.
//! - [`TabSwitcher`]: the glass page's section tabs, one panel visible at a
//!   time, with circular arrow-key navigation.
//! - [`scroll_progress`] and [`parallax_offset`]: scroll-driven values for the
//!   glass page's progress bar and hero visual.
//!
//! The page shell reads these to emit the initial markup, and `site.js`
//! follows the same transitions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Hamburger button.
    Toggle,
    /// Click on the dimmed overlay behind the sheet.
    OverlayClick,
    /// Click on a link inside the sheet.
    LinkClick,
    Escape,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavSheet {
    open: bool,
}

impl NavSheet {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply an event; returns `true` when the open state changed.
    pub fn handle(&mut self, event: NavEvent) -> bool {
        let next = match event {
            NavEvent::Toggle => !self.open,
            NavEvent::OverlayClick | NavEvent::LinkClick | NavEvent::Escape => false,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }

    /// Value for the sheet's and overlay's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }

    pub fn active_class(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }
}

/// Keys the tab bar reacts to. Right/Down move forward, Left/Up back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    Left,
    Right,
    Up,
    Down,
}

impl TabKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(TabKey::Left),
            "ArrowRight" => Some(TabKey::Right),
            "ArrowUp" => Some(TabKey::Up),
            "ArrowDown" => Some(TabKey::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    /// Click on the `index`-th tab button.
    Select(usize),
    Key(TabKey),
}

/// Which of `count` tabs is showing. The first tab starts active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSwitcher {
    active: usize,
    count: usize,
}

impl TabSwitcher {
    pub fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.count > 0 && index == self.active
    }

    /// Value for a tab button's `aria-pressed` attribute.
    pub fn aria_pressed(&self, index: usize) -> &'static str {
        if self.is_active(index) { "true" } else { "false" }
    }

    /// Apply an event; returns `true` when the active tab changed.
    ///
    /// Arrow keys wrap at both ends. Selecting an index past the last tab is
    /// ignored.
    pub fn handle(&mut self, event: TabEvent) -> bool {
        if self.count == 0 {
            return false;
        }
        let next = match event {
            TabEvent::Select(index) if index < self.count => index,
            TabEvent::Select(_) => return false,
            TabEvent::Key(TabKey::Right | TabKey::Down) => (self.active + 1) % self.count,
            TabEvent::Key(TabKey::Left | TabKey::Up) => (self.active + self.count - 1) % self.count,
        };
        let changed = next != self.active;
        self.active = next;
        changed
    }
}

/// How far the hero visual drifts per pixel scrolled.
pub const PARALLAX_FACTOR: f64 = 0.3;

/// Width of the scroll progress bar, in percent of the page.
///
/// A page that does not scroll reports `0`. The result is clamped to
/// `0..=100` so overscroll never overflows the bar.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Vertical offset of the hero visual, or `None` once the hero has scrolled
/// out of view and the last offset should stay.
pub fn parallax_offset(scroll_y: f64, hero_height: f64) -> Option<f64> {
    (scroll_y < hero_height).then(|| scroll_y * PARALLAX_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let nav = NavSheet::closed();
        assert!(!nav.is_open());
        assert_eq!(nav.aria_hidden(), "true");
        assert_eq!(nav.active_class(), None);
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut nav = NavSheet::closed();
        assert!(nav.handle(NavEvent::Toggle));
        assert!(nav.is_open());
        assert_eq!(nav.aria_hidden(), "false");
        assert_eq!(nav.active_class(), Some("active"));
        assert!(nav.handle(NavEvent::Toggle));
        assert!(!nav.is_open());
    }

    #[test]
    fn dismiss_events_only_close() {
        for event in [NavEvent::OverlayClick, NavEvent::LinkClick, NavEvent::Escape] {
            let mut nav = NavSheet::closed();
            assert!(!nav.handle(event), "{event:?} must not open a closed sheet");
            nav.handle(NavEvent::Toggle);
            assert!(nav.handle(event));
            assert!(!nav.is_open());
        }
    }

    #[test]
    fn tabs_start_on_first() {
        let tabs = TabSwitcher::new(4);
        assert_eq!(tabs.active(), 0);
        assert_eq!(tabs.aria_pressed(0), "true");
        assert_eq!(tabs.aria_pressed(1), "false");
    }

    #[test]
    fn tab_keys_wrap_both_directions() {
        let mut tabs = TabSwitcher::new(4);
        assert!(tabs.handle(TabEvent::Key(TabKey::Left)));
        assert_eq!(tabs.active(), 3);
        assert!(tabs.handle(TabEvent::Key(TabKey::Down)));
        assert_eq!(tabs.active(), 0);
        tabs.handle(TabEvent::Key(TabKey::Up));
        tabs.handle(TabEvent::Key(TabKey::Up));
        assert_eq!(tabs.active(), 2);
        tabs.handle(TabEvent::Key(TabKey::Right));
        tabs.handle(TabEvent::Key(TabKey::Right));
        assert_eq!(tabs.active(), 0);
    }

    #[test]
    fn tab_select_ignores_unknown_index() {
        let mut tabs = TabSwitcher::new(3);
        assert!(tabs.handle(TabEvent::Select(2)));
        assert!(!tabs.handle(TabEvent::Select(2)));
        assert!(!tabs.handle(TabEvent::Select(7)));
        assert_eq!(tabs.active(), 2);
    }

    #[test]
    fn single_and_empty_tab_bars() {
        let mut one = TabSwitcher::new(1);
        assert!(!one.handle(TabEvent::Key(TabKey::Right)));
        assert_eq!(one.active(), 0);

        let mut none = TabSwitcher::new(0);
        assert!(!none.handle(TabEvent::Key(TabKey::Left)));
        assert_eq!(none.aria_pressed(0), "false");
    }

    #[test]
    fn tab_key_names() {
        assert_eq!(TabKey::from_key("ArrowDown"), Some(TabKey::Down));
        assert_eq!(TabKey::from_key("ArrowLeft"), Some(TabKey::Left));
        assert_eq!(TabKey::from_key("Enter"), None);
    }

    #[test]
    fn progress_is_clamped_and_safe_on_short_pages() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn parallax_stops_below_hero() {
        assert_eq!(parallax_offset(100.0, 800.0), Some(30.0));
        assert_eq!(parallax_offset(0.0, 800.0), Some(0.0));
        assert_eq!(parallax_offset(800.0, 800.0), None);
    }
}
