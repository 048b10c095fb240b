//! Section rendering.
//!
//! A [`Page`] is the in-memory form of one HTML page: the variant's static
//! shell (see [`shell`]) plus a set of *mount points*, elements identified by
//! a fixed id whose children are produced from content. Mount point ids are
//! the contract between the renderers and the page markup; they are listed in
//! [`mount`].
//!
//! Each section renderer takes its slice of the [`ContentDocument`] and
//! replaces the children of its mount points. Replacing is total, so running a
//! renderer twice leaves the same markup as running it once. A renderer whose
//! mount point is not part of the current shell does nothing.
//!
//! Renderers never fail: absent fields drop the fragment that shows them, and
//! an empty collection renders a placeholder card instead of an empty
//! container.
//!
//! [`ContentDocument`]: crate::schema::ContentDocument

pub mod education;
pub mod experience;
pub mod hero;
pub mod involvements;
pub mod projects;
pub mod shell;
pub mod skills;

use crate::config::{PageVariant, SiteConfig};
use maud::{Markup, html};
use std::collections::BTreeMap;

/// Mount point ids.
pub mod mount {
    pub const HERO_TAGLINE: &str = "hero-tagline";
    pub const HERO_NAME: &str = "hero-name";
    pub const HERO_SUMMARY: &str = "hero-summary";
    pub const HERO_LINKS: &str = "hero-links";
    pub const FOOTER_NAME: &str = "hero-footer-name";
    pub const PROJECTS_GRID: &str = "projects-grid";
    pub const PROJECTS_DOTS: &str = "projects-dots";
    pub const EXPERIENCE_TRACK: &str = "experience-track";
    pub const EXPERIENCE_DOTS: &str = "carousel-dots";
    pub const EXPERIENCE_TIMELINE: &str = "experience-timeline";
    pub const EDUCATION_CARDS: &str = "education-cards";
    pub const SKILLS_GROUPS: &str = "skills-groups";
    pub const INVOLVEMENT_LIST: &str = "involvement-list";

    const HERO: [&str; 5] = [HERO_TAGLINE, HERO_NAME, HERO_SUMMARY, HERO_LINKS, FOOTER_NAME];

    /// Mount points present in a variant's shell.
    pub fn for_variant(variant: crate::config::PageVariant) -> Vec<&'static str> {
        use crate::config::PageVariant;
        let sections: &[&'static str] = match variant {
            PageVariant::Portfolio => &[
                PROJECTS_GRID,
                PROJECTS_DOTS,
                EXPERIENCE_TRACK,
                EXPERIENCE_DOTS,
                EDUCATION_CARDS,
                SKILLS_GROUPS,
            ],
            PageVariant::Glass => &[
                INVOLVEMENT_LIST,
                EXPERIENCE_TIMELINE,
                EDUCATION_CARDS,
                SKILLS_GROUPS,
            ],
        };
        HERO.iter().chain(sections).copied().collect()
    }
}

/// Settings the renderers read besides the content itself.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub variant: PageVariant,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a SiteConfig, variant: PageVariant) -> Self {
        Self { config, variant }
    }

    /// Inline style delaying the reveal of the `index`-th card in a section.
    ///
    /// The reveal of `[data-animate]` elements is a CSS transition, so the
    /// delay goes on `transition-delay`.
    pub fn stagger_delay(&self, index: usize) -> String {
        format!(
            "transition-delay: {:.2}s",
            index as f64 * self.config.animation.stagger_step
        )
    }
}

/// One page: its variant and the current children of every mount point.
#[derive(Debug, Clone)]
pub struct Page {
    variant: PageVariant,
    slots: BTreeMap<&'static str, Markup>,
}

impl Page {
    /// A page showing only the static shell content.
    pub fn new(variant: PageVariant, config: &SiteConfig) -> Self {
        let slots = mount::for_variant(variant)
            .into_iter()
            .map(|id| (id, shell::fallback(id, &config.site)))
            .collect();
        Self { variant, slots }
    }

    pub fn variant(&self) -> PageVariant {
        self.variant
    }

    /// Replace all children of a mount point. Returns `false` (and changes
    /// nothing) when the shell has no such mount point.
    pub fn replace(&mut self, id: &str, content: Markup) -> bool {
        match self.slots.get_mut(id) {
            Some(slot) => {
                *slot = content;
                true
            }
            None => false,
        }
    }

    /// Current inner HTML of a mount point.
    pub fn slot(&self, id: &str) -> Option<&str> {
        self.slots.get(id).map(|m| m.0.as_str())
    }

    pub fn has_mount(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// Children of a mount point, for embedding in the shell.
    pub(crate) fn content(&self, id: &str) -> Markup {
        self.slots.get(id).cloned().unwrap_or_else(|| html! {})
    }
}

// ============================================================================
// Shared components
// ============================================================================

/// Logo image when one is given, otherwise the initials of `name`.
///
/// `class` prefixes the element classes (`{class}__logo-text`,
/// `{class}__logo-image`).
pub(crate) fn logo_or_initials(
    logo: Option<&str>,
    alt: Option<&str>,
    name: Option<&str>,
    class: &str,
) -> Markup {
    match logo {
        Some(src) => {
            let alt = alt.or(name).unwrap_or("logo");
            html! {
                img class={ (class) "__logo-image" } src=(src) alt=(alt) loading="lazy";
            }
        }
        None => html! {
            span class={ (class) "__logo-text" } { (crate::format::initials(name)) }
        },
    }
}

/// Card shown in place of an empty collection.
pub(crate) fn placeholder(class: &str, message: &str) -> Markup {
    html! {
        article class={ "placeholder-card " (class) } data-animate="fade" {
            p.placeholder-card__text { (message) }
        }
    }
}

/// `ul` of plain text items; nothing at all when `items` is empty.
pub(crate) fn text_list(class: &str, items: &[String]) -> Markup {
    html! {
        @if !items.is_empty() {
            ul class=(class) {
                @for item in items {
                    li data-stagger { (item) }
                }
            }
        }
    }
}

/// Carousel dot buttons, the first one active.
pub(crate) fn dots(class: &str, count: usize, label: &str, active: usize) -> Markup {
    html! {
        @for index in 0..count {
            @let classes = if index == active { format!("{class} active") } else { class.to_string() };
            button class=(classes) type="button"
                data-index=(index) aria-label={ "Go to " (label) " " (index + 1) } {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_has_variant_mounts() {
        let config = SiteConfig::default();
        let page = Page::new(PageVariant::Portfolio, &config);
        assert!(page.has_mount(mount::PROJECTS_GRID));
        assert!(page.has_mount(mount::HERO_NAME));
        assert!(!page.has_mount(mount::INVOLVEMENT_LIST));

        let glass = Page::new(PageVariant::Glass, &config);
        assert!(glass.has_mount(mount::INVOLVEMENT_LIST));
        assert!(glass.has_mount(mount::EXPERIENCE_TIMELINE));
        assert!(!glass.has_mount(mount::PROJECTS_GRID));
    }

    #[test]
    fn replace_swaps_children() {
        let config = SiteConfig::default();
        let mut page = Page::new(PageVariant::Portfolio, &config);
        assert!(page.replace(mount::SKILLS_GROUPS, html! { p { "one" } }));
        assert!(page.replace(mount::SKILLS_GROUPS, html! { p { "two" } }));
        assert_eq!(page.slot(mount::SKILLS_GROUPS), Some("<p>two</p>"));
    }

    #[test]
    fn replace_unknown_mount_is_noop() {
        let config = SiteConfig::default();
        let mut page = Page::new(PageVariant::Portfolio, &config);
        assert!(!page.replace(mount::INVOLVEMENT_LIST, html! { p { "x" } }));
        assert_eq!(page.slot(mount::INVOLVEMENT_LIST), None);
    }

    #[test]
    fn logo_falls_back_to_initials() {
        let html = logo_or_initials(None, None, Some("Acme Rocket Works"), "card").into_string();
        assert!(html.contains("card__logo-text"));
        assert!(html.contains(">ARW<"));

        let html = logo_or_initials(Some("a.png"), None, Some("Acme"), "card").into_string();
        assert!(html.contains(r#"src="a.png""#));
        assert!(html.contains(r#"alt="Acme""#));
    }

    #[test]
    fn text_list_omitted_when_empty() {
        assert_eq!(text_list("x", &[]).into_string(), "");
        let html = text_list("x", &["a".to_string()]).into_string();
        assert!(html.contains(r#"<ul class="x">"#));
    }

    #[test]
    fn dots_mark_active() {
        let html = dots("carousel-dot", 3, "experience", 0).into_string();
        assert_eq!(html.matches("carousel-dot active").count(), 1);
        assert!(html.contains(r#"aria-label="Go to experience 3""#));
    }

    #[test]
    fn stagger_delay_uses_step() {
        let config = SiteConfig::default();
        let ctx = RenderContext::new(&config, PageVariant::Portfolio);
        assert_eq!(ctx.stagger_delay(0), "transition-delay: 0.00s");
        assert_eq!(ctx.stagger_delay(2), "transition-delay: 0.16s");
    }

    #[test]
    fn stagger_delay_matches_reveal_stylesheet() {
        let reveal = shell::CSS_STATIC
            .split("[data-animate] {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .expect("stylesheet has a [data-animate] rule");
        assert!(reveal.contains("transition:"));

        let config = SiteConfig::default();
        let ctx = RenderContext::new(&config, PageVariant::Glass);
        let property = ctx.stagger_delay(1);
        assert!(property.starts_with("transition-delay:"));
    }
}
