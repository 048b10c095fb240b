//! Page shells.
//!
//! The shell is the static part of a page: header, navigation, section
//! frames, resume button, footer, and the background canvas. Every mount
//! point sits inside it with the children currently held by the [`Page`].
//! Before any content is rendered those children are the static fallbacks
//! from [`fallback`], which is also what a page shows when its content
//! document fails to load.
//!
//! The stylesheet and the browser runtime are embedded at compile time and
//! inlined into every page:
//! - `static/site.css`: layout, carousel positions, reveal animation
//! - `static/site.js`: particles, reveal, nav sheet, carousel input, and on
//!   glass pages the section tabs, scroll progress bar, and hero parallax

use super::{Page, education, experience, hero, involvements, mount, projects, skills};
use crate::config::{PageConfig, PageVariant, SiteConfig, SiteSettings};
use crate::interaction::{NavSheet, TabSwitcher};
use maud::{DOCTYPE, Markup, PreEscaped, html};

pub const CSS_STATIC: &str = include_str!("../../static/site.css");
pub const JS: &str = include_str!("../../static/site.js");

/// Static children of a mount point.
pub fn fallback(id: &str, site: &SiteSettings) -> Markup {
    match id {
        mount::HERO_TAGLINE => html! { (site.tagline) },
        mount::HERO_NAME => html! { (hero::ANONYMOUS_GREETING) },
        mount::HERO_SUMMARY => hero::summary_markup(None, site),
        mount::FOOTER_NAME => html! { (site.title) },
        mount::PROJECTS_GRID => projects::empty(),
        mount::EXPERIENCE_TRACK => experience::empty_track(),
        mount::EXPERIENCE_TIMELINE => experience::empty_timeline(),
        mount::EDUCATION_CARDS => education::empty(),
        mount::SKILLS_GROUPS => skills::empty(),
        mount::INVOLVEMENT_LIST => involvements::empty(),
        _ => html! {},
    }
}

/// In-page anchors listed in the header and the mobile sheet.
fn sections(variant: PageVariant) -> &'static [(&'static str, &'static str)] {
    match variant {
        PageVariant::Portfolio => &[
            ("projects", "Projects"),
            ("experience", "Experience"),
            ("education", "Education"),
            ("skills", "Skills"),
            ("resume", "Resume"),
        ],
        PageVariant::Glass => &[
            ("involvements", "Involvements"),
            ("experience", "Experience"),
            ("education", "Education"),
            ("skills", "Skills"),
        ],
    }
}

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, body_attrs: BodyAttrs, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class={ "page page--" (body_attrs.variant.name()) }
                data-variant=(body_attrs.variant.name())
                data-swipe-threshold=(body_attrs.swipe_threshold)
                data-breakpoint=(body_attrs.breakpoint)
                data-stagger-step=(body_attrs.stagger_step) {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Runtime settings handed to `site.js` through `data-*` attributes.
#[derive(Debug, Clone, Copy)]
struct BodyAttrs {
    variant: PageVariant,
    swipe_threshold: f64,
    breakpoint: u32,
    stagger_step: f64,
}

fn site_header(title: &str, variant: PageVariant, sheet: NavSheet) -> Markup {
    let with_state = |base: &str| match sheet.active_class() {
        Some(state) => format!("{base} {state}"),
        None => base.to_string(),
    };
    let expanded = if sheet.is_open() { "true" } else { "false" };
    html! {
        header.site-header {
            a.site-header__brand href="#hero" { (title) }
            nav.site-nav aria-label="Sections" {
                @for (anchor, label) in sections(variant) {
                    a href={ "#" (anchor) } { (label) }
                }
            }
            button id="mobile-nav-toggle" class="mobile-nav-toggle" type="button"
                aria-label="Toggle navigation" aria-controls="mobile-nav-sheet"
                aria-expanded=(expanded) {
                span {} span {} span {}
            }
        }
        div id="mobile-nav-overlay" class=(with_state("mobile-nav-overlay"))
            aria-hidden=(sheet.aria_hidden()) {}
        nav id="mobile-nav-sheet" class=(with_state("mobile-nav-sheet"))
            aria-hidden=(sheet.aria_hidden()) aria-label="Sections" {
            @for (anchor, label) in sections(variant) {
                a href={ "#" (anchor) } data-mobile-nav-link { (label) }
            }
        }
    }
}

fn hero_section(page: &Page) -> Markup {
    let glass = page.variant() == PageVariant::Glass;
    html! {
        section id="hero" class=(if glass { "hero glass-hero" } else { "hero" }) data-animate="fade" {
            @if glass {
                div.hero__visual aria-hidden="true" {
                    div.hero__orb {}
                }
            }
            p.hero__tagline id=(mount::HERO_TAGLINE) { (page.content(mount::HERO_TAGLINE)) }
            h1.hero__name id=(mount::HERO_NAME) { (page.content(mount::HERO_NAME)) }
            div.hero__summary id=(mount::HERO_SUMMARY) { (page.content(mount::HERO_SUMMARY)) }
            div.hero__links id=(mount::HERO_LINKS) { (page.content(mount::HERO_LINKS)) }
        }
    }
}

fn section(anchor: &str, heading: &str, body: Markup) -> Markup {
    html! {
        section class="section" id=(anchor) {
            h2.section__title data-animate="fade" { (heading) }
            (body)
        }
    }
}

fn arrow(id: &str, label: &str, glyph: &str) -> Markup {
    html! {
        button.carousel-btn id=(id) type="button" aria-label=(label) { (glyph) }
    }
}

fn portfolio_sections(page: &Page, site: &SiteSettings) -> Markup {
    html! {
        (section("projects", "Projects", html! {
            div.projects-grid id=(mount::PROJECTS_GRID) { (page.content(mount::PROJECTS_GRID)) }
            div.projects-carousel-nav {
                (arrow("proj-prev", "Previous project", "‹"))
                div.projects-carousel-dots id=(mount::PROJECTS_DOTS) { (page.content(mount::PROJECTS_DOTS)) }
                (arrow("proj-next", "Next project", "›"))
            }
        }))
        (section("experience", "Experience", html! {
            div.carousel {
                (arrow("exp-prev", "Previous experience", "‹"))
                div.carousel-track id=(mount::EXPERIENCE_TRACK) { (page.content(mount::EXPERIENCE_TRACK)) }
                (arrow("exp-next", "Next experience", "›"))
            }
            div.carousel-dots id=(mount::EXPERIENCE_DOTS) { (page.content(mount::EXPERIENCE_DOTS)) }
        }))
        (education_section(page))
        (skills_section(page))
        (section("resume", "Resume", html! {
            a class="btn btn--primary" href=(site.resume_path) download { "Download resume" }
        }))
    }
}

/// Glass sections, one tab panel each. Header anchors still point at the
/// sections inside the panels.
fn glass_sections(page: &Page) -> Markup {
    let tabs = sections(PageVariant::Glass);
    let switcher = TabSwitcher::new(tabs.len());
    let panel_class = |index: usize| {
        if switcher.is_active(index) {
            "glass-window-panel active"
        } else {
            "glass-window-panel"
        }
    };
    html! {
        div.glass-windows {
            nav.glass-windows__nav aria-label="Section tabs" {
                @for (index, (anchor, label)) in tabs.iter().enumerate() {
                    button type="button"
                        class=(if switcher.is_active(index) { "glass-window-btn active" } else { "glass-window-btn" })
                        data-window=(anchor) aria-controls={ "panel-" (anchor) }
                        aria-pressed=(switcher.aria_pressed(index)) { (label) }
                }
            }
            @for (index, (anchor, _)) in tabs.iter().enumerate() {
                div class=(panel_class(index)) id={ "panel-" (anchor) } {
                    (glass_panel(page, anchor))
                }
            }
        }
    }
}

fn glass_panel(page: &Page, anchor: &str) -> Markup {
    match anchor {
        "involvements" => section("involvements", "Involvements", html! {
            div.involvement-list id=(mount::INVOLVEMENT_LIST) { (page.content(mount::INVOLVEMENT_LIST)) }
        }),
        "experience" => section("experience", "Experience", html! {
            div.glass-timeline id=(mount::EXPERIENCE_TIMELINE) { (page.content(mount::EXPERIENCE_TIMELINE)) }
        }),
        "education" => education_section(page),
        "skills" => skills_section(page),
        _ => html! {},
    }
}

fn education_section(page: &Page) -> Markup {
    section("education", "Education", html! {
        div.education-cards id=(mount::EDUCATION_CARDS) { (page.content(mount::EDUCATION_CARDS)) }
    })
}

fn skills_section(page: &Page) -> Markup {
    section("skills", "Skills", html! {
        div.skills-groups id=(mount::SKILLS_GROUPS) { (page.content(mount::SKILLS_GROUPS)) }
    })
}

fn site_footer(page: &Page, year: i32) -> Markup {
    html! {
        footer.site-footer {
            p {
                "© " span id="current-year" { (year) } " "
                span id=(mount::FOOTER_NAME) { (page.content(mount::FOOTER_NAME)) }
            }
        }
    }
}

/// Render a whole page: shell, current mount point children, and inline
/// theme CSS and runtime.
pub fn render_document(
    page: &Page,
    config: &SiteConfig,
    page_config: &PageConfig,
    year: i32,
) -> Markup {
    let variant = page.variant();
    let title = page_config.title.as_deref().unwrap_or(&config.site.title);
    let theme_css = crate::config::generate_theme_css(&config.theme, page_config);
    let css = format!("{theme_css}\n\n{CSS_STATIC}");

    let content = html! {
        @if variant == PageVariant::Glass {
            div id="scroll-progress" class="scroll-progress" aria-hidden="true" {}
        }
        (site_header(title, variant, NavSheet::closed()))
        canvas id="bg-canvas" aria-hidden="true" data-particles=(config.animation.particle_count) {}
        main {
            (hero_section(page))
            @match variant {
                PageVariant::Portfolio => { (portfolio_sections(page, &config.site)) }
                PageVariant::Glass => { (glass_sections(page)) }
            }
        }
        (site_footer(page, year))
    };

    let attrs = BodyAttrs {
        variant,
        swipe_threshold: config.carousel.swipe_threshold,
        breakpoint: config.carousel.mobile_breakpoint,
        stagger_step: config.animation.stagger_step,
    };
    base_document(title, &css, attrs, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(variant: PageVariant) -> String {
        let config = SiteConfig::default();
        let page = Page::new(variant, &config);
        let page_config = PageConfig {
            variant,
            ..PageConfig::portfolio()
        };
        render_document(&page, &config, &page_config, 2026).into_string()
    }

    #[test]
    fn base_document_includes_doctype() {
        let doc = document(PageVariant::Portfolio);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Portfolio</title>"));
    }

    #[test]
    fn every_mount_point_is_in_the_shell() {
        for variant in [PageVariant::Portfolio, PageVariant::Glass] {
            let doc = document(variant);
            for id in mount::for_variant(variant) {
                assert!(doc.contains(&format!(r#"id="{id}""#)), "{id} missing");
            }
        }
    }

    #[test]
    fn portfolio_shell_has_carousel_controls_and_resume() {
        let doc = document(PageVariant::Portfolio);
        for id in ["proj-prev", "proj-next", "exp-prev", "exp-next"] {
            assert!(doc.contains(&format!(r#"id="{id}""#)), "{id} missing");
        }
        assert!(doc.contains(r#"<section class="section" id="resume">"#));
        assert!(doc.contains(r#"href="assets/resume.pdf""#));
        assert!(!doc.contains(r#"id="involvements""#));
    }

    #[test]
    fn glass_shell_has_timeline_and_no_resume() {
        let doc = document(PageVariant::Glass);
        assert!(doc.contains(r#"id="experience-timeline""#));
        assert!(!doc.contains(r#"id="resume""#));
        assert!(!doc.contains(r#"id="projects-grid""#));
    }

    #[test]
    fn glass_shell_has_section_tabs() {
        let doc = document(PageVariant::Glass);
        assert!(doc.contains(r#"<nav class="glass-windows__nav" aria-label="Section tabs">"#));
        assert_eq!(doc.matches(r#"class="glass-window-btn"#).count(), 4);
        assert_eq!(doc.matches(r#"aria-pressed="true""#).count(), 1);
        assert!(doc.contains(
            r#"class="glass-window-btn active" data-window="involvements" aria-controls="panel-involvements" aria-pressed="true""#
        ));
        assert!(doc.contains(r#"<div class="glass-window-panel active" id="panel-involvements">"#));
        for anchor in ["experience", "education", "skills"] {
            assert!(doc.contains(&format!(r#"<div class="glass-window-panel" id="panel-{anchor}">"#)));
        }

        // Each panel wraps the section the header anchors point at.
        let panel = doc.find(r#"id="panel-experience""#).unwrap();
        let timeline = doc.find(r#"id="experience-timeline""#).unwrap();
        assert!(panel < timeline);
    }

    #[test]
    fn glass_shell_has_progress_bar_and_hero_visual() {
        let doc = document(PageVariant::Glass);
        assert!(doc.contains(r#"<div id="scroll-progress" class="scroll-progress" aria-hidden="true"></div>"#));
        assert!(doc.contains(r#"class="hero glass-hero""#));
        assert!(doc.contains(r#"<div class="hero__visual" aria-hidden="true">"#));

        let portfolio = document(PageVariant::Portfolio);
        assert!(!portfolio.contains(r#"id="scroll-progress""#));
        assert!(!portfolio.contains(r#"class="glass-window"#));
        assert!(!portfolio.contains(r#"class="hero__visual""#));
    }

    #[test]
    fn nav_sheet_starts_hidden() {
        let doc = document(PageVariant::Portfolio);
        assert!(doc.contains(r#"id="mobile-nav-sheet" class="mobile-nav-sheet" aria-hidden="true""#));
        assert!(doc.contains(r#"id="mobile-nav-overlay" class="mobile-nav-overlay" aria-hidden="true""#));
        assert!(doc.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn static_fallbacks_fill_the_shell() {
        let doc = document(PageVariant::Portfolio);
        assert!(doc.contains(hero::ANONYMOUS_GREETING));
        assert!(doc.contains(projects::EMPTY_MESSAGE));
        assert!(doc.contains(skills::EMPTY_MESSAGE));
        assert!(doc.contains(r#"<span id="current-year">2026</span>"#));
    }

    #[test]
    fn runtime_settings_on_body() {
        let doc = document(PageVariant::Glass);
        assert!(doc.contains(r#"data-variant="glass""#));
        assert!(doc.contains(r#"data-swipe-threshold="50""#));
        assert!(doc.contains(r#"data-breakpoint="768""#));
        assert!(doc.contains(r#"data-particles="30""#));
        assert!(doc.contains("--accent-main"));
    }
}
