//! Experience, as a ring carousel or a vertical timeline.
//!
//! Entries are shown in ascending order of their numeric `id`, ties keeping
//! document order. The renderer fills whichever layout the page shell
//! provides: the carousel track with its dots, the timeline, or both.

use super::{Page, RenderContext, dots, logo_or_initials, mount, placeholder, text_list};
use crate::carousel::Carousel;
use crate::format::format_label;
use crate::schema::Experience;
use maud::{Markup, html};

pub const EMPTY_MESSAGE: &str = "More updates soon.";

pub(crate) fn empty_track() -> Markup {
    placeholder("carousel-card active", EMPTY_MESSAGE)
}

pub(crate) fn empty_timeline() -> Markup {
    placeholder("glass-timeline__item", EMPTY_MESSAGE)
}

/// Display order: stable ascending sort on the parsed id.
pub fn sorted_by_order(entries: &[Experience]) -> Vec<&Experience> {
    let mut sorted: Vec<&Experience> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.order);
    sorted
}

fn tags(entry: &Experience, max: usize, class: &str) -> Markup {
    html! {
        @if !entry.tags.is_empty() {
            div class={ (class) "__tags" } {
                @for tag in entry.tags.iter().take(max) {
                    span class={ (class) "__tag" } { (tag) }
                }
            }
        }
    }
}

fn carousel_card(index: usize, class: &str, entry: &Experience, max_tags: usize) -> Markup {
    let company = entry.company.as_deref();
    html! {
        article class={ "carousel-card " (class) } data-index=(index) {
            div.carousel-card__header {
                div.carousel-card__logo {
                    (logo_or_initials(entry.logo.as_deref(), entry.logo_alt.as_deref(), company, "carousel-card"))
                }
                div.carousel-card__info {
                    @if let Some(date) = &entry.date {
                        p.carousel-card__date { (date) }
                    }
                    h3.carousel-card__company { (company.unwrap_or("Experience")) }
                    @if let Some(title) = &entry.title {
                        p.carousel-card__title { (title) }
                    }
                    @if let Some(location) = &entry.location {
                        p.carousel-card__location { (location) }
                    }
                }
            }
            @if let Some(team) = &entry.team_focus {
                p.carousel-card__team { (team) }
            }
            @if let Some(description) = &entry.description {
                p.carousel-card__description { (description) }
            }
            (text_list("carousel-card__highlights", &entry.highlights))
            (tags(entry, max_tags, "carousel-card"))
        }
    }
}

fn timeline_item(index: usize, entry: &Experience, ctx: &RenderContext) -> Markup {
    html! {
        article class="glass-timeline__item" data-index=(index) data-animate="fade" style=(ctx.stagger_delay(index)) {
            div class="glass-timeline__marker" {}
            div class="glass-timeline__content" {
                @if let Some(category) = &entry.category {
                    p class="glass-timeline__category" { (format_label(category)) }
                }
                @if let Some(date) = &entry.date {
                    p class="glass-timeline__date" { (date) }
                }
                h3 class="glass-timeline__title" {
                    (entry.title.as_deref().or(entry.company.as_deref()).unwrap_or("Experience"))
                }
                @if entry.title.is_some() {
                    @if let Some(company) = &entry.company {
                        p class="glass-timeline__company" { (company) }
                    }
                }
                @if let Some(location) = &entry.location {
                    p class="glass-timeline__location" { (location) }
                }
                @if let Some(description) = &entry.description {
                    p class="glass-timeline__description" { (description) }
                }
                (text_list("glass-timeline__highlights", &entry.highlights))
                (tags(entry, ctx.config.carousel.max_tags, "glass-timeline"))
            }
        }
    }
}

/// Render every experience layout present on the page. Returns the entry count.
pub fn render(page: &mut Page, entries: &[Experience], ctx: &RenderContext) -> usize {
    let sorted = sorted_by_order(entries);
    let max_tags = ctx.config.carousel.max_tags;

    if page.has_mount(mount::EXPERIENCE_TRACK) {
        let cursor = Carousel::new(sorted.len());
        let track = if sorted.is_empty() {
            empty_track()
        } else {
            html! {
                @for ((index, entry), position) in sorted.iter().enumerate().zip(cursor.positions()) {
                    (carousel_card(index, position.class(), entry, max_tags))
                }
            }
        };
        page.replace(mount::EXPERIENCE_TRACK, track);
        page.replace(
            mount::EXPERIENCE_DOTS,
            dots("carousel-dot", cursor.count(), "experience", cursor.active()),
        );
    }

    if page.has_mount(mount::EXPERIENCE_TIMELINE) {
        let timeline = if sorted.is_empty() {
            empty_timeline()
        } else {
            html! {
                @for (index, entry) in sorted.iter().enumerate() {
                    (timeline_item(index, entry, ctx))
                }
            }
        };
        page.replace(mount::EXPERIENCE_TIMELINE, timeline);
    }

    sorted.len()
}
