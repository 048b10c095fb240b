//! Involvement cards.

use super::{Page, RenderContext, mount, placeholder, text_list};
use crate::format::format_label;
use crate::schema::Involvement;
use maud::{Markup, html};

pub const EMPTY_MESSAGE: &str = "More updates soon.";

pub(crate) fn empty() -> Markup {
    placeholder("involvement-card", EMPTY_MESSAGE)
}

fn card(index: usize, item: &Involvement, ctx: &RenderContext) -> Markup {
    html! {
        article.involvement-card data-animate="fade" style=(ctx.stagger_delay(index)) {
            div.involvement-card__header {
                @if let Some(organization) = &item.organization {
                    h3.involvement-card__organization { (organization) }
                }
                @if let Some(role) = &item.role {
                    p.involvement-card__role { (role) }
                }
                @if let Some(date) = &item.date {
                    p.involvement-card__date { (date) }
                }
            }
            @if let Some(description) = &item.description {
                p.involvement-card__description { (description) }
            }
            (text_list("involvement-card__highlights", &item.highlights))
            @if !item.metrics.is_empty() {
                dl.involvement-card__metrics {
                    @for (key, value) in &item.metrics {
                        div.involvement-metric data-stagger {
                            dt { (format_label(key)) }
                            dd { (value) }
                        }
                    }
                }
            }
        }
    }
}

pub fn render(page: &mut Page, involvements: &[Involvement], ctx: &RenderContext) -> usize {
    let markup = if involvements.is_empty() {
        empty()
    } else {
        html! {
            @for (index, item) in involvements.iter().enumerate() {
                (card(index, item, ctx))
            }
        }
    };
    page.replace(mount::INVOLVEMENT_LIST, markup);
    involvements.len()
}
