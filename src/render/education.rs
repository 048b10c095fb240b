//! Education cards.

use super::{Page, RenderContext, logo_or_initials, mount, placeholder};
use crate::format::abbreviate_degree;
use crate::schema::{Education, Leadership};
use maud::{Markup, html};

pub const EMPTY_MESSAGE: &str = "Education details coming soon.";
pub const NO_COURSEWORK: &str = "Coursework available on request.";
pub const NO_ORGANIZATIONS: &str = "Active learner & collaborator.";
const NO_GPA: &str = "—";

pub(crate) fn empty() -> Markup {
    placeholder("education-card", EMPTY_MESSAGE)
}

/// The entry's own organizations, or the leadership organizations when it
/// lists none.
pub fn organizations<'a>(entry: &'a Education, leadership: &'a [Leadership]) -> Vec<&'a str> {
    if entry.organizations.is_empty() {
        leadership
            .iter()
            .filter_map(|item| item.organization.as_deref())
            .collect()
    } else {
        entry.organizations.iter().map(String::as_str).collect()
    }
}

/// `"{degree}, Minor in {minor}"`, or whichever half is present.
pub fn degree_line(degree: Option<&str>, minor: Option<&str>) -> String {
    match (degree, minor) {
        (Some(degree), Some(minor)) => format!("{degree}, Minor in {minor}"),
        (None, Some(minor)) => format!("Minor in {minor}"),
        (Some(degree), None) => degree.to_string(),
        (None, None) => String::new(),
    }
}

fn gpa_badge(class: &str, label: &str, gpa: Option<&str>) -> Markup {
    html! {
        div class={ "gpa-badge " (class) } {
            span { (label) }
            span.gpa-badge__value { (gpa.unwrap_or(NO_GPA)) }
        }
    }
}

fn chips<'a>(items: impl IntoIterator<Item = &'a str>, accent: bool) -> Markup {
    let class = if accent { "edu-chip edu-chip--accent" } else { "edu-chip" };
    html! {
        @for item in items {
            span class=(class) data-stagger { (item) }
        }
    }
}

fn collapsible(title: &str, grid_class: &str, body: Markup) -> Markup {
    html! {
        div.edu-collapsible-section {
            button.edu-collapsible-btn type="button" aria-expanded="false" {
                span { "View " (title) }
                span.edu-collapsible-icon { "›" }
            }
            div.edu-collapsible-content {
                p.edu-section-title { "// " (title) }
                div class=(grid_class) { (body) }
            }
        }
    }
}

fn card(index: usize, entry: &Education, leadership: &[Leadership], ctx: &RenderContext) -> Markup {
    let school = entry.school.as_deref();
    let gpa = entry.gpa.as_deref();
    let logo_alt = entry
        .logo_alt
        .clone()
        .unwrap_or_else(|| format!("{} logo", school.unwrap_or("University")));
    let short_degree = entry.degree.as_deref().map(abbreviate_degree);
    let orgs = organizations(entry, leadership);

    let coursework = if entry.coursework.is_empty() {
        html! { p.edu-fallback { (NO_COURSEWORK) } }
    } else {
        chips(entry.coursework.iter().map(String::as_str), false)
    };
    let org_chips = if orgs.is_empty() {
        html! { p.edu-fallback { (NO_ORGANIZATIONS) } }
    } else {
        chips(orgs, true)
    };

    html! {
        article.education-card data-animate="fade" style=(ctx.stagger_delay(index)) {
            (gpa_badge("gpa-badge--desktop", "GPA", gpa))
            div.education-card__header {
                div.education-logo {
                    (logo_or_initials(entry.logo.as_deref(), Some(logo_alt.as_str()), school, "education-logo"))
                }
                div.education-card__school {
                    p.education-card__graduation {
                        "// " (entry.expected_graduation.as_deref().unwrap_or_default())
                    }
                    @if let Some(school) = school {
                        h3.education-card__name { (school) }
                    }
                    p.education-degree {
                        span.education-degree__full {
                            (degree_line(entry.degree.as_deref(), entry.minor.as_deref()))
                        }
                        span.education-degree__short {
                            (degree_line(short_degree.as_deref(), entry.minor.as_deref()))
                        }
                    }
                    @if let Some(location) = &entry.location {
                        p.education-card__location { (location) }
                    }
                }
            }
            div.education-card__body {
                (gpa_badge("gpa-badge--mobile", "CUMULATIVE GPA", gpa))
                (collapsible("Coursework", "edu-coursework-grid", coursework))
                (collapsible("Organizations", "organizations-grid", org_chips))
            }
        }
    }
}

/// Render the education cards. `leadership` feeds entries without
/// organizations of their own. Returns the card count.
pub fn render(
    page: &mut Page,
    education: &[Education],
    leadership: &[Leadership],
    ctx: &RenderContext,
) -> usize {
    let markup = if education.is_empty() {
        empty()
    } else {
        html! {
            @for (index, entry) in education.iter().enumerate() {
                (card(index, entry, leadership, ctx))
            }
        }
    };
    page.replace(mount::EDUCATION_CARDS, markup);
    education.len()
}
