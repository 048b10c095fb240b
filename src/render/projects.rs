//! Project cards and the mobile carousel dots.
//!
//! Each card shows the tech stack, description lines, and an actions row.
//! The first action is always the `$ git clone` button pointing at the
//! resolved repository link (see [`resolve_repo_link`]); when nothing
//! resolves the button is rendered disabled. Further buttons come from the
//! project's own `actions` list.

use super::{Page, RenderContext, dots, mount, placeholder, text_list};
use crate::carousel::Carousel;
use crate::format::{RepoKeys, RepoLink, filename_slug, resolve_repo_link};
use crate::schema::{ActionIcon, Contact, Project, ProjectAction};
use maud::{Markup, PreEscaped, html};
use std::collections::BTreeMap;

pub const EMPTY_MESSAGE: &str = "Projects coming soon.";
pub const REPO_MISSING_TITLE: &str = "Repository coming soon";

const ICON_EXTERNAL: &str = r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><polyline points="15 3 21 3 21 9"/><line x1="10" y1="14" x2="21" y2="3"/></svg>"#;
const ICON_INFO: &str = r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><circle cx="12" cy="12" r="10"/><line x1="12" y1="8" x2="12" y2="12"/><line x1="12" y1="16" x2="12.01" y2="16"/></svg>"#;

pub(crate) fn empty() -> Markup {
    placeholder("project-card", EMPTY_MESSAGE)
}

fn repo_keys(project: &Project) -> RepoKeys<'_> {
    RepoKeys {
        repo: project.repo.as_deref(),
        id: project.id.as_deref(),
        slug: project.slug.as_deref(),
        name: project.name.as_deref(),
        link: project.link.as_deref(),
    }
}

fn clone_button(link: &RepoLink) -> Markup {
    html! {
        @match link.url() {
            Some(url) => {
                a class="btn btn--ghost" href=(url) target="_blank" rel="noopener noreferrer" {
                    "$ git clone"
                }
            }
            None => {
                a class="btn btn--ghost btn--disabled" href="#" title=(REPO_MISSING_TITLE) aria-disabled="true" {
                    "$ git clone"
                }
            }
        }
    }
}

fn icon(icon: ActionIcon) -> Markup {
    match icon {
        ActionIcon::None => html! {},
        ActionIcon::External => PreEscaped(format!("{ICON_EXTERNAL} ")),
        ActionIcon::Info => PreEscaped(format!("{ICON_INFO} ")),
    }
}

/// An extra button; actions without a label render nothing.
fn action_button(action: &ProjectAction) -> Markup {
    let Some(label) = &action.label else {
        return html! {};
    };
    let class = if action.icon == ActionIcon::None {
        "btn btn--primary btn--small"
    } else {
        "btn btn--primary btn--small btn--with-icon"
    };
    html! {
        @if let Some(href) = &action.href {
            a class=(class) href=(href) target="_blank" rel="noopener noreferrer"
                title=[action.title.as_deref()] {
                (icon(action.icon)) (label)
            }
        } @else {
            button class=(class) type="button" title=[action.title.as_deref()]
                data-message=[action.message.as_deref()] {
                (icon(action.icon)) (label)
            }
        }
    }
}

fn card(
    index: usize,
    project: &Project,
    contact: &Contact,
    repos: &BTreeMap<String, String>,
    ctx: &RenderContext,
) -> Markup {
    let name = project.name.as_deref();
    let link = resolve_repo_link(repo_keys(project), repos, contact.github.as_deref());
    let class = if project.featured {
        "project-card project-card--featured"
    } else {
        "project-card"
    };

    html! {
        article class=(class) data-animate="fade" data-index=(index)
            data-filename=(filename_slug(name)) style=(ctx.stagger_delay(index)) {
            h3 data-stagger { (name.unwrap_or_default()) }
            @if project.in_progress {
                span class="project-card__badge" { "In progress" }
            }
            @if let Some(location) = &project.location {
                p.project-meta data-stagger { (location) }
            }
            (text_list("project-card__stack", &project.tech))
            (text_list("project-card__details", &project.description))
            div class="project-card__actions" {
                (clone_button(&link))
                @for action in &project.actions {
                    (action_button(action))
                }
            }
        }
    }
}

/// Render the project grid and its carousel dots. Returns the card count.
pub fn render(
    page: &mut Page,
    projects: &[Project],
    contact: &Contact,
    repos: &BTreeMap<String, String>,
    ctx: &RenderContext,
) -> usize {
    if projects.is_empty() {
        page.replace(mount::PROJECTS_GRID, empty());
        page.replace(mount::PROJECTS_DOTS, html! {});
        return 0;
    }

    let grid = html! {
        @for (index, project) in projects.iter().enumerate() {
            (card(index, project, contact, repos, ctx))
        }
    };
    let cursor = Carousel::new(projects.len());
    page.replace(mount::PROJECTS_GRID, grid);
    page.replace(
        mount::PROJECTS_DOTS,
        dots("projects-carousel-dot", cursor.count(), "project", cursor.active()),
    );
    projects.len()
}
