//! Hero section: tagline, greeting, summary, contact links, and the footer name.

use super::{Page, RenderContext, mount};
use crate::config::SiteSettings;
use crate::schema::{Contact, ContentDocument};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Greeting shown when the document has no name.
pub const ANONYMOUS_GREETING: &str = "Hi there.";

/// Seconds between the reveal of consecutive contact links.
const LINK_STAGGER: f64 = 0.1;

/// One entry of the hero link row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: String,
}

impl ContactLink {
    /// Web links open in a new tab; `mailto:` stays in place.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

/// GitHub, LinkedIn, and email, in that order, skipping absent ones.
pub fn contact_links(contact: &Contact) -> Vec<ContactLink> {
    [
        ("github", contact.github.clone()),
        ("linkedin", contact.linkedin.clone()),
        ("email", contact.email.as_ref().map(|e| format!("mailto:{e}"))),
    ]
    .into_iter()
    .filter_map(|(label, href)| href.map(|href| ContactLink { label, href }))
    .collect()
}

pub fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Hi, I'm {name}."),
        None => ANONYMOUS_GREETING.to_string(),
    }
}

/// Summary from the document (Markdown), else the configured plain-text one.
pub(crate) fn summary_markup(summary: Option<&str>, site: &SiteSettings) -> Markup {
    match summary {
        Some(source) => {
            let mut out = String::new();
            md_html::push_html(&mut out, Parser::new(source));
            PreEscaped(out)
        }
        None => html! {
            @if let Some(text) = &site.summary {
                p { (text) }
            }
        },
    }
}

fn links_markup(links: &[ContactLink]) -> Markup {
    html! {
        @for (index, link) in links.iter().enumerate() {
            @let external = link.is_external();
            a href=(link.href)
                target=(if external { "_blank" } else { "_self" })
                rel=[external.then_some("noopener")]
                data-stagger
                style=(format!("animation-delay: {:.1}s", index as f64 * LINK_STAGGER)) {
                (link.label)
            }
        }
    }
}

pub fn render(page: &mut Page, doc: &ContentDocument, ctx: &RenderContext) {
    let site = &ctx.config.site;
    let name = doc.display_name();
    let tagline = doc.personal.tagline.as_deref().unwrap_or(&site.tagline);

    page.replace(mount::HERO_TAGLINE, html! { (tagline) });
    page.replace(mount::HERO_NAME, html! { (greeting(name)) });
    page.replace(mount::HERO_SUMMARY, summary_markup(doc.summary(), site));
    page.replace(mount::HERO_LINKS, links_markup(&contact_links(&doc.contact)));
    page.replace(mount::FOOTER_NAME, html! { (name.unwrap_or(&site.title)) });
}
