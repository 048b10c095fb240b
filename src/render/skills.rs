//! Skill chip groups.
//!
//! Groups come from a fixed table, shown in table order when the document
//! has a non-empty list under the group's key. Within a group, the chips
//! configured as highlighted for its type move to the front.

use super::{Page, RenderContext, mount, placeholder};
use crate::schema::Skills;
use maud::{Markup, html};

pub const EMPTY_MESSAGE: &str = "Skills coming soon.";

/// One row of the group table.
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    /// Key in the document's `skills` map.
    pub key: &'static str,
    pub label: &'static str,
    /// Key in `[skills.highlighted]`, also emitted as `data-type`.
    pub group_type: &'static str,
}

pub const GROUPS: [SkillGroup; 5] = [
    SkillGroup { key: "languages", label: "Languages", group_type: "languages" },
    SkillGroup { key: "mlFrameworks", label: "ML & Frameworks", group_type: "frameworks" },
    SkillGroup { key: "tools", label: "Tools & Platforms", group_type: "tools" },
    SkillGroup { key: "spokenLanguages", label: "Spoken Languages", group_type: "spoken" },
    SkillGroup { key: "interests", label: "Interests", group_type: "interests" },
];

pub(crate) fn empty() -> Markup {
    placeholder("skill-group", EMPTY_MESSAGE)
}

/// Stable partition: highlighted items first, each half in its original order.
pub fn highlighted_first<'a>(items: &'a [String], highlighted: &[String]) -> Vec<&'a str> {
    let (mut first, rest): (Vec<&str>, Vec<&str>) = items
        .iter()
        .map(String::as_str)
        .partition(|item| highlighted.iter().any(|h| h == item));
    first.extend(rest);
    first
}

fn group(kind: &SkillGroup, items: &[String], highlighted: &[String]) -> Markup {
    html! {
        div.skill-group data-animate="fade" data-type=(kind.group_type)
            data-category={ "// " (kind.key) } {
            h3 { (kind.label) }
            div.skill-tags {
                @for skill in highlighted_first(items, highlighted) {
                    @let class = if highlighted.iter().any(|h| h == skill) {
                        "skill-tag skill-tag--highlight"
                    } else {
                        "skill-tag"
                    };
                    span class=(class) data-stagger { (skill) }
                }
            }
        }
    }
}

/// Render the skill groups. Returns the number of groups shown.
pub fn render(page: &mut Page, skills: &Skills, ctx: &RenderContext) -> usize {
    let present: Vec<(&SkillGroup, &[String])> = GROUPS
        .iter()
        .filter_map(|kind| skills.group(kind.key).map(|items| (kind, items)))
        .collect();

    let markup = if present.is_empty() {
        empty()
    } else {
        html! {
            @for (kind, items) in &present {
                (group(kind, items, ctx.config.skills.highlighted_for(kind.group_type)))
            }
        }
    };
    page.replace(mount::SKILLS_GROUPS, markup);
    present.len()
}
