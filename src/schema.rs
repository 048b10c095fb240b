//! Content document schema.
//!
//! A [`ContentDocument`] is the parsed form of a page's JSON content file
//! (`resume.json`, `glass_portfolio_content.json`). Every section is optional
//! and every field is *lenient*: a missing key, a `null`, or a value of the
//! wrong JSON type becomes the field's default instead of a parse error. The
//! only way loading a document fails is when the file is not JSON at all, or
//! its top level is not an object (see [`crate::hydrate::load_document`]).
//!
//! ```json
//! {
//!   "name": "Ada Example",
//!   "contact": { "email": "ada@example.com", "github": "https://github.com/ada" },
//!   "projects": [{ "name": "Orbit", "tech": ["Rust"], "description": ["..."] }],
//!   "experience": [{ "id": "2", "company": "Acme Corp", "tags": ["Rust"] }],
//!   "experiences": { "research": [{ "id": 1, "company": "Lab" }] },
//!   "education": [{ "school": "State University", "gpa": 3.9 }],
//!   "skills": { "languages": ["Rust", "Python"] },
//!   "githubRepos": { "Orbit": "https://github.com/ada/orbit" }
//! }
//! ```
//!
//! ## Experience normalization
//!
//! Experience arrives in two shapes: a flat array (`experience`) or a map of
//! category → array (`experiences`). Both keys accept either shape.
//! [`ContentDocument::experience_entries`] flattens everything into one list,
//! tagging entries from a category map with their category, so renderers only
//! ever see [`Experience`] records.

use crate::format::parse_order_key;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// The whole content file for one page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub personal: Personal,
    #[serde(deserialize_with = "lenient::or_default")]
    pub contact: Contact,
    #[serde(deserialize_with = "lenient::records")]
    pub education: Vec<Education>,
    pub experience: ExperienceSource,
    pub experiences: ExperienceSource,
    #[serde(deserialize_with = "lenient::records")]
    pub projects: Vec<Project>,
    pub skills: Skills,
    #[serde(deserialize_with = "lenient::records")]
    pub involvements: Vec<Involvement>,
    #[serde(deserialize_with = "lenient::records")]
    pub leadership: Vec<Leadership>,
    #[serde(deserialize_with = "lenient::text_map")]
    pub github_repos: BTreeMap<String, String>,
}

impl ContentDocument {
    /// Display name: `personal.name`, then top-level `name`.
    pub fn display_name(&self) -> Option<&str> {
        self.personal.name.as_deref().or(self.name.as_deref())
    }

    /// Hero summary: `personal.summary`, then top-level `summary`.
    pub fn summary(&self) -> Option<&str> {
        self.personal.summary.as_deref().or(self.summary.as_deref())
    }

    /// Location: `personal.location`, then `contact.location`.
    pub fn location(&self) -> Option<&str> {
        self.personal
            .location
            .as_deref()
            .or(self.contact.location.as_deref())
    }

    /// All experience records in document order, `experience` before
    /// `experiences`. Not yet sorted for display.
    pub fn experience_entries(&self) -> Vec<Experience> {
        let mut entries = self.experience.flatten();
        entries.extend(self.experiences.flatten());
        entries
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Personal {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub tagline: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub github: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "lenient::text")]
    pub school: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub minor: Option<String>,
    /// Numbers are kept as written (`3.9` → `"3.9"`).
    #[serde(deserialize_with = "lenient::text")]
    pub gpa: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub expected_graduation: Option<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub coursework: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub organizations: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub logo: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub logo_alt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    /// Display order. Parsed from `id`; absent or non-numeric ids are `0`.
    #[serde(rename = "id", deserialize_with = "lenient::order_key")]
    pub order: i64,
    #[serde(deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub team_focus: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub logo: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub logo_alt: Option<String>,
    /// Set from the map key when the entry came from a category map.
    #[serde(deserialize_with = "lenient::text")]
    pub category: Option<String>,
}

/// Experience as it appears in the file: a flat list or a category map.
#[derive(Debug, Clone, Default)]
pub enum ExperienceSource {
    #[default]
    Absent,
    List(Vec<Experience>),
    /// Category name → entries, in document order.
    Categorized(Vec<(String, Vec<Experience>)>),
}

impl ExperienceSource {
    /// Flatten into one list; categorized entries inherit their category
    /// unless they name their own.
    pub fn flatten(&self) -> Vec<Experience> {
        match self {
            ExperienceSource::Absent => Vec::new(),
            ExperienceSource::List(entries) => entries.clone(),
            ExperienceSource::Categorized(groups) => groups
                .iter()
                .flat_map(|(category, entries)| {
                    entries.iter().cloned().map(move |mut entry| {
                        entry.category.get_or_insert_with(|| category.clone());
                        entry
                    })
                })
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for ExperienceSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => ExperienceSource::List(lenient::records_from(items)),
            Value::Object(map) => ExperienceSource::Categorized(
                map.into_iter()
                    .filter_map(|(category, value)| match value {
                        Value::Array(items) => Some((category, lenient::records_from(items))),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => ExperienceSource::Absent,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub tech: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub description: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub repo: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub link: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub featured: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub in_progress: bool,
    #[serde(deserialize_with = "lenient::records")]
    pub actions: Vec<ProjectAction>,
}

/// An extra button on a project card, declared in content.
///
/// With an `href` it renders as an external link; without one it renders as
/// an in-page notice button that shows `message` when clicked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectAction {
    #[serde(deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub href: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub icon: ActionIcon,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionIcon {
    #[default]
    None,
    External,
    Info,
}

/// Skill category key → chips, e.g. `languages` → `["Rust", "Go"]`.
#[derive(Debug, Clone, Default)]
pub struct Skills(pub BTreeMap<String, Vec<String>>);

impl Skills {
    /// The chips for a category; `None` when the category is absent or empty.
    pub fn group(&self, key: &str) -> Option<&[String]> {
        self.0
            .get(key)
            .map(Vec::as_slice)
            .filter(|items| !items.is_empty())
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let groups = match Value::deserialize(deserializer)? {
            Value::Object(map) => map
                .into_iter()
                .filter_map(|(key, value)| match value {
                    Value::Array(items) => Some((key, lenient::texts_from(items))),
                    _ => None,
                })
                .collect(),
            _ => BTreeMap::new(),
        };
        Ok(Skills(groups))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Involvement {
    #[serde(deserialize_with = "lenient::text")]
    pub organization: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub highlights: Vec<String>,
    /// Metric key (e.g. `programImpact`) → value, in document order.
    #[serde(deserialize_with = "lenient::text_pairs")]
    pub metrics: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Leadership {
    #[serde(deserialize_with = "lenient::text")]
    pub organization: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub role: Option<String>,
}

/// Field deserializers that never fail.
///
/// Each one reads the raw JSON value and maps anything unexpected to the
/// field's default. Strings that are empty after trimming count as absent.
pub(crate) mod lenient {
    use super::*;
    use serde::de::DeserializeOwned;

    /// Scalar → display text. Objects, arrays, `null`, and blank strings → `None`.
    pub(crate) fn text_of(value: Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub(crate) fn texts_from(items: Vec<Value>) -> Vec<String> {
        items.into_iter().filter_map(text_of).collect()
    }

    /// Keep the array items that are objects; drop the rest.
    pub(crate) fn records_from<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
        items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()
    }

    pub(crate) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(text_of(Value::deserialize(d)?))
    }

    pub(crate) fn text_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => texts_from(items),
            _ => Vec::new(),
        })
    }

    pub(crate) fn text_map<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<BTreeMap<String, String>, D::Error> {
        Ok(text_pairs(d)?.into_iter().collect())
    }

    pub(crate) fn text_pairs<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Vec<(String, String)>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Object(map) => map
                .into_iter()
                .filter_map(|(k, v)| text_of(v).map(|v| (k, v)))
                .collect(),
            _ => Vec::new(),
        })
    }

    pub(crate) fn records<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => records_from(items),
            _ => Vec::new(),
        })
    }

    pub(crate) fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(serde_json::from_value(Value::deserialize(d)?).unwrap_or_default())
    }

    /// Truthiness as the page scripts saw it: `true`, non-zero numbers, and
    /// non-empty strings other than `"false"`.
    pub(crate) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty() && s != "false",
            _ => false,
        })
    }

    /// Numeric ids are truncated toward zero; strings go through
    /// [`parse_order_key`]; anything else is `0`.
    pub(crate) fn order_key<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
                .unwrap_or(0),
            Value::String(s) => parse_order_key(&s),
            _ => 0,
        })
    }
}
