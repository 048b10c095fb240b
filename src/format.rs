//! Field formatters: small pure functions that derive display strings from
//! raw content fields.
//!
//! Every formatter accepts absent or empty input and returns a usable value, so
//! renderers call these without checking first.
//!
//! | Formatter | Example |
//! |---|---|
//! | [`format_label`] | `programImpact` → `Program Impact` |
//! | [`initials`] | `Q Quake Labs` → `QQL` |
//! | [`filename_slug`] | `My Cool Project!` → `my_cool_project.js` |
//! | [`resolve_repo_link`] | `repo` > `githubRepos[id/slug/name]` > `link` > `contact.github` |
//! | [`abbreviate_degree`] | `Bachelor of Science in Physics` → `B.S. Physics` |
//! | [`parse_order_key`] | `"12"` → `12`, `"abc"` → `0` |

use std::collections::BTreeMap;

/// Maximum number of letters in a logo placeholder.
pub const MAX_INITIALS: usize = 3;

/// Maximum length of the slug part of a generated filename.
pub const MAX_SLUG_LEN: usize = 20;

/// Extension appended to every generated filename.
pub const SLUG_EXTENSION: &str = "js";

/// Filename used when the project has no usable name.
pub const DEFAULT_FILENAME: &str = "project.js";

/// Turn a schema key into a human title.
///
/// Words are split at underscores, whitespace, and before every uppercase
/// letter:
/// - `programImpact` → `Program Impact`
/// - `team_size` → `Team Size`
/// - `totalGPA` → `Total G P A`
pub fn format_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c == '_' {
            spaced.push(' ');
        } else {
            if c.is_uppercase() {
                spaced.push(' ');
            }
            spaced.push(c);
        }
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First letter of each whitespace-separated word, at most [`MAX_INITIALS`].
///
/// Used as the logo placeholder when no image is supplied. `None` and empty
/// input yield an empty string.
pub fn initials(name: Option<&str>) -> String {
    name.unwrap_or_default()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(MAX_INITIALS)
        .collect()
}

/// Editor-style filename shown on project cards.
///
/// Lower-cases, drops everything but ASCII letters, digits, and whitespace,
/// turns each whitespace run into one `_` (edges included, so `" My Project"`
/// keeps its leading `_`), truncates to [`MAX_SLUG_LEN`], and appends
/// [`SLUG_EXTENSION`]. Falls back to [`DEFAULT_FILENAME`] when nothing but
/// separators remains.
pub fn filename_slug(name: Option<&str>) -> String {
    let mut slug = String::new();
    let mut in_space = false;
    for c in name.unwrap_or_default().to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('_');
            }
            in_space = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_space = false;
        }
    }
    let slug: String = slug.chars().take(MAX_SLUG_LEN).collect();

    if !slug.chars().any(|c| c.is_ascii_alphanumeric()) {
        DEFAULT_FILENAME.to_string()
    } else {
        format!("{slug}.{SLUG_EXTENSION}")
    }
}

/// Outcome of repository link resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoLink {
    Url(String),
    /// Nothing resolved; the card shows a disabled clone button.
    Missing,
}

impl RepoLink {
    pub fn url(&self) -> Option<&str> {
        match self {
            RepoLink::Url(url) => Some(url),
            RepoLink::Missing => None,
        }
    }
}

/// The project fields that take part in link resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepoKeys<'a> {
    pub repo: Option<&'a str>,
    pub id: Option<&'a str>,
    pub slug: Option<&'a str>,
    pub name: Option<&'a str>,
    pub link: Option<&'a str>,
}

/// Resolve the primary link of a project card.
///
/// Precedence: explicit `repo`, then `repo_map` looked up by `id`, `slug`,
/// and `name` (first hit wins), then the project `link`, then the owner's
/// GitHub profile, then [`RepoLink::Missing`]. Empty strings count as absent.
pub fn resolve_repo_link(
    keys: RepoKeys<'_>,
    repo_map: &BTreeMap<String, String>,
    github: Option<&str>,
) -> RepoLink {
    let present = |s: Option<&str>| s.filter(|v| !v.trim().is_empty()).map(str::to_string);

    if let Some(repo) = present(keys.repo) {
        return RepoLink::Url(repo);
    }
    let mapped = [keys.id, keys.slug, keys.name]
        .into_iter()
        .flatten()
        .filter(|k| !k.is_empty())
        .find_map(|k| present(repo_map.get(k).map(String::as_str)));
    if let Some(url) = mapped {
        return RepoLink::Url(url);
    }

    present(keys.link)
        .or_else(|| present(github))
        .map(RepoLink::Url)
        .unwrap_or(RepoLink::Missing)
}

/// Short degree label for narrow layouts.
pub fn abbreviate_degree(degree: &str) -> String {
    degree
        .replace("Bachelor of Science in", "B.S.")
        .replace("Bachelor of Science", "B.S.")
}

/// Display order key from a raw `id` string.
///
/// Reads an optional sign and the leading digits, ignoring whatever follows
/// (`"12b"` → 12). Anything without leading digits sorts as `0`. Values past
/// the `i64` range saturate, matching numeric ids.
pub fn parse_order_key(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return 0;
    }
    match digits.parse::<i64>() {
        Ok(n) => sign * n,
        Err(_) if sign < 0 => i64::MIN,
        Err(_) => i64::MAX,
    }
}
