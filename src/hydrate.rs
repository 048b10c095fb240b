//! Page hydration and site build.
//!
//! For every `[[pages]]` entry the orchestrator loads the content document
//! once, runs the section renderers in the variant's fixed order, and writes
//! the resulting page. A document that cannot be loaded (missing file,
//! invalid JSON, a top level that is not an object) does not fail the build:
//! the page is written with its static shell content and the failure is
//! reported as a diagnostic.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html        # one file per [[pages]] entry
//! ├── glass.html
//! └── assets/           # copied verbatim from the site source
//!     └── resume.pdf
//! ```

use crate::config::{self, ConfigError, PageConfig, PageVariant, SiteConfig};
use crate::render::{
    Page, RenderContext, education, experience, hero, involvements, projects, shell, skills,
};
use crate::schema::ContentDocument;
use chrono::Datelike;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("top level is not a JSON object")]
    NotAnObject,
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Read and parse a content document.
pub fn load_document(path: &Path) -> Result<ContentDocument, LoadError> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;
    if !value.is_object() {
        return Err(LoadError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

/// A renderer invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Projects,
    Involvements,
    Experience,
    Education,
    Skills,
}

/// Sections rendered for a variant, in render order.
pub fn render_order(variant: PageVariant) -> &'static [Section] {
    use Section::*;
    match variant {
        PageVariant::Portfolio => &[Hero, Projects, Experience, Education, Skills],
        PageVariant::Glass => &[Hero, Involvements, Experience, Education, Skills],
    }
}

/// How many items each section rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionCounts {
    pub projects: usize,
    pub experience: usize,
    pub education: usize,
    pub skill_groups: usize,
    pub involvements: usize,
}

/// Render every section of `variant` from `doc` into `page`.
pub fn hydrate_page(page: &mut Page, doc: &ContentDocument, config: &SiteConfig) -> SectionCounts {
    let ctx = RenderContext::new(config, page.variant());
    let mut counts = SectionCounts::default();
    for section in render_order(page.variant()) {
        match section {
            Section::Hero => hero::render(page, doc, &ctx),
            Section::Projects => {
                counts.projects =
                    projects::render(page, &doc.projects, &doc.contact, &doc.github_repos, &ctx)
            }
            Section::Involvements => {
                counts.involvements = involvements::render(page, &doc.involvements, &ctx)
            }
            Section::Experience => {
                counts.experience = experience::render(page, &doc.experience_entries(), &ctx)
            }
            Section::Education => {
                counts.education =
                    education::render(page, &doc.education, &doc.leadership, &ctx)
            }
            Section::Skills => counts.skill_groups = skills::render(page, &doc.skills, &ctx),
        }
    }
    counts
}

/// What happened to one page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Hydrated(SectionCounts),
    /// The document could not be loaded; the page keeps its static content.
    Static { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageReport {
    pub content: String,
    pub output: String,
    pub variant: PageVariant,
    pub outcome: PageOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub pages: Vec<PageReport>,
    pub assets: usize,
}

impl BuildReport {
    /// Pages that fell back to static content.
    pub fn static_pages(&self) -> impl Iterator<Item = &PageReport> {
        self.pages
            .iter()
            .filter(|p| matches!(p.outcome, PageOutcome::Static { .. }))
    }
}

/// Load and hydrate one page. Never fails; load errors become
/// [`PageOutcome::Static`].
pub fn prepare_page(source: &Path, page_config: &PageConfig, config: &SiteConfig) -> (Page, PageReport) {
    let mut page = Page::new(page_config.variant, config);
    let outcome = match load_document(&source.join(&page_config.content)) {
        Ok(doc) => PageOutcome::Hydrated(hydrate_page(&mut page, &doc, config)),
        Err(e) => PageOutcome::Static {
            reason: e.to_string(),
        },
    };
    let report = PageReport {
        content: page_config.content.clone(),
        output: page_config.output.clone(),
        variant: page_config.variant,
        outcome,
    };
    (page, report)
}

/// Load config and every page without writing anything.
pub fn check(source: &Path) -> Result<Vec<PageReport>, BuildError> {
    let config = config::load_config(source)?;
    Ok(config
        .pages
        .iter()
        .map(|page_config| prepare_page(source, page_config, &config).1)
        .collect())
}

/// Build the whole site from `source` into `output`.
pub fn build(source: &Path, output: &Path) -> Result<BuildReport, BuildError> {
    let config = config::load_config(source)?;
    fs::create_dir_all(output)?;

    let assets = copy_assets(&source.join("assets"), &output.join("assets"))?;
    let year = chrono::Local::now().year();

    let mut pages = Vec::with_capacity(config.pages.len());
    for page_config in &config.pages {
        let (page, report) = prepare_page(source, page_config, &config);
        let html = shell::render_document(&page, &config, page_config, year);
        let target = output.join(&page_config.output);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, html.into_string())?;
        pages.push(report);
    }

    Ok(BuildReport {
        output_dir: output.to_path_buf(),
        pages,
        assets,
    })
}

/// Copy a directory tree. A missing source copies nothing. Returns the
/// number of files copied.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, BuildError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::mount;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn load_rejects_non_object_top_level() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("list.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(load_document(&path), Err(LoadError::NotAnObject)));
    }

    #[test]
    fn load_reports_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ \"name\": ").unwrap();
        assert!(matches!(load_document(&path), Err(LoadError::Json(_))));
    }

    #[test]
    fn load_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = load_document(&tmp.path().join("nope.json"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }

    #[test]
    fn render_order_is_fixed_per_variant() {
        assert_eq!(
            render_order(PageVariant::Portfolio),
            [
                Section::Hero,
                Section::Projects,
                Section::Experience,
                Section::Education,
                Section::Skills
            ]
        );
        assert_eq!(render_order(PageVariant::Glass)[1], Section::Involvements);
    }

    #[test]
    fn hydrate_fixture_resume() {
        let config = SiteConfig::default();
        let doc = load_fixture_document("resume.json");
        let mut page = Page::new(PageVariant::Portfolio, &config);
        let counts = hydrate_page(&mut page, &doc, &config);
        assert_eq!(counts.projects, 3);
        assert_eq!(counts.experience, 3);
        assert_eq!(counts.education, 1);
        assert_eq!(counts.skill_groups, 4);
        assert_eq!(counts.involvements, 0);
        assert_eq!(slot(&page, mount::HERO_NAME), "Hi, I'm Ada Example.");
    }

    #[test]
    fn hydrate_twice_is_idempotent() {
        let config = SiteConfig::default();
        let doc = load_fixture_document("resume.json");
        let mut page = Page::new(PageVariant::Portfolio, &config);
        hydrate_page(&mut page, &doc, &config);
        let first = page.clone();
        hydrate_page(&mut page, &doc, &config);
        for id in mount::for_variant(PageVariant::Portfolio) {
            assert_eq!(page.slot(id), first.slot(id), "{id}");
        }
    }

    #[test]
    fn empty_document_shows_placeholders() {
        let config = SiteConfig::default();
        let doc = ContentDocument::default();
        let mut page = Page::new(PageVariant::Portfolio, &config);
        let counts = hydrate_page(&mut page, &doc, &config);
        assert_eq!(counts, SectionCounts::default());
        assert!(slot(&page, mount::PROJECTS_GRID).contains(projects::EMPTY_MESSAGE));
        assert!(slot(&page, mount::EXPERIENCE_TRACK).contains(experience::EMPTY_MESSAGE));
        assert!(slot(&page, mount::EDUCATION_CARDS).contains(education::EMPTY_MESSAGE));
        assert!(slot(&page, mount::SKILLS_GROUPS).contains(skills::EMPTY_MESSAGE));
    }

    #[test]
    fn failed_load_keeps_static_page() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("resume.json"), "not json").unwrap();
        let config = config::load_config(tmp.path()).unwrap();
        let (page, report) = prepare_page(tmp.path(), &config.pages[0], &config);

        assert!(matches!(report.outcome, PageOutcome::Static { .. }));
        let fresh = Page::new(PageVariant::Portfolio, &config);
        for id in mount::for_variant(PageVariant::Portfolio) {
            assert_eq!(page.slot(id), fresh.slot(id), "{id}");
        }
    }

    #[test]
    fn build_writes_pages_and_assets() {
        let tmp = setup_fixtures();
        let out = TempDir::new().unwrap();
        let report = build(tmp.path(), out.path()).unwrap();

        assert_eq!(report.pages.len(), 2);
        assert_eq!(report.static_pages().count(), 0);
        assert!(report.assets >= 1);
        assert!(out.path().join("assets/resume.pdf").exists());

        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains("Hi, I'm Ada Example."));
        let glass = fs::read_to_string(out.path().join("glass.html")).unwrap();
        assert!(glass.contains("--particle-color-rgb: 137, 0, 225"));
        assert!(glass.contains("Program Impact"));
    }

    #[test]
    fn build_continues_past_missing_document() {
        let tmp = setup_fixtures();
        fs::remove_file(tmp.path().join("glass_portfolio_content.json")).unwrap();
        let out = TempDir::new().unwrap();
        let report = build(tmp.path(), out.path()).unwrap();

        let failed: Vec<_> = report.static_pages().map(|p| p.output.as_str()).collect();
        assert_eq!(failed, ["glass.html"]);
        assert!(out.path().join("glass.html").exists());
    }

    #[test]
    fn build_rejects_invalid_config() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("config.toml"), "[carousel]\nmax_tagz = 3\n").unwrap();
        let out = TempDir::new().unwrap();
        assert!(matches!(
            build(tmp.path(), out.path()),
            Err(BuildError::Config(_))
        ));
    }

    #[test]
    fn check_writes_nothing() {
        let tmp = setup_fixtures();
        let reports = check(tmp.path()).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(!tmp.path().join("index.html").exists());
    }
}
