//! Shared test utilities for the folio test suite.
//!
//! Provides fixture setup and page lookups that panic with a clear message
//! on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let doc = load_fixture_document("resume.json");
//!
//! let config = SiteConfig::default();
//! let mut page = Page::new(PageVariant::Portfolio, &config);
//! hydrate_page(&mut page, &doc, &config);
//! assert!(slot(&page, mount::HERO_NAME).starts_with("Hi, I'm"));
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::hydrate::load_document;
use crate::render::Page;
use crate::schema::ContentDocument;

// =========================================================================
// Fixture setup
// =========================================================================

/// Path of the checked-in fixture site.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site")
}

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    copy_dir_recursive(&fixtures_dir(), tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Load a content document from the fixture site. Panics on failure.
pub fn load_fixture_document(name: &str) -> ContentDocument {
    let path = fixtures_dir().join(name);
    load_document(&path).unwrap_or_else(|e| panic!("fixture {}: {e}", path.display()))
}

// =========================================================================
// Page lookups
// =========================================================================

/// Children of a mount point. Panics if the page has no such mount point.
pub fn slot<'a>(page: &'a Page, id: &str) -> &'a str {
    page.slot(id).unwrap_or_else(|| {
        panic!(
            "mount '{id}' not on the {} page",
            page.variant().name()
        )
    })
}
