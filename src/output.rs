//! CLI output formatting for `build` and `check`.
//!
//! Output is **page-centric**: each configured page is one entry headed by
//! its positional index and output file, with the content document it came
//! from and the variant as context, followed by an indented line saying what
//! was rendered (or why the page kept its static content).
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Pages
//! 001 index.html ← resume.json (portfolio)
//!     3 projects, 3 experience entries, 1 education entry, 4 skill groups
//! 002 glass.html ← glass_portfolio_content.json (glass)
//!     Static: IO error: No such file or directory (os error 2)
//!
//! Assets
//!     2 files → assets/
//!
//! Built 2 pages in dist
//! ```
//!
//! ## Check
//!
//! The same `Pages` block, then `1 of 2 pages would keep static content`
//! or `All 2 pages hydrate`.
//!
//! ## Diagnostics
//!
//! Every page that kept its static content also gets one line on stderr:
//!
//! ```text
//! warning: glass_portfolio_content.json: IO error: ...; keeping static content
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout or stderr.

use crate::config::PageVariant;
use crate::hydrate::{BuildReport, PageOutcome, PageReport, Section, SectionCounts, render_order};

/// Longest load-failure reason shown inline in the page list.
const MAX_REASON: usize = 80;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

fn count(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Rendered item counts for the sections the variant has.
fn counts_line(variant: PageVariant, counts: &SectionCounts) -> String {
    render_order(variant)
        .iter()
        .filter_map(|section| match section {
            Section::Hero => None,
            Section::Projects => Some(count(counts.projects, "project", "projects")),
            Section::Involvements => {
                Some(count(counts.involvements, "involvement", "involvements"))
            }
            Section::Experience => Some(count(
                counts.experience,
                "experience entry",
                "experience entries",
            )),
            Section::Education => Some(count(
                counts.education,
                "education entry",
                "education entries",
            )),
            Section::Skills => Some(count(counts.skill_groups, "skill group", "skill groups")),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Page header line: index, output file, source document, variant.
fn page_header(index: usize, report: &PageReport) -> String {
    format!(
        "{} {} ← {} ({})",
        format_index(index),
        report.output,
        report.content,
        report.variant.name()
    )
}

// ============================================================================
// Pages block
// ============================================================================

pub fn format_pages(reports: &[PageReport]) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (i, report) in reports.iter().enumerate() {
        lines.push(page_header(i + 1, report));
        let detail = match &report.outcome {
            PageOutcome::Hydrated(counts) => counts_line(report.variant, counts),
            PageOutcome::Static { reason } => format!("Static: {}", truncate(reason, MAX_REASON)),
        };
        lines.push(format!("{}{}", indent(1), detail));
    }
    lines
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = format_pages(&report.pages);
    if report.assets > 0 {
        lines.push(String::new());
        lines.push("Assets".to_string());
        lines.push(format!(
            "{}{} → assets/",
            indent(1),
            count(report.assets, "file", "files")
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Built {} in {}",
        count(report.pages.len(), "page", "pages"),
        report.output_dir.display()
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(reports: &[PageReport]) -> Vec<String> {
    let mut lines = format_pages(reports);
    let fallbacks = reports
        .iter()
        .filter(|r| matches!(r.outcome, PageOutcome::Static { .. }))
        .count();
    lines.push(String::new());
    if fallbacks == 0 {
        lines.push(format!("All {} hydrate", count(reports.len(), "page", "pages")));
    } else {
        lines.push(format!(
            "{} of {} would keep static content",
            fallbacks,
            count(reports.len(), "page", "pages")
        ));
    }
    lines
}

pub fn print_check_output(reports: &[PageReport]) {
    for line in format_check_output(reports) {
        println!("{}", line);
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// One line per page whose document failed to load.
pub fn format_diagnostics(reports: &[PageReport]) -> Vec<String> {
    reports
        .iter()
        .filter_map(|report| match &report.outcome {
            PageOutcome::Static { reason } => Some(format!(
                "warning: {}: {}; keeping static content",
                report.content, reason
            )),
            PageOutcome::Hydrated(_) => None,
        })
        .collect()
}

pub fn print_diagnostics(reports: &[PageReport]) {
    for line in format_diagnostics(reports) {
        eprintln!("{}", line);
    }
}
