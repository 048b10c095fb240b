//! # Folio
//!
//! A static site generator for single-page personal portfolios. Each page is
//! a fixed HTML shell with named mount points; a JSON content document
//! (profile, projects, experience, education, skills, involvements) is
//! rendered into those mount points at build time.
//!
//! # Architecture: Shell + Hydration
//!
//! ```text
//! site/config.toml   ─┐
//! site/resume.json   ─┼─→  hydrate  ─→  dist/index.html
//! site/assets/       ─┘                 dist/assets/
//! ```
//!
//! A page starts with static fallback content in every mount point. When its
//! content document loads, each section renderer replaces the children of
//! its mount points. When the document is missing or malformed the page is
//! still written with the fallbacks, and the build reports a diagnostic.
//!
//! Two page variants share the same renderers:
//!
//! - **portfolio**: hero, projects carousel, experience ring carousel,
//!   education, skills, resume download.
//! - **glass**: hero with parallax visual, scroll progress bar, and tabbed
//!   involvements, experience timeline, education, skills.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`schema`] | Content document types with lenient deserialization |
//! | [`format`] | Field formatters: labels, initials, filename slugs, repo links, order keys, degree abbreviation |
//! | [`render`] | Section renderers and page shells, built with Maud |
//! | [`carousel`] | Ring and mobile carousel controllers |
//! | [`interaction`] | Mobile navigation sheet, glass section tabs, scroll progress, parallax |
//! | [`hydrate`] | Document loading, render order, and the site build |
//! | [`config`] | `config.toml` loading, validation, and theme CSS generation |
//! | [`output`] | CLI output formatting for build and check |
//!
//! # Design Decisions
//!
//! ## Renderers Replace, Never Append
//!
//! Every renderer overwrites the full children of its mount points, so
//! hydrating a page twice from the same document gives identical markup.
//!
//! ## Controllers as Plain State
//!
//! The carousel, nav-sheet, and tab controllers are pure state machines. The Rust
//! side uses them to render the initial positions and classes; the inline
//! browser runtime (`static/site.js`) runs the same transitions on input.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). All interpolation
//! is auto-escaped, so content text can never inject markup. Only the
//! markdown hero summary, the icon SVGs, and the inline CSS/JS go through
//! `PreEscaped`.

pub mod carousel;
pub mod config;
pub mod format;
pub mod hydrate;
pub mod interaction;
pub mod output;
pub mod render;
pub mod schema;

#[cfg(test)]
pub(crate) mod test_helpers;
