//! Skill discovery and reporting.
//!
//! Skills are directories containing a `SKILL.md` file whose leading
//! `---`-delimited frontmatter carries `name`/`description` metadata. This
//! crate scans skill roots, extracts that metadata, and renders the
//! activation-protocol block handed to the downstream agent.

pub mod discover;
pub mod parse;
pub mod prompt;
pub mod types;
