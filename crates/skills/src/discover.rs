use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{parse, types::SkillInfo};

/// Scan one level deep for skill directories under `skills_dir`.
///
/// A candidate is any immediate subdirectory with a `SKILL.md` directly
/// inside it; candidates are visited in lexicographic order of directory
/// name. Missing or unreadable roots contribute nothing, and candidates
/// whose descriptor yields no name are dropped without affecting siblings.
pub fn scan_skills_dir(skills_dir: &Path) -> Vec<SkillInfo> {
    let mut skills = Vec::new();

    if !skills_dir.is_dir() {
        return skills;
    }
    let entries = match std::fs::read_dir(skills_dir) {
        Ok(e) => e,
        Err(e) => {
            warn!(?skills_dir, %e, "failed to list skills directory");
            return skills;
        },
    };

    let mut candidates: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
    candidates.sort();

    for skill_dir in candidates {
        if !skill_dir.is_dir() {
            continue;
        }
        let skill_md = skill_dir.join("SKILL.md");
        if !skill_md.is_file() {
            continue;
        }
        match parse::extract_skill_info(&skill_md) {
            Some(info) => skills.push(info),
            None => {
                debug!(?skill_dir, "skipping skill without extractable name");
            },
        }
    }

    skills
}
