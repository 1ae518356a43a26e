use std::collections::BTreeMap;

/// Metadata extracted from a skill's `SKILL.md` frontmatter.
///
/// A skill is only valid once a non-empty `name` was found; `description`
/// may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillInfo {
    pub name: String,
    pub description: String,
}

/// Skills grouped by source, in emission order.
///
/// The user-global group renders first when non-empty; plugin groups follow
/// in lexicographic order of plugin name (the map's iteration order). A
/// plugin name inserted twice keeps the later skill list.
#[derive(Debug, Clone, Default)]
pub struct SkillReport {
    pub user: Vec<SkillInfo>,
    pub plugins: BTreeMap<String, Vec<SkillInfo>>,
}

impl SkillReport {
    /// Record a plugin's skills. Plugins that contributed nothing are
    /// omitted from the report entirely.
    pub fn add_plugin(&mut self, name: impl Into<String>, skills: Vec<SkillInfo>) {
        if !skills.is_empty() {
            self.plugins.insert(name.into(), skills);
        }
    }

    /// Total skill count across all sources.
    pub fn total(&self) -> usize {
        self.user.len() + self.plugins.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
