//! Rendering of the activation-protocol block sent to the agent.

use crate::types::{SkillInfo, SkillReport};

/// Heading label for skills found under the user-global root.
pub const USER_GLOBAL_LABEL: &str = "user global";

/// Render one `## Available Skills (<label>)` section. Empty skill lists
/// render as an empty string.
pub fn format_skill_section(label: &str, skills: &[SkillInfo]) -> String {
    if skills.is_empty() {
        return String::new();
    }

    let bullets: Vec<String> = skills
        .iter()
        .map(|skill| {
            if skill.description.is_empty() {
                format!("- **{}**", skill.name)
            } else {
                format!("- **{}**: {}", skill.name, skill.description)
            }
        })
        .collect();

    format!("## Available Skills ({label})\n{}", bullets.join("\n"))
}

/// Render the full `<SKILL-ACTIVATION-PROTOCOL>` block for a non-empty
/// report: user-global section first, then one section per plugin in name
/// order, framed by the fixed 3-step instruction envelope.
pub fn render_activation_protocol(report: &SkillReport) -> String {
    let mut sections = Vec::new();
    if !report.user.is_empty() {
        sections.push(format_skill_section(USER_GLOBAL_LABEL, &report.user));
    }
    for (plugin_name, skills) in &report.plugins {
        sections.push(format_skill_section(plugin_name, skills));
    }
    let sections = sections.join("\n\n");

    format!(
        r#"<SKILL-ACTIVATION-PROTOCOL>

{sections}

## MANDATORY 3-Step Evaluation

**Step 1 - EVALUATE**: List each skill → YES/NO (brief reason)
**Step 2 - ACTIVATE**: IF any YES → Skill("[name]") for each. IF all NO → "No skills needed"
**Step 3 - IMPLEMENT**: Only after Step 2 complete.

⚠️ CRITICAL: Evaluation without activation is WORTHLESS.

</SKILL-ACTIVATION-PROTOCOL>"#
    )
}
