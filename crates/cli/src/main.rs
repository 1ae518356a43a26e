//! skill-forced-eval: scans the user-global skills root and every installed
//! plugin's bundled skills, then prints the activation protocol the agent
//! must walk through before implementing anything.
//!
//! No arguments. Exit 0 with the protocol on stdout when at least one skill
//! was found, exit 1 with a single error line on stderr otherwise.

use std::{path::Path, process::ExitCode};

use {
    forced_eval_common::paths,
    forced_eval_plugins::registry,
    forced_eval_skills::{discover, prompt, types::SkillReport},
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

fn main() -> ExitCode {
    init_telemetry();

    let report = collect_skills(&paths::claude_dir());
    if report.is_empty() {
        eprintln!("[ERROR] skill-forced-eval: No skills found");
        return ExitCode::FAILURE;
    }

    println!("{}", prompt::render_activation_protocol(&report));
    ExitCode::SUCCESS
}

/// Diagnostics for swallowed failures are opt-in via `RUST_LOG`; by default
/// the filter is off so stderr carries nothing but the no-skills error line.
fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Gather skills from the user-global root and from each installed plugin's
/// `skills/` directory. Sources that contribute nothing are left out.
fn collect_skills(claude_dir: &Path) -> SkillReport {
    let mut report = SkillReport {
        user: discover::scan_skills_dir(&paths::user_skills_dir(claude_dir)),
        ..Default::default()
    };

    let registry_path = paths::installed_plugins_path(claude_dir);
    for plugin in registry::read_installed_plugins(&registry_path) {
        let skills = discover::scan_skills_dir(&plugin.skills_dir());
        report.add_plugin(plugin.name, skills);
    }

    report
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn write_skill(skills_root: &Path, dir: &str, name: &str, description: &str) {
        let skill_dir = skills_root.join(dir);
        std::fs::create_dir_all(&skill_dir).unwrap();
        std::fs::write(
            skill_dir.join("SKILL.md"),
            format!("---\nname: {name}\ndescription: {description}\n---\nInstructions.\n"),
        )
        .unwrap();
    }

    #[test]
    fn test_collect_from_empty_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let report = collect_skills(tmp.path());
        assert!(report.is_empty());
    }

    #[test]
    fn test_collect_user_and_plugin_skills() {
        let tmp = tempfile::tempdir().unwrap();
        let claude_dir = tmp.path().join(".claude");

        write_skill(&claude_dir.join("skills"), "local-skill", "local-skill", "from user");

        let install = tmp.path().join("plugins/pr-review");
        write_skill(&install.join("skills"), "reviewer", "reviewer", "from plugin");
        std::fs::create_dir_all(claude_dir.join("plugins")).unwrap();
        std::fs::write(
            claude_dir.join("plugins/installed_plugins.json"),
            format!(
                r#"{{"plugins": {{"pr-review@marketplace": [{{"installPath": {}}}]}}}}"#,
                serde_json::to_string(&install).unwrap()
            ),
        )
        .unwrap();

        let report = collect_skills(&claude_dir);
        assert_eq!(report.total(), 2);
        assert_eq!(report.user[0].name, "local-skill");
        assert_eq!(report.plugins["pr-review"][0].name, "reviewer");
    }

    #[test]
    fn test_plugin_without_skills_dir_contributes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let claude_dir = tmp.path().join(".claude");

        write_skill(&claude_dir.join("skills"), "only", "only", "");

        std::fs::create_dir_all(claude_dir.join("plugins")).unwrap();
        std::fs::write(
            claude_dir.join("plugins/installed_plugins.json"),
            r#"{"plugins": {"ghost@m": [{"installPath": "/nonexistent/install"}]}}"#,
        )
        .unwrap();

        let report = collect_skills(&claude_dir);
        assert_eq!(report.total(), 1);
        assert!(report.plugins.is_empty());
    }

    #[test]
    fn test_missing_registry_still_reports_user_skills() {
        let tmp = tempfile::tempdir().unwrap();
        let claude_dir = tmp.path().join(".claude");
        write_skill(&claude_dir.join("skills"), "solo", "solo", "works alone");

        let report = collect_skills(&claude_dir);
        assert_eq!(report.total(), 1);
    }

    #[test]
    fn test_rendered_output_for_single_skill() {
        let tmp = tempfile::tempdir().unwrap();
        let claude_dir = tmp.path().join(".claude");
        write_skill(&claude_dir.join("skills"), "foo", "Foo", "Bar");

        let report = collect_skills(&claude_dir);
        let out = prompt::render_activation_protocol(&report);
        let expected = r#"<SKILL-ACTIVATION-PROTOCOL>

## Available Skills (user global)
- **Foo**: Bar

## MANDATORY 3-Step Evaluation

**Step 1 - EVALUATE**: List each skill → YES/NO (brief reason)
**Step 2 - ACTIVATE**: IF any YES → Skill("[name]") for each. IF all NO → "No skills needed"
**Step 3 - IMPLEMENT**: Only after Step 2 complete.

⚠️ CRITICAL: Evaluation without activation is WORTHLESS.

</SKILL-ACTIVATION-PROTOCOL>"#;
        assert_eq!(out, expected);
    }
}
