use std::path::Path;

use tracing::warn;

use crate::types::SkillInfo;

/// Descriptions longer than this are truncated for the report.
const MAX_DESCRIPTION_CHARS: usize = 100;
/// Characters kept before the `...` marker when truncating.
const TRUNCATED_CHARS: usize = 97;

/// Read a `SKILL.md` file and extract its frontmatter metadata.
///
/// Any read failure (missing file, permissions, invalid UTF-8) yields
/// `None`; the caller treats the candidate as absent.
pub fn extract_skill_info(descriptor: &Path) -> Option<SkillInfo> {
    let content = match std::fs::read_to_string(descriptor) {
        Ok(c) => c,
        Err(e) => {
            warn!(?descriptor, %e, "failed to read SKILL.md");
            return None;
        },
    };
    parse_descriptor(&content)
}

/// Extract `name` and `description` from a descriptor's frontmatter block.
///
/// Two-state line scanner: a line whose trimmed content is exactly `---`
/// opens the block, the next one ends the scan, and later delimiters are
/// inert. Inside the block a line starting with `name:` or `description:`
/// (no leading whitespace) assigns the field; repeated fields keep the last
/// occurrence. Without a non-empty `name` there is no skill.
pub fn parse_descriptor(content: &str) -> Option<SkillInfo> {
    let mut name = None;
    let mut description = None;
    let mut in_frontmatter = false;

    for line in content.lines() {
        if line.trim() == "---" {
            if in_frontmatter {
                break;
            }
            in_frontmatter = true;
            continue;
        }
        if !in_frontmatter {
            continue;
        }
        if let Some(rest) = line.strip_prefix("name:") {
            name = Some(unquote(rest.trim()).to_string());
        } else if let Some(rest) = line.strip_prefix("description:") {
            description = Some(truncate_description(unquote(rest.trim())));
        }
    }

    let name = name.filter(|n| !n.is_empty())?;
    Some(SkillInfo {
        name,
        description: description.unwrap_or_default(),
    })
}

/// Strip one layer of matching enclosing single or double quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Cap a description at [`MAX_DESCRIPTION_CHARS`], ending truncated values
/// with a 3-character ellipsis marker.
fn truncate_description(value: &str) -> String {
    if value.chars().count() <= MAX_DESCRIPTION_CHARS {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(TRUNCATED_CHARS).collect();
    truncated.push_str("...");
    truncated
}
