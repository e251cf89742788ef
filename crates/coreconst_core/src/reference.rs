//! Render a populated registry as a Markdown reference page.
//!
//! The page has one section per enum group (in first-appearance order) followed by a section for standalone
//! constants. Rows flagged `hide_value_in_docs` render with an empty value cell.
//!
//! ## Notes
//! - Registries built without doc metadata have no groups, so every row lands in "Standalone constants".
//! - Rendering is deterministic: the same registry always renders byte-identical output.
//!
//! ## See also
//! - `cargo run -p coreconst_core --bin generate_constant_reference` to regenerate `docs/reference/constants.md`.

use crate::groups::{self, EnumGroup};
use crate::record::ConstantRecord;
use crate::registry::ConstantRegistry;

const STANDALONE_HEADING: &str = "Standalone constants";

/// Render the full reference page.
pub fn render_markdown(registry: &ConstantRegistry) -> String {
    let mut out = String::new();
    out.push_str("# Global constants reference\n\n");
    out.push_str("!!! warning \"Generated file\"\n");
    out.push_str("    Do not edit this page by hand.\n");
    out.push_str("    If it looks wrong/outdated, regenerate it from source and commit the result.\n");
    out.push('\n');
    out.push_str("    Regenerate with: `cargo run -p coreconst_core --bin generate_constant_reference`\n\n");

    let groups = registry.groups();
    let has_standalone = registry.iter().any(|r| r.enum_group.is_none());

    out.push_str("## Contents\n\n");
    for group in &groups {
        out.push_str(&format!("- [{}](#{})\n", group, anchor(group.as_str())));
    }
    if has_standalone {
        out.push_str(&format!("- [{}](#{})\n", STANDALONE_HEADING, anchor(STANDALONE_HEADING)));
    }
    out.push('\n');

    for group in groups {
        render_group_section(&mut out, registry, group);
    }
    if has_standalone {
        start_section(&mut out, &format!("## {STANDALONE_HEADING}"));
        render_table(&mut out, registry.iter().filter(|r| r.enum_group.is_none()));
    }

    while out.ends_with('\n') {
        out.pop();
    }
    out.push('\n');
    out
}

/// Render one enum group: heading, description, and a `Name | Value` table.
pub fn render_group_section(out: &mut String, registry: &ConstantRegistry, group: EnumGroup) {
    start_section(out, &format!("## {group}"));
    out.push_str(groups::description(group));
    out.push_str("\n\n");
    render_table(out, registry.members_of(group).map(|(_, r)| r));
}

fn render_table<'a>(out: &mut String, records: impl Iterator<Item = &'a ConstantRecord>) {
    out.push_str("| Name | Value |\n");
    out.push_str("|---|---|\n");
    for r in records {
        if r.hide_value_in_docs {
            out.push_str(&format!("| `{}` | |\n", r.name));
        } else {
            out.push_str(&format!("| `{}` | {} |\n", r.name, r.value));
        }
    }
    out.push('\n');
}

/// GitHub-style heading anchor: lowercase, spaces become `-`, other punctuation is dropped.
fn anchor(heading: &str) -> String {
    heading
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let mut count = 0usize;
    for ch in out.chars().rev() {
        if ch == '\n' {
            count += 1;
        } else {
            break;
        }
    }
    while count > 2 {
        out.pop();
        count -= 1;
    }
}

fn ensure_single_blank_line(out: &mut String) {
    trim_trailing_newlines_to_at_most_two(out);
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegistryConfig;

    fn populated(config: RegistryConfig) -> ConstantRegistry {
        let mut registry = ConstantRegistry::with_config(config);
        registry.initialize().unwrap();
        registry
    }

    #[test]
    fn test_anchor() {
        assert_eq!(anchor("Variant.Type"), "varianttype");
        assert_eq!(anchor("Standalone constants"), "standalone-constants");
    }

    #[test]
    fn test_midi_section() {
        let registry = populated(RegistryConfig::default());
        let mut out = String::new();
        render_group_section(&mut out, &registry, EnumGroup::MidiMessageList);
        insta::assert_snapshot!(out, @r"
        ## MidiMessageList

        MIDI channel message types.

        | Name | Value |
        |---|---|
        | `MIDI_MESSAGE_NOTE_OFF` | 8 |
        | `MIDI_MESSAGE_NOTE_ON` | 9 |
        | `MIDI_MESSAGE_AFTERTOUCH` | 10 |
        | `MIDI_MESSAGE_CONTROL_CHANGE` | 11 |
        | `MIDI_MESSAGE_PROGRAM_CHANGE` | 12 |
        | `MIDI_MESSAGE_CHANNEL_PRESSURE` | 13 |
        | `MIDI_MESSAGE_PITCH_BEND` | 14 |
        ");
    }

    #[test]
    fn test_hidden_value_renders_empty_cell() {
        let registry = populated(RegistryConfig::default());
        let page = render_markdown(&registry);
        assert!(page.contains("| `KEY_MASK_CMD` | |\n"));
        assert!(page.contains("| `KEY_MASK_CTRL` | 268435456 |\n"));
    }

    #[test]
    fn test_page_lists_every_group_then_standalone() {
        let registry = populated(RegistryConfig::default());
        let page = render_markdown(&registry);
        for g in groups::GROUPS {
            assert!(page.contains(&format!("\n## {}\n", g.canonical)), "missing section {}", g.canonical);
        }
        let last_group = page.find("## Variant.Operator").unwrap();
        let standalone = page.find("## Standalone constants").unwrap();
        assert!(standalone > last_group);
        assert!(page.contains("| `SPKEY` | 16777216 |"));
        assert!(page.ends_with("|\n"));
    }

    #[test]
    fn test_minimal_registry_renders_standalone_only() {
        let registry = populated(RegistryConfig::minimal());
        let page = render_markdown(&registry);
        assert!(!page.contains("## Margin"));
        assert!(page.contains("## Standalone constants"));
        assert!(page.contains("| `KEY_MASK_CMD` | "));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let registry = populated(RegistryConfig::default());
        assert_eq!(render_markdown(&registry), render_markdown(&registry));
    }
}
