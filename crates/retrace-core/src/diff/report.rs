//! Human-readable change report renderer.

use retrace_core_types::{ChangeAction, SemanticChange};

/// Render a human-readable Markdown/text report of a semantic change list.
///
/// Changes are grouped by action with fixed precedence: added, then
/// removed, then modified. Within a group the engine's first-insertion
/// order is preserved. The report is informational only and does not affect
/// the structured change list.
pub fn render_change_report(changes: &[SemanticChange]) -> String {
    let mut out = String::new();

    out.push_str("## Change Report\n\n");

    if changes.is_empty() {
        out.push_str("_No differences found._\n");
        return out;
    }

    let added = count(changes, ChangeAction::Added);
    let removed = count(changes, ChangeAction::Removed);
    let modified = count(changes, ChangeAction::Modified);
    out.push_str(&format!(
        "**Added**: {added}  \n**Removed**: {removed}  \n**Modified**: {modified}\n\n"
    ));

    render_section(&mut out, "Added", changes, ChangeAction::Added);
    render_section(&mut out, "Removed", changes, ChangeAction::Removed);
    render_section(&mut out, "Modified", changes, ChangeAction::Modified);

    out
}

fn count(changes: &[SemanticChange], action: ChangeAction) -> usize {
    changes.iter().filter(|c| c.action == action).count()
}

fn render_section(out: &mut String, title: &str, changes: &[SemanticChange], action: ChangeAction) {
    let group: Vec<&SemanticChange> = changes.iter().filter(|c| c.action == action).collect();
    if group.is_empty() {
        return;
    }

    out.push_str(&format!("### {}\n\n", title));
    for change in group {
        if change.entity.parent_name.is_empty() {
            out.push_str(&format!("- **{}**\n", change.entity.name));
        } else {
            out.push_str(&format!(
                "- **{}** ({})\n",
                change.entity.name, change.entity.parent_name
            ));
        }
        for detail in &change.details {
            out.push_str(&format!("  - {}\n", detail));
        }
    }
    out.push('\n');
}
