//! Plain-text rendering of catalog entries for the terminal.

use crate::domain::{PatternEntry, RoleDefinition};
use crate::infra::diagram::RenderState;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const ROLE_HEADERS: [&str; 3] = ["Pattern Role", "Mapped Class/Interface", "Description"];

/// One line of `list` output.
pub fn format_catalog_line(entry: &PatternEntry) -> String {
    format!("{:<24} {:<11} {}", entry.id, entry.category, entry.title)
}

/// Category badge, title, and description.
pub fn format_entry(entry: &PatternEntry) -> String {
    format!(
        "[{} Pattern]\n{}\n\n{}\n",
        entry.category, entry.title, entry.description
    )
}

/// Role table with display-width aligned columns, rows in catalog order.
pub fn format_role_table(roles: &[RoleDefinition]) -> String {
    let rows: Vec<[&str; 3]> = roles
        .iter()
        .map(|role| [role.name, role.mapped_entity, role.description])
        .collect();

    let mut widths = ROLE_HEADERS.map(|header| header.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &ROLE_HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-").trim_end());
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    let mut line = String::new();
    for (idx, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if idx > 0 {
            line.push_str(" | ");
        }
        line.push_str(cell);
        // The last column is not padded.
        if idx + 1 < cells.len() {
            line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
        }
    }
    let _ = writeln!(out, "{}", line.trim_end());
}

pub fn format_state(state: &RenderState) -> String {
    match state {
        RenderState::Idle => "No diagram requested.".to_string(),
        RenderState::Pending => "Rendering diagram...".to_string(),
        RenderState::Rendered(artifact) => {
            format!("Diagram rendered ({} bytes of SVG).", artifact.svg().len())
        }
        RenderState::Failed(reason) => reason.clone(),
    }
}
