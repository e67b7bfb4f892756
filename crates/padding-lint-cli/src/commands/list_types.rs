//! List statement types command implementation.

use padding_lint_rules::{PaddingPolicy, Preset, StatementShape};
use std::fmt::Write;

/// Renders the statement types, policies and presets.
pub fn render() -> String {
    let mut out = String::from("Statement types:\n\n");
    let _ = writeln!(out, "{:<22} Variants", "Type");
    let _ = writeln!(out, "{}", "-".repeat(60));

    for shape in StatementShape::all() {
        let name = shape.name();
        if shape.has_line_variants() {
            let _ = writeln!(out, "{name:<22} singleline-{name}, multiline-{name}");
        } else {
            let _ = writeln!(out, "{name}");
        }
    }

    let policies: Vec<&str> = [PaddingPolicy::Any, PaddingPolicy::Never, PaddingPolicy::Always]
        .into_iter()
        .map(PaddingPolicy::as_str)
        .collect();
    let _ = writeln!(out, "\nBlank line policies: {}", policies.join(", "));

    let _ = writeln!(out, "\nPresets:");
    for preset in Preset::ALL {
        let _ = writeln!(
            out,
            "  {:<12} - {} pattern(s)",
            preset.name(),
            preset.patterns().len()
        );
    }

    out.push_str("\nSelect a preset in padding-lint.toml, e.g.:\n  preset = \"recommended\"\n");
    out
}
