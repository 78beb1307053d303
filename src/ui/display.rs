//! Display functions for package metadata
//!
//! Formatting helpers return strings so they can be tested; the `print_*`
//! functions write them through the logger.

use console::Style;

use crate::error::Result;
use crate::package::{Manifest, PackageKind, PackageSummary};

use super::logger;

const SEPARATOR_WIDTH: usize = 50;
const WRAP_WIDTH: usize = 60;

pub fn format_header(title: &str) -> String {
    format!("\n{}", Style::new().bold().blue().apply_to(format!("📦 {title}")))
}

pub fn format_field(label: &str, value: &str) -> String {
    format!("{} {}", Style::new().bold().apply_to(format!("{label}:")), value)
}

pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| Style::new().cyan().apply_to(format!("#{tag}")).to_string())
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn format_separator() -> String {
    Style::new()
        .dim()
        .apply_to("─".repeat(SEPARATOR_WIDTH))
        .to_string()
}

/// Greedy word wrap, each line prefixed with `indent` spaces
pub fn wrap_text(text: &str, indent: usize, width: usize) -> Vec<String> {
    let prefix = " ".repeat(indent);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(format!("{prefix}{line}"));
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(format!("{prefix}{line}"));
    }
    lines
}

fn or_unknown(value: Option<&String>) -> &str {
    value.map_or("unknown", String::as_str)
}

/// `info` output: header, fields, tags and components
pub fn print_metadata(kind: &PackageKind, manifest: &Manifest, verbose: bool) -> Result<()> {
    let command = command_for(kind);

    logger::info(format_header(&format!("{} Package", kind.label())));
    logger::info(format_field("Name", or_unknown(manifest.name.as_ref())));
    logger::info(format_field("Version", or_unknown(manifest.version.as_ref())));
    logger::info(format_field("Author", or_unknown(manifest.author.as_ref())));
    logger::info(format_field(
        "Description",
        or_unknown(manifest.description.as_ref()),
    ));

    if let Some(tags) = manifest.tags.as_ref().filter(|t| !t.is_empty()) {
        logger::info(format_header("Tags"));
        logger::info(format_tags(tags));
    }

    let components = manifest.components(kind)?;
    if !components.is_empty() {
        logger::info(format_header(&format!("Available {}s", kind.label())));
        for (index, component) in components.iter().enumerate() {
            if index > 0 {
                logger::info(format_separator());
            }
            logger::info(
                Style::new()
                    .bold()
                    .cyan()
                    .apply_to(format!("@{}", component.name))
                    .to_string(),
            );
            if let Some(description) = &component.description {
                for line in wrap_text(description, 2, WRAP_WIDTH) {
                    logger::info(Style::new().dim().apply_to(line).to_string());
                }
            }
            if let Some(patterns) = component.patterns.as_ref().filter(|p| !p.is_empty()) {
                logger::info(Style::new().dim().apply_to("  Patterns:").to_string());
                for pattern in patterns {
                    logger::info(Style::new().dim().apply_to(format!("    - {pattern}")).to_string());
                }
            }
        }
    }

    if verbose {
        if let Some(files) = manifest.files.as_ref().filter(|f| !f.is_empty()) {
            logger::info(format_header("Files"));
            for file in files {
                logger::info(format!("  {file}"));
            }
        }
    }

    logger::info(format!("\n{}", format_separator()));
    if let Some(name) = &manifest.name {
        logger::info(format_field(
            "Install",
            &format!("cco {command} install -n {name}"),
        ));
    }
    Ok(())
}

/// One `available` entry
pub fn print_summary(kind: &PackageKind, summary: &PackageSummary, installed: bool) {
    let status = if installed {
        Style::new().green().apply_to("(installed)").to_string()
    } else {
        String::new()
    };
    logger::info(format!(
        "- {} {}",
        Style::new().cyan().apply_to(&summary.bundle),
        status
    ));
    if summary.name != summary.bundle {
        logger::info(format!("   name: {}", summary.name));
    }
    logger::info(format!("   version: {}", or_unknown(summary.version.as_ref())));
    logger::info(format!("   author: {}", or_unknown(summary.author.as_ref())));
    logger::info(format!(
        "   description: {}",
        or_unknown(summary.description.as_ref())
    ));
    if !summary.tags.is_empty() {
        logger::info(format!("   tags: {}", summary.tags.join(", ")));
    }
    if summary.component_count > 0 {
        logger::info(format!("   {}s: {}", kind.kind, summary.component_count));
    }
    logger::info("");
}

/// CLI subcommand managing `kind`
pub fn command_for(kind: &PackageKind) -> &'static str {
    match kind.kind {
        "workflow" => "packs",
        "prompt" => "prompts",
        _ => "rules",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_respects_width() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let lines = wrap_text(text, 2, 20);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.starts_with("  "));
            assert!(line.len() <= 22, "line too long: {line:?}");
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        assert_eq!(rejoined.join(" "), text);
    }

    #[test]
    fn test_wrap_text_keeps_long_words() {
        let lines = wrap_text("supercalifragilistic", 0, 5);
        assert_eq!(lines, vec!["supercalifragilistic".to_string()]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 2, 60).is_empty());
    }

    #[test]
    fn test_format_field_contains_label_and_value() {
        let field = format_field("Version", "1.0.0");
        assert!(field.contains("Version:"));
        assert!(field.ends_with("1.0.0"));
    }

    #[test]
    fn test_command_for() {
        assert_eq!(command_for(&PackageKind::WORKFLOW), "packs");
        assert_eq!(command_for(&PackageKind::PROMPT), "prompts");
        assert_eq!(command_for(&PackageKind::RULE), "rules");
    }
}
