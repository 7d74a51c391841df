//! Contrast command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use wcag_lint_contrast::{
    check_contrast, parse_color, suggest_better_colors, ContrastCheck, WcagLevel,
};

/// JSON shape of a contrast judgment.
#[derive(Debug, Serialize)]
struct ContrastReport<'a> {
    foreground: &'a str,
    background: &'a str,
    check: ContrastCheck,
    suggestions: Vec<String>,
}

/// Runs the contrast command.
pub fn run(
    foreground: &str,
    background: &str,
    font_size: &str,
    font_weight: &str,
    level: WcagLevel,
    json: bool,
) -> Result<()> {
    let report = evaluate(foreground, background, font_size, font_weight, level);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize result")?;
        println!("{out}");
        return Ok(());
    }

    println!("{} on {}", report.foreground, report.background);
    println!("  {}", report.check.message());
    if let ContrastCheck::Measured(result) = &report.check {
        println!("  {} text, threshold {}:1", result.size_class, result.threshold);
    }
    for suggestion in &report.suggestions {
        println!("  = help: {suggestion}");
    }
    Ok(())
}

fn evaluate<'a>(
    foreground: &'a str,
    background: &'a str,
    font_size: &str,
    font_weight: &str,
    level: WcagLevel,
) -> ContrastReport<'a> {
    let fg = parse_color(foreground);
    let bg = parse_color(background);
    if fg.is_none() {
        tracing::warn!("Unrecognized color: {foreground}");
    }
    if bg.is_none() {
        tracing::warn!("Unrecognized color: {background}");
    }

    let check = check_contrast(fg, bg, font_size, font_weight, level);
    let suggestions = if check.valid() == Some(false) {
        suggest_better_colors(foreground, background)
    } else {
        Vec::new()
    };

    ContrastReport {
        foreground,
        background,
        check,
        suggestions,
    }
}
