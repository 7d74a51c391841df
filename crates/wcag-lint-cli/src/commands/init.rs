//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "wcag-lint.toml";

const DEFAULT_CONFIG: &str = r#"# wcag-lint configuration

# Set to false to turn the scanner into a no-op
enabled = true

# "warning": report only (exit 0)
# "error":   exit 1 when critical or high severity violations are found
severity = "warning"

# Rule ids to run; an empty list runs every rule (see `wcag-lint list-rules`)
rules = []
# rules = [
#     "semantic-html",
#     "aria-attributes",
#     "keyboard-navigation",
#     "form-labels",
#     "alt-text",
#     "heading-hierarchy",
# ]

[analyzer]
# Directory walked by `scan --all`, relative to --root
# root = "./src"

# Glob patterns to exclude from scanning
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
]

# Respect .gitignore files
respect_gitignore = true
"#;

/// Runs the init command, writing the config into `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to choose rules");
    println!("  2. Run: wcag-lint scan --all");

    Ok(())
}
