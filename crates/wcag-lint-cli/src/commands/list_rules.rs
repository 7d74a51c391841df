//! List rules command implementation.

use anyhow::Result;
use wcag_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() -> Result<()> {
    println!("Available rules:\n");
    println!("{:<22} {:<22} Description", "Id", "Name");
    println!("{}", "-".repeat(90));

    for rule in all_rules()? {
        println!(
            "{:<22} {:<22} {}",
            rule.id(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nAll rules run unless the config lists a subset in `rules`.");
    println!("Use --rules to run specific rules, e.g.:");
    println!("  wcag-lint scan --all --rules image-alt,alt-text");

    Ok(())
}
