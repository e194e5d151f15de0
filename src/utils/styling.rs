//! Terminal styling utilities

use console::{style, Emoji};

use crate::driver::RunConfig;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static TOOL: Emoji<'_, '_> = Emoji("🔧 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("◆").cyan().bold(),
        style("dmxbatch").cyan().bold()
    );
    println!(
        "    {}",
        style("Batch DMX conversion through dmxconvert").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(config: &RunConfig, dry_run: bool) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Tool:   {:<39}│",
        TOOL,
        truncate_string(&config.converter().display().to_string(), 38)
    );
    println!(
        "    │  {} Input:  {:<39}│",
        FOLDER,
        truncate_string(&config.input_folder().display().to_string(), 38)
    );
    println!(
        "    │  {} Output: {:<39}│",
        SAVE,
        truncate_string(&config.output_folder().display().to_string(), 38)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Conversion: {:<35}│",
        LINK,
        style(format!("{} → {}", config.source(), config.target())).yellow()
    );
    if dry_run {
        println!(
            "    │  {} Mode:       {:<35}│",
            INFO,
            style("dry run").yellow()
        );
    }
    println!("    └{}┘", line);
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print an error message to stderr
pub fn print_error(kind: &str, message: &str) {
    eprintln!(
        "    {} {} {}",
        style("✗").red().bold(),
        style(format!("[{}]", kind)).red(),
        style(message).red()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("dmxbatch conversion complete!").green().bold()
    );
    println!();
}

// Helper functions

fn truncate_string(s: &str, max_len: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_len {
        s.to_string()
    } else {
        let tail: String = chars[chars.len() - (max_len - 3)..].iter().collect();
        format!("...{}", tail)
    }
}
