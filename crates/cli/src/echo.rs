use owo_colors::OwoColorize;
use swiftread_core::CleanedDocument;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Swiftread".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Clean extracted web text for speed reading\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print one timing line, colored by how long the stage took
pub fn print_timing(label: &str, duration: std::time::Duration) {
    let secs = duration.as_secs_f64();
    let label = format!("{}:", label);
    let pace = match secs {
        s if s < 5.0 => "fast".dimmed().to_string(),
        s if s < 30.0 => "moderate".bright_yellow().to_string(),
        _ => "slow".bright_red().to_string(),
    };

    eprintln!("  {} {:>8.2}s ({})", label.dimmed(), secs, pace);
}

fn print_section(title: &str) {
    let rule = "═".repeat(60);
    eprintln!("{}", rule.dimmed());
    eprintln!("{}", title.bold().cyan());
    eprintln!("{}", rule.dimmed());
}

/// Print cleanup statistics
pub fn print_cleanup_details(original_words: usize, doc: &CleanedDocument) {
    eprintln!();
    print_section("Cleanup Details");
    eprintln!("  {} {}", "Original words:".dimmed(), original_words.to_string().bright_white());
    eprintln!("  {} {}", "Cleaned words:".dimmed(), doc.word_count.to_string().bright_white());
    eprintln!(
        "  {} {}",
        "Chunks:".dimmed(),
        format!("{} ({} kept original)", doc.chunks_processed, doc.chunks_failed).bright_white()
    );
    eprintln!(
        "  {} {}\n",
        "Reading time:".dimmed(),
        format!("{:.1} min", doc.estimated_reading_time()).bright_white()
    );
}

/// Print timing summary
pub fn print_timing_summary(total: std::time::Duration, timings: &[(String, std::time::Duration)]) {
    print_section("Timing Summary");

    for (label, duration) in timings {
        print_timing(label, *duration);
    }

    eprintln!(
        "  {} {:>8.2}s\n",
        format!("{}:", "Total").bold().dimmed(),
        total.as_secs_f64()
    );
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
