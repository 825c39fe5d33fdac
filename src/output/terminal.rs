// Colored terminal output for one-shot analysis results.

use colored::Colorize;

use crate::scoring::traits::Analysis;

/// Display a single analysis in the terminal.
pub fn display_analysis(text: &str, analysis: &Analysis) {
    println!("\n{}", "=== Sentiment Analysis ===".bold());
    println!("  Text: {}", super::truncate_chars(text, 80));
    println!("  Score: {} / 100", colorize_score(analysis.score));

    if analysis.keywords.is_empty() {
        println!("  Keywords: {}", "(none in vocabulary)".dimmed());
    } else {
        println!("  Keywords: {}", analysis.keywords.join(", "));
    }
}

/// Color a score by polarity: green positive, red negative, yellow neutral.
fn colorize_score(score: i32) -> String {
    let rendered = format!("{score:+}");
    if score > 20 {
        rendered.green().bold().to_string()
    } else if score < -20 {
        rendered.red().bold().to_string()
    } else {
        rendered.yellow().to_string()
    }
}
