//! Console rendering of classification reports.

#![allow(clippy::print_stdout)]

use crate::report::ClassificationReport;

/// Maximum width of the text probability bar in characters.
const BAR_WIDTH: usize = 50;

/// Print a human-readable probability breakdown to stdout.
///
/// Text rendition of the probability bar chart: one row per species in
/// label order, with the top species marked.
pub fn print_breakdown(report: &ClassificationReport) {
    println!("Most probable: {} ({:.2}%)", report.top_label, report.top_score);
    println!("Probability breakdown:");

    let label_width = report
        .scores
        .iter()
        .map(|entry| entry.label.len())
        .max()
        .unwrap_or(0);

    for (index, entry) in report.scores.iter().enumerate() {
        let marker = if index == report.top_index { "  <--" } else { "" };
        println!(
            "  {:<label_width$}  {:>6.2}%  {}{}",
            entry.label,
            entry.score,
            bar(entry.score),
            marker,
        );
    }

    if let Some(correct) = report.correct {
        println!(
            "Result: {}",
            if correct { "correct" } else { "incorrect" }
        );
    }
}

/// Scale a percentage into a bar of `#` characters.
fn bar(score: f32) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let len = ((score.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f32).round() as usize;
    "#".repeat(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_width() {
        assert_eq!(bar(100.0).len(), BAR_WIDTH);
        assert_eq!(bar(50.0).len(), BAR_WIDTH / 2);
        assert_eq!(bar(0.0).len(), 0);
    }

    #[test]
    fn test_bar_clamps_out_of_range() {
        assert_eq!(bar(150.0).len(), BAR_WIDTH);
        assert_eq!(bar(-5.0).len(), 0);
    }
}
