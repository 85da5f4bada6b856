//! Terminal output formatting with colors.

use colored::Colorize;

use crate::error::DegenerateInput;
use crate::result::{
    ClassificationMetrics, ContinuousMetrics, Derived, DivergenceReport, Metrics,
    RelativeSpeed, SpeedComparison, TripletMetrics,
};

/// Format a DivergenceReport for human-readable terminal output.
///
/// Relative errors are shown as percentages; classification metrics are
/// already percentages. Metrics that could not be computed are shown as
/// `n/a` with the reason.
pub fn format_report(report: &DivergenceReport) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("diffbench\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    if let Some(workload) = &report.workload {
        output.push_str(&format!("  Workload: {}\n", workload.bold()));
    }
    output.push_str(&format!(
        "  Comparing {} to {}\n\n",
        report.candidate.bold(),
        report.reference.bold()
    ));

    push_speed(&mut output, &report.speed);
    output.push('\n');

    match &report.metrics {
        Metrics::Continuous(m) => push_continuous(&mut output, m),
        Metrics::Classification(m) => push_classification(&mut output, m),
        Metrics::Triplet(m) => push_triplet(&mut output, m),
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');

    output
}

fn push_speed(output: &mut String, speed: &SpeedComparison) {
    let statement = match speed.relative {
        Ok(relative @ RelativeSpeed::Slower(_)) => relative.to_string().yellow().to_string(),
        Ok(relative @ RelativeSpeed::Faster(_)) => relative.to_string().green().to_string(),
        Err(condition) => not_available(condition),
    };
    output.push_str(&format!("  {}\n", statement));
    output.push_str(&format!(
        "    Reference: {}   Candidate: {}\n",
        speed.reference, speed.candidate
    ));
}

fn push_continuous(output: &mut String, m: &ContinuousMetrics) {
    output.push_str(&format!("  Elements: {}\n", m.len));
    output.push_str(&format!(
        "  Maximum error: {}% from values: {} and {}\n",
        m.max_relative.value * 100.0,
        m.max_relative.reference,
        m.max_relative.candidate
    ));
    output.push_str(&format!(
        "  Average error: {}\n",
        derived(m.mean_relative.map(|v| v * 100.0), "%")
    ));
    output.push_str(&format!(
        "  Maximum absolute error: {} from values: {} and {}\n",
        m.max_absolute.value, m.max_absolute.reference, m.max_absolute.candidate
    ));
    output.push_str(&format!(
        "  Average absolute error: {}\n",
        derived(m.mean_absolute, "")
    ));
}

fn push_classification(output: &mut String, m: &ClassificationMetrics) {
    let c = &m.counts;
    output.push_str(&format!("  True positive count: {}\n", c.true_positive));
    output.push_str(&format!("  True negative count: {}\n", c.true_negative));
    output.push_str(&format!("  False positive count: {}\n", c.false_positive));
    output.push_str(&format!("  False negative count: {}\n", c.false_negative));
    output.push_str(&format!("  Sensitivity: {}\n", derived(m.sensitivity, "%")));
    output.push_str(&format!("  Specificity: {}\n", derived(m.specificity, "%")));
    output.push_str(&format!("  Accuracy: {}\n", derived(m.accuracy, "%")));
}

fn push_triplet(output: &mut String, m: &TripletMetrics) {
    output.push_str(&format!("  Triples: {}\n", m.triples));
    output.push_str(&format!("  Maximum absolute error: {}\n", m.max_distance));
    output.push_str(&format!(
        "  Mean absolute error: {}\n",
        derived(m.mean_distance, "")
    ));
    output.push_str(&format!(
        "  Root-mean-square error: {}\n",
        derived(m.rms_distance, "")
    ));
}

fn derived(value: Derived, unit: &str) -> String {
    match value {
        Ok(v) => format!("{}{}", v, unit),
        Err(condition) => not_available(condition),
    }
}

fn not_available(condition: DegenerateInput) -> String {
    format!("n/a ({})", condition).yellow().to_string()
}
