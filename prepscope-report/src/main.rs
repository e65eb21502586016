//! prepscope-report - Study Report CLI
//!
//! Generate a study analytics report from a JSON study log.

use anyhow::{Context, Result};
use clap::Parser;
use prepscope_core::analytics::{generate_overview, StudyOverview, Trend};
use prepscope_core::format::{format_minutes, format_pct, format_signed};
use prepscope_core::{Config, StudyDataset};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prepscope-report")]
#[command(about = "Prepscope - your study log, summarized")]
#[command(version)]
struct Args {
    /// Path to the JSON study log
    #[arg(long)]
    data: PathBuf,

    /// Restrict the knowledge-gap list to one subject
    #[arg(long)]
    subject: Option<String>,

    /// Export format (md = markdown, json = JSON)
    #[arg(long)]
    export: Option<String>,

    /// Plain headings, no emoji
    #[arg(long)]
    serious: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = prepscope_core::logging::init(&config.logging).ok();

    let dataset = StudyDataset::load(&args.data)
        .with_context(|| format!("failed to load study log {:?}", args.data))?;

    let overview = generate_overview(&dataset, &config.analytics, args.subject.as_deref())
        .context("failed to generate overview")?;

    match args.export.as_deref() {
        Some("json") => print_json(&overview)?,
        Some("md") => print_markdown(&overview),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
        None => print_terminal(&overview, !args.serious),
    }

    Ok(())
}

/// Rising drift means growing overconfidence; rising focus means improvement.
fn drift_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "worsening (overconfidence growing)",
        Trend::Stable => "stable",
        Trend::Falling => "improving",
    }
}

fn focus_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Rising => "improving",
        Trend::Stable => "stable",
        Trend::Falling => "slipping",
    }
}

fn print_terminal(overview: &StudyOverview, fun_mode: bool) {
    let title = if fun_mode {
        "📚 YOUR STUDY REPORT 📚"
    } else {
        "Study Report"
    };

    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!();

    if overview.calibration.total_attempts == 0 && overview.focus_days.is_empty() {
        println!("  No activity found in this study log.");
        println!();
        return;
    }

    // Calibration
    println!("{}", section(fun_mode, "🎯", "CALIBRATION"));
    match overview.calibration.overall_calibration {
        Some(score) => println!("   Overall calibration: {}", format_pct(score)),
        None => println!("   Overall calibration: no data"),
    }
    println!(
        "   Bands: {} well calibrated, {} overconfident, {} underconfident",
        overview.calibration.well_calibrated_count,
        overview.calibration.overconfident_count,
        overview.calibration.underconfident_count,
    );
    for bin in &overview.bins {
        let marker = if bin.well_calibrated { " " } else { "!" };
        println!(
            " {} {:>7}: predicted {:>3.0} vs actual {:>6} ({} attempts)",
            marker,
            bin.range_label,
            bin.predicted_avg,
            format_pct(bin.actual_accuracy_pct),
            bin.total_attempts,
        );
    }
    println!();

    // Drift
    println!("{}", section(fun_mode, "📉", "CONFIDENCE DRIFT"));
    println!(
        "   Weekly gap slope: {} — {}{}",
        format_signed(overview.drift_slope),
        drift_label(overview.drift_trend),
        if overview.drift_steep { " (steep)" } else { "" },
    );
    for week in &overview.weekly {
        println!(
            "   {:>4}: confidence {:>5.1} accuracy {:>6} gap {}",
            week.label(),
            week.avg_confidence,
            format_pct(week.avg_accuracy_pct),
            format_signed(week.confidence_gap),
        );
    }
    println!();

    // Focus
    if !overview.focus_days.is_empty() {
        println!("{}", section(fun_mode, "🧠", "DEEP WORK"));
        println!(
            "   Focus trend: {} ({})",
            focus_label(overview.focus_trend),
            format_signed(overview.focus_slope),
        );
        for day in &overview.focus_days {
            println!(
                "   {}: {} deep / {} distracted — focus score {:.0}",
                day.date,
                format_minutes(day.focus.total_deep_minutes),
                format_minutes(day.focus.total_distracted_minutes),
                day.focus.focus_score,
            );
        }
        println!();
    }

    // Study time vs accuracy
    println!("{}", section(fun_mode, "⏱️", "TIME vs ACCURACY"));
    println!(
        "   Correlation (daily minutes vs accuracy): {:.2}",
        overview.time_accuracy_correlation
    );
    for subject in &overview.minutes_by_subject {
        println!(
            "   {:<16} {}",
            subject.category,
            format_minutes(subject.total)
        );
    }
    println!();

    // Gaps
    if !overview.top_gaps.is_empty() {
        println!("{}", section(fun_mode, "🕳️", "RECURRING GAPS"));
        for gap in &overview.top_gaps {
            println!(
                "   {}× {} ({} sessions)",
                gap.frequency,
                gap.sentence,
                gap.sessions.len()
            );
        }
        println!();
    }

    // Mistakes
    if !overview.mistake_ranking.is_empty() {
        println!("{}", section(fun_mode, "🔁", "MISTAKES BY PRIORITY"));
        for mistake in &overview.mistake_ranking {
            println!("   MRI {:>5.1}  {}", mistake.mri, mistake.sentence);
            println!("             fix: {}", mistake.ai_fix);
        }
        println!();
    }
}

fn section(fun_mode: bool, emoji: &str, name: &str) -> String {
    if fun_mode {
        format!("{} {}", emoji, name)
    } else {
        name.to_string()
    }
}

fn print_markdown(overview: &StudyOverview) {
    println!("# Study Report\n");

    println!("## Calibration\n");
    match overview.calibration.overall_calibration {
        Some(score) => println!("Overall calibration: **{}**\n", format_pct(score)),
        None => println!("Overall calibration: _no data_\n"),
    }
    if !overview.bins.is_empty() {
        println!("| Band | Predicted | Actual | Attempts | Calibrated |");
        println!("|------|-----------|--------|----------|------------|");
        for bin in &overview.bins {
            println!(
                "| {} | {:.0} | {} | {} | {} |",
                bin.range_label,
                bin.predicted_avg,
                format_pct(bin.actual_accuracy_pct),
                bin.total_attempts,
                if bin.well_calibrated { "yes" } else { "no" },
            );
        }
        println!();
    }

    println!("## Confidence drift\n");
    println!(
        "Weekly gap slope {} — {}\n",
        format_signed(overview.drift_slope),
        drift_label(overview.drift_trend)
    );

    if !overview.top_gaps.is_empty() {
        println!("## Recurring gaps\n");
        for gap in &overview.top_gaps {
            println!("- {}× {}", gap.frequency, gap.sentence);
        }
        println!();
    }

    if !overview.mistake_ranking.is_empty() {
        println!("## Mistakes by priority\n");
        for mistake in &overview.mistake_ranking {
            println!("- **MRI {:.1}** {} — {}", mistake.mri, mistake.sentence, mistake.ai_fix);
        }
        println!();
    }
}

fn print_json(overview: &StudyOverview) -> Result<()> {
    let json = serde_json::to_string_pretty(overview).context("failed to serialize overview")?;
    println!("{}", json);
    Ok(())
}
