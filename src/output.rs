use crate::pipeline::RunReport;
use crate::report::Summary;
use crate::source::FetchError;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Table};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

pub struct CommandSummary {
    pub prefix: String,
    pub message: String,
}

impl CommandSummary {
    pub fn format(summary: &Summary) -> Self {
        match (summary.succeeded, summary.failed) {
            (_, f) if f > 0 => Self {
                prefix: "✗".red().to_string(),
                message: format!("{} succeeded, {} failed", summary.succeeded.green(), f.red()),
            },
            (s, _) if s > 0 => Self {
                prefix: "✓".green().to_string(),
                message: format!(
                    "{} {} imported",
                    s.green(),
                    if s == 1 { "query" } else { "queries" }
                ),
            },
            _ => Self {
                prefix: "•".yellow().to_string(),
                message: "No queries imported".to_string(),
            },
        }
    }
}

/// 送信ループ用プログレスバー
pub fn submission_progress() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {pos} submitted {msg}")
            .unwrap(),
    );
    pb
}

/// 実行結果を表示する
pub fn print_report(report: &RunReport) {
    for note in &report.notes {
        eprintln!("{} {}", "•".yellow(), note);
    }

    if report.dropped > 0 {
        eprintln!(
            "{} {} record(s) dropped (empty query)",
            "•".yellow(),
            report.dropped
        );
    }

    if !report.fetch_errors.is_empty() {
        println!("\n{}", "Fetch errors:".red());
        println!("{}", fetch_error_table(&report.fetch_errors));
    }

    if !report.summary.failures.is_empty() {
        println!("\n{}", "Failed imports:".red());
        println!("{}", failure_table(&report.summary));
    }

    let line = CommandSummary::format(&report.summary);
    println!("\n{} {}", line.prefix, line.message);
}

/// ソースは解決できたがクエリファイルが無かった場合の表示
pub fn print_empty_source(origin: &str) {
    println!("{} No query files found in {}", "•".yellow(), origin);
}

fn failure_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["Query", "Error"]);

    for failure in &summary.failures {
        table.add_row(vec![failure.name.clone(), failure.error.clone()]);
    }

    table
}

fn fetch_error_table(errors: &[FetchError]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_header(vec!["Source", "Error"]);

    for error in errors {
        table.add_row(vec![error.origin.clone(), error.message.clone()]);
    }

    table
}
