use chrono::Local;
use colored::Colorize;
use oracle_client::CycleReport;
use oracle_common::constants::BANNER;

pub const DELIVERED_MARK: char = '✓';
pub const FAILED_MARK: char = '✗';

pub fn print_banner() {
    println!("{}", BANNER.bold());
}

/// Progress text for one cycle, naming at most two of the matched processes.
pub fn summary_line(report: &CycleReport) -> String {
    let names = report.sample_names();
    if names.is_empty() {
        return format!("cycle {}: no dev tools", report.cycle);
    }

    let count = report.processes.len();
    let noun = if count == 1 { "dev tool" } else { "dev tools" };
    format!(
        "cycle {}: {} {} (e.g., {})",
        report.cycle,
        count,
        noun,
        names.join(", ")
    )
}

pub fn status_mark(delivered: bool) -> char {
    if delivered {
        DELIVERED_MARK
    } else {
        FAILED_MARK
    }
}

pub fn print_cycle(report: &CycleReport) {
    let mark = status_mark(report.delivered).to_string();
    let mark = if report.delivered {
        mark.green()
    } else {
        mark.red()
    };

    println!(
        "[{}] {} {}",
        Local::now().format("%H:%M:%S"),
        summary_line(report),
        mark
    );
}
