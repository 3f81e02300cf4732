use std::error::Error as _;
use std::path::Path;

use colored::Colorize;

use crate::filesystem::SinkError;
use crate::outline::NodeKind;
use crate::scaffold::ScaffoldReport;

pub fn print_created(kind: NodeKind, path: &Path) {
    println!(
        "{} {}",
        format!("Created {kind}:").green(),
        path.display()
    );
}

pub fn print_failed(kind: NodeKind, path: &Path, error: &SinkError) {
    let reason = error
        .source()
        .map(ToString::to_string)
        .unwrap_or_else(|| error.to_string());
    println!(
        "{} {}: {}",
        format!("Failed to create {kind}").red(),
        path.display(),
        reason
    );
}

pub fn print_abandoned(kind: NodeKind, path: &Path) {
    println!(
        "{} {}: parent directory was not created",
        format!("Skipped {kind}").yellow(),
        path.display()
    );
}

pub fn print_summary(report: &ScaffoldReport) {
    println!();
    println!("{}", "Repository structure created successfully!".bold());
    println!(
        "{} directories, {} files created",
        report.directories, report.files
    );
    if report.has_problems() {
        println!(
            "{}",
            format!(
                "{} failed, {} skipped",
                report.failures, report.abandoned
            )
            .yellow()
        );
    }
}
