//! Run statistics reporting.

use console::style;

use crate::download::RunReport;

/// Print the final run report.
pub fn print_run_report(report: &RunReport) {
    println!();
    println!("{}", style("Run complete:").bold());
    println!(
        "  Media found: {} ({} images, {} videos)",
        report.enqueued, report.images, report.videos
    );
    println!("  Downloaded:  {}", report.downloaded);

    if report.failed > 0 {
        println!("  {}      {}", style("Failed:").yellow().bold(), report.failed);
    } else {
        println!("  Failed:      0");
    }
}
