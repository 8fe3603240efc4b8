//! Run statistics reporting.

use console::style;

use crate::download::DownloadStats;

/// Print the end-of-run summary.
///
/// Every download is attempted exactly once; failures are reported here but
/// do not fail the run.
pub fn print_run_stats(stats: &DownloadStats) {
    println!();
    println!("{}", style("All downloads complete.").bold());
    println!("  Downloaded: {}", style(stats.completed).green());
    if stats.failed > 0 {
        println!("  Failed:     {}", style(stats.failed).red());
    }
    println!("  Attempted:  {}", stats.total());
}
