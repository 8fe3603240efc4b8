//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════╗
║          Ecodadys Downloader          ║
╚═══════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(origin: &str, download_dir: &str, concurrency: Option<usize>) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Origin:      {}", origin);
    println!("  Directory:   {}", download_dir);
    match concurrency {
        Some(n) => println!("  Concurrency: {}", n),
        None => println!("  Concurrency: unbounded"),
    }
    println!();
}
