//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════╗
║     Instagram Downloader                     ║
║     Profile media archiver                   ║
╚══════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(username: &str, workers: u32, download_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Profile: {}", username);
    println!("  Workers: {}", workers);
    println!("  Directory: {}", download_dir);
    println!();
}
