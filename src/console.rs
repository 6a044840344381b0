//! Startup banner.

use colored::Colorize;

pub fn print_startup(url: &str) {
    println!("{}", "🚀 Starting Python Backend...".white().bold());
    println!("{} {}", "✅ Server running on".green(), url.cyan().underline());
}
