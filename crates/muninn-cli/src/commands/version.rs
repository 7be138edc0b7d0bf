//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    println!(
        "{} {}",
        style("muninn").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("OTOC^(k) estimation for random digital circuits");
}
