use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;
use std::io::Write;

pub fn header(text: &str) {
    println!("{}", text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO.style(theme().info.clone()),
        label.style(theme().dim.clone()),
        value
    );
}

pub fn section(title: &str) {
    println!();
    println!("{}", title.style(theme().header.clone()));
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}

/// Print an input prompt without a trailing newline and flush stdout,
/// so the cursor stays on the prompt line.
pub fn prompt(label: &str) {
    print!("{}: ", label.style(theme().dim.clone()));
    let _ = std::io::stdout().flush();
}
