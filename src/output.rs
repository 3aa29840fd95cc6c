use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
pub fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Status line, colored by what it reports: red for errors, green once done.
pub fn print_status(msg: &str, is_error: bool, is_done: bool) {
    if !is_tty() {
        println!("status: {}", msg);
    } else if is_error {
        println!("{} {}", "status:".bold(), msg.red());
    } else if is_done {
        println!("{} {}", "status:".bold(), msg.green());
    } else {
        println!("{} {}", "status:".bold(), msg.cyan());
    }
}

/// Print a plain user-facing line (no prefix). Use this for primary outputs
/// such as "Renamed: 3.jpg" which users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

fn stderr_is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

/// Redraw a single-line progress bar on stderr. No-op unless stderr is a TTY.
pub fn print_progress(percent: u8) {
    if !stderr_is_tty() {
        return;
    }
    let percent = percent.min(100);
    let filled = usize::from(percent) / 5;
    eprint!(
        "\r[{}{}] {:>3}%",
        "#".repeat(filled).green(),
        " ".repeat(20 - filled),
        percent
    );
    let _ = io::stderr().flush();
}

/// Erase the progress bar so the next line starts clean.
pub fn clear_progress() {
    if stderr_is_tty() {
        eprint!("\r\x1b[2K");
        let _ = io::stderr().flush();
    }
}
