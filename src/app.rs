//! Application orchestrator.
//! Loads/merges config, initializes logging, resolves the target directory,
//! confirms with the user, and runs the renamer with a terminal observer.

use anyhow::{Result, anyhow};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use seq_rename::cli::Args;
use seq_rename::config::CONFIG_ENV;
use seq_rename::output as out;
use seq_rename::rename::list_eligible;
use seq_rename::{
    Config, IgnoreList, LoadResult, Notice, Outcome, RenameObserver, Renamer, Status, TargetDir,
    default_config_path, load_or_init, normalize_dir_path,
};

use crate::logging::init_tracing;

/// Renders run events on the terminal: log lines on stdout, a progress bar on stderr.
#[derive(Default)]
pub struct TerminalObserver {
    bar_visible: bool,
}

impl TerminalObserver {
    fn clear_bar(&mut self) {
        if self.bar_visible {
            out::clear_progress();
            self.bar_visible = false;
        }
    }
}

impl RenameObserver for TerminalObserver {
    fn log(&mut self, message: &str) {
        self.clear_bar();
        out::print_user(message);
    }

    fn progress(&mut self, percent: u8) {
        out::print_progress(percent);
        self.bar_visible = out::is_tty();
    }

    fn status(&mut self, status: Status) {
        self.clear_bar();
        out::print_status(status.as_str(), status.is_error(), status == Status::Completed);
    }

    fn notify(&mut self, notice: Notice) {
        self.clear_bar();
        match notice {
            Notice::Success(msg) => out::print_success(&msg),
            Notice::Error { title, message } => out::print_error(&format!("{title}: {message}")),
        }
    }
}

fn print_config_location() {
    if let Some(cfg_env) = std::env::var_os(CONFIG_ENV) {
        out::print_info(&format!(
            "Using {CONFIG_ENV} (explicit):\n  {}\n",
            cfg_env.to_string_lossy()
        ));
        out::print_info(&format!(
            "To override, unset {CONFIG_ENV} or set it to another file."
        ));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default seq_rename config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info(
                    "No config file exists there yet. Run without --print-config to create a template.",
                );
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
}

/// Ask before destroying the original names. Returns Ok(false) when the user declines.
fn confirm(dir: &TargetDir) -> Result<bool> {
    // Nothing to lose if the folder is empty or unreadable; the run reports it.
    let count = match list_eligible(dir, &IgnoreList::default()) {
        Ok(files) if !files.is_empty() => files.len(),
        _ => return Ok(true),
    };

    print!(
        "Rename {count} files in {}? Original names will be lost. [y/N] ",
        dir.display()
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location();
        return Ok(());
    }

    let raw_dir = match args.resolved_directory() {
        Some(d) => d,
        None => args.missing_directory_error().exit(),
    };

    // Build config (may read XML). CLI args override config values.
    let mut cfg = match load_or_init() {
        Ok(LoadResult::Loaded(cfg)) => cfg,
        Ok(LoadResult::Missing(path)) => {
            out::print_warn(&format!(
                "{CONFIG_ENV} points to {}, which does not exist; using defaults.",
                path.display()
            ));
            Config::default()
        }
        Ok(LoadResult::CreatedTemplate(path)) => {
            out::print_info(&format!(
                "A template seq_rename config was written to: {}",
                path.display()
            ));
            Config::default()
        }
        Err(e) => {
            out::print_error(&format!("Failed to load config: {e:#}"));
            return Err(e);
        }
    };
    args.apply_overrides(&mut cfg);

    // Held until return so the file appender flushes.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json_logs).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting seq_rename: {:?}", args);

    let dir = normalize_dir_path(&raw_dir);

    if !args.yes {
        if !atty::is(atty::Stream::Stdin) {
            out::print_error(
                "Refusing to rename without confirmation: stdin is not a terminal. Pass --yes to proceed.",
            );
            return Err(anyhow!("confirmation required (use --yes)"));
        }
        if !confirm(&dir)? {
            out::print_info("Cancelled; nothing was renamed.");
            return Ok(());
        }
    }

    let mut observer = TerminalObserver::default();
    let report = Renamer::default().run(&dir, &mut observer);
    observer.clear_bar();

    match report.outcome {
        Outcome::Completed | Outcome::NoFiles => {}
        Outcome::AccessFailed | Outcome::Aborted => {
            return Err(match report.fatal {
                Some(fatal) => fatal.into(),
                None => anyhow!("rename run did not complete"),
            });
        }
    }

    if !report.failures.is_empty() {
        out::print_warn(&format!(
            "{} of {} files could not be renamed and kept their current names.",
            report.failures.len(),
            report.total
        ));
        return Err(anyhow!("{} file(s) failed to rename", report.failures.len()));
    }

    info!(dir = %dir.display(), renamed = report.renamed.len(), "Run finished");
    Ok(())
}
