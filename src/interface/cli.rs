//! # Command Line
//!
//! `weeklog` with no arguments creates this week's log next to the executable.
//! Flags override the date, the target directory, and the config file.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::application::report::{LogOutcome, WeeklyLogManager};
use crate::domain::config::AppConfig;
use crate::domain::paths;
use crate::domain::week::WeekId;
use crate::strings::{logs, messages, templates};

#[derive(Parser, Debug)]
#[command(name = "weeklog", version, about = "Create this week's markdown progress report")]
pub struct Args {
    /// Use this date (YYYY-MM-DD) instead of today
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Directory to write the weekly log into
    #[arg(long, value_name = "PATH")]
    pub logs_dir: Option<PathBuf>,

    /// Read configuration from this YAML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the report to stdout instead of writing it
    #[arg(long)]
    pub print: bool,

    /// Debug logging on stderr (ignored when RUST_LOG is set)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a run did, for the caller to report.
#[derive(Debug)]
pub enum RunResult {
    Written(LogOutcome),
    Printed(String),
}

pub fn run(args: &Args) -> Result<RunResult> {
    let config = AppConfig::load(args.config.as_deref())?;

    let today = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let week = WeekId::containing(today)
        .with_context(|| format!("Date out of range: no full week contains {today}"))?;
    tracing::debug!("{}", logs::week_resolved(&week));

    let report = templates::weekly_report(&week, &config.title);
    if args.print {
        return Ok(RunResult::Printed(report));
    }

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let logs_dir =
        paths::resolve_logs_dir(args.logs_dir.as_deref(), config.logs_dir.as_deref(), &exe);
    tracing::debug!("{}", logs::logs_dir_resolved(&logs_dir));

    let manager = WeeklyLogManager::new(logs_dir);
    Ok(RunResult::Written(manager.create_if_absent(&week, &report)?))
}

/// Console line for a run result.
pub fn describe(result: &RunResult) -> String {
    match result {
        RunResult::Written(outcome @ LogOutcome::Created(_)) => {
            messages::log_created(outcome.path())
        }
        RunResult::Written(outcome @ LogOutcome::AlreadyExists(_)) => {
            messages::log_already_exists(outcome.path())
        }
        RunResult::Printed(report) => report.trim_end().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(dir: &std::path::Path, extra: &[&str]) -> Args {
        let dir = dir.to_str().unwrap();
        let mut argv = vec!["weeklog", "--date", "2024-06-12", "--logs-dir", dir];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["weeklog"]).unwrap();
        assert!(args.date.is_none());
        assert!(args.logs_dir.is_none());
        assert!(!args.print);
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert!(Args::try_parse_from(["weeklog", "--date", "2024-13-01"]).is_err());
        assert!(Args::try_parse_from(["weeklog", "--date", "12-06-2024"]).is_err());
    }

    #[test]
    fn test_date_at_calendar_limits_is_error() {
        for date in [NaiveDate::MIN, NaiveDate::MAX] {
            let args = Args::try_parse_from([
                "weeklog".to_string(),
                format!("--date={date}"),
                "--print".to_string(),
                "--config=/dev/null".to_string(),
            ])
            .unwrap();
            assert_eq!(args.date, Some(date));

            let err = run(&args).unwrap_err();
            assert!(err.to_string().starts_with("Date out of range"), "{err:#}");
        }
    }

    #[test]
    fn test_run_twice_in_same_week() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "").unwrap();
        let config_arg = config_path.to_str().unwrap();
        let logs_dir = temp_dir.path().join("Logs");
        let expected = logs_dir.join("week_24_10-06_2024.md");

        let first = run(&args_for(&logs_dir, &["--config", config_arg])).unwrap();
        assert_eq!(describe(&first), format!("✅ Created: {}", expected.display()));

        let content = fs::read_to_string(&expected).unwrap();
        assert!(content.contains("## Week: 2024 - Week 24"));
        assert!(content.contains("## Dates: From 10-06-2024 to 16-06-2024"));

        let second = run(&args_for(&logs_dir, &["--config", config_arg])).unwrap();
        assert_eq!(
            describe(&second),
            format!("⚠️ File already exists: {}", expected.display())
        );
        assert_eq!(fs::read_to_string(&expected).unwrap(), content);
    }

    #[test]
    fn test_config_title_and_dir() {
        let temp_dir = TempDir::new().unwrap();
        let logs_dir = temp_dir.path().join("from-config");
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(
            &config_path,
            format!("logs_dir: {}\ntitle: Lab Notes\n", logs_dir.display()),
        )
        .unwrap();

        let args = Args::try_parse_from([
            "weeklog",
            "--date",
            "2024-06-12",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .unwrap();

        let result = run(&args).unwrap();
        let path = logs_dir.join("week_24_10-06_2024.md");
        assert!(matches!(result, RunResult::Written(LogOutcome::Created(ref p)) if *p == path));
        assert!(fs::read_to_string(path).unwrap().starts_with("# Lab Notes\n"));
    }

    #[test]
    fn test_print_does_not_touch_filesystem() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "").unwrap();
        let logs_dir = temp_dir.path().join("Logs");

        let result = run(&args_for(
            &logs_dir,
            &["--print", "--config", config_path.to_str().unwrap()],
        ))
        .unwrap();

        match result {
            RunResult::Printed(report) => assert!(report.contains("Week: 2024 - Week 24")),
            other => panic!("expected printed report, got {other:?}"),
        }
        assert!(!logs_dir.exists());
    }
}
