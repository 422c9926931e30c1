use crate::domain::week::WeekId;
use std::path::Path;

pub fn week_resolved(week: &WeekId) -> String {
    format!(
        "Reporting week {} ({} to {}, ISO year {})",
        week,
        week.monday(),
        week.sunday(),
        week.iso_year()
    )
}

pub fn logs_dir_resolved(dir: &Path) -> String {
    format!("Logs directory: {}", dir.display())
}

pub fn log_written(path: &Path, bytes: usize) -> String {
    format!("Wrote {bytes} bytes to {}", path.display())
}

pub fn log_skipped(path: &Path) -> String {
    format!("Not overwriting existing log {}", path.display())
}
