//! # Templates
//!
//! Exposes the markdown template from the `templates/` directory and fills its `{{PLACEHOLDERS}}`.

use crate::domain::week::WeekId;

pub const WEEKLY_REPORT_TEMPLATE: &str = include_str!("../../templates/weekly_report.md");

/// A `{{KEY}}` marker the weekly report template may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    Title,
    Year,
    Week,
    From,
    To,
}

impl ReportField {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "TITLE" => Some(Self::Title),
            "YEAR" => Some(Self::Year),
            "WEEK" => Some(Self::Week),
            "FROM" => Some(Self::From),
            "TO" => Some(Self::To),
            _ => None,
        }
    }

    fn value(self, week: &WeekId, title: &str) -> String {
        match self {
            Self::Title => title.to_string(),
            Self::Year => week.year().to_string(),
            Self::Week => week.iso_week().to_string(),
            Self::From => week.from_label(),
            Self::To => week.to_label(),
        }
    }
}

/// Fills the `{{KEY}}` markers of `template` in a single pass.
///
/// Substituted values are never rescanned, so a title containing `{{WEEK}}` or a
/// stray `{{` is written as is. Unknown or unterminated markers are kept and logged.
pub fn render(template: &str, week: &WeekId, title: &str) -> String {
    let mut out = String::with_capacity(template.len() + title.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let marker = &rest[start..];

        let Some(end) = marker.find("}}") else {
            tracing::error!("Unterminated placeholder in report template near {:?}", first_line(marker));
            rest = marker;
            break;
        };

        let raw = &marker[..end + 2];
        match ReportField::from_key(&marker[2..end]) {
            Some(field) => out.push_str(&field.value(week, title)),
            None => {
                tracing::error!("Unknown placeholder in report template: {}", raw);
                out.push_str(raw);
            }
        }
        rest = &marker[end + 2..];
    }

    out.push_str(rest);
    out
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or(text)
}

/// Renders the weekly progress report for `week`.
pub fn weekly_report(week: &WeekId, title: &str) -> String {
    render(WEEKLY_REPORT_TEMPLATE, week, title)
}
