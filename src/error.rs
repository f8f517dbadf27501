//! Error types for importing timetables and building diagrams.
//!
//! Import errors are collected per file and never abort a load. Diagram
//! errors are fatal for the run: nothing is drawn when one is returned.

use std::fmt;

/// Problems found while reading station timetable files.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// A record line with fewer than three fields
    #[error("{file}:{line_number}: expected `train arrival departure`, got {line:?}")]
    MalformedRecord {
        file: String,
        line_number: usize,
        line: String,
    },

    /// A time field that is neither `HH:MM` nor the missing sentinel
    #[error("{file}:{line_number}: invalid time {value:?}")]
    InvalidTime {
        file: String,
        line_number: usize,
        value: String,
    },

    /// A selected file that is not a station timetable
    #[error("{file}: not a .txt timetable file, skipped")]
    UnsupportedFile { file: String },

    /// The browser failed to hand over the file contents
    #[error("{file}: could not be read ({reason})")]
    UnreadableFile { file: String, reason: String },
}

/// Pipeline failures that leave nothing to render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    #[error("nothing to draw: {0}")]
    EmptyInput(&'static str),
}

/// A segment that could not be drawn because one of its times is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTimeWarning {
    pub train_id: String,
    pub from_station: String,
    pub to_station: String,
}

impl fmt::Display for MissingTimeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "train {} {} → {} has a missing time and was not drawn",
            self.train_id, self.from_station, self.to_station
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ImportError::MalformedRecord {
            file: "德阳.txt".into(),
            line_number: 3,
            line: "G308 11:20".into(),
        };
        assert_eq!(
            err.to_string(),
            "德阳.txt:3: expected `train arrival departure`, got \"G308 11:20\""
        );

        let err = ImportError::InvalidTime {
            file: "绵阳.txt".into(),
            line_number: 1,
            value: "11:6x".into(),
        };
        assert_eq!(err.to_string(), "绵阳.txt:1: invalid time \"11:6x\"");

        let err = DiagramError::EmptyInput("no schedule records");
        assert_eq!(err.to_string(), "nothing to draw: no schedule records");
    }

    #[test]
    fn missing_time_warning_display() {
        let warning = MissingTimeWarning {
            train_id: "G308".into(),
            from_station: "绵阳".into(),
            to_station: "江油".into(),
        };
        assert_eq!(
            warning.to_string(),
            "train G308 绵阳 → 江油 has a missing time and was not drawn"
        );
    }
}
