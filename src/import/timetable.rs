use std::path::Path;
use crate::constants::STATION_FILE_EXTENSION;
use crate::error::ImportError;
use crate::models::ScheduleRecord;
use crate::time::parse_stop_time;

/// Raw contents of one selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationFile {
    pub file_name: String,
    pub contents: String,
}

impl StationFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: contents.into(),
        }
    }
}

/// Records gathered from a set of station files, plus everything that was skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub records: Vec<ScheduleRecord>,
    pub issues: Vec<ImportError>,
    pub station_count: usize,
}

/// Station name encoded in a timetable file name (`德阳.txt` → `德阳`)
///
/// Returns `None` for files that are not `.txt` timetables.
#[must_use]
pub fn station_name_from_file_name(file_name: &str) -> Option<&str> {
    let path = Path::new(file_name);
    let is_timetable = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(STATION_FILE_EXTENSION));
    if !is_timetable {
        return None;
    }

    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::trim)
        .filter(|stem| !stem.is_empty())
}

/// Parse one station's timetable
///
/// Each non-empty line is `train arrival departure`, separated by whitespace;
/// extra trailing fields are ignored. Bad lines are skipped and reported, the
/// rest of the file is still read.
#[must_use]
pub fn parse_station_file(file_name: &str, station: &str, contents: &str) -> (Vec<ScheduleRecord>, Vec<ImportError>) {
    let mut records = Vec::new();
    let mut issues = Vec::new();

    let contents = contents.trim_start_matches('\u{feff}');

    for (index, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = index + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[train_id, arrival, departure, ..] = fields.as_slice() else {
            issues.push(ImportError::MalformedRecord {
                file: file_name.to_string(),
                line_number,
                line: line.to_string(),
            });
            continue;
        };

        let times = parse_stop_time(arrival)
            .map_err(|_| arrival)
            .and_then(|a| parse_stop_time(departure).map(|d| (a, d)).map_err(|_| departure));

        match times {
            Ok((arrival, departure)) => {
                records.push(ScheduleRecord::new(station, train_id, arrival, departure));
            }
            Err(value) => issues.push(ImportError::InvalidTime {
                file: file_name.to_string(),
                line_number,
                value: value.to_string(),
            }),
        }
    }

    (records, issues)
}

/// Read every station file into one record set
///
/// Files are handled independently and in file name order, so the result does
/// not depend on the order the browser lists them in.
#[must_use]
pub fn load_station_files(files: &[StationFile]) -> ImportReport {
    let mut sorted: Vec<&StationFile> = files.iter().collect();
    sorted.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    let mut report = ImportReport::default();

    for file in sorted {
        let Some(station) = station_name_from_file_name(&file.file_name) else {
            report.issues.push(ImportError::UnsupportedFile {
                file: file.file_name.clone(),
            });
            continue;
        };

        let (records, issues) = parse_station_file(&file.file_name, station, &file.contents);
        crate::log!("{}: {} records, {} skipped lines", station, records.len(), issues.len());

        report.station_count += 1;
        report.records.extend(records);
        report.issues.extend(issues);
    }

    for issue in &report.issues {
        leptos::logging::warn!("{issue}");
    }

    report
}
