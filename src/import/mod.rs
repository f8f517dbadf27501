pub mod station_order;
pub mod timetable;

// Re-export commonly used items
pub use station_order::parse_station_order;
pub use timetable::{load_station_files, parse_station_file, station_name_from_file_name, ImportReport, StationFile};
