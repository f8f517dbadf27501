mod record;
mod render_config;
mod segment;
mod station_order;

pub use record::ScheduleRecord;
pub use render_config::{Locale, RenderConfig};
pub use segment::{Segment, SegmentKind};
pub use station_order::StationOrder;
