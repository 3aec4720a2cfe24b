pub mod ids;
pub mod snapshot;
pub mod types;

pub use snapshot::ChartSnapshot;
pub use types::{ChartPoint, Motion, PointCategory, STATIONARY_SPEED};
