pub mod arc;
pub mod engine;
pub mod table;
pub mod terms;
pub mod types;

pub use arc::{arc_of_direction, proportional_arc};
pub use engine::{build_table, PrimaryDirections};
pub use table::{DirectionFilter, PrimaryDirectionTable};
pub use terms::{TermEntry, TermTable};
pub use types::{
    ArcPair, Direction, DirectionPoint, DirectionSettings, DirectionType, PointCode, PointKind,
    TermVariant, MAX_ARC,
};
