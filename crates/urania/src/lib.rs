//! Aspect classification and primary directions over resolved chart positions.
//!
//! Positions come from an ephemeris provider (see [`ephemeris::PositionSource`]);
//! this crate only classifies and scores relationships between them.

pub mod angle;
pub mod aspects;
pub mod chart;
pub mod config;
pub mod directions;
pub mod ephemeris;
pub mod equatorial;
pub mod error;
pub mod zodiac;

pub use aspects::{AspectCalculator, AspectResult, AspectSettings, AspectType};
pub use chart::{ChartPoint, ChartSnapshot, PointCategory};
pub use config::Settings;
pub use directions::{build_table, DirectionFilter, PrimaryDirectionTable, PrimaryDirections};
pub use error::{Result, UraniaError};
pub use zodiac::Sign;
