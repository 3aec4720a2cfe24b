pub mod calculator;
pub mod catalogue;
pub mod dynamics;
pub mod types;

pub use calculator::AspectCalculator;
pub use catalogue::{AspectCatalogue, AspectClass, AspectDefinition, MAJOR_ASPECTS};
pub use dynamics::{AspectSummary, ChartDynamics, MovementGroups};
pub use types::{
    ActivePolicy, AspectDirection, AspectMovement, AspectPair, AspectResult, AspectRole,
    AspectSettings, AspectType, Role, SignCondition, EXACT_ORB, MINOR_ORB,
};
