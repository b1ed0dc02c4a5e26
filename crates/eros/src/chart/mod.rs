pub mod builder;
pub mod types;

pub use builder::ChartBuilder;
pub use types::{Body, HouseCusp, NatalChart, PlanetPlacement};
