pub mod detector;
pub mod types;

pub use detector::{angular_separation, AspectDetector};
pub use types::{Aspect, AspectKind, AspectMatch, OrbTable};
