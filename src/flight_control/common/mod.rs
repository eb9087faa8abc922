pub(crate) mod random_source;
pub(crate) mod waypoint;
#[cfg(test)]
mod tests;

pub use random_source::{RandomSource, RngSource};
pub use waypoint::{Waypoint, normalize_heading};
