pub mod length;
pub mod mass;
pub mod volume_density;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod volume_density_test;

pub use length::{Length, EARTH_RADIUS_M};
pub use mass::{Mass, EARTH_MASS_KG};
pub use volume_density::VolumeDensity;
