//! Body-wave velocities and critical angles at layer interfaces

use serde::{Deserialize, Serialize};

/// P- and S-wave velocities for the relevant media (m/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeismicVelocities {
    pub p_crust: f64,
    pub s_crust: f64,
    pub p_mantle: f64,
    pub s_mantle: f64,
    /// Sound speed in cavity air
    pub air: f64,
}

impl Default for SeismicVelocities {
    fn default() -> Self {
        Self {
            p_crust: 6_000.0,
            s_crust: 3_500.0,
            p_mantle: 8_000.0,
            s_mantle: 4_500.0,
            air: 343.0,
        }
    }
}

/// Interfaces a P-wave can cross, named fast medium first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interface {
    CrustAir,
    MantleAir,
    CrustMantle,
    MantleCrust,
}

impl Interface {
    pub const ALL: [Interface; 4] = [
        Interface::CrustAir,
        Interface::MantleAir,
        Interface::CrustMantle,
        Interface::MantleCrust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interface::CrustAir => "crust_air",
            Interface::MantleAir => "mantle_air",
            Interface::CrustMantle => "crust_mantle",
            Interface::MantleCrust => "mantle_crust",
        }
    }

    /// Incident and transmitting P-wave velocities at this interface.
    fn velocity_pair(&self, v: &SeismicVelocities) -> (f64, f64) {
        match self {
            Interface::CrustAir => (v.p_crust, v.air),
            Interface::MantleAir => (v.p_mantle, v.air),
            Interface::CrustMantle => (v.p_crust, v.p_mantle),
            Interface::MantleCrust => (v.p_mantle, v.p_crust),
        }
    }
}

impl SeismicVelocities {
    /// Critical angle for total internal reflection at `interface`, in
    /// degrees from the normal.
    ///
    /// Snell's law: reflection requires the transmitting medium to be
    /// slower. Where it is faster there is no critical angle and 90° is
    /// returned.
    pub fn critical_angle_deg(&self, interface: Interface) -> f64 {
        let (incident, transmitting) = interface.velocity_pair(self);
        if transmitting < incident {
            (transmitting / incident).asin().to_degrees()
        } else {
            90.0
        }
    }

    /// Critical angles for every interface.
    pub fn critical_angles(&self) -> [(Interface, f64); 4] {
        Interface::ALL.map(|interface| (interface, self.critical_angle_deg(interface)))
    }
}
