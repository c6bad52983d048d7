//! Thermodynamic environment for a network run.

use crate::error::{StateError, StateResult};
use nf_core::units::{Density, Temperature, Volume};

/// Fixed thermodynamic conditions seen by rate evaluators.
///
/// Values are stored as raw `f64` in the conventional nuclear-burning units
/// (temperature in 10^9 K, density in g/cm^3, volume in cm^3); the `uom`
/// constructor keeps unit mistakes out of the boundary. Conditions are
/// immutable for the lifetime of a state: operators read them, nothing
/// rewrites them mid-run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    temperature_t9: f64,
    density_g_cm3: f64,
    volume_cm3: f64,
}

impl Conditions {
    /// Create conditions from unit-checked quantities.
    ///
    /// Validates that all three values are positive and finite.
    pub fn new(temperature: Temperature, density: Density, volume: Volume) -> StateResult<Self> {
        use uom::si::mass_density::gram_per_cubic_centimeter;
        use uom::si::thermodynamic_temperature::gigakelvin;
        use uom::si::volume::cubic_centimeter;

        let temperature_t9 = temperature.get::<gigakelvin>();
        if !temperature_t9.is_finite() || temperature_t9 <= 0.0 {
            return Err(StateError::InvalidArg {
                what: "temperature must be positive and finite",
            });
        }

        let density_g_cm3 = density.get::<gram_per_cubic_centimeter>();
        if !density_g_cm3.is_finite() || density_g_cm3 <= 0.0 {
            return Err(StateError::InvalidArg {
                what: "density must be positive and finite",
            });
        }

        let volume_cm3 = volume.get::<cubic_centimeter>();
        if !volume_cm3.is_finite() || volume_cm3 <= 0.0 {
            return Err(StateError::InvalidArg {
                what: "volume must be positive and finite",
            });
        }

        Ok(Self {
            temperature_t9,
            density_g_cm3,
            volume_cm3,
        })
    }

    /// Temperature in units of 10^9 K.
    pub fn temperature_t9(&self) -> f64 {
        self.temperature_t9
    }

    /// Density in g/cm^3.
    pub fn density_g_cm3(&self) -> f64 {
        self.density_g_cm3
    }

    /// Volume in cm^3.
    pub fn volume_cm3(&self) -> f64 {
        self.volume_cm3
    }
}

impl Default for Conditions {
    /// Unit conditions (T9 = 1, rho = 1 g/cm^3, V = 1 cm^3).
    fn default() -> Self {
        Self {
            temperature_t9: 1.0,
            density_g_cm3: 1.0,
            volume_cm3: 1.0,
        }
    }
}
