//! # Exosim: simulation configuration façade
//!
//! This module defines the [`Exosim`] struct, the entry point that bundles every
//! recognized configuration option of the simulation core:
//!
//! 1. **Velocity model** ([`VelocityModel`](crate::radial_velocity::VelocityModel)) —
//!    fixed-amplitude or mass-derived stellar reflex velocity.
//! 2. **Rest wavelength** — the reference spectral line, H-alpha by default.
//! 3. **Spectral window** ([`SpectralWindow`](crate::spectral_line::SpectralWindow)) —
//!    wavelength range, Gaussian width, and sample count for the synthetic line.
//! 4. **Transit sampling** — sample count of the two-period light curve.
//!
//! The façade holds configuration only. Every compute method is a pure function of
//! its inputs: no caches, no interior mutability, no hidden state between calls.
//! Re-invoking any method with identical inputs returns byte-identical output, so
//! an interactive consumer can recompute on every parameter change.
//!
//! ## Typical usage
//!
//! ```rust
//! use exosim::exosim::Exosim;
//! use exosim::physical_system::PhysicalSystem;
//! use exosim::transit::TransitParams;
//!
//! let sim = Exosim::default();
//! let system = PhysicalSystem::default();
//!
//! // Orbit, Doppler shift, and spectral line at a 45° orbital phase
//! let result = sim.compute_orbit_doppler(&system, 45.0).unwrap();
//! println!("shifted line: {} nm", result.doppler.shifted_wavelength);
//!
//! // Transit light curve for an Earth-sized planet on a 10-day orbit
//! let params = TransitParams::new(1.0, 10.0).unwrap();
//! let curve = sim.compute_transit_light_curve(&params).unwrap();
//! assert_eq!(curve.samples.len(), 1000);
//! ```
//!
//! ## See also
//! ------------
//! * [`PhysicalSystem`](crate::physical_system::PhysicalSystem) – Two-body parameter bundle.
//! * [`OrbitState`](crate::orbit_state::OrbitState) – Barycentric positions.
//! * [`DopplerState`](crate::radial_velocity::DopplerState) – Radial velocity and shift.
//! * [`LightCurve`](crate::transit::LightCurve) – Transit photometry.

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, KmPerSec, Nanometer, DEFAULT_SAMPLE_COUNT, H_ALPHA_NM};
use crate::exosim_errors::ExosimError;
use crate::orbit_state::OrbitState;
use crate::physical_system::PhysicalSystem;
use crate::radial_velocity::{radial_velocity_curve, DopplerState, VelocityModel};
use crate::spectral_line::{SpectralLine, SpectralWindow};
use crate::transit::{LightCurve, TransitParams};

/// Simulation configuration: velocity model, spectral setup, and sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exosim {
    /// Velocity model for the stellar reflex motion.
    pub velocity_model: VelocityModel,
    /// Rest wavelength of the reference spectral line, in nm.
    pub rest_wavelength: Nanometer,
    /// Wavelength window and sampling for the synthetic line profile.
    pub spectral_window: SpectralWindow,
    /// Sample count of the two-period transit light curve.
    pub transit_sample_count: usize,
}

impl Default for Exosim {
    /// Reference configuration: 30 km/s fixed amplitude, H-alpha line,
    /// 650–660 nm window, 1000 samples for both curves.
    fn default() -> Self {
        Self {
            velocity_model: VelocityModel::default(),
            rest_wavelength: H_ALPHA_NM,
            spectral_window: SpectralWindow::default(),
            transit_sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// Combined output of the orbit-Doppler model at one phase angle.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitDopplerResult {
    /// Barycentric positions of both bodies.
    pub orbit: OrbitState,
    /// Radial velocity, fractional shift, and shifted wavelength.
    pub doppler: DopplerState,
    /// Synthetic line profile centered on the shifted wavelength.
    pub spectral_line: SpectralLine,
}

impl Exosim {
    /// Evaluate the orbit-Doppler model at a given orbital phase angle.
    ///
    /// Arguments
    /// -----------------
    /// * `system`: the validated two-body system.
    /// * `angle`: orbital phase angle of the planet in degrees; wrapped into
    ///   [0°, 360°).
    ///
    /// Return
    /// ----------
    /// * `Ok(OrbitDopplerResult)` bundling positions, Doppler observables, and
    ///   the sampled spectral line.
    /// * `Err(ExosimError)` if the configured spectral window is invalid.
    pub fn compute_orbit_doppler(
        &self,
        system: &PhysicalSystem,
        angle: Degree,
    ) -> Result<OrbitDopplerResult, ExosimError> {
        let orbit = OrbitState::at_angle(system, angle);
        let doppler =
            DopplerState::at_angle(&self.velocity_model, system, self.rest_wavelength, angle);
        let spectral_line = SpectralLine::sample(&self.spectral_window, doppler.shifted_wavelength)?;

        Ok(OrbitDopplerResult {
            orbit,
            doppler,
            spectral_line,
        })
    }

    /// Sample the transit light curve over two orbital periods.
    ///
    /// Arguments
    /// -----------------
    /// * `params`: validated transit parameters.
    ///
    /// Return
    /// ----------
    /// * `Ok(LightCurve)` with exactly `transit_sample_count` samples.
    /// * `Err(ExosimError::DegenerateSampleCount)` if the configured count is
    ///   below 2.
    pub fn compute_transit_light_curve(
        &self,
        params: &TransitParams,
    ) -> Result<LightCurve, ExosimError> {
        LightCurve::compute(params, self.transit_sample_count)
    }

    /// Sample the radial-velocity phase curve with the configured velocity model.
    pub fn radial_velocity_curve(
        &self,
        system: &PhysicalSystem,
        sample_count: usize,
    ) -> Result<Vec<(Degree, KmPerSec)>, ExosimError> {
        radial_velocity_curve(&self.velocity_model, system, sample_count)
    }
}
