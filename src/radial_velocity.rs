//! # Stellar radial velocity and Doppler shift
//!
//! The star's reflex motion about the barycenter carries a line-of-sight velocity
//! component that Doppler-shifts its spectral lines. Two velocity models are
//! supported, selected explicitly through [`VelocityModel`]:
//!
//! - [`VelocityModel::FixedAmplitude`] — the oscillation amplitude is a configured
//!   value in km/s. This captures the sinusoidal shape of the reflex motion without
//!   deriving it from the masses, and matches the reference demonstration setup
//!   (30 km/s by default).
//! - [`VelocityModel::MassDerived`] — the amplitude follows from Kepler's third law
//!   in the normalized G = 4π² unit system (distances in AU, masses in solar
//!   masses): `v = M_planet / M_total · sqrt(4π² · a / M_total)`. No time-unit
//!   conversion is applied; the amplitude is interpreted in the same normalized
//!   convention.
//!
//! Both models project the amplitude onto the line of sight **exactly once**, at
//! evaluation time: `v_radial(θ) = amplitude · cos θ`. The fractional shift is
//! `v_radial / c` and the observed line sits at `λ_rest · (1 + shift)`. Earlier
//! prototypes of the mass-derived setup re-applied `cos θ` a second time at the
//! wavelength stage; that double projection is deliberately not reproduced here so
//! that both models share one convention.

use serde::{Deserialize, Serialize};

use crate::angle::cos_deg;
use crate::constants::{Degree, KmPerSec, Nanometer, DEFAULT_MAX_VELOCITY, FOUR_PI_SQUARED, VLIGHT};
use crate::exosim_errors::ExosimError;
use crate::physical_system::PhysicalSystem;

/// Velocity model used to derive the star's radial-velocity amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VelocityModel {
    /// Configured oscillation amplitude in km/s.
    FixedAmplitude { max_velocity: KmPerSec },
    /// Keplerian amplitude in the normalized G = 4π² unit system.
    MassDerived,
}

impl Default for VelocityModel {
    fn default() -> Self {
        Self::FixedAmplitude {
            max_velocity: DEFAULT_MAX_VELOCITY,
        }
    }
}

impl VelocityModel {
    /// Amplitude of the stellar radial-velocity oscillation for a given system.
    pub fn amplitude(&self, system: &PhysicalSystem) -> KmPerSec {
        match *self {
            VelocityModel::FixedAmplitude { max_velocity } => max_velocity,
            VelocityModel::MassDerived => {
                let total_mass = system.total_mass();
                let orbital_radius = system.orbital_radius();
                system.planet_mass / total_mass
                    * (FOUR_PI_SQUARED * orbital_radius / total_mass).sqrt()
            }
        }
    }

    /// Line-of-sight velocity at a given orbital phase angle.
    ///
    /// Zero exactly at 90° and 270°, where the star moves across the line of sight.
    pub fn radial_velocity(&self, system: &PhysicalSystem, angle: Degree) -> KmPerSec {
        self.amplitude(system) * cos_deg(angle)
    }
}

/// Doppler observables of the star at one orbital phase angle.
#[derive(Debug, Clone, PartialEq)]
pub struct DopplerState {
    /// Line-of-sight velocity in km/s, positive when receding.
    pub radial_velocity: KmPerSec,
    /// Fractional wavelength shift `v_radial / c`, dimensionless.
    pub doppler_shift: f64,
    /// Observed wavelength of the reference line, in nm.
    pub shifted_wavelength: Nanometer,
}

impl DopplerState {
    /// Evaluate the Doppler observables at a given phase angle.
    ///
    /// Arguments
    /// -----------------
    /// * `model`: the velocity model in use.
    /// * `system`: the validated two-body system.
    /// * `rest_wavelength`: rest wavelength of the reference spectral line, in nm.
    /// * `angle`: orbital phase angle in degrees, wrapped into [0°, 360°).
    pub fn at_angle(
        model: &VelocityModel,
        system: &PhysicalSystem,
        rest_wavelength: Nanometer,
        angle: Degree,
    ) -> Self {
        let radial_velocity = model.radial_velocity(system, angle);
        let doppler_shift = radial_velocity / VLIGHT;

        Self {
            radial_velocity,
            doppler_shift,
            shifted_wavelength: rest_wavelength * (1.0 + doppler_shift),
        }
    }
}

/// Sample the radial-velocity phase curve over one full revolution.
///
/// Arguments
/// -----------------
/// * `model`: the velocity model in use.
/// * `system`: the validated two-body system.
/// * `sample_count`: number of evenly spaced phase angles over [0°, 360°],
///   endpoints included; at least 2.
///
/// Return
/// ----------
/// * `Ok(Vec<(Degree, KmPerSec)>)` of `(angle, v_radial)` pairs, angles ascending.
/// * `Err(ExosimError::DegenerateSampleCount)` if `sample_count < 2`.
pub fn radial_velocity_curve(
    model: &VelocityModel,
    system: &PhysicalSystem,
    sample_count: usize,
) -> Result<Vec<(Degree, KmPerSec)>, ExosimError> {
    if sample_count < 2 {
        return Err(ExosimError::DegenerateSampleCount(sample_count));
    }

    let last = (sample_count - 1) as f64;
    Ok((0..sample_count)
        .map(|i| {
            let angle = 360.0 * i as f64 / last;
            (angle, model.radial_velocity(system, angle))
        })
        .collect())
}

#[cfg(test)]
mod radial_velocity_test {
    use super::*;
    use crate::constants::H_ALPHA_NM;
    use crate::physical_system::OrbitGeometry;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_amplitude_at_reference_angles() {
        let system = PhysicalSystem::default();
        let model = VelocityModel::default();

        assert_eq!(model.radial_velocity(&system, 0.0), 30.0);
        assert_eq!(model.radial_velocity(&system, 90.0), 0.0);
        assert_eq!(model.radial_velocity(&system, 180.0), -30.0);
        assert_eq!(model.radial_velocity(&system, 270.0), 0.0);
    }

    #[test]
    fn test_shifted_wavelength_at_conjunction() {
        let system = PhysicalSystem::default();
        let doppler = DopplerState::at_angle(&VelocityModel::default(), &system, H_ALPHA_NM, 0.0);

        assert_relative_eq!(doppler.radial_velocity, 30.0, epsilon = 1e-15);
        assert_relative_eq!(doppler.doppler_shift, 30.0 / 299792.458, epsilon = 1e-18);
        assert_relative_eq!(doppler.shifted_wavelength, 656.36567, epsilon = 1e-4);
    }

    #[test]
    fn test_no_shift_across_line_of_sight() {
        let system = PhysicalSystem::default();
        let model = VelocityModel::default();

        for angle in [90.0, 270.0] {
            let doppler = DopplerState::at_angle(&model, &system, H_ALPHA_NM, angle);
            assert_eq!(doppler.radial_velocity, 0.0);
            assert_eq!(doppler.shifted_wavelength, H_ALPHA_NM);
        }
    }

    #[test]
    fn test_mass_derived_amplitude() {
        let system = PhysicalSystem::new(
            1.0,
            0.001,
            OrbitGeometry::Barycentric { orbital_radius: 1.0 },
        )
        .unwrap();

        // v = (M_p / M_tot) * sqrt(4π² a / M_tot) with a = 1 AU, M_tot = 1.001.
        let expected = 0.001 / 1.001 * (FOUR_PI_SQUARED / 1.001).sqrt();
        assert_relative_eq!(
            VelocityModel::MassDerived.amplitude(&system),
            expected,
            epsilon = 1e-15
        );

        // A heavier planet at the same separation pulls harder on the star.
        let heavier = PhysicalSystem::new(
            1.0,
            0.01,
            OrbitGeometry::Barycentric { orbital_radius: 1.0 },
        )
        .unwrap();
        assert!(
            VelocityModel::MassDerived.amplitude(&heavier)
                > VelocityModel::MassDerived.amplitude(&system)
        );
    }

    #[test]
    fn test_velocity_curve_shape() {
        let system = PhysicalSystem::default();
        let model = VelocityModel::default();

        assert_eq!(
            radial_velocity_curve(&model, &system, 0),
            Err(ExosimError::DegenerateSampleCount(0))
        );

        let curve = radial_velocity_curve(&model, &system, 5).unwrap();
        assert_eq!(curve.len(), 5);

        // 0°, 90°, 180°, 270°, 360° — one full cosine period.
        assert_eq!(curve[0], (0.0, 30.0));
        assert_eq!(curve[1], (90.0, 0.0));
        assert_eq!(curve[2], (180.0, -30.0));
        assert_eq!(curve[3], (270.0, 0.0));
        assert_eq!(curve[4].1, 30.0);
    }

    #[test]
    fn test_idempotent_evaluation() {
        let system = PhysicalSystem::default();
        let model = VelocityModel::MassDerived;

        let first = DopplerState::at_angle(&model, &system, H_ALPHA_NM, 123.4);
        let second = DopplerState::at_angle(&model, &system, H_ALPHA_NM, 123.4);
        assert_eq!(first, second);
    }
}
