//! # Instantaneous two-body positions
//!
//! [`OrbitState`] holds the Cartesian positions of the star and the planet relative to
//! the system barycenter, which sits at the origin. The two bodies are diametrically
//! opposite across the barycenter at every phase angle:
//!
//! ```text
//! planet = ( d_planet · cos θ,  d_planet · sin θ)
//! star   = (−d_star   · cos θ, −d_star   · sin θ)
//! ```
//!
//! The phase angle is given in degrees and wraps with period 360°: evaluating at `θ`
//! and `θ + 360°` produces bit-identical positions.

use nalgebra::Vector2;

use crate::angle::{cos_deg, sin_deg};
use crate::constants::Degree;
use crate::exosim_errors::ExosimError;
use crate::physical_system::PhysicalSystem;

/// Positions of both bodies about the barycenter at one phase angle, in AU.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    pub star_position: Vector2<f64>,
    pub planet_position: Vector2<f64>,
}

impl OrbitState {
    /// Positions of the star and the planet at a given orbital phase angle.
    ///
    /// Arguments
    /// -----------------
    /// * `system`: the validated two-body system.
    /// * `angle`: orbital phase angle of the planet in degrees; any real value is
    ///   accepted and wrapped into [0°, 360°).
    pub fn at_angle(system: &PhysicalSystem, angle: Degree) -> Self {
        let (d_star, d_planet) = system.barycentric_distances();
        let (cos_t, sin_t) = (cos_deg(angle), sin_deg(angle));

        Self {
            star_position: Vector2::new(-d_star * cos_t, -d_star * sin_t),
            planet_position: Vector2::new(d_planet * cos_t, d_planet * sin_t),
        }
    }
}

/// Sample one full revolution of the system for drawing orbit trails.
///
/// Arguments
/// -----------------
/// * `system`: the validated two-body system.
/// * `sample_count`: number of evenly spaced phase angles over [0°, 360°],
///   endpoints included; at least 2.
///
/// Return
/// ----------
/// * `Ok(Vec<OrbitState>)` with exactly `sample_count` states, first and last at
///   the same orbital phase.
/// * `Err(ExosimError::DegenerateSampleCount)` if `sample_count < 2`.
pub fn orbit_path(
    system: &PhysicalSystem,
    sample_count: usize,
) -> Result<Vec<OrbitState>, ExosimError> {
    if sample_count < 2 {
        return Err(ExosimError::DegenerateSampleCount(sample_count));
    }

    let last = (sample_count - 1) as f64;
    Ok((0..sample_count)
        .map(|i| OrbitState::at_angle(system, 360.0 * i as f64 / last))
        .collect())
}

#[cfg(test)]
mod orbit_state_test {
    use super::*;
    use crate::physical_system::OrbitGeometry;
    use approx::assert_relative_eq;

    fn barycentric_system() -> PhysicalSystem {
        PhysicalSystem::new(
            1.0,
            0.001,
            OrbitGeometry::Barycentric { orbital_radius: 1.0 },
        )
        .unwrap()
    }

    #[test]
    fn test_center_of_mass_balance() {
        let system = barycentric_system();

        for angle in [0.0, 33.0, 90.0, 123.4, 180.0, 271.0, 359.9] {
            let state = OrbitState::at_angle(&system, angle);
            assert_relative_eq!(
                system.star_mass * state.star_position.norm(),
                system.planet_mass * state.planet_position.norm(),
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_bodies_diametrically_opposite() {
        let system = PhysicalSystem::default();
        let state = OrbitState::at_angle(&system, 57.3);

        // Opposite directions, scaled by the distance ratio (0.5 / 1.0 here).
        assert_relative_eq!(
            state.star_position.x,
            -0.5 * state.planet_position.x,
            epsilon = 1e-15
        );
        assert_relative_eq!(
            state.star_position.y,
            -0.5 * state.planet_position.y,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_reference_positions() {
        let system = PhysicalSystem::default();

        let state = OrbitState::at_angle(&system, 0.0);
        assert_eq!(state.planet_position, Vector2::new(1.0, 0.0));
        assert_eq!(state.star_position, Vector2::new(-0.5, 0.0));

        let state = OrbitState::at_angle(&system, 90.0);
        assert_eq!(state.planet_position, Vector2::new(0.0, 1.0));
        assert_eq!(state.star_position, Vector2::new(0.0, -0.5));

        let state = OrbitState::at_angle(&system, 180.0);
        assert_eq!(state.planet_position, Vector2::new(-1.0, 0.0));
        assert_eq!(state.star_position, Vector2::new(0.5, 0.0));
    }

    #[test]
    fn test_periodic_in_angle() {
        let system = barycentric_system();

        for angle in [0.0, 45.5, 210.0, 359.0] {
            assert_eq!(
                OrbitState::at_angle(&system, angle),
                OrbitState::at_angle(&system, angle + 360.0)
            );
        }
    }

    #[test]
    fn test_orbit_path_sampling() {
        let system = PhysicalSystem::default();

        assert_eq!(
            orbit_path(&system, 1),
            Err(ExosimError::DegenerateSampleCount(1))
        );

        let path = orbit_path(&system, 361).unwrap();
        assert_eq!(path.len(), 361);
        // Endpoints sit at the same orbital phase (0° and 360°).
        assert_eq!(path.first(), path.last());
    }
}
