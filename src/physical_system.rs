//! # Two-body system parameters
//!
//! This module defines [`PhysicalSystem`], the immutable parameter bundle describing a
//! star–planet pair orbiting their common center of mass, together with
//! [`OrbitGeometry`], the two supported ways of specifying the orbital geometry:
//!
//! - [`OrbitGeometry::Barycentric`] — a single orbital radius `a` (the star–planet
//!   separation), from which the barycentric distances are derived from the mass
//!   ratio: `d_star = M_planet · a / (M_star + M_planet)`, `d_planet = a − d_star`.
//! - [`OrbitGeometry::FixedDistances`] — two independent distances from the
//!   barycenter, as used by demonstration setups that exaggerate the stellar wobble
//!   for visibility.
//!
//! Under the barycentric derivation the center-of-mass balance
//! `M_star · d_star = M_planet · d_planet` holds by construction. Fixed distances
//! make no such promise.
//!
//! All validation happens once, in [`PhysicalSystem::new`]; downstream computations
//! can rely on strictly positive masses and distances.

use serde::{Deserialize, Serialize};

use crate::constants::{
    Au, SolarMass, DEFAULT_PLANET_DISTANCE, DEFAULT_PLANET_MASS, DEFAULT_STAR_DISTANCE,
    DEFAULT_STAR_MASS,
};
use crate::exosim_errors::ExosimError;

/// Orbital geometry specification for a two-body system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OrbitGeometry {
    /// Star–planet separation in AU; barycentric distances follow from the mass ratio.
    Barycentric { orbital_radius: Au },
    /// Independent star and planet distances from the barycenter, in AU.
    FixedDistances {
        star_distance: Au,
        planet_distance: Au,
    },
}

/// Immutable parameter bundle for a star–planet pair.
///
/// Units: masses in solar masses, distances in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalSystem {
    pub star_mass: SolarMass,
    pub planet_mass: SolarMass,
    pub geometry: OrbitGeometry,
}

impl PhysicalSystem {
    /// Build a validated two-body system.
    ///
    /// Arguments
    /// -----------------
    /// * `star_mass`: stellar mass in solar masses, strictly positive.
    /// * `planet_mass`: planetary mass in solar masses, strictly positive.
    /// * `geometry`: orbital geometry; every distance it carries must be strictly positive.
    ///
    /// Return
    /// ----------
    /// * `Ok(PhysicalSystem)` on valid input.
    /// * `Err(ExosimError)` when the total mass is zero, a mass is non-positive,
    ///   or a distance is non-positive.
    pub fn new(
        star_mass: SolarMass,
        planet_mass: SolarMass,
        geometry: OrbitGeometry,
    ) -> Result<Self, ExosimError> {
        if star_mass + planet_mass == 0.0 {
            return Err(ExosimError::ZeroTotalMass);
        }
        if star_mass <= 0.0 {
            return Err(ExosimError::NonPositiveMass(star_mass));
        }
        if planet_mass <= 0.0 {
            return Err(ExosimError::NonPositiveMass(planet_mass));
        }
        match geometry {
            OrbitGeometry::Barycentric { orbital_radius } => {
                if orbital_radius <= 0.0 {
                    return Err(ExosimError::NonPositiveDistance(orbital_radius));
                }
            }
            OrbitGeometry::FixedDistances {
                star_distance,
                planet_distance,
            } => {
                if star_distance <= 0.0 {
                    return Err(ExosimError::NonPositiveDistance(star_distance));
                }
                if planet_distance <= 0.0 {
                    return Err(ExosimError::NonPositiveDistance(planet_distance));
                }
            }
        }
        Ok(Self {
            star_mass,
            planet_mass,
            geometry,
        })
    }

    /// Total system mass in solar masses.
    pub fn total_mass(&self) -> SolarMass {
        self.star_mass + self.planet_mass
    }

    /// Distances of the star and the planet from the barycenter, in AU.
    ///
    /// Return
    /// ----------
    /// * `(d_star, d_planet)` — derived from the mass ratio for
    ///   [`OrbitGeometry::Barycentric`], taken verbatim for
    ///   [`OrbitGeometry::FixedDistances`].
    pub fn barycentric_distances(&self) -> (Au, Au) {
        match self.geometry {
            OrbitGeometry::Barycentric { orbital_radius } => {
                let d_star = self.planet_mass * orbital_radius / self.total_mass();
                (d_star, orbital_radius - d_star)
            }
            OrbitGeometry::FixedDistances {
                star_distance,
                planet_distance,
            } => (star_distance, planet_distance),
        }
    }

    /// Star–planet separation in AU.
    pub fn orbital_radius(&self) -> Au {
        let (d_star, d_planet) = self.barycentric_distances();
        d_star + d_planet
    }
}

impl Default for PhysicalSystem {
    /// Sun-mass star with a Jupiter-mass planet on the reference demonstration
    /// geometry (fixed distances 0.5 AU / 1.0 AU).
    fn default() -> Self {
        Self {
            star_mass: DEFAULT_STAR_MASS,
            planet_mass: DEFAULT_PLANET_MASS,
            geometry: OrbitGeometry::FixedDistances {
                star_distance: DEFAULT_STAR_DISTANCE,
                planet_distance: DEFAULT_PLANET_DISTANCE,
            },
        }
    }
}
