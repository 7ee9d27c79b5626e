//! # Transit light-curve model
//!
//! When the planet crosses the stellar disk the observed brightness drops by a
//! fraction proportional to the planet's cross-section. The model is a step
//! function: full brightness outside the transit window, a flat-bottomed dip of
//! depth `0.01 · r²` inside it. There is no ingress/egress ramp and no limb
//! darkening.
//!
//! The transit lasts 5% of the orbital period and is centered at the midpoint of
//! each period. Light curves are sampled over exactly two periods so the consumer
//! always sees two dips.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::constants::{Day, EarthRadius};
use crate::exosim_errors::ExosimError;

/// Fraction of the orbital period spent in transit.
pub const TRANSIT_DURATION_FRACTION: f64 = 0.05;

/// Fractional brightness loss per squared Earth radius.
pub const TRANSIT_DEPTH_COEFFICIENT: f64 = 0.01;

/// Planet radius range recommended for interactive controls, in Earth radii.
pub const PLANET_RADIUS_RANGE: (EarthRadius, EarthRadius) = (0.1, 2.0);

/// Orbital period range recommended for interactive controls, in days.
pub const ORBITAL_PERIOD_RANGE: (Day, Day) = (1.0, 100.0);

/// Validated transit parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitParams {
    /// Planet radius in Earth radii.
    pub planet_radius: EarthRadius,
    /// Orbital period in days.
    pub orbital_period: Day,
}

impl TransitParams {
    /// Build validated transit parameters.
    ///
    /// Arguments
    /// -----------------
    /// * `planet_radius`: planet radius in Earth radii, strictly positive.
    /// * `orbital_period`: orbital period in days, strictly positive.
    ///
    /// Return
    /// ----------
    /// * `Ok(TransitParams)` on valid input, `Err(ExosimError)` otherwise.
    pub fn new(planet_radius: EarthRadius, orbital_period: Day) -> Result<Self, ExosimError> {
        if planet_radius <= 0.0 {
            return Err(ExosimError::NonPositiveRadius(planet_radius));
        }
        if orbital_period <= 0.0 {
            return Err(ExosimError::NonPositivePeriod(orbital_period));
        }
        Ok(Self {
            planet_radius,
            orbital_period,
        })
    }

    /// Fractional depth of the brightness dip, `0.01 · r²`.
    pub fn transit_depth(&self) -> f64 {
        TRANSIT_DEPTH_COEFFICIENT * self.planet_radius.powi(2)
    }

    /// Relative brightness at time `t` (days).
    ///
    /// The transit window occupies `[P/2 − τ/2, P/2 + τ/2]` within each period,
    /// with `τ = 0.05 · P`; the window bounds themselves count as in transit.
    pub fn brightness_at(&self, t: Day) -> f64 {
        let period = self.orbital_period;
        let phase = t.rem_euclid(period);
        let half_window = TRANSIT_DURATION_FRACTION * period / 2.0;

        if (phase - period / 2.0).abs() <= half_window {
            1.0 - self.transit_depth()
        } else {
            1.0
        }
    }
}

/// Sampled brightness-vs-time curve over two orbital periods.
#[derive(Debug, Clone, PartialEq)]
pub struct LightCurve {
    /// Ordered `(time, brightness)` pairs, times strictly ascending, in days.
    pub samples: Vec<(Day, f64)>,
}

impl LightCurve {
    /// Sample the light curve over `[0, 2P]`.
    ///
    /// Arguments
    /// -----------------
    /// * `params`: validated transit parameters.
    /// * `sample_count`: number of evenly spaced time samples, endpoints
    ///   included; at least 2.
    ///
    /// Return
    /// ----------
    /// * `Ok(LightCurve)` with exactly `sample_count` samples.
    /// * `Err(ExosimError::DegenerateSampleCount)` if `sample_count < 2`.
    pub fn compute(params: &TransitParams, sample_count: usize) -> Result<Self, ExosimError> {
        if sample_count < 2 {
            return Err(ExosimError::DegenerateSampleCount(sample_count));
        }

        let span = 2.0 * params.orbital_period;
        let last = (sample_count - 1) as f64;
        let samples = (0..sample_count)
            .map(|i| {
                let t = span * i as f64 / last;
                (t, params.brightness_at(t))
            })
            .collect();

        Ok(Self { samples })
    }

    /// Perturb the brightness values with zero-mean Gaussian noise.
    ///
    /// The caller owns the generator, so a seeded RNG reproduces the same
    /// perturbed curve and the core stays free of hidden randomness.
    ///
    /// Arguments
    /// -----------------
    /// * `rng`: random number generator supplied by the caller.
    /// * `sigma`: noise standard deviation in relative brightness units;
    ///   negative or NaN values are rejected.
    pub fn add_photometric_noise<R: Rng>(
        &mut self,
        rng: &mut R,
        sigma: f64,
    ) -> Result<(), ExosimError> {
        let normal = Normal::new(0.0, sigma)?;
        for (_, brightness) in &mut self.samples {
            *brightness += normal.sample(rng);
        }
        Ok(())
    }
}
