//! # Synthetic spectral-line sampling
//!
//! A Doppler-shifted absorption line is rendered for display as an unnormalized
//! Gaussian intensity profile over a wavelength window: the intensity peaks at 1
//! on the shifted line center and decays with `exp(−(λ − λ_shifted)² / w)` for a
//! configured width parameter `w`. No normalization to unit area is performed.

use serde::{Deserialize, Serialize};

use crate::constants::{Nanometer, DEFAULT_SAMPLE_COUNT};
use crate::exosim_errors::ExosimError;

/// Wavelength window and sampling configuration for the synthetic line profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralWindow {
    /// Lower wavelength bound in nm.
    pub lower_nm: Nanometer,
    /// Upper wavelength bound in nm.
    pub upper_nm: Nanometer,
    /// Gaussian width parameter `w` in the profile `exp(−Δλ² / w)`, in nm².
    pub width: f64,
    /// Number of evenly spaced wavelength samples, endpoints included.
    pub sample_count: usize,
}

impl SpectralWindow {
    pub(crate) fn validate(&self) -> Result<(), ExosimError> {
        if self.lower_nm >= self.upper_nm {
            return Err(ExosimError::InvalidSpectralWindow(
                self.lower_nm,
                self.upper_nm,
            ));
        }
        if self.width <= 0.0 {
            return Err(ExosimError::NonPositiveLineWidth(self.width));
        }
        if self.sample_count < 2 {
            return Err(ExosimError::DegenerateSampleCount(self.sample_count));
        }
        Ok(())
    }
}

impl Default for SpectralWindow {
    /// 650–660 nm window around H-alpha, width 0.1 nm², 1000 samples.
    fn default() -> Self {
        Self {
            lower_nm: 650.0,
            upper_nm: 660.0,
            width: 0.1,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

/// Unnormalized Gaussian line profile, peak 1 at the line center.
pub fn gaussian_profile(wavelength: Nanometer, center: Nanometer, width: f64) -> f64 {
    (-(wavelength - center).powi(2) / width).exp()
}

/// Sampled intensity curve of the shifted line over a wavelength window.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralLine {
    /// Ordered `(wavelength, intensity)` pairs, wavelengths strictly ascending.
    pub samples: Vec<(Nanometer, f64)>,
}

impl SpectralLine {
    /// Sample the line profile centered on a shifted wavelength.
    ///
    /// Arguments
    /// -----------------
    /// * `window`: wavelength window, width, and sample count.
    /// * `shifted_wavelength`: line center in nm, typically from
    ///   [`DopplerState`](crate::radial_velocity::DopplerState).
    ///
    /// Return
    /// ----------
    /// * `Ok(SpectralLine)` with exactly `window.sample_count` samples.
    /// * `Err(ExosimError)` on an empty or inverted window, non-positive width,
    ///   or fewer than 2 samples.
    pub fn sample(
        window: &SpectralWindow,
        shifted_wavelength: Nanometer,
    ) -> Result<Self, ExosimError> {
        window.validate()?;

        // i/(n−1) reaches exactly 1 at the last sample, so the window endpoints
        // are hit without accumulated rounding.
        let span = window.upper_nm - window.lower_nm;
        let last = (window.sample_count - 1) as f64;
        let samples = (0..window.sample_count)
            .map(|i| {
                let wavelength = window.lower_nm + span * i as f64 / last;
                (
                    wavelength,
                    gaussian_profile(wavelength, shifted_wavelength, window.width),
                )
            })
            .collect();

        Ok(Self { samples })
    }
}
