use thiserror::Error;

/// Errors raised when a simulation is requested with physically invalid parameters.
///
/// Every computation in this crate either fully succeeds or fails with one of
/// these variants at the point of the call. There are no partial results.
#[derive(Error, Debug, PartialEq)]
pub enum ExosimError {
    #[error("Mass must be strictly positive, got {0} solar masses")]
    NonPositiveMass(f64),

    #[error("Total system mass must be strictly positive")]
    ZeroTotalMass,

    #[error("Orbital distance must be strictly positive, got {0} AU")]
    NonPositiveDistance(f64),

    #[error("Planet radius must be strictly positive, got {0} Earth radii")]
    NonPositiveRadius(f64),

    #[error("Orbital period must be strictly positive, got {0} days")]
    NonPositivePeriod(f64),

    #[error("At least 2 samples are required, got {0}")]
    DegenerateSampleCount(usize),

    #[error("Spectral window is empty or inverted: [{0}, {1}] nm")]
    InvalidSpectralWindow(f64, f64),

    #[error("Spectral line width must be strictly positive, got {0}")]
    NonPositiveLineWidth(f64),

    #[error("Gaussian noise generation failed: {0}")]
    NoiseInjection(#[from] rand_distr::NormalError),
}
