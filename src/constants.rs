//! # Constants and type definitions for exosim
//!
//! This module centralizes the **physical constants**, **default parameter values**, and **common
//! type definitions** used throughout the `exosim` library.
//!
//! ## Overview
//!
//! - Physical constants (speed of light, H-alpha rest wavelength)
//! - The normalized gravitational convention used for mass-derived velocities
//! - Default parameter values recognized by the configuration façade
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the orbit model, the Doppler
//! model, and the transit model.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// 4π², value of the gravitational constant G in the normalized (AU, solar mass) unit system
/// where Kepler's third law reads P² = a³ / M
pub const FOUR_PI_SQUARED: f64 = DPI * DPI;

/// Speed of light in km/s
pub const VLIGHT: f64 = 2.99792458e5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Rest wavelength of the hydrogen H-alpha line in nanometers
pub const H_ALPHA_NM: f64 = 656.3;

// -------------------------------------------------------------------------------------------------
// Default parameter values
// -------------------------------------------------------------------------------------------------

/// Default stellar mass in solar masses
pub const DEFAULT_STAR_MASS: f64 = 1.0;

/// Default planetary mass in solar masses (Jupiter-like)
pub const DEFAULT_PLANET_MASS: f64 = 0.001;

/// Default distance of the star from the barycenter, in AU
pub const DEFAULT_STAR_DISTANCE: f64 = 0.5;

/// Default distance of the planet from the barycenter, in AU
pub const DEFAULT_PLANET_DISTANCE: f64 = 1.0;

/// Default maximum stellar radial velocity for the fixed-amplitude model, in km/s
pub const DEFAULT_MAX_VELOCITY: f64 = 30.0;

/// Default number of samples for spectral-line and light-curve sampling
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Mass in solar masses
pub type SolarMass = f64;
/// Distance in astronomical units
pub type Au = f64;
/// Planetary radius in Earth radii
pub type EarthRadius = f64;
/// Duration in days
pub type Day = f64;
/// Wavelength in nanometers
pub type Nanometer = f64;
/// Velocity in kilometers per second
pub type KmPerSec = f64;
