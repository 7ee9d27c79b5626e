mod angle;
pub mod constants;
pub mod exosim;
pub mod exosim_errors;
pub mod orbit_state;
pub mod physical_system;
pub mod radial_velocity;
pub mod spectral_line;
pub mod transit;
