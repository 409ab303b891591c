//! Easing curves and range interpolation.

/// Easing curves.
pub mod ease;
/// Two-point interpolation with extrapolation modes.
pub mod interpolate;
