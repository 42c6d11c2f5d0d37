//! Channel layout of primitive, conserved, flux, and metric images.

/// Density (primitive), rest mass (conserved), or its flux.
pub const IDN: usize = 0;
/// x1 velocity (primitive).
pub const IVX: usize = 1;
/// x2 velocity (primitive).
pub const IVY: usize = 2;
/// x3 velocity (primitive).
pub const IVZ: usize = 3;
/// Gas pressure (primitive), energy (conserved), or its flux.
pub const IEN: usize = 4;
/// First tangential magnetic field component.
pub const IBY: usize = 5;
/// Second tangential magnetic field component.
pub const IBZ: usize = 6;

/// x1 momentum.
pub const IM1: usize = IVX;
/// x2 momentum.
pub const IM2: usize = IVY;
/// x3 momentum.
pub const IM3: usize = IVZ;

/// Velocity channels indexed by axis.
pub const VELOCITY: [usize; 3] = [IVX, IVY, IVZ];
/// Momentum channels indexed by axis.
pub const MOMENTUM: [usize; 3] = [IM1, IM2, IM3];

/// Channels of a hydrodynamic state.
pub const NHYDRO: usize = 5;
/// Channels of a magnetohydrodynamic state (hydro plus two tangential fields).
pub const NMHD: usize = 7;

/// Metric component channels.
pub const I00: usize = 0;
pub const I11: usize = 1;
pub const I12: usize = 2;
pub const I22: usize = 3;
pub const I33: usize = 4;
/// Number of independent metric components stored per location.
pub const NMETRIC: usize = 5;
