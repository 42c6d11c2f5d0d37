//! Equation of state collaborator. The geometry engine only needs the adiabatic index.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EosError {
    #[error("adiabatic index must be finite and greater than one, found {0}")]
    InvalidGamma(f64),
}

pub trait EquationOfState {
    /// Ratio of specific heats γ.
    fn gamma(&self) -> f64;

    /// Relativistic enthalpy density `ρh = ρ + γ/(γ-1) p`.
    fn enthalpy_density(&self, rho: f64, pgas: f64) -> f64 {
        let gamma = self.gamma();
        rho + gamma / (gamma - 1.0) * pgas
    }
}

/// An ideal gas with constant adiabatic index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealGas {
    gamma: f64,
}

impl IdealGas {
    pub fn new(gamma: f64) -> Result<Self, EosError> {
        if !gamma.is_finite() || gamma <= 1.0 {
            return Err(EosError::InvalidGamma(gamma));
        }

        Ok(Self { gamma })
    }
}

impl EquationOfState for IdealGas {
    fn gamma(&self) -> f64 {
        self.gamma
    }
}
