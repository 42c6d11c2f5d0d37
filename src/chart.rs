//! The sinusoidal ("snake") chart of flat spacetime.
//!
//! In chart coordinates `(t, x, y, z)` the line element is
//!
//! ```text
//! ds² = -dt² + α² dx² - 2β dx dy + dy² + dz²
//! α² = 1 + a²k² cos²(kx),  β = ak cos(kx)
//! ```
//!
//! which is Minkowski space under the shear `y = y_m + a sin(k x_m)`.

use thiserror::Error;

/// Error raised when validating chart parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("chart amplitude must be finite, found {0}")]
    NonFiniteAmplitude(f64),
    #[error("chart wavenumber must be finite and positive, found {0}")]
    InvalidWavenumber(f64),
    #[error("product of amplitude {amplitude} and wavenumber {wavenumber} is not finite")]
    NonFiniteShear { amplitude: f64, wavenumber: f64 },
}

/// Metric coefficients `(α², β)` at a single position. Every other component of the
/// metric and its inverse follows from these two numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MetricPair {
    pub alpha_sq: f64,
    pub beta: f64,
}

impl MetricPair {
    pub fn alpha(&self) -> f64 {
        self.alpha_sq.sqrt()
    }
}

/// A validated snake chart with amplitude `a` and wavenumber `k`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chart {
    amplitude: f64,
    wavenumber: f64,
}

impl Chart {
    pub fn new(amplitude: f64, wavenumber: f64) -> Result<Self, ChartError> {
        if !amplitude.is_finite() {
            return Err(ChartError::NonFiniteAmplitude(amplitude));
        }

        if !wavenumber.is_finite() || wavenumber <= 0.0 {
            return Err(ChartError::InvalidWavenumber(wavenumber));
        }

        let shear = amplitude * wavenumber;
        if !(shear * shear).is_finite() {
            return Err(ChartError::NonFiniteShear {
                amplitude,
                wavenumber,
            });
        }

        Ok(Self {
            amplitude,
            wavenumber,
        })
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn wavenumber(&self) -> f64 {
        self.wavenumber
    }

    /// `a²k²`, the maximum of `α² - 1`.
    fn shear_sq(&self) -> f64 {
        let shear = self.amplitude * self.wavenumber;
        shear * shear
    }

    pub fn alpha_sq(&self, x: f64) -> f64 {
        let cos = (self.wavenumber * x).cos();
        1.0 + self.shear_sq() * cos * cos
    }

    pub fn alpha(&self, x: f64) -> f64 {
        self.alpha_sq(x).sqrt()
    }

    pub fn beta(&self, x: f64) -> f64 {
        self.amplitude * self.wavenumber * (self.wavenumber * x).cos()
    }

    pub fn metric_pair(&self, x: f64) -> MetricPair {
        MetricPair {
            alpha_sq: self.alpha_sq(x),
            beta: self.beta(x),
        }
    }

    /// Effective width of the cell `[x_m, x_p]`, the exact integral
    /// `∫ α² dx / (1 + a²k²)`. Reduces to `x_p - x_m` for a flat chart and never exceeds it.
    pub fn width(&self, x_m: f64, x_p: f64) -> f64 {
        let k = self.wavenumber;
        let ak2 = self.shear_sq();
        let sin_m = (2.0 * k * x_m).sin();
        let sin_p = (2.0 * k * x_p).sin();

        (2.0 * (2.0 + ak2) * (x_p - x_m) + self.amplitude * self.amplitude * k * (sin_p - sin_m))
            / (4.0 * (1.0 + ak2))
    }

    /// Finite difference `(β(x_m) - β(x_p)) / (x_p - x_m)`, the connection coefficient
    /// that sources x1 momentum.
    pub fn source_coefficient(&self, x_m: f64, x_p: f64) -> f64 {
        (self.beta(x_m) - self.beta(x_p)) / (x_p - x_m)
    }

    /// Maps chart coordinates to Minkowski (cartesian) coordinates.
    pub fn to_minkowski(&self, [x1, x2, x3]: [f64; 3]) -> [f64; 3] {
        [x1, x2 - self.amplitude * (self.wavenumber * x1).sin(), x3]
    }

    /// Maps Minkowski coordinates back into the chart.
    pub fn from_minkowski(&self, [x, y, z]: [f64; 3]) -> [f64; 3] {
        [x, y + self.amplitude * (self.wavenumber * x).sin(), z]
    }

    /// Euclidean distance between a point `a` in chart coordinates and a point `b` already
    /// in Minkowski coordinates.
    pub fn distance_between_points(&self, a: [f64; 3], b: [f64; 3]) -> f64 {
        let a = self.to_minkowski(a);
        (0..3).map(|i| (a[i] - b[i]).powi(2)).sum::<f64>().sqrt()
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            amplitude: 10.0,
            wavenumber: 0.1,
        }
    }
}
