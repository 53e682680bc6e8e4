//! Coupled carrier-pair model
//!
//! A simplified drift-diffusion semiconductor model for a hole/electron
//! density pair y = (p, n). In the generalized conservation-law form
//!
//! ```text
//! dy/dt + d/dx( g(y) * dh(y)/dx ) = f(y)
//! ```
//!
//! the three flux functions are, for both rows:
//!
//! - `f(y) = n_i^2 - p*n + G`   (net recombination/generation)
//! - `g_p = p`, `g_n = n`       (mobility proportional to the density)
//! - `h_p = 1/p`, `h_n = 1/n`   (reciprocal quasi-potential)
//!
//! The reciprocal makes depletion (a density reaching exactly zero) an
//! undefined evaluation; the model reports the offending component and node
//! rather than hiding the singularity.
//!
//! # Example
//!
//! ```rust
//! use drift_rs::models::CarrierPair;
//! use drift_rs::physics::{FluxModel, Grid, StateVector};
//!
//! let model = CarrierPair::new(0.1, 0.1);
//! let grid = Grid::new(0.0, 1.0, 0.05, 2).unwrap();
//!
//! // Uniform densities at the recombination equilibrium p*n = n_i^2 + G
//! let density = (0.1_f64 * 0.1 + 0.1).sqrt();
//! let state = StateVector::uniform(&grid, 2, density);
//!
//! let f = model.source(&state);
//! assert!(f[(0, 3)].abs() < 1e-12);
//! ```

use crate::physics::{FluxError, FluxModel, StateVector};

/// Hole/electron pair with recombination source and reciprocal potential
///
/// Row 0 is the hole density p, row 1 the electron density n.
#[derive(Debug, Clone, Copy)]
pub struct CarrierPair {
    /// Intrinsic carrier density n_i
    intrinsic: f64,
    /// Uniform generation rate G
    generation: f64,
}

/// Hole-density row index
pub const HOLES: usize = 0;
/// Electron-density row index
pub const ELECTRONS: usize = 1;

impl CarrierPair {
    /// Create a carrier-pair model with intrinsic density `n_i` and
    /// generation rate `G`.
    ///
    /// # Panics
    ///
    /// Panics when `n_i` is negative; a negative intrinsic density has no
    /// physical meaning.
    pub fn new(intrinsic: f64, generation: f64) -> Self {
        assert!(
            intrinsic >= 0.0,
            "Intrinsic density must be non-negative, got {}",
            intrinsic
        );
        Self {
            intrinsic,
            generation,
        }
    }

    /// Intrinsic carrier density n_i
    pub fn intrinsic(&self) -> f64 {
        self.intrinsic
    }

    /// Generation rate G
    pub fn generation(&self) -> f64 {
        self.generation
    }

    /// Density at which the source term vanishes for a uniform state:
    /// p = n = sqrt(n_i^2 + G)
    pub fn equilibrium_density(&self) -> f64 {
        (self.intrinsic * self.intrinsic + self.generation).sqrt()
    }
}

impl FluxModel for CarrierPair {
    fn components(&self) -> usize {
        2
    }

    fn source(&self, state: &StateVector) -> StateVector {
        // f = n_i^2 - p*n + G, identical for both rows: recombination is
        // pairwise, so holes and electrons gain and lose together.
        let ni2 = self.intrinsic * self.intrinsic;
        let gen = self.generation;
        state.map_with(|_c, j, _v| ni2 - state[(HOLES, j)] * state[(ELECTRONS, j)] + gen)
    }

    fn mobility(&self, state: &StateVector) -> StateVector {
        // g is the density itself, row by row
        state.clone()
    }

    fn potential(&self, state: &StateVector) -> Result<StateVector, FluxError> {
        state.try_map_with(|c, j, value| {
            if value == 0.0 {
                Err(FluxError { component: c, node: j })
            } else {
                Ok(1.0 / value)
            }
        })
    }

    fn name(&self) -> &str {
        "Carrier pair"
    }

    fn description(&self) -> Option<&str> {
        Some("Coupled hole/electron drift-diffusion with pairwise recombination")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
