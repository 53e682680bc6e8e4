//! Error kinds shared across the crate
//!
//! Three failure classes exist, and they are deliberately kept distinct:
//!
//! - **Configuration**: invalid setup parameters (spacing, time step, step
//!   count, domain). Fatal, reported before any stepping begins.
//! - **Singularity**: a flux evaluation met an undefined operation, e.g. the
//!   reciprocal of a zero carrier density. Reported with step, component and
//!   node index; the run aborts.
//! - **Instability**: state values became non-finite. This is the expected,
//!   documented outcome of violating the explicit scheme's stability bound,
//!   not a bug to suppress; the last valid state is retained.
//!
//! There is no retry or automatic step-size adaptation anywhere: recovery
//! (re-running with a smaller dt) is a user decision.

use thiserror::Error;

/// Error type for run setup and time integration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Invalid setup parameter, detected before stepping begins
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A flux evaluation hit an undefined operation mid-run
    #[error(
        "Numerical singularity at step {step}: component {component}, node {node} \
         hit an undefined flux value (zero denominator)"
    )]
    Singularity {
        /// Time step at which evaluation failed (1-based)
        step: usize,
        /// Component row of the offending value
        component: usize,
        /// Grid node of the offending value
        node: usize,
    },

    /// Non-finite state values appeared; the scheme's stability bound was
    /// exceeded for the chosen dt/dx
    #[error(
        "Instability detected at step {step}: state is no longer finite. \
         Try reducing the time step."
    )]
    Instability {
        /// First step at which the state stopped being finite (1-based)
        step: usize,
    },
}
