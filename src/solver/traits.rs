//! Stepper trait, run configuration and result types
//!
//! # Design Philosophy
//!
//! The solver layer separates three concerns:
//!
//! 1. **Scenario** — WHAT to advance (model + grid + boundary policies +
//!    initial state), see [`crate::solver::Scenario`]
//! 2. **RunConfiguration** — HOW to advance it (dt, step count, snapshot
//!    cadence, finiteness checking)
//! 3. **Stepper** — the discrete update rule itself, one implementation
//!    per stencil, selected at configuration time
//!
//! The same scenario can run under different steppers, and the same stepper
//! under different scenarios.

use std::collections::HashMap;

use crate::error::SolverError;
use crate::physics::{FluxError, FluxModel, Grid, StateVector};

// =================================================================================================
// Stepper trait
// =================================================================================================

/// One explicit time-step of the discrete update rule
///
/// # Contract
///
/// `advance` must:
/// - evaluate the model's f, g, h once over the *entire* current state and
///   index the results with its stencil offsets (no per-node recomputation);
/// - write only interior nodes `w..n-w` (`w` = [`stencil_half_width`]) into
///   a **fresh** buffer, copying the edge bands unchanged — every output
///   node reads only time-n values, so no node ever sees a value already
///   overwritten for the next level;
/// - leave boundary correction entirely to the
///   [`BoundaryEnforcer`](crate::solver::BoundaryEnforcer).
///
/// [`stencil_half_width`]: Stepper::stencil_half_width
pub trait Stepper: Send + Sync {
    /// Widest node offset the update formula reads (1 for the classical
    /// three-point scheme, 2 for the staggered four-point scheme). Must
    /// equal the grid's ghost-node count.
    fn stencil_half_width(&self) -> usize;

    /// Compute the state at the next time level
    ///
    /// # Errors
    ///
    /// Propagates [`FluxError`] when a flux evaluation is undefined; the
    /// integrator attaches the step index.
    fn advance(
        &self,
        model: &dyn FluxModel,
        grid: &Grid,
        state: &StateVector,
        dt: f64,
    ) -> Result<StateVector, FluxError>;

    /// Name of the scheme (used for display and result metadata)
    fn name(&self) -> &str;
}

// =================================================================================================
// Run configuration
// =================================================================================================

/// Numerical parameters of one run
///
/// Immutable for the duration of a run. `dt` and the step count are
/// explicit inputs — nothing in the crate assumes a particular total time
/// or step budget.
///
/// # Example
///
/// ```rust
/// use drift_rs::solver::RunConfiguration;
///
/// let config = RunConfiguration::new(1e-7, 10_000).with_snapshots(1_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    /// Time step dt
    pub dt: f64,

    /// Total number of steps N
    pub steps: usize,

    /// Record a snapshot every K steps (None: keep only the final state)
    pub snapshot_every: Option<usize>,

    /// Check finiteness after every step and stop on divergence
    /// (default: true)
    pub check_finite: bool,
}

impl RunConfiguration {
    /// Create a configuration with the given time step and step count
    pub fn new(dt: f64, steps: usize) -> Self {
        Self {
            dt,
            steps,
            snapshot_every: None,
            check_finite: true,
        }
    }

    /// Record a snapshot every `every` steps (plus the initial state)
    pub fn with_snapshots(mut self, every: usize) -> Self {
        self.snapshot_every = Some(every);
        self
    }

    /// Disable the per-step finiteness check
    ///
    /// Divergence then surfaces as non-finite values in the final state
    /// instead of a [`RunOutcome::Diverged`] outcome.
    pub fn without_finite_check(mut self) -> Self {
        self.check_finite = false;
        self
    }

    /// Validate that the parameters are numerically meaningful
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SolverError::Configuration(format!(
                "Time step must be positive and finite, got {}",
                self.dt
            )));
        }
        if self.steps == 0 {
            return Err(SolverError::Configuration(
                "Step count must be greater than 0".to_string(),
            ));
        }
        if self.snapshot_every == Some(0) {
            return Err(SolverError::Configuration(
                "Snapshot cadence must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Run outcome and result
// =================================================================================================

/// Terminal state of a run
///
/// Divergence is a property of the chosen dt/dx, not a transient fault, so
/// it is reported as an outcome rather than retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All N steps completed with finite state
    Completed,

    /// Non-finite values appeared at `at_step`; the result keeps the last
    /// valid state
    Diverged {
        /// First step whose update produced non-finite values (1-based)
        at_step: usize,
    },
}

/// Result of a time-integration run
///
/// Holds the retained `(time, state)` snapshots in step order, the last
/// valid state, the terminal outcome and string metadata describing how the
/// run was produced.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Times of the retained snapshots, in step order
    pub time_points: Vec<f64>,

    /// Retained state snapshots, aligned with `time_points`
    pub snapshots: Vec<StateVector>,

    /// Last valid state (final state when completed, the state just before
    /// divergence otherwise)
    pub final_state: StateVector,

    /// How the run terminated
    pub outcome: RunOutcome,

    /// Diagnostic metadata (scheme name, dt, step count, ...)
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    /// Build a result from snapshots and the terminal state
    pub fn new(
        time_points: Vec<f64>,
        snapshots: Vec<StateVector>,
        final_state: StateVector,
        outcome: RunOutcome,
    ) -> Self {
        Self {
            time_points,
            snapshots,
            final_state,
            outcome,
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry for diagnostics and reproducibility
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Number of retained snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when no snapshot was retained
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// True when the run stopped on non-finite values
    pub fn is_diverged(&self) -> bool {
        matches!(self.outcome, RunOutcome::Diverged { .. })
    }

    /// Convert a diverged outcome into [`SolverError::Instability`]
    ///
    /// For callers that treat exceeding the stability bound as an error
    /// rather than an inspectable outcome.
    pub fn ensure_completed(&self) -> Result<(), SolverError> {
        match self.outcome {
            RunOutcome::Completed => Ok(()),
            RunOutcome::Diverged { at_step } => Err(SolverError::Instability { step: at_step }),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
