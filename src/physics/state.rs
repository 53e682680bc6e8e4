//! Multi-component field state aligned with the grid
//!
//! [`StateVector`] holds one row per physical component (p and n for the
//! carrier pair, a single row for scalar diffusion), each row aligned
//! one-to-one with the grid nodes, ghost nodes included. The solver mutates
//! it once per time step; output collaborators only read it.

use nalgebra::DMatrix;

use crate::physics::Grid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Two-dimensional field state: component rows by grid-node columns
///
/// # Invariants
///
/// - Every row has exactly as many entries as the grid has nodes.
/// - All values stay finite for a valid run; NaN/Inf marks a diverged
///   simulation, which is a terminal condition, not something to mask.
///
/// # Example
///
/// ```rust
/// use drift_rs::physics::{Grid, StateVector};
///
/// let grid = Grid::new(0.0, 1.0, 0.25, 0).unwrap();
/// let state = StateVector::from_profile(&grid, 1, |_c, x| x * (1.0 - x));
///
/// assert_eq!(state.components(), 1);
/// assert_eq!(state.nodes(), grid.nodes());
/// assert!((state[(0, 2)] - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    data: DMatrix<f64>,
}

impl StateVector {
    /// Build a state from a per-component initial profile of the node
    /// coordinate. The closure receives `(component, x)` and is evaluated
    /// on every node, ghost nodes included.
    pub fn from_profile<F>(grid: &Grid, components: usize, profile: F) -> Self
    where
        F: Fn(usize, f64) -> f64,
    {
        let data = DMatrix::from_fn(components, grid.nodes(), |c, j| profile(c, grid.coord(j)));
        Self { data }
    }

    /// Build a uniform state (every node of every component at `value`)
    pub fn uniform(grid: &Grid, components: usize, value: f64) -> Self {
        Self {
            data: DMatrix::from_element(components, grid.nodes(), value),
        }
    }

    /// Wrap an existing matrix (component rows by node columns)
    pub fn from_matrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    /// Number of component rows
    pub fn components(&self) -> usize {
        self.data.nrows()
    }

    /// Number of grid nodes per row
    pub fn nodes(&self) -> usize {
        self.data.ncols()
    }

    /// Read-only access to the underlying matrix
    pub fn data(&self) -> &DMatrix<f64> {
        &self.data
    }

    /// Copy one component row out as a plain vector (for plotting, export)
    pub fn component(&self, c: usize) -> Vec<f64> {
        self.data.row(c).iter().copied().collect()
    }

    /// True when every value in every row is finite
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Largest absolute value across all components and nodes
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Discrete integral of one component over the physical nodes: sum of
    /// the non-ghost values times dx. Ghost bands are excluded so that the
    /// duplicated edge values of a zero-flux run do not inflate the total.
    pub fn mass(&self, c: usize, grid: &Grid) -> f64 {
        let w = grid.ghost_nodes();
        let row = self.data.row(c);
        row.iter()
            .skip(w)
            .take(self.nodes() - 2 * w)
            .sum::<f64>()
            * grid.spacing()
    }

    /// Apply an elementwise function, returning a new state
    ///
    /// Switches to Rayon when the element count exceeds the solver's
    /// parallel threshold and the crate is built with the `parallel`
    /// feature.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        self.map_with(|_c, _j, v| f(v))
    }

    /// Apply an indexed elementwise function `(component, node, value)`,
    /// returning a new state
    ///
    /// The workhorse of flux evaluation: models compute their f, g, h
    /// through this, so the `parallel` feature accelerates every model
    /// uniformly once the state outgrows the solver's threshold.
    pub fn map_with<F>(&self, f: F) -> Self
    where
        F: Fn(usize, usize, f64) -> f64 + Sync + Send,
    {
        let rows = self.components();
        let mut data = self.data.clone();

        // Column-major storage: element i sits at component i % rows,
        // node i / rows.
        #[cfg(feature = "parallel")]
        {
            if data.len() > crate::solver::parallel_threshold() {
                data.as_mut_slice()
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(i, v)| *v = f(i % rows, i / rows, *v));
                return Self::from_matrix(data);
            }
        }

        data.as_mut_slice()
            .iter_mut()
            .enumerate()
            .for_each(|(i, v)| *v = f(i % rows, i / rows, *v));
        Self::from_matrix(data)
    }

    /// Fallible variant of [`map_with`](Self::map_with)
    ///
    /// Stops at the first error in the sequential path; under `parallel`
    /// some error is returned but not necessarily the lowest-indexed one.
    pub fn try_map_with<F, E>(&self, f: F) -> Result<Self, E>
    where
        F: Fn(usize, usize, f64) -> Result<f64, E> + Sync + Send,
        E: Send,
    {
        let rows = self.components();
        let mut data = self.data.clone();

        #[cfg(feature = "parallel")]
        {
            if data.len() > crate::solver::parallel_threshold() {
                data.as_mut_slice()
                    .par_iter_mut()
                    .enumerate()
                    .try_for_each(|(i, v)| {
                        *v = f(i % rows, i / rows, *v)?;
                        Ok(())
                    })?;
                return Ok(Self::from_matrix(data));
            }
        }

        for (i, v) in data.as_mut_slice().iter_mut().enumerate() {
            *v = f(i % rows, i / rows, *v)?;
        }
        Ok(Self::from_matrix(data))
    }
}

impl std::ops::Index<(usize, usize)> for StateVector {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.data[index]
    }
}

impl std::ops::IndexMut<(usize, usize)> for StateVector {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        &mut self.data[index]
    }
}

impl std::fmt::Display for StateVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StateVector [{} x {}]",
            self.components(),
            self.nodes()
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
