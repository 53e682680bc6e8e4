//! Uniform 1D spatial grid with ghost nodes
//!
//! The grid covers a physical domain [x_min, x_max] with uniform spacing dx,
//! padded on each side by a fixed number of ghost nodes. Ghost nodes extend
//! the coordinate line with the same spacing and exist solely so that the
//! update stencil can be applied uniformly near the domain edges.

use nalgebra::DVector;

use crate::error::SolverError;

/// Uniform spatial discretization of a 1D domain
///
/// # Layout
///
/// With `g` ghost nodes per side and `m` physical nodes, the grid holds
/// `m + 2g` coordinates:
///
/// ```text
/// index:  0 .. g-1 | g .. g+m-1 | g+m .. m+2g-1
///         ghosts   | physical   | ghosts
/// ```
///
/// Coordinates run from `x_min - g*dx` to `x_max + g*dx` with uniform
/// spacing. The grid is constructed once per run and never mutated.
#[derive(Debug, Clone)]
pub struct Grid {
    x_min: f64,
    x_max: f64,
    dx: f64,
    ghost: usize,
    coords: DVector<f64>,
}

impl Grid {
    /// Create a grid over `[x_min, x_max]` with spacing `dx` and `ghost`
    /// ghost nodes per side.
    ///
    /// The number of physical nodes is `round((x_max - x_min)/dx) + 1`;
    /// the domain length should be an integer multiple of `dx`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Configuration`] when `dx <= 0`, when the
    /// domain is degenerate (`x_min >= x_max`), or when `dx` is not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use drift_rs::physics::Grid;
    ///
    /// let grid = Grid::new(0.0, 1.0, 0.01, 1).unwrap();
    /// assert_eq!(grid.physical_nodes(), 101);
    /// assert_eq!(grid.nodes(), 103);
    /// assert!((grid.coord(0) + 0.01).abs() < 1e-12);
    /// ```
    pub fn new(x_min: f64, x_max: f64, dx: f64, ghost: usize) -> Result<Self, SolverError> {
        if !dx.is_finite() || dx <= 0.0 {
            return Err(SolverError::Configuration(format!(
                "Grid spacing must be positive and finite, got {}",
                dx
            )));
        }
        if x_min >= x_max {
            return Err(SolverError::Configuration(format!(
                "Degenerate domain: x_min {} must be below x_max {}",
                x_min, x_max
            )));
        }

        let spans = ((x_max - x_min) / dx).round() as usize;
        if spans == 0 {
            return Err(SolverError::Configuration(format!(
                "Spacing {} exceeds the domain length {}",
                dx,
                x_max - x_min
            )));
        }

        let total = spans + 1 + 2 * ghost;
        let coords = DVector::from_fn(total, |i, _| {
            x_min + (i as f64 - ghost as f64) * dx
        });

        Ok(Self {
            x_min,
            x_max,
            dx,
            ghost,
            coords,
        })
    }

    /// Total node count, ghost nodes included
    pub fn nodes(&self) -> usize {
        self.coords.len()
    }

    /// Number of nodes inside the physical domain
    pub fn physical_nodes(&self) -> usize {
        self.nodes() - 2 * self.ghost
    }

    /// Ghost nodes per side
    pub fn ghost_nodes(&self) -> usize {
        self.ghost
    }

    /// Uniform spacing dx
    pub fn spacing(&self) -> f64 {
        self.dx
    }

    /// Lower bound of the physical domain
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Upper bound of the physical domain
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Coordinate of node `j` (ghost nodes included)
    pub fn coord(&self, j: usize) -> f64 {
        self.coords[j]
    }

    /// All node coordinates, in index order
    pub fn coords(&self) -> &DVector<f64> {
        &self.coords
    }
}

// =================================================================================================
// Tests
// =================================================================================================
