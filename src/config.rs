// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! Run parameters for a Shrake-Rupley computation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SasaError};
use crate::input::radii::OXYGEN_RADIUS;

/// Default number of sample points per atom sphere.
pub const DEFAULT_POINTS: usize = 100;

/// Parameters shared by every atom in a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SasaConfig {
    /// Sample points per atom sphere (N). Must be at least 1.
    pub n_points: usize,
    /// Number of nearest atoms considered as occluders (k). Zero means all atoms.
    pub neighbor_count: usize,
    /// Solvent probe radius in Ångströms, added to every van der Waals radius.
    pub probe_radius: f64,
}

impl Default for SasaConfig {
    fn default() -> Self {
        Self {
            n_points: DEFAULT_POINTS,
            neighbor_count: 0,
            probe_radius: OXYGEN_RADIUS,
        }
    }
}

impl SasaConfig {
    #[must_use]
    pub const fn new(n_points: usize, neighbor_count: usize) -> Self {
        Self {
            n_points,
            neighbor_count,
            probe_radius: OXYGEN_RADIUS,
        }
    }

    #[must_use]
    pub const fn with_points(mut self, n_points: usize) -> Self {
        self.n_points = n_points;
        self
    }

    #[must_use]
    pub const fn with_neighbors(mut self, neighbor_count: usize) -> Self {
        self.neighbor_count = neighbor_count;
        self
    }

    #[must_use]
    pub const fn with_probe_radius(mut self, probe_radius: f64) -> Self {
        self.probe_radius = probe_radius;
        self
    }

    /// Check that the parameters describe a computable run.
    ///
    /// # Errors
    /// Returns [`SasaError::InvalidConfiguration`] if `n_points` is zero or the
    /// probe radius is negative, NaN, or infinite.
    pub fn validate(&self) -> Result<()> {
        if self.n_points == 0 {
            return Err(SasaError::InvalidConfiguration(
                "number of sphere points must be positive".to_string(),
            ));
        }
        if !self.probe_radius.is_finite() || self.probe_radius < 0.0 {
            return Err(SasaError::InvalidConfiguration(format!(
                "probe radius {} must be non-negative and finite",
                self.probe_radius
            )));
        }
        Ok(())
    }
}
