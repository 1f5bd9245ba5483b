// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! Candidate occluders for one atom.

use crate::types::Atom;

/// Select the atoms that will be tested as occluders of `atoms[target]`.
///
/// With `k == 0` every index is returned in input order. Otherwise all atoms are
/// ranked by center distance to the target and the first `k` are returned. The
/// sort is stable, so equidistant atoms keep their input order. The target itself
/// is ranked too (at distance zero) and is left for the caller to skip.
///
/// Ranking by center distance is an approximation: a large atom whose center is
/// beyond the cut-off can still reach the target's probe points.
#[must_use]
pub fn select_neighbors(target: usize, atoms: &[Atom], k: usize) -> Vec<usize> {
    if k == 0 {
        return (0..atoms.len()).collect();
    }

    let center = atoms[target].position;
    let mut ranked: Vec<(f64, usize)> = atoms
        .iter()
        .enumerate()
        .map(|(i, a)| (nalgebra::distance(&center, &a.position), i))
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranked.truncate(k);
    ranked.into_iter().map(|(_, i)| i).collect()
}
