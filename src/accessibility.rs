// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! Per-atom sample spheres and point occlusion.
//!
//! Every atom carries two spheres built from the same unit points: its van der
//! Waals sphere, which other atoms are tested against, and its probe sphere
//! (van der Waals radius plus probe radius), whose points are the samples being
//! classified. A probe point is occluded when some point of another atom's van
//! der Waals sphere lies strictly closer than the probe radius.

use nalgebra::Point3;

use crate::neighbors::select_neighbors;
use crate::sphere_points::SpiralSphere;
use crate::types::Atom;

/// Both sample spheres of one atom. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSpheres {
    /// Points at the van der Waals radius.
    pub vdw: Vec<Point3<f64>>,
    /// Points at the van der Waals radius plus the probe radius.
    pub probe: Vec<Point3<f64>>,
}

impl AtomSpheres {
    #[must_use]
    pub fn new(unit: &SpiralSphere, atom: &Atom, probe_radius: f64) -> Self {
        Self {
            vdw: unit.points_on_sphere(atom.position, atom.radius).collect(),
            probe: unit
                .points_on_sphere(atom.position, atom.radius + probe_radius)
                .collect(),
        }
    }
}

/// Accessibility flag per probe point. Flags start accessible and can only be
/// cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessibilityMask {
    flags: Vec<bool>,
}

impl AccessibilityMask {
    /// Mask with `n` accessible points.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            flags: vec![true; n],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    #[must_use]
    pub fn is_accessible(&self, i: usize) -> bool {
        self.flags[i]
    }

    /// Mark point `i` as occluded.
    pub fn occlude(&mut self, i: usize) {
        self.flags[i] = false;
    }

    #[must_use]
    pub fn accessible_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }
}

/// Slack on the reach test; sample points carry rounding from scaling.
const REACH_SLACK: f64 = 1e-9;

/// Whether `other` can occlude any probe point of `target` at all.
///
/// Probe points sit at `r_target + probe` from their center and van der Waals
/// points at `r_other`, so no pair comes within `probe` once the centers are
/// `r_target + r_other + 2 * probe` apart.
#[inline]
fn can_reach(target: &Atom, other: &Atom, probe_radius: f64) -> bool {
    let reach = 2.0f64.mul_add(probe_radius, target.radius + other.radius);
    nalgebra::distance(&target.position, &other.position) < reach + REACH_SLACK
}

/// Whether any point of `vdw` lies strictly within `probe_radius` of `point`.
#[inline]
fn is_occluded_by(point: &Point3<f64>, vdw: &[Point3<f64>], probe_radius: f64) -> bool {
    vdw.iter()
        .any(|q| nalgebra::distance(point, q) < probe_radius)
}

/// Clear the flags of `atoms[target]`'s probe points that other atoms occlude.
///
/// Only the candidates chosen by [`select_neighbors`] with `neighbor_count` are
/// tested, and the target is always skipped. Candidates too far away to reach
/// any probe point are dropped before the point scan. Points already cleared in
/// `mask` are not tested again, so calling this repeatedly is harmless.
///
/// # Panics
/// Panics if `mask` and the target's probe sphere differ in length.
pub fn mark_accessible_points(
    target: usize,
    atoms: &[Atom],
    spheres: &[AtomSpheres],
    neighbor_count: usize,
    probe_radius: f64,
    mask: &mut AccessibilityMask,
) {
    let probe_points = &spheres[target].probe;
    assert_eq!(
        mask.len(),
        probe_points.len(),
        "mask and probe sphere of atom {target} differ in size"
    );

    let candidates: Vec<usize> = select_neighbors(target, atoms, neighbor_count)
        .into_iter()
        .filter(|&other| {
            other != target && can_reach(&atoms[target], &atoms[other], probe_radius)
        })
        .collect();

    for (i, point) in probe_points.iter().enumerate() {
        if !mask.is_accessible(i) {
            continue;
        }

        for &other in &candidates {
            if is_occluded_by(point, &spheres[other].vdw, probe_radius) {
                mask.occlude(i);
                break;
            }
        }
    }
}

/// Evaluate one atom from a fresh, fully accessible mask.
#[must_use]
pub fn evaluate_atom(
    target: usize,
    atoms: &[Atom],
    spheres: &[AtomSpheres],
    neighbor_count: usize,
    probe_radius: f64,
) -> AccessibilityMask {
    let mut mask = AccessibilityMask::new(spheres[target].probe.len());
    mark_accessible_points(
        target,
        atoms,
        spheres,
        neighbor_count,
        probe_radius,
        &mut mask,
    );
    mask
}
