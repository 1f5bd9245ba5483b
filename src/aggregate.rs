// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! Accessible point counts to surface areas: per atom, per residue, per structure.

use std::f64::consts::PI;

use crate::accessibility::AccessibilityMask;
use crate::types::{Atom, AtomSurface, Residue, ResidueSurface, SurfaceTotals};

/// Nominal sphere surface 4πr².
#[must_use]
pub fn sphere_surface(radius: f64) -> f64 {
    4.0 * PI * radius * radius
}

/// `100 * part / total`, or 0 when `total` is not positive.
#[must_use]
pub fn percentage(part: f64, total: f64) -> f64 {
    if total > 0.0 { 100.0 * part / total } else { 0.0 }
}

/// Surface of one atom from its final mask.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn atom_surface(index: usize, atom: &Atom, mask: AccessibilityMask) -> AtomSurface {
    let surface = sphere_surface(atom.radius);
    let total_points = mask.len();
    let accessible_points = mask.accessible_count();
    let accessible_surface = if total_points == 0 {
        0.0
    } else {
        surface * (accessible_points as f64 / total_points as f64)
    };

    AtomSurface {
        index,
        element: atom.element.clone(),
        residue: atom.residue.clone(),
        radius: atom.radius,
        surface,
        accessible_points,
        total_points,
        accessible_surface,
        mask,
    }
}

/// Totals of each residue, in residue order.
#[must_use]
pub fn residue_surfaces(residues: &[Residue], atoms: &[AtomSurface]) -> Vec<ResidueSurface> {
    residues
        .iter()
        .map(|residue| {
            let (surface_total, accessible_surface_total) =
                residue
                    .atoms
                    .iter()
                    .fold((0.0, 0.0), |(surface, accessible), &i| {
                        (surface + atoms[i].surface, accessible + atoms[i].accessible_surface)
                    });

            ResidueSurface {
                residue: residue.id.clone(),
                atom_count: residue.atoms.len(),
                surface_total,
                accessible_surface_total,
                accessibility: percentage(accessible_surface_total, surface_total),
            }
        })
        .collect()
}

/// Totals over the whole structure, summed residue by residue.
#[must_use]
pub fn structure_totals(residues: &[ResidueSurface]) -> SurfaceTotals {
    let surface_total: f64 = residues.iter().map(|r| r.surface_total).sum();
    let accessible_surface_total: f64 = residues.iter().map(|r| r.accessible_surface_total).sum();

    SurfaceTotals {
        surface_total,
        accessible_surface_total,
        accessibility: percentage(accessible_surface_total, surface_total),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    use super::*;

    fn mask_with(n: usize, occluded: usize) -> AccessibilityMask {
        let mut mask = AccessibilityMask::new(n);
        for i in 0..occluded {
            mask.occlude(i);
        }
        mask
    }

    #[test]
    fn carbon_surface() {
        assert_relative_eq!(sphere_surface(1.7), 36.3168, epsilon = 1e-3);
        assert_relative_eq!(sphere_surface(0.0), 0.0);
    }

    #[test]
    fn zero_total_percentage() {
        assert_relative_eq!(percentage(0.0, 0.0), 0.0);
        assert_relative_eq!(percentage(5.0, 20.0), 25.0);
    }

    #[test]
    fn accessible_fraction_scales_surface() {
        let atom = Atom::new("C", "ALA1", Point3::origin(), 1.7);
        let s = atom_surface(0, &atom, mask_with(100, 25));
        assert_eq!(s.accessible_points, 75);
        assert_eq!(s.total_points, 100);
        assert_relative_eq!(s.accessible_surface, s.surface * 0.75, epsilon = 1e-12);
    }

    #[test]
    fn fully_buried_atom() {
        let atom = Atom::new("O", "ALA1", Point3::origin(), 1.52);
        let s = atom_surface(3, &atom, mask_with(40, 40));
        assert_eq!(s.index, 3);
        assert_eq!(s.accessible_points, 0);
        assert_relative_eq!(s.accessible_surface, 0.0);
    }

    #[test]
    fn residue_totals_are_sums() {
        let atoms = [
            Atom::new("C", "ALA1", Point3::origin(), 1.7),
            Atom::new("N", "GLY2", Point3::origin(), 1.55),
            Atom::new("O", "ALA1", Point3::origin(), 1.52),
        ];
        let surfaces = vec![
            atom_surface(0, &atoms[0], mask_with(10, 5)),
            atom_surface(1, &atoms[1], mask_with(10, 0)),
            atom_surface(2, &atoms[2], mask_with(10, 10)),
        ];
        let residues = vec![
            Residue {
                id: "ALA1".to_string(),
                atoms: vec![0, 2],
            },
            Residue {
                id: "GLY2".to_string(),
                atoms: vec![1],
            },
        ];

        let per_residue = residue_surfaces(&residues, &surfaces);
        assert_eq!(per_residue.len(), 2);

        let ala = &per_residue[0];
        assert_eq!(ala.atom_count, 2);
        assert_relative_eq!(ala.surface_total, surfaces[0].surface + surfaces[2].surface);
        assert_relative_eq!(ala.accessible_surface_total, surfaces[0].surface / 2.0);
        assert_relative_eq!(
            ala.accessibility,
            100.0 * ala.accessible_surface_total / ala.surface_total
        );

        let gly = &per_residue[1];
        assert_relative_eq!(gly.accessibility, 100.0, epsilon = 1e-12);

        let total = structure_totals(&per_residue);
        let atom_sum: f64 = surfaces.iter().map(|s| s.surface).sum();
        assert_relative_eq!(total.surface_total, atom_sum, epsilon = 1e-12);
    }

    #[test]
    fn zero_radius_residue_has_zero_percentage() {
        let atom = Atom::new("X", "UNK9", Point3::origin(), 0.0);
        let surfaces = vec![atom_surface(0, &atom, mask_with(10, 0))];
        let residues = vec![Residue {
            id: "UNK9".to_string(),
            atoms: vec![0],
        }];
        let per_residue = residue_surfaces(&residues, &surfaces);
        assert_relative_eq!(per_residue[0].accessibility, 0.0);
        assert_relative_eq!(structure_totals(&per_residue).accessibility, 0.0);
    }

    #[test]
    fn empty_structure_totals() {
        let total = structure_totals(&[]);
        assert_eq!(total, SurfaceTotals::default());
    }
}
