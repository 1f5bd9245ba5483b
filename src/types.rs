// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use nalgebra::Point3;
use serde::Serialize;

use crate::accessibility::AccessibilityMask;
use crate::input::radii::RadiusTable;

/// Input atom: identity and geometry, fixed for the whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Element symbol (e.g., "C", "N", "FE").
    pub element: String,
    /// Residue identifier: residue name followed by sequence number (e.g., "MET1").
    pub residue: String,
    /// Center in Ångströms.
    pub position: Point3<f64>,
    /// Van der Waals radius in Ångströms.
    pub radius: f64,
}

impl Atom {
    #[must_use]
    pub fn new(
        element: impl Into<String>,
        residue: impl Into<String>,
        position: Point3<f64>,
        radius: f64,
    ) -> Self {
        Self {
            element: element.into(),
            residue: residue.into(),
            position,
            radius,
        }
    }

    /// Build an atom whose radius is resolved from `radii` by element symbol.
    #[must_use]
    pub fn with_element_radius(
        element: impl Into<String>,
        residue: impl Into<String>,
        position: Point3<f64>,
        radii: &RadiusTable,
    ) -> Self {
        let element = element.into();
        let radius = radii.get_radius(&element);
        Self::new(element, residue, position, radius)
    }
}

/// Atoms sharing a residue identifier, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub id: String,
    /// Indices into the structure's atom list.
    pub atoms: Vec<usize>,
}

/// A molecule: ordered atoms plus their residue grouping.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    atoms: Vec<Atom>,
    residues: Vec<Residue>,
}

impl Structure {
    /// Group atoms by residue identifier. Residues are ordered by first appearance.
    #[must_use]
    pub fn new(atoms: Vec<Atom>) -> Self {
        let mut residue_index: HashMap<&str, usize> = HashMap::new();
        let mut residues: Vec<Residue> = Vec::new();

        for (i, atom) in atoms.iter().enumerate() {
            let slot = *residue_index.entry(&atom.residue).or_insert_with(|| {
                residues.push(Residue {
                    id: atom.residue.clone(),
                    atoms: Vec::new(),
                });
                residues.len() - 1
            });
            residues[slot].atoms.push(i);
        }

        Self { atoms, residues }
    }

    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    #[must_use]
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// Surface of one atom after evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomSurface {
    pub index: usize,
    pub element: String,
    pub residue: String,
    pub radius: f64,
    /// Nominal surface 4πr² (van der Waals radius, probe excluded).
    pub surface: f64,
    pub accessible_points: usize,
    pub total_points: usize,
    pub accessible_surface: f64,
    /// Final per-point accessibility of the probe sphere.
    #[serde(skip)]
    pub mask: AccessibilityMask,
}

/// Aggregated surface of one residue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResidueSurface {
    pub residue: String,
    pub atom_count: usize,
    pub surface_total: f64,
    pub accessible_surface_total: f64,
    /// 100 × accessible / total, or 0 for a zero total.
    pub accessibility: f64,
}

/// Aggregated surface of a whole structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SurfaceTotals {
    pub surface_total: f64,
    pub accessible_surface_total: f64,
    pub accessibility: f64,
}

/// Result of a run: per atom, per residue, and whole structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SasaResult {
    pub n_points: usize,
    pub neighbor_count: usize,
    pub probe_radius: f64,
    pub atoms: Vec<AtomSurface>,
    pub residues: Vec<ResidueSurface>,
    pub total: SurfaceTotals,
}

impl SasaResult {
    /// Accessible surface of every atom, in input order.
    #[must_use]
    pub fn accessible_surfaces(&self) -> Vec<f64> {
        self.atoms.iter().map(|a| a.accessible_surface).collect()
    }

    /// Accessible point count of every atom, in input order.
    #[must_use]
    pub fn accessible_point_counts(&self) -> Vec<usize> {
        self.atoms.iter().map(|a| a.accessible_points).collect()
    }

    #[must_use]
    pub fn residue(&self, id: &str) -> Option<&ResidueSurface> {
        self.residues.iter().find(|r| r.residue == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(residue: &str) -> Atom {
        Atom::new("C", residue, Point3::origin(), 1.7)
    }

    #[test]
    fn residues_in_first_appearance_order() {
        let structure = Structure::new(vec![
            atom("MET1"),
            atom("MET1"),
            atom("ALA2"),
            atom("MET1"),
            atom("GLY3"),
        ]);

        let ids: Vec<&str> = structure.residues().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["MET1", "ALA2", "GLY3"]);
        assert_eq!(structure.residues()[0].atoms, vec![0, 1, 3]);
        assert_eq!(structure.residues()[1].atoms, vec![2]);
        assert_eq!(structure.residues()[2].atoms, vec![4]);
    }

    #[test]
    fn empty_structure() {
        let structure = Structure::new(Vec::new());
        assert!(structure.is_empty());
        assert!(structure.residues().is_empty());
    }

    #[test]
    fn radius_from_table() {
        let radii = RadiusTable::new();
        let n = Atom::with_element_radius("N", "ALA2", Point3::new(1.0, 2.0, 3.0), &radii);
        assert!((n.radius - 1.55).abs() < 1e-12);
        let unknown = Atom::with_element_radius("Q", "ALA2", Point3::origin(), &radii);
        assert!((unknown.radius - 2.0).abs() < 1e-12);
    }
}
