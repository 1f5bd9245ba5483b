// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

use log::{debug, info};
use rayon::prelude::*;

use crate::accessibility::{AtomSpheres, evaluate_atom};
use crate::aggregate::{atom_surface, residue_surfaces, structure_totals};
use crate::config::SasaConfig;
use crate::error::Result;
use crate::sphere_points::SpiralSphere;
use crate::types::{AtomSurface, SasaResult, Structure};

/// Main entry point: compute per-atom, per-residue and total accessible surface.
///
/// Geometry for every atom is built before evaluation starts; atoms are then
/// evaluated in parallel, each writing only its own mask. Results come back in
/// input order and do not depend on the thread count.
///
/// # Errors
/// Returns [`crate::SasaError::InvalidConfiguration`] if `config` fails validation.
pub fn compute_sasa(structure: &Structure, config: &SasaConfig) -> Result<SasaResult> {
    config.validate()?;

    let unit = SpiralSphere::new(config.n_points);
    let atoms = structure.atoms();
    debug!(
        "Evaluating {} atoms with {} points, k = {}, probe = {}",
        atoms.len(),
        config.n_points,
        config.neighbor_count,
        config.probe_radius
    );

    let spheres: Vec<AtomSpheres> = atoms
        .par_iter()
        .map(|atom| AtomSpheres::new(&unit, atom, config.probe_radius))
        .collect();

    let atom_surfaces: Vec<AtomSurface> = (0..atoms.len())
        .into_par_iter()
        .map(|i| {
            let mask = evaluate_atom(
                i,
                atoms,
                &spheres,
                config.neighbor_count,
                config.probe_radius,
            );
            atom_surface(i, &atoms[i], mask)
        })
        .collect();

    let residues = residue_surfaces(structure.residues(), &atom_surfaces);
    let total = structure_totals(&residues);

    info!(
        "Accessible surface {:.1} of {:.1} Å² ({:.1}%) over {} residues",
        total.accessible_surface_total,
        total.surface_total,
        total.accessibility,
        residues.len()
    );

    Ok(SasaResult {
        n_points: config.n_points,
        neighbor_count: config.neighbor_count,
        probe_radius: config.probe_radius,
        atoms: atom_surfaces,
        residues,
        total,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    use super::*;
    use crate::SasaError;
    use crate::types::Atom;

    #[test]
    fn single_carbon_scenario() {
        let structure = Structure::new(vec![Atom::new("C", "ALA1", Point3::origin(), 1.7)]);
        let result = compute_sasa(&structure, &SasaConfig::new(100, 0)).unwrap();

        assert_eq!(result.atoms.len(), 1);
        assert_eq!(result.atoms[0].accessible_points, 100);
        assert_relative_eq!(result.atoms[0].surface, 36.32, epsilon = 0.01);
        assert_relative_eq!(result.atoms[0].accessible_surface, 36.32, epsilon = 0.01);
        assert_relative_eq!(result.total.accessibility, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_structure() {
        let result = compute_sasa(&Structure::default(), &SasaConfig::default()).unwrap();
        assert!(result.atoms.is_empty());
        assert!(result.residues.is_empty());
        assert_relative_eq!(result.total.accessibility, 0.0);
    }

    #[test]
    fn zero_points_fails_before_geometry() {
        let structure = Structure::new(vec![Atom::new("C", "ALA1", Point3::origin(), 1.7)]);
        assert!(matches!(
            compute_sasa(&structure, &SasaConfig::new(0, 0)),
            Err(SasaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn diatomic_is_symmetric() {
        let structure = Structure::new(vec![
            Atom::new("C", "ALA1", Point3::new(-1.4, 0.0, 0.0), 1.7),
            Atom::new("C", "ALA1", Point3::new(1.4, 0.0, 0.0), 1.7),
        ]);
        let result = compute_sasa(&structure, &SasaConfig::new(400, 0)).unwrap();

        let a = result.atoms[0].accessible_surface;
        let b = result.atoms[1].accessible_surface;
        assert!(a < result.atoms[0].surface);
        // The spiral is not mirror-symmetric in x, so allow sampling noise.
        assert_relative_eq!(a, b, max_relative = 0.1);
        assert_eq!(result.residues.len(), 1);
        assert_relative_eq!(result.residues[0].accessible_surface_total, a + b, epsilon = 1e-9);
    }

    #[test]
    fn thread_count_does_not_change_result() {
        let atoms: Vec<Atom> = (0..30)
            .map(|i| {
                let t = f64::from(i) * 0.7;
                Atom::new(
                    "C",
                    format!("ALA{}", i / 4),
                    Point3::new(t.cos() * 3.0, t.sin() * 3.0, t * 0.5),
                    1.7,
                )
            })
            .collect();
        let structure = Structure::new(atoms);
        let config = SasaConfig::new(60, 0);

        let parallel = compute_sasa(&structure, &config).unwrap();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        let serial = pool.install(|| compute_sasa(&structure, &config)).unwrap();

        assert_eq!(parallel, serial);
    }
}
