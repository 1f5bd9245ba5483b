#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

use nalgebra::Point3;
use shrake_rupley::input::{ParseOptions, parse_file};
use shrake_rupley::{Atom, RadiusTable, Structure};

pub const EPSILON: f64 = 1e-9;

pub fn binary_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shrake-rupley"))
}

pub fn test_data_path(name: &str) -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(manifest_dir).join("tests/data").join(name)
}

pub fn load_peptide() -> Structure {
    parse_file(
        &test_data_path("peptide.pdb"),
        &ParseOptions::default(),
        &RadiusTable::new(),
    )
    .expect("failed to read peptide.pdb")
}

/// Carbon atoms on a cubic lattice, 4 atoms per residue.
pub fn carbon_lattice(side: usize, spacing: f64) -> Structure {
    let mut atoms = Vec::with_capacity(side * side * side);
    for i in 0..side {
        for j in 0..side {
            for k in 0..side {
                let index = atoms.len();
                #[allow(clippy::cast_precision_loss)]
                let position = Point3::new(
                    i as f64 * spacing,
                    j as f64 * spacing,
                    k as f64 * spacing,
                );
                atoms.push(Atom::new("C", format!("LAT{}", index / 4), position, 1.7));
            }
        }
    }
    Structure::new(atoms)
}

pub fn assert_approx(name: &str, actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{name}: expected {expected}, got {actual} (diff {diff} > {tolerance})"
    );
}

pub fn parse_summary(output: &str) -> HashMap<String, String> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.splitn(2, ':');
            Some((parts.next()?.trim().to_string(), parts.next()?.trim().to_string()))
        })
        .collect()
}
