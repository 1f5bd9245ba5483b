// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! Input file parsing and radius assignment.
//!
//! Turns PDB text into a [`Structure`]: atom records are read, radii are resolved
//! through a [`RadiusTable`], and atoms are grouped by residue.

pub mod pdb;
pub mod radii;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use nalgebra::Point3;

pub use radii::RadiusTable;

use crate::error::Result;
use crate::types::{Atom, Structure};

/// Parsed atom record with coordinates and metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct AtomRecord {
    /// Record type: "ATOM" or "HETATM".
    pub record_name: String,
    /// Atom name (e.g., "CA", "N", "O").
    pub name: String,
    /// Residue name (e.g., "ALA", "GLY").
    pub res_name: String,
    /// Chain identifier.
    pub chain_id: String,
    /// Residue sequence number as written in the file.
    pub res_seq: String,
    /// X coordinate in Ångströms.
    pub x: f64,
    /// Y coordinate in Ångströms.
    pub y: f64,
    /// Z coordinate in Ångströms.
    pub z: f64,
    /// Element symbol (e.g., "C", "N", "O").
    pub element: String,
}

impl AtomRecord {
    /// Residue identifier: residue name followed by sequence number.
    #[must_use]
    pub fn residue_id(&self) -> String {
        format!("{}{}", self.res_name, self.res_seq)
    }
}

/// Options for parsing molecular files.
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Read HETATM records as well as ATOM records (default: false).
    pub include_heteroatoms: bool,
    /// Drop hydrogen and deuterium atoms (default: false).
    pub exclude_hydrogens: bool,
}

/// Convert atom records to atoms, resolving each radius by element symbol.
#[must_use]
pub fn records_to_atoms(records: &[AtomRecord], radii: &RadiusTable) -> Vec<Atom> {
    records
        .iter()
        .map(|r| {
            if radii.lookup(&r.element).is_none() {
                debug!(
                    "No radius for element '{}' ({} {}), using fallback",
                    r.element,
                    r.residue_id(),
                    r.name
                );
            }
            Atom::with_element_radius(
                r.element.clone(),
                r.residue_id(),
                Point3::new(r.x, r.y, r.z),
                radii,
            )
        })
        .collect()
}

/// Parse a PDB structure from a buffered reader.
///
/// # Errors
/// Returns error if reading fails.
pub fn parse_reader<R: BufRead>(
    reader: R,
    options: &ParseOptions,
    radii: &RadiusTable,
) -> Result<Structure> {
    let records = pdb::parse_pdb(reader, options)?;
    debug!("Parsed {} atom records", records.len());
    Ok(Structure::new(records_to_atoms(&records, radii)))
}

/// Parse a PDB structure from a file path.
///
/// # Errors
/// Returns error if the file cannot be opened or read.
pub fn parse_file(path: &Path, options: &ParseOptions, radii: &RadiusTable) -> Result<Structure> {
    let file = File::open(path)?;
    let structure = parse_reader(BufReader::new(file), options, radii)?;
    info!(
        "Read {} atoms in {} residues from {}",
        structure.len(),
        structure.residues().len(),
        path.display()
    );
    Ok(structure)
}

/// Parse a PDB structure from stdin.
///
/// # Errors
/// Returns error if reading stdin fails.
pub fn parse_stdin(options: &ParseOptions, radii: &RadiusTable) -> Result<Structure> {
    let stdin = io::stdin();
    let structure = parse_reader(stdin.lock(), options, radii)?;
    info!(
        "Read {} atoms in {} residues from stdin",
        structure.len(),
        structure.residues().len()
    );
    Ok(structure)
}
