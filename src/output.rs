// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! Result export: CSV tables, JSON report and plain-text summaries.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::sphere_points::SpiralSphere;
use crate::types::{SasaResult, Structure};

/// Label of the whole-structure row in the residue table.
pub const TOTAL_ROW_LABEL: &str = "Total";

#[derive(Serialize)]
struct AtomRow<'a> {
    element: &'a str,
    residue: &'a str,
    x: f64,
    y: f64,
    z: f64,
    radius: f64,
    surface: f64,
    accessible_points: usize,
    accessible_surface: f64,
}

#[derive(Serialize)]
struct ResidueRow<'a> {
    residue: &'a str,
    surface_total: f64,
    accessible_surface_total: f64,
    accessibility: f64,
}

/// Write unit-sphere points as headerless `x,y,z` lines.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_points_csv<W: Write>(writer: W, sphere: &SpiralSphere) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for p in sphere.points() {
        csv.serialize((p.x, p.y, p.z))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write one row per atom: identity, geometry and accessible surface.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_atoms_csv<W: Write>(
    writer: W,
    structure: &Structure,
    result: &SasaResult,
) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for (atom, surface) in structure.atoms().iter().zip(&result.atoms) {
        csv.serialize(AtomRow {
            element: &atom.element,
            residue: &atom.residue,
            x: atom.position.x,
            y: atom.position.y,
            z: atom.position.z,
            radius: atom.radius,
            surface: surface.surface,
            accessible_points: surface.accessible_points,
            accessible_surface: surface.accessible_surface,
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Write one row per residue followed by a [`TOTAL_ROW_LABEL`] row for the structure.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_residues_csv<W: Write>(writer: W, result: &SasaResult) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for r in &result.residues {
        csv.serialize(ResidueRow {
            residue: &r.residue,
            surface_total: r.surface_total,
            accessible_surface_total: r.accessible_surface_total,
            accessibility: r.accessibility,
        })?;
    }
    csv.serialize(ResidueRow {
        residue: TOTAL_ROW_LABEL,
        surface_total: result.total.surface_total,
        accessible_surface_total: result.total.accessible_surface_total,
        accessibility: result.total.accessibility,
    })?;
    csv.flush()?;
    Ok(())
}

/// Write the full result as pretty-printed JSON (per-point masks omitted).
///
/// # Errors
/// Returns error if serialization, writing, or the final flush fails.
pub fn write_json<W: Write>(mut writer: W, result: &SasaResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `key: value` summary lines.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_summary<W: Write>(mut writer: W, result: &SasaResult) -> Result<()> {
    writeln!(writer, "atoms: {}", result.atoms.len())?;
    writeln!(writer, "residues: {}", result.residues.len())?;
    writeln!(writer, "total_surface: {:.1}", result.total.surface_total)?;
    writeln!(
        writer,
        "total_accessible_surface: {:.1}",
        result.total.accessible_surface_total
    )?;
    writeln!(
        writer,
        "accessibility_percent: {:.1}",
        result.total.accessibility
    )?;
    Ok(())
}

/// Write whitespace-separated residue lines: id, surface, accessible surface, percentage.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_residue_lines<W: Write>(mut writer: W, result: &SasaResult) -> Result<()> {
    for r in &result.residues {
        writeln!(
            writer,
            "{} {:.4} {:.4} {:.2}",
            r.residue, r.surface_total, r.accessible_surface_total, r.accessibility
        )?;
    }
    Ok(())
}

/// Write whitespace-separated atom lines: index, element, residue, points, accessible surface.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_atom_lines<W: Write>(mut writer: W, result: &SasaResult) -> Result<()> {
    for a in &result.atoms {
        writeln!(
            writer,
            "{} {} {} {} {:.4}",
            a.index, a.element, a.residue, a.accessible_points, a.accessible_surface
        )?;
    }
    Ok(())
}
