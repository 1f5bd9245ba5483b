// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! PDB file format parser.
//!
//! Reads ATOM (and optionally HETATM) records of the first model.

use std::io::{self, BufRead};

use super::{AtomRecord, ParseOptions};

/// Extract substring from fixed-width PDB columns (1-indexed, inclusive).
fn extract_column(line: &str, start: usize, end: usize) -> &str {
    let len = line.len();
    let start_idx = start.saturating_sub(1);
    let end_idx = end.min(len);

    if start_idx >= len {
        return "";
    }

    line.get(start_idx..end_idx).unwrap_or("").trim()
}

/// Parse a PDB line float value, returning None if invalid.
fn parse_column_f64(line: &str, start: usize, end: usize) -> Option<f64> {
    let s = extract_column(line, start, end);
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

/// Element symbol from columns 77-78, or from the first two columns of the
/// atom name field when the element column is blank.
fn element_symbol(line: &str) -> String {
    let element = extract_column(line, 77, 78);
    if element.is_empty() {
        extract_column(line, 13, 14).to_string()
    } else {
        element.to_string()
    }
}

/// Parse a single ATOM/HETATM line into an `AtomRecord`.
fn parse_atom_line(line: &str) -> Option<AtomRecord> {
    let record_name = extract_column(line, 1, 6);
    if record_name != "ATOM" && record_name != "HETATM" {
        return None;
    }

    // Coordinates are required
    let x = parse_column_f64(line, 31, 38)?;
    let y = parse_column_f64(line, 39, 46)?;
    let z = parse_column_f64(line, 47, 54)?;

    let name = extract_column(line, 13, 16);
    if name.is_empty() {
        return None;
    }

    Some(AtomRecord {
        record_name: record_name.to_string(),
        name: name.to_string(),
        res_name: extract_column(line, 18, 20).to_string(),
        chain_id: extract_column(line, 22, 22).to_string(),
        res_seq: extract_column(line, 23, 26).to_string(),
        x,
        y,
        z,
        element: element_symbol(line),
    })
}

/// Check if atom should be accepted based on filter options.
fn is_acceptable(record: &AtomRecord, options: &ParseOptions) -> bool {
    if record.record_name == "HETATM" && !options.include_heteroatoms {
        return false;
    }

    if options.exclude_hydrogens && (record.element == "H" || record.element == "D") {
        return false;
    }

    true
}

/// Parse PDB format from a buffered reader. Stops at the end of the first model.
///
/// Lines are decoded lossily, so non-UTF-8 bytes in free-text records do not end
/// the read.
///
/// # Errors
/// Returns error if reading from `reader` fails.
pub fn parse_pdb<R: BufRead>(reader: R, options: &ParseOptions) -> io::Result<Vec<AtomRecord>> {
    let mut records = Vec::new();

    for bytes in reader.split(b'\n') {
        let bytes = bytes?;
        let text = String::from_utf8_lossy(&bytes);
        let line = text.trim_end_matches('\r');
        match extract_column(line, 1, 6) {
            "ATOM" | "HETATM" => {
                if let Some(record) = parse_atom_line(line)
                    && is_acceptable(&record, options)
                {
                    records.push(record);
                }
            }
            "ENDMDL" | "END" => break,
            _ => {}
        }
    }

    Ok(records)
}
