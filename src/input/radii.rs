// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! Van der Waals radii by element symbol.
//!
//! Lookup is case-insensitive. Symbols missing from the table resolve to
//! [`DEFAULT_RADIUS`] without error.

use std::collections::HashMap;

use crate::error::{Result, SasaError};

/// Radius used for element symbols that are not in the table.
pub const DEFAULT_RADIUS: f64 = 2.0;

/// Van der Waals radius of oxygen, used as the solvent probe radius.
pub const OXYGEN_RADIUS: f64 = 1.52;

/// Immutable element → radius table handed to atom construction.
#[derive(Debug, Clone)]
pub struct RadiusTable {
    radii: HashMap<String, f64>,
    fallback: f64,
}

impl Default for RadiusTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RadiusTable {
    /// Create a table holding the built-in van der Waals radii.
    #[must_use]
    pub fn new() -> Self {
        let radii = DEFAULT_RADII
            .iter()
            .map(|(symbol, radius)| ((*symbol).to_string(), *radius))
            .collect();

        Self {
            radii,
            fallback: DEFAULT_RADIUS,
        }
    }

    /// Create an empty table; every lookup returns the fallback radius.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            radii: HashMap::new(),
            fallback: DEFAULT_RADIUS,
        }
    }

    /// Replace the radius returned for unknown symbols.
    #[must_use]
    pub const fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Add or replace the radius of one element.
    #[must_use]
    pub fn with_radius(mut self, symbol: &str, radius: f64) -> Self {
        self.radii.insert(symbol.trim().to_ascii_uppercase(), radius);
        self
    }

    /// Load radii from text, one `SYMBOL RADIUS` pair per line.
    /// Blank lines and lines starting with '#' are skipped. Existing entries are overridden.
    /// The table is only updated when every line parses.
    ///
    /// # Errors
    /// Returns [`SasaError::InvalidRadius`] for a line with fewer than two fields,
    /// an unparsable radius, or a negative radius.
    pub fn load_from_text(&mut self, text: &str) -> Result<()> {
        let mut parsed: Vec<(String, f64)> = Vec::new();

        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            let (Some(symbol), Some(value)) = (parts.next(), parts.next()) else {
                return Err(SasaError::InvalidRadius {
                    line: number + 1,
                    reason: format!("expected `SYMBOL RADIUS`, got `{line}`"),
                });
            };

            let radius: f64 = value.parse().map_err(|_| SasaError::InvalidRadius {
                line: number + 1,
                reason: format!("invalid radius value `{value}`"),
            })?;

            if !radius.is_finite() || radius < 0.0 {
                return Err(SasaError::InvalidRadius {
                    line: number + 1,
                    reason: format!("radius {radius} must be non-negative"),
                });
            }

            parsed.push((symbol.to_ascii_uppercase(), radius));
        }

        self.radii.extend(parsed);
        Ok(())
    }

    /// Radius for an element symbol, or the fallback when the symbol is unknown.
    #[must_use]
    pub fn get_radius(&self, symbol: &str) -> f64 {
        self.lookup(symbol).unwrap_or(self.fallback)
    }

    /// Radius for an element symbol, `None` when the symbol is unknown.
    #[must_use]
    pub fn lookup(&self, symbol: &str) -> Option<f64> {
        self.radii
            .get(symbol.trim().to_ascii_uppercase().as_str())
            .copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }
}

// Bondi-style van der Waals radii (Å)
const DEFAULT_RADII: &[(&str, f64)] = &[
    ("H", 1.20),
    ("HE", 1.40),
    ("LI", 1.82),
    ("BE", 1.53),
    ("B", 1.92),
    ("C", 1.70),
    ("N", 1.55),
    ("O", OXYGEN_RADIUS),
    ("F", 1.47),
    ("NE", 1.54),
    ("NA", 2.27),
    ("MG", 1.73),
    ("AL", 1.84),
    ("SI", 2.10),
    ("P", 1.80),
    ("S", 1.80),
    ("CL", 1.75),
    ("AR", 1.88),
    ("K", 2.75),
    ("CA", 2.31),
    ("SC", 2.11),
    ("TI", 2.11),
    ("V", 2.07),
    ("CR", 2.06),
    ("MN", 2.05),
    ("FE", 2.04),
    ("CO", 2.00),
    ("NI", 1.63),
    ("CU", 1.40),
    ("ZN", 1.39),
    ("GA", 1.87),
    ("GE", 2.11),
    ("AS", 1.85),
    ("SE", 1.90),
    ("BR", 1.85),
    ("KR", 2.02),
    ("RB", 3.03),
    ("SR", 2.49),
    ("Y", 2.27),
    ("ZR", 2.20),
    ("NB", 2.07),
    ("MO", 2.09),
    ("TC", 2.09),
    ("RU", 2.07),
    ("RH", 2.04),
    ("PD", 1.63),
    ("AG", 1.72),
    ("CD", 1.58),
    ("IN", 1.93),
    ("SN", 2.17),
    ("SB", 2.06),
    ("TE", 2.06),
    ("I", 1.98),
    ("XE", 2.16),
    ("CS", 3.43),
    ("BA", 2.68),
    ("PT", 1.75),
    ("AU", 1.66),
    ("HG", 1.55),
    ("TL", 1.96),
    ("PB", 2.02),
    ("BI", 2.07),
    ("PO", 1.97),
    ("AT", 2.02),
    ("RN", 2.20),
    ("FR", 3.48),
    ("RA", 2.83),
    ("U", 1.86),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_elements() {
        let table = RadiusTable::new();
        assert!((table.get_radius("C") - 1.70).abs() < 0.001);
        assert!((table.get_radius("N") - 1.55).abs() < 0.001);
        assert!((table.get_radius("O") - 1.52).abs() < 0.001);
        assert!((table.get_radius("S") - 1.80).abs() < 0.001);
        assert!((table.get_radius("H") - 1.20).abs() < 0.001);
    }

    #[test]
    fn case_insensitive() {
        let table = RadiusTable::new();
        assert!((table.get_radius("Fe") - 2.04).abs() < 0.001);
        assert!((table.get_radius("zn") - 1.39).abs() < 0.001);
        assert!((table.get_radius(" CL ") - 1.75).abs() < 0.001);
    }

    #[test]
    fn unknown_symbol_falls_back() {
        let table = RadiusTable::new();
        assert!(table.lookup("XX").is_none());
        assert!((table.get_radius("XX") - DEFAULT_RADIUS).abs() < 0.001);
        assert!((table.get_radius("") - DEFAULT_RADIUS).abs() < 0.001);
    }

    #[test]
    fn custom_fallback() {
        let table = RadiusTable::empty().with_fallback(1.5);
        assert!(table.is_empty());
        assert!((table.get_radius("C") - 1.5).abs() < 0.001);
    }

    #[test]
    fn custom_rules() {
        let mut table = RadiusTable::new();
        table
            .load_from_text("# custom radii\nC 1.9\n\nse 2.5\n")
            .unwrap();
        assert!((table.get_radius("C") - 1.9).abs() < 0.001);
        assert!((table.get_radius("SE") - 2.5).abs() < 0.001);
        assert!((table.get_radius("N") - 1.55).abs() < 0.001);
    }

    #[test]
    fn failed_load_leaves_table_unchanged() {
        let mut table = RadiusTable::new();
        let before = table.len();
        assert!(table.load_from_text("C 1.9\nZZ 3.0\nN abc\n").is_err());
        assert!((table.get_radius("C") - 1.70).abs() < 0.001);
        assert!(table.lookup("ZZ").is_none());
        assert_eq!(table.len(), before);
    }

    #[test]
    fn later_lines_override_earlier() {
        let mut table = RadiusTable::empty();
        table.load_from_text("C 1.8\nc 1.9\n").unwrap();
        assert!((table.get_radius("C") - 1.9).abs() < 0.001);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn invalid_rules() {
        let mut table = RadiusTable::empty();
        assert!(matches!(
            table.load_from_text("C\n"),
            Err(SasaError::InvalidRadius { line: 1, .. })
        ));
        assert!(matches!(
            table.load_from_text("C 1.7\nN abc\n"),
            Err(SasaError::InvalidRadius { line: 2, .. })
        ));
        assert!(matches!(
            table.load_from_text("O -1.0"),
            Err(SasaError::InvalidRadius { .. })
        ));
    }
}
