// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! Solvent-accessible surface area by Shrake-Rupley point sampling.
//!
//! Every atom's surface is sampled with a Saff-Kuijlaars spiral of N points placed
//! at its van der Waals radius plus a solvent probe radius. A sample point is
//! buried when another atom's van der Waals sphere comes within the probe radius
//! of it; the surviving fraction scales the atom's nominal surface 4πr². Atom
//! surfaces are then summed per residue and over the whole structure.
//!
//! # Example
//!
//! ```
//! use nalgebra::Point3;
//! use shrake_rupley::{Atom, SasaConfig, Structure, compute_sasa};
//!
//! let structure = Structure::new(vec![
//!     Atom::new("C", "ALA1", Point3::new(0.0, 0.0, 0.0), 1.7),
//!     Atom::new("O", "ALA1", Point3::new(1.2, 0.0, 0.0), 1.52),
//!     Atom::new("N", "GLY2", Point3::new(-1.3, 0.5, 0.0), 1.55),
//! ]);
//!
//! let result = compute_sasa(&structure, &SasaConfig::new(200, 0)).unwrap();
//!
//! for residue in &result.residues {
//!     println!(
//!         "{}: {:.2} of {:.2} Å² ({:.1}%)",
//!         residue.residue,
//!         residue.accessible_surface_total,
//!         residue.surface_total,
//!         residue.accessibility
//!     );
//! }
//! ```

pub mod accessibility;
pub mod aggregate;
pub mod config;
mod error;
pub mod input;
pub mod neighbors;
pub mod output;
mod sasa;
pub mod sphere_points;
mod types;

pub use accessibility::{AccessibilityMask, AtomSpheres};
pub use config::SasaConfig;
pub use error::{Result, SasaError};
pub use input::RadiusTable;
pub use sasa::compute_sasa;
pub use sphere_points::SpiralSphere;
pub use types::{
    Atom, AtomSurface, Residue, ResidueSurface, SasaResult, Structure, SurfaceTotals,
};
