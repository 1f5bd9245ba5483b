// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! CLI for computing solvent-accessible surface areas of molecular structures.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{ArgAction, Parser};
use log::info;
use shrake_rupley::input::{ParseOptions, parse_file, parse_stdin};
use shrake_rupley::output::{
    write_atom_lines, write_atoms_csv, write_json, write_points_csv, write_residue_lines,
    write_residues_csv, write_summary,
};
use shrake_rupley::{RadiusTable, SasaConfig, SasaError, SpiralSphere, compute_sasa};

#[derive(Parser)]
#[command(name = "shrake-rupley")]
#[command(about = "Compute solvent-accessible surface areas of PDB structures")]
#[command(
    long_about = "Estimates the solvent-accessible surface area of every atom of a PDB \
    structure with the Shrake-Rupley method: each atom's van der Waals sphere, \
    expanded by the solvent probe radius, is sampled with a spiral of points and \
    points buried by neighboring atoms are discarded. Reports per-atom, per-residue \
    and whole-structure areas.\n\n\
    Reads ATOM records of the first model of a .pdb file (or stdin)."
)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// Input PDB file. Reads from stdin if not specified
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of sample points per atom sphere
    #[arg(short = 'n', long, default_value_t = shrake_rupley::config::DEFAULT_POINTS)]
    points: usize,

    /// Number of nearest atoms tested as occluders (0 = all atoms)
    #[arg(short = 'k', long, default_value_t = 0)]
    neighbors: usize,

    /// Solvent probe radius (default: van der Waals radius of oxygen)
    #[arg(long, default_value_t = shrake_rupley::input::radii::OXYGEN_RADIUS)]
    probe: f64,

    /// Custom radii file (format: element radius per line)
    #[arg(long)]
    radii_file: Option<PathBuf>,

    /// Include HETATM records
    #[arg(long)]
    include_heteroatoms: bool,

    /// Exclude hydrogen atoms
    #[arg(long)]
    exclude_hydrogens: bool,

    /// Output JSON report file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write per-residue table (CSV) to this file
    #[arg(long)]
    residues_csv: Option<PathBuf>,

    /// Write per-atom table (CSV) to this file
    #[arg(long)]
    atoms_csv: Option<PathBuf>,

    /// Write the unit-sphere sample points (CSV) to this file
    #[arg(long)]
    points_csv: Option<PathBuf>,

    /// Print per-residue lines instead of the summary
    #[arg(long)]
    print_residues: bool,

    /// Print per-atom lines instead of the summary
    #[arg(long)]
    print_atoms: bool,

    /// Increase verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Reduce verbosity to warnings only
    #[arg(short, long)]
    quiet: bool,

    /// Maximum number of threads to use (default: all available)
    #[arg(long)]
    processors: Option<usize>,

    /// Measure and log running time
    #[arg(long)]
    measure_running_time: bool,
}

fn create_file(path: &Path) -> io::Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

fn main() -> Result<(), SasaError> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Configure thread pool if --processors specified
    if let Some(num_threads) = cli.processors {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(io::Error::other)?;
        info!("Using {num_threads} threads");
    }

    let config = SasaConfig::new(cli.points, cli.neighbors).with_probe_radius(cli.probe);
    config.validate()?;

    let mut radii = RadiusTable::new();
    if let Some(ref radii_path) = cli.radii_file {
        let content = std::fs::read_to_string(radii_path)?;
        radii.load_from_text(&content)?;
        info!("Loaded custom radii from {}", radii_path.display());
    }

    let options = ParseOptions {
        include_heteroatoms: cli.include_heteroatoms,
        exclude_hydrogens: cli.exclude_hydrogens,
    };

    let structure = if let Some(path) = &cli.input {
        parse_file(path, &options, &radii)?
    } else {
        parse_stdin(&options, &radii)?
    };

    let start = Instant::now();
    let result = compute_sasa(&structure, &config)?;
    let elapsed = start.elapsed();

    if cli.measure_running_time {
        info!("SASA computation time: {} ms", elapsed.as_millis());
    }

    if let Some(path) = &cli.output {
        write_json(create_file(path)?, &result)?;
        info!("Wrote JSON report to {}", path.display());
    }
    if let Some(path) = &cli.residues_csv {
        write_residues_csv(create_file(path)?, &result)?;
        info!("Wrote residue table to {}", path.display());
    }
    if let Some(path) = &cli.atoms_csv {
        write_atoms_csv(create_file(path)?, &structure, &result)?;
        info!("Wrote atom table to {}", path.display());
    }
    if let Some(path) = &cli.points_csv {
        write_points_csv(create_file(path)?, &SpiralSphere::new(config.n_points))?;
        info!("Wrote sphere points to {}", path.display());
    }

    let stdout = io::stdout().lock();
    if cli.print_residues {
        write_residue_lines(stdout, &result)?;
    } else if cli.print_atoms {
        write_atom_lines(stdout, &result)?;
    } else {
        write_summary(stdout, &result)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["shrake-rupley"]);
        assert_eq!(cli.points, 100);
        assert_eq!(cli.neighbors, 0);
        assert!((cli.probe - 1.52).abs() < 1e-12);
        assert!(cli.input.is_none());
    }

    #[test]
    fn short_flags() {
        let cli = Cli::parse_from([
            "shrake-rupley",
            "-i",
            "x.pdb",
            "-n",
            "960",
            "-k",
            "30",
            "-vv",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("x.pdb")));
        assert_eq!(cli.points, 960);
        assert_eq!(cli.neighbors, 30);
        assert_eq!(cli.verbose, 2);
    }
}
