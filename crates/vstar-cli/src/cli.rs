// ─────────────────────────────────────────────────────────────────────
// SCPN Signalling Speed — CLI Arguments
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Command-line arguments and their merge onto defaults / config file.

use clap::{Parser, ValueEnum};
use vstar_types::config::SimParams;
use vstar_types::error::VStarResult;

/// Output format for the simulation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Compute emergent signalling speed v* = sqrt(chi / kappa) / l_P
#[derive(Parser, Debug)]
#[command(name = "vstar")]
#[command(version)]
#[command(about = "Compute emergent signalling speed v*")]
pub struct Cli {
    /// Lattice sites
    #[arg(long)]
    pub n: Option<u64>,

    /// Code rate k/n
    #[arg(long, allow_negative_numbers = true)]
    pub kappa: Option<f64>,

    /// Entropy density
    #[arg(long, allow_negative_numbers = true)]
    pub chi: Option<f64>,

    /// LR tail cut-off, relative width of the chi perturbation (default 1e-6)
    #[arg(long, allow_negative_numbers = true)]
    pub eps: Option<f64>,

    /// Bootstrap samples
    #[arg(long)]
    pub trials: Option<usize>,

    /// RNG seed (any integer)
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// JSON file with any subset of n, kappa, chi, eps, trials, seed
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Result format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print hardware/time JSON then exit
    #[arg(long, conflicts_with = "test")]
    pub bench: bool,

    /// Run internal self-tests then exit
    #[arg(long)]
    pub test: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Defaults, overlaid by the config file, overlaid by explicit flags.
    pub fn to_params(&self) -> VStarResult<SimParams> {
        let mut params = match &self.config {
            Some(path) => SimParams::from_file(path)?,
            None => SimParams::default(),
        };
        if let Some(n) = self.n {
            params.n = n;
        }
        if let Some(kappa) = self.kappa {
            params.kappa = kappa;
        }
        if let Some(chi) = self.chi {
            params.chi = chi;
        }
        if let Some(eps) = self.eps {
            params.eps = eps;
        }
        if let Some(trials) = self.trials {
            params.trials = trials;
        }
        if let Some(seed) = self.seed {
            params.seed = seed;
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_gives_defaults() {
        let cli = Cli::try_parse_from(["vstar"]).unwrap();
        assert_eq!(cli.to_params().unwrap(), SimParams::default());
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.bench);
        assert!(!cli.test);
    }

    #[test]
    fn test_explicit_args_override() {
        let cli = Cli::try_parse_from([
            "vstar", "--n", "65536", "--kappa", "0.125", "--chi", "0.051", "--eps", "1e-6",
            "--trials", "12", "--seed", "42",
        ])
        .unwrap();
        let p = cli.to_params().unwrap();
        assert_eq!(p.trials, 12);
        assert_eq!(p.seed, 42);
        assert!((p.eps - 1e-6).abs() < 1e-20);
    }

    #[test]
    fn test_negative_chi_parses() {
        let cli = Cli::try_parse_from(["vstar", "--chi", "-1.0"]).unwrap();
        assert_eq!(cli.to_params().unwrap().chi, -1.0);
    }

    #[test]
    fn test_negative_seed_parses() {
        let cli = Cli::try_parse_from(["vstar", "--seed", "-42"]).unwrap();
        assert_eq!(cli.to_params().unwrap().seed, -42);
    }

    #[test]
    fn test_bench_and_test_conflict() {
        assert!(Cli::try_parse_from(["vstar", "--bench", "--test"]).is_err());
    }

    #[test]
    fn test_text_format_and_verbosity() {
        let cli = Cli::try_parse_from(["vstar", "--format", "text", "-vv"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("vstar-cli-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"chi": 0.07, "trials": 5, "seed": 9}"#).unwrap();
        let path_str = path.to_string_lossy().to_string();
        let cli =
            Cli::try_parse_from(["vstar", "--config", path_str.as_str(), "--seed", "3"]).unwrap();
        let p = cli.to_params().unwrap();
        assert!((p.chi - 0.07).abs() < 1e-15);
        assert_eq!(p.trials, 5);
        assert_eq!(p.seed, 3);
        assert_eq!(p.n, 65_536);
        let _ = std::fs::remove_file(path);
    }
}
