// ─────────────────────────────────────────────────────────────────────
// SCPN Signalling Speed — VStar CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `vstar` — emergent signalling speed calculator.
//!
//! ```text
//! vstar                                   # defaults
//! vstar --chi 0.051 --trials 12 --seed 42 # explicit
//! vstar --bench                           # host + timing JSON
//! vstar --test                            # self-tests
//! ```
//!
//! Stdout carries only the result document; logs go to stderr.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use vstar_core::bench::run_benchmark;
use vstar_core::estimator::simulate;
use vstar_core::selftest::run_self_tests;
use vstar_types::error::VStarResult;

mod cli;
mod output;

use cli::Cli;

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> VStarResult<String> {
    if cli.test {
        run_self_tests()?;
        return Ok("All self-tests passed.".to_string());
    }

    if cli.bench {
        let report = run_benchmark()?;
        return Ok(serde_json::to_string(&report)?);
    }

    let params = cli.to_params()?;
    info!(
        n = params.n,
        kappa = params.kappa,
        chi = params.chi,
        eps = params.eps,
        trials = params.trials,
        seed = params.seed,
        "running bootstrap"
    );
    let result = simulate(params)?;
    output::render(&result, cli.format)
}

/// Process exit status for a finished run: 0 on success, 1 on any error.
fn exit_status<T>(result: &VStarResult<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(&cli);
    match &result {
        Ok(out) => println!("{out}"),
        Err(e) => error!(error = %e, "run failed"),
    }
    ExitCode::from(exit_status(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vstar_types::config::SimParams;
    use vstar_types::error::VStarError;
    use vstar_types::state::SimResult;

    fn run_args(args: &[&str]) -> VStarResult<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        run(&cli)
    }

    #[test]
    fn test_self_test_mode() {
        let out = run_args(&["vstar", "--test"]).unwrap();
        assert_eq!(out, "All self-tests passed.");
    }

    #[test]
    fn test_bench_mode_emits_compact_json() {
        let out = run_args(&["vstar", "--bench"]).unwrap();
        assert_eq!(out.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        for key in ["crate_version", "os", "arch", "os_kernel", "cpus", "elapsed_s"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert!(value["cpus"].as_u64().unwrap() >= 1);
    }

    #[test]
    fn test_default_run_emits_result_document() {
        let out = run_args(&["vstar"]).unwrap();
        assert!(out.lines().count() > 1, "expected pretty-printed JSON");
        let result: SimResult = serde_json::from_str(&out).unwrap();
        assert_eq!(result.params, SimParams::default());
        assert_eq!(result.v_star_std_m_per_s, 0.0);
        let nominal = (0.051f64 / 0.125).sqrt() / result.ell_p_m;
        assert!((result.v_star_mean_m_per_s - nominal).abs() / nominal < 1e-5);
    }

    #[test]
    fn test_text_run() {
        let out = run_args(&["vstar", "--format", "text", "--trials", "12", "--seed", "42"]).unwrap();
        assert!(out.contains("trials              = 12"));
        assert!(out.contains("seed                = 42"));
    }

    #[test]
    fn test_negative_kappa_fails_with_exit_one() {
        let result = run_args(&["vstar", "--kappa", "-0.1"]);
        assert!(matches!(result, Err(VStarError::InvalidDomain { .. })));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_missing_config_fails_with_exit_one() {
        let result = run_args(&["vstar", "--config", "/nonexistent/vstar/params.json"]);
        assert!(matches!(result, Err(VStarError::Io(_))));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_success_exit_zero() {
        let result = run_args(&["vstar", "--test"]);
        assert_eq!(exit_status(&result), 0);
    }
}
