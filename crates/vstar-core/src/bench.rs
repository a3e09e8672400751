// ─────────────────────────────────────────────────────────────────────
// SCPN Signalling Speed — Host Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Host probe and wall-clock timing of one representative evaluation.
//!
//! Reported so readers can quote their own timings; carries no
//! correctness contract.

use std::hint::black_box;
use std::time::Instant;

use tracing::debug;
use vstar_types::constants::{BENCH_CHI, BENCH_KAPPA};
use vstar_types::error::VStarResult;
use vstar_types::state::BenchReport;

use crate::evaluator::compute_vstar;

const OSRELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

/// Kernel release from procfs, "unknown" where unavailable (non-Linux).
fn read_os_kernel() -> String {
    std::fs::read_to_string(OSRELEASE_PATH)
        .map(|s| s.trim().to_string())
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn cpu_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Round seconds to 4 decimals.
fn round_secs(secs: f64) -> f64 {
    (secs * 1e4).round() / 1e4
}

/// Time `compute_vstar(BENCH_CHI, BENCH_KAPPA)` and describe the host.
pub fn run_benchmark() -> VStarResult<BenchReport> {
    let t0 = Instant::now();
    black_box(compute_vstar(black_box(BENCH_CHI), black_box(BENCH_KAPPA))?);
    let elapsed = t0.elapsed().as_secs_f64();
    debug!(elapsed_s = elapsed, "benchmark evaluation timed");

    Ok(BenchReport {
        crate_version: env!("CARGO_PKG_VERSION").to_string(),
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        os_kernel: read_os_kernel(),
        cpus: cpu_count(),
        elapsed_s: round_secs(elapsed),
    })
}
