// ─────────────────────────────────────────────────────────────────────
// SCPN Signalling Speed — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Planck length (m), CODATA 2018.
pub const PLANCK_LENGTH: f64 = 1.616_255e-35;

/// Lattice sites. Reported only, never enters the formula.
pub const DEFAULT_N: u64 = 65_536;

/// Code rate k/n.
pub const DEFAULT_KAPPA: f64 = 0.125;

/// Entropy density.
pub const DEFAULT_CHI: f64 = 0.051;

/// Relative Gaussian width applied to chi during sampling (LR tail cut-off).
pub const DEFAULT_EPS: f64 = 1e-6;

pub const DEFAULT_TRIALS: usize = 1;

/// Upper bound on bootstrap samples; every draw is held in memory at once.
pub const MAX_TRIALS: usize = 10_000_000;

pub const DEFAULT_SEED: i64 = 0;

/// Lower clamp for perturbed chi draws.
/// NOTE: only the low tail is clipped, so eps large relative to 1 skews the
/// sampled mean upward. Keeps the evaluator precondition satisfiable; it has
/// no physical meaning.
pub const CHI_FLOOR: f64 = 1e-12;

/// Representative inputs timed by the benchmark mode.
pub const BENCH_CHI: f64 = 0.05;
pub const BENCH_KAPPA: f64 = 0.1;
