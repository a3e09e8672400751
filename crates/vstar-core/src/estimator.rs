// ─────────────────────────────────────────────────────────────────────
// SCPN Signalling Speed — Bootstrap Estimator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Toy bootstrap of v* over Gaussian perturbations of chi.
//!
//! Draws come from one `StdRng` seeded once per call, in order, so a given
//! parameter set always reproduces the same (mean, std) bit for bit.

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing::debug;
use vstar_types::config::SimParams;
use vstar_types::constants::CHI_FLOOR;
use vstar_types::error::{VStarError, VStarResult};
use vstar_types::state::SimResult;

use crate::evaluator::compute_vstar;

/// Mean and sample standard deviation of v* over `params.trials` draws of
/// chi ~ N(chi, eps * chi), each clamped to [`CHI_FLOOR`].
///
/// The standard deviation is Bessel-corrected and defined as exactly 0 for
/// a single trial.
pub fn bootstrap_vstar(params: &SimParams) -> VStarResult<(f64, f64)> {
    params.validate()?;

    let mut rng = StdRng::seed_from_u64(params.seed as u64);
    let perturb = Normal::new(params.chi, params.eps * params.chi)
        .map_err(|e| VStarError::ConfigError(e.to_string()))?;

    let mut samples = Array1::<f64>::zeros(params.trials);
    for v in samples.iter_mut() {
        let chi = perturb.sample(&mut rng).max(CHI_FLOOR);
        *v = compute_vstar(chi, params.kappa)?;
    }

    let mean = samples
        .mean()
        .ok_or_else(|| VStarError::ConfigError("bootstrap produced no samples".to_string()))?;
    let std = if params.trials > 1 {
        samples.std(1.0)
    } else {
        0.0
    };

    debug!(
        trials = params.trials,
        seed = params.seed,
        mean,
        std,
        "bootstrap complete"
    );
    Ok((mean, std))
}

/// Run the bootstrap and package it with its inputs.
pub fn simulate(params: SimParams) -> VStarResult<SimResult> {
    let (mean, std) = bootstrap_vstar(&params)?;
    Ok(SimResult::new(params, mean, std))
}
