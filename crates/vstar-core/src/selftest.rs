// ─────────────────────────────────────────────────────────────────────
// SCPN Signalling Speed — Self-Tests
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Built-in regression checks exposed through `vstar --test`.

use tracing::info;
use vstar_types::constants::PLANCK_LENGTH;
use vstar_types::error::{VStarError, VStarResult};

use crate::evaluator::compute_vstar;

/// Relative tolerance for the reference-point check.
const REL_TOL: f64 = 1e-9;

/// Evaluator at the default (chi, kappa) must match the direct formula.
fn check_reference_point() -> VStarResult<()> {
    let chi = 0.051;
    let kappa = 0.125;
    let got = compute_vstar(chi, kappa)?;
    let expected = (chi / kappa).sqrt() / PLANCK_LENGTH;
    let rel = (got - expected).abs() / expected.abs();
    if rel > REL_TOL {
        return Err(VStarError::SelfTestFailed(format!(
            "compute_vstar({chi}, {kappa}) = {got:e}, expected {expected:e} (rel {rel:e})"
        )));
    }
    Ok(())
}

/// Negative chi must be rejected with a domain error.
fn check_negative_chi_rejected() -> VStarResult<()> {
    match compute_vstar(-1.0, 0.1) {
        Err(VStarError::InvalidDomain { .. }) => Ok(()),
        Err(other) => Err(VStarError::SelfTestFailed(format!(
            "negative chi raised the wrong error: {other}"
        ))),
        Ok(v) => Err(VStarError::SelfTestFailed(format!(
            "negative chi did not raise InvalidDomain (returned {v:e})"
        ))),
    }
}

/// Run all self-tests, stopping at the first failure.
pub fn run_self_tests() -> VStarResult<()> {
    check_reference_point()?;
    check_negative_chi_rejected()?;
    info!("self-tests passed");
    Ok(())
}
