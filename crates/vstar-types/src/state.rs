// ─────────────────────────────────────────────────────────────────────
// SCPN Signalling Speed — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::config::SimParams;
use crate::constants::PLANCK_LENGTH;

/// Outcome of one bootstrap run, echoed with its inputs for provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimResult {
    pub params: SimParams,
    /// Planck length used as the divisor [m].
    pub ell_p_m: f64,
    pub v_star_mean_m_per_s: f64,
    pub v_star_std_m_per_s: f64,
}

impl SimResult {
    pub fn new(params: SimParams, mean: f64, std: f64) -> Self {
        SimResult {
            params,
            ell_p_m: PLANCK_LENGTH,
            v_star_mean_m_per_s: mean,
            v_star_std_m_per_s: std,
        }
    }
}

/// Host description plus wall-clock time of one representative evaluation.
/// Informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    pub crate_version: String,
    pub os: String,
    pub arch: String,
    pub os_kernel: String,
    pub cpus: usize,
    pub elapsed_s: f64,
}
