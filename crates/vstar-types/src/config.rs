// ─────────────────────────────────────────────────────────────────────
// SCPN Signalling Speed — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CHI, DEFAULT_EPS, DEFAULT_KAPPA, DEFAULT_N, DEFAULT_SEED, DEFAULT_TRIALS, MAX_TRIALS,
};
use crate::error::{VStarError, VStarResult};

/// Simulation parameters for one v* run.
/// Field names are the keys of the JSON config file and of the `params`
/// block in the emitted result. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Lattice sites (informational).
    #[serde(default = "default_n")]
    pub n: u64,
    /// Code rate k/n.
    #[serde(default = "default_kappa")]
    pub kappa: f64,
    /// Entropy density.
    #[serde(default = "default_chi")]
    pub chi: f64,
    /// Relative standard deviation of the chi perturbation.
    #[serde(default = "default_eps")]
    pub eps: f64,
    /// Number of bootstrap samples.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// RNG seed. Negative values are accepted and reinterpreted bitwise.
    #[serde(default = "default_seed")]
    pub seed: i64,
}

fn default_n() -> u64 {
    DEFAULT_N
}
fn default_kappa() -> f64 {
    DEFAULT_KAPPA
}
fn default_chi() -> f64 {
    DEFAULT_CHI
}
fn default_eps() -> f64 {
    DEFAULT_EPS
}
fn default_trials() -> usize {
    DEFAULT_TRIALS
}
fn default_seed() -> i64 {
    DEFAULT_SEED
}

impl Default for SimParams {
    fn default() -> Self {
        SimParams {
            n: default_n(),
            kappa: default_kappa(),
            chi: default_chi(),
            eps: default_eps(),
            trials: default_trials(),
            seed: default_seed(),
        }
    }
}

impl SimParams {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> VStarResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Check every invariant the evaluator and estimator rely on.
    ///
    /// Non-positive (or NaN) chi/kappa are domain errors; the remaining
    /// checks are configuration errors.
    pub fn validate(&self) -> VStarResult<()> {
        if self.chi.is_nan() || self.kappa.is_nan() || self.chi <= 0.0 || self.kappa <= 0.0 {
            return Err(VStarError::InvalidDomain {
                chi: self.chi,
                kappa: self.kappa,
            });
        }
        if !self.chi.is_finite() || !self.kappa.is_finite() {
            return Err(VStarError::ConfigError(
                "chi and kappa must be finite".to_string(),
            ));
        }
        if !self.eps.is_finite() || self.eps < 0.0 {
            return Err(VStarError::ConfigError(format!(
                "eps must be finite and >= 0, got {}",
                self.eps
            )));
        }
        if self.trials == 0 {
            return Err(VStarError::ConfigError(
                "trials must be >= 1".to_string(),
            ));
        }
        if self.trials > MAX_TRIALS {
            return Err(VStarError::ConfigError(format!(
                "trials must be <= {MAX_TRIALS}, got {}",
                self.trials
            )));
        }
        if self.n == 0 {
            return Err(VStarError::ConfigError("n must be >= 1".to_string()));
        }
        Ok(())
    }
}
