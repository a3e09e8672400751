// ─────────────────────────────────────────────────────────────────────
// SCPN Signalling Speed — Evaluator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form emergent signalling speed.
//!
//! v* = sqrt(chi / kappa) / l_P, with l_P the Planck length.

use vstar_types::constants::PLANCK_LENGTH;
use vstar_types::error::{VStarError, VStarResult};

/// Return v* [m/s] for positive chi and kappa.
///
/// Fails with [`VStarError::InvalidDomain`] when either input is
/// non-positive or NaN; no value is produced in that case.
pub fn compute_vstar(chi: f64, kappa: f64) -> VStarResult<f64> {
    if chi.is_nan() || kappa.is_nan() || chi <= 0.0 || kappa <= 0.0 {
        return Err(VStarError::InvalidDomain { chi, kappa });
    }
    Ok((chi / kappa).sqrt() / PLANCK_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_diff(a: f64, b: f64) -> f64 {
        (a - b).abs() / b.abs()
    }

    #[test]
    fn test_reference_point() {
        let v = compute_vstar(0.051, 0.125).unwrap();
        let expected = (0.051f64 / 0.125).sqrt() / 1.616_255e-35;
        assert!(rel_diff(v, expected) < 1e-9);
        // sqrt(0.408) / 1.616255e-35
        assert!(rel_diff(v, 3.952e34) < 1e-3, "v* = {v:e}");
    }

    #[test]
    fn test_negative_chi_rejected() {
        let err = compute_vstar(-1.0, 0.1).unwrap_err();
        assert!(matches!(err, VStarError::InvalidDomain { .. }));
    }

    #[test]
    fn test_zero_inputs_rejected() {
        assert!(matches!(
            compute_vstar(0.0, 0.1),
            Err(VStarError::InvalidDomain { .. })
        ));
        assert!(matches!(
            compute_vstar(0.1, 0.0),
            Err(VStarError::InvalidDomain { .. })
        ));
        assert!(matches!(
            compute_vstar(-0.1, -0.1),
            Err(VStarError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(compute_vstar(f64::NAN, 0.1).is_err());
        assert!(compute_vstar(0.1, f64::NAN).is_err());
    }

    #[test]
    fn test_equal_inputs_give_inverse_planck_length() {
        let v = compute_vstar(0.3, 0.3).unwrap();
        assert!(rel_diff(v, 1.0 / PLANCK_LENGTH) < 1e-15);
    }

    #[test]
    fn test_repeatable() {
        let a = compute_vstar(0.02, 0.5).unwrap();
        let b = compute_vstar(0.02, 0.5).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
