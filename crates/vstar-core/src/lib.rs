//! Emergent signalling speed v* = sqrt(chi / kappa) / l_P.
//!
//! Closed-form evaluator plus a seeded bootstrap over chi, with the
//! self-tests and host benchmark used by the `vstar` binary.

pub mod bench;
pub mod estimator;
pub mod evaluator;
pub mod selftest;
