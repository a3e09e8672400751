// ─────────────────────────────────────────────────────────────────────
// SCPN Signalling Speed — Output
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rendering of results for stdout.

use vstar_types::error::VStarResult;
use vstar_types::state::SimResult;

use crate::cli::OutputFormat;

pub fn render(result: &SimResult, format: OutputFormat) -> VStarResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(render_text(result)),
    }
}

fn render_text(result: &SimResult) -> String {
    let p = &result.params;
    [
        format!("n                   = {}", p.n),
        format!("kappa               = {}", p.kappa),
        format!("chi                 = {}", p.chi),
        format!("eps                 = {:e}", p.eps),
        format!("trials              = {}", p.trials),
        format!("seed                = {}", p.seed),
        format!("ell_p_m             = {:e}", result.ell_p_m),
        format!("v_star_mean_m_per_s = {:.6e}", result.v_star_mean_m_per_s),
        format!("v_star_std_m_per_s  = {:.6e}", result.v_star_std_m_per_s),
    ]
    .join("\n")
}
