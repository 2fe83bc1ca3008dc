//! Display strings for fitted polynomials.
//!
//! These strings are for people, not for computation: coefficients are
//! rounded to four decimals and the derivation used to obtain them may be
//! less accurate than the evaluation path of the interpolator.

/// Returned when a fitted state cannot be rendered.
pub(crate) const PLACEHOLDER: &str = "Unable to generate equation";

/// Returned by every interpolator before `set_data`.
pub(crate) const NOT_FITTED: &str = "No data points set";

/// Coefficients below this magnitude are omitted from the output.
const NEGLIGIBLE: f64 = 1e-10;

/// Render power-basis coefficients (`coeffs[k]` multiplies `x^k`) as
/// `P(x) = ...`, highest degree first.
pub(crate) fn format_power_form(coeffs: &[f64]) -> String {
    if coeffs.iter().any(|c| !c.is_finite()) {
        return PLACEHOLDER.to_string();
    }

    let mut out = String::new();
    for (degree, &coef) in coeffs.iter().enumerate().rev() {
        if coef.abs() < NEGLIGIBLE {
            continue;
        }

        let magnitude = coef.abs();
        if out.is_empty() {
            if coef < 0.0 {
                out.push('-');
            }
        } else {
            out.push_str(if coef < 0.0 { " - " } else { " + " });
        }

        let unit = (magnitude - 1.0).abs() < NEGLIGIBLE;
        if degree == 0 || !unit {
            out.push_str(&format!("{:.4}", magnitude));
        }
        if degree > 0 {
            if !unit {
                out.push('·');
            }
            out.push('x');
            if degree > 1 {
                out.push_str(&format!("^{}", degree));
            }
        }
    }

    if out.is_empty() {
        out.push('0');
    }
    format!("P(x) = {}", out)
}

/// Render a Newton-form polynomial
/// `c0 + c1(x - x0) + c2(x - x0)(x - x1) + ...`.
pub(crate) fn format_newton_form(coeffs: &[f64], nodes: &[f64]) -> String {
    if coeffs.is_empty() || coeffs.iter().chain(nodes).any(|v| !v.is_finite()) {
        return PLACEHOLDER.to_string();
    }

    let mut terms = Vec::with_capacity(coeffs.len());
    terms.push(format!("{:.4}", coeffs[0]));
    for (i, c) in coeffs.iter().enumerate().skip(1) {
        let mut term = format!("{:.4}", c);
        for &node in &nodes[..i] {
            term.push_str(&shifted_factor(node));
        }
        terms.push(term);
    }

    format!("P(x) = {}", terms.join(" + "))
}

/// `(x - a)` with the sign folded in, so `a = -1` renders as `(x + 1.00)`.
fn shifted_factor(node: f64) -> String {
    if node < 0.0 {
        format!("(x + {:.2})", -node)
    } else {
        format!("(x - {:.2})", node)
    }
}
