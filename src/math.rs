//! Rounding, binomial confidence intervals and percentage shares.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UtilError};

/// Round `v` to `num_pos` decimal places, halves away from zero.
pub fn round_to_pos(v: f64, num_pos: i32) -> f64 {
    let r = 10f64.powi(num_pos);
    (v * r).round() / r
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlphaLevel {
    #[serde(rename = "0.1")]
    Level10,
    #[serde(rename = "0.05")]
    Level5,
    #[serde(rename = "0.01")]
    Level1,
}

impl AlphaLevel {
    pub fn alpha(self) -> f64 {
        match self {
            AlphaLevel::Level10 => 0.1,
            AlphaLevel::Level5 => 0.05,
            AlphaLevel::Level1 => 0.01,
        }
    }

    /// Two-sided normal quantile, i.e. `ppf(1 - alpha / 2)`.
    pub fn z(self) -> f64 {
        match self {
            AlphaLevel::Level10 => 1.6448536269514722,
            AlphaLevel::Level5 => 1.959963984540054,
            AlphaLevel::Level1 => 2.5758293035489004,
        }
    }
}

/// Wilson score interval for `v` successes out of `base` trials.
///
/// Returns `(low, high)` as proportions in 0..1.
pub fn wilson_conf_interval(v: f64, base: f64, alpha: AlphaLevel) -> Result<(f64, f64)> {
    if !(base > 0.0) || !base.is_finite() {
        return Err(UtilError::invalid(format!(
            "confidence interval base must be positive, got {base}"
        )));
    }
    if !(0.0..=base).contains(&v) {
        return Err(UtilError::invalid(format!(
            "successes must lie within 0..={base}, got {v}"
        )));
    }
    let z = alpha.z();
    let z2 = z * z;
    let p = v / base;
    let sq = z * (p * (1.0 - p) / base + z2 / (4.0 * base * base)).sqrt();
    let denom = 1.0 + z2 / base;
    let a = p + z2 / (2.0 * base);

    Ok(((a - sq) / denom, (a + sq) / denom))
}

/// Split 100 % between `items` proportionally to `get`, with one decimal
/// place of precision.
///
/// Every share is rounded to 0.1 % first. The rounding residue (itself
/// rounded to 0.1) is then added to the single item whose share has the
/// largest fractional part, so the shares always sum to 100. Fractional
/// parts are compared in whole tenths; on a tie the earliest item wins.
///
/// Results come back in input order. Fails with
/// [`UtilError::InvalidArgument`] on an empty slice, a negative or
/// non-finite weight, or a zero total; `trans` is never called in that case.
pub fn calc_percent_ratios<T, U, G, F>(items: &[T], get: G, mut trans: F) -> Result<Vec<U>>
where
    G: Fn(&T) -> f64,
    F: FnMut(&T, f64) -> U,
{
    if items.is_empty() {
        tracing::warn!("percent ratios requested for an empty list");
        return Err(UtilError::invalid("cannot calculate ratios of an empty list"));
    }

    let weights: Vec<f64> = items.iter().map(&get).collect();
    if let Some((idx, w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        tracing::warn!(idx, weight = *w, "rejected percent ratio weight");
        return Err(UtilError::invalid(format!(
            "weight at position {idx} must be a non-negative number, got {w}"
        )));
    }

    let total: f64 = weights.iter().sum();
    if !(total > 0.0) || !total.is_finite() {
        tracing::warn!(total, "rejected percent ratio total");
        return Err(UtilError::invalid(format!(
            "total weight must be positive, got {total}"
        )));
    }

    let permille: Vec<i64> = weights
        .iter()
        .map(|w| (w / total * 1000.0).round() as i64)
        .collect();

    let mut lead = 0;
    for (idx, pm) in permille.iter().enumerate().skip(1) {
        if pm % 10 > permille[lead] % 10 {
            lead = idx;
        }
    }

    let mut ratios: Vec<f64> = permille.iter().map(|pm| *pm as f64 / 10.0).collect();

    let sum: f64 = ratios.iter().sum();
    let diff = ((100.0 - sum) * 10.0).round() / 10.0;
    ratios[lead] += diff;
    tracing::debug!(items = items.len(), total, lead, diff, "percent ratios corrected");

    Ok(items
        .iter()
        .zip(ratios)
        .map(|(item, ratio)| trans(item, ratio))
        .collect())
}

/// Point-free form of [`calc_percent_ratios`]: binds the accessor and the
/// transform now and takes the data later.
pub fn percent_ratios<T, U, G, F>(get: G, trans: F) -> impl Fn(&[T]) -> Result<Vec<U>>
where
    G: Fn(&T) -> f64,
    F: Fn(&T, f64) -> U,
{
    move |items: &[T]| calc_percent_ratios(items, &get, &trans)
}
