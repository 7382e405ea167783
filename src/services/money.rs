//! Dollar arithmetic shared by the budget, rotation and projection steps.

/// Slack for comparing sums of float costs against a cap
const CENT_EPSILON: f64 = 1e-6;

/// Whether `amount` stays within `cap`, ignoring float noise below a cent
pub fn fits_within(amount: f64, cap: f64) -> bool {
    amount <= cap + CENT_EPSILON
}

/// Float error left over from multiplying a cent amount by a ratio
const PRODUCT_NOISE: f64 = 1e-9;

/// Smallest whole dollar amount at or above `amount`
///
/// Absorbs product noise (20.0 * 0.6 = 12.000000000000002) without hiding a
/// real fraction such as 13.002.
pub fn ceil_dollars(amount: f64) -> f64 {
    (amount - PRODUCT_NOISE).ceil()
}

/// `part / whole` as a rounded percentage; zero when `whole` is not positive
pub fn percentage_of(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 || !whole.is_finite() {
        return 0;
    }
    let pct = (part / whole * 100.0).round();
    if pct.is_finite() && pct > 0.0 {
        pct as u32
    } else {
        0
    }
}
