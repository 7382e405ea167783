/// Monthly price used for a platform the user doesn't subscribe to yet
///
/// Single source for list prices; anything not in the table costs [`FALLBACK_MONTHLY_PRICE`].
const PLATFORM_PRICES: &[(&str, f64)] = &[
    ("Netflix", 15.49),
    ("HBO Max", 15.99),
    ("Prime Video", 8.99),
    ("Peacock", 5.99),
    ("Disney+", 10.99),
    ("Hulu", 7.99),
    ("Apple TV+", 6.99),
    ("Paramount+", 5.99),
];

pub const FALLBACK_MONTHLY_PRICE: f64 = 9.99;

/// Looks up the default monthly price for a platform
pub fn default_monthly_price(platform: &str) -> f64 {
    PLATFORM_PRICES
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, price)| *price)
        .unwrap_or(FALLBACK_MONTHLY_PRICE)
}

/// Whether the platform has a listed price
pub fn is_known_platform(platform: &str) -> bool {
    PLATFORM_PRICES.iter().any(|(name, _)| *name == platform)
}
