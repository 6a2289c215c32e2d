//! Value Objects for the catalog

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exact decimal price. Zero is the "unset" marker for variant prices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(Decimal);

impl Price {
    pub const UNSET: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self { Self(amount) }
    pub fn amount(&self) -> Decimal { self.0 }
    pub fn is_unset(&self) -> bool { self.0.is_zero() }

    /// Effective price of a variant: its own price when set, otherwise the
    /// owning product's price.
    pub fn resolve(variant: Price, product: Price) -> Price {
        if variant.is_unset() { product } else { variant }
    }

    /// Nearest `f64` for the wire. Lossy by nature.
    pub fn to_f64(&self) -> f64 { self.0.to_f64().unwrap_or_default() }

    /// Lenient parse used for query parameters; accepts plain and scientific
    /// notation. Digit separators (`1_000`) are not numbers here.
    pub fn parse(value: &str) -> Option<Self> {
        if value.contains('_') {
            return None;
        }
        Decimal::from_str(value)
            .or_else(|_| Decimal::from_scientific(value))
            .ok()
            .map(Self)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self { Self(amount) }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Offset/limit window over a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    offset: i64,
    limit: i64,
}

impl Pagination {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 100;

    /// Normalizes already-numeric values: negative offsets become zero,
    /// non-positive limits fall back to the default, large limits are clamped.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset: offset.max(0), limit: Self::clamp_limit(limit) }
    }

    /// Normalizes raw text parameters. Anything unparsable takes the default.
    pub fn from_params(offset: Option<&str>, limit: Option<&str>) -> Self {
        let offset = offset.and_then(|s| s.parse::<i64>().ok()).unwrap_or(0);
        let limit = limit.and_then(|s| s.parse::<i64>().ok()).unwrap_or(Self::DEFAULT_LIMIT);
        Self::new(offset, limit)
    }

    pub fn clamp_limit(limit: i64) -> i64 {
        if limit <= 0 { Self::DEFAULT_LIMIT } else { limit.min(Self::MAX_LIMIT) }
    }

    pub fn offset(&self) -> i64 { self.offset }
    pub fn limit(&self) -> i64 { self.limit }
}

impl Default for Pagination {
    fn default() -> Self { Self::new(0, Self::DEFAULT_LIMIT) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn price(s: &str) -> Price { Price::parse(s).unwrap() }

    #[test]
    fn test_resolve_prefers_variant_price() {
        assert_eq!(Price::resolve(price("11.99"), price("10.99")), price("11.99"));
    }

    #[test]
    fn test_resolve_inherits_product_price() {
        assert_eq!(Price::resolve(Price::UNSET, price("10.99")), price("10.99"));
        assert_eq!(Price::resolve(price("0.00"), price("10.99")), price("10.99"));
    }

    #[test]
    fn test_price_parse() {
        assert_eq!(price("10.99").amount(), Decimal::new(1099, 2));
        assert_eq!(price("1e2").amount(), Decimal::new(100, 0));
        assert!(Price::parse("ten").is_none());
        assert!(Price::parse("").is_none());
    }

    #[test]
    fn test_price_parse_rejects_separators() {
        assert!(Price::parse("1_0").is_none());
        assert!(Price::parse("1_000.50").is_none());
        assert!(Price::parse("1e_2").is_none());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(price("10.99").to_f64(), 10.99);
    }

    #[test]
    fn test_pagination_defaults() {
        assert_eq!(Pagination::from_params(None, None), Pagination::new(0, 10));
        assert_eq!(Pagination::from_params(Some("abc"), Some("")), Pagination::new(0, 10));
        assert_eq!(Pagination::from_params(Some("-3"), Some("0")), Pagination::new(0, 10));
        assert_eq!(Pagination::from_params(Some("1"), Some("20")), Pagination::new(1, 20));
    }

    #[test]
    fn test_pagination_clamps_limit() {
        let p = Pagination::from_params(Some("5"), Some("1000"));
        assert_eq!(p.offset(), 5);
        assert_eq!(p.limit(), 100);
    }

    proptest! {
        #[test]
        fn negative_offset_resets_to_zero(offset in i64::MIN..0) {
            prop_assert_eq!(Pagination::from_params(Some(offset.to_string().as_str()), None).offset(), 0);
        }

        #[test]
        fn non_numeric_offset_resets_to_zero(raw in "[a-zA-Z ]{0,12}") {
            prop_assert_eq!(Pagination::from_params(Some(raw.as_str()), None).offset(), 0);
        }

        #[test]
        fn non_positive_limit_uses_default(limit in i64::MIN..=0) {
            prop_assert_eq!(Pagination::from_params(None, Some(limit.to_string().as_str())).limit(), 10);
        }

        #[test]
        fn large_limit_is_clamped(limit in 101i64..i64::MAX) {
            prop_assert_eq!(Pagination::from_params(None, Some(limit.to_string().as_str())).limit(), 100);
        }

        #[test]
        fn resolve_falls_back_only_when_unset(
            variant in 0i64..1_000_000,
            product in 0i64..1_000_000,
        ) {
            let v = Price::new(Decimal::new(variant, 2));
            let p = Price::new(Decimal::new(product, 2));
            let expected = if variant != 0 { v } else { p };
            prop_assert_eq!(Price::resolve(v, p), expected);
        }
    }
}
