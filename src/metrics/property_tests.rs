//! Property tests for metric derivation
//!
//! Covers the Range Midpoint Rule, the Percentage Rule and the tier
//! step functions.

use proptest::prelude::*;

use crate::metrics::{digit_runs, leading_percent, range_midpoint, score_tier, visa_tier, Tier};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators
// ═══════════════════════════════════════════════════════════════════════════

/// Format an integer with thousands separators, the way the dataset does
fn with_separators(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Generate a "low - high" display range with optional separators
fn range_string_strategy() -> impl Strategy<Value = (u32, u32, String)> {
    (0u32..200_000, 0u32..200_000, prop::bool::ANY).prop_map(|(a, b, sep)| {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let text = if sep {
            format!("{} - {}", with_separators(low), with_separators(high))
        } else {
            format!("{} - {}", low, high)
        };
        (low, high, text)
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Midpoint of a well-formed range is the average of its endpoints
    #[test]
    fn prop_midpoint_is_endpoint_average((low, high, text) in range_string_strategy()) {
        let expected = (low as f64 + high as f64) / 2.0;
        prop_assert_eq!(range_midpoint(&text), expected);
    }

    /// A single formatted number is its own midpoint
    #[test]
    fn prop_single_number_midpoint(n in 0u32..10_000_000) {
        prop_assert_eq!(range_midpoint(&with_separators(n)), n as f64);
    }

    /// The Percentage Rule reads the leading integer regardless of suffix
    #[test]
    fn prop_leading_percent(rate in 0i32..=100, suffix in "[%a-z ]{0,8}") {
        let text = format!("{}{}", rate, suffix);
        prop_assert_eq!(leading_percent(&text), rate);
    }

    /// Strings without digits always degrade to zero, never panic
    #[test]
    fn prop_digit_free_degrades(text in "[^0-9]*") {
        prop_assert_eq!(range_midpoint(&text), 0.0);
        prop_assert_eq!(leading_percent(&text), 0);
        prop_assert!(digit_runs(&text).is_empty());
    }

    /// Score tiers form a monotone step function
    #[test]
    fn prop_score_tier_monotone(a in 0i32..=100, b in 0i32..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(score_tier(lo) <= score_tier(hi));
    }

    /// Visa tiers form a monotone step function
    #[test]
    fn prop_visa_tier_monotone(a in 0i32..=100, b in 0i32..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(visa_tier(lo) <= visa_tier(hi));
    }

    /// Every score lands in exactly the bucket its thresholds describe
    #[test]
    fn prop_score_tier_thresholds(score in 0i32..=100) {
        let expected = if score >= 85 {
            Tier::Elite
        } else if score >= 75 {
            Tier::Strong
        } else if score >= 65 {
            Tier::Mid
        } else {
            Tier::Base
        };
        prop_assert_eq!(score_tier(score), expected);
    }
}
