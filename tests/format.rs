//! Number and text formatting tests
//!
use pairdish::format::*;

#[cfg(test)]
mod rounding_tests {
    use super::*;

    #[test]
    fn test_js_round_halves_go_up() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(1617.5), 1618.0);
        assert_eq!(js_round(2.49), 2.0);
    }

    #[test]
    fn test_js_round_edge_values() {
        // Largest double below one half.
        assert_eq!(js_round(0.5 - f64::EPSILON / 4.0), 0.0);
        assert_eq!(js_round(-0.5), 0.0);
        assert_eq!(js_round(-0.6), -1.0);
        let odd = 4_503_599_627_370_497.0;
        assert_eq!(js_round(odd), odd);
        assert!(js_round(f64::NAN).is_nan());
    }

    #[test]
    fn test_ceil_to_decimals() {
        assert_eq!(ceil_to(7.51, 1), 7.6);
        assert_eq!(ceil_to(7.5, 1), 7.5);
        assert_eq!(ceil_to(2.01, 0), 3.0);
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_parse_lenient_reads_leading_number() {
        assert_eq!(parse_lenient("12.5g"), Some(12.5));
        assert_eq!(parse_lenient("  7"), Some(7.0));
        assert_eq!(parse_lenient("-3.5 degrees"), Some(-3.5));
        assert_eq!(parse_lenient(".5"), Some(0.5));
        assert_eq!(parse_lenient("1e3x"), Some(1000.0));
        assert_eq!(parse_lenient("4e"), Some(4.0));
    }

    #[test]
    fn test_parse_lenient_rejects_non_numbers() {
        assert_eq!(parse_lenient("abc"), None);
        assert_eq!(parse_lenient(""), None);
        assert_eq!(parse_lenient("-"), None);
        assert_eq!(parse_lenient("."), None);
    }

    #[test]
    fn test_infinity_is_parsed_but_coerced_to_zero() {
        assert_eq!(parse_lenient("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(coerce_or_zero("Infinity"), 0.0);
        assert_eq!(coerce_or_zero("hot"), 0.0);
        assert_eq!(coerce_or_zero("350F"), 350.0);
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;

    #[test]
    fn test_format_number_drops_zero_fraction() {
        assert_eq!(format_number(70.0, 1), "70");
        assert_eq!(format_number(72.72, 1), "72.7");
        assert_eq!(format_number(12.3456, 2), "12.35");
        assert_eq!(format_number(5.0, 0), "5");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(42.5), "43%");
        assert_eq!(format_percentage(0.0), "0%");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_fraction(1.5), "1½");
        assert_eq!(format_fraction(0.33), "⅓");
        assert_eq!(format_fraction(2.75), "2¾");
        assert_eq!(format_fraction(3.0), "3");
        assert_eq!(format_fraction(4.02), "4");
        assert_eq!(format_fraction(1.06), "1.06");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("bottle", 1.0), "bottle");
        assert_eq!(pluralize("bottle", 2.0), "bottles");
        assert_eq!(pluralize("berry", 3.0), "berries");
        assert_eq!(pluralize("glass", 0.0), "glasses");
        assert_eq!(pluralize("dish", 2.0), "dishes");
        assert_eq!(pluralize("box", 2.0), "boxes");
    }

    #[test]
    fn test_capitalization() {
        assert_eq!(capitalize("salmon"), "Salmon");
        assert_eq!(capitalize(""), "");
        assert_eq!(title_case("red wine vinegar"), "Red Wine Vinegar");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("short", 8), "short");
        assert_eq!(truncate("crème brûlée", 12), "crème brûlée");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45 min");
        assert_eq!(format_minutes(120), "2h");
        assert_eq!(format_minutes(75), "1h 15m");
        assert_eq!(format_minutes(0), "0 min");
    }

    #[test]
    fn test_match_quality_bands() {
        assert_eq!(match_quality(95), ("Excellent Match", MatchTier::High));
        assert_eq!(match_quality(90), ("Excellent Match", MatchTier::High));
        assert_eq!(match_quality(80), ("Great Match", MatchTier::High));
        assert_eq!(match_quality(65), ("Good Match", MatchTier::Medium));
        assert_eq!(match_quality(45), ("Worth Trying", MatchTier::Low));
        assert_eq!(match_quality(39), ("Experimental", MatchTier::Unexpected));
    }
}
