use crate::*;
use proptest::prelude::*;

// Property: non-negative numbers joined with any default delimiter sum exactly
proptest! {
    #[test]
    fn prop_default_delimiters_recover_total(
        nums in prop::collection::vec(0..=i32::MAX, 0..32),
        newline in any::<bool>(),
    ) {
        let delim = if newline { "\n" } else { "," };
        let input = nums.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(delim);
        let expected: i64 = nums.iter().copied().map(i64::from).sum();
        prop_assert_eq!(sum(&input), Ok(expected));
    }
}

// Property: a custom header delimiter splits literally, whatever it contains
proptest! {
    #[test]
    fn prop_custom_delimiter_recovers_total(
        nums in prop::collection::vec(0..10_000i32, 1..16),
        delim in "[;.*+?|()\\[\\]{}^$#@!]{1,4}",
    ) {
        let body = nums.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(&delim);
        let input = format!(";{delim}\n{body}");
        let expected: i64 = nums.iter().copied().map(i64::from).sum();
        prop_assert_eq!(sum(&input), Ok(expected));
    }
}

// Property: every negative operand is reported, in order
proptest! {
    #[test]
    fn prop_all_negatives_reported(nums in prop::collection::vec(-1000..1000i32, 1..24)) {
        let input = nums.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(",");
        let negatives: Vec<i32> = nums.iter().copied().filter(|n| *n < 0).collect();
        let result = sum(&input);
        if negatives.is_empty() {
            prop_assert_eq!(result, Ok(nums.iter().copied().map(i64::from).sum::<i64>()));
        } else {
            prop_assert_eq!(result, Err(SumError::NegativeNumber { offenders: negatives }));
        }
    }
}

// Property: summing is deterministic
proptest! {
    #[test]
    fn prop_sum_is_idempotent(s in "[0-9,\\n;-]{0,24}") {
        prop_assert_eq!(sum(&s), sum(&s));
    }
}
