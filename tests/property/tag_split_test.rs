//! Property-based tests for comma tag splitting.
//!
//! The form keeps tags as comma-joined text; the gateway transmits a list.
//! For any list of plain tags joined with arbitrary whitespace around the
//! commas, splitting recovers the original list.

use proptest::prelude::*;

use puka_client::types::bookmark::{split_tags, TagsField};

/// Strategy for a single tag: no commas, no surrounding whitespace.
fn arb_tag() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,11}"
}

/// Strategy for whitespace padding around a comma.
fn arb_pad() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Joining with padded commas and splitting is the identity on tag lists.
    #[test]
    fn split_recovers_joined_tags(
        tags in proptest::collection::vec(arb_tag(), 1..6),
        pads in proptest::collection::vec((arb_pad(), arb_pad()), 6),
    ) {
        let mut joined = String::new();
        for (i, tag) in tags.iter().enumerate() {
            if i > 0 {
                let (before, after) = &pads[i % pads.len()];
                joined.push_str(before);
                joined.push(',');
                joined.push_str(after);
            }
            joined.push_str(tag);
        }

        prop_assert_eq!(split_tags(&joined), tags);
    }

    /// The list form of a draft's tags passes through untouched.
    #[test]
    fn list_tags_pass_through(tags in proptest::collection::vec(arb_tag(), 0..6)) {
        prop_assert_eq!(TagsField::List(tags.clone()).to_list(), tags);
    }
}

/// Empty and whitespace-only text carries no tags.
#[test]
fn test_empty_text_has_no_tags() {
    assert!(split_tags("").is_empty());
    assert!(split_tags("   ").is_empty());
}

/// Mixed spacing around commas: `"a, b,c"` transmits as `["a", "b", "c"]`.
#[test]
fn test_mixed_spacing_example() {
    assert_eq!(split_tags("a, b,c"), ["a", "b", "c"]);
}
