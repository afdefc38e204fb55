// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Exhaustive checks over every valid offset pair, for a handful of texts mixing ASCII,
//! combining marks, emoji with modifiers, ZWJ sequences, and wide CJK characters.

use r3bl_string_ext::{GraphemeSliceError, GraphemeSliceExt, GraphemeText, assert_eq2,
                      grapheme_count, slice_closed, slice_from, slice_half_open,
                      slice_through, slice_up_to, try_slice_closed, try_slice_from,
                      try_slice_half_open, try_slice_through, try_slice_up_to};
use test_case::test_case;

const SAMPLES: [&str; 6] = [
    "",
    "hello",
    "e\u{301}b",
    "📦🙏🏽👨‍👩‍👧x",
    "日本語テキスト",
    "a\r\nb\u{301}\u{302}c",
];

#[test]
fn test_half_open_length_is_hi_minus_lo() {
    for sample in SAMPLES {
        let text = GraphemeText::new(sample);
        let len = text.len().as_usize();
        for lo in 0..=len {
            for hi in lo..=len {
                let it = slice_half_open(&text, lo, hi);
                assert_eq2!(grapheme_count(it), hi - lo, "{sample:?} {lo}..{hi}");
                // Cached and ad hoc boundary walks agree.
                assert_eq2!(it, slice_half_open(sample, lo, hi));
            }
        }
    }
}

#[test]
fn test_closed_is_half_open_plus_one() {
    for sample in SAMPLES {
        let text = GraphemeText::new(sample);
        let len = text.len().as_usize();
        for lo in 0..len {
            for hi in lo..len {
                assert_eq2!(
                    slice_closed(&text, lo, hi),
                    slice_half_open(&text, lo, hi + 1)
                );
            }
        }
    }
}

#[test]
fn test_one_sided_shapes() {
    for sample in SAMPLES {
        let text = GraphemeText::new(sample);
        let len = text.len().as_usize();
        for offset in 0..=len {
            assert_eq2!(slice_up_to(&text, offset), slice_half_open(&text, 0, offset));
            assert_eq2!(slice_from(&text, offset), slice_half_open(&text, offset, len));
        }
        for offset in 0..len {
            assert_eq2!(slice_through(&text, offset), slice_closed(&text, 0, offset));
        }
    }
}

#[test]
fn test_slices_concatenate_back() {
    for sample in SAMPLES {
        let text = GraphemeText::new(sample);
        let len = text.len().as_usize();
        for mid in 0..=len {
            let joined = format!("{}{}", slice_up_to(&text, mid), slice_from(&text, mid));
            assert_eq2!(joined, sample);
        }
    }
}

#[test]
fn test_never_splits_a_cluster() {
    assert_eq2!(slice_half_open("e\u{301}b", 0, 1), "e\u{301}");
    assert_eq2!(slice_half_open("📦🙏🏽👨‍👩‍👧x", 2, 3), "👨‍👩‍👧");
    assert_eq2!(slice_half_open("a\r\nb", 1, 2), "\r\n");
}

#[test]
fn test_hello() {
    let text = GraphemeText::new("hello");
    assert_eq2!(slice_half_open(&text, 1, 4), "ell");
    assert_eq2!(slice_closed(&text, 1, 3), "ell");
    assert_eq2!(slice_up_to(&text, 2), "he");
    assert_eq2!(slice_through(&text, 2), "hel");
    assert_eq2!(slice_from(&text, 3), "lo");
    assert_eq2!("hello".grapheme_slice(1..4), "ell");
}

#[test]
fn test_empty_text() {
    assert_eq2!(slice_half_open("", 0, 0), "");
    assert_eq2!(slice_up_to("", 0), "");
    assert_eq2!(slice_from("", 0), "");
    assert_eq2!(
        try_slice_through("", 0),
        Err(GraphemeSliceError::InclusiveUpperBoundOutOfBounds { hi: 0, len: 0 })
    );
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_out_of_bounds_panics() { let _ = slice_half_open("hi", 0, 3); }

#[test_case("hi", 0, 3, GraphemeSliceError::UpperBoundOutOfBounds { hi: 3, len: 2 } ; "hi past end")]
#[test_case("hello", 4, 2, GraphemeSliceError::LowerBoundAfterUpperBound { lo: 4, hi: 2 } ; "lo after hi")]
#[test_case("e\u{301}b", 0, 3, GraphemeSliceError::UpperBoundOutOfBounds { hi: 3, len: 2 } ; "counts graphemes not chars")]
fn test_try_half_open_errors(
    input: &str,
    lo: usize,
    hi: usize,
    expected: GraphemeSliceError,
) {
    assert_eq2!(try_slice_half_open(input, lo, hi), Err(expected));
}

#[test]
fn test_try_variants_never_clamp() {
    let text = GraphemeText::new("abc");
    assert_eq2!(
        try_slice_closed(&text, 0, 3),
        Err(GraphemeSliceError::InclusiveUpperBoundOutOfBounds { hi: 3, len: 3 })
    );
    assert_eq2!(
        try_slice_up_to(&text, 4),
        Err(GraphemeSliceError::UpperBoundOutOfBounds { hi: 4, len: 3 })
    );
    assert_eq2!(
        try_slice_from(&text, 4),
        Err(GraphemeSliceError::LowerBoundOutOfBounds { lo: 4, len: 3 })
    );
    assert_eq2!(try_slice_from(&text, 3), Ok(""));
    assert_eq2!(try_slice_half_open(&text, 1, 1), Ok(""));
}
