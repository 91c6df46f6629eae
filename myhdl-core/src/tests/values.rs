//! Hex value formatting for the width buckets.

use rand::Rng;

use crate::util::{hex_to_words, mask_width, word_count, words_to_hex};

#[test]
fn narrow_values_mask_to_their_declared_width() {
    assert_eq!(mask_width(0xff, 4), 0xf);
    assert_eq!(mask_width(0x1ff, 9), 0x1ff);
    assert_eq!(mask_width(u64::MAX, 64), u64::MAX);
    assert_eq!(mask_width(0b1010, 1), 0);
}

#[test]
fn wide_values_render_most_significant_word_first() {
    assert_eq!(words_to_hex(&[0xdeadbeef, 0x1]), "00000001deadbeef");
    assert_eq!(words_to_hex(&[0, 0, 0xa]), "0000000a0000000000000000");
}

#[test]
fn wide_values_parse_from_the_least_significant_digit() {
    let mut words = [0u32; 3];
    hex_to_words("1deadbeef", &mut words);
    assert_eq!(words, [0xdeadbeef, 0x1, 0]);

    // Digits beyond the declared word count drop.
    hex_to_words("fffffffffffffffffffffffff", &mut words[..2]);
    assert_eq!(&words[..2], &[0xffffffff, 0xffffffff]);
}

#[test]
fn word_counts_round_up() {
    assert_eq!(word_count(1), 1);
    assert_eq!(word_count(32), 1);
    assert_eq!(word_count(33), 2);
    assert_eq!(word_count(96), 3);
}

#[test]
fn wide_rendering_round_trips() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let len = rng.gen_range(1..5);
        let words: Vec<u32> = (0..len).map(|_| rng.gen()).collect();
        let hex = words_to_hex(&words);
        let mut parsed = vec![0u32; len];
        hex_to_words(&hex, &mut parsed);
        assert_eq!(parsed, words);
    }
}
