//! Tests for the key hash and key identity.

use keyed::{key_hash, Key, HASH_MULTIPLIER, HASH_SEED};

use super::common::leak_key;

#[test]
fn test_hash_of_empty_text_is_seed() {
    assert_eq!(key_hash(""), HASH_SEED);
    assert_eq!(Key::new("").stable_hash(), 5381);
}

#[test]
fn test_hash_unfolds_from_the_right() {
    // hash("is") = 'i' + 33 * ('s' + 33 * 5381)
    let expected = 105 + HASH_MULTIPLIER * (115 + HASH_MULTIPLIER * HASH_SEED);
    assert_eq!(key_hash("is"), expected);
}

#[test]
fn test_hash_uses_utf8_bytes() {
    // "é" is 0xC3 0xA9
    let expected = 0xC3 + 33 * (0xA9 + 33 * 5381);
    assert_eq!(key_hash("é"), expected);
}

#[test]
fn test_demo_keys_have_distinct_hashes() {
    let hashes: Vec<u64> = ["hello", "world", "is", "empty", "nowhere"]
        .iter()
        .map(|text| key_hash(text))
        .collect();
    for (i, a) in hashes.iter().enumerate() {
        for b in &hashes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_key_identity_ignores_declaration_site() {
    let literal = Key::new("world");
    let runtime = leak_key("world");
    assert_eq!(literal, runtime);
    assert!(literal.same_as(&runtime));
    assert_ne!(literal, Key::new("World"));
}
