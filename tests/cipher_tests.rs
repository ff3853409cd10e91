// tests/cipher_tests.rs
mod common;
use common::init_tracing;

use cyphergrid::{generate_key, Alphabet, CipherError, HillCipher, Matrix};
use rand::{rngs::StdRng, SeedableRng};

const KEY: &str = "3,5,1,4,5,6,7,5,2";
const START_INDEX: i64 = 3;

fn reference_cipher() -> HillCipher {
    HillCipher::new(KEY, START_INDEX).unwrap()
}

#[test]
fn test_reference_scenario_frozen_ciphertext() {
    init_tracing();
    let cipher = reference_cipher();
    let ciphertext = cipher.encrypt("Use a").unwrap();

    let body: Vec<u32> = ciphertext[3..].chars().map(|c| c as u32).collect();
    assert!(ciphertext.starts_with("_1_"));
    assert_eq!(body, vec![59, 27, 3, 92, 9, 106]);
    assert_eq!(ciphertext, "_1_;\u{1b}\u{3}\\\tj");

    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "Use a");
}

#[test]
fn test_reference_matrices() {
    init_tracing();
    let cipher = reference_cipher();
    assert_eq!(cipher.block_size(), 3);
    assert_eq!(cipher.modulus(), 128);
    assert_eq!(cipher.start_index(), 3);
    assert_eq!(
        cipher.encryption_matrix().as_slice(),
        &[3, 5, 1, 4, 5, 6, 7, 5, 2]
    );
    assert_eq!(
        cipher.decryption_matrix().as_slice(),
        &[20, 101, 7, 30, 97, 78, 47, 108, 101]
    );
    let e = cipher.encryption_matrix();
    let d = cipher.decryption_matrix();
    assert!(e.mul_mod(d, 128).unwrap().is_identity_mod(128));
    assert!(d.mul_mod(e, 128).unwrap().is_identity_mod(128));
}

#[test]
fn test_textbook_hill_vector_uppercase_alphabet() {
    init_tracing();
    let alphabet = Alphabet::contiguous('A' as u32, 26).unwrap();
    let cipher = HillCipher::with_alphabet("3,3,2,5", 0, alphabet).unwrap();
    // HELP → HIAT, then the pad block ZZ → UT
    let ciphertext = cipher.encrypt("HELP").unwrap();
    assert_eq!(ciphertext, "_2_HIATUT");
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HELP");
}

#[test]
fn test_aligned_plaintext_gets_full_pad_block() {
    init_tracing();
    let cipher = reference_cipher();
    let ciphertext = cipher.encrypt("abc").unwrap();
    assert!(ciphertext.starts_with("_3_"));
    assert_eq!(ciphertext.chars().count(), 3 + 6);
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "abc");
}

#[test]
fn test_empty_plaintext_roundtrip() {
    init_tracing();
    let cipher = reference_cipher();
    let ciphertext = cipher.encrypt("").unwrap();
    assert!(ciphertext.starts_with("_3_"));
    assert_eq!(ciphertext.chars().count(), 3 + 3);
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "");
}

#[test]
fn test_roundtrip_control_characters_and_header_lookalikes() {
    init_tracing();
    let cipher = reference_cipher();
    for text in [
        "line one\nline two\r\n",
        "_12_ looks like a header",
        "\0\u{7f}\u{7f}",
        "tabs\tand ~tildes~",
    ] {
        let ciphertext = cipher.encrypt(text).unwrap();
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), text);
    }
}

#[test]
fn test_block_size_one_and_four() {
    init_tracing();
    let single = HillCipher::new("7", 0).unwrap();
    assert_eq!(single.decryption_matrix().as_slice(), &[55]);
    let ciphertext = single.encrypt("Attack at dawn!").unwrap();
    assert!(ciphertext.starts_with("_1_"));
    assert_eq!(single.decrypt(&ciphertext).unwrap(), "Attack at dawn!");

    let four = HillCipher::new("1,2,0,0, 0,1,3,0, 0,0,1,4, 5,0,0,1", -40).unwrap();
    assert_eq!(four.block_size(), 4);
    let ciphertext = four.encrypt("Attack at dawn!").unwrap();
    assert!(ciphertext.starts_with("_1_"));
    assert_eq!(four.decrypt(&ciphertext).unwrap(), "Attack at dawn!");
}

#[test]
fn test_out_of_range_key_values_are_reduced() {
    init_tracing();
    let plain = HillCipher::new(KEY, START_INDEX).unwrap();
    let shifted = HillCipher::new("131,-123,1,4,5,6,7,5,258", START_INDEX).unwrap();
    assert_eq!(
        plain.encrypt("same output").unwrap(),
        shifted.encrypt("same output").unwrap()
    );
}

#[test]
fn test_encrypt_is_deterministic() {
    init_tracing();
    let a = reference_cipher();
    let b = reference_cipher();
    let text = "The quick brown fox jumps over the lazy dog";
    assert_eq!(a.encrypt(text).unwrap(), a.encrypt(text).unwrap());
    assert_eq!(a.encrypt(text).unwrap(), b.encrypt(text).unwrap());
}

#[test]
fn test_start_index_changes_ciphertext() {
    init_tracing();
    let a = HillCipher::new(KEY, 3).unwrap();
    let b = HillCipher::new(KEY, 4).unwrap();
    assert_ne!(a.encrypt("Use a").unwrap(), b.encrypt("Use a").unwrap());
    let ciphertext = b.encrypt("Use a").unwrap();
    assert_eq!(b.decrypt(&ciphertext).unwrap(), "Use a");
}

#[test]
fn test_encrypt_rejects_unknown_character() {
    init_tracing();
    let cipher = reference_cipher();
    assert_eq!(
        cipher.encrypt("caf\u{e9}"),
        Err(CipherError::UnknownCharacter {
            character: '\u{e9}',
            position: 3
        })
    );
}

#[test]
fn test_decrypt_rejects_missing_header() {
    init_tracing();
    let cipher = reference_cipher();
    assert!(matches!(
        cipher.decrypt("no-header-here"),
        Err(CipherError::MalformedCiphertext { .. })
    ));
    for bad in ["", "_", "__abc", "_1abc", "_01_abc", "1_abc"] {
        assert!(
            matches!(
                cipher.decrypt(bad),
                Err(CipherError::MalformedCiphertext { .. })
            ),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_decrypt_rejects_pad_length_outside_block() {
    init_tracing();
    let cipher = reference_cipher();
    for bad in ["_0_abc", "_4_abc", "_300_abc"] {
        assert!(
            matches!(
                cipher.decrypt(bad),
                Err(CipherError::MalformedCiphertext { .. })
            ),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_decrypt_rejects_misaligned_body() {
    init_tracing();
    let cipher = reference_cipher();
    assert_eq!(
        cipher.decrypt("_1_abcd"),
        Err(CipherError::InvalidBlockAlignment {
            len: 4,
            block_size: 3
        })
    );
}

#[test]
fn test_decrypt_rejects_empty_body() {
    init_tracing();
    let cipher = reference_cipher();
    assert_eq!(
        cipher.decrypt("_1_"),
        Err(CipherError::PaddingOutOfRange { pad_len: 1, len: 0 })
    );
}

#[test]
fn test_decrypt_rejects_tail_that_is_not_padding() {
    init_tracing();
    let cipher = reference_cipher();
    // "abc" decrypts to a block ending in '3', not the pad character
    assert!(matches!(
        cipher.decrypt("_1_abc"),
        Err(CipherError::MalformedCiphertext { .. })
    ));
    // a real ciphertext relabelled with a larger pad length
    let ciphertext = cipher.encrypt("Use a").unwrap();
    let relabelled = ciphertext.replacen("_1_", "_2_", 1);
    assert!(matches!(
        cipher.decrypt(&relabelled),
        Err(CipherError::MalformedCiphertext { .. })
    ));
}

#[test]
fn test_decrypt_rejects_unknown_character_in_body() {
    init_tracing();
    let cipher = reference_cipher();
    assert_eq!(
        cipher.decrypt("_1_ab\u{e9}"),
        Err(CipherError::UnknownCharacter {
            character: '\u{e9}',
            position: 2
        })
    );
}

#[test]
fn test_from_matrix_matches_parsed_key() {
    init_tracing();
    let matrix = Matrix::new(3, vec![3, 5, 1, 4, 5, 6, 7, 5, 2]).unwrap();
    let from_matrix = HillCipher::from_matrix(matrix, START_INDEX, Alphabet::ascii()).unwrap();
    assert_eq!(from_matrix, reference_cipher());
}

#[test]
fn test_cipher_is_shareable_across_threads() {
    init_tracing();
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HillCipher>();

    let cipher = reference_cipher();
    let expected = cipher.encrypt("shared state").unwrap();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cipher = &cipher;
                s.spawn(move || {
                    let text = format!("worker {i}");
                    let ciphertext = cipher.encrypt(&text).unwrap();
                    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), text);
                    cipher.encrypt("shared state").unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_extreme_start_index_roundtrip() {
    init_tracing();
    for start_index in [i64::MAX, i64::MIN, i64::MAX - 1] {
        let cipher = HillCipher::new("1", start_index).unwrap();
        assert_eq!(cipher.start_index(), start_index);
        let ciphertext = cipher.encrypt("edge of i64").unwrap();
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "edge of i64");
    }
    // only start_index mod 128 reaches the arithmetic
    let reference = reference_cipher().encrypt("Use a").unwrap();
    let shifted = HillCipher::new(KEY, START_INDEX + 128 * 1_000_000)
        .unwrap()
        .encrypt("Use a")
        .unwrap();
    assert_eq!(shifted, reference);
}

#[test]
fn test_large_alphabet_roundtrip() {
    init_tracing();
    let alphabet = Alphabet::contiguous(0x4E00, 20_000).unwrap();
    let key = generate_key(&mut StdRng::seed_from_u64(6), 6, alphabet.size()).unwrap();
    let cipher = HillCipher::from_matrix(key, 17, alphabet).unwrap();
    let text = "\u{4e2d}\u{6587}\u{5b57}\u{7b26}\u{4e32}\u{6d4b}\u{8bd5}";
    let ciphertext = cipher.encrypt(text).unwrap();
    assert!(ciphertext.starts_with("_5_"));
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), text);
}
