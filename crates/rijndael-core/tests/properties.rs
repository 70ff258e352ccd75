//! Property tests for the round transforms and the block cipher.

use proptest::prelude::*;
use rijndael_core::{
    decrypt_block, encrypt_block, expand_key, gmul, inv_mix_columns, inv_shift_rows,
    inv_sub_bytes, mix_columns, shift_rows, sub_bytes, Aes128Key, Error, InputKind,
};

/// Byte vectors of any length except the block/key size.
fn wrong_length() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64).prop_filter("not 16 bytes", |v| v.len() != 16)
}

proptest! {
    #[test]
    fn sub_bytes_round_trip(state in any::<[u8; 16]>()) {
        let mut s = state;
        sub_bytes(&mut s);
        inv_sub_bytes(&mut s);
        prop_assert_eq!(s, state);
        inv_sub_bytes(&mut s);
        sub_bytes(&mut s);
        prop_assert_eq!(s, state);
    }

    #[test]
    fn shift_rows_round_trip(state in any::<[u8; 16]>()) {
        let mut s = state;
        shift_rows(&mut s);
        inv_shift_rows(&mut s);
        prop_assert_eq!(s, state);
    }

    #[test]
    fn mix_columns_round_trip(state in any::<[u8; 16]>()) {
        let mut s = state;
        mix_columns(&mut s);
        inv_mix_columns(&mut s);
        prop_assert_eq!(s, state);
    }

    #[test]
    fn decrypt_inverts_encrypt(plaintext in any::<[u8; 16]>(), key in any::<[u8; 16]>()) {
        let ct = encrypt_block(&plaintext, &key).unwrap();
        let pt = decrypt_block(&ct, &key).unwrap();
        prop_assert_eq!(pt, plaintext);
    }

    #[test]
    fn expansion_is_deterministic_and_starts_with_key(key in any::<[u8; 16]>()) {
        let a = expand_key(&Aes128Key::from(key));
        let b = expand_key(&Aes128Key::from(key));
        prop_assert_eq!(a.as_bytes(), b.as_bytes());
        prop_assert_eq!(&a.as_bytes()[..16], &key[..]);
    }

    #[test]
    fn gmul_laws(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(gmul(a, b), gmul(b, a));
        prop_assert_eq!(gmul(a, 1), a);
        prop_assert_eq!(gmul(a, 0), 0);
    }

    #[test]
    fn wrong_block_length_is_rejected(block in wrong_length(), key in any::<[u8; 16]>()) {
        let expected = Error::InvalidInputLength {
            input: InputKind::Block,
            expected: 16,
            actual: block.len(),
        };
        prop_assert_eq!(encrypt_block(&block, &key), Err(expected));
        prop_assert_eq!(decrypt_block(&block, &key), Err(expected));
    }

    #[test]
    fn wrong_key_length_is_rejected(block in any::<[u8; 16]>(), key in wrong_length()) {
        let expected = Error::InvalidInputLength {
            input: InputKind::Key,
            expected: 16,
            actual: key.len(),
        };
        prop_assert_eq!(encrypt_block(&block, &key), Err(expected));
        prop_assert_eq!(decrypt_block(&block, &key), Err(expected));
    }
}
