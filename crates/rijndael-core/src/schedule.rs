//! AES-128 key schedule.

use zeroize::Zeroize;

use crate::block::BLOCK_SIZE;
use crate::key::{Aes128Key, ExpandedKey, KEY_SIZE, ROUND_KEYS};
use crate::tables::{rcon, sbox};

/// Words per round key (Nb) and per cipher key (Nk) for AES-128.
const WORDS_PER_KEY: usize = 4;

const TOTAL_WORDS: usize = ROUND_KEYS * WORDS_PER_KEY;

type Word = [u8; 4];

fn sub_word(word: &mut Word) {
    for byte in word.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> ExpandedKey {
    let mut expanded = ExpandedKey([[0u8; BLOCK_SIZE]; ROUND_KEYS]);
    expand_into(key, &mut expanded);
    expanded
}

/// Runs the schedule directly in the storage of `expanded`, overwriting
/// every byte. Word `i` lives at bytes `4 * i..4 * i + 4`.
pub(crate) fn expand_into(key: &Aes128Key, expanded: &mut ExpandedKey) {
    let bytes = expanded.0.as_flattened_mut();
    bytes[..KEY_SIZE].copy_from_slice(key.as_bytes());

    let mut temp: Word = [0u8; 4];
    for i in WORDS_PER_KEY..TOTAL_WORDS {
        temp.copy_from_slice(&bytes[4 * (i - 1)..4 * i]);
        if i % WORDS_PER_KEY == 0 {
            temp.rotate_left(1);
            sub_word(&mut temp);
            temp[0] ^= rcon(i / WORDS_PER_KEY);
        }
        let back = 4 * (i - WORDS_PER_KEY);
        for (j, t) in temp.iter().enumerate() {
            bytes[4 * i + j] = bytes[back + j] ^ t;
        }
    }
    temp.zeroize();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_round_key_is_cipher_key() {
        let bytes: [u8; 16] = core::array::from_fn(|i| (i * 17) as u8);
        let expanded = expand_key(&Aes128Key::from(bytes));
        assert_eq!(expanded.round_key(0), &bytes);
        assert_eq!(&expanded.as_bytes()[..16], &bytes);
    }

    #[test]
    fn expansion_is_deterministic() {
        let key = Aes128Key::from([0x3c; 16]);
        assert_eq!(expand_key(&key), expand_key(&key));
    }

    #[test]
    fn zero_key_schedule() {
        // Known expansion of the all-zero key.
        let expanded = expand_key(&Aes128Key::from([0u8; 16]));
        assert_eq!(
            expanded.round_key(1),
            &[
                0x62, 0x63, 0x63, 0x63, 0x62, 0x63, 0x63, 0x63, 0x62, 0x63, 0x63, 0x63, 0x62, 0x63,
                0x63, 0x63,
            ]
        );
        assert_eq!(
            expanded.round_key(10),
            &[
                0xb4, 0xef, 0x5b, 0xcb, 0x3e, 0x92, 0xe2, 0x11, 0x23, 0xe9, 0x51, 0xcf, 0x6f, 0x8f,
                0x18, 0x8e,
            ]
        );
    }

    #[test]
    fn expand_into_overwrites_stale_storage() {
        let key = Aes128Key::from([0x2b; 16]);
        let mut reused = ExpandedKey([[0xff; BLOCK_SIZE]; ROUND_KEYS]);
        expand_into(&key, &mut reused);
        assert_eq!(reused, expand_key(&key));

        let other = Aes128Key::from([0x00; 16]);
        expand_into(&other, &mut reused);
        assert_eq!(reused, expand_key(&other));
    }

    #[test]
    fn distinct_keys_give_distinct_schedules() {
        let a = expand_key(&Aes128Key::from([0u8; 16]));
        let mut bytes = [0u8; 16];
        bytes[15] = 1;
        let b = expand_key(&Aes128Key::from(bytes));
        for round in 0..ROUND_KEYS {
            assert_ne!(a.round_key(round), b.round_key(round), "round {round}");
        }
    }
}
