//! Encrypts and decrypts one block, printing each step as hex.

use rijndael_core::{decrypt_block, encrypt_block, expand_key, Aes128Key};

fn main() -> Result<(), rijndael_core::Error> {
    let key: [u8; 16] = core::array::from_fn(|i| i as u8);
    let plaintext = *b"single AES block";

    let ciphertext = encrypt_block(&plaintext, &key)?;
    let decrypted = decrypt_block(&ciphertext, &key)?;

    let expanded = expand_key(&Aes128Key::from(key));
    println!("key:        {}", hex::encode(key));
    println!("last round: {}", hex::encode(expanded.round_key(10)));
    println!("plaintext:  {}", hex::encode(plaintext));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted:  {}", hex::encode(decrypted));
    assert_eq!(decrypted, plaintext);

    // A short block is rejected before anything is computed.
    if let Err(err) = encrypt_block(&plaintext[..15], &key) {
        println!("rejected:   {err}");
    }
    Ok(())
}
