use anyhow::{Result, anyhow};

/// Largest random pad appended before encryption.
pub const MAX_PADDING: usize = 16;

pub struct MessageUtils;

impl MessageUtils {
    pub fn pad_message_v2(mut plaintext: Vec<u8>) -> Vec<u8> {
        use rand::Rng;
        let mut rng = rand::rng();

        let mut pad_val = rng.random::<u8>() & 0x0F;
        if pad_val == 0 {
            pad_val = 0x0F;
        }

        let padding = vec![pad_val; pad_val as usize];
        plaintext.extend_from_slice(&padding);
        plaintext
    }

    /// Strips the random trailing pad: the last byte gives the pad length
    /// (1..=16) and every pad byte must repeat it.
    pub fn unpad_message_ref(plaintext: &[u8]) -> Result<&[u8]> {
        let Some(&last) = plaintext.last() else {
            return Err(anyhow!("plaintext is empty, cannot unpad"));
        };
        let pad_len = last as usize;
        if pad_len == 0 || pad_len > MAX_PADDING || pad_len > plaintext.len() {
            return Err(anyhow!(
                "invalid padding length {pad_len} for {} bytes",
                plaintext.len()
            ));
        }
        let (data, padding) = plaintext.split_at(plaintext.len() - pad_len);
        if padding.iter().any(|&b| b != last) {
            return Err(anyhow!("invalid padding bytes"));
        }
        Ok(data)
    }
}
