// Strict Base32 decoder (RFC 4648, standard alphabet)
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

// Maps an ASCII byte to its 5-bit value, 0xFF for bytes outside the alphabet.
const DECODE_TABLE: [u8; 256] = {
    let mut table = [0xFFu8; 256];
    let mut i = 0;
    while i < 32 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Decodes an uppercase, correctly padded Base32 string. Callers normalize
/// case and whitespace first; lowercase input is rejected here.
pub fn base32_decode(input: &str) -> anyhow::Result<Vec<u8>> {
    if input.len() % 8 != 0 {
        anyhow::bail!("encoded length {} is not a multiple of 8", input.len());
    }

    let (data, padding) = match input.find('=') {
        Some(first) => input.split_at(first),
        None => (input, ""),
    };

    if padding.bytes().any(|b| b != b'=') {
        anyhow::bail!("padding is only allowed at the end of the input");
    }
    // A final group of 8 holds 2, 4, 5, 7 or 8 data characters.
    if !matches!(padding.len(), 0 | 1 | 3 | 4 | 6) {
        anyhow::bail!("invalid padding run of {}", padding.len());
    }

    let mut result = Vec::with_capacity(data.len() * 5 / 8);
    let mut buffer = 0u64;
    let mut bits = 0;

    for byte in data.bytes() {
        let value = DECODE_TABLE[byte as usize];
        if value == 0xFF {
            anyhow::bail!("invalid base32 character {:?}", byte as char);
        }
        buffer = (buffer << 5) | u64::from(value);
        bits += 5;

        if bits >= 8 {
            result.push((buffer >> (bits - 8)) as u8);
            bits -= 8;
        }
    }

    Ok(result)
}
