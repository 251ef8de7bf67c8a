/// Lexicographic base32 alphabet. Digits `0`, `1` and letters easily
/// confused with them are left out; symbols are in ascending byte order.
pub const ALPHABET: &[u8; 32] = b"234567abcdefghijklmnopqrstuvwxyz";

/// Bytes per chunk. Five bytes pack exactly into eight 5-bit groups.
const CHUNK_LEN: usize = 5;

/// Number of output symbols for an input of `byte_count` bytes.
pub fn encoded_len(byte_count: usize) -> usize {
    (byte_count * 8 + 4) / 5
}

/// Split a number into its minimal big-endian bytes. Zero is `[0x00]`.
pub fn bytes_from_number(mut number: u128) -> Vec<u8> {
    if number == 0 {
        return vec![0];
    }

    let mut bytes = Vec::with_capacity(16);
    while number > 0 {
        bytes.push((number & 0xFF) as u8);
        number >>= 8;
    }
    bytes.reverse();
    bytes
}

/// Encode big-endian bytes into lexicographic base32.
pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));
    for chunk in bytes.chunks(CHUNK_LEN) {
        encode_chunk(chunk, &mut out);
    }
    out
}

/// Encode a number of seconds into a lexicoid.
pub fn encode(number: u128) -> String {
    encode_bytes(&bytes_from_number(number))
}

/// Pack one chunk of 1..=5 bytes as a single big-endian bit string, split
/// into 5-bit groups from the most significant end. The last group is
/// zero-padded on its low side.
fn encode_chunk(chunk: &[u8], out: &mut String) {
    debug_assert!(!chunk.is_empty() && chunk.len() <= CHUNK_LEN);

    let bits = chunk.len() * 8;
    let groups = bits.div_ceil(5);

    let mut acc = chunk.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
    acc <<= groups * 5 - bits;

    for i in (0..groups).rev() {
        out.push(ALPHABET[((acc >> (i * 5)) & 0x1F) as usize] as char);
    }
}
