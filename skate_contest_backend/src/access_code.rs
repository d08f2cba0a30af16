use rand::Rng;

/// Uppercase letters and digits without the easily confused `I`, `O`, `0`, `1`.
pub const ACCESS_CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
pub const ACCESS_CODE_LENGTH: usize = 6;
pub const MAX_GENERATION_ATTEMPTS: usize = 64;

pub fn generate_access_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ACCESS_CODE_LENGTH)
        .map(|_| ACCESS_CODE_ALPHABET[rng.gen_range(0..ACCESS_CODE_ALPHABET.len())] as char)
        .collect()
}

/// Draws codes until one is not taken. Returns `None` if every attempt
/// collided.
pub fn generate_unique_access_code<R, F>(rng: &mut R, is_taken: F) -> Option<String>
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    (0..MAX_GENERATION_ATTEMPTS)
        .map(|_| generate_access_code(&mut *rng))
        .find(|code| !is_taken(code))
}
