use rand::Rng;

/// Length of an API token key.
pub const TOKEN_LENGTH: usize = 40;

/// Generates a random alphanumeric token key.
///
/// # Returns
/// - `String` - A `TOKEN_LENGTH`-character key from the thread-local CSPRNG
pub fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
