use rand::Rng;

/// Length of a generated access code.
pub const CODE_LENGTH: usize = 6;

/// Base-36 alphabet, normalized to uppercase.
const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// How many colliding draws user creation tolerates before giving up.
/// With 36^6 possible codes a single retry is already rare; hitting this
/// cap means the code space is pathologically full.
pub const MAX_CODE_ATTEMPTS: u32 = 16;

/// Draw a random candidate access code. Uniqueness is enforced by the
/// UNIQUE constraint on `usuarios.codigo`, not here.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_has_fixed_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn code_stays_within_alphabet() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.bytes().all(|b| CODE_ALPHABET.contains(&b)),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn codes_vary_between_draws() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            seen.insert(generate_code());
        }
        // 50 draws out of 36^6 colliding into one bucket would mean a
        // broken RNG, not bad luck.
        assert!(seen.len() > 1);
    }
}
