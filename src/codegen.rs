use rand::Rng;

/// Characters a short code may contain: `[a-zA-Z0-9]`.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 6;

/// Mints random short codes.
///
/// Codes are not checked against the store, so a repeat (about one in 62^6)
/// silently replaces the earlier mapping when it is stored.
#[derive(Clone, Copy, Debug, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a random alphanumeric code of `CODE_LENGTH` characters.
    pub fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alphabet_is_62_distinct_alphanumerics() {
        assert_eq!(ALPHABET.len(), 62);
        let distinct: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(distinct.len(), 62);
        assert!(ALPHABET.iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn generated_codes_have_fixed_shape() {
        let codes = CodeGenerator::new();
        for _ in 0..1000 {
            let code = codes.generate();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn generated_codes_vary() {
        let codes = CodeGenerator::new();
        let seen: HashSet<String> = (0..100).map(|_| codes.generate()).collect();
        assert!(seen.len() > 90);
    }

    #[test]
    fn generator_is_usable_across_threads() {
        let codes = CodeGenerator::new();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || codes.generate()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), CODE_LENGTH);
        }
    }
}
