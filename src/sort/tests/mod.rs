
use crate::core::types::Token;
use std::collections::HashMap;

/// Deterministic pseudo-random values for property checks.
pub(super) fn lcg_values(n: usize, seed: u32, modulo: u32) -> Vec<i64> {
    let mut val = seed;
    (0..n)
        .map(|_| {
            val = val.wrapping_mul(1103515245).wrapping_add(12345);
            ((val >> 8) % modulo) as i64
        })
        .collect()
}

pub(super) fn words(raw: &[&str]) -> Vec<Token> {
    raw.iter().map(|w| Token::Word(w.to_string())).collect()
}

pub(super) fn frequencies(tokens: &[Token]) -> HashMap<Token, usize> {
    let mut map = HashMap::new();
    for t in tokens {
        *map.entry(t.clone()).or_insert(0) += 1;
    }
    map
}
