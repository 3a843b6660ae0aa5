use crate::core::types::{SortingType, Token};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Cached occurrence count of `token`, 0 when it never occurred.
pub fn cached_count(frequencies: &HashMap<Token, usize>, token: &Token) -> usize {
    frequencies.get(token).copied().unwrap_or(0)
}

pub trait TokenOrderComparator {
    fn compare(&self, a: &Token, b: &Token) -> Ordering;
}

// Numeric for numbers, lexicographic for words and lines
pub struct NaturalOrderComparator;
impl TokenOrderComparator for NaturalOrderComparator {
    fn compare(&self, a: &Token, b: &Token) -> Ordering {
        a.cmp(b)
    }
}

// Count asc; tie-break by natural order
pub struct ByCountComparator<'a> {
    frequencies: &'a HashMap<Token, usize>,
}

impl<'a> ByCountComparator<'a> {
    pub fn new(frequencies: &'a HashMap<Token, usize>) -> Self {
        Self { frequencies }
    }
}

impl TokenOrderComparator for ByCountComparator<'_> {
    fn compare(&self, a: &Token, b: &Token) -> Ordering {
        let by_count =
            cached_count(self.frequencies, a).cmp(&cached_count(self.frequencies, b));
        if by_count != Ordering::Equal {
            return by_count;
        }
        a.cmp(b)
    }
}

pub fn make_token_order_comparator<'a>(
    kind: SortingType,
    frequencies: &'a HashMap<Token, usize>,
) -> Box<dyn TokenOrderComparator + 'a> {
    match kind {
        SortingType::Natural => Box::new(NaturalOrderComparator),
        SortingType::ByCount => Box::new(ByCountComparator::new(frequencies)),
    }
}
