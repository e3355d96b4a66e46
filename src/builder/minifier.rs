//! Short identifiers for arbitrary node keys

use indexmap::IndexMap;
use std::hash::Hash;

/// Hands out `a`, `b`, ..., `z`, `aa`, `ab`, ... in first-seen order.
///
/// A key keeps its identifier for the lifetime of the minifier.
#[derive(Debug, Clone)]
pub struct Minifier<K> {
    ids: IndexMap<K, String>,
    next: usize,
}

impl<K: Hash + Eq> Minifier<K> {
    pub fn new() -> Self {
        Self {
            ids: IndexMap::new(),
            next: 0,
        }
    }

    /// Identifier for `key`, allocating the next one on first sight
    pub fn get(&mut self, key: K) -> &str {
        let next = &mut self.next;
        self.ids.entry(key).or_insert_with(|| {
            let id = identifier(*next);
            *next += 1;
            id
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<K: Hash + Eq> Default for Minifier<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bijective base-26 over `a`..`z`, like spreadsheet column names
fn identifier(index: usize) -> String {
    let mut n = index + 1;
    let mut digits = Vec::new();
    while n > 0 {
        n -= 1;
        digits.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifier_sequence() {
        assert_eq!(identifier(0), "a");
        assert_eq!(identifier(25), "z");
        assert_eq!(identifier(26), "aa");
        assert_eq!(identifier(27), "ab");
        assert_eq!(identifier(51), "az");
        assert_eq!(identifier(52), "ba");
        assert_eq!(identifier(701), "zz");
        assert_eq!(identifier(702), "aaa");
    }

    #[test]
    fn test_first_seen_order() {
        let mut minifier = Minifier::new();
        let letters: Vec<String> = (0..26).map(|i| minifier.get(i).to_string()).collect();
        let expected: Vec<String> = ('a'..='z').map(|c| c.to_string()).collect();
        assert_eq!(letters, expected);
        assert_eq!(minifier.get(26), "aa");
    }

    #[test]
    fn test_repeat_lookup_is_stable() {
        let mut minifier = Minifier::new();
        assert_eq!(minifier.get("x"), "a");
        assert_eq!(minifier.get("y"), "b");
        assert_eq!(minifier.get("x"), "a");
        assert_eq!(minifier.len(), 2);
    }

    #[test]
    fn test_no_collisions() {
        let mut minifier = Minifier::new();
        let ids: HashSet<String> = (0..2000).map(|i| minifier.get(i).to_string()).collect();
        assert_eq!(ids.len(), 2000);
    }
}
