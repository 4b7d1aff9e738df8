// src/utils/similarity.rs
//
// Gestalt pattern matching (Ratcliff/Obershelp) similarity ratio.
// The ratio is 2*M / T where M is the number of characters covered by the
// matching blocks and T is the combined length of both strings.

use std::collections::HashMap;

/// Sequences this long or longer get the "popular element" heuristic applied.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A block `a[a_start..a_start + size] == b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    /// Positions of every non-popular element of `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        let n = b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest block inside `a[alo..ahi]` x `b[blo..bhi]`, earliest in `a`
    /// then earliest in `b` on ties.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchingBlock {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    new_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // Popular elements cannot seed a block but may extend one.
        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && self.a[best_i + best_size] == self.b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchingBlock {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            if alo < block.a_start && blo < block.b_start {
                queue.push((alo, block.a_start, blo, block.b_start));
            }
            if block.a_start + block.size < ahi && block.b_start + block.size < bhi {
                queue.push((block.a_start + block.size, ahi, block.b_start + block.size, bhi));
            }
            blocks.push(block);
        }

        blocks.sort_by_key(|block| (block.a_start, block.b_start));
        blocks
    }
}

/// Matching blocks between `a` and `b`, ordered by position.
pub fn matching_blocks(a: &str, b: &str) -> Vec<MatchingBlock> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a_chars, &b_chars).matching_blocks()
}

/// Similarity ratio in [0, 1]. Two empty strings are identical (1.0); an
/// empty string against a non-empty one scores 0.0.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }

    let matched: usize = SequenceMatcher::new(&a_chars, &b_chars)
        .matching_blocks()
        .iter()
        .map(|block| block.size)
        .sum();

    (2.0 * matched as f64 / total as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_strings() {
        assert_close(similarity_ratio("", ""), 1.0);
        assert_close(similarity_ratio("abc", ""), 0.0);
        assert_close(similarity_ratio("", "abc"), 0.0);
    }

    #[test]
    fn test_identical_and_disjoint() {
        assert_close(similarity_ratio("hyderabad", "hyderabad"), 1.0);
        assert_close(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_known_ratios() {
        assert_close(similarity_ratio("kitten", "sitting"), 0.6153846153846154);
        assert_close(similarity_ratio("abcd", "bcde"), 0.75);
        assert_close(similarity_ratio("hello world", "world hello"), 0.45454545454545453);
        assert_close(similarity_ratio("aaaa", "aa"), 2.0 / 3.0);
        assert_close(similarity_ratio("bilai durg chattisgarh", "bilai durg"), 0.625);
    }

    #[test]
    fn test_case_sensitive() {
        assert_close(similarity_ratio("B", "b"), 0.0);
    }

    #[test]
    fn test_matching_blocks_positions() {
        let blocks = matching_blocks("abxcd", "abcd");
        assert_eq!(
            blocks,
            vec![
                MatchingBlock { a_start: 0, b_start: 0, size: 2 },
                MatchingBlock { a_start: 3, b_start: 2, size: 2 },
            ]
        );
    }

    #[test]
    fn test_non_ascii_counts_chars() {
        assert_close(similarity_ratio("नगर", "नगर"), 1.0);
        assert_close(similarity_ratio("é", "e"), 0.0);
    }

    #[test]
    fn test_popular_elements_extend_but_do_not_seed() {
        let a = "a".repeat(300);
        let b = format!("{}b", "a".repeat(250));
        assert_close(similarity_ratio(&a, &b), 500.0 / 551.0);
    }
}
