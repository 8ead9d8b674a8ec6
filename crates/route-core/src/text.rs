// crates/route-core/src/text.rs

/// Normalizes a free-text query for lookup: surrounding whitespace removed.
///
/// Case is left alone; exact matching folds case itself, the edit distance
/// does not.
pub fn normalize_query(q: &str) -> &str {
    q.trim()
}

/// Case-insensitive equality used by exact resolution.
///
/// Full Unicode lowercasing, so `"ZÜRICH"` equals `"zürich"`.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_lowercase() == b.to_lowercase()
}

/// Levenshtein edit distance (unit-cost insert, delete, substitute).
///
/// Works on `char`s, not bytes, and is case-sensitive. Two rolling rows
/// of the usual `(|a|+1) x (|b|+1)` table are kept:
///
/// - `d[0][j] = j`, `d[i][0] = i`
/// - `d[i][j] = d[i-1][j-1]` when `a[i-1] == b[j-1]`
/// - otherwise `1 + min(d[i-1][j], d[i-1][j-1], d[i][j-1])`
///
/// # Examples
/// ```rust
/// use route_core::text::levenshtein;
///
/// assert_eq!(levenshtein("Lodnon", "London"), 2);
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("paris", "Paris"), 1);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j].min(prev[j - 1]).min(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_pairs() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("Lodnon", "London"), 2);
        assert_eq!(levenshtein("Melbourne", "Melborne"), 1);
    }

    #[test]
    fn is_case_sensitive() {
        assert_eq!(levenshtein("TOKYO", "Tokyo"), 4);
        assert_eq!(levenshtein("tokyo", "tokyo"), 0);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(levenshtein("Zürich", "Zurich"), 1);
        assert_eq!(levenshtein("São Paulo", "Sao Paulo"), 1);
    }

    #[test]
    fn ignore_case_equality() {
        assert!(equals_ignore_case("PARIS", "paris"));
        assert!(equals_ignore_case("ZÜRICH", "zürich"));
        assert!(!equals_ignore_case("Paris", "Pariss"));
    }

    #[test]
    fn normalize_trims_only() {
        assert_eq!(normalize_query("  New York \t"), "New York");
        assert_eq!(normalize_query("LONDON"), "LONDON");
    }
}
