use std::cmp;

/// Levenshtein distance counted in chars, using two rolling rows.
pub(crate) fn distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];
    for (i, ac) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let sub_cost = if ac == bc { 0 } else { 1 };
            current[j + 1] = cmp::min(
                cmp::min(previous[j + 1] + 1, current[j] + 1),
                previous[j] + sub_cost,
            );
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Scores `hay` against `needle`, both expected lowercase.
/// Each needle token is matched with its best hay token, so word order
/// does not matter ("line red" still finds "red line (line 1)").
pub(crate) fn score(needle: &str, hay: &str) -> f64 {
    let needle_tokens: Vec<_> = needle.split_whitespace().collect();
    if needle_tokens.is_empty() {
        return 0.0;
    }
    let hay_tokens: Vec<_> = hay.split_whitespace().map(trim_token).collect();

    let total: f64 = needle_tokens
        .iter()
        .map(|needle| {
            hay_tokens
                .iter()
                .map(|hay| score_token(needle, hay))
                .fold(0.0, f64::max)
        })
        .sum();
    total / needle_tokens.len() as f64
}

fn score_token(needle: &str, hay: &str) -> f64 {
    if hay.starts_with(needle) {
        return 1.0;
    }
    let longest = cmp::max(needle.chars().count(), hay.chars().count());
    if longest == 0 {
        return 0.0;
    }
    1.0 - distance(needle, hay) as f64 / longest as f64
}

fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

#[test]
fn fuzzy_empty_vs_empty() {
    assert_eq!(distance("", ""), 0);
}

#[test]
fn fuzzy_empty_vs_nonempty() {
    assert_eq!(distance("", "abc"), 3);
}

#[test]
fn fuzzy_substitution() {
    assert_eq!(distance("delhi", "dehli"), 2);
}

#[test]
fn fuzzy_insertion() {
    assert_eq!(distance("mumbai", "mumbaii"), 1);
}

#[test]
fn fuzzy_unicode_distinct() {
    assert_eq!(distance("bengalūru", "bengaluru"), 1);
}

#[test]
fn fuzzy_longer_sequence() {
    assert_eq!(distance("intention", "execution"), 5);
}

#[test]
fn fuzzy_prefix_scores_full() {
    assert_eq!(score("mag", "magenta line (line 8)"), 1.0);
}

#[test]
fn fuzzy_token_order_ignored() {
    assert_eq!(score("line red", "red line (line 1)"), 1.0);
}

#[test]
fn fuzzy_typo_scores_partial() {
    let value = score("purpel", "purple line");
    assert!(value > 0.5 && value < 1.0);
}

#[test]
fn fuzzy_empty_needle() {
    assert_eq!(score("", "purple line"), 0.0);
}
