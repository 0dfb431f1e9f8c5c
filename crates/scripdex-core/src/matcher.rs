//! Tiered matching of a normalized query against one catalog candidate.

/// Matching rule categories in priority order.
///
/// A lower variant outranks every higher one; within a search call the first
/// satisfied tier wins for a candidate and later tiers are not evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    ExactSymbol,
    SymbolPrefix,
    NameTokenPrefix,
    Substring,
    Fuzzy,
}

/// How a candidate matched: the rule that fired and the offset of the
/// evidence within the matched field (earlier is stronger).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierMatch {
    pub tier: MatchTier,
    pub position: usize,
}

/// Divisor in the fuzzy tolerance formula `max(FLOOR, len / DIVISOR)`.
const FUZZY_EDIT_DIVISOR: usize = 4;
/// Every query token tolerates at least one edit at the fuzzy tier.
const FUZZY_EDIT_FLOOR: usize = 1;

/// Maximum edits tolerated for a query token of `len` characters.
///
/// A 1-7 character token tolerates one edit, an 8-11 character token two,
/// and so on.
pub fn fuzzy_bound(len: usize) -> usize {
    FUZZY_EDIT_FLOOR.max(len / FUZZY_EDIT_DIVISOR)
}

/// Match one candidate against an already-normalized query.
///
/// `symbol` and `name` are the candidate's normalized fields and
/// `name_tokens` the space-separated tokens of `name`. Returns the best tier
/// the candidate satisfies, or `None` when the candidate is excluded from
/// the result set entirely.
pub fn match_security(
    query: &str,
    symbol: &str,
    name: &str,
    name_tokens: &[String],
) -> Option<TierMatch> {
    if query.is_empty() {
        return None;
    }

    if symbol == query {
        return Some(TierMatch {
            tier: MatchTier::ExactSymbol,
            position: 0,
        });
    }

    if symbol.starts_with(query) {
        return Some(TierMatch {
            tier: MatchTier::SymbolPrefix,
            position: 0,
        });
    }

    if let Some(position) = token_prefix_position(query, name_tokens) {
        return Some(TierMatch {
            tier: MatchTier::NameTokenPrefix,
            position,
        });
    }

    if let Some(position) = substring_position(query, symbol, name) {
        return Some(TierMatch {
            tier: MatchTier::Substring,
            position,
        });
    }

    if let Some(position) = fuzzy_position(query, symbol, name_tokens) {
        return Some(TierMatch {
            tier: MatchTier::Fuzzy,
            position,
        });
    }

    None
}

/// Offset of the first name token that starts with the query.
fn token_prefix_position(query: &str, tokens: &[String]) -> Option<usize> {
    let mut offset = 0;
    for token in tokens {
        if token.starts_with(query) {
            return Some(offset);
        }
        offset += token.len() + 1;
    }
    None
}

/// Earliest offset at which either field contains the query.
fn substring_position(query: &str, symbol: &str, name: &str) -> Option<usize> {
    match (name.find(query), symbol.find(query)) {
        (Some(in_name), Some(in_symbol)) => Some(in_name.min(in_symbol)),
        (Some(in_name), None) => Some(in_name),
        (None, Some(in_symbol)) => Some(in_symbol),
        (None, None) => None,
    }
}

/// Token-wise fuzzy comparison.
///
/// Every query token must sit within its own edit bound of the symbol or of
/// some name token; a multi-word query can never fit inside the bound of a
/// single token, so requiring all of its tokens to land keeps misspelled
/// phrases like "tata consultency" matchable. The reported position is the
/// evidence offset for the first query token.
fn fuzzy_position(query: &str, symbol: &str, tokens: &[String]) -> Option<usize> {
    let mut first_position = None;
    for query_token in query.split(' ') {
        let bound = fuzzy_bound(query_token.chars().count());
        let position = fuzzy_token_position(query_token, bound, symbol, tokens)?;
        if first_position.is_none() {
            first_position = Some(position);
        }
    }
    first_position
}

fn fuzzy_token_position(
    query_token: &str,
    bound: usize,
    symbol: &str,
    tokens: &[String],
) -> Option<usize> {
    if within_edit_bound(query_token, symbol, bound) {
        return Some(0);
    }

    let mut offset = 0;
    for token in tokens {
        if within_edit_bound(query_token, token, bound) {
            return Some(offset);
        }
        offset += token.len() + 1;
    }
    None
}

fn within_edit_bound(a: &str, b: &str, bound: usize) -> bool {
    // Length difference is a lower bound on the distance.
    if a.chars().count().abs_diff(b.chars().count()) > bound {
        return false;
    }
    edit_distance(a, b) <= bound
}

/// Levenshtein distance over single-character inserts, deletes and
/// substitutions. Symmetric and triangle-inequality compliant.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(prev[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut prev, &mut current);
    }

    prev[b.len()]
}
