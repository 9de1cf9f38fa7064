use crate::model::Meal;
use crate::text::normalize;

// Single-term tiers, highest wins. Terms shorter than three characters are
// noise-prone against substring checks, so they only qualify for the
// first-token tiers.
const FIRST_TOKEN_PREFIX: u32 = 100;
const FIRST_TOKEN_PREFIX_FOLDED: u32 = 95;
const ANY_TOKEN_PREFIX: u32 = 80;
const ANY_TOKEN_PREFIX_FOLDED: u32 = 75;
const SUBSTRING: u32 = 50;
const SUBSTRING_FOLDED: u32 = 45;

const MULTI_TERM_BASE: u32 = 60;
const MULTI_TERM_PREFIX_BONUS: u32 = 10;

const MIN_SUBSTRING_TERM_CHARS: usize = 3;

/// Relevance of `query_text` against a meal. Zero means "no match, exclude
/// from results". The display name is the only scoring surface; embedded
/// line breaks are treated as spaces. Both the accented and the folded
/// form of every comparison are tried, accented winning the higher tier.
///
/// Never fails: empty or whitespace-only inputs simply score zero.
pub fn score(meal: &Meal, query_text: &str) -> u32 {
    let name = squash(&meal.name).to_lowercase();
    if name.is_empty() {
        return 0;
    }
    let query = query_text.trim().to_lowercase();
    let terms: Vec<&str> = query.split_whitespace().collect();
    match terms.as_slice() {
        [] => 0,
        [term] => single_term(&name, term),
        terms => multi_term(&name, terms),
    }
}

/// Collapses runs of whitespace (including the line breaks the catalog
/// embeds in display names) into single spaces.
fn squash(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn single_term(name: &str, term: &str) -> u32 {
    let folded_term = normalize(term);
    let tokens: Vec<&str> = name.split(' ').collect();
    let first = tokens[0];

    if first.starts_with(term) {
        return FIRST_TOKEN_PREFIX;
    }
    if normalize(first).starts_with(&folded_term) {
        return FIRST_TOKEN_PREFIX_FOLDED;
    }
    if term.chars().count() < MIN_SUBSTRING_TERM_CHARS {
        return 0;
    }
    if tokens.iter().any(|t| t.starts_with(term)) {
        return ANY_TOKEN_PREFIX;
    }
    if tokens.iter().any(|t| normalize(t).starts_with(&folded_term)) {
        return ANY_TOKEN_PREFIX_FOLDED;
    }
    if name.contains(term) {
        return SUBSTRING;
    }
    if normalize(name).contains(&folded_term) {
        return SUBSTRING_FOLDED;
    }
    0
}

/// Every term must appear at least as a substring (accented or folded) or
/// the meal is excluded; terms that also prefix-match a token each add a
/// bonus on top of the base score.
fn multi_term(name: &str, terms: &[&str]) -> u32 {
    let folded_name = normalize(name);
    let tokens: Vec<&str> = name.split(' ').collect();
    let mut prefix_hits = 0u32;
    for term in terms {
        let folded_term = normalize(term);
        if !name.contains(term) && !folded_name.contains(&folded_term) {
            return 0;
        }
        if tokens
            .iter()
            .any(|t| t.starts_with(term) || normalize(t).starts_with(&folded_term))
        {
            prefix_hits += 1;
        }
    }
    MULTI_TERM_BASE + MULTI_TERM_PREFIX_BONUS * prefix_hits
}
