//! Fuzzy matching of contacts by name or phone.
//!
//! Scoring, on a 0-100 scale:
//! - exact phone or exact (normalized) name: 100
//! - name contains the query: 10-95 depending on how much of the name it covers
//! - otherwise Levenshtein similarity scaled to 0-85, dropped when more than
//!   half the characters differ

use crate::models::Contact;

/// A match result borrowing the matched contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The matched contact
    pub contact: &'a Contact,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// One of the contact's phones equals the query
    ExactPhone,

    /// Name matched exactly after normalization
    ExactName,

    /// Name matched approximately
    FuzzyName,
}

/// Matches a free-text query against contact names and phones.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatcher;

impl NameMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find contacts matching `query`.
    ///
    /// # Returns
    /// At most `max_results` matches scoring at least `min_confidence`, sorted
    /// by confidence (highest first) then by name.
    pub fn find_matches<'a, I>(
        &self,
        query: &str,
        contacts: I,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>>
    where
        I: IntoIterator<Item = &'a Contact>,
    {
        let normalized_query = Self::normalize_name(query);
        if normalized_query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<MatchResult<'a>> = contacts
            .into_iter()
            .filter_map(|contact| {
                if contact.find_phone(query.trim()).is_some() {
                    return Some(MatchResult {
                        contact,
                        confidence: 100,
                        match_type: MatchType::ExactPhone,
                    });
                }

                let name = Self::normalize_name(contact.name());
                let confidence = Self::calculate_fuzzy_score(&normalized_query, &name);
                let match_type = if confidence == 100 {
                    MatchType::ExactName
                } else {
                    MatchType::FuzzyName
                };

                (confidence > 0 && confidence >= min_confidence).then_some(MatchResult {
                    contact,
                    confidence,
                    match_type,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.contact.name().cmp(b.contact.name()))
        });
        results.truncate(max_results);
        results
    }

    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 100;
        }

        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Levenshtein distance, computed over chars with a single rolling row.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s2_chars: Vec<char> = s2.chars().collect();
        let mut row: Vec<usize> = (0..=s2_chars.len()).collect();

        for (i, c1) in s1.chars().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != *c2);
                let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
                diagonal = row[j + 1];
                row[j + 1] = next;
            }
        }

        row[s2_chars.len()]
    }

    /// Lowercase, trim and collapse internal whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
