use aho_corasick::AhoCorasick;

use crate::error::Result;
use crate::rules::Rule;

// ---------------------------------------------------------------------------
// RuleMatcher: single-pass substring prefilter over an ordered rule table
// ---------------------------------------------------------------------------

/// Finds every rule whose `find` text occurs in a match buffer.
///
/// All patterns are compiled into one Aho-Corasick automaton so a header is
/// scanned once regardless of table size. The automaton only answers "which
/// rules occur"; callers still walk the hits in catalog order, so precedence is
/// exactly that of evaluating `buffer.contains(rule.find)` top to bottom.
pub(crate) struct RuleMatcher {
    automaton: AhoCorasick,
    rules: &'static [Rule],
}

impl RuleMatcher {
    pub fn build(rules: &'static [Rule]) -> Result<Self> {
        let automaton = AhoCorasick::new(rules.iter().map(|r| r.find))?;
        Ok(Self { automaton, rules })
    }

    /// Rules occurring in `buffer`, in catalog order.
    pub fn matching<'a>(&'a self, buffer: &str) -> impl Iterator<Item = &'static Rule> + 'a {
        let mut hits = vec![false; self.rules.len()];
        // Standard (non-leftmost) semantics report every occurrence, including
        // patterns nested inside or overlapping longer ones.
        for m in self.automaton.find_overlapping_iter(buffer) {
            hits[m.pattern().as_usize()] = true;
        }
        let rules = self.rules;
        hits.into_iter()
            .enumerate()
            .filter(|(_, hit)| *hit)
            .map(move |(idx, _)| &rules[idx])
    }
}
