//! Bounded completion in the Knuth-Bendix style.
//!
//! When two patterns can overlap inside one longer word, that word has two
//! distinct single-step reductions. If those reductions land on different
//! normal forms, the pair of normal forms is an unresolved critical pair
//! and reduction order would change the answer. Completion repairs this by
//! folding every unresolved pair back into the book as a new rule and
//! rescanning, until either a pass discovers nothing (the book is locally
//! confluent within the explored bound) or a configured bound is hit.
//!
//! General completion is undecidable, so truncation is an expected outcome
//! here, reported as a [`CompletionStatus`], never as an error.

use canonica_core::{HashedWord, WordBuf};
use rayon::prelude::*;

use crate::rulebook::RuleBook;

/// Bounds on the completion procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionConfig {
    /// Joint words longer than this are left unexplored; hitting one turns
    /// a converged outcome into [`CompletionStatus::LengthLimit`]. Clamped
    /// to the hasher's own bound.
    pub max_word_length: usize,
    /// Maximum number of full passes over the rule pairs.
    pub max_iterations: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_word_length: 32,
            max_iterations: 64,
        }
    }
}

/// How a completion run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    /// A full pass resolved every critical pair and skipped nothing.
    Converged,
    /// The pass budget ran out while new rules were still appearing.
    IterationLimit,
    /// A fixed point was reached, but at least one joint word exceeded the
    /// length bound and went unexplored.
    LengthLimit,
}

/// Summary of a completion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// How the run ended.
    pub status: CompletionStatus,
    /// Number of passes executed.
    pub passes: usize,
    /// Total rules inserted across all passes.
    pub rules_added: usize,
}

impl CompletionOutcome {
    /// True when every discoverable critical pair was resolved, so any
    /// reduction order reaches the same normal form.
    #[must_use]
    pub fn is_confluent(&self) -> bool {
        self.status == CompletionStatus::Converged
    }
}

impl RuleBook {
    /// Runs bounded completion, growing the book until it is locally
    /// confluent or a bound is hit.
    ///
    /// Each pass:
    /// 1. scans every ordered pair of rules, self-pairs included, for
    ///    positions where a suffix of the first pattern equals a prefix of
    ///    the second;
    /// 2. builds the joint word for each overlap and reduces it once with
    ///    each rule, then all the way to normal form;
    /// 3. collects the pairs of normal forms that disagree;
    /// 4. orients each collected pair into a new rule, reducing both sides
    ///    through the grown book first.
    ///
    /// Rules are never deleted or reordered, so indices issued by earlier
    /// passes stay valid. The scan is read-only and runs across rayon
    /// workers; insertion is sequential, in a deterministic order.
    pub fn complete(&mut self, config: &CompletionConfig) -> CompletionOutcome {
        let mut passes = 0;
        let mut rules_added = 0;
        loop {
            if passes >= config.max_iterations {
                tracing::debug!(passes, rules_added, "completion pass budget exhausted");
                return CompletionOutcome {
                    status: CompletionStatus::IterationLimit,
                    passes,
                    rules_added,
                };
            }
            passes += 1;

            let (candidates, skipped) = scan_critical_pairs(self, config);
            let mut added_this_pass = 0;
            for (left, right) in candidates {
                // Re-reduced against the book as grown so far, so a pair
                // already settled by this pass's insertions degenerates.
                if self.insert_equation(left, right) {
                    added_this_pass += 1;
                }
            }
            rules_added += added_this_pass;
            tracing::debug!(
                pass = passes,
                added = added_this_pass,
                rules = self.len(),
                "completion pass finished"
            );

            if added_this_pass == 0 {
                // The final pass rescanned every pair, so its skip flag
                // alone decides between convergence and truncation.
                let status = if skipped {
                    CompletionStatus::LengthLimit
                } else {
                    CompletionStatus::Converged
                };
                return CompletionOutcome {
                    status,
                    passes,
                    rules_added,
                };
            }
        }
    }

    /// Checks local confluence within the bound without mutating the book.
    ///
    /// True iff one scan finds no unresolved critical pair and skips no
    /// joint word for length.
    #[must_use]
    pub fn is_locally_confluent(&self, config: &CompletionConfig) -> bool {
        let (candidates, skipped) = scan_critical_pairs(self, config);
        candidates.is_empty() && !skipped
    }
}

/// Scans every ordered pair of rules for unresolved critical pairs.
///
/// Returns the disagreeing normal-form pairs in deterministic order
/// (first rule, then second rule, then overlap length descending) and a
/// flag recording whether any joint word was skipped for length.
fn scan_critical_pairs(
    book: &RuleBook,
    config: &CompletionConfig,
) -> (Vec<(HashedWord, HashedWord)>, bool) {
    let rules = book.rules();
    let hasher = *book.hasher();
    let max_len = config.max_word_length.min(hasher.longest_hashable_word());

    let per_rule: Vec<(Vec<(HashedWord, HashedWord)>, bool)> = (0..rules.len())
        .into_par_iter()
        .map(|i| {
            let first = rules[i].lhs();
            let mut unresolved = Vec::new();
            let mut skipped = false;
            for second_rule in rules {
                let second = second_rule.lhs();
                let longest = first.suffix_prefix_overlap(second);
                for overlap in (1..=longest).rev() {
                    // A full-length overlap means one pattern contains the
                    // other outright; the joint word would just be the
                    // longer pattern, which both rules already reduce.
                    if overlap == first.len() || overlap == second.len() {
                        continue;
                    }
                    if first.operators()[first.len() - overlap..]
                        != second.operators()[..overlap]
                    {
                        continue;
                    }
                    let joint_len = first.len() + second.len() - overlap;
                    if joint_len > max_len {
                        skipped = true;
                        continue;
                    }

                    let mut ops = WordBuf::with_capacity(joint_len);
                    ops.extend_from_slice(first.operators());
                    ops.extend_from_slice(&second.operators()[overlap..]);
                    let joint = HashedWord::from_validated(ops, &hasher);

                    let left = book.reduce(&rules[i].apply_at(&joint, 0, &hasher));
                    let right = book.reduce(&second_rule.apply_at(
                        &joint,
                        first.len() - overlap,
                        &hasher,
                    ));
                    if left != right {
                        tracing::trace!(%joint, %left, %right, "unresolved critical pair");
                        unresolved.push((left, right));
                    }
                }
            }
            (unresolved, skipped)
        })
        .collect();

    let mut candidates = Vec::new();
    let mut skipped_any = false;
    for (mut found, skipped) in per_rule {
        candidates.append(&mut found);
        skipped_any |= skipped;
    }
    (candidates, skipped_any)
}
