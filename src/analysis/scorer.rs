//! Per-sentence feature scoring.

use crate::core::{RiskDimension, RiskVector};
use crate::lexicon::{defs, LexiconRegistry};

/// Per-dimension ceiling. A single sentence saturated with markers must not
/// dominate the document mean.
pub const DIMENSION_CEILING: f64 = 3.0;

/// Scores one sentence at a time against a shared read-only registry.
///
/// `score` is a pure function: no state across calls, no side effects, and
/// the same sentence always produces the same vector.
pub struct FeatureScorer<'a> {
    registry: &'a LexiconRegistry,
}

impl<'a> FeatureScorer<'a> {
    pub fn new(registry: &'a LexiconRegistry) -> Self {
        Self { registry }
    }

    /// Compute the feature vector for one normalized sentence.
    ///
    /// Matching is case-insensitive substring containment. A longer marker
    /// containing a shorter one lets both match and both contribute; there
    /// is no longest-match suppression. Each dimension's sum is clamped to
    /// [`DIMENSION_CEILING`] (one-sided, scores are never negative).
    pub fn score(&self, sentence: &str) -> RiskVector {
        let lowered = sentence.to_lowercase();
        let mut vector = RiskVector::zero();

        for group in self.registry.groups() {
            for phrase in group.phrases() {
                if lowered.contains(phrase.as_str()) {
                    vector.add(group.dimension, group.weight);
                }
            }
        }

        apply_structural_heuristics(&lowered, &mut vector);

        for dimension in RiskDimension::ALL {
            if vector.get(dimension) > DIMENSION_CEILING {
                vector.set(dimension, DIMENSION_CEILING);
            }
        }
        vector
    }
}

/// Heuristics evaluated directly rather than through the marker-group loop.
fn apply_structural_heuristics(lowered: &str, vector: &mut RiskVector) {
    // Absolutist qualifier alongside a copular construction: a verdict
    // presented as plain description.
    let padded = format!(" {lowered} ");
    let copular = defs::COPULAR_FORMS.iter().any(|form| padded.contains(form));
    if copular
        && defs::ABSOLUTIST_QUALIFIERS
            .iter()
            .any(|qualifier| lowered.contains(qualifier))
    {
        vector.add(RiskDimension::EmbeddedDefault, 1.0);
    }

    if defs::MODAL_CUES.iter().any(|cue| lowered.contains(cue)) {
        vector.add(RiskDimension::BurdenShift, 1.0);
    }

    if lowered.contains(defs::VALEDICTION_PHRASE) && lowered.contains(defs::BILLING_CUE) {
        vector.add(RiskDimension::InterestConcealment, 1.0);
    }

    let empathy = defs::EMPATHY_FRAMING
        .iter()
        .any(|phrase| lowered.contains(phrase));
    let defensive = defs::DEFENSIVE_THREAT
        .iter()
        .any(|phrase| lowered.contains(phrase));
    if empathy && defensive {
        vector.add(RiskDimension::InterestConcealment, 1.0);
    } else if defensive {
        vector.add(RiskDimension::InterestConcealment, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(sentence: &str) -> RiskVector {
        let registry = LexiconRegistry::builtin();
        FeatureScorer::new(&registry).score(sentence)
    }

    #[test]
    fn closure_phrase_scores_deflection() {
        let vector = score("We consider this matter closed.");
        assert!(vector.get(RiskDimension::Deflection) >= 1.0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let upper = score("WE CONSIDER THIS MATTER CLOSED.");
        let lower = score("we consider this matter closed.");
        assert_eq!(upper, lower);
        assert!(upper.get(RiskDimension::Deflection) >= 1.0);
    }

    #[test]
    fn every_dimension_stays_within_ceiling() {
        // Saturated with verdicting, obligation, closure, and liability
        // markers at once.
        let sentence = "Your baseless complaint is plainly vexatious, utterly devoid of merit, \
                        spectacularly false and an abuse of process; you are required to comply, \
                        you have failed to act, failure to respond means you will be held liable, \
                        and unless you withdraw we will take no further steps, this is final, \
                        full and final, untenable, no further discussion; we cannot accept \
                        liability, we are not responsible, standard practice, best efforts.";
        let vector = score(sentence);
        for dimension in RiskDimension::ALL {
            let value = vector.get(dimension);
            assert!((0.0..=DIMENSION_CEILING).contains(&value), "{dimension} = {value}");
        }
        assert_eq!(vector.get(RiskDimension::EmbeddedDefault), DIMENSION_CEILING);
        assert_eq!(vector.get(RiskDimension::Deflection), DIMENSION_CEILING);
    }

    #[test]
    fn scoring_is_idempotent() {
        let sentence = "Clearly you must respond, as we have said countless times.";
        assert_eq!(score(sentence), score(sentence));
    }

    #[test]
    fn overlapping_markers_both_contribute() {
        // "baseless" (base verdicting) is a substring of "baseless
        // complaint" (high-severity verdicting and dismissive labelling);
        // all of them count.
        let vector = score("This is a baseless complaint");
        assert!(vector.get(RiskDimension::EmbeddedDefault) >= 2.0);
        assert!(vector.get(RiskDimension::Deflection) >= 1.0);
    }

    #[test]
    fn absolutist_copular_adds_embedded_default() {
        let vector = score("Your reading is impossible to sustain");
        assert!(vector.get(RiskDimension::EmbeddedDefault) >= 1.0);

        // Absolutist word without a copular form stays below the heuristic.
        let vector = score("Impossible demands were rejected");
        assert_eq!(vector.get(RiskDimension::EmbeddedDefault), 0.0);
    }

    #[test]
    fn modal_cue_adds_burden_shift_once() {
        let vector = score("You must reply and you must comply");
        assert_eq!(vector.get(RiskDimension::BurdenShift), 1.0);
    }

    #[test]
    fn modal_cue_matches_by_substring() {
        // Substring containment is the documented policy, so "must" inside
        // a longer word still fires the cue.
        let vector = score("Pass the mustard");
        assert_eq!(vector.get(RiskDimension::BurdenShift), 1.0);
    }

    #[test]
    fn refusal_phrase_carries_double_weight() {
        let vector = score("We are unable to take your matter any further");
        assert!(vector.get(RiskDimension::BurdenShift) >= 2.0);
    }

    #[test]
    fn each_dismissal_phrase_carries_double_weight() {
        let first = score("You have ignored the pertinent issues");
        assert!(first.get(RiskDimension::Deflection) >= 2.0);

        let second = score("You refused to accept our considered legal advice");
        assert!(second.get(RiskDimension::Deflection) >= 2.0);

        let both = score(
            "You ignored the pertinent issues and refused to accept our considered legal advice",
        );
        assert_eq!(both.get(RiskDimension::Deflection), DIMENSION_CEILING);
    }

    #[test]
    fn valediction_with_billing_adds_interest_concealment() {
        let vector = score("We wish you everything of the very best and enclose our invoice");
        assert!(vector.get(RiskDimension::InterestConcealment) >= 1.0);

        let vector = score("We wish you everything of the very best");
        assert_eq!(vector.get(RiskDimension::InterestConcealment), 0.0);
    }

    #[test]
    fn defensive_phrase_scores_with_or_without_empathy_framing() {
        let with_empathy = score(
            "Acting in the best interests of the children, we reserve the right to pursue a claim",
        );
        assert!(with_empathy.get(RiskDimension::InterestConcealment) >= 1.0);

        let defensive_only = score("We reserve the right to pursue a claim");
        assert!(defensive_only.get(RiskDimension::InterestConcealment) >= 1.0);

        let empathy_only = score("We act in the best interests of the children");
        assert_eq!(empathy_only.get(RiskDimension::InterestConcealment), 0.0);
    }

    #[test]
    fn unmarked_sentence_scores_zero_everywhere() {
        let vector = score("Thank you for your letter of 3 June.");
        assert!(!vector.is_flagged());
    }
}
