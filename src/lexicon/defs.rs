//! Built-in marker phrase tables.
//!
//! Everything here is domain configuration: ordered phrase lists grouped by
//! risk dimension and tier, each contributing a fixed weight per distinct
//! matching phrase. Editing a table changes scoring content, never scoring
//! control flow.

use crate::core::RiskDimension;

/// Weight tier of a marker group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTier {
    Base,
    HighSeverity,
}

/// A built-in marker group: ordered, distinct, lowercase phrases matched by
/// substring containment against a lowercased sentence.
#[derive(Debug, Clone, Copy)]
pub struct MarkerGroupDef {
    pub id: &'static str,
    pub dimension: RiskDimension,
    pub tier: MarkerTier,
    /// Contribution per distinct matching phrase (once per sentence, not per
    /// occurrence).
    pub weight: f64,
    pub phrases: &'static [&'static str],
}

// Embedded default / verdicting: language that discounts the counterparty's
// framing or verdicts on it outright.

const DISCOUNTING: &[&str] = &[
    "mere",
    "merely",
    "just",
    "only",
    "not really",
    "not truly",
    "not genuinely",
    "so-called",
    "as if",
    "pseudo",
    "quasi",
    "simulates",
    "mimics",
    "pretends",
    "appears to",
    "seems to",
];

const VERDICTING: &[&str] = &[
    "meritless",
    "without merit",
    "baseless",
    "groundless",
    "frivolous",
    "vexatious",
    "unfounded",
    "unwarranted",
    "unreasonable",
    "unjustified",
    "misconceived",
    "inaccurate",
    "incorrect",
    "false allegation",
    "false allegations",
    "misrepresentation",
];

const VERDICTING_HIGH: &[&str] = &[
    "baseless complaint",
    "spectacularly false",
    "utterly devoid of merit",
    "simply unconscionable",
    "plainly vexatious",
    "abuse of process",
    "completely defective",
    "patently defective",
    "abortive process",
    "on every conceivable basis",
];

// Burden shift / authority substitution: asserting authority in place of
// argument, or moving obligations onto the counterparty.

const AUTHORITY_ASSERTION: &[&str] = &[
    "clearly",
    "obviously",
    "self-evident",
    "beyond doubt",
    "without question",
    "prudent and correct",
    "as we have said countless times",
];

const OBLIGATION: &[&str] = &[
    "obliged to",
    "obligated to",
    "expected to",
    "you are obliged to",
    "you are obligated to",
    "you are expected to",
    "it is your responsibility",
    "you are responsible for",
    "you will be held liable",
    "you will be liable for",
    "we will assume you agree",
    "we will proceed on the basis that you",
    "you are required",
    "you have failed to",
    "failure to",
    "if you do not",
    "unless you",
];

const PROCEDURAL_BURDEN: &[&str] = &[
    "wrong forum",
    "abuse of process",
    "completely defective",
    "patently defective",
    "abortive process",
    "on every conceivable basis",
    "obvious next step",
];

const REFUSAL_ESCALATION: &[&str] = &["unable to take your matter any further"];

// Deflection / premature closure.

const CLOSURE: &[&str] = &[
    "untenable",
    "cannot proceed",
    "no further discussion",
    "we will take no further steps",
    "this is final",
    "full and final",
];

const SOFT_CLOSURE: &[&str] = &[
    "we consider this matter closed",
    "we regard this matter as closed",
    "we consider the matter closed",
    "we will not enter into further correspondence",
    "we do not propose to correspond further",
    "we will not engage further on this",
    "we see no value in further correspondence",
    "our position remains unchanged",
];

const DISMISSIVE_LABELLING: &[&str] = &[
    "baseless complaint",
    "vague to the point of being meaningless",
    "spectacularly false",
    "utterly devoid of merit",
    "simply unconscionable",
    "plainly vexatious",
];

const DISMISSAL_ESCALATION: &[&str] = &[
    "ignored the pertinent issues",
    "refused to accept our considered legal advice",
];

// Interest concealment: disclaiming exposure or hiding interest behind
// policy-neutrality framing.

const LIABILITY_INTEREST: &[&str] = &[
    "we cannot accept liability",
    "we are not responsible",
    "no liability of whatsoever nature",
    "all charges are reasonable",
    "in accordance with our mandate",
    "best efforts",
];

const POLICY_NEUTRALITY: &[&str] = &[
    "in line with our policies",
    "consistent with our policies",
    "in accordance with our policies",
    "standard practice",
    "industry standard",
    "in line with industry practice",
    "we are unable to comment",
    "we are not in a position to comment",
    "cannot comment further",
];

const BUILTIN_GROUPS: &[MarkerGroupDef] = &[
    MarkerGroupDef {
        id: "discounting",
        dimension: RiskDimension::EmbeddedDefault,
        tier: MarkerTier::Base,
        weight: 1.0,
        phrases: DISCOUNTING,
    },
    MarkerGroupDef {
        id: "verdicting",
        dimension: RiskDimension::EmbeddedDefault,
        tier: MarkerTier::Base,
        weight: 1.0,
        phrases: VERDICTING,
    },
    MarkerGroupDef {
        id: "verdicting_high",
        dimension: RiskDimension::EmbeddedDefault,
        tier: MarkerTier::HighSeverity,
        weight: 1.0,
        phrases: VERDICTING_HIGH,
    },
    MarkerGroupDef {
        id: "authority_assertion",
        dimension: RiskDimension::BurdenShift,
        tier: MarkerTier::Base,
        weight: 1.0,
        phrases: AUTHORITY_ASSERTION,
    },
    MarkerGroupDef {
        id: "obligation",
        dimension: RiskDimension::BurdenShift,
        tier: MarkerTier::Base,
        weight: 1.0,
        phrases: OBLIGATION,
    },
    MarkerGroupDef {
        id: "procedural_burden",
        dimension: RiskDimension::BurdenShift,
        tier: MarkerTier::HighSeverity,
        weight: 1.0,
        phrases: PROCEDURAL_BURDEN,
    },
    MarkerGroupDef {
        id: "refusal_escalation",
        dimension: RiskDimension::BurdenShift,
        tier: MarkerTier::HighSeverity,
        weight: 2.0,
        phrases: REFUSAL_ESCALATION,
    },
    MarkerGroupDef {
        id: "closure",
        dimension: RiskDimension::Deflection,
        tier: MarkerTier::Base,
        weight: 1.0,
        phrases: CLOSURE,
    },
    MarkerGroupDef {
        id: "soft_closure",
        dimension: RiskDimension::Deflection,
        tier: MarkerTier::Base,
        weight: 1.0,
        phrases: SOFT_CLOSURE,
    },
    MarkerGroupDef {
        id: "dismissive_labelling",
        dimension: RiskDimension::Deflection,
        tier: MarkerTier::HighSeverity,
        weight: 1.0,
        phrases: DISMISSIVE_LABELLING,
    },
    MarkerGroupDef {
        id: "dismissal_escalation",
        dimension: RiskDimension::Deflection,
        tier: MarkerTier::HighSeverity,
        weight: 2.0,
        phrases: DISMISSAL_ESCALATION,
    },
    MarkerGroupDef {
        id: "liability_interest",
        dimension: RiskDimension::InterestConcealment,
        tier: MarkerTier::Base,
        weight: 1.0,
        phrases: LIABILITY_INTEREST,
    },
    MarkerGroupDef {
        id: "policy_neutrality",
        dimension: RiskDimension::InterestConcealment,
        tier: MarkerTier::Base,
        weight: 1.0,
        phrases: POLICY_NEUTRALITY,
    },
];

pub fn builtin_groups() -> &'static [MarkerGroupDef] {
    BUILTIN_GROUPS
}

// Cue lists for the structural heuristics. These are evaluated directly by
// the scorer, not through the marker-group loop.

/// Absolutist qualifiers that, combined with a copular construction, signal
/// an embedded default.
pub const ABSOLUTIST_QUALIFIERS: &[&str] =
    &["always", "never", "impossible", "obvious", "clearly"];

/// Copular forms checked with surrounding spaces against the padded sentence.
pub const COPULAR_FORMS: &[&str] = &[" is ", " are "];

/// Strong modal/obligation cues for the burden-shift heuristic.
pub const MODAL_CUES: &[&str] = &["must", "required to", "until you"];

/// Valediction whose co-occurrence with billing language signals concealed
/// interest.
pub const VALEDICTION_PHRASE: &str = "we wish you everything of the very best";
pub const BILLING_CUE: &str = "invoice";

/// Empathy/benefaction framing phrases.
pub const EMPATHY_FRAMING: &[&str] = &[
    "to the benefit of mr marshall",
    "assist mr marshall",
    "best interests of the children",
];

/// Defensive or threatening phrases whose presence signals motivational
/// opacity, with or without empathy framing.
pub const DEFENSIVE_THREAT: &[&str] = &[
    "reserve the right to pursue a claim",
    "unnecessary costs",
    "mala fide",
    "vindictive claims",
];
