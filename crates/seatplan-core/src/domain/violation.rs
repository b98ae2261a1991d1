//! Constraint violations and evaluation results

use std::fmt;

use super::student::StudentId;

/// The four constraint categories the evaluator checks.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViolationKind {
    /// A separated pair ended up within one king-move of each other.
    Separation,
    /// A required buddy is missing from both side seats.
    Pairing,
    /// Same-gender side neighbors while the gender-balance rule is on.
    GenderClash,
    /// Same-extreme-level side neighbors while the diversity rule is on.
    LevelClumping,
}

impl ViolationKind {
    /// Stable lowercase label used in reports.
    pub const fn label(&self) -> &'static str {
        match self {
            ViolationKind::Separation => "separation",
            ViolationKind::Pairing => "pairing",
            ViolationKind::GenderClash => "gender-clash",
            ViolationKind::LevelClumping => "level-clumping",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One detected constraint breach, tied to the student it was found on.
///
/// Violations are reported per seat scan, not deduplicated: a mutual
/// separation produces one record for each party, and a student flanked by
/// two enemies produces two records.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    /// Student the rule was evaluated for.
    pub student: StudentId,
    pub kind: ViolationKind,
    /// Other party when the rule involves one: the adjacent enemy, the
    /// missing buddy, or the clashing neighbor.
    pub related: Option<StudentId>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.related) {
            (ViolationKind::Separation, Some(other)) => {
                write!(f, "separation: student {} adjacent to student {}", self.student, other)
            }
            (ViolationKind::Pairing, Some(other)) => {
                write!(f, "pairing: student {} not beside student {}", self.student, other)
            }
            (kind, Some(other)) => {
                write!(f, "{kind}: student {} beside student {}", self.student, other)
            }
            (kind, None) => write!(f, "{kind}: student {}", self.student),
        }
    }
}

/// Result of one evaluator pass over a layout.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Display score: [`Evaluation::BASE_SCORE`] minus the violation
    /// count. Unbounded below; useful only as a rough quality indicator.
    pub score: i64,
    /// Every breach in seat-scan order.
    pub violations: Vec<Violation>,
}

impl Evaluation {
    /// Score of a violation-free chart.
    pub const BASE_SCORE: i64 = 100;

    /// Builds the evaluation for a collected violation list.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        let score = Self::BASE_SCORE - violations.len() as i64;
        Evaluation { score, violations }
    }

    /// Whether the chart satisfies every active constraint.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations of one kind.
    pub fn count_of(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }
}
