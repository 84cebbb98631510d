use super::config::GradeCutoffs;
use crate::workflows::underwriting::domain::{CreditGrade, EligibilityGates, EligibilityStatus};

/// Maps a composite score to a letter grade.
pub(crate) fn grade_for_score(total_score: u8, cutoffs: &GradeCutoffs) -> CreditGrade {
    if total_score >= cutoffs.a {
        CreditGrade::A
    } else if total_score >= cutoffs.b {
        CreditGrade::B
    } else if total_score >= cutoffs.c {
        CreditGrade::C
    } else {
        CreditGrade::D
    }
}

/// Resolves coarse eligibility. A failed gate forces ineligibility no matter
/// how strong the score is; grade C always routes to manual review.
pub(crate) fn resolve_eligibility(
    grade: CreditGrade,
    gates: &EligibilityGates,
) -> EligibilityStatus {
    if !gates.passed {
        return EligibilityStatus::Ineligible;
    }
    match grade {
        CreditGrade::A | CreditGrade::B => EligibilityStatus::Eligible,
        CreditGrade::C => EligibilityStatus::ReviewRequired,
        CreditGrade::D => EligibilityStatus::Ineligible,
    }
}
