//! The batch verifier and the gated promotion into the registry.

use crate::error::VerificationError;
use crate::outcome::{VerificationOutcome, INVALID_ROLL_NUMBER};
use eduverify_directory::ScoreDirectory;
use eduverify_registry::Registry;
use eduverify_types::{Institute, InstituteId, RollNumber, Student};

/// Classify a batch of candidate roll numbers against committed registry
/// state and the score directory.
///
/// One outcome per non-empty input, in input order. Empty or
/// whitespace-only entries are dropped entirely — they produce no outcome,
/// unlike unknown roll numbers which are reported as errors.
///
/// Per-entry precedence:
/// 1. The claim scan runs first: a roll number listed by any institute
///    other than `claiming` yields [`VerificationOutcome::Malpractice`],
///    even when the directory also knows it.
/// 2. Only unclaimed candidates are looked up in the directory; a miss is
///    an error, a hit a success.
///
/// Duplicate candidates within one batch are evaluated independently —
/// the claim scan sees only committed registry state, never sibling batch
/// entries.
pub fn verify_batch(
    registry: &Registry,
    directory: &impl ScoreDirectory,
    candidates: &[impl AsRef<str>],
    claiming: Option<&InstituteId>,
) -> Vec<VerificationOutcome> {
    candidates
        .iter()
        .filter_map(|raw| RollNumber::parse(raw.as_ref()))
        .map(|roll| classify(registry, directory, roll, claiming))
        .collect()
}

fn classify(
    registry: &Registry,
    directory: &impl ScoreDirectory,
    roll: RollNumber,
    claiming: Option<&InstituteId>,
) -> VerificationOutcome {
    if let Some(holder) = registry.find_claim(&roll, claiming) {
        tracing::warn!(
            roll = %roll,
            claimed_by = %holder.name,
            "double claim detected"
        );
        return VerificationOutcome::Malpractice {
            roll,
            claimed_by: holder.name.clone(),
        };
    }

    match directory.lookup(&roll) {
        Some(record) => VerificationOutcome::Success {
            roll,
            name: record.name.clone(),
            percentile: record.percentile,
            rank: record.rank,
            exam: record.exam,
        },
        None => VerificationOutcome::Error {
            roll,
            reason: INVALID_ROLL_NUMBER.to_string(),
        },
    }
}

/// Promote a successful outcome into an institute's roster.
///
/// Re-runs the claim scan and appends while holding exclusive access to
/// the registry, so check-and-append is a single uninterruptible step: a
/// conflicting claim committed between verification and promotion is
/// caught here rather than violating the uniqueness invariant. Unlike the
/// verify-time scan, promotion does not exempt the target institute —
/// re-promoting a student it already holds would duplicate the roster
/// entry.
pub fn promote<'a>(
    registry: &'a mut Registry,
    outcome: &VerificationOutcome,
    institute: &InstituteId,
) -> Result<&'a Institute, VerificationError> {
    let VerificationOutcome::Success {
        roll,
        name,
        percentile,
        rank,
        exam,
    } = outcome
    else {
        return Err(VerificationError::NotPromotable(
            outcome.roll().to_string(),
        ));
    };

    if let Some(holder) = registry.find_claim(roll, None) {
        return Err(VerificationError::AlreadyClaimed {
            roll: roll.to_string(),
            institute: holder.name.clone(),
        });
    }

    let student = Student {
        roll: roll.clone(),
        name: name.clone(),
        score: Student::format_score(*percentile, *rank),
        exam: *exam,
    };
    tracing::info!(roll = %roll, institute = %institute, "promoting verified student");
    Ok(registry.append_student(institute, student)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduverify_directory::NtaDirectory;
    use eduverify_registry::{seeded, NewInstitute};
    use eduverify_types::{ExamCategory, Fee};

    fn register(registry: &mut Registry, name: &str) -> InstituteId {
        registry
            .register(NewInstitute {
                name: name.into(),
                location: "Delhi".into(),
                fee: Fee::new(100_000),
                phone: "9000000000".into(),
                hostel: false,
            })
            .unwrap()
            .id
            .clone()
    }

    // ── Batch classification ────────────────────────────────────────────

    #[test]
    fn empty_and_whitespace_entries_are_dropped() {
        let registry = Registry::new();
        let directory = NtaDirectory::mock();
        let outcomes = verify_batch(&registry, &directory, &["", "  ", "240100123"], None);
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_success());
        assert_eq!(outcomes[0].roll().as_str(), "240100123");
    }

    #[test]
    fn unknown_roll_reports_invalid() {
        let registry = seeded();
        let directory = NtaDirectory::mock();
        let outcomes = verify_batch(&registry, &directory, &["ZZZ000"], None);
        assert_eq!(
            outcomes,
            vec![VerificationOutcome::Error {
                roll: RollNumber::parse("ZZZ000").unwrap(),
                reason: INVALID_ROLL_NUMBER.into(),
            }]
        );
    }

    #[test]
    fn output_preserves_input_order() {
        let registry = seeded();
        let directory = NtaDirectory::mock();
        let outcomes = verify_batch(
            &registry,
            &directory,
            &["NEET2409", "", "ZZZ000", " 240999999 "],
            None,
        );
        let rolls: Vec<_> = outcomes.iter().map(|o| o.roll().as_str()).collect();
        assert_eq!(rolls, vec!["NEET2409", "ZZZ000", "240999999"]);
    }

    #[test]
    fn claim_by_other_institute_is_malpractice() {
        let mut registry = seeded();
        let mine = register(&mut registry, "My Academy");
        // 240100456 is on Vision Institute's roster.
        let directory = NtaDirectory::mock();
        let outcomes = verify_batch(&registry, &directory, &["240100456"], Some(&mine));
        assert_eq!(
            outcomes,
            vec![VerificationOutcome::Malpractice {
                roll: RollNumber::parse("240100456").unwrap(),
                claimed_by: "Vision Institute".into(),
            }]
        );
    }

    #[test]
    fn claim_check_precedes_directory_lookup() {
        // 240100123 is both on Chaitanya's roster and in the directory;
        // the prior claim must win.
        let registry = seeded();
        let directory = NtaDirectory::mock();
        let outcomes = verify_batch(&registry, &directory, &["240100123"], None);
        assert!(outcomes[0].is_malpractice());
    }

    #[test]
    fn self_claim_falls_through_to_lookup() {
        let registry = seeded();
        let directory = NtaDirectory::mock();
        let chaitanya = registry.institutes()[0].id.clone();
        // Chaitanya re-verifying its own student: not malpractice, and the
        // directory still decides the outcome.
        let outcomes = verify_batch(&registry, &directory, &["240100123"], Some(&chaitanya));
        assert!(outcomes[0].is_success());
    }

    #[test]
    fn self_claim_with_directory_miss_is_error() {
        // 240100789 is seeded on Akashic's roster but absent from the
        // directory, so even the owner gets an error on re-verification.
        let registry = seeded();
        let directory = NtaDirectory::mock();
        let akashic = registry.institutes()[2].id.clone();
        let outcomes = verify_batch(&registry, &directory, &["240100789"], Some(&akashic));
        assert_eq!(
            outcomes,
            vec![VerificationOutcome::Error {
                roll: RollNumber::parse("240100789").unwrap(),
                reason: INVALID_ROLL_NUMBER.into(),
            }]
        );
    }

    #[test]
    fn in_batch_duplicates_do_not_flag_each_other() {
        let mut registry = Registry::new();
        let mine = register(&mut registry, "My Academy");
        let directory = NtaDirectory::mock();
        let outcomes = verify_batch(
            &registry,
            &directory,
            &["NEET2409", "NEET2409"],
            Some(&mine),
        );
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.is_success()));
    }

    #[test]
    fn batch_continues_past_bad_entries() {
        let registry = seeded();
        let directory = NtaDirectory::mock();
        let outcomes = verify_batch(
            &registry,
            &directory,
            &["ZZZ000", "240100456", "NEET2409"],
            None,
        );
        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].is_success());
        assert!(outcomes[1].is_malpractice());
        assert!(outcomes[2].is_success());
    }

    // ── Promotion ───────────────────────────────────────────────────────

    #[test]
    fn promote_appends_verified_student() {
        let mut registry = seeded();
        let mine = register(&mut registry, "My Academy");
        let directory = NtaDirectory::mock();
        let outcomes = verify_batch(&registry, &directory, &["NEET2409"], Some(&mine));

        let institute = promote(&mut registry, &outcomes[0], &mine).unwrap();
        assert_eq!(institute.students.len(), 1);
        let student = &institute.students[0];
        assert_eq!(student.name, "Mohit Jain");
        assert_eq!(student.score, "99.99%tile");
        assert_eq!(student.exam, ExamCategory::Neet);
    }

    #[test]
    fn promote_formats_advanced_scores_by_rank() {
        let mut registry = Registry::new();
        let mine = register(&mut registry, "My Academy");
        let directory = NtaDirectory::mock();
        let outcomes = verify_batch(&registry, &directory, &["ADV24001"], Some(&mine));

        let institute = promote(&mut registry, &outcomes[0], &mine).unwrap();
        assert_eq!(institute.students[0].score, "AIR 450");
    }

    #[test]
    fn promote_rejects_non_success_outcomes() {
        let mut registry = seeded();
        let mine = register(&mut registry, "My Academy");
        let outcome = VerificationOutcome::Error {
            roll: RollNumber::parse("ZZZ000").unwrap(),
            reason: INVALID_ROLL_NUMBER.into(),
        };
        let err = promote(&mut registry, &outcome, &mine).unwrap_err();
        assert!(matches!(err, VerificationError::NotPromotable(_)));
    }

    #[test]
    fn promote_recheck_catches_intervening_claim() {
        let mut registry = Registry::new();
        let first = register(&mut registry, "First Academy");
        let second = register(&mut registry, "Second Academy");
        let directory = NtaDirectory::mock();

        // Both verify the same roll while it is unclaimed.
        let for_first = verify_batch(&registry, &directory, &["NEET2409"], Some(&first));
        let for_second = verify_batch(&registry, &directory, &["NEET2409"], Some(&second));
        assert!(for_first[0].is_success());
        assert!(for_second[0].is_success());

        promote(&mut registry, &for_first[0], &first).unwrap();
        let err = promote(&mut registry, &for_second[0], &second).unwrap_err();
        assert!(matches!(
            err,
            VerificationError::AlreadyClaimed { ref institute, .. }
                if institute == "First Academy"
        ));

        // The roll appears on exactly one roster.
        let roll = RollNumber::parse("NEET2409").unwrap();
        let holders = registry
            .institutes()
            .iter()
            .filter(|i| i.claims(&roll))
            .count();
        assert_eq!(holders, 1);
    }

    #[test]
    fn promote_rejects_re_adding_own_student() {
        let mut registry = Registry::new();
        let mine = register(&mut registry, "My Academy");
        let directory = NtaDirectory::mock();
        let outcomes = verify_batch(&registry, &directory, &["NEET2409"], Some(&mine));

        promote(&mut registry, &outcomes[0], &mine).unwrap();
        // Re-verifying the own student still succeeds (self-claim
        // exemption), but promoting again must not duplicate the entry.
        let again = verify_batch(&registry, &directory, &["NEET2409"], Some(&mine));
        assert!(again[0].is_success());
        let err = promote(&mut registry, &again[0], &mine).unwrap_err();
        assert!(matches!(err, VerificationError::AlreadyClaimed { .. }));
        assert_eq!(registry.get(&mine).unwrap().students.len(), 1);
    }

    #[test]
    fn promote_to_unknown_institute_fails() {
        let mut registry = Registry::new();
        let directory = NtaDirectory::mock();
        let outcomes = verify_batch(&registry, &directory, &["NEET2409"], None);
        let err = promote(&mut registry, &outcomes[0], &InstituteId::new("404")).unwrap_err();
        assert!(matches!(err, VerificationError::Registry(_)));
    }
}
