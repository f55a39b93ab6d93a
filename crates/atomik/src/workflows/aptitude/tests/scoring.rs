use super::common::KEY;
use crate::workflows::aptitude::scoring::{classify, PASSING_SCORE, REVIEW_SCORE};
use crate::workflows::aptitude::{
    AnswerKey, AnswerKeyError, AptitudeScore, AptitudeScorer, CandidateStatus,
};

fn score(answers: &[i64]) -> AptitudeScore {
    AptitudeScorer::default().score(answers)
}

#[test]
fn perfect_sheet_passes() {
    assert_eq!(
        score(&KEY),
        AptitudeScore {
            score: 5,
            status: CandidateStatus::Passed
        }
    );
}

#[test]
fn empty_sheet_is_pending() {
    let outcome = score(&[]);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.status, CandidateStatus::Pending);
}

#[test]
fn four_correct_passes() {
    let outcome = score(&[2, 1, 3, 2, 9]);
    assert_eq!(outcome.score, 4);
    assert_eq!(outcome.status, CandidateStatus::Passed);
}

#[test]
fn three_correct_needs_review() {
    let outcome = score(&[2, 1, 3, 9, 9]);
    assert_eq!(outcome.score, 3);
    assert_eq!(outcome.status, CandidateStatus::NeedsReview);
}

#[test]
fn two_correct_stays_pending() {
    let outcome = score(&[9, 9, 3, 2, 4]);
    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.status, CandidateStatus::Pending);
}

#[test]
fn trailing_answers_are_ignored() {
    let outcome = score(&[2, 1, 3, 2, 4, 9, 9]);
    assert_eq!(outcome.score, 5);
    assert_eq!(outcome.status, CandidateStatus::Passed);

    // A correct-looking answer past the key must not be credited.
    let outcome = score(&[9, 9, 9, 9, 9, 4]);
    assert_eq!(outcome.score, 0);
}

#[test]
fn short_sheets_are_not_penalised() {
    let outcome = score(&[2, 1, 3]);
    assert_eq!(outcome.score, 3);
    assert_eq!(outcome.status, CandidateStatus::NeedsReview);
}

#[test]
fn out_of_range_answers_only_fail_to_match() {
    let outcome = score(&[-2, 0, i64::MAX, 2, 4]);
    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.status, CandidateStatus::Pending);
}

#[test]
fn scoring_is_repeatable() {
    let scorer = AptitudeScorer::default();
    let answers = [2, 4, 3, 2, 1];
    assert_eq!(scorer.score(&answers), scorer.score(&answers));
}

#[test]
fn thresholds_split_into_three_bands() {
    assert_eq!(PASSING_SCORE, 4);
    assert_eq!(REVIEW_SCORE, 3);
    let bands: Vec<CandidateStatus> = (0..=5).map(classify).collect();
    assert_eq!(
        bands,
        vec![
            CandidateStatus::Pending,
            CandidateStatus::Pending,
            CandidateStatus::Pending,
            CandidateStatus::NeedsReview,
            CandidateStatus::Passed,
            CandidateStatus::Passed,
        ]
    );
}

#[test]
fn scorer_never_produces_rejected() {
    assert!((0..=100).all(|score| classify(score) != CandidateStatus::Rejected));
}

#[test]
fn custom_key_drives_comparison() {
    let key = AnswerKey::parse("4,4,4,4,4,4").expect("valid key");
    let scorer = AptitudeScorer::new(key);
    let outcome = scorer.score(&[4, 4, 4, 1, 1, 1]);
    assert_eq!(outcome.score, 3);
    assert_eq!(outcome.status, CandidateStatus::NeedsReview);
}

#[test]
fn answer_key_parsing_rejects_bad_input() {
    assert_eq!(AnswerKey::parse(""), Err(AnswerKeyError::Empty));
    assert_eq!(
        AnswerKey::parse("2,x"),
        Err(AnswerKeyError::NotANumber("x".to_string()))
    );
    assert_eq!(
        AnswerKey::parse("2,1,5"),
        Err(AnswerKeyError::OptionOutOfRange {
            question: 3,
            option: 5
        })
    );
    assert_eq!(AnswerKey::default().options(), &KEY);
}
