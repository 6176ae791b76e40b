use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bpdup_match::{
    CancellationToken, MatchEngine, MatchError, MatchSummary, SkipReason, generate_pairs,
    normalize, normalize_record, run, score, top_matches,
};
use bpdup_model::{
    ConfidenceLevel, ConfigError, DEFAULT_MAX_NAME_CHARS, EmptyNamePolicy, IgnoreWordSet,
    MatchConfig, Record,
};

fn demo_records() -> Vec<Record> {
    [
        ("BP001", "ABC Company Ltd.", ""),
        ("BP002", "ABC Company Limited", ""),
        ("BP003", "Mrs. Jane Smith", ""),
        ("BP004", "Jane Smith", ""),
        ("BP005", "XYZ Corporation", "Technology Division"),
        ("BP006", "XYZ Corp.", "Tech Division"),
        ("BP007", "Global Trading Co.", ""),
        ("BP008", "Global Trading Company", "International"),
        ("BP009", "Mr. John Doe", ""),
        ("BP010", "John Doe", "Senior Partner"),
        ("BP011", "Smith & Associates LLC", ""),
        ("BP012", "Smith and Associates", "LLC"),
        ("BP013", "First National Bank", ""),
        ("BP014", "1st National Bank", ""),
        ("BP015", "Acme Industries", ""),
        ("BP016", "ACME INDUSTRIES LTD", ""),
        ("BP017", "Tech Solutions Inc.", ""),
        ("BP018", "Unique Company", "No Matches"),
        ("BP019", "Pacific Trading", "Enterprises"),
        ("BP020", "Pacific Trading Enterprises", ""),
    ]
    .into_iter()
    .map(|(id, name1, name2)| Record::new(id, name1, name2))
    .collect()
}

fn ids(records: &[(&str, &str)]) -> Vec<Record> {
    records
        .iter()
        .map(|(id, name)| Record::new(*id, *name, ""))
        .collect()
}

#[test]
fn abc_ltd_normalizes_to_the_same_name() {
    let ignore: IgnoreWordSet = ["ltd"].into_iter().collect();
    assert_eq!(normalize("ABC Ltd.", &ignore), "abc");
    assert_eq!(normalize("abc ltd", &ignore), "abc");

    let config = MatchConfig::default().with_ignore_words(ignore);
    let outcome = run(&ids(&[("1", "ABC Ltd."), ("2", "abc ltd")]), &config).unwrap();
    assert_eq!(outcome.pairs.len(), 1);
    assert_eq!(outcome.pairs[0].score, 100.0);
    assert_eq!(outcome.pairs[0].confidence, ConfidenceLevel::High);
}

#[test]
fn threshold_is_inclusive_on_the_exact_score() {
    // All three metrics are 60 for this pair, so the combined score is exactly 60.
    assert_eq!(score("abcde", "abcxy"), 60.0);
    let records = ids(&[("1", "abcde"), ("2", "abcxy")]);

    let at = generate_pairs(&records, &MatchConfig::new(60.0).unwrap()).unwrap();
    assert_eq!(at.len(), 1);
    assert_eq!(at[0].confidence, ConfidenceLevel::Medium);

    let above = generate_pairs(&records, &MatchConfig::new(60.001).unwrap()).unwrap();
    assert!(above.is_empty());
}

#[test]
fn identical_names_give_every_pair() {
    let records = ids(&[
        ("1", "Acme"),
        ("2", "ACME"),
        ("3", "acme."),
        ("4", " Acme "),
        ("5", "(acme)"),
    ]);
    let outcome = run(&records, &MatchConfig::default()).unwrap();
    assert_eq!(outcome.pairs.len(), 5 * 4 / 2);
    assert!(
        outcome
            .pairs
            .iter()
            .all(|p| p.score == 100.0 && p.confidence == ConfidenceLevel::High)
    );
}

#[test]
fn distinct_names_give_no_pairs() {
    let records = ids(&[
        ("1", "alpha"),
        ("2", "bravo"),
        ("3", "charlie"),
        ("4", "delta"),
        ("5", "echo"),
        ("6", "foxtrot"),
    ]);
    let outcome = run(&records, &MatchConfig::default()).unwrap();
    assert!(outcome.pairs.is_empty());
    assert_eq!(outcome.comparisons, 15);
}

#[test]
fn demonstration_set_finds_expected_duplicates() {
    let records = demo_records();
    let config = MatchConfig::default().with_default_ignore_words();
    let outcome = run(&records, &config).unwrap();

    let found: Vec<(&str, &str, ConfidenceLevel)> = outcome
        .pairs
        .iter()
        .map(|p| (p.record_a.as_str(), p.record_b.as_str(), p.confidence))
        .collect();
    assert_eq!(
        found,
        vec![
            ("BP001", "BP002", ConfidenceLevel::High),
            ("BP003", "BP004", ConfidenceLevel::High),
            ("BP011", "BP012", ConfidenceLevel::High),
            ("BP015", "BP016", ConfidenceLevel::High),
            ("BP019", "BP020", ConfidenceLevel::High),
            ("BP005", "BP006", ConfidenceLevel::Medium),
            ("BP013", "BP014", ConfidenceLevel::Medium),
            ("BP007", "BP008", ConfidenceLevel::Medium),
            ("BP009", "BP010", ConfidenceLevel::Medium),
        ]
    );
    assert!((outcome.pairs[5].score - 73.913_043_478_260_87).abs() < 1e-9);
    assert!((outcome.pairs[7].score - 70.0).abs() < 1e-9);

    let summary = MatchSummary::from_outcome(&outcome, records.len());
    assert_eq!(summary.records_with_matches, 18);
    assert_eq!(summary.high, 5);
    assert_eq!(summary.medium, 4);
    assert_eq!(summary.low, 0);
}

#[test]
fn ranked_view_of_demonstration_set() {
    let records = demo_records();
    let config = MatchConfig::default().with_default_ignore_words();
    let outcome = run(&records, &config).unwrap();
    let ranked = top_matches(&outcome, &records, 3).unwrap();

    assert_eq!(ranked.len(), 18);
    assert_eq!(ranked[0].record.bp_number, "BP001");
    assert_eq!(ranked[1].record.bp_number, "BP002");
    assert_eq!(ranked[1].matches[0].record.bp_number, "BP001");
    assert!(ranked.iter().all(|r| r.matches.len() == 1));
    assert!(ranked.iter().all(|r| r.record.bp_number != "BP017"));
}

#[test]
fn empty_names_policy() {
    let records = vec![
        Record::new("1", "", ""),
        Record::new("2", "Mrs.", "Ltd"),
        Record::new("3", "Acme", ""),
    ];
    let base = MatchConfig::default().with_default_ignore_words();

    let excluded = run(&records, &base).unwrap();
    assert!(excluded.pairs.is_empty());

    let compared = run(
        &records,
        &base.clone().with_empty_names(EmptyNamePolicy::Compare),
    )
    .unwrap();
    assert_eq!(compared.pairs.len(), 1);
    assert_eq!(compared.pairs[0].score, 100.0);
    assert_eq!(compared.pairs[0].confidence, ConfidenceLevel::High);
}

#[test]
fn bad_identifiers_are_skipped_not_fatal() {
    let records = ids(&[("BP1", "Acme"), ("", "Acme"), ("BP1", "Acme"), ("BP2", "Acme")]);
    let outcome = run(&records, &MatchConfig::default()).unwrap();

    assert_eq!(outcome.records_compared, 2);
    assert_eq!(outcome.pairs.len(), 1);
    assert_eq!(
        (outcome.pairs[0].index_a, outcome.pairs[0].index_b),
        (0, 3)
    );
    let reasons: Vec<SkipReason> = outcome.skipped.iter().map(|s| s.reason).collect();
    assert_eq!(
        reasons,
        vec![SkipReason::MissingIdentifier, SkipReason::DuplicateIdentifier]
    );
}

#[test]
fn minimum_score_bounds_are_accepted() {
    let records = ids(&[("1", "alpha"), ("2", "bravo")]);
    let everything = run(&records, &MatchConfig::new(0.0).unwrap()).unwrap();
    assert_eq!(everything.pairs.len(), 1);
    assert_eq!(everything.pairs[0].confidence, ConfidenceLevel::Low);

    let exact_only = run(&records, &MatchConfig::new(100.0).unwrap()).unwrap();
    assert!(exact_only.pairs.is_empty());
}

#[test]
fn out_of_range_minimum_fails_before_matching() {
    let config = MatchConfig {
        minimum_score: -1.0,
        ..MatchConfig::default()
    };
    let err = run(&demo_records(), &config).unwrap_err();
    assert_eq!(
        err,
        MatchError::Config(ConfigError::MinimumScoreOutOfRange { value: -1.0 })
    );
}

#[test]
fn cancellation_between_batches() {
    let records: Vec<Record> = (0..50)
        .map(|i| Record::new(format!("BP{i}"), "Acme", ""))
        .collect();
    let token = CancellationToken::new();
    let batches = Arc::new(AtomicUsize::new(0));

    let engine = MatchEngine::new(MatchConfig::default().with_chunk_rows(5))
        .unwrap()
        .with_cancellation(token.clone())
        .with_progress({
            let batches = Arc::clone(&batches);
            move |_| {
                if batches.fetch_add(1, Ordering::SeqCst) == 1 {
                    token.cancel();
                }
            }
        });

    let err = engine.run(&records).unwrap_err();
    assert_eq!(batches.load(Ordering::SeqCst), 2);
    // Rows 0..10 pair with every later row.
    let expected: usize = (0..10).map(|row| 49 - row).sum();
    assert_eq!(
        err,
        MatchError::Cancelled {
            pairs_emitted: expected
        }
    );
}

#[test]
fn progress_reaches_all_rows() {
    let records = demo_records();
    let last = Arc::new(AtomicUsize::new(0));
    let engine = MatchEngine::new(MatchConfig::default().with_chunk_rows(7))
        .unwrap()
        .with_progress({
            let last = Arc::clone(&last);
            move |progress| {
                assert_eq!(progress.rows_total, 20);
                last.store(progress.rows_done, Ordering::SeqCst);
            }
        });
    engine.run(&records).unwrap();
    assert_eq!(last.load(Ordering::SeqCst), 20);
}

#[test]
fn very_long_names_are_bounded_and_still_match() {
    let long_words = "acme trading ".repeat(800);
    let long_token = "x".repeat(10_000);
    let records = vec![
        Record::new("BP1", long_words.as_str(), ""),
        Record::new("BP2", long_words.as_str(), "Ltd"),
        Record::new("BP3", long_token.as_str(), ""),
        Record::new("BP4", "Acme Trading", ""),
    ];
    assert!(long_words.chars().count() >= 10_000);

    let config = MatchConfig::default().with_default_ignore_words();
    for record in &records {
        let name = normalize_record(record, &config);
        assert!(name.chars().count() <= DEFAULT_MAX_NAME_CHARS);
    }
    assert_eq!(
        normalize_record(&records[2], &config),
        "x".repeat(DEFAULT_MAX_NAME_CHARS)
    );

    let outcome = run(&records, &config).unwrap();
    assert_eq!(outcome.records_compared, 4);
    assert_eq!(outcome.comparisons, 6);
    let first = &outcome.pairs[0];
    assert_eq!((first.index_a, first.index_b), (0, 1));
    assert_eq!(first.score, 100.0);
}
