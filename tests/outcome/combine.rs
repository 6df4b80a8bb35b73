use outcome_rail::{err, errors, Outcome};

#[test]
fn all_success_takes_first_present_value() {
    let combined = Outcome::combine([Outcome::of_value(5), Outcome::success()]);
    assert!(combined.is_success());
    assert!(combined.errors().none());
    assert_eq!(combined.into_value(), Some(5));
}

#[test]
fn payload_free_success_does_not_capture_the_slot() {
    let combined = Outcome::combine([Outcome::success(), Outcome::of_value(5)]);
    assert_eq!(combined.into_value(), Some(5));
}

#[test]
fn first_present_value_wins_over_later_ones() {
    let combined = Outcome::combine([
        Outcome::of_value(1),
        Outcome::of_value(2),
        Outcome::of_value(3),
    ]);
    assert_eq!(combined.into_value(), Some(1));
}

#[test]
fn mixed_operands_fail_and_discard_the_value() {
    let combined = Outcome::combine([
        Outcome::of_value(5),
        Outcome::of_error(err!("value is required", "required", "user.email")),
    ]);
    assert!(combined.is_failure());
    assert_eq!(combined.value(), None);

    let errors = combined.into_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().unwrap().key(), Some("required"));
}

#[test]
fn failures_aggregate_in_operand_order() {
    let combined = Outcome::<i32>::combine([
        Outcome::of_error(err!("a", "k1")),
        Outcome::of_error(err!("b", "k2")),
    ]);
    assert!(combined.is_failure());

    let errors = combined.into_errors();
    assert_eq!(errors.len(), 2);
    let keys: Vec<_> = errors.iter().map(|e| e.key().unwrap()).collect();
    assert_eq!(keys, ["k1", "k2"]);
}

#[test]
fn multi_error_operands_splice_in_order() {
    let combined = Outcome::<i32>::combine([
        Outcome::of_errors(errors![err!("a", "k1"), err!("b", "k2")]),
        Outcome::of_value(9),
        Outcome::of_errors(errors![err!("c", "k3")]),
    ]);
    let keys: Vec<_> = combined
        .iter_errors()
        .map(|e| e.key().unwrap().to_string())
        .collect();
    assert_eq!(keys, ["k1", "k2", "k3"]);
    assert_eq!(combined.value(), None);
}

#[test]
fn bare_failure_flips_the_outcome_without_errors() {
    let combined = Outcome::combine([Outcome::failure(), Outcome::of_value(1)]);
    assert!(combined.is_failure());
    assert!(combined.errors().none());
    assert_eq!(combined.value(), None);
}

#[test]
fn combining_nothing_is_a_payload_free_success() {
    let combined = Outcome::<i32>::combine(core::iter::empty());
    assert!(combined.is_success());
    assert_eq!(combined.value(), None);
    assert!(combined.errors().none());
}

#[test]
fn duplicate_errors_are_retained_across_operands() {
    let combined = Outcome::<i32>::combine([
        Outcome::of_error(err!("first", "dup")),
        Outcome::of_error(err!("second", "dup")),
    ]);
    assert_eq!(combined.iter_errors().count(), 2);
    assert_eq!(combined.into_errors().unique().len(), 1);
}

#[test]
fn collect_aggregates_like_combine() {
    let collected: Outcome<i32> = vec![Outcome::of_value(5), Outcome::success()]
        .into_iter()
        .collect();
    assert_eq!(collected.into_value(), Some(5));

    let failed: Outcome<i32> = vec![
        Outcome::of_value(5),
        Outcome::of_error(err!("boom", "exploded")),
    ]
    .into_iter()
    .collect();
    assert!(failed.is_failure());
}
