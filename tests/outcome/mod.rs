use outcome_rail::{err, errors, outcome_to_result, result_to_outcome, Error, Outcome};

mod combine;

#[test]
fn success_constructors() {
    let bare: Outcome<i32> = Outcome::success();
    assert!(bare.is_success());
    assert!(!bare.is_failure());
    assert_eq!(bare.value(), None);
    assert!(bare.errors().none());

    let carrying = Outcome::of_value(42);
    assert!(carrying.is_success());
    assert_eq!(carrying.value(), Some(&42));
    assert_eq!(carrying.into_value(), Some(42));
}

#[test]
fn failure_constructors() {
    let with_error = Outcome::<()>::of_error(err!("msg", "key", "space"));
    assert!(with_error.is_failure());
    assert_eq!(with_error.value(), None);
    assert_eq!(with_error.errors().len(), 1);
    assert_eq!(with_error.errors().first().unwrap().key(), Some("key"));

    let with_parts = Outcome::<()>::of_error_msg(Some("msg"), Some("key"), Some("space"));
    assert_eq!(with_parts, with_error);

    let with_collection = Outcome::<()>::of_errors(errors![err!("a", "k1"), err!("b", "k2")]);
    assert_eq!(with_collection.iter_errors().count(), 2);
}

#[test]
fn bare_failure_carries_no_errors() {
    let bare: Outcome<i32> = Outcome::failure();
    assert!(bare.is_failure());
    assert!(bare.errors().none());
    assert_eq!(bare.iter_errors().count(), 0);
    assert_eq!(bare.value(), None);
}

#[test]
fn error_accessors_on_success_are_empty() {
    let success = Outcome::of_value(1);
    assert!(success.errors().none());
    assert_eq!(success.iter_errors().count(), 0);
    assert!(success.into_errors().none());
}

#[test]
fn if_success_runs_only_on_success() {
    let mut ran = false;
    let outcome = Outcome::of_value(1).if_success(|| ran = true);
    assert!(ran);
    assert_eq!(outcome.value(), Some(&1));

    let mut ran = false;
    let outcome = Outcome::<i32>::failure().if_success(|| ran = true);
    assert!(!ran);
    assert!(outcome.is_failure());
}

#[test]
fn if_failure_receives_the_outcome() {
    let mut seen_keys = Vec::new();
    let outcome = Outcome::<i32>::of_error(err!("msg", "key"))
        .if_failure(|o| seen_keys.extend(o.iter_errors().filter_map(Error::key).map(String::from)));
    assert_eq!(seen_keys, ["key"]);
    assert!(outcome.is_failure());

    let mut ran = false;
    let outcome = Outcome::of_value(1).if_failure(|_| ran = true);
    assert!(!ran);
    assert_eq!(outcome.value(), Some(&1));
}

#[test]
fn tap_runs_unconditionally() {
    let mut taps = 0;
    let success = Outcome::of_value(1).tap(|_| taps += 1);
    let failure = Outcome::<i32>::failure().tap(|_| taps += 1);
    assert_eq!(taps, 2);
    assert!(success.is_success());
    assert!(failure.is_failure());
}

#[test]
fn transform_receives_the_whole_outcome() {
    let recovered = Outcome::<i32>::of_error(err!("timed out", "timeout")).transform(|outcome| {
        assert_eq!(outcome.iter_errors().count(), 1);
        if outcome.is_failure() {
            Outcome::of_value(0)
        } else {
            outcome
        }
    });
    assert_eq!(recovered.value(), Some(&0));

    let widened = Outcome::of_value(21).transform(|outcome| {
        outcome.map_value(|n| n * 2)
    });
    assert_eq!(widened.into_value(), Some(42));
}

#[test]
fn map_value_touches_only_the_payload() {
    assert_eq!(Outcome::of_value(21).map_value(|n| n * 2).into_value(), Some(42));

    let payload_free: Outcome<i32> = Outcome::success();
    assert_eq!(payload_free.map_value(|n| n * 2).into_value(), None);

    let failure = Outcome::<i32>::of_error(err!("msg", "key"));
    let mapped = failure.map_value(|n| n * 2);
    assert!(mapped.is_failure());
    assert_eq!(mapped.errors().first().unwrap().key(), Some("key"));
}

#[test]
fn result_conversions() {
    let ok: Result<i32, Error> = Ok(5);
    assert_eq!(result_to_outcome(ok).into_value(), Some(5));

    let failed: Result<i32, Error> = Err(err!("msg", "key"));
    let outcome = result_to_outcome(failed);
    assert!(outcome.is_failure());

    assert_eq!(outcome_to_result(Outcome::of_value(5)), Ok(Some(5)));
    assert_eq!(outcome_to_result(Outcome::<i32>::success()), Ok(None));

    let report = errors![err!("a", "k1")];
    let back = outcome_to_result(Outcome::<i32>::of_errors(report.clone()));
    assert_eq!(back, Err(report));
}

#[test]
fn from_impls_cover_the_boundary() {
    let from_error: Outcome<i32> = err!("msg", "key").into();
    assert!(from_error.is_failure());

    let from_collection: Outcome<i32> = errors![err!("a", "k1")].into();
    assert_eq!(from_collection.iter_errors().count(), 1);

    let from_ok: Outcome<i32> = Ok::<_, Error>(7).into();
    assert_eq!(from_ok.into_value(), Some(7));

    let from_err: Outcome<i32> = Err::<i32, _>(errors![err!("a", "k1")]).into();
    assert!(from_err.is_failure());
}

#[test]
fn value_iteration_yields_at_most_one_item() {
    let carrying = Outcome::of_value(5);
    assert_eq!(carrying.iter().copied().collect::<Vec<_>>(), [5]);

    let bare: Outcome<i32> = Outcome::success();
    assert_eq!(bare.iter().count(), 0);

    let failed: Outcome<i32> = Outcome::failure();
    assert_eq!(failed.into_iter().count(), 0);

    let total: i32 = Outcome::of_value(5).into_iter().sum();
    assert_eq!(total, 5);
}

#[cfg(feature = "serde")]
mod serde_roundtrip {
    use outcome_rail::{err, errors, Outcome};

    #[test]
    fn roundtrip_success_and_failure() {
        let success = Outcome::of_value(42);
        let json = serde_json::to_string(&success).unwrap();
        let back: Outcome<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, success);

        let failure = Outcome::<i32>::of_errors(errors![err!("a", "k1", "s1")]);
        let json = serde_json::to_string(&failure).unwrap();
        let back: Outcome<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, failure);
    }
}
