//! End-to-end tests driving the public API the way a client test suite
//! would: integer division, list operations, sorting, and dot products.

use propcheck::{
    Generator, Property, PropertyTest, Reduction, RunConfig, alphanum, boolean, int_nonneg,
    int_range, reduction, string_of, vec_of,
};

fn division_test(
    name: &str,
    property: impl Property<(i64, i64)> + 'static,
) -> PropertyTest<(i64, i64)> {
    // Dividend paired with a nonzero divisor; the reduction respects the
    // nonzero domain with the matching filter.
    PropertyTest::new(
        name,
        int_range(-100i64, 100).zip(int_range(-100i64, 100).filter(|b: &i64| *b != 0)),
        reduction::pair(
            reduction::int::<i64>(),
            reduction::int::<i64>().filter(|b: &i64| *b != 0),
        ),
        property,
    )
}

#[test]
fn division_identity_holds() {
    let test = division_test("division identity", |&(a, b): &(i64, i64)| {
        a == (a / b) * b + a % b
    });
    assert_eq!(test.check(100), Ok(true));
}

#[test]
fn inverted_division_identity_is_falsified_and_shrunk() {
    let inverted = |&(a, b): &(i64, i64)| a == (a / b) * b - a % b;
    let test = division_test("inverted division identity", inverted);

    assert_eq!(test.check(100), Ok(false));

    let minimal = test.fails_at(100).unwrap().expect("expected a counterexample");
    // The minimal counterexample still fails when re-evaluated directly.
    assert!(!inverted(&minimal));
    assert_ne!(minimal.1, 0);
    assert!((-100..=100).contains(&minimal.0));
    assert!((-100..=100).contains(&minimal.1));
}

#[test]
fn inverted_division_identity_keeps_first_failure() {
    let inverted = |&(a, b): &(i64, i64)| a == (a / b) * b - a % b;
    let test = division_test("inverted division with original", inverted);

    let (first, minimal) = test
        .fails_at_init(100)
        .unwrap()
        .expect("expected a counterexample");
    assert!(!inverted(&first));
    assert!(!inverted(&minimal));
}

#[test]
fn implies_restricts_checks_to_nonzero_divisors() {
    // No generator-side filter: the precondition guards the division, and
    // the conclusion is never evaluated for b == 0.
    let test = PropertyTest::new(
        "guarded division identity",
        int_range(-100i64, 100).zip(int_range(-100i64, 100)),
        reduction::pair(reduction::int::<i64>(), reduction::int::<i64>()),
        (|&(_, b): &(i64, i64)| b != 0).implies(|&(a, b): &(i64, i64)| a == (a / b) * b + a % b),
    );
    assert_eq!(test.check(200), Ok(true));
}

#[test]
fn list_generator_respects_length_and_domain() {
    let test = PropertyTest::new(
        "fixed-length non-negative lists",
        vec_of(10, int_nonneg(10i64)),
        reduction::vec_of(reduction::int_nonneg::<i64>()),
        |v: &Vec<i64>| v.len() == 10 && v.iter().all(|x| (0..=10).contains(x)),
    );
    assert_eq!(test.check(100), Ok(true));
}

#[test]
fn sorting_preserves_length_and_orders() {
    let test = PropertyTest::new(
        "sorting invariants",
        vec_of(8, int_range(-50i64, 50)),
        reduction::vec_of(reduction::int::<i64>()),
        |v: &Vec<i64>| {
            let mut sorted = v.clone();
            sorted.sort();
            sorted.len() == v.len() && sorted.windows(2).all(|w| w[0] <= w[1])
        },
    );
    assert_eq!(test.check(100), Ok(true));
}

#[test]
fn unsorted_lists_are_found_and_shrunk() {
    let is_sorted = |v: &Vec<i64>| v.windows(2).all(|w| w[0] <= w[1]);
    let test = PropertyTest::new(
        "random lists are sorted",
        vec_of(6, int_nonneg(20i64)),
        reduction::vec_of(reduction::int_nonneg::<i64>()),
        is_sorted,
    );
    let minimal = test
        .fails_at(100)
        .unwrap()
        .expect("random lists should not all be sorted");
    assert!(!is_sorted(&minimal));
    assert!(minimal.len() <= 6);
    assert!(minimal.iter().all(|x| (0..=20).contains(x)));
}

#[test]
fn dot_product_commutes() {
    fn dot(a: &[i64], b: &[i64]) -> i64 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }
    let test = PropertyTest::new(
        "dot product commutes",
        vec_of(5, int_range(-10i64, 10)).zip(vec_of(5, int_range(-10i64, 10))),
        reduction::pair(
            reduction::vec_of(reduction::int::<i64>()),
            reduction::vec_of(reduction::int::<i64>()),
        ),
        |(a, b): &(Vec<i64>, Vec<i64>)| dot(a, b) == dot(b, a),
    );
    assert_eq!(test.check(100), Ok(true));
}

#[test]
fn pass_and_fail_rates_account_for_every_draw() {
    let test = PropertyTest::new(
        "coin flips",
        boolean(0.5),
        reduction::empty(),
        |b: &bool| *b,
    );
    let (pass, fail) = test.check_percentage(500).unwrap();
    assert!((pass + fail - 1.0).abs() < 1e-9);
    assert!(pass > 0.0);
    assert!(fail > 0.0);
}

#[test]
fn string_counterexamples_stay_within_the_drawn_domain() {
    let no_digits = |s: &String| s.chars().all(|c| !c.is_ascii_digit());
    let test = PropertyTest::new(
        "alphanumeric strings have no digits",
        string_of(6, alphanum()),
        reduction::string_of(reduction::alphanum()),
        no_digits,
    );
    let minimal = test
        .fails_at(200)
        .unwrap()
        .expect("six alphanumeric draws should hit a digit within 200 strings");
    assert!(!no_digits(&minimal));
    assert!(minimal.len() <= 6);
    assert!(minimal.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn seeded_runs_are_reproducible_end_to_end() {
    let inverted = |&(a, b): &(i64, i64)| a == (a / b) * b - a % b;
    let test = division_test("seeded inverted division", inverted);
    let config = RunConfig::with_seed(7);
    let first = test.fails_at_init_with_config(100, &config).unwrap();
    let second = test.fails_at_init_with_config(100, &config).unwrap();
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn execute_reports_per_test_outcomes() {
    let tests = vec![
        division_test("identity", |&(a, b): &(i64, i64)| a == (a / b) * b + a % b),
        division_test("inverted", |&(a, b): &(i64, i64)| a == (a / b) * b - a % b),
    ];
    let results = propcheck::execute(100, &tests).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].0.name(), "identity");
    assert!(results[0].1.is_none());
    assert_eq!(results[1].0.name(), "inverted");
    assert!(results[1].1.is_some());
}
