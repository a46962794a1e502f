use integration_tests::solve;
use quadratic_core::{BasicQuadraticEquation, EquationError};

/// `(coefficients, precision, root1, root2)`
const SCENARIOS: &[([i32; 3], i32, &str, &str)] = &[
    ([1, -5, 6], 3, "2", "3"),
    ([1, 5, 6], 3, "-3", "-2"),
    ([1, 2, -3], 3, "-3", "1"),
    ([3, 4, 5], 3, "-0.667 + 1.106i", "-0.667 - 1.106i"),
    ([1, 2, 1], 3, "-1", "-1"),
    ([8, 5, -2], 3, "-0.902", "0.277"),
    ([1, -5, 6], 4, "2", "3"),
    ([1, 5, 6], 4, "-3", "-2"),
    ([1, 2, -3], 4, "-3", "1"),
    ([3, 4, 5], 4, "-0.6667 + 1.1055i", "-0.6667 - 1.1055i"),
    ([1, 2, 1], 4, "-1", "-1"),
    ([8, 5, -2], 4, "-0.9021", "0.2771"),
];

#[test]
fn documented_scenarios() {
    for &(coefficients, precision, root1, root2) in SCENARIOS {
        let (one, two, both) = solve(coefficients, precision);

        assert_eq!(one, root1, "root1 of {coefficients:?} at {precision}");
        assert_eq!(two, root2, "root2 of {coefficients:?} at {precision}");
        assert_eq!(both, format!("{root1} and {root2}"));
    }
}

#[test]
fn negative_leading_coefficient() {
    let (one, two, _) = solve([-1, 0, 4], 2);
    assert_eq!((one.as_str(), two.as_str()), ("-2", "2"));

    let (one, two, _) = solve([-3, -4, -5], 3);
    assert_eq!(one, "-0.667 + 1.106i");
    assert_eq!(two, "-0.667 - 1.106i");
}

#[test]
fn pure_imaginary_roots() {
    let (one, two, _) = solve([1, 0, 4], 2);
    assert_eq!(one, "0 + 2i");
    assert_eq!(two, "0 - 2i");
}

#[test]
fn wrong_arity_is_rejected() {
    assert_eq!(
        BasicQuadraticEquation::try_from([1_i32, 2].as_slice()),
        Err(EquationError::InvalidArgumentCount { given: 2 })
    );
    assert_eq!(
        BasicQuadraticEquation::try_from(vec![1_i32, 2, 3, 4]),
        Err(EquationError::InvalidArgumentCount { given: 4 })
    );
}

#[test]
fn zero_leading_coefficient_is_rejected() {
    assert_eq!(
        BasicQuadraticEquation::new(0, 2, 3),
        Err(EquationError::Degenerate)
    );
}

#[test]
fn extreme_coefficients_respect_precision() {
    let edges = [i32::MIN, i32::MIN + 1, -1, 1, i32::MAX];

    for a in edges {
        for b in edges {
            for c in edges {
                for precision in 0..40 {
                    let (one, two, _) = solve([a, b, c], precision);
                    for root in [&one, &two] {
                        let limit = usize::try_from(precision).unwrap();
                        let parts = root.trim_end_matches('i').split([' ', '+']);
                        for part in parts.filter(|p| !p.is_empty() && *p != "-") {
                            let decimals = part.split_once('.').map_or(0, |(_, f)| f.len());
                            assert!(
                                decimals <= limit,
                                "{root} for ({a}, {b}, {c}) at precision {precision}"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn large_precision_rounds_the_formatter_path() {
    let (one, two, _) = solve([i32::MIN, i32::MAX, i32::MIN], 16);
    assert!(one.starts_with("0.4999999997671694 + "), "{one}");
    assert!(two.starts_with("0.4999999997671694 - "), "{two}");

    let (one, _, _) = solve([i32::MIN, i32::MAX, i32::MIN], 15);
    assert!(one.starts_with("0.499999999767169 + "), "{one}");
}
