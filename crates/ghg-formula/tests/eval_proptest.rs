use std::collections::BTreeMap;

use ghg_formula::{evaluate, parse};
use proptest::prelude::*;

proptest! {
    #[test]
    fn integer_literals_evaluate_to_themselves(value in -1_000_000i64..1_000_000) {
        let empty = BTreeMap::new();
        let result = evaluate(&value.to_string(), &empty).unwrap();
        prop_assert_eq!(result, value as f64);
    }

    #[test]
    fn bound_variables_evaluate_to_their_binding(
        name in "[a-z_][a-z0-9_]{0,11}",
        value in -1e9f64..1e9,
    ) {
        let mut vars = BTreeMap::new();
        vars.insert(name.clone(), value);
        prop_assert_eq!(evaluate(&name, &vars).unwrap(), value);
    }

    #[test]
    fn arithmetic_matches_native_evaluation(
        a in -1000i32..1000,
        b in -1000i32..1000,
        c in -1000i32..1000,
    ) {
        let vars: BTreeMap<String, f64> = [
            ("a".to_string(), a as f64),
            ("b".to_string(), b as f64),
            ("c".to_string(), c as f64),
        ]
        .into_iter()
        .collect();
        let result = evaluate("a*b + c", &vars).unwrap();
        prop_assert_eq!(result, (a as f64) * (b as f64) + (c as f64));
    }

    #[test]
    fn evaluation_is_deterministic(
        a in -1e6f64..1e6,
        b in -1e6f64..1e6,
    ) {
        let vars: BTreeMap<String, f64> =
            [("a".to_string(), a), ("b".to_string(), b)].into_iter().collect();
        let expression = "(a+b)*(a-b) + a*b";
        let first = evaluate(expression, &vars).unwrap();
        let second = evaluate(expression, &vars).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn division_never_panics(divisor in -10f64..10.0) {
        let vars: BTreeMap<String, f64> =
            [("d".to_string(), divisor)].into_iter().collect();
        match evaluate("1/d", &vars) {
            Ok(value) => prop_assert!(!value.is_nan()),
            Err(err) => prop_assert_eq!(err.info().code.as_str(), "division-by-zero"),
        }
    }

    #[test]
    fn parse_reports_all_referenced_variables(
        left in "[a-z][a-z0-9_]{0,7}",
        right in "[a-z][a-z0-9_]{0,7}",
    ) {
        let expr = parse(&format!("{left}*{right}")).unwrap();
        let names = expr.variables();
        prop_assert!(names.contains(&left));
        prop_assert!(names.contains(&right));
    }
}
