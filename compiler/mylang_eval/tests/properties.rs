// Test code uses unwrap for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used)]

//! Property tests for the interpreter.

use mylang_eval::{buffer_handler, execute, EvalError};
use mylang_parse::parse;
use mylang_types::typecheck;
use proptest::prelude::*;

fn expr() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (-3i32..4).prop_map(|n| n.to_string()),
        Just("true".to_string()),
        Just("false".to_string()),
        Just("a".to_string()),
        Just("b".to_string()),
        (0i32..4, 0i32..3).prop_map(|(len, idx)| format!("[{len};{idx}]")),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "*", "==", "&&", ","]), inner.clone())
                .prop_map(|(l, op, r)| format!("({l} {op} {r})")),
            (prop::sample::select(vec!["-", "!", "fst", "snd"]), inner)
                .prop_map(|(op, e)| format!("{op} ({e})")),
        ]
    })
}

fn stmt() -> impl Strategy<Value = String> {
    prop_oneof![
        expr().prop_map(|e| format!("print {e}")),
        expr().prop_map(|e| format!("a = {e}")),
        expr().prop_map(|e| format!("var b = {e}")),
        (expr(), expr()).prop_map(|(c, e)| format!("if ({c}) {{ print {e} }} else {{ a = {e} }}")),
        expr().prop_map(|e| format!("foreach i in {e} {{ print i * a }}")),
    ]
}

fn program() -> impl Strategy<Value = String> {
    (expr(), prop::collection::vec(stmt(), 1..5))
        .prop_map(|(init, stmts)| format!("var a = {init}; {}", stmts.join("; ")))
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 8192, ..ProptestConfig::with_cases(512) })]

    #[test]
    fn well_typed_programs_never_mismatch_at_runtime(source in program()) {
        let program = parse(&source).unwrap();
        if typecheck(&program).is_ok() {
            let result = execute(&program, buffer_handler());
            prop_assert!(
                !matches!(result, Err(EvalError::TypeMismatch { .. })),
                "{source}: {result:?}"
            );
        }
    }

    #[test]
    fn one_hot_dot_product_is_kronecker_delta(len in 1i32..16, i in 0i32..16, j in 0i32..16) {
        prop_assume!(i < len && j < len);
        let handler = buffer_handler();
        let program = parse(&format!("print [{len};{i}] * [{len};{j}]")).unwrap();
        execute(&program, handler.clone()).unwrap();
        let expected = if i == j { "1\n" } else { "0\n" };
        prop_assert_eq!(handler.get_output(), expected);
    }

    #[test]
    fn foreach_prints_one_line_per_element(len in 1i32..12, idx in 0i32..12, k in -5i32..6) {
        prop_assume!(idx < len);
        let handler = buffer_handler();
        let source = format!("foreach x in {k} * [{len};{idx}] {{ print x }}");
        execute(&parse(&source).unwrap(), handler.clone()).unwrap();
        let output = handler.get_output();
        let lines: Vec<&str> = output.lines().collect();
        prop_assert_eq!(lines.len(), usize::try_from(len).unwrap());
        for (pos, line) in lines.iter().enumerate() {
            let expected = if pos == usize::try_from(idx).unwrap() { k } else { 0 };
            prop_assert_eq!(*line, expected.to_string());
        }
    }
}
