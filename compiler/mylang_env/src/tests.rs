#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn name(text: &str) -> Name {
    Name::from(text)
}

#[test]
fn declare_then_lookup_same_scope() {
    let mut env = Environment::new();
    env.declare(&name("x"), 1).unwrap();
    assert_eq!(env.lookup(&name("x")), Ok(&1));
}

#[test]
fn redeclare_same_scope_fails() {
    let mut env = Environment::new();
    env.declare(&name("x"), 1).unwrap();
    assert_eq!(
        env.declare(&name("x"), 2),
        Err(EnvError::AlreadyDeclared(name("x")))
    );
    assert_eq!(env.lookup(&name("x")), Ok(&1));
}

#[test]
fn inner_scope_may_shadow() {
    let mut env = Environment::new();
    env.declare(&name("x"), 1).unwrap();

    env.enter_scope();
    env.declare(&name("x"), 2).unwrap();
    assert_eq!(env.lookup(&name("x")), Ok(&2));

    env.exit_scope();
    assert_eq!(env.lookup(&name("x")), Ok(&1));
}

#[test]
fn exit_scope_discards_bindings() {
    let mut env = Environment::new();
    env.enter_scope();
    env.declare(&name("x"), 1).unwrap();
    env.exit_scope();

    assert_eq!(
        env.lookup(&name("x")),
        Err(EnvError::UndeclaredVariable(name("x")))
    );
}

#[test]
fn update_writes_to_declaring_scope() {
    let mut env = Environment::new();
    env.declare(&name("x"), 1).unwrap();

    env.enter_scope();
    assert_eq!(env.update(&name("x"), 5), Ok(1));
    assert_eq!(env.lookup(&name("x")), Ok(&5));
    env.exit_scope();

    // The write landed in the outer scope, so it survives the exit.
    assert_eq!(env.lookup(&name("x")), Ok(&5));
}

#[test]
fn update_prefers_innermost_binding() {
    let mut env = Environment::new();
    env.declare(&name("x"), 1).unwrap();
    env.enter_scope();
    env.declare(&name("x"), 2).unwrap();

    env.update(&name("x"), 20).unwrap();
    env.exit_scope();

    assert_eq!(env.lookup(&name("x")), Ok(&1));
}

#[test]
fn update_undeclared_fails() {
    let mut env: Environment<i32> = Environment::new();
    assert_eq!(
        env.update(&name("y"), 3),
        Err(EnvError::UndeclaredVariable(name("y")))
    );
}

#[test]
fn depth_tracks_enter_and_exit() {
    let mut env: Environment<()> = Environment::default();
    assert_eq!(env.depth(), 1);
    env.enter_scope();
    env.enter_scope();
    assert_eq!(env.depth(), 3);
    env.exit_scope();
    assert_eq!(env.depth(), 2);
}

#[test]
fn declare_after_leaving_all_nested_scopes_targets_base() {
    let mut env = Environment::new();
    env.enter_scope();
    env.enter_scope();
    env.exit_scope();
    env.exit_scope();
    assert_eq!(env.depth(), 1);

    env.declare(&name("x"), 1).unwrap();
    env.enter_scope();
    assert_eq!(env.lookup(&name("x")), Ok(&1));
    env.declare(&name("x"), 2).unwrap();
    env.exit_scope();

    assert_eq!(
        env.declare(&name("x"), 3),
        Err(EnvError::AlreadyDeclared(name("x")))
    );
    assert_eq!(env.lookup(&name("x")), Ok(&1));
}

#[test]
#[should_panic(expected = "exit_scope without matching enter_scope")]
#[cfg(debug_assertions)]
fn unbalanced_exit_is_caught_in_debug_builds() {
    let mut env: Environment<i32> = Environment::new();
    env.exit_scope();
}

#[test]
fn error_messages() {
    assert_eq!(
        EnvError::UndeclaredVariable(name("v")).to_string(),
        "undeclared variable `v`"
    );
    assert_eq!(
        EnvError::AlreadyDeclared(name("v")).to_string(),
        "variable `v` already declared"
    );
}
