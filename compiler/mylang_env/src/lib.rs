//! Scope chain for variable bindings.
//!
//! [`Environment<T>`] is used twice: the type checker binds names to static
//! types and the interpreter binds them to runtime values. The two
//! instances are never shared.
//!
//! Scopes live on a stack (innermost last). Declaration only touches the
//! innermost scope; update and lookup search outward and act on the first
//! scope that binds the name.

use std::collections::hash_map::Entry;

use mylang_ir::Name;
use rustc_hash::FxHashMap;

/// Failure of an environment operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    /// No scope binds the name.
    #[error("undeclared variable `{0}`")]
    UndeclaredVariable(Name),
    /// The innermost scope already binds the name.
    #[error("variable `{0}` already declared")]
    AlreadyDeclared(Name),
}

/// A single scope: unique names mapped to payloads.
type Scope<T> = FxHashMap<Name, T>;

/// Stack of scopes, innermost last.
///
/// The base scope is held apart from the nested ones, so there is always a
/// scope to declare into.
#[derive(Clone, Debug)]
pub struct Environment<T> {
    base: Scope<T>,
    nested: Vec<Scope<T>>,
}

impl<T> Environment<T> {
    /// Create an environment holding one empty base scope.
    pub fn new() -> Self {
        Environment {
            base: Scope::default(),
            nested: Vec::new(),
        }
    }

    /// Number of live scopes, including the base scope.
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    /// Push an empty scope.
    #[inline]
    pub fn enter_scope(&mut self) {
        self.nested.push(Scope::default());
        tracing::trace!(depth = self.depth(), "enter scope");
    }

    /// Pop the innermost scope and discard its bindings.
    ///
    /// Enter and exit must be balanced; the base scope is never popped.
    #[inline]
    pub fn exit_scope(&mut self) {
        let popped = self.nested.pop();
        debug_assert!(popped.is_some(), "exit_scope without matching enter_scope");
        tracing::trace!(depth = self.depth(), "exit scope");
    }

    /// Bind `name` in the innermost scope.
    pub fn declare(&mut self, name: &Name, payload: T) -> Result<(), EnvError> {
        match self.innermost_mut().entry(name.clone()) {
            Entry::Occupied(_) => Err(EnvError::AlreadyDeclared(name.clone())),
            Entry::Vacant(slot) => {
                slot.insert(payload);
                Ok(())
            }
        }
    }

    /// Rebind `name` in the innermost scope that declares it.
    ///
    /// Returns the payload it replaced.
    pub fn update(&mut self, name: &Name, payload: T) -> Result<T, EnvError> {
        let slot = self
            .nested
            .iter_mut()
            .rev()
            .chain(std::iter::once(&mut self.base))
            .find_map(|scope| scope.get_mut(name))
            .ok_or_else(|| EnvError::UndeclaredVariable(name.clone()))?;
        Ok(std::mem::replace(slot, payload))
    }

    /// Find the payload bound to `name` in the innermost scope that declares it.
    pub fn lookup(&self, name: &Name) -> Result<&T, EnvError> {
        self.nested
            .iter()
            .rev()
            .chain(std::iter::once(&self.base))
            .find_map(|scope| scope.get(name))
            .ok_or_else(|| EnvError::UndeclaredVariable(name.clone()))
    }

    fn innermost_mut(&mut self) -> &mut Scope<T> {
        self.nested.last_mut().unwrap_or(&mut self.base)
    }
}

impl<T> Default for Environment<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
