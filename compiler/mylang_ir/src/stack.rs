//! Stack growth for the recursive walkers.
//!
//! Parsing, checking and evaluation all recurse once per nesting level of
//! the source. A program such as `------...1` or a long chain of `(` is
//! legal, so each recursive entry point runs inside
//! [`ensure_sufficient_stack`]. Dropping such a tree does not recurse; see
//! the `Drop` impls in [`crate::ast`].

/// Remaining stack below which a new segment is allocated (128KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
#[cfg(not(target_arch = "wasm32"))]
const NEW_SEGMENT: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, NEW_SEGMENT, f)
}

/// WASM manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_result_through() {
        let out: Result<u8, &str> = ensure_sufficient_stack(|| Err("nope"));
        assert_eq!(out, Err("nope"));
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        fn depth(n: u32) -> u32 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(200_000), 200_000);
    }
}
