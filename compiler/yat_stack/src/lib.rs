//! On-demand stack growth for the recursive tree walks.
//!
//! Evaluation, folding and printing all recurse once per tree level, and
//! evaluation also recurses once per nested call. Wrapping each recursive
//! step in [`ensure_sufficient_stack`] moves the walk onto a freshly
//! allocated stack segment whenever the current one runs low, so deep trees
//! hit the interpreter's call-depth limit (a reported error) instead of the
//! guard page.
//!
//! On `wasm32` the wrapper is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if less than the red
/// zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Bytes of stack left on the current segment, if the platform can tell.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}
