//! Stack growth for deep recursion.
//!
//! Templates nest blocks inside blocks and template functions may call
//! themselves, so both the parser and the interpreter recurse to a depth
//! chosen by the template author. Every recursive entry point goes through
//! [`guarded`], which grows the stack on demand instead of overflowing.
//!
//! Unbounded recursion still ends the process once memory runs out; the
//! guard only lifts the limit of the initial thread stack.
//!
//! - **Native targets**: `stacker` allocates a fresh segment when less than
//!   [`RED_ZONE`] bytes remain.
//! - **WASM targets**: passthrough, the runtime owns the stack.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn guarded<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn guarded<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
