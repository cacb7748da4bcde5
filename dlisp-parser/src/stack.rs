// dlisp-parser - Stack growth for deep recursion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Values can nest far deeper than the native stack allows: a tail-recursive
//! function builds a 100k-level list in constant stack. Everything that walks
//! a value recursively (reading, printing, comparing, dropping) goes through
//! [`ensure_sufficient_stack`].

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;

/// Size of each segment allocated when growing.
const STACK_SEGMENT: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}
