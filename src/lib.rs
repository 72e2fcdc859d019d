//! Pattern-defeating quicksort (pdqsort) over opaque, fixed-size byte-blob
//! elements.
//!
//! The engine sorts a contiguous range `[base, base + count * element_size)`
//! in place, given only the element width and a three-way comparator — the
//! same contract as the C standard library's `qsort`. No element type is
//! ever named: every move is a byte copy of `element_size` bytes, which is
//! what lets the same engine serve both a generic in-process `FnMut`
//! comparator and a raw `extern "C"` one (see [`ffi`]).
//!
//! See `SPEC_FULL.md` in the crate root for the full specification this
//! crate implements, and `DESIGN.md` for where each piece is grounded.

mod config;
mod ffi;
mod sort;

pub use config::{Config, DefaultConfig};
pub use dyn_stack::{DynStack, GlobalMemBuffer, SizeOverflow, StackReq};
pub use ffi::CompareFn;
pub use sort::{pdqsort_by, pdqsort_by_with_config, pdqsort_in, pdqsort_req};

#[cfg(feature = "heapsort")]
pub use sort::heapsort_by;

pub mod raw {
    //! FFI-facing entry points matching the traditional `qsort`/`qsort_r`
    //! signature: a raw base pointer, a count, an element size, and a
    //! plain `extern "C"` comparator function pointer.
    pub use crate::ffi::pdqsort;

    #[cfg(feature = "heapsort")]
    pub use crate::ffi::heapsort;
}
