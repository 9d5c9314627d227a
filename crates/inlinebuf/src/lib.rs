//! Scoped, allocation-free scratch buffers with size-class dispatch.
//!
//! This crate hands caller logic a contiguous mutable view of exactly N
//! elements, for an N known only at run time but bounded by a fixed
//! maximum of 8192, without touching the heap. The storage lives on the
//! stack frame of the call and is discarded when the call returns.
//!
//! # Architecture
//!
//! ```text
//! with_scratch / map_scratch (entry points)
//! ├── SizeClass::for_len     O(1) classification of the request
//! └── InlineBuffer<T, N>     the selected inline container
//!     └── &mut [T]           view of exactly the requested length,
//!                            passed to the caller's closure
//! ```
//!
//! A request is classified into the smallest adequate size class (powers
//! of two from 2 to 8192, plus no-storage and single-slot classes), the
//! matching [`InlineBuffer`] is materialized with every slot
//! `T::default()`, and the caller's closure runs exactly once over the
//! first `len` elements. The view is a plain borrow, so the borrow
//! checker rejects any attempt to keep it past the call.
//!
//! # Quick start
//!
//! ```rust
//! use inlinebuf::map_scratch;
//!
//! // A scratch buffer of 5 u32s, stack-backed by the capacity-8 class.
//! let sum = map_scratch::<u32, _, _>(5, |view| {
//!     assert_eq!(view.len(), 5);
//!     for (i, slot) in view.iter_mut().enumerate() {
//!         *slot = i as u32;
//!     }
//!     view.iter().sum::<u32>()
//! })?;
//! assert_eq!(sum, 10);
//! # Ok::<(), inlinebuf::BufferError>(())
//! ```
//!
//! # What this crate is not
//!
//! There is no dynamic growth and no heap fallback: requests above 8192
//! elements fail with [`BufferError::LenOutOfRange`], and callers who
//! need more must pick their own strategy. Storage never survives a call
//! and is never pooled or reused across calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod class;
pub mod error;
pub mod scoped;

// Public re-exports for the primary API surface.
pub use buffer::InlineBuffer;
pub use class::{SizeClass, MAX_SCRATCH_LEN};
pub use error::BufferError;
pub use scoped::{map_scratch, map_scratch_arg, with_scratch, with_scratch_arg};
