//! Scoped scratch invocation.
//!
//! The entry points here hand caller logic a transient `&mut [T]` of
//! exactly the requested length, backed by the minimal sufficient
//! [`InlineBuffer`] on the current stack frame. The borrow checker pins
//! the aliasing contract: the view is a borrow of storage owned by the
//! call frame, so it cannot be returned, stored, or sent elsewhere.
//!
//! Four call shapes are provided, differing only in the presence of a
//! return value and of a pass-through argument:
//!
//! - [`with_scratch`] — run an action over the view.
//! - [`with_scratch_arg`] — run an action over the view and an argument.
//! - [`map_scratch`] — compute a value from the view.
//! - [`map_scratch_arg`] — compute a value from the view and an argument.
//!
//! Every invocation materializes fresh, default-initialized storage; no
//! pooling or reuse happens across calls, so no data from a prior call
//! can leak into a later one.

use crate::buffer::InlineBuffer;
use crate::class::SizeClass;
use crate::error::BufferError;

/// Materialize one size class and run `func` over the first `len` slots.
fn with_class<T, U, R, F, const N: usize>(len: usize, arg: U, func: F) -> R
where
    T: Default,
    F: FnOnce(&mut [T], U) -> R,
{
    let mut buf = InlineBuffer::<T, N>::new();
    func(&mut buf.as_mut_slice()[..len], arg)
}

/// Run `func` over a fresh scratch view of exactly `len` elements and an
/// extra pass-through argument, returning `func`'s result.
///
/// This is the kernel the other three call shapes delegate to. The view
/// is backed by the smallest adequate size class, stack-allocated for
/// the duration of this call only, and starts all-`T::default()`.
///
/// Fails with [`BufferError::LenOutOfRange`] when `len` exceeds
/// [`MAX_SCRATCH_LEN`](crate::MAX_SCRATCH_LEN); the callback is never
/// invoked and no storage is materialized.
///
/// # Example
///
/// ```rust
/// use inlinebuf::map_scratch_arg;
///
/// let (len, arg) = map_scratch_arg::<u32, _, _, _>(3, 42, |view, x| (view.len(), x))?;
/// assert_eq!((len, arg), (3, 42));
/// # Ok::<(), inlinebuf::BufferError>(())
/// ```
///
/// The view cannot escape the callback:
///
/// ```compile_fail
/// use inlinebuf::map_scratch;
///
/// // Rejected: the view borrows call-local storage.
/// let escaped = map_scratch::<u8, _, _>(4, |view| view).unwrap();
/// ```
pub fn map_scratch_arg<T, U, R, F>(len: usize, arg: U, func: F) -> Result<R, BufferError>
where
    T: Default,
    F: FnOnce(&mut [T], U) -> R,
{
    Ok(match SizeClass::for_len(len)? {
        SizeClass::Empty => func(&mut [], arg),
        SizeClass::Single => {
            // One slot, no container.
            let mut slot = T::default();
            func(std::slice::from_mut(&mut slot), arg)
        }
        SizeClass::Cap2 => with_class::<T, U, R, F, 2>(len, arg, func),
        SizeClass::Cap4 => with_class::<T, U, R, F, 4>(len, arg, func),
        SizeClass::Cap8 => with_class::<T, U, R, F, 8>(len, arg, func),
        SizeClass::Cap16 => with_class::<T, U, R, F, 16>(len, arg, func),
        SizeClass::Cap32 => with_class::<T, U, R, F, 32>(len, arg, func),
        SizeClass::Cap64 => with_class::<T, U, R, F, 64>(len, arg, func),
        SizeClass::Cap128 => with_class::<T, U, R, F, 128>(len, arg, func),
        SizeClass::Cap256 => with_class::<T, U, R, F, 256>(len, arg, func),
        SizeClass::Cap512 => with_class::<T, U, R, F, 512>(len, arg, func),
        SizeClass::Cap1024 => with_class::<T, U, R, F, 1024>(len, arg, func),
        SizeClass::Cap2048 => with_class::<T, U, R, F, 2048>(len, arg, func),
        SizeClass::Cap4096 => with_class::<T, U, R, F, 4096>(len, arg, func),
        SizeClass::Cap8192 => with_class::<T, U, R, F, 8192>(len, arg, func),
    })
}

/// Compute a value from a fresh scratch view of exactly `len` elements.
///
/// See [`map_scratch_arg`] for the storage and failure contract.
///
/// # Example
///
/// ```rust
/// use inlinebuf::map_scratch;
///
/// let sum = map_scratch::<u64, _, _>(100, |view| {
///     for (i, slot) in view.iter_mut().enumerate() {
///         *slot = i as u64;
///     }
///     view.iter().sum::<u64>()
/// })?;
/// assert_eq!(sum, 4950);
/// # Ok::<(), inlinebuf::BufferError>(())
/// ```
pub fn map_scratch<T, R, F>(len: usize, func: F) -> Result<R, BufferError>
where
    T: Default,
    F: FnOnce(&mut [T]) -> R,
{
    map_scratch_arg(len, func, |view, func| func(view))
}

/// Run an action over a fresh scratch view of exactly `len` elements.
///
/// See [`map_scratch_arg`] for the storage and failure contract.
pub fn with_scratch<T, F>(len: usize, action: F) -> Result<(), BufferError>
where
    T: Default,
    F: FnOnce(&mut [T]),
{
    map_scratch_arg(len, action, |view, action| action(view))
}

/// Run an action over a fresh scratch view of exactly `len` elements and
/// an extra pass-through argument.
///
/// See [`map_scratch_arg`] for the storage and failure contract.
pub fn with_scratch_arg<T, U, F>(len: usize, arg: U, action: F) -> Result<(), BufferError>
where
    T: Default,
    F: FnOnce(&mut [T], U),
{
    map_scratch_arg(len, arg, action)
}
