//! Aligned memory allocation with built-in corruption detection.
//!
//! This crate provides [`allocate`], which hands out memory at a
//! caller-specified alignment independent of what the underlying allocator
//! guarantees, and [`AlignedBuf`], the owned handle for such a block. The
//! alignment is produced by over-allocating and offsetting into the block;
//! the skipped-over bytes form a self-describing canary run that is verified
//! when the block is released, catching buffer underruns and stray writes
//! into the header region.
//!
//! This is not a general-purpose allocator: there is no reuse, no free list
//! and no size classes. Every allocation is a single pass through the global
//! allocator plus at most `align + 1` bytes of overhead.

pub mod aligned;
pub mod align;


pub use aligned::{AlignedBuf, CorruptionPolicy, allocate, corruption_policy, set_corruption_policy};
pub use align::{pad_len, round_down, round_up};
