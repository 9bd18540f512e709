//! Owned aligned memory blocks backed by the global allocator.
//!
//! An aligned block is carved out of a slightly larger raw allocation:
//!
//! ```text
//! raw                     aligned = raw + pad
//!  |<------ pad bytes ------>|<------- len bytes ------->| 1 spare byte
//!  [ pad pad pad ... pad pad ][ caller payload ............ ]
//! ```
//!
//! The `pad` bytes each hold the value `pad` itself, so the header doubles
//! as the offset back to the allocation base and as a corruption canary.
//! `pad` is always in `1..=align`; an already-aligned raw address yields
//! `pad == align` rather than zero, which keeps the canary non-degenerate.

use std::alloc::{Layout, alloc, dealloc};
use std::mem::ManuallyDrop;
use std::sync::atomic::{AtomicU8, Ordering};

use plinth_common::Result;
use plinth_common::error::Error;

/// What to do when the pad canary is found corrupted at release time.
///
/// The default is [`CorruptionPolicy::LogAndLeak`]: the diagnostic is logged
/// and the block is deliberately *not* returned to the allocator, since the
/// recovered base address cannot be trusted. Leaking a block is preferred
/// over handing the allocator a possibly wrong pointer. Hosts whose failure
/// policy prefers hard-fail can opt into [`CorruptionPolicy::Panic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CorruptionPolicy {
    /// Log the diagnostic and leak the block (default).
    LogAndLeak = 0,
    /// Panic with the diagnostic.
    Panic = 1,
}

static CORRUPTION_POLICY: AtomicU8 = AtomicU8::new(CorruptionPolicy::LogAndLeak as u8);

/// Sets the process-wide policy applied when a corrupted block is dropped.
pub fn set_corruption_policy(policy: CorruptionPolicy) {
    CORRUPTION_POLICY.store(policy as u8, Ordering::Relaxed);
}

/// Returns the process-wide corruption policy.
pub fn corruption_policy() -> CorruptionPolicy {
    match CORRUPTION_POLICY.load(Ordering::Relaxed) {
        1 => CorruptionPolicy::Panic,
        _ => CorruptionPolicy::LogAndLeak,
    }
}

/// Allocates `size` bytes aligned to `align`.
///
/// `align` is a value in `0..=255`; `0` is treated as `1` (no alignment
/// constraint beyond natural). The returned buffer's address is divisible by
/// the effective alignment. `size == 0` is legal and yields a usable,
/// releasable handle with an empty payload.
///
/// The allocation reserves `align + 1` bytes ahead of `size` for the pad
/// header, so the overhead is bounded by `align + 1` bytes.
///
/// # Errors
///
/// Returns `OutOfMemory` if the underlying allocator fails, or
/// `InvalidArgument` if `size + align + 1` overflows.
pub fn allocate(size: usize, align: u8) -> Result<AlignedBuf> {
    let align = align.max(1);
    let total = size
        .checked_add(align as usize + 1)
        .ok_or_else(|| Error::invalid_arg("size", "size + align + 1 overflows usize"))?;
    let layout = Layout::from_size_align(total, 1)
        .map_err(|_| Error::invalid_arg("size", "size exceeds the maximum allocation"))?;

    let raw = unsafe { alloc(layout) };
    if raw.is_null() {
        return Err(Error::out_of_memory(size, align as usize));
    }

    // Offset to the first aligned address strictly above the base; an
    // already-aligned base gives pad == align, never zero.
    let pad = align as usize - (raw as usize % align as usize);
    debug_assert!((1..=align as usize).contains(&pad));
    unsafe {
        std::ptr::write_bytes(raw, pad as u8, pad);
    }

    Ok(AlignedBuf {
        raw,
        pad: pad as u8,
        len: size,
        align,
    })
}

/// An owned memory block whose payload address is aligned to a caller-chosen
/// boundary.
///
/// The handle records the raw allocation base, the pad length and the payload
/// size, so releasing it never has to recover the base address from memory.
/// The stamped pad bytes are still verified on release as a corruption check
/// (see [`AlignedBuf::verify`]).
pub struct AlignedBuf {
    /// Base of the underlying raw allocation.
    raw: *mut u8,
    /// Distance from `raw` to the aligned payload address, in `1..=align`.
    pad: u8,
    /// Payload size in bytes, as requested by the caller.
    len: usize,
    /// Effective alignment, at least 1.
    align: u8,
}

impl AlignedBuf {
    /// Returns the aligned payload address.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        unsafe { self.raw.add(self.pad as usize) }
    }

    /// Returns the aligned payload address, mutably.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        unsafe { self.raw.add(self.pad as usize) }
    }

    /// Returns the payload size in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the payload is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the effective alignment of the payload address.
    #[inline]
    pub fn align(&self) -> usize {
        self.align as usize
    }

    /// Returns the payload as an immutable byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the payload as a mutable byte slice.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        unsafe { std::slice::from_raw_parts_mut(self.raw.add(self.pad as usize), self.len) }
    }

    /// Checks the pad canary for corruption.
    ///
    /// Walks backward from the byte immediately preceding the payload down to
    /// the allocation base, verifying that every byte still holds the pad
    /// length. Reports the first mismatch, counted in bytes back from the
    /// payload address.
    pub fn verify(&self) -> Result<()> {
        let aligned = self.as_ptr();
        for offset in 1..=self.pad as usize {
            let found = unsafe { *aligned.sub(offset) };
            if found != self.pad {
                return Err(Error::corruption(offset, self.pad, found));
            }
        }
        Ok(())
    }

    /// Releases the block, verifying the pad canary first.
    ///
    /// On a clean canary the raw block is returned to the allocator. On a
    /// mismatch the handle is consumed *without* freeing (the base address of
    /// a corrupted block cannot be trusted) and the corruption error is
    /// returned to the caller. The process-wide [`CorruptionPolicy`] is not
    /// consulted here; it only applies to implicit drops.
    pub fn release(self) -> Result<()> {
        let verified = self.verify();
        let this = ManuallyDrop::new(self);
        if verified.is_ok() {
            unsafe { dealloc(this.raw, this.layout()) };
        }
        verified
    }

    /// Layout of the underlying raw allocation.
    #[inline]
    fn layout(&self) -> Layout {
        // Cannot overflow: the same sum was checked in allocate().
        unsafe { Layout::from_size_align_unchecked(self.len + self.align as usize + 1, 1) }
    }
}

impl std::ops::Deref for AlignedBuf {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl std::ops::DerefMut for AlignedBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_bytes_mut()
    }
}

impl AsRef<[u8]> for AlignedBuf {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsMut<[u8]> for AlignedBuf {
    #[inline]
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl Drop for AlignedBuf {
    /// Verifies the pad canary, then releases the raw block.
    ///
    /// A corrupted canary is handled according to the process-wide
    /// [`CorruptionPolicy`]: logged and leaked by default, or escalated to a
    /// panic when the host opted into hard-fail.
    fn drop(&mut self) {
        match self.verify() {
            Ok(()) => unsafe { dealloc(self.raw, self.layout()) },
            Err(err) => match corruption_policy() {
                CorruptionPolicy::LogAndLeak => {
                    log::error!("invalid aligned free, leaking block: {err}");
                }
                CorruptionPolicy::Panic => {
                    panic!("invalid aligned free: {err}");
                }
            },
        }
    }
}

// SAFETY: AlignedBuf exclusively owns its allocation and frees it at most
// once, on drop or release.
unsafe impl Send for AlignedBuf {}

// SAFETY: shared access only exposes the payload through &self methods;
// callers need &mut for any mutation.
unsafe impl Sync for AlignedBuf {}

impl std::fmt::Debug for AlignedBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuf")
            .field("ptr", &self.as_ptr())
            .field("len", &self.len)
            .field("align", &self.align)
            .field("pad", &self.pad)
            .finish()
    }
}
