//! Size/alignment arithmetic helpers.

/// Returns the padding required to make `size` a multiple of `alignment`.
///
/// `alignment == 0` is treated as "no alignment" and yields 0.
#[inline]
pub fn pad_len(size: usize, alignment: usize) -> usize {
    if alignment == 0 {
        return 0;
    }
    let remainder = size % alignment;
    if remainder == 0 { 0 } else { alignment - remainder }
}

/// Rounds `size` up to a multiple of `alignment`.
#[inline]
pub fn round_up(size: usize, alignment: usize) -> usize {
    size + pad_len(size, alignment)
}

/// Rounds `size` down to a multiple of `alignment`.
#[inline]
pub fn round_down(size: usize, alignment: usize) -> usize {
    if alignment == 0 {
        return size;
    }
    size - (size % alignment)
}
