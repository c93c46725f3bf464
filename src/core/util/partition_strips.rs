use std::ops::Range;

/// Splits `[0, height)` into contiguous row strips, at most one per thread.
///
/// Strip height is `ceil(height / threads)` rounded up to a multiple of
/// `block`, so that no coarse block straddles two strips. Only the last strip
/// may be shorter; when rounding leaves nothing for the trailing threads,
/// fewer strips than threads are returned.
#[must_use]
pub fn partition_strips(height: usize, threads: usize, block: usize) -> Vec<Range<usize>> {
    let block = block.max(1);
    let strip_height = height.div_ceil(threads.max(1)).next_multiple_of(block).max(block);

    (0..height)
        .step_by(strip_height)
        .map(|from| from..(from + strip_height).min(height))
        .collect()
}
