//! Search helpers for the sorted `u8` key arrays used by the narrow node
//! layouts. The 16-wide equality scan has a SIMD form on x86_64; everything
//! else is a plain scan or binary search, which is already fast at these
//! widths.

#[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
#[inline]
fn x86_64_sse_find_key_16(key: u8, keys: &[u8; 16], num_children: usize) -> Option<usize> {
    use std::arch::x86_64::{
        __m128i, _mm_cmpeq_epi8, _mm_loadu_si128, _mm_movemask_epi8, _mm_set1_epi8,
    };

    let bitfield = unsafe {
        let key_vec = _mm_set1_epi8(key as i8);
        let results = _mm_cmpeq_epi8(key_vec, _mm_loadu_si128(keys.as_ptr() as *const __m128i));
        // Mask out the slots past num_children; they hold stale key bytes.
        let mask = (1i32 << num_children) - 1;
        _mm_movemask_epi8(results) & mask
    };
    if bitfield != 0 {
        return Some(bitfield.trailing_zeros() as usize);
    }
    None
}

/// Position of `key` within the first `num_children` entries of a sorted key
/// array, or `None` if it is not mapped.
#[allow(unreachable_code)]
pub fn find_key_position_sorted<const WIDTH: usize>(
    key: u8,
    keys: &[u8],
    num_children: usize,
) -> Option<usize> {
    // Width 4 and under, just use linear search.
    if WIDTH <= 4 {
        return keys[..num_children].iter().position(|k| *k == key);
    }

    if WIDTH == 16 {
        #[cfg(all(target_arch = "x86_64", target_feature = "sse2"))]
        {
            return x86_64_sse_find_key_16(key, keys.try_into().unwrap(), num_children);
        }
    }

    keys[..num_children].binary_search(&key).ok()
}

/// Insertion point for `key` that keeps the array sorted. Assumes `key` is
/// not already present.
pub fn find_insert_position_sorted(key: u8, keys: &[u8], num_children: usize) -> usize {
    keys[..num_children].partition_point(|k| *k < key)
}

/// Position of the smallest mapped key >= `key` (lower bound), or `None` if
/// every mapped key is smaller.
pub fn find_lower_bound_sorted(key: u8, keys: &[u8], num_children: usize) -> Option<usize> {
    let idx = keys[..num_children].partition_point(|k| *k < key);
    if idx < num_children { Some(idx) } else { None }
}
