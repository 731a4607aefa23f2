use num_traits::Float;

/// Returns the median from a sorted, non-empty slice
///
/// # Arguments
///
/// * `ss` - The sorted slice
///
/// # Returns
///
/// * `T` - The median
#[inline]
pub fn median_from_sorted_slice<T: Float>(ss: &[T]) -> T {
    let len = ss.len();
    let mid = len / 2;
    let _2 = T::one() + T::one();
    if len % 2 == 0 {
        (ss[mid - 1] + ss[mid]) / _2
    } else {
        ss[mid]
    }
}

/// Returns the length of the half-sequence used for quartile computation.
///
/// Even lengths split into two disjoint halves of `len / 2` elements each;
/// odd lengths use overlapping halves of `len / 2 + 1` elements, both
/// containing the median element. The quartile is the median of the half,
/// reusing the same even/odd rule.
#[inline]
fn half_len(len: usize) -> usize {
    if len % 2 == 0 { len / 2 } else { len / 2 + 1 }
}

/// Returns the first quartile from a sorted, non-empty slice,
/// as the median of the lower half
///
/// # Arguments
///
/// * `ss` - The sorted slice
///
/// # Returns
///
/// * `T` - The first quartile
#[inline]
pub fn first_quartile_from_sorted_slice<T: Float>(ss: &[T]) -> T {
    median_from_sorted_slice(&ss[..half_len(ss.len())])
}

/// Returns the third quartile from a sorted, non-empty slice,
/// as the median of the upper half
///
/// # Arguments
///
/// * `ss` - The sorted slice
///
/// # Returns
///
/// * `T` - The third quartile
#[inline]
pub fn third_quartile_from_sorted_slice<T: Float>(ss: &[T]) -> T {
    median_from_sorted_slice(&ss[ss.len() - half_len(ss.len())..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_even_averages_central_pair() {
        assert_eq!(median_from_sorted_slice(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn median_odd_picks_central_element() {
        assert_eq!(median_from_sorted_slice(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(median_from_sorted_slice(&[5.0]), 5.0);
    }

    #[test]
    fn quartiles_even_use_disjoint_halves() {
        let ss = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(first_quartile_from_sorted_slice(&ss), 2.5);
        assert_eq!(third_quartile_from_sorted_slice(&ss), 6.5);
    }

    #[test]
    fn quartiles_odd_share_the_median_element() {
        // halves are [1, 2, 3] and [3, 4, 5]
        let ss = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(first_quartile_from_sorted_slice(&ss), 2.0);
        assert_eq!(third_quartile_from_sorted_slice(&ss), 4.0);
    }

    #[test]
    fn quartiles_odd_with_even_halves() {
        // n = 7, halves are [1, 2, 3, 4] and [4, 5, 6, 7]
        let ss = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert_eq!(first_quartile_from_sorted_slice(&ss), 2.5);
        assert_eq!(third_quartile_from_sorted_slice(&ss), 5.5);
    }
}
