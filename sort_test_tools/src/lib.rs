pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool;
}

/// Binary searches over a sorted slice. Every position returned is in `0..=arr.len()`.
pub trait Search {
    fn name() -> String;

    fn lower_bound_by<T, F>(arr: &[T], value: &T, is_less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;

    fn upper_bound_by<T, F>(arr: &[T], value: &T, is_less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;

    /// `arr.len()` if no element is equivalent to `value`.
    fn binary_find_by<T, F>(arr: &[T], value: &T, is_less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;

    fn equal_range_by<T, F>(arr: &[T], value: &T, is_less: F) -> (usize, usize)
    where
        F: FnMut(&T, &T) -> bool;
}

pub mod patterns;
pub mod types;
