/// Order-sensitive structural equality over two slices.
///
/// Different lengths never compare equal; otherwise every corresponding
/// pair must match, bailing on the first mismatch.
pub fn compare_arrays<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_different_lengths_are_not_equal() {
        assert!(!compare_arrays(&[1, 2, 3], &[1]));
    }

    #[test]
    fn test_identical_sequences_are_equal() {
        assert!(compare_arrays(&[1, 2, 3], &[1, 2, 3]));
    }

    #[test]
    fn test_same_length_different_content() {
        assert!(!compare_arrays(&[1, 2, 3, 4], &[2, 3, 4, 5]));
    }

    #[test]
    fn test_empty_slices_are_equal() {
        let empty: [u8; 0] = [];
        assert!(compare_arrays(&empty, &empty));
    }

    #[test]
    fn test_generic_over_element_type() {
        assert!(compare_arrays(&["a", "b"], &["a", "b"]));
        assert!(!compare_arrays(&["a", "b"], &["b", "a"]));
    }
}
