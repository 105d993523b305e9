use crate::error::VContainerError;

// Negative indices count from the end, i.e. -1 denotes the last element.
fn offset_from_end(i: isize, n_len: usize) -> isize {
    if i < 0 {
        i + n_len as isize
    } else {
        i
    }
}

/// Maps `i` to a position in `0..n_len`, or fails the way item access on the plain container does.
pub fn resolve_index(i: isize, n_len: usize) -> Result<usize, VContainerError> {
    let i_resolved = offset_from_end(i, n_len);
    if 0<=i_resolved && (i_resolved as usize) < n_len {
        Ok(i_resolved as usize)
    } else {
        Err(VContainerError::IndexOutOfRange{index: i, len: n_len})
    }
}

/// Maps `i` to a position in `0..=n_len`, saturating at both ends (insert and slice bounds never fail).
pub fn clamp_index(i: isize, n_len: usize) -> usize {
    offset_from_end(i, n_len).clamp(0, n_len as isize) as usize
}

#[test]
fn test_resolve_index() {
    assert_eq!(resolve_index(0, 3), Ok(0));
    assert_eq!(resolve_index(-1, 3), Ok(2));
    assert_eq!(resolve_index(-3, 3), Ok(0));
    assert_eq!(resolve_index(3, 3), Err(VContainerError::IndexOutOfRange{index: 3, len: 3}));
    assert_eq!(resolve_index(-4, 3), Err(VContainerError::IndexOutOfRange{index: -4, len: 3}));
    assert!(resolve_index(0, 0).is_err());
}

#[test]
fn test_clamp_index() {
    assert_eq!(clamp_index(1, 3), 1);
    assert_eq!(clamp_index(10, 3), 3);
    assert_eq!(clamp_index(-1, 3), 2);
    assert_eq!(clamp_index(-10, 3), 0);
    assert_eq!(clamp_index(0, 0), 0);
}
