use crate::logging::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VContainerError {
    EmptyContainer,
    KeyNotFound,
    IndexOutOfRange {index: isize, len: usize},
    ValueNotFound,
    Overflow {maxlen: usize},
}

impl std::fmt::Display for VContainerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            VContainerError::EmptyContainer => write!(f, "pop from an empty container"),
            VContainerError::KeyNotFound => write!(f, "key not found"),
            VContainerError::IndexOutOfRange{index, len} => write!(f, "index {index} out of range for length {len}"),
            VContainerError::ValueNotFound => write!(f, "value not found in container"),
            VContainerError::Overflow{maxlen} => write!(f, "container already at its maximum size {maxlen}"),
        }
    }
}
impl std::error::Error for VContainerError {}

impl VContainerError {
    pub(crate) fn logged(self, str_operation: &str) -> Self {
        debug!("{str_operation}: {self}");
        self
    }
}

#[test]
fn test_display() {
    assert_eq!(
        VContainerError::IndexOutOfRange{index: -4, len: 3}.to_string(),
        "index -4 out of range for length 3",
    );
    assert_eq!(VContainerError::EmptyContainer.to_string(), "pop from an empty container");
}
