use derive_more::{Display, Error};

/// The error raised when accessing an element of a structure that holds no elements.
#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display("Empty structure has no elements to access!")]
pub struct EmptyStructure;

/// The error raised when accessing a position outside of a structure's occupied range.
#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for structure with {len} elements!")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// The error raised when an operation names an element the structure has never seen.
#[derive(Debug, PartialEq, Eq, Display, Error)]
#[display("Element is not a member of the structure!")]
pub struct MissingElement;
