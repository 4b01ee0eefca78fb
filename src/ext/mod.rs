/// Extensions to `Iterator`.
pub mod iterator;
