pub mod error;
pub mod notice;

#[cfg(test)]
pub(crate) mod test_utilities;
