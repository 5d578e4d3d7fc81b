pub mod image_operations;
pub mod settings_operations;

#[cfg(test)]
pub(crate) mod test_support;

pub use image_operations::*;
pub use settings_operations::*;
