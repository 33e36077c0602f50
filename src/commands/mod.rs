pub mod validate;

pub use validate::{run_validate, run_validate_impl};
