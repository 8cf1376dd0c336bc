pub mod errors;

pub use errors::{LwfaError, LwfaErrorCategory, LwfaResult};
