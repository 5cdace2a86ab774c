pub mod aggregate;
pub mod validation;

pub use aggregate::{Money, OrderId, OrderRecord};
pub use validation::{validate_batch, validate_record, ValidationError};
