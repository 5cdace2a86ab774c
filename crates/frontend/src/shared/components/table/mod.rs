pub mod number_format;

pub use number_format::{format_cents, format_money, format_number_int};
