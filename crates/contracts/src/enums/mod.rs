pub mod currency;
pub mod order_status;
pub mod order_type;
pub mod payment_state;

pub use currency::Currency;
pub use order_status::OrderStatus;
pub use order_type::OrderType;
pub use payment_state::PaymentState;

/// Нормализация входной строки для сравнения кодов и подписей
pub(crate) fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
