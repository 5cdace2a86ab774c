use serde::{Deserialize, Serialize};

/// Тип заказа (открытое перечисление: бэкенд может прислать новые коды)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderType {
    Gf,
    Cf,
    Cafe,
    Off,
    Other(String),
}

impl OrderType {
    pub fn code(&self) -> &str {
        match self {
            OrderType::Gf => "GF",
            OrderType::Cf => "CF",
            OrderType::Cafe => "CAFE",
            OrderType::Off => "OFF",
            OrderType::Other(code) => code,
        }
    }

    /// Известные коды
    pub fn all() -> Vec<OrderType> {
        vec![OrderType::Gf, OrderType::Cf, OrderType::Cafe, OrderType::Off]
    }

    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        match code.as_str() {
            "GF" => OrderType::Gf,
            "CF" => OrderType::Cf,
            "CAFE" => OrderType::Cafe,
            "OFF" => OrderType::Off,
            _ => OrderType::Other(code),
        }
    }
}

impl From<String> for OrderType {
    fn from(code: String) -> Self {
        OrderType::from_code(&code)
    }
}

impl From<OrderType> for String {
    fn from(order_type: OrderType) -> Self {
        order_type.code().to_string()
    }
}
