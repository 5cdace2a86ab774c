use serde::{Deserialize, Serialize};

/// Статус заказа
///
/// Неизвестные значения не отбрасываются при десериализации, а сохраняются
/// в `Unknown`: их должен поймать слой отображения.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Prepared,
    Delivered,
    Completed,
    Pending,
    Unknown(String),
}

impl OrderStatus {
    /// Получить код статуса
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::Prepared => "PREPARED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Pending => "PENDING",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    /// Подпись статуса (pt-BR), `None` для неизвестного статуса
    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            OrderStatus::Prepared => Some("Preparado"),
            OrderStatus::Delivered => Some("Entregue"),
            OrderStatus::Completed => Some("Completo"),
            OrderStatus::Pending => Some("Pendente"),
            OrderStatus::Unknown(_) => None,
        }
    }

    /// Все известные статусы
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Prepared,
            OrderStatus::Delivered,
            OrderStatus::Completed,
            OrderStatus::Pending,
        ]
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, OrderStatus::Unknown(_))
    }

    /// Парсинг из кода или подписи, без учёта регистра
    pub fn parse(raw: &str) -> Self {
        let needle = super::normalize(raw);
        Self::all()
            .into_iter()
            .find(|status| {
                status.code().to_lowercase() == needle
                    || status
                        .display_name()
                        .map(|name| name.to_lowercase() == needle)
                        .unwrap_or(false)
            })
            .unwrap_or_else(|| OrderStatus::Unknown(raw.trim().to_string()))
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        OrderStatus::parse(&raw)
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.code().to_string()
    }
}
