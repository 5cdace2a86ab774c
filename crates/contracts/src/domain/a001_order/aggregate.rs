use crate::enums::{Currency, OrderStatus, OrderType, PaymentState};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ID заказа (номер заказа из источника, например "10685")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Разобрать номер из внешнего ввода; пустая строка не является номером
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| OrderId::new(trimmed))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        OrderId::new(value)
    }
}

/// Денежная сумма в минимальных единицах валюты (центавос для BRL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Сумма в реалах
    pub fn brl(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::Brl)
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }
}

/// Заказ (неизменяем после загрузки в хранилище)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Номер заказа, уникален в наборе
    pub id: OrderId,
    /// Имя клиента
    pub customer_name: String,
    /// Ссылка на карточку клиента
    #[serde(default)]
    pub customer_ref: Option<String>,
    pub payment_state: PaymentState,
    /// Название продукта (услуги)
    pub product_name: String,
    /// Вариант продукта
    #[serde(default)]
    pub product_variant: String,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    /// Сумма заказа
    pub gross_value: Money,
    /// Маржа, не больше суммы заказа
    pub margin: Money,
    pub type_code: OrderType,
    /// Двухбуквенный код региона
    pub region_code: String,
}

impl OrderRecord {
    /// Совпадение поисковой строки (уже в нижнем регистре) с клиентом, продуктом или номером
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.customer_name.to_lowercase().contains(needle_lower)
            || self.product_name.to_lowercase().contains(needle_lower)
            || self.id.value().to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_wire_shape() {
        let value = json!({
            "id": "10685",
            "customerName": "Rádio Atlântida",
            "customerRef": null,
            "paymentState": "Pago",
            "productName": "Spot 30s",
            "productVariant": "Locução masculina",
            "orderDate": "2024-03-12",
            "status": "Completo",
            "grossValue": { "amountCents": 150000, "currency": "BRL" },
            "margin": { "amountCents": 45000, "currency": "BRL" },
            "typeCode": "GF",
            "regionCode": "SP"
        });

        let record: OrderRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.id, OrderId::new("10685"));
        assert_eq!(record.payment_state, PaymentState::Paid);
        assert_eq!(record.status, OrderStatus::Completed);
        assert_eq!(record.gross_value, Money::brl(150_000));
        assert_eq!(record.type_code, OrderType::Gf);
        assert!(record.customer_ref.is_none());
    }

    #[test]
    fn test_order_id_parse() {
        assert_eq!(OrderId::parse(" 19043 "), Some(OrderId::new("19043")));
        assert_eq!(OrderId::parse("   "), None);
    }
}
