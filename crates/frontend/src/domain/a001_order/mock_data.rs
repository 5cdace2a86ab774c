//! Демонстрационный набор заказов.
//!
//! Заменяет бэкенд, пока его нет: 84 детерминированных заказа.

use chrono::{Duration, NaiveDate};
use contracts::domain::a001_order::{Money, OrderId, OrderRecord};
use contracts::enums::{OrderStatus, OrderType, PaymentState};

const DEMO_ORDER_COUNT: usize = 84;

const CUSTOMERS: [&str; 12] = [
    "Supermercado Bom Preço",
    "Rádio Atlântida",
    "Farmácia São João",
    "Auto Escola Avenida",
    "Padaria Pão Dourado",
    "Clínica Sorriso",
    "Loja Casa & Cia",
    "Academia Corpo Livre",
    "Imobiliária Horizonte",
    "Pizzaria Bella Napoli",
    "Ótica Visão Clara",
    "Colégio Santa Maria",
];

const PRODUCTS: [(&str, &str); 6] = [
    ("Spot 30s", "Voz masculina"),
    ("Spot 60s", "Voz feminina"),
    ("Vinheta", "Voz masculina"),
    ("Locução institucional", "Dupla"),
    ("Espera telefônica", "Voz feminina"),
    ("Jingle", "Coral"),
];

const REGIONS: [&str; 7] = ["SP", "RJ", "RS", "MG", "PR", "BA", "SC"];

const STATUS_CYCLE: [OrderStatus; 7] = [
    OrderStatus::Completed,
    OrderStatus::Pending,
    OrderStatus::Delivered,
    OrderStatus::Prepared,
    OrderStatus::Completed,
    OrderStatus::Delivered,
    OrderStatus::Pending,
];

/// Демонстрационные заказы
pub fn demo_orders() -> Vec<OrderRecord> {
    let first_day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap_or_default();

    (0..DEMO_ORDER_COUNT)
        .map(|i| {
            let status = STATUS_CYCLE[i % STATUS_CYCLE.len()].clone();
            let payment_state = match status {
                OrderStatus::Completed => PaymentState::Paid,
                OrderStatus::Delivered if i % 2 == 0 => PaymentState::Paid,
                _ => PaymentState::Unpaid,
            };
            let (product_name, product_variant) = PRODUCTS[i % PRODUCTS.len()];
            let gross_cents = (25_000 + (i as i64 * 7_919) % 380_000) / 100 * 100;
            let type_code = OrderType::all()
                .into_iter()
                .nth(i % 4)
                .unwrap_or(OrderType::Gf);

            OrderRecord {
                id: OrderId::new((10_602 + i * 101).to_string()),
                customer_name: CUSTOMERS[i % CUSTOMERS.len()].to_string(),
                customer_ref: if i % 9 == 0 {
                    None
                } else {
                    Some(format!("cli-{:03}", i % CUSTOMERS.len()))
                },
                payment_state,
                product_name: product_name.to_string(),
                product_variant: product_variant.to_string(),
                order_date: first_day + Duration::days((i as i64 * 5) % 180),
                status,
                gross_value: Money::brl(gross_cents),
                margin: Money::brl(gross_cents * 35 / 100),
                type_code,
                region_code: REGIONS[(i / 3) % REGIONS.len()].to_string(),
            }
        })
        .collect()
}

/// Заказ для тестов с нейтральными значениями полей
#[cfg(test)]
pub(crate) fn order(id: &str, status: OrderStatus) -> OrderRecord {
    OrderRecord {
        id: OrderId::new(id),
        customer_name: "Mercado Central".to_string(),
        customer_ref: None,
        payment_state: PaymentState::Unpaid,
        product_name: "Vinheta".to_string(),
        product_variant: "Voz feminina".to_string(),
        order_date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
        status,
        gross_value: Money::brl(100_000),
        margin: Money::brl(30_000),
        type_code: OrderType::Gf,
        region_code: "SP".to_string(),
    }
}
