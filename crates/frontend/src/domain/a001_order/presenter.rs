//! Подготовка записей заказа к отображению

use crate::shared::components::table::format_money;
use crate::shared::components::ui::badge::BadgeTone;
use chrono::NaiveDate;
use contracts::domain::a001_order::OrderRecord;
use contracts::enums::{OrderStatus, PaymentState};
use contracts::shared::order_query::{OrderTab, ResultPage};
use thiserror::Error;

/// Значение, которое нельзя отобразить: новый код от бэкенда
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    #[error("order {order_id}: unknown status '{code}'")]
    UnknownStatus { order_id: String, code: String },

    #[error("order {order_id}: unknown payment state '{code}'")]
    UnknownPaymentState { order_id: String, code: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeView {
    pub label: &'static str,
    pub tone: BadgeTone,
}

/// Запись заказа, готовая к отрисовке
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub id: String,
    pub customer_name: String,
    pub customer_ref: Option<String>,
    pub product: String,
    pub order_date: String,
    pub status: BadgeView,
    pub payment: BadgeView,
    pub gross_value: String,
    pub margin: String,
    pub margin_negative: bool,
    pub type_code: String,
    pub region_code: String,
}

pub fn status_badge(status: &OrderStatus) -> Option<BadgeView> {
    let tone = match status {
        OrderStatus::Prepared => BadgeTone::Neutral,
        OrderStatus::Delivered => BadgeTone::Primary,
        OrderStatus::Completed => BadgeTone::Success,
        OrderStatus::Pending => BadgeTone::Warning,
        OrderStatus::Unknown(_) => return None,
    };
    status.display_name().map(|label| BadgeView { label, tone })
}

pub fn payment_badge(state: &PaymentState) -> Option<BadgeView> {
    let tone = match state {
        PaymentState::Paid => BadgeTone::Success,
        PaymentState::Unpaid => BadgeTone::Error,
        PaymentState::Unknown(_) => return None,
    };
    state.display_name().map(|label| BadgeView { label, tone })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn present(record: &OrderRecord) -> Result<DisplayRecord, PresentationError> {
    let status = status_badge(&record.status).ok_or_else(|| PresentationError::UnknownStatus {
        order_id: record.id.to_string(),
        code: record.status.code().to_string(),
    })?;
    let payment =
        payment_badge(&record.payment_state).ok_or_else(|| PresentationError::UnknownPaymentState {
            order_id: record.id.to_string(),
            code: record.payment_state.code().to_string(),
        })?;

    let product = if record.product_variant.trim().is_empty() {
        record.product_name.clone()
    } else {
        format!("{} · {}", record.product_name, record.product_variant)
    };

    Ok(DisplayRecord {
        id: record.id.to_string(),
        customer_name: record.customer_name.clone(),
        customer_ref: record.customer_ref.clone(),
        product,
        order_date: format_date(record.order_date),
        status,
        payment,
        gross_value: format_money(&record.gross_value),
        margin: format_money(&record.margin),
        margin_negative: record.margin.is_negative(),
        type_code: record.type_code.code().to_string(),
        region_code: record.region_code.to_uppercase(),
    })
}

/// Отобразить страницу; первая нераспознанная запись прерывает отображение
pub fn present_page(items: &[OrderRecord]) -> Result<Vec<DisplayRecord>, PresentationError> {
    items.iter().map(present).collect()
}

pub fn tab_label(tab: OrderTab) -> &'static str {
    match tab {
        OrderTab::All => "Todos Pedidos",
        OrderTab::Prepared => "Preparados",
        OrderTab::Delivered => "Entregues",
        OrderTab::Completed => "Completos",
        OrderTab::Pending => "Pendentes",
    }
}

/// Строка вида "Mostrando 1-10 de 84"
pub fn range_label(page: &ResultPage) -> String {
    match page.visible_range() {
        Some((first, last)) => format!("Mostrando {}-{} de {}", first, last, page.total_matched),
        None => format!("Mostrando 0 de {}", page.total_matched),
    }
}

/// Окно номеров страниц вокруг текущей, не больше `max_buttons`
pub fn page_buttons(page: &ResultPage, max_buttons: usize) -> Vec<usize> {
    let total = page.total_pages;
    if total == 0 || max_buttons == 0 {
        return Vec::new();
    }
    if total <= max_buttons {
        return (1..=total).collect();
    }
    let current = page.page.clamp(1, total);
    let start = current
        .saturating_sub(max_buttons / 2)
        .clamp(1, total - max_buttons + 1);
    (start..start + max_buttons).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::mock_data::order;
    use contracts::domain::a001_order::Money;
    use contracts::enums::OrderType;

    fn page_with(page: usize, total_pages: usize) -> ResultPage {
        let mut result = ResultPage::empty(10);
        result.page = page;
        result.total_pages = total_pages;
        result
    }

    #[test]
    fn test_present_formats_fields() {
        let mut record = order("10685", OrderStatus::Completed);
        record.payment_state = PaymentState::Paid;
        record.gross_value = Money::brl(123_456);
        record.margin = Money::brl(-2_500);
        record.type_code = OrderType::Other("SPOT".to_string());
        record.region_code = "rs".to_string();

        let display = present(&record).unwrap();
        assert_eq!(display.id, "10685");
        assert_eq!(display.product, "Vinheta · Voz feminina");
        assert_eq!(display.order_date, "10/04/2024");
        assert_eq!(display.status, BadgeView { label: "Completo", tone: BadgeTone::Success });
        assert_eq!(display.payment, BadgeView { label: "Pago", tone: BadgeTone::Success });
        assert_eq!(display.gross_value, "R$ 1.234,56");
        assert_eq!(display.margin, "-R$ 25,00");
        assert!(display.margin_negative);
        assert_eq!(display.type_code, "SPOT");
        assert_eq!(display.region_code, "RS");
    }

    #[test]
    fn test_present_is_total_over_known_values() {
        for status in OrderStatus::all() {
            for payment in PaymentState::all() {
                let mut record = order("1", status.clone());
                record.payment_state = payment.clone();
                let display = present(&record);
                assert!(display.is_ok(), "{:?} x {:?} failed", status, payment);
            }
        }
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let record = order("77", OrderStatus::Unknown("CANCELADO".to_string()));
        assert_eq!(
            present(&record),
            Err(PresentationError::UnknownStatus {
                order_id: "77".to_string(),
                code: "CANCELADO".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_payment_state_is_an_error() {
        let mut record = order("78", OrderStatus::Pending);
        record.payment_state = PaymentState::Unknown("ESTORNADO".to_string());
        assert!(matches!(
            present(&record),
            Err(PresentationError::UnknownPaymentState { .. })
        ));
    }

    #[test]
    fn test_present_page_stops_on_first_unknown() {
        let items = vec![
            order("1", OrderStatus::Pending),
            order("2", OrderStatus::Unknown("X".to_string())),
        ];
        assert!(present_page(&items).is_err());
        assert_eq!(present_page(&items[..1]).unwrap().len(), 1);
    }

    #[test]
    fn test_range_label() {
        let mut result = ResultPage::empty(10);
        assert_eq!(range_label(&result), "Mostrando 0 de 0");

        result.items = (0..10).map(|i| order(&i.to_string(), OrderStatus::Pending)).collect();
        result.total_matched = 84;
        result.total_pages = 9;
        assert_eq!(range_label(&result), "Mostrando 1-10 de 84");

        result.page = 9;
        result.items.truncate(4);
        assert_eq!(range_label(&result), "Mostrando 81-84 de 84");
    }

    #[test]
    fn test_page_buttons_window() {
        assert_eq!(page_buttons(&page_with(1, 0), 5), Vec::<usize>::new());
        assert_eq!(page_buttons(&page_with(2, 3), 5), vec![1, 2, 3]);
        assert_eq!(page_buttons(&page_with(1, 9), 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_buttons(&page_with(5, 9), 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_buttons(&page_with(9, 9), 5), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(tab_label(OrderTab::All), "Todos Pedidos");
        assert_eq!(tab_label(OrderTab::Completed), "Completos");
    }
}
