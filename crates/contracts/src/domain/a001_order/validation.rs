use super::aggregate::OrderRecord;
use chrono::NaiveDate;
use std::collections::HashSet;
use thiserror::Error;

/// Нарушение инварианта записи заказа при загрузке
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("order at position {index} has an empty id")]
    EmptyId { index: usize },

    #[error("order {id} appears more than once in the batch")]
    DuplicateId { id: String },

    #[error("order {id}: gross value is negative ({amount_cents})")]
    NegativeGrossValue { id: String, amount_cents: i64 },

    #[error("order {id}: margin {margin_cents} exceeds gross value {gross_cents}")]
    MarginExceedsGross {
        id: String,
        margin_cents: i64,
        gross_cents: i64,
    },

    #[error("order {id}: margin currency {margin} differs from gross value currency {gross}")]
    CurrencyMismatch {
        id: String,
        gross: &'static str,
        margin: &'static str,
    },

    #[error("order {id}: order date {order_date} is after ingestion date {ingested_on}")]
    FutureOrderDate {
        id: String,
        order_date: NaiveDate,
        ingested_on: NaiveDate,
    },

    #[error("order {id}: region code '{region}' must be two letters")]
    InvalidRegion { id: String, region: String },
}

/// Проверка одной записи
pub fn validate_record(
    index: usize,
    record: &OrderRecord,
    ingested_on: NaiveDate,
) -> Result<(), ValidationError> {
    let id = record.id.value().trim();
    if id.is_empty() {
        return Err(ValidationError::EmptyId { index });
    }
    let id = id.to_string();

    if record.gross_value.is_negative() {
        return Err(ValidationError::NegativeGrossValue {
            id,
            amount_cents: record.gross_value.amount_cents,
        });
    }

    if record.margin.currency != record.gross_value.currency {
        return Err(ValidationError::CurrencyMismatch {
            id,
            gross: record.gross_value.currency.code(),
            margin: record.margin.currency.code(),
        });
    }

    if record.margin.amount_cents > record.gross_value.amount_cents {
        return Err(ValidationError::MarginExceedsGross {
            id,
            margin_cents: record.margin.amount_cents,
            gross_cents: record.gross_value.amount_cents,
        });
    }

    if record.order_date > ingested_on {
        return Err(ValidationError::FutureOrderDate {
            id,
            order_date: record.order_date,
            ingested_on,
        });
    }

    let region = &record.region_code;
    if region.chars().count() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidRegion {
            id,
            region: region.clone(),
        });
    }

    Ok(())
}

/// Проверка всего набора: первая ошибка отклоняет весь набор
pub fn validate_batch(
    records: &[OrderRecord],
    ingested_on: NaiveDate,
) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        validate_record(index, record, ingested_on)?;
        if !seen.insert(record.id.value()) {
            return Err(ValidationError::DuplicateId {
                id: record.id.value().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::{Money, OrderId};
    use crate::enums::{Currency, OrderStatus, OrderType, PaymentState};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    fn record(id: &str) -> OrderRecord {
        OrderRecord {
            id: OrderId::new(id),
            customer_name: "Supermercado Bom Preço".to_string(),
            customer_ref: Some("c-12".to_string()),
            payment_state: PaymentState::Unpaid,
            product_name: "Vinheta".to_string(),
            product_variant: "Voz feminina".to_string(),
            order_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            status: OrderStatus::Pending,
            gross_value: Money::brl(80_000),
            margin: Money::brl(20_000),
            type_code: OrderType::Cf,
            region_code: "RS".to_string(),
        }
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(validate_record(0, &record("1"), today()).is_ok());
    }

    #[test]
    fn test_margin_may_be_negative_but_not_above_gross() {
        let mut loss = record("1");
        loss.margin = Money::brl(-5_000);
        assert!(validate_record(0, &loss, today()).is_ok());

        let mut bad = record("2");
        bad.margin = Money::brl(90_000);
        assert_eq!(
            validate_record(0, &bad, today()),
            Err(ValidationError::MarginExceedsGross {
                id: "2".to_string(),
                margin_cents: 90_000,
                gross_cents: 80_000,
            })
        );
    }

    #[test]
    fn test_negative_gross_value_rejected() {
        let mut bad = record("1");
        bad.gross_value = Money::brl(-1);
        bad.margin = Money::brl(-10);
        assert!(matches!(
            validate_record(0, &bad, today()),
            Err(ValidationError::NegativeGrossValue { .. })
        ));
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut bad = record("1");
        bad.margin = Money::new(100, Currency::Usd);
        assert!(matches!(
            validate_record(0, &bad, today()),
            Err(ValidationError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_future_date_rejected() {
        let mut bad = record("1");
        bad.order_date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        assert!(matches!(
            validate_record(0, &bad, today()),
            Err(ValidationError::FutureOrderDate { .. })
        ));
    }

    #[test]
    fn test_region_must_be_two_letters() {
        let mut bad = record("1");
        bad.region_code = "SPX".to_string();
        assert!(matches!(
            validate_record(0, &bad, today()),
            Err(ValidationError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let batch = vec![record("7"), record("8"), record("7")];
        assert_eq!(
            validate_batch(&batch, today()),
            Err(ValidationError::DuplicateId { id: "7".to_string() })
        );
    }

    #[test]
    fn test_empty_batch_is_valid() {
        assert!(validate_batch(&[], today()).is_ok());
    }
}
