//! Утилиты форматирования чисел для таблиц (локаль pt-BR)

use contracts::domain::a001_order::Money;

/// Вставляет разделитель тысяч (точку) в строку цифр
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Форматирует сумму в минимальных единицах: тысячи через точку, дробная часть через запятую
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_cents;
/// assert_eq!(format_cents(123456), "1.234,56");
/// ```
pub fn format_cents(cents: i64) -> String {
    let abs = cents.unsigned_abs();
    let integer_part = group_thousands(&(abs / 100).to_string());
    let formatted = format!("{},{:02}", integer_part, abs % 100);
    if cents < 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Форматирует денежное значение с символом валюты
///
/// # Примеры
///
/// ```
/// use contracts::domain::a001_order::Money;
/// use frontend::shared::components::table::format_money;
/// assert_eq!(format_money(&Money::brl(123456789)), "R$ 1.234.567,89");
/// ```
pub fn format_money(money: &Money) -> String {
    let symbol = money.currency.symbol();
    let amount = format_cents(money.amount_cents.abs());
    if money.is_negative() {
        format!("-{} {}", symbol, amount)
    } else {
        format!("{} {}", symbol, amount)
    }
}

/// Форматирует целое число с разделителем тысяч
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_number_int;
/// assert_eq!(format_number_int(1234567), "1.234.567");
/// ```
pub fn format_number_int(value: usize) -> String {
    group_thousands(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::Currency;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(&Money::brl(123456)), "R$ 1.234,56");
        assert_eq!(format_money(&Money::brl(123456789)), "R$ 1.234.567,89");
        assert_eq!(format_money(&Money::brl(0)), "R$ 0,00");
        assert_eq!(format_money(&Money::brl(-1000)), "-R$ 10,00");
        assert_eq!(format_money(&Money::new(500, Currency::Usd)), "US$ 5,00");
        assert_eq!(format_money(&Money::new(500, Currency::Eur)), "€ 5,00");
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(5), "0,05");
        assert_eq!(format_cents(99999), "999,99");
        assert_eq!(format_cents(100000), "1.000,00");
        assert_eq!(format_cents(-123456), "-1.234,56");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567), "1.234.567");
        assert_eq!(format_number_int(0), "0");
        assert_eq!(format_number_int(84), "84");
    }
}
