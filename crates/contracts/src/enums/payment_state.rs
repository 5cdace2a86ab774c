use serde::{Deserialize, Serialize};

/// Состояние оплаты заказа
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentState {
    Paid,
    Unpaid,
    Unknown(String),
}

impl PaymentState {
    pub fn code(&self) -> &str {
        match self {
            PaymentState::Paid => "PAID",
            PaymentState::Unpaid => "UNPAID",
            PaymentState::Unknown(raw) => raw,
        }
    }

    /// Подпись (pt-BR)
    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            PaymentState::Paid => Some("Pago"),
            PaymentState::Unpaid => Some("Não pago"),
            PaymentState::Unknown(_) => None,
        }
    }

    pub fn all() -> Vec<PaymentState> {
        vec![PaymentState::Paid, PaymentState::Unpaid]
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PaymentState::Unknown(_))
    }

    pub fn parse(raw: &str) -> Self {
        let needle = super::normalize(raw);
        Self::all()
            .into_iter()
            .find(|state| {
                state.code().to_lowercase() == needle
                    || state
                        .display_name()
                        .map(|name| name.to_lowercase() == needle)
                        .unwrap_or(false)
            })
            .unwrap_or_else(|| PaymentState::Unknown(raw.trim().to_string()))
    }
}

impl From<String> for PaymentState {
    fn from(raw: String) -> Self {
        PaymentState::parse(&raw)
    }
}

impl From<PaymentState> for String {
    fn from(state: PaymentState) -> Self {
        state.code().to_string()
    }
}
