use serde::{Deserialize, Serialize};

/// Тип скидки ваучера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherType {
    /// Процент от суммы заказа, ограниченный `max_amount`
    #[default]
    Percentage,
    /// Фиксированная сумма `max_amount`
    FixedAmount,
}

impl VoucherType {
    pub const ALL: [VoucherType; 2] = [VoucherType::Percentage, VoucherType::FixedAmount];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Percentage => "PERCENTAGE",
            Self::FixedAmount => "FIXED_AMOUNT",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Percentage => "Процент",
            Self::FixedAmount => "Фиксированная сумма",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Процент вводится только для процентной скидки
    pub fn percent_editable(&self) -> bool {
        matches!(self, Self::Percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        assert_eq!(serde_json::to_string(&VoucherType::FixedAmount).unwrap(), "\"FIXED_AMOUNT\"");
        let parsed: VoucherType = serde_json::from_str("\"PERCENTAGE\"").unwrap();
        assert_eq!(parsed, VoucherType::Percentage);
        assert_eq!(VoucherType::from_code("FIXED_AMOUNT"), Some(VoucherType::FixedAmount));
        assert_eq!(VoucherType::from_code("percent"), None);
    }
}
