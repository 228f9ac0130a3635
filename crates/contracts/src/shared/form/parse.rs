use crate::shared::metadata::FieldMetadata;

/// Parse a decimal input ("12,5" and "12.5" both accepted) and check its range.
pub fn parse_decimal(raw: &str, field: &FieldMetadata) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(field.missing());
    }
    let value: f64 = raw
        .replace(',', ".")
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| format!("{}: введите число", field.label))?;
    field.check_number(value)?;
    Ok(value)
}

/// Parse a whole-number input and check its range.
pub fn parse_integer(raw: &str, field: &FieldMetadata) -> Result<i64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(field.missing());
    }
    let value: i64 = raw
        .parse()
        .map_err(|_| format!("{}: введите целое число", field.label))?;
    field.check_number(value as f64)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::ValidationRules;

    const AMOUNT: FieldMetadata = FieldMetadata {
        name: "max_amount",
        label: "Сумма",
        placeholder: None,
        hint: None,
        validation: ValidationRules::required()
            .with_min(0.01)
            .with_message("Укажите сумму"),
    };

    const STOCK: FieldMetadata = FieldMetadata {
        name: "stock",
        label: "Остаток",
        placeholder: None,
        hint: None,
        validation: ValidationRules::required().with_min(1.0),
    };

    #[test]
    fn decimal_accepts_comma_separator() {
        assert_eq!(parse_decimal("12,5", &AMOUNT), Ok(12.5));
        assert_eq!(parse_decimal(" 300 ", &AMOUNT), Ok(300.0));
    }

    #[test]
    fn decimal_reports_missing_and_garbage() {
        assert_eq!(parse_decimal("", &AMOUNT), Err("Укажите сумму".to_string()));
        assert_eq!(
            parse_decimal("abc", &AMOUNT),
            Err("Сумма: введите число".to_string())
        );
        assert_eq!(
            parse_decimal("inf", &AMOUNT),
            Err("Сумма: введите число".to_string())
        );
        assert!(parse_decimal("0", &AMOUNT).is_err());
    }

    #[test]
    fn integer_rejects_fractions_and_range() {
        assert_eq!(parse_integer("10", &STOCK), Ok(10));
        assert_eq!(
            parse_integer("1.5", &STOCK),
            Err("Остаток: введите целое число".to_string())
        );
        assert!(parse_integer("0", &STOCK).is_err());
        assert_eq!(
            parse_integer("", &STOCK),
            Err("Остаток не может быть пустым".to_string())
        );
    }
}
