//! Validation rules for metadata fields

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Field-specific message used when a required value is missing
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_length(self, min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..self
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn with_range(self, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    pub const fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn with_message(self, message: &'static str) -> Self {
        Self {
            custom_error: Some(message),
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Message for a missing required value
    pub fn missing_message(&self, field_label: &str) -> String {
        match self.custom_error {
            Some(message) => message.to_string(),
            None => format!("{} не может быть пустым", field_label),
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            if self.required {
                return Err(self.missing_message(field_label));
            }
            return Ok(());
        }

        let length = value.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!(
                    "{}: минимум {} символов",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!(
                    "{}: не более {} символов",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{}: значение не может быть меньше {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{}: значение не может быть больше {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_values() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Название"),
            Err("Название не может быть пустым".to_string())
        );
        assert!(rules.validate_string("Apple", "Название").is_ok());
    }

    #[test]
    fn custom_message_replaces_default() {
        let rules = ValidationRules::required().with_message("Введите название бренда");
        assert_eq!(
            rules.validate_string("", "Название"),
            Err("Введите название бренда".to_string())
        );
    }

    #[test]
    fn optional_blank_value_skips_length_checks() {
        let rules = ValidationRules::none().with_length(3, 5);
        assert!(rules.validate_string("", "Код").is_ok());
        assert!(rules.validate_string("ab", "Код").is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let rules = ValidationRules::required().with_max_length(5);
        assert!(rules.validate_string("Зима!", "Название").is_ok());
        assert!(rules.validate_string("Зимний", "Название").is_err());
    }

    #[test]
    fn number_range_is_inclusive() {
        let rules = ValidationRules::required().with_range(1.0, 100.0);
        assert!(rules.validate_number(1.0, "Процент").is_ok());
        assert!(rules.validate_number(100.0, "Процент").is_ok());
        assert_eq!(
            rules.validate_number(0.0, "Процент"),
            Err("Процент: значение не может быть меньше 1".to_string())
        );
        assert_eq!(
            rules.validate_number(101.0, "Процент"),
            Err("Процент: значение не может быть больше 100".to_string())
        );
    }
}
