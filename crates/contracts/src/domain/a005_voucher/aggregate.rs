use super::metadata::{
    ENTITY_METADATA, FIELD_CODE, FIELD_DESCRIPTION, FIELD_END_DAY, FIELD_MAX_AMOUNT,
    FIELD_MIN_ORDER_AMOUNT, FIELD_PERCENT, FIELD_START_DAY, FIELD_USAGE_LIMIT,
    FIXED_AMOUNT_PERCENT, INVALID_CODE_MESSAGE, MAX_AMOUNT_POSITIVE_MESSAGE,
};
use super::voucher_type::VoucherType;
use crate::domain::common::{AdminEntity, EntityForm, EntityId};
use crate::shared::dates::{api_datetime, to_local_input};
use crate::shared::form::{parse_decimal, parse_integer, validate_date_window, FieldErrors, FormContext};
use crate::shared::metadata::EntityMetadataInfo;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Скидочный ваучер
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    pub id: EntityId,
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub voucher_type: VoucherType,
    pub percent: i64,
    pub max_amount: f64,
    #[serde(default)]
    pub min_order_amount: f64,
    #[serde(with = "api_datetime")]
    pub start_day: DateTime<Utc>,
    #[serde(with = "api_datetime")]
    pub end_day: DateTime<Utc>,
    pub usage_limit: i64,
}

impl Voucher {
    /// Размер скидки для таблицы: "15%" или "500"
    pub fn value_label(&self) -> String {
        match self.voucher_type {
            VoucherType::Percentage => format!("{}% (до {})", self.percent, self.max_amount),
            VoucherType::FixedAmount => format!("{}", self.max_amount),
        }
    }
}

impl AdminEntity for Voucher {
    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.code.clone()
    }

    fn entity_metadata() -> &'static EntityMetadataInfo {
        &ENTITY_METADATA
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoucherForm {
    pub id: Option<EntityId>,
    pub code: String,
    pub description: String,
    pub voucher_type: VoucherType,
    pub percent: String,
    pub max_amount: String,
    pub min_order_amount: String,
    pub start_day: String,
    pub end_day: String,
    pub usage_limit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoucherDto {
    pub code: String,
    pub description: String,
    pub voucher_type: VoucherType,
    pub percent: i64,
    pub max_amount: f64,
    pub min_order_amount: f64,
    #[serde(with = "api_datetime")]
    pub start_day: DateTime<Utc>,
    #[serde(with = "api_datetime")]
    pub end_day: DateTime<Utc>,
    pub usage_limit: i64,
}

/// Код ваучера хранится без пробелов по краям и в верхнем регистре.
///
/// Регистр меняется только у ASCII: `ß` не превращается в `SS` и
/// отсекается проверкой набора символов.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

fn validate_code(raw: &str) -> Result<String, String> {
    let code = normalize_code(raw);
    FIELD_CODE.check_string(&code)?;
    if code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_' || c == '-')
    {
        Ok(code)
    } else {
        Err(INVALID_CODE_MESSAGE.to_string())
    }
}

impl VoucherForm {
    /// Смена типа скидки. Для фиксированной суммы процент всегда 100.
    pub fn set_voucher_type(&mut self, voucher_type: VoucherType) {
        self.voucher_type = voucher_type;
        if !voucher_type.percent_editable() {
            self.percent = FIXED_AMOUNT_PERCENT.to_string();
        }
    }

    pub fn percent_enabled(&self) -> bool {
        self.voucher_type.percent_editable()
    }

    fn validate_percent(&self) -> Result<i64, String> {
        if !self.percent_enabled() {
            return Ok(FIXED_AMOUNT_PERCENT);
        }
        parse_integer(&self.percent, &FIELD_PERCENT)
    }
}

impl EntityForm for VoucherForm {
    type Entity = Voucher;
    type Dto = VoucherDto;

    fn from_entity<Tz: TimeZone>(entity: &Voucher, zone: &Tz) -> Self {
        let mut form = Self {
            id: Some(entity.id),
            code: entity.code.clone(),
            description: entity.description.clone(),
            voucher_type: entity.voucher_type,
            percent: entity.percent.to_string(),
            max_amount: entity.max_amount.to_string(),
            min_order_amount: entity.min_order_amount.to_string(),
            start_day: to_local_input(&entity.start_day, zone),
            end_day: to_local_input(&entity.end_day, zone),
            usage_limit: entity.usage_limit.to_string(),
        };
        form.set_voucher_type(entity.voucher_type);
        form
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn validate<Tz: TimeZone>(&self, ctx: &FormContext<Tz>) -> Result<VoucherDto, FieldErrors> {
        let mut errors = FieldErrors::new();

        let code = errors.take(&FIELD_CODE, validate_code(&self.code));
        errors.take(&FIELD_DESCRIPTION, FIELD_DESCRIPTION.check_string(&self.description));
        let percent = errors.take(&FIELD_PERCENT, self.validate_percent());
        let max_amount = errors.take(
            &FIELD_MAX_AMOUNT,
            parse_decimal(&self.max_amount, &FIELD_MAX_AMOUNT).and_then(|v| {
                if v > 0.0 {
                    Ok(v)
                } else {
                    Err(MAX_AMOUNT_POSITIVE_MESSAGE.to_string())
                }
            }),
        );
        let min_order_amount = errors.take(
            &FIELD_MIN_ORDER_AMOUNT,
            parse_decimal(&self.min_order_amount, &FIELD_MIN_ORDER_AMOUNT),
        );
        let usage_limit = errors.take(
            &FIELD_USAGE_LIMIT,
            parse_integer(&self.usage_limit, &FIELD_USAGE_LIMIT),
        );
        let window = validate_date_window(
            &mut errors,
            &FIELD_START_DAY,
            &FIELD_END_DAY,
            &self.start_day,
            &self.end_day,
            ctx,
        );

        match (code, percent, max_amount, min_order_amount, usage_limit, window) {
            (
                Some(code),
                Some(percent),
                Some(max_amount),
                Some(min_order_amount),
                Some(usage_limit),
                Some((start_day, end_day)),
            ) if errors.is_empty() => Ok(VoucherDto {
                code,
                description: self.description.trim().to_string(),
                voucher_type: self.voucher_type,
                percent,
                max_amount,
                min_order_amount,
                start_day,
                end_day,
                usage_limit,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap()
    }

    fn valid_form() -> VoucherForm {
        VoucherForm {
            id: None,
            code: " autumn-25 ".into(),
            description: "Осенняя скидка".into(),
            voucher_type: VoucherType::Percentage,
            percent: "15".into(),
            max_amount: "1000".into(),
            min_order_amount: "0".into(),
            start_day: "2026-10-20T00:00".into(),
            end_day: "2026-11-20T00:00".into(),
            usage_limit: "500".into(),
        }
    }

    fn ctx() -> FormContext {
        FormContext::create_utc(now())
    }

    #[test]
    fn valid_voucher_is_normalized() {
        let dto = valid_form().validate(&ctx()).unwrap();
        assert_eq!(dto.code, "AUTUMN-25");
        assert_eq!(dto.percent, 15);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["voucher_type"], "PERCENTAGE");
        assert_eq!(json["end_day"], "2026-11-20T00:00:00Z");
    }

    #[test]
    fn percent_must_be_integer_between_1_and_100() {
        for bad in ["0", "101", "12.5", "abc", "-3"] {
            let form = VoucherForm { percent: bad.into(), ..valid_form() };
            let errors = form.validate(&ctx()).unwrap_err();
            assert!(errors.contains("percent"), "{} accepted", bad);
        }
        for good in ["1", "100"] {
            let form = VoucherForm { percent: good.into(), ..valid_form() };
            assert!(form.validate(&ctx()).is_ok());
        }
        let empty = VoucherForm { percent: " ".into(), ..valid_form() };
        assert_eq!(
            empty.validate(&ctx()).unwrap_err().get("percent"),
            Some("Укажите процент скидки")
        );
    }

    #[test]
    fn fixed_amount_forces_full_percent() {
        let mut form = VoucherForm { percent: "37".into(), ..valid_form() };
        form.set_voucher_type(VoucherType::FixedAmount);
        assert_eq!(form.percent, "100");
        assert!(!form.percent_enabled());

        // value typed around the disabled input is ignored
        form.percent = "5".into();
        let dto = form.validate(&ctx()).unwrap();
        assert_eq!(dto.percent, 100);
        assert_eq!(dto.voucher_type, VoucherType::FixedAmount);

        form.set_voucher_type(VoucherType::Percentage);
        assert!(form.percent_enabled());
    }

    #[test]
    fn code_rules() {
        let short = VoucherForm { code: "ab".into(), ..valid_form() };
        assert!(short.validate(&ctx()).unwrap_err().contains("code"));

        let spaced = VoucherForm { code: "HELLO WORLD".into(), ..valid_form() };
        assert_eq!(
            spaced.validate(&ctx()).unwrap_err().get("code"),
            Some(INVALID_CODE_MESSAGE)
        );

        let cyrillic = VoucherForm { code: "СКИДКА".into(), ..valid_form() };
        assert!(cyrillic.validate(&ctx()).is_err());

        let long = VoucherForm { code: "A".repeat(33), ..valid_form() };
        assert!(long.validate(&ctx()).is_err());
    }

    #[test]
    fn non_ascii_letters_are_not_expanded_into_valid_codes() {
        assert_eq!(normalize_code(" straße "), "STRAßE");
        let form = VoucherForm { code: "straße".into(), ..valid_form() };
        assert_eq!(
            form.validate(&ctx()).unwrap_err().get("code"),
            Some(INVALID_CODE_MESSAGE)
        );
    }

    #[test]
    fn amounts_and_limit() {
        let form = VoucherForm {
            max_amount: "0".into(),
            min_order_amount: "-1".into(),
            usage_limit: "0".into(),
            ..valid_form()
        };
        let errors = form.validate(&ctx()).unwrap_err();
        assert_eq!(errors.get("max_amount"), Some(MAX_AMOUNT_POSITIVE_MESSAGE));
        assert!(errors.contains("min_order_amount"));
        assert!(errors.contains("usage_limit"));

        let comma = VoucherForm { max_amount: "99,90".into(), ..valid_form() };
        assert_eq!(comma.validate(&ctx()).unwrap().max_amount, 99.9);
    }

    #[test]
    fn every_required_field_reported() {
        let errors = VoucherForm::default().validate(&ctx()).unwrap_err();
        for field in [
            "code",
            "description",
            "percent",
            "max_amount",
            "min_order_amount",
            "usage_limit",
            "start_day",
            "end_day",
        ] {
            assert!(errors.contains(field), "{} not reported", field);
        }
    }

    #[test]
    fn loading_fixed_voucher_keeps_percent_locked() {
        let voucher: Voucher = serde_json::from_str(
            r#"{"id":1,"code":"FLAT500","description":"","voucher_type":"FIXED_AMOUNT",
                "percent":0,"max_amount":500,"min_order_amount":2000,
                "start_day":"2026-10-01T00:00:00Z","end_day":"2026-12-01T00:00:00Z",
                "usage_limit":10}"#,
        )
        .unwrap();
        let form = VoucherForm::from_entity(&voucher, &Utc);
        assert_eq!(form.percent, "100");
        assert_eq!(form.max_amount, "500");
        assert_eq!(voucher.value_label(), "500");
    }
}
