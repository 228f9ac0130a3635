use super::metadata::{
    ENTITY_METADATA, FIELD_END_DAY, FIELD_GIFT_VARIANT, FIELD_PURCHASE_VARIANTS, FIELD_START_DAY,
    FIELD_STOCK, GIFT_AMONG_PURCHASES_MESSAGE,
};
use super::product_variant::toggle_variant;
use crate::domain::common::{AdminEntity, EntityForm, EntityId};
use crate::shared::dates::{api_datetime, to_local_input};
use crate::shared::form::{parse_integer, validate_date_window, FieldErrors, FormContext};
use crate::shared::metadata::EntityMetadataInfo;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Акция "подарок при покупке"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: EntityId,
    /// Товары, при покупке которых выдаётся подарок
    #[serde(default)]
    pub product_variant_ids: Vec<EntityId>,
    /// Подарочный товар
    pub product_variant_id: EntityId,
    pub stock: i64,
    #[serde(with = "api_datetime")]
    pub start_day: DateTime<Utc>,
    #[serde(with = "api_datetime")]
    pub end_day: DateTime<Utc>,
}

impl AdminEntity for Gift {
    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        format!("Подарок #{}", self.id)
    }

    fn entity_metadata() -> &'static EntityMetadataInfo {
        &ENTITY_METADATA
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GiftForm {
    pub id: Option<EntityId>,
    pub product_variant_ids: Vec<EntityId>,
    pub product_variant_id: Option<EntityId>,
    pub stock: String,
    /// `datetime-local` значения
    pub start_day: String,
    pub end_day: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GiftDto {
    pub product_variant_ids: Vec<EntityId>,
    pub product_variant_id: EntityId,
    pub stock: i64,
    #[serde(with = "api_datetime")]
    pub start_day: DateTime<Utc>,
    #[serde(with = "api_datetime")]
    pub end_day: DateTime<Utc>,
}

impl GiftForm {
    /// Включить или выключить товар для покупки.
    pub fn toggle_purchase_variant(&mut self, id: EntityId) {
        toggle_variant(&mut self.product_variant_ids, id);
    }
}

impl EntityForm for GiftForm {
    type Entity = Gift;
    type Dto = GiftDto;

    fn from_entity<Tz: TimeZone>(entity: &Gift, zone: &Tz) -> Self {
        Self {
            id: Some(entity.id),
            product_variant_ids: entity.product_variant_ids.clone(),
            product_variant_id: Some(entity.product_variant_id),
            stock: entity.stock.to_string(),
            start_day: to_local_input(&entity.start_day, zone),
            end_day: to_local_input(&entity.end_day, zone),
        }
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn validate<Tz: TimeZone>(&self, ctx: &FormContext<Tz>) -> Result<GiftDto, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.product_variant_ids.is_empty() {
            errors.insert(FIELD_PURCHASE_VARIANTS.name, FIELD_PURCHASE_VARIANTS.missing());
        }
        match self.product_variant_id {
            None => errors.insert(FIELD_GIFT_VARIANT.name, FIELD_GIFT_VARIANT.missing()),
            Some(gift) if self.product_variant_ids.contains(&gift) => {
                errors.insert(FIELD_GIFT_VARIANT.name, GIFT_AMONG_PURCHASES_MESSAGE)
            }
            Some(_) => {}
        }
        let stock = errors.take(&FIELD_STOCK, parse_integer(&self.stock, &FIELD_STOCK));
        let window = validate_date_window(
            &mut errors,
            &FIELD_START_DAY,
            &FIELD_END_DAY,
            &self.start_day,
            &self.end_day,
            ctx,
        );

        match (self.product_variant_id, stock, window) {
            (Some(gift), Some(stock), Some((start_day, end_day))) if errors.is_empty() => Ok(GiftDto {
                product_variant_ids: self.product_variant_ids.clone(),
                product_variant_id: gift,
                stock,
                start_day,
                end_day,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dates::test_zones::Berlin;
    use crate::shared::form::FormMode;
    use chrono::FixedOffset;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 30, 45).unwrap()
    }

    fn valid_form() -> GiftForm {
        GiftForm {
            id: None,
            product_variant_ids: vec![1, 2],
            product_variant_id: Some(7),
            stock: "50".into(),
            start_day: "2026-10-20T10:00".into(),
            end_day: "2026-10-27T10:00".into(),
        }
    }

    #[test]
    fn valid_gift_produces_utc_payload() {
        let dto = valid_form().validate(&FormContext::create_utc(now())).unwrap();
        assert_eq!(dto.stock, 50);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["start_day"], "2026-10-20T10:00:00Z");
        assert_eq!(json["product_variant_ids"], serde_json::json!([1, 2]));
    }

    #[test]
    fn gift_must_differ_from_purchased_variants() {
        let form = GiftForm {
            product_variant_id: Some(2),
            ..valid_form()
        };
        let errors = form.validate(&FormContext::create_utc(now())).unwrap_err();
        assert_eq!(errors.get("product_variant_id"), Some(GIFT_AMONG_PURCHASES_MESSAGE));
    }

    #[test]
    fn required_selections_and_stock() {
        let form = GiftForm {
            product_variant_ids: vec![],
            product_variant_id: None,
            stock: "0".into(),
            ..valid_form()
        };
        let errors = form.validate(&FormContext::create_utc(now())).unwrap_err();
        assert_eq!(errors.get("product_variant_ids"), Some("Выберите хотя бы один товар для покупки"));
        assert_eq!(errors.get("product_variant_id"), Some("Выберите подарочный товар"));
        assert!(errors.get("stock").is_some());

        let fractional = GiftForm { stock: "2.5".into(), ..valid_form() };
        let errors = fractional.validate(&FormContext::create_utc(now())).unwrap_err();
        assert_eq!(errors.get("stock"), Some("Количество подарков: введите целое число"));
    }

    #[test]
    fn past_start_rejected_only_on_create() {
        let form = GiftForm {
            start_day: "2026-10-01T10:00".into(),
            ..valid_form()
        };
        assert!(form.validate(&FormContext::create_utc(now())).is_err());
        assert!(form.validate(&FormContext::edit_utc(now())).is_ok());
    }

    #[test]
    fn end_must_follow_start() {
        let form = GiftForm {
            end_day: "2026-10-20T10:00".into(),
            ..valid_form()
        };
        let errors = form.validate(&FormContext::create_utc(now())).unwrap_err();
        assert!(errors.contains("end_day"));
    }

    #[test]
    fn loaded_gift_fills_form_in_local_time() {
        let gift: Gift = serde_json::from_str(
            r#"{"id":4,"product_variant_ids":[1],"product_variant_id":9,"stock":3,
                "start_day":"2026-11-01T07:00:00Z","end_day":"2026-11-02T07:00:00.000Z"}"#,
        )
        .unwrap();
        let form = GiftForm::from_entity(&gift, &FixedOffset::east_opt(3 * 3600).unwrap());
        assert_eq!(form.start_day, "2026-11-01T10:00");
        assert_eq!(form.end_day, "2026-11-02T10:00");
        assert_eq!(form.stock, "3");
    }

    #[test]
    fn loaded_gift_window_keeps_wall_clock_across_dst_change() {
        let gift: Gift = serde_json::from_str(
            r#"{"id":5,"product_variant_ids":[1],"product_variant_id":9,"stock":1,
                "start_day":"2026-10-19T22:00:00Z","end_day":"2026-11-19T23:00:00Z"}"#,
        )
        .unwrap();
        let form = GiftForm::from_entity(&gift, &Berlin);
        assert_eq!(form.start_day, "2026-10-20T00:00");
        assert_eq!(form.end_day, "2026-11-20T00:00");

        let ctx = FormContext::new(FormMode::Edit, now(), Berlin);
        let dto = form.validate(&ctx).unwrap();
        assert_eq!(dto.start_day, gift.start_day);
        assert_eq!(dto.end_day, gift.end_day);
    }

    #[test]
    fn toggling_variants() {
        let mut form = GiftForm::default();
        form.toggle_purchase_variant(3);
        form.toggle_purchase_variant(4);
        form.toggle_purchase_variant(3);
        assert_eq!(form.product_variant_ids, vec![4]);
    }
}
