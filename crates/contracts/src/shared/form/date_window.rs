use super::{FieldErrors, FormContext};
use crate::shared::dates::parse_local_input;
use crate::shared::metadata::FieldMetadata;
use chrono::{DateTime, TimeZone, Timelike, Utc};

pub const START_IN_PAST_MESSAGE: &str = "Дата начала не может быть в прошлом";
pub const END_BEFORE_START_MESSAGE: &str = "Дата окончания должна быть позже даты начала";

fn parse_required<Tz: TimeZone>(
    raw: &str,
    field: &FieldMetadata,
    ctx: &FormContext<Tz>,
) -> Result<DateTime<Utc>, String> {
    if raw.trim().is_empty() {
        return Err(field.missing());
    }
    parse_local_input(raw, &ctx.zone)
}

/// Inputs carry minutes only, so "now" is compared without seconds.
fn minute_floor(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(instant)
}

/// Validate a start/end pair of `datetime-local` inputs.
///
/// - both values are required;
/// - the end must be strictly after the start;
/// - when creating, the start must not be in the past.
///
/// Errors go into `errors`; the parsed pair is returned when both values parse.
pub fn validate_date_window<Tz: TimeZone>(
    errors: &mut FieldErrors,
    start_field: &FieldMetadata,
    end_field: &FieldMetadata,
    start_raw: &str,
    end_raw: &str,
    ctx: &FormContext<Tz>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = errors.take(start_field, parse_required(start_raw, start_field, ctx));
    let end = errors.take(end_field, parse_required(end_raw, end_field, ctx));

    if let Some(start) = start {
        if ctx.is_create() && start < minute_floor(ctx.now) {
            errors.insert(start_field.name, START_IN_PAST_MESSAGE);
        }
    }

    let (start, end) = (start?, end?);
    if end <= start {
        errors.insert(end_field.name, END_BEFORE_START_MESSAGE);
    }
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dates::test_zones::Berlin;
    use crate::shared::dates::format_api;
    use crate::shared::form::FormMode;
    use crate::shared::metadata::ValidationRules;
    use chrono::FixedOffset;

    const START: FieldMetadata = FieldMetadata {
        name: "start_day",
        label: "Дата начала",
        placeholder: None,
        hint: None,
        validation: ValidationRules::required().with_message("Укажите дату начала"),
    };

    const END: FieldMetadata = FieldMetadata {
        name: "end_day",
        label: "Дата окончания",
        placeholder: None,
        hint: None,
        validation: ValidationRules::required().with_message("Укажите дату окончания"),
    };

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 45).unwrap()
    }

    #[test]
    fn valid_window_is_returned() {
        let mut errors = FieldErrors::new();
        let ctx = FormContext::create_utc(now());
        let window = validate_date_window(
            &mut errors,
            &START,
            &END,
            "2026-10-20T00:00",
            "2026-10-27T00:00",
            &ctx,
        );
        assert!(errors.is_empty());
        let (start, end) = window.unwrap();
        assert!(end > start);
    }

    #[test]
    fn missing_dates_use_field_messages() {
        let mut errors = FieldErrors::new();
        let ctx = FormContext::create_utc(now());
        assert!(validate_date_window(&mut errors, &START, &END, "", " ", &ctx).is_none());
        assert_eq!(errors.get("start_day"), Some("Укажите дату начала"));
        assert_eq!(errors.get("end_day"), Some("Укажите дату окончания"));
    }

    #[test]
    fn end_must_be_strictly_after_start() {
        let ctx = FormContext::create_utc(now());
        for end in ["2026-10-20T00:00", "2026-10-19T23:59"] {
            let mut errors = FieldErrors::new();
            validate_date_window(&mut errors, &START, &END, "2026-10-20T00:00", end, &ctx);
            assert_eq!(errors.get("end_day"), Some(END_BEFORE_START_MESSAGE));
        }
    }

    #[test]
    fn start_in_the_past_is_rejected_only_on_create() {
        let mut errors = FieldErrors::new();
        let ctx = FormContext::create_utc(now());
        validate_date_window(&mut errors, &START, &END, "2026-10-19T11:59", "2026-10-25T00:00", &ctx);
        assert_eq!(errors.get("start_day"), Some(START_IN_PAST_MESSAGE));

        let mut errors = FieldErrors::new();
        let ctx = FormContext::edit_utc(now());
        validate_date_window(&mut errors, &START, &END, "2026-10-01T00:00", "2026-10-25T00:00", &ctx);
        assert!(errors.is_empty());
    }

    #[test]
    fn current_minute_counts_as_not_past() {
        let mut errors = FieldErrors::new();
        let ctx = FormContext::create_utc(now());
        validate_date_window(&mut errors, &START, &END, "2026-10-19T12:00", "2026-10-19T13:00", &ctx);
        assert!(errors.is_empty());
    }

    #[test]
    fn start_is_read_in_browser_zone() {
        // 14:30 in UTC+3 is 11:30 UTC, already past at 12:00:45 UTC
        let mut errors = FieldErrors::new();
        let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
        let ctx = FormContext::new(FormMode::Create, now(), moscow);
        validate_date_window(&mut errors, &START, &END, "2026-10-19T14:30", "2026-10-20T00:00", &ctx);
        assert_eq!(errors.get("start_day"), Some(START_IN_PAST_MESSAGE));
    }

    #[test]
    fn window_across_dst_change_uses_offset_of_each_end() {
        let mut errors = FieldErrors::new();
        let ctx = FormContext::new(FormMode::Create, now(), Berlin);
        let (start, end) = validate_date_window(
            &mut errors,
            &START,
            &END,
            "2026-10-20T00:00",
            "2026-11-20T00:00",
            &ctx,
        )
        .unwrap();
        assert!(errors.is_empty());
        assert_eq!(format_api(&start), "2026-10-19T22:00:00Z");
        assert_eq!(format_api(&end), "2026-11-19T23:00:00Z");
    }
}
