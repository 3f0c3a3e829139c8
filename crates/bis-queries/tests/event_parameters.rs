//! End-to-end checks of the events endpoint parameters

use bis_core::config::ClientConfig;
use bis_core::ToQueryParams;
use bis_models::{EventType, ProgramCode, TargetGroup};
use bis_queries::{keys, EventParameters, FilterPreset};
use chrono::Local;

#[test]
fn test_all_atomic_presets_accepted() {
    for (bits, token) in [
        (FilterPreset::CLUB, "klub"),
        (FilterPreset::WEEKEND, "vik"),
        (FilterPreset::CAMP, "tabor"),
        (FilterPreset::EKOSTAN, "ekostan"),
    ] {
        let builder = EventParameters::new().set_filter(bits).unwrap();
        assert_eq!(builder.filter().unwrap().as_str(), token);
    }
}

#[test]
fn test_invalid_presets_rejected() {
    for bits in [0, 16, 3, 5, 12, 14, 15] {
        assert!(EventParameters::new().set_filter(bits).unwrap_err().is_usage());
    }
}

#[test]
fn test_exclude_running_uses_today() {
    let before = Local::now().date_naive();
    let params = EventParameters::new().exclude_running().flatten();
    let after = Local::now().date_naive();

    let sent = params.get(keys::DATE_FROM_GTE).unwrap();
    let candidates = [
        before.format("%Y-%m-%d").to_string(),
        after.format("%Y-%m-%d").to_string(),
    ];
    assert!(candidates.iter().any(|d| d == sent), "unexpected date {sent}");
}

#[test]
fn test_full_query_string() {
    let params = EventParameters::new()
        .set_types([EventType::Voluntary, EventType::ClubTalk])
        .set_programs([ProgramCode::Nature, ProgramCode::Education])
        .set_target_group(TargetGroup::Everyone)
        .set_organized_by(vec![10, 20])
        .order_by_date_from()
        .flatten();

    assert_eq!(
        params.to_query_string(),
        "event_type_array=dobr%2Cklub-predn\
         &program_array=ap%2Cvzdelavani\
         &indended_for_array=vsichni\
         &ordering=date_from\
         &administrative_unit=10%2C20"
    );
}

#[test]
fn test_params_serialize_for_http_clients() {
    let params = EventParameters::new().set_program(ProgramCode::Psb).flatten();
    let value = serde_json::to_value(&params).unwrap();

    assert_eq!(value["program_array"], "psb");
    assert_eq!(value["ordering"], "date_to");
    assert_eq!(value["event_type_array"], "");
}

#[test]
fn test_events_url_from_builder() {
    let config = ClientConfig::default();
    let request = EventParameters::new().set_organized_by(42_i64);

    let url = config.events_url(&request).unwrap();
    assert_eq!(url.path(), "/api/frontend/events/");
    assert!(url.query().unwrap().contains("administrative_unit=42"));
    assert_eq!(request.to_query_params().get(keys::ADMINISTRATIVE_UNIT), Some("42"));
}
