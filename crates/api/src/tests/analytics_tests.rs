// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coy_forms_persistence::SqlitePersistence;

use crate::error::ApiError;
use crate::handlers::{list_generations, record_generation};
use crate::request_response::RecordGenerationRequest;
use crate::tests::helpers::fields;

fn store() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().unwrap()
}

fn sick_record() -> RecordGenerationRequest {
    RecordGenerationRequest {
        template: String::from("sick-report"),
        fields: fields(&[("rank", "CPL"), ("name", "Wei Ming")]),
    }
}

#[test]
fn test_record_assigns_event_id() {
    let mut persistence: SqlitePersistence = store();
    let response = record_generation(
        &mut persistence,
        &sick_record(),
        Some(String::from("test-agent/1.0")),
    )
    .unwrap();
    assert!(response.event_id >= 1);
    assert!(response.message.contains("sick-report"));
}

#[test]
fn test_record_rejects_unknown_template() {
    let mut persistence: SqlitePersistence = store();
    let request: RecordGenerationRequest = RecordGenerationRequest {
        template: String::from("parade-state"),
        fields: fields(&[]),
    };
    let err: ApiError =
        record_generation(&mut persistence, &request, None).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_list_returns_recorded_events_newest_first() {
    let mut persistence: SqlitePersistence = store();
    record_generation(&mut persistence, &sick_record(), None).unwrap();
    record_generation(
        &mut persistence,
        &RecordGenerationRequest {
            template: String::from("leave-application"),
            fields: fields(&[("rank", "3SG")]),
        },
        None,
    )
    .unwrap();

    let response = list_generations(&mut persistence, 10).unwrap();
    assert_eq!(response.generations.len(), 2);
    assert_eq!(response.generations[0].template, "leave-application");
    assert_eq!(response.generations[1].template, "sick-report");
}

#[test]
fn test_list_round_trips_display_name_and_fields() {
    let mut persistence: SqlitePersistence = store();
    record_generation(&mut persistence, &sick_record(), None).unwrap();

    let response = list_generations(&mut persistence, 10).unwrap();
    let event = &response.generations[0];
    assert_eq!(event.template_type, "Report Sick");
    assert_eq!(event.fields.get("rank").map(String::as_str), Some("CPL"));
    assert_eq!(event.user_agent, None);
    assert!(!event.created_at.is_empty());
}
