use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use serde_test::{assert_tokens, Token};
use roomgrid_core::{
    capacity::CapacityStatus,
    errors::GridError,
    models::{
        allocation::CreateAllocationRequest,
        catalog::{CreateCohortRequest, CreateInstructorRequest, CreateRoomRequest},
        enums::{Day, Modality, RoomKind, Shift},
    },
};
use uuid::Uuid;

#[rstest]
#[case("Monday", Day::Monday)]
#[case("Tuesday", Day::Tuesday)]
#[case("Wednesday", Day::Wednesday)]
#[case("Thursday", Day::Thursday)]
#[case("Friday", Day::Friday)]
#[case("Saturday", Day::Saturday)]
fn test_day_literals(#[case] literal: &str, #[case] day: Day) {
    assert_eq!(literal.parse::<Day>().unwrap(), day);
    assert_eq!(day.as_str(), literal);
    assert_eq!(to_string(&day).unwrap(), format!("\"{}\"", literal));
}

#[rstest]
#[case("Sunday")]
#[case("monday")]
#[case("Segunda")]
#[case("")]
fn test_day_rejects_unknown_values(#[case] literal: &str) {
    let err = literal.parse::<Day>().unwrap_err();
    assert!(matches!(err, GridError::InvalidInput(_)));
}

#[rstest]
#[case("Morning", Shift::Morning)]
#[case("Afternoon", Shift::Afternoon)]
#[case("Night", Shift::Night)]
fn test_shift_literals(#[case] literal: &str, #[case] shift: Shift) {
    assert_eq!(literal.parse::<Shift>().unwrap(), shift);
    assert_eq!(shift.to_string(), literal);
}

#[test]
fn test_modality_wire_values() {
    assert_tokens(
        &Modality::InPerson,
        &[Token::UnitVariant {
            name: "Modality",
            variant: "In-person",
        }],
    );
    assert_tokens(
        &Modality::Blended,
        &[Token::UnitVariant {
            name: "Modality",
            variant: "Blended",
        }],
    );

    for modality in Modality::ALL {
        assert_eq!(modality.as_str().parse::<Modality>().unwrap(), modality);
    }
    assert!("InPerson".parse::<Modality>().is_err());
}

#[test]
fn test_room_kind_wire_values() {
    assert_tokens(
        &RoomKind::Auditorium,
        &[Token::UnitVariant {
            name: "RoomKind",
            variant: "Auditorium",
        }],
    );
    for kind in RoomKind::ALL {
        assert_eq!(kind.as_str().parse::<RoomKind>().unwrap(), kind);
    }
}

#[test]
fn test_capacity_status_wire_values() {
    assert_eq!(to_string(&CapacityStatus::Ok).unwrap(), "\"OK\"");
    assert_eq!(
        to_string(&CapacityStatus::OverCapacity).unwrap(),
        "\"OVER_CAPACITY\""
    );
}

#[test]
fn test_canonical_orders_follow_the_week() {
    let mut days = vec![Day::Saturday, Day::Friday, Day::Monday, Day::Thursday, Day::Wednesday, Day::Tuesday];
    days.sort();
    assert_eq!(days, Day::ALL.to_vec());

    let mut shifts = vec![Shift::Night, Shift::Morning, Shift::Afternoon];
    shifts.sort();
    assert_eq!(shifts, Shift::ALL.to_vec());
}

fn allocation_request(cohort_ids: Vec<Uuid>) -> CreateAllocationRequest {
    CreateAllocationRequest {
        day: Day::Monday,
        shift: Shift::Night,
        modality: Modality::InPerson,
        room_id: Uuid::new_v4(),
        instructor_id: Uuid::new_v4(),
        discipline_id: Uuid::new_v4(),
        cohort_ids,
    }
}

#[test]
fn test_allocation_request_requires_cohorts() {
    let err = allocation_request(vec![]).validate().unwrap_err();
    assert!(matches!(err, GridError::InvalidInput(_)));

    assert!(allocation_request(vec![Uuid::new_v4()]).validate().is_ok());
}

#[test]
fn test_allocation_request_rejects_repeated_cohort() {
    let cohort = Uuid::new_v4();
    let err = allocation_request(vec![cohort, Uuid::new_v4(), cohort])
        .validate()
        .unwrap_err();
    assert!(matches!(err, GridError::InvalidInput(_)));
}

#[test]
fn test_allocation_request_deserialization() {
    let room_id = Uuid::new_v4();
    let cohort_id = Uuid::new_v4();
    let json = format!(
        r#"{{
            "day": "Wednesday",
            "shift": "Afternoon",
            "modality": "In-person",
            "room_id": "{room_id}",
            "instructor_id": "{}",
            "discipline_id": "{}",
            "cohort_ids": ["{cohort_id}"]
        }}"#,
        Uuid::new_v4(),
        Uuid::new_v4(),
    );

    let request: CreateAllocationRequest = from_str(&json).expect("valid request");
    assert_eq!(request.day, Day::Wednesday);
    assert_eq!(request.shift, Shift::Afternoon);
    assert_eq!(request.modality, Modality::InPerson);
    assert_eq!(request.room_id, room_id);
    assert_eq!(request.cohort_ids, vec![cohort_id]);
}

#[test]
fn test_allocation_request_rejects_unknown_day() {
    let json = format!(
        r#"{{"day": "Sunday", "shift": "Night", "modality": "Remote",
            "room_id": "{0}", "instructor_id": "{0}", "discipline_id": "{0}",
            "cohort_ids": ["{0}"]}}"#,
        Uuid::new_v4()
    );

    assert!(from_str::<CreateAllocationRequest>(&json).is_err());
}

#[rstest]
#[case("", 40, false)]
#[case("Room 40", 0, false)]
#[case("Room 40", -3, false)]
#[case("Room 40", 1, true)]
fn test_room_request_validation(#[case] name: &str, #[case] capacity: i32, #[case] valid: bool) {
    let request = CreateRoomRequest {
        name: name.to_string(),
        capacity,
        kind: RoomKind::Lecture,
    };
    assert_eq!(request.validate().is_ok(), valid);
}

#[test]
fn test_cohort_request_requires_students() {
    let request = CreateCohortRequest {
        identifier: "CC-1A".to_string(),
        course_id: Uuid::new_v4(),
        semester_id: Uuid::new_v4(),
        enrolled_count: 0,
    };
    assert!(request.validate().is_err());
}

#[test]
fn test_instructor_blank_email_is_absent() {
    let request = CreateInstructorRequest {
        name: "Ada Lovelace".to_string(),
        email: Some("   ".to_string()),
    };
    assert_eq!(request.normalized_email(), None);

    let request = CreateInstructorRequest {
        name: "Ada Lovelace".to_string(),
        email: Some(" ada@example.edu ".to_string()),
    };
    assert_eq!(request.normalized_email(), Some("ada@example.edu"));
}
