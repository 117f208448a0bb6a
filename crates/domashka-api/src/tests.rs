use crate::response::{check_response, first_homework, next_cursor, parse_status};
use domashka_core::error::BotError;
use serde_json::json;

#[test]
fn test_check_response_accepts_documented_shape() {
    let payload = json!({
        "homeworks": [{"homework_name": "hw1", "status": "approved"}],
        "current_date": 1000,
    });
    assert!(check_response(&payload).is_ok());
}

#[test]
fn test_check_response_accepts_empty_homeworks() {
    let payload = json!({"homeworks": [], "current_date": 1000});
    assert!(check_response(&payload).is_ok());
}

#[test]
fn test_check_response_rejects_non_object() {
    for payload in [json!([1, 2, 3]), json!("text"), json!(42), json!(null)] {
        let err = check_response(&payload).unwrap_err();
        assert!(matches!(err, BotError::Shape(_)), "payload: {payload}");
    }
}

#[test]
fn test_check_response_rejects_missing_homeworks() {
    let payload = json!({"current_date": 1000});
    let err = check_response(&payload).unwrap_err();
    assert!(err.to_string().contains("homeworks"), "got: {err}");
}

#[test]
fn test_check_response_rejects_missing_current_date() {
    let payload = json!({"homeworks": []});
    let err = check_response(&payload).unwrap_err();
    assert!(err.to_string().contains("current_date"), "got: {err}");
}

#[test]
fn test_check_response_rejects_non_array_homeworks() {
    let payload = json!({"homeworks": {"0": "hw"}, "current_date": 1000});
    let err = check_response(&payload).unwrap_err();
    assert!(matches!(err, BotError::Shape(_)));
}

#[test]
fn test_parse_status_renders_name_and_verdict() {
    let hw = json!({"homework_name": "hw1", "status": "approved"});
    assert_eq!(
        parse_status(&hw).unwrap(),
        "Изменился статус проверки работы \"hw1\". \
         Работа проверена: ревьюеру всё понравилось. Ура!"
    );

    let hw = json!({"homework_name": "final_project", "status": "rejected"});
    let msg = parse_status(&hw).unwrap();
    assert!(msg.contains("\"final_project\""));
    assert!(msg.contains("Работа проверена: у ревьюера есть замечания."));
}

#[test]
fn test_parse_status_missing_name() {
    let hw = json!({"status": "approved"});
    let err = parse_status(&hw).unwrap_err();
    assert!(matches!(err, BotError::MissingField("homework_name")));
}

#[test]
fn test_parse_status_missing_status() {
    let hw = json!({"homework_name": "hw1"});
    let err = parse_status(&hw).unwrap_err();
    assert!(matches!(err, BotError::MissingField("status")));
}

#[test]
fn test_parse_status_unknown_verdict() {
    let hw = json!({"homework_name": "x", "status": "unknown_code"});
    let err = parse_status(&hw).unwrap_err();
    match err {
        BotError::UnknownVerdict(code) => assert_eq!(code, "unknown_code"),
        other => panic!("expected UnknownVerdict, got {other:?}"),
    }
}

#[test]
fn test_parse_status_non_string_fields_are_missing() {
    let hw = json!({"homework_name": 7, "status": "approved"});
    assert!(matches!(
        parse_status(&hw).unwrap_err(),
        BotError::MissingField("homework_name")
    ));
}

#[test]
fn test_first_homework_takes_most_recent() {
    let payload = json!({
        "homeworks": [
            {"homework_name": "newest", "status": "reviewing"},
            {"homework_name": "older", "status": "approved"},
        ],
        "current_date": 1000,
    });
    let hw = first_homework(&payload).unwrap();
    assert_eq!(hw["homework_name"], "newest");

    let empty = json!({"homeworks": [], "current_date": 1000});
    assert!(first_homework(&empty).is_none());
}

#[test]
fn test_next_cursor_advances_from_server_value() {
    let payload = json!({"homeworks": [], "current_date": 1000});
    assert_eq!(next_cursor(&payload, 500), 1000);
}

#[test]
fn test_next_cursor_keeps_prior_when_not_integral() {
    let payload = json!({"homeworks": [], "current_date": "soon"});
    assert_eq!(next_cursor(&payload, 500), 500);

    let payload = json!({"homeworks": []});
    assert_eq!(next_cursor(&payload, 500), 500);
}
