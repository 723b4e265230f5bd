use super::*;

/// Tests creating a student over HTTP.
///
/// Expected: 201 with the envelope code mirroring the status and the stored
/// record carrying server-assigned fields
#[tokio::test]
async fn creates_student() {
    let (_test, app) = setup().await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/students",
        Some(valid_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_envelope(&body, 201);
    assert_eq!(body["message"], "created");

    let data = &body["data"];
    assert!(data["id"].as_i64().unwrap() > 0);
    assert_eq!(data["name"], "张三");
    assert_eq!(data["studentNumber"], "20210001");
    assert_eq!(data["age"], 20);
    assert_eq!(data["gender"], "男");
    assert_eq!(data["enrollmentDate"], "2021-09-01");
    assert_eq!(data["createdTime"], data["updatedTime"]);
}

/// Tests that an invalid payload reports every violated field at once.
///
/// Expected: 400 with a violation message per missing required field
#[tokio::test]
async fn reports_all_violations() {
    let (_test, app) = setup().await;

    let (status, body) = send_json(&app, Method::POST, "/api/students", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400);

    let violations = body["data"].as_object().unwrap();
    assert_eq!(violations.len(), 5);
    assert_eq!(violations["name"], "name must not be blank");
    assert_eq!(violations["studentNumber"], "studentNumber must not be blank");
    assert_eq!(violations["age"], "age is required");
    assert_eq!(violations["gender"], "gender must be one of: 男, 女");
    assert_eq!(violations["major"], "major must not be blank");
}

/// Tests that a malformed optional field is rejected as well.
///
/// Expected: 400 naming only the email field
#[tokio::test]
async fn rejects_malformed_email() {
    let (_test, app) = setup().await;

    let mut payload = valid_payload();
    payload["email"] = json!("not-an-email");

    let (status, body) = send_json(&app, Method::POST, "/api/students", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let violations = body["data"].as_object().unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations["email"], "email must be a well-formed email address");
}

/// Tests creating two students with the same number.
///
/// Expected: 409 naming the offending number, with no data
#[tokio::test]
async fn rejects_duplicate_number() {
    let (_test, app) = setup().await;

    let (status, _) = send_json(
        &app,
        Method::POST,
        "/api/students",
        Some(valid_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/api/students",
        Some(valid_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_envelope(&body, 409);
    assert!(body["message"].as_str().unwrap().contains("20210001"));
    assert!(body["data"].is_null());
}
