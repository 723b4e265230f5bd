use super::*;

/// Tests updating a student over HTTP.
///
/// Expected: 200 with the replaced fields in the envelope
#[tokio::test]
async fn updates_student() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student_with_number(db, "20210001")
        .await
        .unwrap();

    let mut payload = valid_payload();
    payload["name"] = json!("李四");
    payload["major"] = json!("软件工程");

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/students/{}", student.id),
        Some(payload),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, 200);
    assert_eq!(body["data"]["id"], student.id);
    assert_eq!(body["data"]["name"], "李四");
    assert_eq!(body["data"]["major"], "软件工程");
}

/// Tests updating an unknown student.
///
/// Expected: 404 envelope naming the ID
#[tokio::test]
async fn reports_missing_student() {
    let (_test, app) = setup().await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/students/42",
        Some(valid_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404);
    assert!(body["message"].as_str().unwrap().contains("42"));
}

/// Tests moving a student onto a number another student holds.
///
/// Expected: 409 envelope naming the number
#[tokio::test]
async fn rejects_taken_number() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    factory::student::create_student_with_number(db, "20210001")
        .await
        .unwrap();
    let second = factory::student::create_student_with_number(db, "20210002")
        .await
        .unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/students/{}", second.id),
        Some(valid_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_envelope(&body, 409);
    assert!(body["message"].as_str().unwrap().contains("20210001"));
}

/// Tests that an invalid update payload is rejected before any write.
///
/// Expected: 400 with field violations and the record unchanged
#[tokio::test]
async fn rejects_invalid_payload() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        &format!("/api/students/{}", student.id),
        Some(json!({ "name": "张" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["name"]
        .as_str()
        .unwrap()
        .contains("between 2 and 20"));

    // Record still holds its original name
    let (_, current) = send_json(
        &app,
        Method::GET,
        &format!("/api/students/{}", student.id),
        None,
    )
    .await;
    assert_eq!(current["data"]["name"], student.name);
}
