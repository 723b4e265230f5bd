use super::*;

/// Tests fetching a student by ID over HTTP.
///
/// Expected: 200 with the record in the envelope
#[tokio::test]
async fn gets_student() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await.unwrap();

    let (status, body) = send_json(
        &app,
        Method::GET,
        &format!("/api/students/{}", student.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, 200);
    assert_eq!(body["message"], "success");
    assert_eq!(body["data"]["id"], student.id);
    assert_eq!(body["data"]["studentNumber"], student.student_number);
}

/// Tests fetching an unknown ID.
///
/// Expected: 404 envelope naming the ID, with no data
#[tokio::test]
async fn reports_missing_student() {
    let (_test, app) = setup().await;

    let (status, body) = send_json(&app, Method::GET, "/api/students/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404);
    assert!(body["message"].as_str().unwrap().contains("42"));
    assert!(body["data"].is_null());
}
