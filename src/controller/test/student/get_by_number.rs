use super::*;

/// Tests fetching a student by student number over HTTP.
///
/// Expected: 200 with the record in the envelope
#[tokio::test]
async fn gets_student() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student_with_number(db, "20210077")
        .await
        .unwrap();

    let (status, body) =
        send_json(&app, Method::GET, "/api/students/number/20210077", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], student.id);
}

/// Tests fetching a number nobody holds.
///
/// Expected: 404 envelope naming the number
#[tokio::test]
async fn reports_missing_number() {
    let (_test, app) = setup().await;

    let (status, body) =
        send_json(&app, Method::GET, "/api/students/number/99999999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, 404);
    assert!(body["message"].as_str().unwrap().contains("99999999"));
}
