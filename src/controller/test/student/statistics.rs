use super::*;

/// Tests the statistics endpoint.
///
/// Expected: 200 with the total and both per-group breakdowns
#[tokio::test]
async fn reports_grouped_counts() {
    let (test, app) = setup().await;
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .major("计算机科学与技术")
        .gender("男")
        .build()
        .await
        .unwrap();
    factory::student::StudentFactory::new(db)
        .major("软件工程")
        .gender("女")
        .build()
        .await
        .unwrap();
    factory::student::StudentFactory::new(db)
        .major("软件工程")
        .gender("男")
        .build()
        .await
        .unwrap();

    let (status, body) = send_json(&app, Method::GET, "/api/students/statistics", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, 200);

    let data = &body["data"];
    assert_eq!(data["totalCount"], 3);
    assert_eq!(data["countByMajor"]["软件工程"], 2);
    assert_eq!(data["countByMajor"]["计算机科学与技术"], 1);
    assert_eq!(data["countByGender"]["男"], 2);
    assert_eq!(data["countByGender"]["女"], 1);
}

/// Tests statistics over an empty table.
///
/// Expected: 200 with zero total and empty breakdowns
#[tokio::test]
async fn reports_empty_table() {
    let (_test, app) = setup().await;

    let (status, body) = send_json(&app, Method::GET, "/api/students/statistics", None).await;

    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["totalCount"], 0);
    assert_eq!(data["countByMajor"], json!({}));
    assert_eq!(data["countByGender"], json!({}));
}
