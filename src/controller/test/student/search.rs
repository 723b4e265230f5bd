use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) {
    factory::student::StudentFactory::new(db)
        .name("张三")
        .major("计算机科学与技术")
        .gender("男")
        .build()
        .await
        .unwrap();
    factory::student::StudentFactory::new(db)
        .name("张伟")
        .major("软件工程")
        .gender("男")
        .build()
        .await
        .unwrap();
    factory::student::StudentFactory::new(db)
        .name("李四")
        .major("软件工程")
        .gender("女")
        .build()
        .await
        .unwrap();
}

/// Tests searching by a name keyword over HTTP.
///
/// Expected: 200 with only the students whose names contain the keyword
#[tokio::test]
async fn filters_by_name_keyword() {
    let (test, app) = setup().await;
    seed(test.db.as_ref().unwrap()).await;

    // name=张
    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/students/search?name=%E5%BC%A0",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, 200);
    assert_eq!(body["data"]["total"], 2);
}

/// Tests combining a major and gender filter.
///
/// Expected: 200 with the single matching student
#[tokio::test]
async fn combines_filters() {
    let (test, app) = setup().await;
    seed(test.db.as_ref().unwrap()).await;

    // major=软件工程 gender=男
    let (status, body) = send_json(
        &app,
        Method::GET,
        "/api/students/search?major=%E8%BD%AF%E4%BB%B6%E5%B7%A5%E7%A8%8B&gender=%E7%94%B7",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["total"], 1);
    assert_eq!(data["students"][0]["name"], "张伟");
}

/// Tests searching without filters.
///
/// Expected: 200 with every student, same as the plain paged listing
#[tokio::test]
async fn returns_all_without_filters() {
    let (test, app) = setup().await;
    seed(test.db.as_ref().unwrap()).await;

    let (status, body) = send_json(&app, Method::GET, "/api/students/search", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 3);
}

/// Tests that search pagination rejects a zero size like the paged listing.
///
/// Expected: 400 envelope
#[tokio::test]
async fn rejects_zero_size() {
    let (_test, app) = setup().await;

    let (status, body) =
        send_json(&app, Method::GET, "/api/students/search?size=0", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, 400);
}
