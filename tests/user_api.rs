//! End-to-end scenario against the full route table with the in-memory store.

use std::sync::Arc;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};
use webflux_user_service::domain::rules::NameRule;
use webflux_user_service::repositories::users::MemoryUserRepository;
use webflux_user_service::routes::configure_all_routes;
use webflux_user_service::services::users::UserService;

#[actix_web::test]
async fn user_lifecycle_scenario() {
    let service = UserService::new(Arc::new(MemoryUserRepository::new()), NameRule::default());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(configure_all_routes),
    )
    .await;

    // create
    let request = test::TestRequest::post()
        .uri("/user/save")
        .set_json(json!({ "name": "alice", "age": 30 }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, request).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(created, json!({ "id": id, "name": "alice", "age": 30 }));

    // find
    let request = test::TestRequest::get().uri(&format!("/user/find/{}", id)).to_request();
    let found: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(found, created);

    // update keeps id
    let request = test::TestRequest::put()
        .uri(&format!("/user/update/{}", id))
        .set_json(json!({ "name": "alice2", "age": 45 }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(updated, json!({ "id": id, "name": "alice2", "age": 45 }));

    // 45 is inside the old range
    let request = test::TestRequest::get().uri("/user/old").to_request();
    let old: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(old, json!([updated]));

    // invalid name
    let request = test::TestRequest::post()
        .uri("/user/save")
        .set_json(json!({ "name": "al ice", "age": 30 }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(response).await;
    assert_eq!(body, "用户名不合法 name:al ice".as_bytes());

    // delete, then delete again
    let request = test::TestRequest::delete().uri(&format!("/user/del/{}", id)).to_request();
    assert_eq!(test::call_service(&app, request).await.status(), StatusCode::OK);

    let request = test::TestRequest::delete().uri(&format!("/user/del/{}", id)).to_request();
    assert_eq!(test::call_service(&app, request).await.status(), StatusCode::NOT_FOUND);

    let request = test::TestRequest::get().uri("/user/get_all").to_request();
    let all: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(all, json!([]));
}
