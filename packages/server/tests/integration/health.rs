use crate::common::{TestApp, routes};

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::HEALTH).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_workshop_routes() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::OPENAPI).await;

    assert_eq!(res.status, 200);
    let paths = res.body["paths"].as_object().expect("paths should be an object");
    assert!(paths.contains_key("/api/v1/workshops/{id}"), "{}", res.text);
    assert!(paths.contains_key("/api/v1/workshops/{id}/monitor"), "{}", res.text);
    assert!(paths.contains_key("/api/v1/health"), "{}", res.text);
}
