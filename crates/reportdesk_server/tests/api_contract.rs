mod support;

use serde_json::json;
use support::{call, spawn_app};

#[tokio::test]
async fn project_lifecycle_over_http() {
    let addr = spawn_app().await;

    let created = call(
        addr,
        "POST",
        "/api/projects",
        Some(r#"{"id":"p1","name":"Apollo","description":"moon"}"#),
    )
    .await;
    assert_eq!(created.status, 201);
    assert_eq!(
        created.json(),
        json!({"message": "Project created successfully", "projectId": "p1"})
    );

    let fetched = call(addr, "GET", "/api/projects/p1", None).await;
    assert_eq!(fetched.status, 200);
    assert_eq!(
        fetched.json(),
        json!({"id": "p1", "name": "Apollo", "description": "moon"})
    );

    let updated = call(
        addr,
        "PUT",
        "/api/projects/p1",
        Some(r#"{"name":"Artemis","description":"back to the moon"}"#),
    )
    .await;
    assert_eq!(updated.status, 200);
    assert_eq!(
        updated.json(),
        json!({
            "message": "Project with ID p1 has been updated.",
            "updatedProject": {"id": "p1", "name": "Artemis", "description": "back to the moon"}
        })
    );

    let listed = call(addr, "GET", "/api/projects", None).await;
    assert_eq!(listed.status, 200);
    assert_eq!(listed.json().as_array().map(Vec::len), Some(1));

    let deleted = call(addr, "DELETE", "/api/projects/p1", None).await;
    assert_eq!(deleted.status, 200);
    assert_eq!(
        deleted.json(),
        json!({"message": "Project with ID p1 has been deleted.", "deletedProjectId": "p1"})
    );

    let again = call(addr, "DELETE", "/api/projects/p1", None).await;
    assert_eq!(again.status, 404);
    assert_eq!(again.json(), json!({"error": "Project with ID p1 not found"}));
}

#[tokio::test]
async fn project_without_description_serializes_null() {
    let addr = spawn_app().await;
    call(addr, "POST", "/api/projects", Some(r#"{"id":"p1","name":"Solo"}"#)).await;

    let fetched = call(addr, "GET", "/api/projects/p1", None).await;
    assert_eq!(
        fetched.json(),
        json!({"id": "p1", "name": "Solo", "description": null})
    );
}

#[tokio::test]
async fn project_validation_failures_are_bad_requests() {
    let addr = spawn_app().await;

    let missing_name = call(addr, "POST", "/api/projects", Some(r#"{"id":"p1"}"#)).await;
    assert_eq!(missing_name.status, 400);
    assert_eq!(
        missing_name.json(),
        json!({"error": "Project name is required"})
    );

    let update = call(addr, "PUT", "/api/projects/p1", Some(r#"{"name":"x"}"#)).await;
    assert_eq!(update.status, 400);

    let update_missing = call(
        addr,
        "PUT",
        "/api/projects/ghost",
        Some(r#"{"name":"x","description":"y"}"#),
    )
    .await;
    assert_eq!(update_missing.status, 404);
}

#[tokio::test]
async fn duplicate_project_is_an_opaque_server_error() {
    let addr = spawn_app().await;
    let body = Some(r#"{"id":"p1","name":"Apollo"}"#);
    assert_eq!(call(addr, "POST", "/api/projects", body).await.status, 201);

    let dup = call(addr, "POST", "/api/projects", Some(r#"{"id":"p1","name":"Other"}"#)).await;
    assert_eq!(dup.status, 500);
    assert_eq!(dup.json(), json!({"error": "Error creating project"}));

    let kept = call(addr, "GET", "/api/projects/p1", None).await;
    assert_eq!(kept.json()["name"], "Apollo");
}

#[tokio::test]
async fn report_batch_and_crud_over_http() {
    let addr = spawn_app().await;
    call(addr, "POST", "/api/projects", Some(r#"{"id":"p1","name":"Apollo"}"#)).await;

    let empty = call(addr, "GET", "/api/projects/p1/reports", None).await;
    assert_eq!(empty.status, 200);
    assert_eq!(empty.json(), json!([]));

    let created = call(
        addr,
        "POST",
        "/api/projects/p1/reports",
        Some(r#"{"reports":[{"id":"r1","text":"first"},{"id":"r2","text":"second"}]}"#),
    )
    .await;
    assert_eq!(created.status, 201);
    assert_eq!(
        created.json(),
        json!({
            "projectid": "p1",
            "reports": [
                {"id": "r1", "projectid": "p1", "text": "first"},
                {"id": "r2", "projectid": "p1", "text": "second"}
            ]
        })
    );

    let single = call(
        addr,
        "POST",
        "/api/reports",
        Some(r#"{"id":"r3","projectid":"p1","text":"third"}"#),
    )
    .await;
    assert_eq!(single.status, 201);
    assert_eq!(single.json()["report"]["id"], "r3");

    let all = call(addr, "GET", "/api/reports", None).await;
    assert_eq!(all.json().as_array().map(Vec::len), Some(3));

    let updated = call(addr, "PUT", "/api/reports/r1", Some(r#"{"text":"rewritten"}"#)).await;
    assert_eq!(updated.status, 200);
    assert_eq!(
        updated.json(),
        json!({"message": "Report with ID r1 has been successfully updated."})
    );
    let fetched = call(addr, "GET", "/api/reports/r1", None).await;
    assert_eq!(
        fetched.json(),
        json!({"id": "r1", "projectid": "p1", "text": "rewritten"})
    );

    let deleted = call(addr, "DELETE", "/api/reports/r2", None).await;
    assert_eq!(deleted.status, 200);
    assert_eq!(
        deleted.json(),
        json!({"message": "Report with ID r2 has been successfully deleted."})
    );
    assert_eq!(call(addr, "GET", "/api/reports/r2", None).await.status, 404);
    assert_eq!(call(addr, "DELETE", "/api/reports/r2", None).await.status, 404);
}

#[tokio::test]
async fn incomplete_batch_inserts_nothing() {
    let addr = spawn_app().await;
    call(addr, "POST", "/api/projects", Some(r#"{"id":"p1","name":"Apollo"}"#)).await;

    let rejected = call(
        addr,
        "POST",
        "/api/projects/p1/reports",
        Some(r#"{"reports":[{"id":"r1","text":"x"},{"id":"r2"}]}"#),
    )
    .await;
    assert_eq!(rejected.status, 400);

    let empty_batch = call(addr, "POST", "/api/projects/p1/reports", Some(r#"{"reports":[]}"#)).await;
    assert_eq!(empty_batch.status, 400);

    let listed = call(addr, "GET", "/api/projects/p1/reports", None).await;
    assert_eq!(listed.json(), json!([]));
}

#[tokio::test]
async fn reports_for_unknown_project_are_not_found() {
    let addr = spawn_app().await;

    let batch = call(
        addr,
        "POST",
        "/api/projects/ghost/reports",
        Some(r#"{"reports":[{"id":"r1","text":"x"}]}"#),
    )
    .await;
    assert_eq!(batch.status, 404);
    assert_eq!(batch.json(), json!({"error": "Project with ID ghost not found"}));

    let single = call(
        addr,
        "POST",
        "/api/reports",
        Some(r#"{"id":"r1","projectid":"ghost","text":"x"}"#),
    )
    .await;
    assert_eq!(single.status, 404);

    assert_eq!(call(addr, "GET", "/api/reports", None).await.json(), json!([]));
}

#[tokio::test]
async fn deleting_a_project_removes_its_reports() {
    let addr = spawn_app().await;
    call(addr, "POST", "/api/projects", Some(r#"{"id":"p1","name":"Apollo"}"#)).await;
    call(
        addr,
        "POST",
        "/api/projects/p1/reports",
        Some(r#"{"reports":[{"id":"r1","text":"x"}]}"#),
    )
    .await;

    assert_eq!(call(addr, "DELETE", "/api/projects/p1", None).await.status, 200);
    assert_eq!(call(addr, "GET", "/api/reports/r1", None).await.status, 404);
}

#[tokio::test]
async fn special_reports_endpoint() {
    let addr = spawn_app().await;

    let none = call(addr, "GET", "/api/special-reports", None).await;
    assert_eq!(none.status, 404);
    assert_eq!(none.json(), json!({"error": "No reports found"}));

    call(addr, "POST", "/api/projects", Some(r#"{"id":"p1","name":"Apollo"}"#)).await;
    call(
        addr,
        "POST",
        "/api/projects/p1/reports",
        Some(r#"{"reports":[{"id":"r1","text":"a a"},{"id":"r2","text":"b c d"}]}"#),
    )
    .await;

    let unqualified = call(addr, "GET", "/api/special-reports", None).await;
    assert_eq!(unqualified.status, 404);
    assert_eq!(
        unqualified.json(),
        json!({"error": "No reports found with the required word frequency"})
    );

    call(
        addr,
        "POST",
        "/api/reports",
        Some(r#"{"id":"r3","projectid":"p1","text":"Go go GO!"}"#),
    )
    .await;

    let selected = call(addr, "GET", "/api/special-reports", None).await;
    assert_eq!(selected.status, 200);
    assert_eq!(
        selected.json(),
        json!({"reports": [{"id": "r3", "projectid": "p1", "text": "Go go GO!"}]})
    );
}
