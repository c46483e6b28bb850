//! Caller-defined index and images routes against a stub server.

use save_api::{CategoryFilter, Dataset, Entry, EntryUpsert, ImagePatch, SaveClient, SearchQuery};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client(server: &MockServer) -> SaveClient {
    SaveClient::new(Url::parse(&server.uri()).unwrap()).unwrap()
}

#[tokio::test]
async fn named_index_is_substituted_into_the_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/other/papers"))
        .and(body_json(json!({"query": "fuzzing"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "count": 1,
            "data": [{"title": "fuzzing survey", "url": "https://example.com/paper"}]
        })))
        .mount(&server)
        .await;

    let resp = client(&server)
        .await
        .other_search("papers", &SearchQuery::new("fuzzing"))
        .await
        .unwrap();
    assert_eq!(resp.count, 1);
    assert_eq!(resp.data[0].title, "fuzzing survey");
}

#[tokio::test]
async fn index_names_with_spaces_are_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/other/my%20index/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200, "count": 0, "data": []
        })))
        .mount(&server)
        .await;

    let resp = client(&server).await.other_all("my index").await.unwrap();
    assert_eq!(resp.count, 0);

    let requests = server.received_requests().await.unwrap();
    // Raw path on the wire carries the encoded segment, not a template.
    assert!(!requests[0].url.as_str().contains('{'));
}

#[tokio::test]
async fn other_search_categories_filters_by_keyword() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/other/papers/categories"))
        .and(body_json(json!({"filter": ["fuzzing"], "fields": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "count": 1,
            "fields": ["title"],
            "data": [{"title": "fuzzing survey"}]
        })))
        .mount(&server)
        .await;

    let resp = client(&server)
        .await
        .other_search_categories(
            "papers",
            &CategoryFilter {
                filter: vec!["fuzzing".to_string()],
                fields: Some(true),
                limit: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(resp.count, 1);
    assert_eq!(resp.data[0].title, "fuzzing survey");
}

#[tokio::test]
async fn other_crud_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/other/notes"))
        .and(body_json(json!({
            "url": "https://example.com/note",
            "keywords": ["rust"],
            "title": "a note"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": 200, "message": "OK"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/other/notes/exact"))
        .and(body_json(json!({"url": "https://example.com/note"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": {"id": "n1", "url": "https://example.com/note", "title": "a note"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/other/notes"))
        .and(body_json(json!({"id": "n1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": 200, "message": "OK"})),
        )
        .mount(&server)
        .await;

    let c = client(&server).await;
    c.other_upsert(
        "notes",
        &EntryUpsert {
            url: "https://example.com/note".to_string(),
            keywords: vec!["rust".to_string()],
            title: Some("a note".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let found = c.other_exact("notes", "https://example.com/note").await.unwrap();
    assert_eq!(found.data.id, "n1");

    c.other_delete("notes", "n1").await.unwrap();
}

#[tokio::test]
async fn other_import_export_and_favorites() {
    let server = MockServer::start().await;
    let dataset = Dataset {
        data: vec![Entry {
            id: "n1".to_string(),
            url: "https://example.com/note".to_string(),
            ..Default::default()
        }],
        count: 1,
        time_saved: 1_700_000_000_000,
    };

    Mock::given(method("PUT"))
        .and(path("/api/v1/other/notes/import"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": 200, "message": "OK"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/other/notes/export"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::to_value(&dataset).unwrap()),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/other/notes/favorites"))
        .and(body_json(json!({"url": "https://example.com/note"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": 200, "message": "OK"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/other/notes/favorites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200, "count": 1, "data": [{"id": "n1"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/other/notes/favorites"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": 200, "message": "OK"})),
        )
        .mount(&server)
        .await;

    let c = client(&server).await;
    c.other_import("notes", &dataset).await.unwrap();
    let exported = c.other_export("notes").await.unwrap();
    assert_eq!(exported, dataset);

    c.other_add_favorite("notes", "https://example.com/note").await.unwrap();
    let favorites = c.other_get_favorites("notes").await.unwrap();
    assert_eq!(favorites.count, 1);
    c.other_delete_favorite("notes", "https://example.com/note").await.unwrap();
}

#[tokio::test]
async fn images_metadata_patch_and_search() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/images"))
        .and(body_json(json!({"id": "img1", "title": "sunset"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": 200, "message": "OK"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/images"))
        .and(body_json(json!({"query": "sunset"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "count": 1,
            "data": [{
                "id": "img1",
                "title": "sunset",
                "content_type": "image/jpeg",
                "width": 1920,
                "height": 1080
            }]
        })))
        .mount(&server)
        .await;

    let c = client(&server).await;
    c.images_update(&ImagePatch {
        id: "img1".to_string(),
        title: Some("sunset".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();

    let found = c.images_search(&SearchQuery::new("sunset")).await.unwrap();
    assert_eq!(found.data[0].content_type, "image/jpeg");
    assert_eq!(found.data[0].width, 1920);
}

#[tokio::test]
async fn images_delete_and_export() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/images"))
        .and(body_json(json!({"id": "img1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": 200, "message": "OK"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/images/export"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [], "count": 0, "time_saved": 1_700_000_000_000_u64
        })))
        .mount(&server)
        .await;

    let c = client(&server).await;
    c.images_delete("img1").await.unwrap();
    let exported = c.images_export().await.unwrap();
    assert_eq!(exported.count, 0);
}
