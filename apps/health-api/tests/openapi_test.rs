use utoipa::OpenApi;

use health_api::app::ApiDoc;

#[test]
fn test_openapi_spec_documents_health_endpoint() {
    let spec = ApiDoc::openapi();
    let json = spec.to_pretty_json().expect("Failed to generate OpenAPI JSON");

    let paths = spec.paths.paths;
    assert!(paths.contains_key("/health"), "Missing /health path");

    let health_path = paths.get("/health").unwrap();
    let get = health_path.get.as_ref().expect("Missing GET /health");

    let responses = &get.responses.responses;
    assert!(responses.contains_key("200"), "Missing 200 response");
    assert!(responses.contains_key("503"), "Missing 503 response");

    assert!(json.contains("HealthResponse"), "Missing HealthResponse schema");
}
