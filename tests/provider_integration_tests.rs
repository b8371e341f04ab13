use roam::geo::Region;
use roam::location::{IpLookupProvider, LocationError, LocationProvider};
use roam::poi::{NearbyPlacesProvider, PoiError, PoiProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn poi_provider(server: &MockServer) -> NearbyPlacesProvider {
    NearbyPlacesProvider::new(Some(format!("{}/pois", server.uri())))
}

// ============================================================================
// Nearby Places Provider Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_sends_exact_region_as_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pois"))
        .and(query_param("latitude", "45.5"))
        .and(query_param("longitude", "-73.6"))
        .and(query_param("latitudeDelta", "0.01"))
        .and(query_param("longitudeDelta", "0.01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "pois": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = poi_provider(&mock_server);
    let region = Region::new(45.5, -73.6, 0.01, 0.01);

    let response = provider.fetch_pois(&region).await.unwrap();
    assert_eq!(response.pois, Some(vec![]));
}

#[tokio::test]
async fn test_fetch_parses_poi_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pois"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "pois": [
                {"name": "Cafe Olimpico", "latitude": "45.5255", "longitude": "-73.6003", "category": "cafe"},
                {"name": "Mount Royal", "latitude": "45.5086", "longitude": "-73.5872"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let provider = poi_provider(&mock_server);
    let region = Region::new(45.52, -73.59, 0.05, 0.05);

    let response = provider.fetch_pois(&region).await.unwrap();
    let pois = response.pois.unwrap();
    assert_eq!(pois.len(), 2);
    assert_eq!(pois[0].name, "Cafe Olimpico");
    assert_eq!(pois[0].extra.get("category").unwrap(), "cafe");
    assert_eq!(pois[1].position().unwrap().latitude, 45.5086);
}

#[tokio::test]
async fn test_fetch_without_pois_field_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pois"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "message": "nothing nearby" })),
        )
        .mount(&mock_server)
        .await;

    let provider = poi_provider(&mock_server);
    let region = Region::new(45.5, -73.6, 0.01, 0.01);

    let response = provider.fetch_pois(&region).await.unwrap();
    assert!(response.pois.is_none());
}

#[tokio::test]
async fn test_fetch_non_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pois"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let provider = poi_provider(&mock_server);
    let region = Region::new(45.5, -73.6, 0.01, 0.01);

    let result = provider.fetch_pois(&region).await;
    assert!(matches!(result, Err(PoiError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_fetch_malformed_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pois"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let provider = poi_provider(&mock_server);
    let region = Region::new(45.5, -73.6, 0.01, 0.01);

    let result = provider.fetch_pois(&region).await;
    assert!(matches!(result, Err(PoiError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_network_error() {
    // Nothing is listening on this port.
    let provider = NearbyPlacesProvider::new(Some("http://127.0.0.1:1/pois".to_string()));
    let region = Region::new(45.5, -73.6, 0.01, 0.01);

    let result = provider.fetch_pois(&region).await;
    assert!(matches!(result, Err(PoiError::Network(_))));
}

// ============================================================================
// IP Lookup Provider Tests
// ============================================================================

#[tokio::test]
async fn test_ip_lookup_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "country": "Canada",
            "lat": 45.5017,
            "lon": -73.5673
        })))
        .mount(&mock_server)
        .await;

    let provider = IpLookupProvider::new(Some(mock_server.uri()), true);
    let coords = provider.current_location().await.unwrap();
    assert_eq!(coords.latitude, 45.5017);
    assert_eq!(coords.longitude, -73.5673);
}

#[tokio::test]
async fn test_ip_lookup_fail_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "fail",
            "message": "reserved range"
        })))
        .mount(&mock_server)
        .await;

    let provider = IpLookupProvider::new(Some(mock_server.uri()), true);
    let result = provider.current_location().await;
    assert!(matches!(result, Err(LocationError::Lookup(_))));
}

#[tokio::test]
async fn test_ip_lookup_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&mock_server)
        .await;

    let provider = IpLookupProvider::new(Some(mock_server.uri()), true);
    let result = provider.current_location().await;
    assert!(matches!(result, Err(LocationError::Api { status: 503, .. })));
}

#[tokio::test]
async fn test_ip_lookup_without_consent_never_calls_the_service() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "lat": 45.5,
            "lon": -73.6
        })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = IpLookupProvider::new(Some(mock_server.uri()), false);
    let result = provider.current_location().await;
    assert!(matches!(result, Err(LocationError::ConsentWithheld)));
}
