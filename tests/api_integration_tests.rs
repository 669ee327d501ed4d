use serde_json::json;
use shl_api::api::ShlApiClient;
use shl_api::error::ApiError;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> ShlApiClient {
    let session = shl_api::api::create_http_client().expect("Failed to build HTTP client");
    ShlApiClient::with_base_url(
        "1234567890",
        "123",
        vec!["HV71".to_string(), "LHC".to_string()],
        session,
        server.uri(),
    )
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expires_in": 1800,
            "access_token": "deadbeef"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_client_flow() {
    let server = MockServer::start().await;
    let client = create_client(&server);
    mount_token(&server).await;

    assert!(!client.is_connected());
    let body = client.connect().await.unwrap();
    assert_eq!(body, json!({"expires_in": 1800, "access_token": "deadbeef"}));
    assert!(client.is_connected());

    Mock::given(method("GET"))
        .and(path("/articles.json"))
        .and(query_param("teamIds", "HV71"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"article_id": "a1", "title": "SM-guld", "team_code": "HV71"}
        ])))
        .mount(&server)
        .await;
    let articles = client.get_articles(&["HV71".to_string()]).await.unwrap();
    assert_eq!(
        articles,
        json!([{"article_id": "a1", "title": "SM-guld", "team_code": "HV71"}])
    );

    Mock::given(method("GET"))
        .and(path("/seasons/2022/games.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"test": "me"})))
        .mount(&server)
        .await;
    let games = client.get_games(2022, &["HV71".to_string()]).await.unwrap();
    assert_eq!(games, json!({"test": "me"}));

    Mock::given(method("GET"))
        .and(path("/seasons/2022/games/m1234.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"try": "me2"})))
        .mount(&server)
        .await;
    let game = client.get_game(2022, "m1234").await.unwrap();
    assert_eq!(game, json!({"try": "me2"}));

    Mock::given(method("GET"))
        .and(path("/seasons/2022/statistics/players.json"))
        .and(query_param("sort", "plusminus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    client
        .get_player_stats(2022, "plusminus", &[])
        .await
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/seasons/2022/statistics/goalkeepers.json"))
        .and(query_param("sort", "savesPercent"))
        .and(query_param("team_ids", "HV71"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    client
        .get_goalie_stats(2022, "savesPercent", &["HV71".to_string()])
        .await
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/teams.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"code": "HV71"}])))
        .mount(&server)
        .await;
    let teams = client.get_teams().await.unwrap();
    assert_eq!(teams, json!([{"code": "HV71"}]));

    Mock::given(method("GET"))
        .and(path("/seasons/2022/statistics/teams/standings.json"))
        .and(query_param("team_ids", "HV71,LHC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    client
        .get_team_stats(2022, client.default_team_ids())
        .await
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/teams/HV71.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"facts": {}})))
        .mount(&server)
        .await;
    let team = client.get_team("HV71").await.unwrap();
    assert_eq!(team, json!({"facts": {}}));

    Mock::given(method("GET"))
        .and(path("/videos.json"))
        .and(query_param_is_missing("team_ids"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    client.get_videos(&[]).await.unwrap();
}

#[tokio::test]
async fn test_aggregate_fetch_returns_both_payloads() {
    let server = MockServer::start().await;
    let client = create_client(&server);
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/seasons/2022/games.json"))
        .and(query_param("teamIds", "HV71,LHC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"game_id": 7}])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/articles.json"))
        .and(query_param("teamIds", "HV71,LHC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"article_id": "a2"}])))
        .mount(&server)
        .await;

    let data = client
        .get_data(2022, client.default_team_ids())
        .await
        .unwrap();
    assert_eq!(data.games, json!([{"game_id": 7}]));
    assert_eq!(data.articles, json!([{"article_id": "a2"}]));
}

#[tokio::test]
async fn test_aggregate_fetch_aborts_on_first_failure() {
    let server = MockServer::start().await;
    let client = create_client(&server);
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/seasons/2022/games.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    // The articles endpoint must never be hit when games already failed.
    Mock::given(method("GET"))
        .and(path("/articles.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let result = client.get_data(2022, &[]).await;
    assert!(matches!(
        result,
        Err(ApiError::ApiFailure { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_expired_token_triggers_reconnect_on_next_call() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    // First token expires immediately, second one is long-lived.
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expires_in": 0,
            "access_token": "short-lived"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expires_in": 1800,
            "access_token": "fresh"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/teams.json"))
        .and(wiremock::matchers::header("Authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client.connect().await.unwrap();
    assert!(!client.is_connected());

    // The executor notices the expired token and reconnects before the GET.
    client.get_teams().await.unwrap();
    assert!(client.is_connected());
}

#[tokio::test]
async fn test_failure_categories_map_to_typed_errors() {
    let server = MockServer::start().await;
    let client = create_client(&server).with_request_timeout(Duration::from_millis(250));
    mount_token(&server).await;
    client.connect().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/articles.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    assert!(matches!(
        client.get_articles(&[]).await,
        Err(ApiError::ApiParse { .. })
    ));

    Mock::given(method("GET"))
        .and(path("/videos.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    assert!(matches!(
        client.get_videos(&[]).await,
        Err(ApiError::ApiFailure { status: 404, .. })
    ));

    Mock::given(method("GET"))
        .and(path("/teams.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    assert!(matches!(
        client.get_teams().await,
        Err(ApiError::NetworkTimeout { .. })
    ));
}
