//! Google 엔드포인트를 wiremock으로 대체한 파사드 통합 테스트

use chrono::Utc;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::errors::AuthError;
use crate::services::auth::test_support::*;

#[tokio::test]
async fn test_exchange_code_returns_token_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=4%2F0AX4XfWh"))
        .and(body_string_contains("client_secret=test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.a0AfH6SM",
            "expires_in": 3599,
            "refresh_token": "1//0gLk",
            "scope": "https://www.googleapis.com/auth/userinfo.email",
            "token_type": "Bearer",
            "id_token": "eyJhbGciOi.fake.sig"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let before = Utc::now().timestamp_millis();
    let tokens = service.exchange_code("4/0AX4XfWh").await.unwrap();

    assert_eq!(tokens.access_token, "ya29.a0AfH6SM");
    assert_eq!(tokens.refresh_token.as_deref(), Some("1//0gLk"));
    assert_eq!(tokens.id_token.as_deref(), Some("eyJhbGciOi.fake.sig"));
    assert_eq!(tokens.expires_in, Some(3599));
    assert!(tokens.expiry_date.unwrap() >= before + 3_599_000);
}

#[tokio::test]
async fn test_exchange_code_rejected_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Bad Request"
        })))
        .mount(&server)
        .await;

    let result = service_for(&server).exchange_code("used-code").await;

    match result {
        Err(AuthError::TokenExchange(msg)) => assert!(msg.contains("invalid_grant")),
        other => panic!("Expected TokenExchange error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_user_profile_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth2/v1/userinfo"))
        .and(query_param("alt", "json"))
        .and(header("authorization", "Bearer ya29.valid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "110169484474386276334",
            "email": "jane@example.com",
            "verified_email": true,
            "name": "Jane Doe",
            "given_name": "Jane",
            "picture": "https://lh3.googleusercontent.com/a/photo.jpg"
        })))
        .mount(&server)
        .await;

    let profile = service_for(&server).user_profile("ya29.valid").await.unwrap();

    assert_eq!(profile.id, "110169484474386276334");
    assert_eq!(profile.email, "jane@example.com");
    assert_eq!(profile.name, "Jane Doe");
    assert_eq!(profile.verified_email, Some(true));
    assert!(profile.picture.is_some());
}

#[tokio::test]
async fn test_user_profile_absent_optionals_stay_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth2/v1/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "email": "bob@example.com",
            "name": "Bob"
        })))
        .mount(&server)
        .await;

    let profile = service_for(&server).user_profile("ya29.valid").await.unwrap();

    assert_eq!(profile.picture, None);
    assert_eq!(profile.verified_email, None);
}

#[tokio::test]
async fn test_concurrent_user_profiles_keep_their_own_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth2/v1/userinfo"))
        .and(header("authorization", "Bearer ya29.alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "email": "alice@example.com",
            "name": "Alice"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/oauth2/v1/userinfo"))
        .and(header("authorization", "Bearer ya29.bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "2",
            "email": "bob@example.com",
            "name": "Bob"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let service = service_for(&server);

    let (alice, bob) = tokio::join!(
        service.user_profile("ya29.alice"),
        service.user_profile("ya29.bob")
    );

    assert_eq!(alice.unwrap().email, "alice@example.com");
    assert_eq!(bob.unwrap().email, "bob@example.com");
}

#[tokio::test]
async fn test_user_profile_expired_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth2/v1/userinfo"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "code": 401,
                "message": "Request had invalid authentication credentials.",
                "status": "UNAUTHENTICATED"
            }
        })))
        .mount(&server)
        .await;

    let result = service_for(&server).user_profile("ya29.expired").await;

    match result {
        Err(AuthError::ProfileFetch(msg)) => assert!(msg.starts_with("401")),
        other => panic!("Expected ProfileFetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_refresh_keeps_supplied_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=1%2F%2F0gLk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.fresh",
            "expires_in": 3599,
            "token_type": "Bearer"
        })))
        .mount(&server)
        .await;

    let tokens = service_for(&server).refresh_access_token("1//0gLk").await.unwrap();

    assert_eq!(tokens.access_token, "ya29.fresh");
    assert_eq!(tokens.refresh_token.as_deref(), Some("1//0gLk"));
}

#[tokio::test]
async fn test_refresh_prefers_rotated_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.fresh",
            "refresh_token": "1//rotated",
            "token_type": "Bearer"
        })))
        .mount(&server)
        .await;

    let tokens = service_for(&server).refresh_access_token("1//0gLk").await.unwrap();

    assert_eq!(tokens.refresh_token.as_deref(), Some("1//rotated"));
}

#[tokio::test]
async fn test_refresh_revoked_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Token has been expired or revoked."
        })))
        .mount(&server)
        .await;

    let result = service_for(&server).refresh_access_token("1//revoked").await;

    assert!(matches!(result, Err(AuthError::TokenRefresh(_))));
}

#[tokio::test]
async fn test_revoke_token_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/revoke"))
        .and(body_string_contains("token=ya29.valid"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let revoked = service_for(&server).revoke_token("ya29.valid").await.unwrap();

    assert!(revoked);
}

#[tokio::test]
async fn test_revoke_token_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/revoke"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_token",
            "error_description": "Token expired or revoked"
        })))
        .mount(&server)
        .await;

    let result = service_for(&server).revoke_token("ya29.gone").await;

    assert!(matches!(result, Err(AuthError::TokenRevocation(_))));
}

#[tokio::test]
async fn test_verify_id_token_valid() {
    let server = MockServer::start().await;
    mount_jwks(&server).await;
    let token = mint_id_token(&standard_claims(TEST_CLIENT_ID));

    let payload = service_for(&server).verify_id_token(&token).await.unwrap();

    assert_eq!(payload.sub, "110169484474386276334");
    assert_eq!(payload.aud, TEST_CLIENT_ID);
    assert_eq!(payload.email.as_deref(), Some("jane@example.com"));
    assert_eq!(payload.extra.get("azp"), None);
    assert_eq!(payload.azp.as_deref(), Some(TEST_CLIENT_ID));
}

#[tokio::test]
async fn test_verify_id_token_accepts_bare_issuer() {
    let server = MockServer::start().await;
    mount_jwks(&server).await;
    let mut claims = standard_claims(TEST_CLIENT_ID);
    claims["iss"] = json!("accounts.google.com");

    let payload = service_for(&server)
        .verify_id_token(&mint_id_token(&claims))
        .await
        .unwrap();

    assert_eq!(payload.iss, "accounts.google.com");
}

#[tokio::test]
async fn test_verify_id_token_caches_signing_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth2/v3/certs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jwks_json()))
        .expect(1)
        .mount(&server)
        .await;
    let service = service_for(&server);
    let token = mint_id_token(&standard_claims(TEST_CLIENT_ID));

    assert!(service.verify_id_token(&token).await.is_ok());
    assert!(service.verify_id_token(&token).await.is_ok());
}

#[tokio::test]
async fn test_verify_id_token_wrong_audience() {
    let server = MockServer::start().await;
    mount_jwks(&server).await;
    let token = mint_id_token(&standard_claims("someone-else.apps.googleusercontent.com"));

    let result = service_for(&server).verify_id_token(&token).await;

    match result {
        Err(AuthError::TokenVerification(msg)) => assert_eq!(msg, "audience mismatch"),
        other => panic!("Expected TokenVerification error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_verify_id_token_wrong_issuer() {
    let server = MockServer::start().await;
    mount_jwks(&server).await;
    let mut claims = standard_claims(TEST_CLIENT_ID);
    claims["iss"] = json!("https://evil.example.com");

    let result = service_for(&server).verify_id_token(&mint_id_token(&claims)).await;

    assert!(matches!(result, Err(AuthError::TokenVerification(_))));
}

#[tokio::test]
async fn test_verify_id_token_expired() {
    let server = MockServer::start().await;
    mount_jwks(&server).await;
    let now = Utc::now().timestamp();
    let mut claims = standard_claims(TEST_CLIENT_ID);
    claims["iat"] = json!(now - 7200);
    claims["exp"] = json!(now - 3600);

    let result = service_for(&server).verify_id_token(&mint_id_token(&claims)).await;

    match result {
        Err(AuthError::TokenVerification(msg)) => assert_eq!(msg, "token expired"),
        other => panic!("Expected TokenVerification error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_verify_id_token_tampered_payload() {
    let server = MockServer::start().await;
    mount_jwks(&server).await;
    let token = tamper_email(&mint_id_token(&standard_claims(TEST_CLIENT_ID)));

    let result = service_for(&server).verify_id_token(&token).await;

    assert!(matches!(result, Err(AuthError::TokenVerification(_))));
}

#[tokio::test]
async fn test_verify_id_token_unknown_kid_refetches_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth2/v3/certs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jwks_json()))
        .expect(2)
        .mount(&server)
        .await;
    let token = mint_id_token_with_kid(&standard_claims(TEST_CLIENT_ID), "rotated-away");

    let result = service_for(&server).verify_id_token(&token).await;

    match result {
        Err(AuthError::TokenVerification(msg)) => assert!(msg.contains("rotated-away")),
        other => panic!("Expected TokenVerification error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_verify_id_token_unknown_kids_do_not_refetch_repeatedly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth2/v3/certs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jwks_json()))
        .expect(2)
        .mount(&server)
        .await;
    let service = service_for(&server);
    let valid = mint_id_token(&standard_claims(TEST_CLIENT_ID));

    assert!(service.verify_id_token(&valid).await.is_ok());
    for i in 0..20 {
        let token = mint_id_token_with_kid(&standard_claims(TEST_CLIENT_ID), &format!("unknown-{}", i));
        let result = service.verify_id_token(&token).await;

        match result {
            Err(AuthError::TokenVerification(msg)) => assert!(msg.contains(&format!("unknown-{}", i))),
            other => panic!("Expected TokenVerification error, got {:?}", other),
        }
    }
    assert!(service.verify_id_token(&valid).await.is_ok());
}

#[tokio::test]
async fn test_verify_id_token_garbage_input() {
    let server = MockServer::start().await;

    let result = service_for(&server).verify_id_token("not-a-jwt").await;

    assert!(matches!(result, Err(AuthError::TokenVerification(_))));
}
