use super::*;

#[test]
fn sign_up_payload_serializes_without_confirmation() {
    let payload = SignUpPayload {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "secret".to_owned(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "name": "Alice", "email": "alice@example.com", "password": "secret" })
    );
}

#[test]
fn social_payload_uses_backend_field_names() {
    let payload = SocialSignInPayload {
        provider: SocialProvider::GitHub,
        callback_url: "/".to_owned(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({ "provider": "github", "callbackURL": "/" }));
}

#[test]
fn social_provider_id_matches_serde_name() {
    for provider in SocialProvider::ALL {
        let json = serde_json::to_value(provider).unwrap();
        assert_eq!(json, serde_json::Value::String(provider.id().to_owned()));
    }
}

#[test]
fn session_deserializes_camel_case_fields() {
    let raw = r#"{
        "session": { "id": "s1", "userId": "u1", "expiresAt": "2026-01-01T00:00:00Z", "token": "ignored" },
        "user": { "id": "u1", "name": "Bob", "email": "bob@example.com", "emailVerified": true }
    }"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.session.user_id, "u1");
    assert_eq!(session.user.name, "Bob");
    assert!(session.user.email_verified);
    assert!(session.user.image.is_none());
}

#[test]
fn error_body_tolerates_missing_fields() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body, ErrorBody::default());
    let body: ErrorBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn social_response_defaults_redirect_flag() {
    let body: SocialSignInResponse = serde_json::from_str(r#"{"url":"https://github.com/login"}"#).unwrap();
    assert_eq!(body.url.as_deref(), Some("https://github.com/login"));
    assert!(!body.redirect);
}
