mod common;

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use smart_city_admin::{
    dto::auth::Claims,
    error::ClientError,
    models::Role,
    navigation::{HEALTH_ROUTE, LOGIN_ROUTE, Navigator},
    session::{SessionManager, keys},
    storage::KeyValueStore,
    views::{listing::ListingScreen, resources::Vendors},
};

#[tokio::test]
async fn login_persists_the_session_and_authorizes_requests() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.login_as("superadmin").await?;

    let login = h.backend.calls("POST", "/user/login");
    assert_eq!(login[0].body, json!({ "email": "sara@example.com", "password": "secret1" }));
    assert_eq!(h.store.get(keys::TOKEN).as_deref(), Some("tok-1"));
    assert_eq!(h.store.get(keys::PROFILE_ID).as_deref(), Some("u-42"));
    assert_eq!(h.store.get(keys::ROLE).as_deref(), Some("superadmin"));
    assert_eq!(h.store.get(keys::NAME).as_deref(), Some("Sara Khan"));
    assert_eq!(h.store.get(keys::LOGIN).as_deref(), Some("true"));
    assert_eq!(h.history.current(), HEALTH_ROUTE);
    assert_eq!(h.state.session.role(), Some(Role::Superadmin));

    let mut listing = ListingScreen::new(Vendors);
    listing.refresh(&h.state.api).await;
    let fetch = h.backend.calls("GET", "/vendors");
    assert_eq!(fetch[0].bearer.as_deref(), Some("tok-1"));
    Ok(())
}

#[tokio::test]
async fn wrong_credentials_leave_no_session() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend
        .reply("POST", "/user/login", 400, json!({ "message": "Invalid credentials" }));

    let err = h
        .state
        .session
        .login("sara@example.com", "nope")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Api { ref message, .. } if message == "Invalid credentials"));
    assert!(!h.state.session.is_logged_in());
    assert!(h.store.keys().is_empty());
    assert_eq!(h.history.current(), LOGIN_ROUTE);
    Ok(())
}

#[tokio::test]
async fn unauthorized_response_redirects_once() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply("GET", "/vendors", 401, json!({ "message": "jwt expired" }));

    let mut listing = ListingScreen::new(Vendors);
    listing.refresh(&h.state.api).await;
    assert_eq!(h.history.current(), HEALTH_ROUTE);

    // already on the redirect target: no second navigation
    listing.refresh(&h.state.api).await;
    assert_eq!(h.history.entries(), vec![LOGIN_ROUTE.to_string(), HEALTH_ROUTE.to_string()]);
    Ok(())
}

#[tokio::test]
async fn logout_clears_every_key() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.login_as("user").await?;

    h.state.session.logout()?;

    assert!(h.store.keys().is_empty());
    assert!(!h.state.session.is_logged_in());
    assert_eq!(h.state.api.token(), None);
    assert_eq!(h.history.current(), LOGIN_ROUTE);
    Ok(())
}

#[tokio::test]
async fn register_creates_a_user_account_then_logs_in() -> anyhow::Result<()> {
    let h = common::harness().await?;
    h.backend.reply(
        "POST",
        "/user/login",
        200,
        json!({ "token": "tok-2", "uid": "u-7", "role": "user" }),
    );

    let user = h
        .state
        .session
        .register("new@example.com", "secret1", "Nadia", "Ali")
        .await?;

    let create = h.backend.calls("POST", "/user/create");
    assert_eq!(
        create[0].body,
        json!({
            "firstname": "Nadia",
            "lastname": "Ali",
            "role": "user",
            "email": "new@example.com",
            "password": "secret1"
        })
    );
    assert_eq!(user.role, Role::User);
    assert_eq!(h.store.get(keys::TOKEN).as_deref(), Some("tok-2"));
    // the caller decides where to go after signing up
    assert_eq!(h.history.entries(), vec![LOGIN_ROUTE.to_string()]);
    Ok(())
}

#[tokio::test]
async fn restore_accepts_only_unexpired_tokens() -> anyhow::Result<()> {
    let h = common::harness().await?;
    let now = Utc::now();
    let claims = Claims {
        sub: Some("u-42".into()),
        role: Some("user".into()),
        exp: (now + Duration::hours(2)).timestamp() as u64,
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"server"))?;
    h.store.set(keys::TOKEN, &token)?;
    h.store.set(keys::ROLE, "user")?;
    h.store.set(keys::PROFILE_ID, "u-42")?;

    let session = SessionManager::new(h.store.clone(), h.state.api.clone());
    assert!(session.restore(now));
    assert_eq!(session.profile_id().as_deref(), Some("u-42"));
    assert_eq!(h.state.api.token().as_deref(), Some(token.as_str()));

    assert!(!session.restore(now + Duration::hours(3)));
    assert!(!session.is_logged_in());
    Ok(())
}
