use library_ledger::utils::constants::SESSION_COOKIE_NAME;
use reqwest::{cookie::CookieStore, Url};
use test_context::test_context;

use crate::helpers::{get_session, TestApp};

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_if_valid_session_cookie(app: &mut TestApp) {
    get_session(app).await;
    assert_eq!(app.credential_store.is_logged_in().await, Ok(true));

    let response = app.post_logout().await;
    assert_eq!(
        response.status().as_u16(),
        200,
        "Unexpected error logging out"
    );

    let auth_cookie = response
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .expect("No auth cookie found");
    assert!(auth_cookie.value().is_empty());

    assert_eq!(app.credential_store.is_logged_in().await, Ok(false));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_logout_called_twice_in_a_row(app: &mut TestApp) {
    get_session(app).await;

    assert_eq!(app.post_logout().await.status().as_u16(), 200);
    assert_eq!(app.post_logout().await.status().as_u16(), 400);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_session_cookie_missing(app: &mut TestApp) {
    let response = app.post_logout().await;
    assert_eq!(response.status().as_u16(), 400);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_if_invalid_token(app: &mut TestApp) {
    app.cookie_jar.add_cookie_str(
        &format!(
            "{}=invalid; HttpOnly; SameSite=Lax; Path=/",
            SESSION_COOKIE_NAME
        ),
        &Url::parse(&app.address).expect("Failed to parse URL"),
    );

    let response = app.post_logout().await;

    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_old_session_after_logout(app: &mut TestApp) {
    get_session(app).await;

    let session_cookie = app
        .cookie_jar
        .cookies(&Url::parse(&app.address).unwrap())
        .expect("No cookies stored")
        .to_str()
        .unwrap()
        .to_owned();

    assert_eq!(app.post_logout().await.status().as_u16(), 200);

    // Replay the token the server handed out before logging out.
    app.cookie_jar.add_cookie_str(
        &format!("{session_cookie}; Path=/"),
        &Url::parse(&app.address).unwrap(),
    );
    assert_eq!(app.get_years().await.status().as_u16(), 401);
    assert_eq!(app.post_logout().await.status().as_u16(), 401);
}
