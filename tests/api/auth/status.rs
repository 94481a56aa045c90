use test_context::test_context;

use crate::helpers::{
    get_json_response_body, get_session, login, logout, setup_admin, TestApp,
    PASSWORD, USERNAME,
};

#[test_context(TestApp)]
#[tokio::test]
async fn should_follow_the_screen_state_machine(app: &mut TestApp) {
    let expectations = [
        (false, false, "FirstRunSetup"),
        (true, false, "LoggedOut"),
        (true, true, "LoggedIn"),
        (true, false, "LoggedOut"),
    ];

    for (step, (admin_exists, logged_in, screen)) in
        expectations.into_iter().enumerate()
    {
        match step {
            1 => setup_admin(app, USERNAME, PASSWORD).await,
            2 => login(app, USERNAME, PASSWORD).await,
            3 => logout(app).await,
            _ => (),
        }

        let response = app.get_status().await;
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(
            get_json_response_body(response).await,
            serde_json::json!({
                "adminExists": admin_exists,
                "loggedIn": logged_in,
                "screen": screen
            }),
            "Unexpected status at step {step}"
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_report_logged_out_for_garbage_cookie(app: &mut TestApp) {
    get_session(app).await;
    app.cookie_jar.add_cookie_str(
        "session=garbage; Path=/",
        &reqwest::Url::parse(&app.address).unwrap(),
    );

    let body = get_json_response_body(app.get_status().await).await;
    assert_eq!(body["loggedIn"], false);
    assert_eq!(body["screen"], "LoggedOut");
}
