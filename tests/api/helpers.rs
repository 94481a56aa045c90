use library_ledger::{
    app_state::{AppState, KeyValueStoreType},
    services::{data_stores::HashmapKeyValueStore, CredentialStore, LedgerRepository},
    utils::constants::test,
    Application,
};
use reqwest::{cookie::Jar, Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::sync::RwLock;

pub const USERNAME: &str = "librarian";
pub const PASSWORD: &str = "shelf-42";

pub struct TestApp {
    pub address: String,
    pub cookie_jar: Arc<Jar>,
    pub http_client: reqwest::Client,
    pub key_value_store: KeyValueStoreType,
    pub credential_store: CredentialStore,
    pub ledger: LedgerRepository,
}

impl TestApp {
    pub async fn new() -> Self {
        let key_value_store: KeyValueStoreType =
            Arc::new(RwLock::new(HashmapKeyValueStore::default()));
        let app_state = AppState::new(key_value_store.clone());
        let credential_store = app_state.credential_store.clone();
        let ledger = app_state.ledger.clone();

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let cookie_jar = Arc::new(Jar::default());
        let http_client = reqwest::Client::builder()
            .cookie_provider(cookie_jar.clone())
            .build()
            .unwrap();

        Self {
            address,
            cookie_jar,
            http_client,
            key_value_store,
            credential_store,
            ledger,
        }
    }

    pub async fn get_index(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_status(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/auth/status", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_setup<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/auth/setup", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/auth/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_logout(&self) -> reqwest::Response {
        self.http_client
            .post(format!("{}/auth/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_years(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/ledger/years", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_members(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .get(format!("{}/ledger/members", &self.address))
            .query(query)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_member<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/ledger/members", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_member_field<Body>(
        &self,
        member_id: &str,
        body: &Body,
    ) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.put_member("field", member_id, body).await
    }

    pub async fn put_member_shift<Body>(
        &self,
        member_id: &str,
        body: &Body,
    ) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.put_member("shift", member_id, body).await
    }

    pub async fn put_member_payment<Body>(
        &self,
        member_id: &str,
        body: &Body,
    ) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.put_member("payment", member_id, body).await
    }

    async fn put_member<Body>(
        &self,
        path: &str,
        member_id: &str,
        body: &Body,
    ) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .put(format!("{}/ledger/members/{path}", &self.address))
            .json(body)
            .query(&[("memberId", member_id)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_bill(&self, member_id: &str, year: i32) -> reqwest::Response {
        self.http_client
            .get(format!("{}/ledger/members/bill", &self.address))
            .query(&[("memberId", member_id.to_owned()), ("year", year.to_string())])
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }

    async fn teardown(self) {}
}

pub async fn get_json_response_body(response: Response) -> Value {
    let body: Value = response
        .json()
        .await
        .expect("failed to parse response body JSON");
    body
}

pub async fn setup_admin(app: &mut TestApp, username: &str, password: &str) {
    assert_eq!(
        app.post_setup(&serde_json::json!({
            "username": username,
            "password": password,
            "confirmPassword": password
        }))
        .await
        .status(),
        StatusCode::CREATED,
        "Failed to create admin {username}"
    );
}

pub async fn login(app: &mut TestApp, username: &str, password: &str) {
    let status = app
        .post_login(&serde_json::json!({
            "username": username,
            "password": password
        }))
        .await
        .status();
    assert_eq!(
        status,
        StatusCode::OK,
        "Failed to log in. username: {username}, password: {password}"
    );
}

pub async fn logout(app: &mut TestApp) {
    assert_eq!(
        app.post_logout().await.status().as_u16(),
        200,
        "Failed to log out"
    );
}

/// Creates the admin account and logs in with it.
pub async fn get_session(app: &mut TestApp) {
    setup_admin(app, USERNAME, PASSWORD).await;
    login(app, USERNAME, PASSWORD).await;
}

/// Adds a blank member to `year` and returns its id.
pub async fn add_member(app: &mut TestApp, year: i32) -> String {
    let response = app.post_member(&serde_json::json!({ "year": year })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = get_json_response_body(response).await;
    body.get("id")
        .expect("Failed to read id from JSON response")
        .as_str()
        .expect("Failed to create str from id field")
        .to_owned()
}

/// Adds a member with a name and mobile number filled in.
pub async fn add_named_member(
    app: &mut TestApp,
    year: i32,
    name: &str,
    mobile_number: &str,
) -> String {
    let member_id = add_member(app, year).await;
    for (field, value) in [("name", name), ("mobileNumber", mobile_number)] {
        let response = app
            .put_member_field(
                &member_id,
                &serde_json::json!({ "year": year, "field": field, "value": value }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK, "Failed to set {field}");
    }
    member_id
}
