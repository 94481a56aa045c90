use library_ledger::ErrorResponse;
use serde_json::json;
use test_context::test_context;

use crate::helpers::{add_member, add_named_member, get_session, TestApp};

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_printable_bill(app: &mut TestApp) {
    get_session(app).await;
    let member_id = add_named_member(app, 2025, "Kavita", "9876543210").await;

    let body = json!({ "year": 2025, "shift": "6:00 PM - 10:00 PM", "selected": true });
    app.put_member_shift(&member_id, &body).await;
    for month in ["Jan", "Feb", "Mar"] {
        let body = json!({ "year": 2025, "month": month, "paid": true });
        app.put_member_payment(&member_id, &body).await;
    }

    let response = app.get_bill(&member_id, 2025).await;
    assert_eq!(response.status().as_u16(), 200);

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .expect("No content type")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(content_type.starts_with("text/html"));

    let html = response.text().await.unwrap();
    for expected in [
        "Purainiya Library",
        "Aspirants Payment Bill",
        "Kavita",
        "9876543210",
        "6:00 PM - 10:00 PM",
        "₹1500",
        "window.print()",
    ] {
        assert!(html.contains(expected), "bill is missing {expected:?}");
    }
    assert_eq!(html.matches("class=\"month paid\"").count(), 3);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_name_or_mobile_missing(app: &mut TestApp) {
    get_session(app).await;
    let member_id = add_member(app, 2025).await;

    let response = app.get_bill(&member_id, 2025).await;
    assert_eq!(response.status().as_u16(), 422);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialize response body to ErrorResponse")
            .error,
        "Please fill member name and mobile number before printing bill!"
    );

    let body = json!({ "year": 2025, "field": "name", "value": "Kavita" });
    app.put_member_field(&member_id, &body).await;
    assert_eq!(app.get_bill(&member_id, 2025).await.status().as_u16(), 422);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_if_member_not_found(app: &mut TestApp) {
    get_session(app).await;
    let member_id = add_named_member(app, 2025, "Kavita", "9876543210").await;

    assert_eq!(app.get_bill(&member_id, 2024).await.status().as_u16(), 404);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_without_session(app: &mut TestApp) {
    let response = app
        .get_bill(&uuid::Uuid::new_v4().to_string(), 2025)
        .await;
    assert_eq!(response.status().as_u16(), 400);
}
