use library_ledger::{
    domain::{MemberId, Shift, Year},
    ErrorResponse,
};
use serde_json::json;
use test_context::test_context;

use crate::helpers::{add_member, get_json_response_body, get_session, TestApp};

#[test_context(TestApp)]
#[tokio::test]
async fn should_toggle_shift_and_recompute_billing(app: &mut TestApp) {
    get_session(app).await;
    let member_id = add_member(app, 2025).await;

    let body = json!({ "year": 2025, "month": "Jan", "paid": true });
    app.put_member_payment(&member_id, &body).await;

    let body = json!({ "year": 2025, "shift": "2:00 PM - 6:00 PM", "selected": true });
    let response = app.put_member_shift(&member_id, &body).await;
    assert_eq!(response.status().as_u16(), 200);

    let row = get_json_response_body(response).await;
    assert_eq!(row["shifts"][2], json!({ "label": "2:00 PM - 6:00 PM", "selected": true }));
    assert_eq!(row["billing"]["shiftCount"], 1);
    assert_eq!(row["billing"]["monthlyCharge"], 500);
    assert_eq!(row["billing"]["total"], 500);

    let stored = app
        .ledger
        .get_member(
            Year::parse(2025).unwrap(),
            &MemberId::parse(&member_id).unwrap(),
        )
        .await
        .unwrap();
    assert!(stored.selected_shifts.contains(&Shift::Afternoon));

    let body = json!({ "year": 2025, "shift": "2:00 PM - 6:00 PM", "selected": false });
    let row = get_json_response_body(app.put_member_shift(&member_id, &body).await).await;
    assert_eq!(row["shifts"][2]["selected"], false);
    assert_eq!(row["billing"]["total"], 0);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_be_idempotent(app: &mut TestApp) {
    get_session(app).await;
    let member_id = add_member(app, 2025).await;

    let body = json!({ "year": 2025, "shift": "2:00 AM - 6:00 AM", "selected": true });
    let first = get_json_response_body(app.put_member_shift(&member_id, &body).await).await;
    let second = get_json_response_body(app.put_member_shift(&member_id, &body).await).await;

    assert_eq!(first, second);
    assert_eq!(second["billing"]["shiftCount"], 1);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_unknown_shift(app: &mut TestApp) {
    get_session(app).await;
    let member_id = add_member(app, 2025).await;

    let body = json!({ "year": 2025, "shift": "9:00 AM - 5:00 PM", "selected": true });
    let response = app.put_member_shift(&member_id, &body).await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialize response body to ErrorResponse")
            .error,
        "Invalid shift: 9:00 AM - 5:00 PM"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_if_member_not_found(app: &mut TestApp) {
    get_session(app).await;

    let body = json!({ "year": 2025, "shift": "2:00 AM - 6:00 AM", "selected": true });
    let response = app
        .put_member_shift(&uuid::Uuid::new_v4().to_string(), &body)
        .await;
    assert_eq!(response.status().as_u16(), 404);
}
