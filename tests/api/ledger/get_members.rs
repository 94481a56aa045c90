use library_ledger::domain::{KeyValueStore, Year};
use serde_json::json;
use test_context::test_context;

use crate::helpers::{
    add_named_member, get_json_response_body, get_session, TestApp,
};

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_table_with_summary(app: &mut TestApp) {
    get_session(app).await;
    let first = add_named_member(app, 2025, "Asha", "9876500001").await;
    let second = add_named_member(app, 2025, "Ravi", "9123400002").await;

    let shifts = [
        (&first, "6:00 AM - 10:00 AM"),
        (&first, "10:00 AM - 2:00 PM"),
        (&second, "10:00 PM - 2:00 AM"),
    ];
    for (member_id, shift) in shifts {
        let body = json!({ "year": 2025, "shift": shift, "selected": true });
        let response = app.put_member_shift(member_id, &body).await;
        assert_eq!(response.status().as_u16(), 200);
    }

    let payments = [(&first, "Jan"), (&first, "Feb"), (&second, "Mar")];
    for (member_id, month) in payments {
        let body = json!({ "year": 2025, "month": month, "paid": true });
        let response = app.put_member_payment(member_id, &body).await;
        assert_eq!(response.status().as_u16(), 200);
    }

    let response = app.get_members(&[("year", "2025")]).await;
    assert_eq!(response.status().as_u16(), 200);
    let body = get_json_response_body(response).await;

    assert_eq!(body["year"], 2025);
    assert_eq!(body["search"], "");
    assert_eq!(body["rows"][0]["id"], first.as_str());
    assert_eq!(body["rows"][1]["id"], second.as_str());
    assert_eq!(body["rows"][0]["billing"]["total"], 2000);
    assert_eq!(body["rows"][1]["billing"]["total"], 500);
    assert_eq!(
        body["summary"],
        json!({ "visibleCount": 2, "visibleTotal": 2500 })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_filter_by_mobile_number(app: &mut TestApp) {
    get_session(app).await;
    add_named_member(app, 2025, "Asha", "9876500001").await;
    let ravi = add_named_member(app, 2025, "Ravi", "9123400002").await;

    let response = app
        .get_members(&[("year", "2025"), ("search", " 91234 ")])
        .await;
    let body = get_json_response_body(response).await;
    assert_eq!(body["search"], "91234");
    assert_eq!(body["rows"].as_array().unwrap().len(), 1);
    assert_eq!(body["rows"][0]["id"], ravi.as_str());
    assert_eq!(body["summary"]["visibleCount"], 1);

    let response = app
        .get_members(&[("year", "2025"), ("search", "000")])
        .await;
    let body = get_json_response_body(response).await;
    assert_eq!(body["rows"], json!([]));
    assert_eq!(
        body["summary"],
        json!({ "visibleCount": 0, "visibleTotal": 0 })
    );

    // Filtering never touches storage.
    let stored = app
        .ledger
        .load_year(Year::parse(2025).unwrap())
        .await
        .unwrap();
    assert_eq!(stored.len(), 2);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_empty_table_for_year_without_members(app: &mut TestApp) {
    get_session(app).await;
    add_named_member(app, 2025, "Asha", "9876500001").await;

    let body = get_json_response_body(app.get_members(&[("year", "2019")]).await).await;
    assert_eq!(body["year"], 2019);
    assert_eq!(body["rows"], json!([]));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_migrate_legacy_ledger(app: &mut TestApp) {
    get_session(app).await;

    let legacy = json!({
        "2024": [
            {
                "doj": "05/03/2024",
                "mobile": "9000000001",
                "name": "Old Member",
                "selectedShifts": ["6:00 AM - 10:00 AM", "Not a shift"],
                "payments": { "Jan": true, "Feb": false, "Smarch": true }
            },
            {
                "doj": "06/03/2024",
                "mobile": "9000000002",
                "name": "Single Shift",
                "shift": "6:00 PM - 10:00 PM",
                "payments": { "Apr": true }
            }
        ]
    });
    app.key_value_store
        .write()
        .await
        .set("libraryMembersAllYears", legacy.to_string())
        .await
        .unwrap();

    let first = get_json_response_body(app.get_members(&[("year", "2024")]).await).await;
    let rows = first["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Old Member");
    assert_eq!(rows[0]["dateOfJoining"], "05/03/2024");
    assert_eq!(rows[0]["billing"]["shiftCount"], 1);
    assert_eq!(rows[0]["billing"]["monthsPaid"], 1);
    assert_eq!(rows[1]["billing"]["total"], 500);

    // Ids handed out on the first read keep working afterwards.
    let second = get_json_response_body(app.get_members(&[("year", "2024")]).await).await;
    assert_eq!(first["rows"], second["rows"]);

    let member_id = rows[1]["id"].as_str().unwrap();
    let body = json!({ "year": 2024, "month": "May", "paid": true });
    let response = app.put_member_payment(member_id, &body).await;
    assert_eq!(response.status().as_u16(), 200);

    let stored = app
        .key_value_store
        .read()
        .await
        .get("libraryMembersAllYears")
        .await
        .unwrap()
        .unwrap();
    let stored: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(stored["version"], 2);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_treat_malformed_ledger_as_empty(app: &mut TestApp) {
    get_session(app).await;
    app.key_value_store
        .write()
        .await
        .set("libraryMembersAllYears", "{not json".to_owned())
        .await
        .unwrap();

    let response = app.get_members(&[("year", "2025")]).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(get_json_response_body(response).await["rows"], json!([]));
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_invalid_year(app: &mut TestApp) {
    get_session(app).await;
    let response = app.get_members(&[("year", "12")]).await;
    assert_eq!(response.status().as_u16(), 400);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_without_session(app: &mut TestApp) {
    let response = app.get_members(&[("year", "2025")]).await;
    assert_eq!(response.status().as_u16(), 400);
}
