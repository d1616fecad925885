use serde_json::Value;

use crate::tests::utils::{dispatch, get, post_json, read_json, read_text};

const FULL_REGISTRY: &str = r#"{
    "interests": [
        { "id": "reg-1", "recordedDate": "2018-03-15", "kind": "ownership-transfer",
          "holder": "Park Jiyoon" },
        { "id": "reg-2", "recordedDate": "2019-05-20", "kind": "mortgage",
          "holder": "KB Kookmin Bank", "amount": 360000000 },
        { "id": "reg-3", "recordedDate": "2023-11-05", "kind": "provisional-seizure",
          "holder": "Seoul Central District Court", "amount": 50000000 }
    ],
    "tenants": [
        { "id": "tenant-1", "moveInDate": "2019-03-10", "confirmedDate": "2019-03-12",
          "depositAmount": 120000000 }
    ]
}"#;

fn find<'a>(body: &'a Value, list: &str, key: &str, id: &str) -> &'a Value {
    body[list]
        .as_array()
        .unwrap_or_else(|| panic!("{list} missing from response"))
        .iter()
        .find(|c| c[key] == id)
        .unwrap_or_else(|| panic!("no entry for \"{id}\" in {list}"))
}

#[test]
fn full_analysis_classifies_each_right() {
    let resp = dispatch(post_json("/analysis/lien-priority", FULL_REGISTRY));
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json; charset=utf-8"
    );

    let body = read_json(resp);
    assert_eq!(body["baselineRightId"], "reg-2");

    let transfer = find(&body, "interestClassifications", "interestId", "reg-1");
    assert_eq!(transfer["disposition"], "not-applicable");

    let mortgage = find(&body, "interestClassifications", "interestId", "reg-2");
    assert_eq!(mortgage["disposition"], "extinguished");
    assert_eq!(
        mortgage["reason"],
        "baseline right; satisfied from auction proceeds"
    );

    let seizure = find(&body, "interestClassifications", "interestId", "reg-3");
    assert_eq!(seizure["disposition"], "extinguished");
    assert_eq!(seizure["reason"], "recorded after baseline right");

    // Moved in 2019-03-10, protected from 2019-03-11, well before the baseline.
    let tenant = find(&body, "tenantClassifications", "tenantId", "tenant-1");
    assert_eq!(tenant["disposition"], "assumed");

    assert!(body["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn registry_without_candidates_flags_manual_review() {
    let resp = dispatch(post_json(
        "/analysis/lien-priority",
        r#"{
            "interests": [
                { "id": "reg-1", "recordedDate": "2018-03-15",
                  "kind": "ownership-transfer", "holder": "Park Jiyoon" },
                { "id": "reg-2", "recordedDate": "2020-02-02",
                  "kind": "lease-registration", "holder": "Kim Minsu",
                  "amount": 80000000 }
            ],
            "tenants": [
                { "id": "tenant-1", "moveInDate": "2024-08-01", "depositAmount": 10000000 }
            ]
        }"#,
    ));
    assert_eq!(resp.status(), 200);

    let body = read_json(resp);
    assert_eq!(body["baselineRightId"], Value::Null);

    let lease = find(&body, "interestClassifications", "interestId", "reg-2");
    assert_eq!(lease["disposition"], "assumed");
    assert_eq!(lease["reason"], "no baseline right found");

    let tenant = find(&body, "tenantClassifications", "tenantId", "tenant-1");
    assert_eq!(tenant["disposition"], "assumed");

    let warnings = body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "AmbiguousBaseline");
}

#[test]
fn empty_payload_is_valid_but_flagged() {
    let resp = dispatch(post_json("/analysis/lien-priority", "{}"));
    assert_eq!(resp.status(), 200);

    let body = read_json(resp);
    assert_eq!(body["baselineRightId"], Value::Null);
    assert!(body["interestClassifications"].as_array().unwrap().is_empty());
    assert_eq!(body["warnings"][0]["code"], "AmbiguousBaseline");
}

#[test]
fn same_date_lease_listed_before_the_mortgage_survives() {
    let resp = dispatch(post_json(
        "/analysis/lien-priority",
        r#"{
            "interests": [
                { "id": "lease", "recordedDate": "2019-05-20",
                  "kind": "lease-registration", "holder": "Kim Minsu", "amount": 80000000 },
                { "id": "mortgage", "recordedDate": "2019-05-20",
                  "kind": "mortgage", "holder": "KB Kookmin Bank", "amount": 360000000 }
            ]
        }"#,
    ));
    assert_eq!(resp.status(), 200);

    let body = read_json(resp);
    assert_eq!(body["baselineRightId"], "mortgage");
    assert_eq!(
        find(&body, "interestClassifications", "interestId", "lease")["disposition"],
        "assumed"
    );
}

#[test]
fn malformed_json_is_a_bad_request() {
    let resp = dispatch(post_json("/analysis/lien-priority", "{ not json"));
    assert_eq!(resp.status(), 400);

    let body = read_json(resp);
    assert_eq!(body["error"], "BadRequest");
}

#[test]
fn unknown_kind_is_named_in_the_error() {
    let resp = dispatch(post_json(
        "/analysis/lien-priority",
        r#"{ "interests": [
            { "id": "reg-1", "recordedDate": "2019-05-20", "kind": "easement",
              "holder": "Kim Minsu" }
        ] }"#,
    ));
    assert_eq!(resp.status(), 400);

    let body = read_json(resp);
    assert_eq!(body["error"], "BadRequest");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("unknown variant"), "got: {message}");
}

#[test]
fn unparsable_recorded_date_is_a_bad_request() {
    let resp = dispatch(post_json(
        "/analysis/lien-priority",
        r#"{ "interests": [
            { "id": "reg-1", "recordedDate": "2019-13-45", "kind": "mortgage",
              "holder": "KB Kookmin Bank" }
        ] }"#,
    ));
    assert_eq!(resp.status(), 400);

    let body = read_json(resp);
    assert_eq!(body["error"], "BadRequest");
    // The date parser reports the bad value's position, not the field name.
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("invalid JSON body"), "got: {message}");
}

#[test]
fn oversized_body_is_rejected() {
    // 1 MiB cap; one byte over.
    let oversized = "x".repeat(1024 * 1024 + 1);
    let resp = dispatch(post_json("/analysis/lien-priority", &oversized));
    assert_eq!(resp.status(), 400);

    let body = read_json(resp);
    assert_eq!(body["error"], "BadRequest");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("request body exceeds"), "got: {message}");
}

#[test]
fn negative_amount_is_an_invalid_interest_set() {
    let resp = dispatch(post_json(
        "/analysis/lien-priority",
        r#"{ "interests": [
            { "id": "reg-1", "recordedDate": "2019-05-20", "kind": "mortgage",
              "holder": "KB Kookmin Bank", "amount": -50000 }
        ] }"#,
    ));
    assert_eq!(resp.status(), 400);

    let body = read_json(resp);
    assert_eq!(body["error"], "InvalidInterestSet");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("reg-1"), "got: {message}");
    assert!(message.contains("-50000"), "got: {message}");
}

#[test]
fn missing_recorded_date_is_an_invalid_interest_set() {
    let resp = dispatch(post_json(
        "/analysis/lien-priority",
        r#"{ "interests": [
            { "id": "reg-1", "kind": "mortgage", "holder": "KB Kookmin Bank" }
        ] }"#,
    ));
    assert_eq!(resp.status(), 400);

    let body = read_json(resp);
    assert_eq!(body["error"], "InvalidInterestSet");
    assert_eq!(body["message"], "interest \"reg-1\": missing recordedDate");
}

#[test]
fn duplicate_interest_ids_are_rejected() {
    let resp = dispatch(post_json(
        "/analysis/lien-priority",
        r#"{ "interests": [
            { "id": "reg-1", "recordedDate": "2019-05-20", "kind": "mortgage",
              "holder": "KB Kookmin Bank" },
            { "id": "reg-1", "recordedDate": "2020-01-01", "kind": "seizure",
              "holder": "National Tax Service" }
        ] }"#,
    ));
    assert_eq!(resp.status(), 400);

    let body = read_json(resp);
    assert_eq!(body["error"], "InvalidInterestSet");
    assert_eq!(body["message"], "duplicate interest id \"reg-1\"");
}

#[test]
fn sample_analysis_runs_the_demo_payload() {
    let resp = dispatch(get("/analysis/sample"));
    assert_eq!(resp.status(), 200);

    let body = read_json(resp);
    assert_eq!(body["baselineRightId"], "reg-2");
    assert_eq!(
        find(&body, "tenantClassifications", "tenantId", "tenant-1")["disposition"],
        "assumed"
    );
}

#[test]
fn home_page_loads() {
    let resp = dispatch(get("/"));
    assert_eq!(resp.status(), 200);

    let body = read_text(resp);
    assert!(body.contains("lien analysis"));
    assert!(body.contains("/analysis/lien-priority"));
}

#[test]
fn unknown_route_is_a_json_not_found() {
    let resp = dispatch(get("/no-such-page"));
    assert_eq!(resp.status(), 404);
    assert_eq!(read_json(resp)["error"], "NotFound");
}

#[test]
fn get_on_an_analysis_post_route_is_not_found() {
    let resp = dispatch(get("/analysis/lien-priority"));
    assert_eq!(resp.status(), 404);
}
