use super::*;

#[test]
fn login_request_serializes_password_field() {
    let body = serde_json::to_value(LoginRequest { password: "hunter2".to_owned() }).expect("json");
    assert_eq!(body, serde_json::json!({ "password": "hunter2" }));
}

#[test]
fn login_response_tolerates_missing_fields() {
    let resp: LoginResponse = serde_json::from_str("{}").expect("json");
    assert_eq!(resp, LoginResponse::default());
    assert!(!resp.success);
}

#[test]
fn login_response_reads_success_and_token() {
    let resp: LoginResponse = serde_json::from_str(r#"{"success":true,"token":"abc"}"#).expect("json");
    assert!(resp.success);
    assert_eq!(resp.token.as_deref(), Some("abc"));
    assert_eq!(resp.detail, None);
}

#[test]
fn login_response_ignores_unknown_fields() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"success":false,"detail":"Nope","retry_after":30}"#).expect("json");
    assert_eq!(resp.detail.as_deref(), Some("Nope"));
}

#[test]
fn attempts_header_parses_integer() {
    assert_eq!(parse_attempts_remaining("2"), Some(2));
    assert_eq!(parse_attempts_remaining(" 0 "), Some(0));
}

#[test]
fn attempts_header_rejects_garbage() {
    assert_eq!(parse_attempts_remaining(""), None);
    assert_eq!(parse_attempts_remaining("two"), None);
    assert_eq!(parse_attempts_remaining("-1"), None);
    assert_eq!(parse_attempts_remaining("1.5"), None);
}

#[test]
fn raw_response_success_range() {
    let mut resp = RawResponse { status: 200, ..RawResponse::default() };
    assert!(resp.is_success());
    resp.status = 204;
    assert!(resp.is_success());
    resp.status = 302;
    assert!(!resp.is_success());
    resp.status = 429;
    assert!(!resp.is_success());
}

#[test]
fn raw_response_unauthorized_statuses() {
    assert!(RawResponse { status: 401, ..RawResponse::default() }.is_unauthorized());
    assert!(RawResponse { status: 403, ..RawResponse::default() }.is_unauthorized());
    assert!(!RawResponse { status: 404, ..RawResponse::default() }.is_unauthorized());
}

#[test]
fn api_base_strips_trailing_slashes() {
    let base = ApiBase::new("https://api.example.test//");
    assert_eq!(base.url(LOGIN_PATH), "https://api.example.test/api/admin/login");
}

#[test]
fn api_base_empty_is_same_origin() {
    assert_eq!(ApiBase::default().url(LOGIN_PATH), "/api/admin/login");
    assert_eq!(ApiBase::new("  ").url(PRICING_PATH), "/api/admin/pricing");
}

#[test]
fn lead_path_appends_id() {
    assert_eq!(lead_path("42").as_deref(), Some("/api/admin/leads/42"));
}

#[test]
fn lead_path_escapes_id_as_one_segment() {
    assert_eq!(lead_path("7?include=all").as_deref(), Some("/api/admin/leads/7%3Finclude=all"));
    assert_eq!(lead_path("../pricing").as_deref(), Some("/api/admin/leads/..%2Fpricing"));
    assert_eq!(lead_path("a#b c").as_deref(), Some("/api/admin/leads/a%23b%20c"));
    assert_eq!(lead_path("%2e%2e").as_deref(), Some("/api/admin/leads/%252e%252e"));
    assert_eq!(lead_path("café").as_deref(), Some("/api/admin/leads/caf%C3%A9"));
}

#[test]
fn lead_path_refuses_dot_segments() {
    assert_eq!(lead_path(""), None);
    assert_eq!(lead_path("."), None);
    assert_eq!(lead_path(".."), None);
}
