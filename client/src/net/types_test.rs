use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Candidate).unwrap(), "\"candidate\"");
    assert_eq!(serde_json::to_string(&Role::Employer).unwrap(), "\"employer\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_parse_matches_as_str() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("Employer"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_dashboard_paths_are_distinct() {
    assert_eq!(Role::Candidate.dashboard_path(), "/dashboard/candidate");
    assert_eq!(Role::Employer.dashboard_path(), "/dashboard/employer");
    assert_eq!(Role::Admin.dashboard_path(), "/dashboard/admin");
}

// =============================================================
// UserRecord
// =============================================================

#[test]
fn user_record_deserializes_backend_shape() {
    let raw = r#"{"id":"u1","name":"Ada","email":"ada@example.com","role":"employer","createdAt":"2024-01-01"}"#;
    let user: UserRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.role, Role::Employer);
}

#[test]
fn user_record_rejects_unknown_role() {
    let raw = r#"{"id":"u1","name":"Ada","email":"ada@example.com","role":"owner"}"#;
    assert!(serde_json::from_str::<UserRecord>(raw).is_err());
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn login_response_reads_camel_case_token() {
    let body: LoginResponse = serde_json::from_str(r#"{"accessToken":"abc"}"#).unwrap();
    assert_eq!(body.access_token, "abc");
}

#[test]
fn register_request_flattens_employer_profile() {
    let req = RegisterRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "hunter22".to_owned(),
        profile: RegisterProfile::Employer {
            company_name: "Acme".to_owned(),
            company_website: "https://acme.test".to_owned(),
        },
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["role"], "employer");
    assert_eq!(json["companyName"], "Acme");
    assert_eq!(json["companyWebsite"], "https://acme.test");
    assert!(json.get("headline").is_none());
}

#[test]
fn register_request_flattens_candidate_profile() {
    let req = RegisterRequest {
        name: "Bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "hunter22".to_owned(),
        profile: RegisterProfile::Candidate {
            headline: "Rust developer".to_owned(),
            location: "Lisbon".to_owned(),
        },
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["role"], "candidate");
    assert_eq!(json["headline"], "Rust developer");
    assert!(json.get("companyName").is_none());
    assert_eq!(req.profile.role(), Role::Candidate);
}
