use super::*;

#[test]
fn validate_new_link_trims_fields() {
    assert_eq!(
        validate_new_link(" Docs ", " https://docs.rs "),
        Ok(NewLink { label: "Docs".to_owned(), url: "https://docs.rs".to_owned() })
    );
}

#[test]
fn validate_new_link_requires_both_fields() {
    assert_eq!(validate_new_link("", "https://docs.rs"), Err("Enter both a label and a URL."));
    assert_eq!(validate_new_link("Docs", "  "), Err("Enter both a label and a URL."));
}

#[test]
fn validate_new_link_requires_web_scheme() {
    assert_eq!(validate_new_link("Mail", "mailto:a@b.com"), Err("URL must start with http:// or https://."));
    assert_eq!(validate_new_link("Bare", "https://"), Err("URL must start with http:// or https://."));
    assert!(validate_new_link("Plain", "HTTP://example.com").is_ok());
}

#[test]
fn validate_new_link_rejects_long_url() {
    let url = format!("https://{}", "a".repeat(URL_MAX_CHARS));
    assert_eq!(validate_new_link("Long", &url), Err("URL is too long."));
}
