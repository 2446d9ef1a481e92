use crate::TokenPair;

#[test]
fn test_token_pair_has_access() {
    assert!(TokenPair::new("A1", "R1").has_access());
    assert!(!TokenPair::new("", "R1").has_access());
}

#[test]
fn test_token_pair_has_refresh() {
    assert!(TokenPair::new("A1", "R1").has_refresh());
    assert!(!TokenPair::new("A1", "").has_refresh());
}

#[test]
fn test_access_preview_truncates() {
    let tokens = TokenPair::new("eyJhbGciOiJIUzI1NiJ9.payload.signature", "R1");
    assert_eq!(tokens.access_preview(), "eyJhbGciOiJI...");
}

#[test]
fn test_token_pair_json_shape() {
    let tokens: TokenPair =
        serde_json::from_str(r#"{"access":"A1","refresh":"R1"}"#).unwrap();
    assert_eq!(tokens, TokenPair::new("A1", "R1"));
}
