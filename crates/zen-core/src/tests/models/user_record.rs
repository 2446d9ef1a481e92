use crate::UserRecord;

use serde_json::json;

fn user_json() -> serde_json::Value {
    json!({
        "id": 7,
        "email": "a@x.com",
        "username": "astro",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "date_joined": "2025-01-02T03:04:05.123456Z",
        "is_active": true,
        "profile": {
            "date_of_birth": "1990-09-01",
            "zodiac_sign": "Virgo",
            "zodiac_symbol": "♍",
            "zodiac_element": "Earth",
            "investing_style": "balanced",
            "starting_balance": "25000.00",
            "onboarding_completed": true,
            "created_at": "2025-01-02T03:04:05Z",
            "updated_at": "2025-01-02T03:04:05Z"
        }
    })
}

#[test]
fn test_user_record_parses_decimal_string_balance() {
    let user: UserRecord = serde_json::from_value(user_json()).unwrap();
    let profile = user.profile.as_ref().unwrap();

    assert_eq!(profile.starting_balance, Some(25000.0));
    assert!(user.onboarding_completed());
    assert_eq!(profile.zodiac_sign.as_deref(), Some("Virgo"));
}

#[test]
fn test_user_record_without_profile() {
    let user: UserRecord = serde_json::from_value(json!({
        "id": 1,
        "email": "b@x.com",
        "username": "bee",
    }))
    .unwrap();

    assert!(user.profile.is_none());
    assert!(user.is_active);
    assert!(!user.onboarding_completed());
    assert_eq!(user.display_name(), "bee");
}

#[test]
fn test_display_name_uses_full_name() {
    let user: UserRecord = serde_json::from_value(user_json()).unwrap();
    assert_eq!(user.display_name(), "Ada Lovelace");
}

#[test]
fn test_profile_null_fields_are_none() {
    let mut value = user_json();
    value["profile"] = json!({
        "date_of_birth": null,
        "zodiac_sign": null,
        "starting_balance": null,
        "onboarding_completed": false
    });

    let user: UserRecord = serde_json::from_value(value).unwrap();
    let profile = user.profile.unwrap();

    assert!(profile.date_of_birth.is_none());
    assert!(profile.starting_balance.is_none());
    assert!(!profile.onboarding_completed);
}
