use super::*;

fn user(role: &str) -> User {
    User { id: Uuid::nil(), name: "Marta Ruiz".to_owned(), email: None, role: role.to_owned() }
}

#[test]
fn user_deserializes_from_me_payload() {
    let json = r#"{"id":"6f9619ff-8b86-d011-b42d-00c04fc964ff","name":"Marta Ruiz","email":"marta@example.com","role":"acudiente"}"#;
    let parsed: User = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.name, "Marta Ruiz");
    assert_eq!(parsed.email.as_deref(), Some("marta@example.com"));
    assert!(parsed.is_guardian());
}

#[test]
fn user_email_is_optional() {
    let json = r#"{"id":"6f9619ff-8b86-d011-b42d-00c04fc964ff","name":"Ana","role":"profesor"}"#;
    let parsed: User = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.email, None);
}

#[test]
fn guardians_land_on_dashboard() {
    assert_eq!(user("acudiente").home_route(), "/acudiente");
}

#[test]
fn teachers_and_admins_land_on_reading_table() {
    assert_eq!(user("profesor").home_route(), "/lectura");
    assert_eq!(user("admin").home_route(), "/lectura");
}
