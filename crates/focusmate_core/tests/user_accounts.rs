use focusmate_core::db::open_db_in_memory;
use focusmate_core::{SqliteUserRepository, UserService, UserServiceError, ValidationError};

#[test]
fn register_normalizes_email_and_applies_default_preferences() {
    let conn = open_db_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let user = service
        .register("  Ada@Example.COM ", " Ada ", "argon2-hash")
        .unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Ada");
    assert_eq!(user.preferences.pomodoro_duration_minutes, 25);
    assert_eq!(user.preferences.break_duration_minutes, 5);

    let found = service.find_by_email("ADA@example.com").unwrap().unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(service.get_user(user.id).unwrap().unwrap().email, user.email);
}

#[test]
fn duplicate_email_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::new(&conn));
    service.register("dup@example.com", "First", "hash").unwrap();

    let err = service
        .register("DUP@example.com", "Second", "hash")
        .unwrap_err();
    assert!(matches!(err, UserServiceError::EmailTaken(email) if email == "dup@example.com"));
}

#[test]
fn missing_credentials_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::new(&conn));

    let no_email = service.register("  ", "Name", "hash").unwrap_err();
    assert!(matches!(
        no_email,
        UserServiceError::Validation(ValidationError::BlankField("email"))
    ));

    let bad_email = service.register("not-an-email", "Name", "hash").unwrap_err();
    assert!(matches!(
        bad_email,
        UserServiceError::Validation(ValidationError::InvalidEmail(_))
    ));

    let no_hash = service.register("x@example.com", "Name", " ").unwrap_err();
    assert!(matches!(
        no_hash,
        UserServiceError::Validation(ValidationError::BlankField("password_hash"))
    ));
}

#[test]
fn serialized_user_never_exposes_password_hash() {
    let conn = open_db_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::new(&conn));
    let user = service.register("safe@example.com", "Safe", "secret").unwrap();

    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("password_hash").is_none());
    assert_eq!(value["email"], "safe@example.com");
}
