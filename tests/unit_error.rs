use todos::error::{exit_codes, Error, JsonError};

#[test]
fn exit_codes_map_correctly() {
    let user = Error::EmptyTaskText;
    assert_eq!(user.exit_code(), exit_codes::USER_ERROR);

    let lookup = Error::TaskNotFound(7);
    assert_eq!(lookup.exit_code(), exit_codes::USER_ERROR);

    let gate = Error::NotLoggedIn;
    assert_eq!(gate.exit_code(), exit_codes::GATE_BLOCKED);

    let op = Error::Io(std::io::Error::other("boom"));
    assert_eq!(op.exit_code(), exit_codes::OPERATION_FAILED);
}

#[test]
fn json_error_includes_code() {
    let err = Error::TaskNotFound(42);
    let json = JsonError::from(&err);
    assert_eq!(json.code, exit_codes::USER_ERROR);
    assert!(json.error.contains("task not found: 42"));
}
