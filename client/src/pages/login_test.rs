use super::*;

#[test]
fn normalize_code_input_uppercases_letters() {
    assert_eq!(normalize_code_input("abc123"), "ABC123");
}

#[test]
fn request_input_canonicalizes_identifier() {
    let request = validate_request_input(LoginMethod::Correo, "  Acudiente@Colegio.co  ").unwrap();
    assert_eq!(request.usuario, "acudiente@colegio.co");

    let request = validate_request_input(LoginMethod::Ppt, "ppt123456789").unwrap();
    assert_eq!(request.login_method, LoginMethod::Ppt);
    assert_eq!(request.usuario, "PPT123456789");
}

#[test]
fn request_input_reports_missing_and_malformed() {
    assert_eq!(validate_request_input(LoginMethod::Cedula, "   ").unwrap_err(), "Por favor, completa todos los campos.");
    assert_eq!(
        validate_request_input(LoginMethod::Cedula, "12ab"),
        Err("El formato del documento ingresado no es válido.".to_owned())
    );
}

#[test]
fn verify_input_requires_identifier_and_code() {
    let verify = validate_verify_input(LoginMethod::Cedula, " 1234567 ", " abc123 ").unwrap();
    assert_eq!(verify.usuario, "1234567");
    assert_eq!(verify.code, "abc123");
    assert!(validate_verify_input(LoginMethod::Cedula, "", "abc123").is_err());
    assert_eq!(validate_verify_input(LoginMethod::Cedula, "1234567", "   "), Err(MISSING_CODE.to_owned()));
}

#[test]
fn verify_input_rejects_wrong_code_length() {
    assert_eq!(validate_verify_input(LoginMethod::Correo, "a@b.co", "ABCDE"), Err(MISSING_CODE.to_owned()));
    assert_eq!(validate_verify_input(LoginMethod::Correo, "a@b.co", "ABCDEFG"), Err(MISSING_CODE.to_owned()));
}
