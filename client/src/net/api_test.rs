use super::*;
use wire::ChildrenResponse;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(child_observations_endpoint(12), "/acudiente/api/observaciones/12");
    assert_eq!(multimedia_endpoint(7), "/api/observaciones/7/multimedia");
    assert_eq!(CHILDREN_ENDPOINT, "/acudiente/api/hijos-temp");
    assert_eq!(STATISTICS_ENDPOINT, "/lectura/estadisticas_lectura");
    assert_eq!(READING_LIST_ENDPOINT, "/lectura/observaciones");
    assert_eq!(REGISTRATION_ENDPOINT, "/api/registro");
}

#[test]
fn children_timeout_is_ten_seconds() {
    assert_eq!(CHILDREN_TIMEOUT_MS, 10_000);
}

// =============================================================
// decode_body
// =============================================================

#[test]
fn decode_body_parses_success_payload() {
    let body = r#"{"hijos":[{"id":1,"nombre":"Ana Ruiz","grado":"Primero"}]}"#;
    let parsed: ChildrenResponse = decode_body(true, 200, body).unwrap();
    assert_eq!(parsed.hijos.len(), 1);
    assert_eq!(parsed.hijos[0].nombre, "Ana Ruiz");
}

#[test]
fn decode_body_error_field_on_ok_status_is_server_error() {
    let err = decode_body::<ChildrenResponse>(true, 200, r#"{"error":"Sin permisos"}"#).unwrap_err();
    assert_eq!(err, ApiError::Server("Sin permisos".to_owned()));
}

#[test]
fn decode_body_prefers_error_message_over_status() {
    let err = decode_body::<ChildrenResponse>(false, 403, r#"{"error":"No autorizado"}"#).unwrap_err();
    assert_eq!(err.to_string(), "No autorizado");
}

#[test]
fn decode_body_non_json_error_reports_status() {
    let err = decode_body::<ChildrenResponse>(false, 502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Server("Error del servidor: 502".to_owned()));
}

#[test]
fn decode_body_non_json_success_is_decode_error() {
    let err = decode_body::<ChildrenResponse>(true, 200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_body_ignores_blank_error_field() {
    let parsed: ChildrenResponse = decode_body(true, 200, r#"{"hijos":[],"error":"  "}"#).unwrap();
    assert!(parsed.hijos.is_empty());
}

// =============================================================
// read_state_outcome
// =============================================================

#[test]
fn toggle_takes_state_from_server() {
    let resp = ReadStateResponse::changed(4, false);
    let change = read_state_outcome(ReadAction::Toggle, resp).unwrap();
    assert!(!change.read);
    assert_eq!(change.message.as_deref(), Some("Observación marcada como no leído"));
}

#[test]
fn toggle_without_leido_is_decode_error() {
    let resp = ReadStateResponse { success: true, ..ReadStateResponse::default() };
    assert!(matches!(read_state_outcome(ReadAction::Toggle, resp), Err(ApiError::Decode(_))));
}

#[test]
fn explicit_actions_confirm_requested_state() {
    let resp = ReadStateResponse { success: true, ..ReadStateResponse::default() };
    assert!(read_state_outcome(ReadAction::Read, resp.clone()).unwrap().read);
    assert!(!read_state_outcome(ReadAction::Unread, resp).unwrap().read);
}

#[test]
fn failure_uses_server_error_or_action_fallback() {
    let with_error = ReadStateResponse { success: false, error: Some("Bloqueado".to_owned()), ..Default::default() };
    assert_eq!(
        read_state_outcome(ReadAction::Read, with_error).unwrap_err(),
        ApiError::Server("Bloqueado".to_owned())
    );

    let bare = ReadStateResponse::default();
    assert_eq!(
        read_state_outcome(ReadAction::Unread, bare.clone()).unwrap_err().to_string(),
        "Error al marcar como no leído"
    );
    assert_eq!(read_state_outcome(ReadAction::Toggle, bare).unwrap_err().to_string(), "Error al cambiar estado");
}

// =============================================================
// statistics / multimedia / reading list
// =============================================================

#[test]
fn statistics_outcome_requires_payload() {
    let stats = ReadStatistics::from_counts(4, 1);
    let ok = StatisticsResponse { success: true, estadisticas: Some(stats), error: None };
    assert_eq!(statistics_outcome(ok).unwrap(), stats);

    let missing = StatisticsResponse { success: true, estadisticas: None, error: None };
    assert!(matches!(statistics_outcome(missing), Err(ApiError::Decode(_))));

    let failed = StatisticsResponse { success: false, estadisticas: None, error: None };
    assert_eq!(statistics_outcome(failed).unwrap_err().to_string(), "Error al obtener estadísticas");
}

#[test]
fn multimedia_outcome_empty_list_is_not_an_error() {
    let resp = MultimediaResponse { success: true, data: Vec::new(), error: None };
    assert!(multimedia_outcome(resp).unwrap().is_empty());
}

#[test]
fn multimedia_outcome_failure_keeps_message() {
    let resp = MultimediaResponse { success: false, data: Vec::new(), error: Some("Sin acceso".to_owned()) };
    assert_eq!(multimedia_outcome(resp).unwrap_err(), ApiError::Server("Sin acceso".to_owned()));
}

#[test]
fn reading_list_outcome_returns_rows() {
    let resp = ReadingListResponse { success: false, observaciones: Vec::new(), error: None };
    assert_eq!(reading_list_outcome(resp).unwrap_err().to_string(), "Error al cargar observaciones");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn connection_failures_are_network_and_timeout_only() {
    assert!(ApiError::Network("refused".to_owned()).is_connection_failure());
    assert!(ApiError::Timeout.is_connection_failure());
    assert!(!ApiError::Server("x".to_owned()).is_connection_failure());
    assert!(!ApiError::Decode("x".to_owned()).is_connection_failure());
    assert!(!ApiError::Unavailable.is_connection_failure());
}

#[test]
fn network_error_displays_generic_message() {
    assert_eq!(ApiError::Network("TypeError: Failed to fetch".to_owned()).to_string(), "Error de conexión");
}
