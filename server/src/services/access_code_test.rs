use std::sync::Mutex;

use super::*;

fn account(role: Option<Role>, is_active: bool) -> Account {
    Account { id: Uuid::new_v4(), first_name: "Marta".into(), email: Some("marta@example.com".into()), role, is_active }
}

fn issued() -> IssuedCode {
    IssuedCode { email: "marta@example.com".into(), first_name: "Marta".into(), code: "ABC234".into() }
}

// =========================================================================
// Mailers
// =========================================================================

#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

struct FailingMailer;

#[async_trait::async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::Delivery("provider down".into()))
    }
}

// =========================================================================
// codes
// =========================================================================

#[test]
fn generated_codes_use_the_unambiguous_alphabet() {
    let code = generate_access_code();
    assert_eq!(code.len(), CODE_LEN);
    assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    assert_eq!(normalize_code(&code), Some(code));
}

#[test]
fn normalize_code_uppercases_and_trims() {
    assert_eq!(normalize_code(" abc234 "), Some("ABC234".to_owned()));
}

#[test]
fn normalize_code_rejects_bad_shapes() {
    assert_eq!(normalize_code("abc23"), None);
    assert_eq!(normalize_code("abc2345"), None);
    // 1, I, 0 and O are left out of the alphabet.
    assert_eq!(normalize_code("ABC1I0"), None);
    assert_eq!(normalize_code("ABC23!"), None);
}

#[test]
fn code_hash_is_stable_hex() {
    let a = hash_access_code("ABC234");
    assert_eq!(a, hash_access_code("ABC234"));
    assert_ne!(a, hash_access_code("ABC235"));
    assert_eq!(a.len(), 64);
}

// =========================================================================
// accounts
// =========================================================================

#[test]
fn each_method_looks_up_its_own_column() {
    assert!(account_query(LoginMethod::Correo).ends_with("WHERE email = $1"));
    assert!(account_query(LoginMethod::Cedula).ends_with("WHERE cedula = $1"));
    assert!(account_query(LoginMethod::Ppt).ends_with("WHERE ppt = $1"));
}

#[test]
fn landing_route_follows_role() {
    assert_eq!(account(Some(Role::Acudiente), true).landing_route(), "/acudiente");
    assert_eq!(account(Some(Role::Profesor), true).landing_route(), "/lectura");
    assert_eq!(account(Some(Role::Admin), true).landing_route(), "/lectura");
    assert_eq!(account(None, true).landing_route(), "/");
}

// =========================================================================
// email
// =========================================================================

#[test]
fn email_greets_by_name_and_carries_code() {
    let email = render_access_code_email(&issued());
    assert_eq!(email.to, "marta@example.com");
    assert_eq!(email.subject, ACCESS_CODE_SUBJECT);
    assert!(email.html.contains("Hola Marta,"));
    assert!(email.html.contains("ABC234"));
    assert!(!email.html.contains("{{"));
}

#[test]
fn email_escapes_the_name() {
    let mut code = issued();
    code.first_name = "<b>Marta</b>".into();
    let html = render_access_code_email(&code).html;
    assert!(!html.contains("<b>Marta"));
    assert!(html.contains("&lt;b&gt;Marta"));
}

#[tokio::test]
async fn send_code_uses_the_mailer() {
    let mailer = RecordingMailer::default();
    send_code(&mailer, &issued()).await.unwrap();
    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "marta@example.com");
}

#[tokio::test]
async fn send_code_surfaces_delivery_error() {
    let err = send_code(&FailingMailer, &issued()).await.unwrap_err();
    assert!(matches!(err, AccessCodeError::Mail(MailError::Delivery(_))));
}

#[tokio::test]
async fn malformed_code_is_rejected_before_any_query() {
    let state = crate::state::test_helpers::test_app_state();
    let id = LoginIdentifier::parse(LoginMethod::Cedula, "1234567").unwrap();
    let err = redeem_code(&state.pool, &id, "12").await.unwrap_err();
    assert!(matches!(err, AccessCodeError::InvalidCode));
}

// =========================================================================
// Live database (opt-in)
// =========================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;

    async fn pool() -> PgPool {
        let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL required for live-db-tests");
        crate::db::init_pool(&url).await.expect("pool")
    }

    /// Active guardian reachable by email and by a random cédula.
    async fn seed(pool: &PgPool, active: bool) -> (Uuid, String, String) {
        let id = Uuid::new_v4();
        let email = format!("{}@example.com", id.simple());
        let cedula = (id.as_u128() % 9_000_000_000 + 1_000_000_000).to_string();
        sqlx::query(
            "INSERT INTO users (id, email, cedula, first_name, role, is_active) VALUES ($1, $2, $3, 'Live', 'acudiente', $4)",
        )
        .bind(id)
        .bind(&email)
        .bind(&cedula)
        .bind(active)
        .execute(pool)
        .await
        .unwrap();
        (id, email, cedula)
    }

    #[tokio::test]
    async fn code_requested_by_cedula_unlocks_the_account() {
        let pool = pool().await;
        let (id, email, cedula) = seed(&pool, true).await;
        let by_cedula = LoginIdentifier::parse(LoginMethod::Cedula, &cedula).unwrap();

        let issued = issue_code(&pool, &by_cedula).await.unwrap().unwrap();
        assert_eq!(issued.email, email);

        let account = redeem_code(&pool, &by_cedula, &issued.code).await.unwrap();
        assert_eq!(account.id, id);
        assert_eq!(account.landing_route(), "/acudiente");

        let again = redeem_code(&pool, &by_cedula, &issued.code).await.unwrap_err();
        assert!(matches!(again, AccessCodeError::VerificationFailed));
    }

    #[tokio::test]
    async fn inactive_account_gets_no_code() {
        let pool = pool().await;
        let (_, email, _) = seed(&pool, false).await;
        let by_email = LoginIdentifier::parse(LoginMethod::Correo, &email).unwrap();
        assert!(issue_code(&pool, &by_email).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deactivated_after_issue_is_reported_on_redeem() {
        let pool = pool().await;
        let (id, email, _) = seed(&pool, true).await;
        let by_email = LoginIdentifier::parse(LoginMethod::Correo, &email).unwrap();
        let issued = issue_code(&pool, &by_email).await.unwrap().unwrap();

        sqlx::query("UPDATE users SET is_active = false WHERE id = $1").bind(id).execute(&pool).await.unwrap();
        let err = redeem_code(&pool, &by_email, &issued.code).await.unwrap_err();
        assert!(matches!(err, AccessCodeError::AccountDisabled));
    }

    #[tokio::test]
    async fn five_wrong_guesses_burn_the_code() {
        let pool = pool().await;
        let (_, email, _) = seed(&pool, true).await;
        let by_email = LoginIdentifier::parse(LoginMethod::Correo, &email).unwrap();
        let issued = issue_code(&pool, &by_email).await.unwrap().unwrap();
        let wrong = if issued.code == "AAAAAA" { "BBBBBB" } else { "AAAAAA" };

        for _ in 0..MAX_FAILED_ATTEMPTS {
            assert!(redeem_code(&pool, &by_email, wrong).await.is_err());
        }
        let err = redeem_code(&pool, &by_email, &issued.code).await.unwrap_err();
        assert!(matches!(err, AccessCodeError::VerificationFailed));
    }
}
