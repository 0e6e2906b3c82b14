use super::*;

#[test]
fn escape_html_replaces_markup() {
    assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
}

#[test]
fn escape_html_keeps_plain_text() {
    assert_eq!(escape_html("María García"), "María García");
}

#[test]
fn resend_mailer_keeps_sender() {
    let mailer = ResendMailer::from_config(config::MailConfig {
        api_key: "re_test".into(),
        from: "no-reply@example.com".into(),
    });
    assert_eq!(mailer.sender(), "no-reply@example.com");
}

#[test]
fn mail_error_messages_name_the_variable() {
    let err = MailError::MissingConfig { var: "RESEND_FROM".into() };
    assert_eq!(err.to_string(), "missing mail configuration: RESEND_FROM");
}
