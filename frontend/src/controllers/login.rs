use interfacing::LoginForm;

use super::Outcome;
use crate::api::GENERIC_FAILURE;
use crate::dialog::Notice;
use crate::router::Route;
use crate::services::Services;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials!";

/// Signs in and tells where to go next.
pub async fn submit(services: &Services, form: &LoginForm) -> Outcome<Route> {
    log::info!("signing in as {}", form.username);

    let response = match services.api.login(form).await {
        Ok(response) => response,
        Err(e) => {
            let message = e.user_message(INVALID_CREDENTIALS);
            log::warn!("login failed: {}", e);
            services
                .dialogs
                .notify(Notice::error("Login Failed", message.clone()))
                .await;
            return Outcome::Failed(message);
        }
    };

    match services.session.save(
        &response.access_token,
        &response.admin_id,
        &response.username,
    ) {
        Ok(_) => Outcome::Done(Route::Dashboard),
        Err(e) => {
            log::error!("failed to keep the session: {}", e);
            services
                .dialogs
                .notify(Notice::error("Login Failed", GENERIC_FAILURE))
                .await;
            Outcome::Failed(GENERIC_FAILURE.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::Level;
    use crate::guard::{require_session, Guard};
    use crate::testing::{TestBed, LOGIN_OK};
    use claim::*;
    use futures::executor::block_on;
    use secrecy::{ExposeSecret, SecretString};
    use yew_router::Routable;

    fn form() -> LoginForm {
        LoginForm {
            username: "admin".into(),
            password: SecretString::new("secret".into()),
        }
    }

    #[test]
    fn valid_credentials_open_a_session_and_go_to_dashboard() {
        let bed = TestBed::signed_out();
        bed.transport.reply(200, LOGIN_OK);

        let outcome = block_on(submit(&bed.services, &form()));

        assert_eq!(outcome, Outcome::Done(Route::Dashboard));
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");

        let session = assert_some!(bed.services.session.read());
        assert_eq!(session.token.expose_secret(), "abc");
        assert_eq!(session.admin_id, "1");
        assert_eq!(session.display_name, "admin");

        assert_matches!(require_session(&bed.services.session), Guard::Allow(_));
        assert!(bed.dialogs.notices().is_empty());
    }

    #[test]
    fn rejected_credentials_show_the_server_detail() {
        let bed = TestBed::signed_out();
        bed.transport
            .reply(401, r#"{"detail":"Incorrect username or password"}"#);

        let outcome = block_on(submit(&bed.services, &form()));

        assert_eq!(
            outcome,
            Outcome::Failed("Incorrect username or password".into())
        );
        assert_none!(bed.services.session.read());
        let notice = bed.dialogs.last_notice();
        assert_eq!(notice.level, Level::Error);
        assert_eq!(notice.title, "Login Failed");
    }

    #[test]
    fn any_other_failure_creates_no_session() {
        for status in [400, 403, 422, 500, 503] {
            let bed = TestBed::signed_out();
            bed.transport.reply(status, "");

            let outcome = block_on(submit(&bed.services, &form()));

            assert_eq!(outcome, Outcome::Failed(INVALID_CREDENTIALS.into()));
            assert_none!(bed.services.session.read());
        }
    }

    #[test]
    fn network_failure_shows_generic_message() {
        let bed = TestBed::signed_out();
        bed.transport.fail("NetworkError when attempting to fetch resource.");

        let outcome = block_on(submit(&bed.services, &form()));

        assert_eq!(outcome, Outcome::Failed(GENERIC_FAILURE.into()));
        assert_eq!(bed.dialogs.last_notice().text, GENERIC_FAILURE);
        assert_none!(bed.services.session.read());
    }

    #[test]
    fn session_write_failure_is_reported() {
        let bed = TestBed::signed_out();
        bed.persistence.fail_tab_writes();
        bed.transport.reply(200, LOGIN_OK);

        let outcome = block_on(submit(&bed.services, &form()));

        assert_eq!(outcome, Outcome::Failed(GENERIC_FAILURE.into()));
        assert_none!(bed.services.session.read());
    }
}
