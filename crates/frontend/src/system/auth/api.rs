use super::context::Session;
use crate::shared::action_error::ActionError;
use crate::shared::fetcher::{Fetcher, SuccessMarker};
use crate::shared::resource::ActionMessages;
use contracts::system::auth::{LoginForm, LoginResponse};

const LOGIN: &str = "/login";

pub fn login_messages() -> ActionMessages {
    ActionMessages::load(
        "Login failed. Please check your credentials.",
        "An error occurred during login.",
    )
}

/// Signs in with the typed credentials. The form must already be valid.
pub async fn login(fetcher: &Fetcher, form: &LoginForm) -> Result<Session, ActionError> {
    let response: LoginResponse = fetcher
        .post_as(LOGIN, Some(&form.to_request()), SuccessMarker::status("valid"))
        .await?;
    log::info!("signed in as {}", form.username.trim());
    Ok(Session {
        user_id: response.user_id.unwrap_or_else(|| form.username.clone()),
        job_title: response.job_title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::RecordingTransport;
    use futures::executor::block_on;
    use serde_json::json;

    fn form() -> LoginForm {
        LoginForm {
            username: "frontdesk".into(),
            password: "secret".into(),
        }
    }

    #[test]
    fn valid_status_yields_session() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "status": "valid", "user_id": "fd01", "Job Title": "Receptionist" }));
        let session = block_on(login(&t.fetcher(), &form())).unwrap();
        assert_eq!(session.user_id, "fd01");
        assert_eq!(session.job_title.as_deref(), Some("Receptionist"));
        assert_eq!(session.welcome(), "Login successful! Welcome, fd01.");

        let call = &t.calls()[0];
        assert_eq!(call.url, "http://hotel.test/login");
        assert_eq!(call.body, Some(json!({ "user_id": "frontdesk", "password": "secret" })));
    }

    #[test]
    fn other_status_is_bad_credentials() {
        let t = RecordingTransport::new();
        t.reply(200, json!({ "status": "invalid" }));
        let err = block_on(login(&t.fetcher(), &form())).unwrap_err();
        assert_eq!(
            login_messages().failure_text(&err),
            "Login failed. Please check your credentials."
        );

        t.fail("offline");
        let err = block_on(login(&t.fetcher(), &form())).unwrap_err();
        assert_eq!(login_messages().failure_text(&err), "An error occurred during login.");
    }
}
