use std::future::Future;

use contracts::system::auth::SignInRequest;
use thiserror::Error;
use validator::Validate;

use crate::shared::query_store::QueryParams;

/// Query key used to pre-fill the e-mail field (`/sign-in?email=...`)
pub const EMAIL_QUERY_KEY: &str = "email";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInError {
    /// Malformed e-mail; shown under the field
    #[error("{0}")]
    Validation(String),
    /// The link could not be dispatched; shown as a generic notice
    #[error("sign-in request failed: {0}")]
    RequestFailure(String),
}

/// Sign-in form schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct SignInForm {
    #[validate(email)]
    pub email: String,
}

impl SignInForm {
    pub fn from_query(params: &QueryParams) -> Self {
        Self {
            email: params.get(EMAIL_QUERY_KEY).unwrap_or_default().to_string(),
        }
    }

    /// Validates the form and builds the API request
    pub fn validate_request(&self) -> Result<SignInRequest, SignInError> {
        let candidate = SignInForm {
            email: self.email.trim().to_string(),
        };
        if let Err(errors) = candidate.validate() {
            log::debug!("sign-in form rejected: {}", errors);
            return Err(SignInError::Validation(
                "Informe um e-mail válido".to_string(),
            ));
        }
        Ok(SignInRequest {
            email: candidate.email,
        })
    }
}

/// Validates `form` and, only if it is valid, hands the request to `send`.
///
/// Returns the request that was sent so it can be re-issued unchanged.
pub async fn submit_sign_in<F, Fut>(form: &SignInForm, send: F) -> Result<SignInRequest, SignInError>
where
    F: FnOnce(SignInRequest) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let request = form.validate_request()?;
    send(request.clone())
        .await
        .map_err(SignInError::RequestFailure)?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn form(email: &str) -> SignInForm {
        SignInForm {
            email: email.to_string(),
        }
    }

    #[test]
    fn test_invalid_email_never_reaches_transport() {
        let calls = Cell::new(0);
        let result = block_on(submit_sign_in(&form("not-an-email"), |_| {
            calls.set(calls.get() + 1);
            async { Ok::<(), String>(()) }
        }));

        assert!(matches!(result, Err(SignInError::Validation(_))));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_empty_email_is_invalid() {
        assert!(matches!(
            form("").validate_request(),
            Err(SignInError::Validation(_))
        ));
    }

    #[test]
    fn test_valid_email_is_sent_trimmed() {
        let sent = Cell::new(None);
        let result = block_on(submit_sign_in(&form("  dono@pizzaria.com "), |request| {
            sent.set(Some(request));
            async { Ok::<(), String>(()) }
        }));

        let expected = SignInRequest {
            email: "dono@pizzaria.com".to_string(),
        };
        assert_eq!(result, Ok(expected.clone()));
        assert_eq!(sent.take(), Some(expected));
    }

    #[test]
    fn test_transport_failure_is_request_failure() {
        let result = block_on(submit_sign_in(&form("dono@pizzaria.com"), |_| async {
            Err::<(), String>("Sign-in failed: 500".to_string())
        }));
        assert_eq!(
            result,
            Err(SignInError::RequestFailure("Sign-in failed: 500".to_string()))
        );
    }

    #[test]
    fn test_prefill_from_query() {
        let params = QueryParams::parse("?email=dono%40pizzaria.com");
        assert_eq!(SignInForm::from_query(&params).email, "dono@pizzaria.com");
        assert_eq!(SignInForm::from_query(&QueryParams::default()).email, "");
    }
}
