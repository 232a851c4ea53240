use serde::{Deserialize, Serialize};

/// Запрос ссылки для входа по e-mail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
}
