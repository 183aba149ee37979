use crate::imports::*;

#[derive(Deserialize, Clone, Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: SecretString,
}

impl LoginForm {
    /// Field pairs of the `application/x-www-form-urlencoded` login body.
    pub fn form_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("username", self.username.as_str()),
            ("password", self.password.expose_secret().as_str()),
        ]
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct LoginResponse {
    pub access_token: SecretString,
    // the API emits a number, older deployments a string
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub admin_id: String,
    pub username: String,
}
