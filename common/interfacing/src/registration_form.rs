use crate::imports::*;

/// Body of `POST admin`. The confirmation field lives only in the view.
#[derive(Deserialize, Clone, Debug)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

impl Serialize for RegistrationForm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("RegistrationForm", 3)?;
        s.serialize_field("username", &self.username)?;
        s.serialize_field("email", &self.email)?;
        s.serialize_field("password", &self.password.expose_secret())?;
        s.end()
    }
}
