pub use secrecy::{ExposeSecret, SecretString};
pub use serde::{Deserialize, Serialize};
pub use serde_aux::field_attributes::{
    deserialize_number_from_string, deserialize_string_from_number,
};
