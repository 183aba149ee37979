use crate::imports::*;

/// Error body of a rejected request, `{"detail": ...}`.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Detail>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Detail {
    Message(String),
    // request validation failures
    Items(Vec<DetailItem>),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DetailItem {
    pub msg: String,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Detail::Message(message) if message.trim().is_empty() => None,
            Detail::Message(message) => Some(message.clone()),
            Detail::Items(items) if items.is_empty() => None,
            Detail::Items(items) => Some(
                items
                    .iter()
                    .map(|item| item.msg.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
        }
    }
}
