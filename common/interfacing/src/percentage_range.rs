use crate::imports::*;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PercentageRange {
    pub id: u64,
    #[serde(rename = "percentage_range")]
    pub label: String,
}
