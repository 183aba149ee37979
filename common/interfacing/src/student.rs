use crate::imports::*;
use crate::PercentageRange;

pub type StudentId = u64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AdminRef {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: u64,
    #[serde(default)]
    pub username: String,
}

/// A student as returned by `student/all` and `student/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Student {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: StudentId,
    pub name: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub age: u32,
    pub address: String,
    pub is_active: bool,
    #[serde(default)]
    pub percentage_range: Option<PercentageRange>,
    #[serde(default)]
    pub admin: Option<AdminRef>,
}

impl Student {
    /// Whether `admin_id` created this record.
    ///
    /// Only used to enable controls, the API decides what an admin may change.
    pub fn owned_by(&self, admin_id: &str) -> bool {
        self.admin
            .as_ref()
            .map(|admin| admin.id.to_string() == admin_id)
            .unwrap_or(false)
    }

    /// Id of the referenced range, 0 when the record has none.
    pub fn percentage_range_id(&self) -> u64 {
        self.percentage_range
            .as_ref()
            .map(|range| range.id)
            .unwrap_or(0)
    }

    pub fn percentage_range_label(&self) -> &str {
        self.percentage_range
            .as_ref()
            .map(|range| range.label.as_str())
            .unwrap_or("N/A")
    }

    pub fn owner_name(&self) -> &str {
        match &self.admin {
            Some(admin) if !admin.username.is_empty() => &admin.username,
            _ => "N/A",
        }
    }
}

/// Body of `POST student` and `PUT student/update/{id}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StudentPayload {
    pub name: String,
    pub age: u32,
    pub address: String,
    pub is_active: bool,
    pub percentage_range_id: u64,
    // id of the acting admin
    pub created_id: String,
}
