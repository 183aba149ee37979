use interfacing::{Student, StudentPayload};

use super::ValidationError;

/// Student form contents as typed, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub age: String,
    pub address: String,
    pub is_active: bool,
    // 0 means nothing is selected
    pub percentage_range_id: u64,
}

impl Default for StudentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            address: String::new(),
            is_active: true,
            percentage_range_id: 0,
        }
    }
}

impl From<&Student> for StudentDraft {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            age: student.age.to_string(),
            address: student.address.clone(),
            is_active: student.is_active,
            percentage_range_id: student.percentage_range_id(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DraftField {
    Name(String),
    Age(String),
    Address(String),
    Active(bool),
    PercentageRange(u64),
}

impl StudentDraft {
    pub fn apply(&mut self, field: DraftField) {
        match field {
            DraftField::Name(name) => self.name = name,
            DraftField::Age(age) => self.age = age,
            DraftField::Address(address) => self.address = address,
            DraftField::Active(is_active) => self.is_active = is_active,
            DraftField::PercentageRange(id) => self.percentage_range_id = id,
        }
    }

    /// Request body on behalf of `admin_id`, if every required field is filled.
    pub fn to_payload(&self, admin_id: &str) -> Result<StudentPayload, ValidationError> {
        let name = self.name.trim();
        let age = self.age.trim();
        let address = self.address.trim();

        if name.is_empty() || age.is_empty() || address.is_empty() || self.percentage_range_id == 0
        {
            return Err(ValidationError::MissingFields);
        }

        let age = age.parse().map_err(|_| ValidationError::InvalidAge)?;

        Ok(StudentPayload {
            name: name.to_owned(),
            age,
            address: address.to_owned(),
            is_active: self.is_active,
            percentage_range_id: self.percentage_range_id,
            created_id: admin_id.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::student;
    use claim::*;

    fn filled() -> StudentDraft {
        let mut draft = StudentDraft::default();
        draft.apply(DraftField::Name(" Ada ".into()));
        draft.apply(DraftField::Age("21".into()));
        draft.apply(DraftField::Address("12 Analytical St".into()));
        draft.apply(DraftField::PercentageRange(2));
        draft
    }

    #[test]
    fn filled_draft_becomes_payload() {
        let payload = assert_ok!(filled().to_payload("1"));

        assert_eq!(
            payload,
            StudentPayload {
                name: "Ada".into(),
                age: 21,
                address: "12 Analytical St".into(),
                is_active: true,
                percentage_range_id: 2,
                created_id: "1".into(),
            }
        );
    }

    #[test]
    fn each_required_field_is_checked() {
        let blanks = [
            DraftField::Name("  ".into()),
            DraftField::Age("".into()),
            DraftField::Address("".into()),
            DraftField::PercentageRange(0),
        ];

        for blank in blanks {
            let mut draft = filled();
            draft.apply(blank.clone());
            assert_eq!(
                draft.to_payload("1"),
                Err(ValidationError::MissingFields),
                "{:?}",
                blank
            );
        }
    }

    #[test]
    fn age_must_be_numeric() {
        let mut draft = filled();
        draft.apply(DraftField::Age("twenty".into()));

        assert_eq!(draft.to_payload("1"), Err(ValidationError::InvalidAge));
    }

    #[test]
    fn inactive_flag_is_kept() {
        let mut draft = filled();
        draft.apply(DraftField::Active(false));

        assert!(!assert_ok!(draft.to_payload("1")).is_active);
    }

    #[test]
    fn drafts_from_records_default_missing_range_to_zero() {
        let mut record = student(3, "Ada", 1);
        assert_eq!(StudentDraft::from(&record).percentage_range_id, 2);

        record.percentage_range = None;
        let draft = StudentDraft::from(&record);

        assert_eq!(draft.percentage_range_id, 0);
        assert_eq!(draft.age, "20");
        assert_eq!(draft.to_payload("1"), Err(ValidationError::MissingFields));
    }
}
