//! User record types.
//!
//! These types carry the wire field names (camelCase) so JSON bodies and
//! the stored header row stay aligned with a single source of truth.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Characters that cannot appear in stored field values.
///
/// The collection is persisted one record per line with comma-separated
/// fields and no escaping, so any of these would corrupt the row.
pub const FORBIDDEN_CHARS: [char; 3] = [',', '\n', '\r'];

/// A persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Six-digit identifier, unique across the collection.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Contact email address.
    pub email: String,

    /// Stored avatar filename; empty when the user has none.
    pub avatar: String,

    /// Contact phone number.
    pub phone: String,

    /// ISO 8601 date or date-time string.
    pub birth_date: String,
}

/// Input for creating a user.
///
/// Carries no id in the common case; the store assigns one on insert.
/// An explicit non-zero id is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    pub phone: String,
    pub birth_date: String,
}

impl NewUser {
    /// Check the creation invariants: required fields present, a plausible
    /// email, a parseable birth date, and no characters that would corrupt
    /// the stored row.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("name", &self.name)?;
        validate_email(&self.email)?;
        validate_text("avatar", &self.avatar)?;
        validate_required("phone", &self.phone)?;
        validate_birth_date("birthDate", &self.birth_date)?;
        Ok(())
    }

    /// Convert into a stored record under the given id.
    pub fn into_user(self, id: u32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            avatar: self.avatar,
            phone: self.phone,
            birth_date: self.birth_date,
        }
    }
}

/// A partial update: present fields overwrite, absent fields are retained.
///
/// The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

impl UserPatch {
    /// Check every present field against the same rules as creation.
    ///
    /// A present-but-empty required field is rejected; an empty avatar is
    /// allowed (it clears the stored filename).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_required("name", name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(avatar) = &self.avatar {
            validate_text("avatar", avatar)?;
        }
        if let Some(phone) = &self.phone {
            validate_required("phone", phone)?;
        }
        if let Some(birth_date) = &self.birth_date {
            validate_birth_date("birthDate", birth_date)?;
        }
        Ok(())
    }

    /// Shallow-merge the present fields onto an existing record.
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(avatar) = &self.avatar {
            user.avatar = avatar.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = phone.clone();
        }
        if let Some(birth_date) = &self.birth_date {
            user.birth_date = birth_date.clone();
        }
    }
}

/// Parse a birth date as a calendar day.
///
/// Accepts an RFC 3339 date-time (the time-of-day is dropped) or a bare
/// `YYYY-MM-DD` date.
pub(crate) fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn validate_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    for found in FORBIDDEN_CHARS {
        if value.contains(found) {
            return Err(ValidationError::ForbiddenCharacter { field, found });
        }
    }
    Ok(())
}

fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    validate_text(field, value)
}

fn validate_email(value: &str) -> Result<(), ValidationError> {
    validate_required("email", value)?;

    let invalid = |reason: &str| ValidationError::Email {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    if value.contains(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Err(invalid("missing '@'"));
    };
    if local.is_empty() {
        return Err(invalid("empty local part"));
    }
    if domain.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(invalid("invalid domain"));
    }
    Ok(())
}

fn validate_birth_date(field: &'static str, value: &str) -> Result<(), ValidationError> {
    validate_required(field, value)?;
    if parse_birth_date(value).is_none() {
        return Err(ValidationError::BirthDate {
            value: value.to_string(),
            reason: "expected an ISO 8601 date or date-time".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_user() -> NewUser {
        NewUser {
            id: None,
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            avatar: String::new(),
            phone: "+44 20 7946 0000".to_string(),
            birth_date: "1815-12-10".to_string(),
        }
    }

    #[test]
    fn valid_new_user() {
        assert!(sample_new_user().validate().is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let mut input = sample_new_user();
        input.name = String::new();
        assert!(matches!(
            input.validate(),
            Err(ValidationError::Empty { field: "name" })
        ));
    }

    #[test]
    fn email_without_at_rejected() {
        let mut input = sample_new_user();
        input.email = "ada.example.com".to_string();
        assert!(matches!(input.validate(), Err(ValidationError::Email { .. })));
    }

    #[test]
    fn email_with_bare_domain_rejected() {
        let mut input = sample_new_user();
        input.email = "ada@localhost".to_string();
        assert!(matches!(input.validate(), Err(ValidationError::Email { .. })));
    }

    #[test]
    fn unparseable_birth_date_rejected() {
        let mut input = sample_new_user();
        input.birth_date = "tenth of december".to_string();
        assert!(matches!(
            input.validate(),
            Err(ValidationError::BirthDate { .. })
        ));
    }

    #[test]
    fn rfc3339_birth_date_accepted() {
        let mut input = sample_new_user();
        input.birth_date = "1815-12-10T08:30:00.000Z".to_string();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn separator_in_value_rejected() {
        let mut input = sample_new_user();
        input.name = "Lovelace, Ada".to_string();
        assert!(matches!(
            input.validate(),
            Err(ValidationError::ForbiddenCharacter {
                field: "name",
                found: ','
            })
        ));
    }

    #[test]
    fn newline_in_value_rejected() {
        let mut input = sample_new_user();
        input.phone = "555\n123".to_string();
        assert!(matches!(
            input.validate(),
            Err(ValidationError::ForbiddenCharacter { field: "phone", .. })
        ));
    }

    #[test]
    fn into_user_keeps_fields() {
        let user = sample_new_user().into_user(123456);
        assert_eq!(user.id, 123456);
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.birth_date, "1815-12-10");
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut user = sample_new_user().into_user(123456);
        let patch = UserPatch {
            email: Some("countess@example.com".to_string()),
            ..UserPatch::default()
        };

        patch.apply(&mut user);

        assert_eq!(user.email, "countess@example.com");
        assert_eq!(user.name, "Ada Lovelace");
        assert_eq!(user.phone, "+44 20 7946 0000");
        assert_eq!(user.birth_date, "1815-12-10");
    }

    #[test]
    fn patch_rejects_blank_required_field() {
        let patch = UserPatch {
            name: Some(String::new()),
            ..UserPatch::default()
        };
        assert!(matches!(
            patch.validate(),
            Err(ValidationError::Empty { field: "name" })
        ));
    }

    #[test]
    fn patch_allows_clearing_avatar() {
        let patch = UserPatch {
            avatar: Some(String::new()),
            ..UserPatch::default()
        };
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn user_serializes_with_camel_case_birth_date() {
        let user = sample_new_user().into_user(654321);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["birthDate"], "1815-12-10");
        assert_eq!(json["id"], 654321);
    }

    #[test]
    fn new_user_defaults_optional_fields() {
        let input: NewUser = serde_json::from_str(
            r#"{"name":"Ada","email":"ada@example.com","phone":"555","birthDate":"1815-12-10"}"#,
        )
        .unwrap();
        assert_eq!(input.id, None);
        assert_eq!(input.avatar, "");
    }

    #[test]
    fn random_profile_omits_null_id() {
        let json = serde_json::to_string(&sample_new_user()).unwrap();
        assert!(!json.contains("\"id\""));
    }
}
