//! Listing queries.
//!
//! A [`UserQuery`] narrows the collection with optional per-field
//! predicates and carries the pagination window. Filtering and windowing
//! stay separate so the pre-pagination match count can be reported.

use serde::Deserialize;

use crate::error::ValidationError;
use crate::user::{User, parse_birth_date};

/// Default page size when `take` is not supplied.
pub const DEFAULT_TAKE: usize = 10;

/// A transient filter specification for listing users.
///
/// Text predicates are case-insensitive substring matches. Birth-date
/// bounds are inclusive and compared at day granularity. An empty string
/// counts as an absent predicate, matching how untouched search form
/// fields arrive on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date_gte: Option<String>,
    pub birth_date_lte: Option<String>,
    pub skip: Option<usize>,
    pub take: Option<usize>,
}

impl UserQuery {
    /// Offset into the filtered collection (defaults to 0).
    pub fn skip(&self) -> usize {
        self.skip.unwrap_or(0)
    }

    /// Page size (defaults to [`DEFAULT_TAKE`]).
    pub fn take(&self) -> usize {
        self.take.unwrap_or(DEFAULT_TAKE)
    }

    /// Check that any supplied date bounds parse.
    ///
    /// Callers reject bad queries up front so that filtering itself stays
    /// infallible.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for bound in [&self.birth_date_gte, &self.birth_date_lte] {
            if let Some(value) = filled(bound.as_deref()) {
                if parse_birth_date(value).is_none() {
                    return Err(ValidationError::BirthDate {
                        value: value.to_string(),
                        reason: "expected an ISO 8601 date or date-time".to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// True when the record satisfies every supplied predicate.
    pub fn matches(&self, user: &User) -> bool {
        contains_ci(&user.name, self.name.as_deref())
            && contains_ci(&user.email, self.email.as_deref())
            && contains_ci(&user.phone, self.phone.as_deref())
            && self.matches_birth_date(user)
    }

    fn matches_birth_date(&self, user: &User) -> bool {
        let gte = filled(self.birth_date_gte.as_deref());
        let lte = filled(self.birth_date_lte.as_deref());
        if gte.is_none() && lte.is_none() {
            return true;
        }

        // A stored date that cannot be parsed never matches a bound.
        let Some(born) = parse_birth_date(&user.birth_date) else {
            return false;
        };

        // Bounds are validated at the boundary; an unparseable one is
        // ignored here rather than silently excluding everything.
        if let Some(bound) = gte.and_then(parse_birth_date) {
            if born < bound {
                return false;
            }
        }
        if let Some(bound) = lte.and_then(parse_birth_date) {
            if born > bound {
                return false;
            }
        }
        true
    }
}

/// Treat empty strings as absent.
fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Case-insensitive substring containment, passing when no needle is given.
fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match filled(needle) {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32, name: &str, email: &str, phone: &str, birth_date: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            avatar: String::new(),
            phone: phone.to_string(),
            birth_date: birth_date.to_string(),
        }
    }

    fn ada() -> User {
        user(1, "Ada Lovelace", "ada@example.com", "+44 20 7946", "1815-12-10")
    }

    #[test]
    fn no_predicates_match_everything() {
        assert!(UserQuery::default().matches(&ada()));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let query = UserQuery {
            name: Some(String::new()),
            email: Some(String::new()),
            birth_date_gte: Some(String::new()),
            ..UserQuery::default()
        };
        assert!(query.matches(&ada()));
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let query = UserQuery {
            name: Some("LOVE".to_string()),
            ..UserQuery::default()
        };
        assert!(query.matches(&ada()));

        let query = UserQuery {
            name: Some("lacey".to_string()),
            ..UserQuery::default()
        };
        assert!(!query.matches(&ada()));
    }

    #[test]
    fn predicates_are_conjunctive() {
        let query = UserQuery {
            name: Some("ada".to_string()),
            email: Some("nobody".to_string()),
            ..UserQuery::default()
        };
        assert!(!query.matches(&ada()));

        let query = UserQuery {
            name: Some("ada".to_string()),
            email: Some("example".to_string()),
            ..UserQuery::default()
        };
        assert!(query.matches(&ada()));
    }

    #[test]
    fn phone_substring_matches() {
        let query = UserQuery {
            phone: Some("7946".to_string()),
            ..UserQuery::default()
        };
        assert!(query.matches(&ada()));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let query = UserQuery {
            birth_date_gte: Some("1815-12-10".to_string()),
            birth_date_lte: Some("1815-12-10".to_string()),
            ..UserQuery::default()
        };
        assert!(query.matches(&ada()));
    }

    #[test]
    fn lower_bound_excludes_earlier_dates() {
        let query = UserQuery {
            birth_date_gte: Some("1900-01-01".to_string()),
            ..UserQuery::default()
        };
        assert!(!query.matches(&ada()));
    }

    #[test]
    fn upper_bound_excludes_later_dates() {
        let query = UserQuery {
            birth_date_lte: Some("1800-01-01".to_string()),
            ..UserQuery::default()
        };
        assert!(!query.matches(&ada()));
    }

    #[test]
    fn date_time_records_compare_at_day_granularity() {
        let record = user(2, "Grace", "grace@example.com", "555", "1906-12-09T18:00:00.000Z");
        let query = UserQuery {
            birth_date_gte: Some("1906-12-09".to_string()),
            birth_date_lte: Some("1906-12-09".to_string()),
            ..UserQuery::default()
        };
        assert!(query.matches(&record));
    }

    #[test]
    fn unparseable_stored_date_never_matches_a_bound() {
        let record = user(3, "Mystery", "m@example.com", "555", "unknown");
        let query = UserQuery {
            birth_date_gte: Some("1800-01-01".to_string()),
            ..UserQuery::default()
        };
        assert!(!query.matches(&record));

        // Without a bound the record still lists.
        assert!(UserQuery::default().matches(&record));
    }

    #[test]
    fn validate_rejects_unparseable_bound() {
        let query = UserQuery {
            birth_date_lte: Some("next tuesday".to_string()),
            ..UserQuery::default()
        };
        assert!(query.validate().is_err());
        assert!(UserQuery::default().validate().is_ok());
    }

    #[test]
    fn skip_and_take_have_defaults() {
        let query = UserQuery::default();
        assert_eq!(query.skip(), 0);
        assert_eq!(query.take(), DEFAULT_TAKE);

        let query = UserQuery {
            skip: Some(20),
            take: Some(5),
            ..UserQuery::default()
        };
        assert_eq!(query.skip(), 20);
        assert_eq!(query.take(), 5);
    }
}
