//! Row codec for the on-disk collection format.
//!
//! The collection is one flat text file: a fixed header row naming the six
//! record fields, then one comma-separated row per record, columns mapped
//! positionally. There is no quoting or escaping; field values are
//! validated upstream to keep the separator out (see
//! [`roster_core::user::FORBIDDEN_CHARS`]).

use roster_core::error::StorageReadError;
use roster_core::user::User;

/// Field separator for rows.
pub(crate) const SEPARATOR: char = ',';

/// Fixed header row; column order is load-bearing.
pub(crate) const HEADER: &str = "id,name,email,avatar,phone,birthDate";

const FIELD_COUNT: usize = 6;

/// Parse whole-file contents into records.
///
/// Line numbers in errors are 1-based and count the header row.
pub(crate) fn parse_collection(contents: &str) -> Result<Vec<User>, StorageReadError> {
    let mut lines = contents.lines();

    match lines.next() {
        Some(header) if header == HEADER => {}
        _ => return Err(StorageReadError::InvalidHeader { expected: HEADER }),
    }

    let mut users = Vec::new();
    for (index, line) in lines.enumerate() {
        // Tolerate blank lines so a trailing newline stays harmless.
        if line.is_empty() {
            continue;
        }
        users.push(parse_row(index + 2, line)?);
    }

    Ok(users)
}

fn parse_row(line: usize, row: &str) -> Result<User, StorageReadError> {
    let fields: Vec<&str> = row.split(SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(StorageReadError::MalformedRow {
            line,
            reason: format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
        });
    }

    let id = fields[0]
        .parse::<u32>()
        .map_err(|e| StorageReadError::MalformedRow {
            line,
            reason: format!("invalid id '{}': {e}", fields[0]),
        })?;

    Ok(User {
        id,
        name: fields[1].to_string(),
        email: fields[2].to_string(),
        avatar: fields[3].to_string(),
        phone: fields[4].to_string(),
        birth_date: fields[5].to_string(),
    })
}

/// Serialize the collection, header first, one row per record.
pub(crate) fn serialize_collection(users: &[User]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for user in users {
        out.push_str(&serialize_row(user));
        out.push('\n');
    }
    out
}

fn serialize_row(user: &User) -> String {
    format!(
        "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
        user.id,
        user.name,
        user.email,
        user.avatar,
        user.phone,
        user.birth_date,
        sep = SEPARATOR,
    )
}
