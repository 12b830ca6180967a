use std::path::Path;

use serde_yaml::Value;

use crate::error::ValidationError;
use crate::post::FrontMatter;
use crate::text_utils::parse_pub_datetime;

const DELIMITER: &str = "---";

/// Splits raw file content into the YAML header and the body.
///
/// Only the first `---`-delimited block is metadata. Some corpora carry
/// files where a whole second revision, frontmatter included, was pasted
/// after the first one; everything past the first closing delimiter is
/// body, later delimited blocks included.
pub fn split<'a>(raw: &'a str, path: &Path) -> Result<(&'a str, &'a str), ValidationError> {
    let raw = raw.trim_start_matches('\u{feff}');

    // Blank lines above the opening delimiter are tolerated
    let mut cursor = raw;
    let after_open = loop {
        let (line, rest) = match cursor.split_once('\n') {
            Some(pair) => pair,
            None => (cursor, ""),
        };
        if line.trim().is_empty() {
            if rest.is_empty() {
                return Err(ValidationError::MissingFrontmatter {
                    path: path.to_path_buf(),
                });
            }
            cursor = rest;
            continue;
        }
        if line.trim_end() == DELIMITER {
            break rest;
        }
        return Err(ValidationError::MissingFrontmatter {
            path: path.to_path_buf(),
        });
    };

    let mut header_len = 0usize;
    let mut scan = after_open;
    loop {
        let (line, rest) = match scan.split_once('\n') {
            Some(pair) => pair,
            None => (scan, ""),
        };
        if line.trim_end() == DELIMITER {
            return Ok((&after_open[..header_len], rest));
        }
        if rest.is_empty() {
            return Err(ValidationError::UnterminatedFrontmatter {
                path: path.to_path_buf(),
            });
        }
        header_len += line.len() + 1;
        scan = rest;
    }
}

/// Extracts and validates the frontmatter of one source file, returning the
/// typed header and the opaque body. Pure: no I/O, no logging.
pub fn parse<'a>(raw: &'a str, path: &Path) -> Result<(FrontMatter, &'a str), ValidationError> {
    let (header, body) = split(raw, path)?;

    let value: Value =
        serde_yaml::from_str(header).map_err(|source| ValidationError::Yaml {
            source,
            path: path.to_path_buf(),
        })?;

    let front = validate(&value, path)?;
    Ok((front, body))
}

fn validate(value: &Value, path: &Path) -> Result<FrontMatter, ValidationError> {
    if !value.is_null() && !value.is_mapping() {
        return Err(malformed(
            "frontmatter",
            value,
            "expected a mapping of fields",
            path,
        ));
    }

    let author = required_str(value, "author", path)?;
    let title = required_str(value, "title", path)?;
    if title.trim().is_empty() {
        return Err(ValidationError::MalformedField {
            field: "title",
            value: title,
            reason: "must not be empty".to_string(),
            path: path.to_path_buf(),
        });
    }

    let raw_date = required_str(value, "pubDatetime", path)?;
    let pub_datetime = parse_pub_datetime(&raw_date).map_err(|reason| {
        ValidationError::MalformedField {
            field: "pubDatetime",
            value: raw_date.clone(),
            reason,
            path: path.to_path_buf(),
        }
    })?;

    let draft = required_bool(value, "draft", path)?;
    let featured = optional_bool(value, "featured", path)?.unwrap_or(false);
    let post_slug = optional_str(value, "postSlug", path)?;
    let og_image = optional_str(value, "ogImage", path)?;
    let description = optional_str(value, "description", path)?.unwrap_or_default();
    let tags = extract_tags(value, path)?;

    Ok(FrontMatter {
        author,
        pub_datetime,
        title,
        post_slug,
        featured,
        draft,
        tags,
        og_image,
        description,
    })
}

fn required_str(value: &Value, field: &'static str, path: &Path) -> Result<String, ValidationError> {
    match value.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Schema {
            field,
            path: path.to_path_buf(),
        }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(malformed(field, other, "expected a string", path)),
    }
}

fn optional_str(
    value: &Value,
    field: &'static str,
    path: &Path,
) -> Result<Option<String>, ValidationError> {
    match value.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(malformed(field, other, "expected a string", path)),
    }
}

fn required_bool(value: &Value, field: &'static str, path: &Path) -> Result<bool, ValidationError> {
    match value.get(field) {
        None | Some(Value::Null) => Err(ValidationError::Schema {
            field,
            path: path.to_path_buf(),
        }),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(malformed(field, other, "expected true or false", path)),
    }
}

fn optional_bool(
    value: &Value,
    field: &'static str,
    path: &Path,
) -> Result<Option<bool>, ValidationError> {
    match value.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(malformed(field, other, "expected true or false", path)),
    }
}

/// A scalar string is normalized to a single-element list. Empty-string
/// entries are dropped; authored casing is kept for display.
fn extract_tags(value: &Value, path: &Path) -> Result<Vec<String>, ValidationError> {
    match value.get("tags") {
        None | Some(Value::Null) => Ok(vec![]),
        Some(Value::String(s)) => {
            let tag = s.trim();
            if tag.is_empty() {
                Ok(vec![])
            } else {
                Ok(vec![tag.to_string()])
            }
        }
        Some(Value::Sequence(seq)) => {
            let mut tags = Vec::with_capacity(seq.len());
            for entry in seq {
                let Some(tag) = entry.as_str() else {
                    return Err(malformed("tags", entry, "expected a list of strings", path));
                };
                let tag = tag.trim();
                if !tag.is_empty() {
                    tags.push(tag.to_string());
                }
            }
            Ok(tags)
        }
        Some(other) => Err(malformed("tags", other, "expected a list of strings", path)),
    }
}

fn malformed(field: &'static str, value: &Value, reason: &str, path: &Path) -> ValidationError {
    let value = serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_default();
    ValidationError::MalformedField {
        field,
        value,
        reason: reason.to_string(),
        path: path.to_path_buf(),
    }
}
