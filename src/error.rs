use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A single source file that failed validation. Every variant carries the
/// path of the offending file.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required field `{field}` - file={}", .path.display())]
    Schema { field: &'static str, path: PathBuf },

    #[error("field `{field}` has invalid value `{value}`: {reason} - file={}", .path.display())]
    MalformedField {
        field: &'static str,
        value: String,
        reason: String,
        path: PathBuf,
    },

    #[error("no frontmatter block at the top of the file - file={}", .path.display())]
    MissingFrontmatter { path: PathBuf },

    #[error("frontmatter block is never closed - file={}", .path.display())]
    UnterminatedFrontmatter { path: PathBuf },

    #[error("invalid YAML in frontmatter: {source} - file={}", .path.display())]
    Yaml {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
}

/// Failure of a whole ingestion pass. Any of these aborts the build;
/// nothing partially validated is ever handed to a publisher.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("{} file(s) failed validation", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("slug `{slug}` resolves from both {} and {}", .first.display(), .second.display())]
    SlugCollision {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<ValidationError> for IngestError {
    fn from(err: ValidationError) -> Self {
        IngestError::Validation(vec![err])
    }
}

/// A `by_slug` lookup that found nothing. Recoverable: the caller renders
/// a 404 or falls back, the collection itself is fine.
#[derive(Debug, Error)]
#[error("no post with slug `{slug}`")]
pub struct NotFoundError {
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_the_file() {
        let err = ValidationError::Schema {
            field: "author",
            path: PathBuf::from("posts/broken.md"),
        };
        let msg = err.to_string();
        assert!(msg.contains("author"));
        assert!(msg.contains("posts/broken.md"));
    }

    #[test]
    fn test_collision_names_both_paths() {
        let err = IngestError::SlugCollision {
            slug: "hello".to_string(),
            first: PathBuf::from("posts/hello-a.md"),
            second: PathBuf::from("posts/hello-b.md"),
        };
        let msg = err.to_string();
        assert!(msg.contains("hello-a.md"));
        assert!(msg.contains("hello-b.md"));
    }
}
