use fmt::Display;
use std::fmt::Formatter;
use std::path::{Path, PathBuf};
use std::{fmt, fs};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{IngestError, ValidationError};
use crate::frontmatter;
use crate::slug;

/// The validated YAML header of one post. Serializes back to the same
/// camelCase keys it was authored with, so frontmatter fields survive a
/// serialize/parse round trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub author: String,
    pub pub_datetime: DateTime<Utc>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_slug: Option<String>,
    pub featured: bool,
    pub draft: bool,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    pub description: String,
}

/// One ingested source file. Immutable: every ingestion pass produces
/// fresh records, nothing is patched in place.
#[derive(Debug, Clone)]
pub struct Post {
    pub file_name: PathBuf,
    pub front: FrontMatter,
    pub slug: String,
    pub body: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slug={}, date={}, author={}, title={}",
            self.slug, self.front.pub_datetime, self.front.author, self.front.title
        )
    }
}

/// Example of post
/// ---
/// author: Nitya
/// pubDatetime: 2025-01-01T12:00:00Z
/// title: "[Az] Day 01: Setup pulumi developer account"
/// draft: false
/// tags: [Azure, Pulumi]
/// ---
///
/// Body markdown follows the closing delimiter.
impl Post {
    pub fn from_file(file_name: &Path) -> Result<Post, IngestError> {
        let raw = fs::read_to_string(file_name)?;
        Ok(Self::from_string(file_name, &raw)?)
    }

    pub fn from_string(file_name: &Path, raw: &str) -> Result<Post, ValidationError> {
        let (front, body) = frontmatter::parse(raw, file_name)?;

        let slug = slug::resolve(front.post_slug.as_deref(), &front.title);
        if slug.is_empty() {
            return Err(ValidationError::MalformedField {
                field: "title",
                value: front.title.clone(),
                reason: "normalizes to an empty slug".to_string(),
                path: file_name.to_path_buf(),
            });
        }

        Ok(Post {
            file_name: file_name.to_path_buf(),
            front,
            slug,
            body: body.to_string(),
        })
    }

    /// Renders the post back to its on-disk form.
    pub fn to_markdown(&self) -> String {
        let yaml = serde_yaml::to_string(&self.front).unwrap();
        format!("---\n{}---\n\n{}", yaml, self.body)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::{DRAFT_POST, VALID_POST};

    use super::*;

    #[test]
    fn test_from_string() {
        let file_name = PathBuf::from("posts/aks-private-endpoint.md");
        let post = Post::from_string(&file_name, VALID_POST).unwrap();

        assert_eq!(post.slug, "aks-private-endpoint");
        assert_eq!(post.front.author, "Nitya");
        assert!(!post.front.draft);
        assert!(post.body.contains("## Why private clusters"));
    }

    #[test]
    fn test_slug_falls_back_to_title() {
        let file_name = PathBuf::from("posts/day01.md");
        let raw = "---\nauthor: Nitya\npubDatetime: \"2025-01-01T12:00:00Z\"\ntitle: \"[Az] Day 01: Setup pulumi developer account\"\ndraft: false\n---\nbody\n";
        let post = Post::from_string(&file_name, raw).unwrap();
        assert_eq!(post.slug, "az-day-01-setup-pulumi-developer-account");
    }

    #[test]
    fn test_title_with_no_slug_material_is_rejected() {
        let file_name = PathBuf::from("posts/odd.md");
        let raw = "---\nauthor: a\npubDatetime: 2025-01-01\ntitle: \"!!!\"\ndraft: false\n---\n";
        let err = Post::from_string(&file_name, raw).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MalformedField { field: "title", .. }
        ));
    }

    #[test]
    fn test_frontmatter_round_trip() {
        let file_name = PathBuf::from("posts/aks-private-endpoint.md");
        let post = Post::from_string(&file_name, VALID_POST).unwrap();

        let reparsed = Post::from_string(&file_name, &post.to_markdown()).unwrap();
        assert_eq!(reparsed.front, post.front);
        assert_eq!(reparsed.slug, post.slug);
    }

    #[test]
    fn test_draft_round_trip_keeps_flags() {
        let file_name = PathBuf::from("posts/draft.md");
        let post = Post::from_string(&file_name, DRAFT_POST).unwrap();
        assert!(post.front.draft);

        let reparsed = Post::from_string(&file_name, &post.to_markdown()).unwrap();
        assert_eq!(reparsed.front, post.front);
    }
}
