use std::collections::HashMap;

use crate::error::{IngestError, NotFoundError};
use crate::post::Post;

/// The validated, indexed post set of one ingestion pass.
///
/// Owns every record, keeps them sorted by `pubDatetime` descending, and is
/// rebuilt wholesale on each pass; queries borrow, nothing mutates. Drafts
/// stay in the collection for preview tooling but never show up in the
/// published views.
#[derive(Debug)]
pub struct Collection {
    posts: Vec<Post>,
    slug_index: HashMap<String, usize>,
}

impl Collection {
    /// Sorts and indexes the posts. The first slug collision aborts the
    /// build; slugs are never suffixed or renamed to work around a
    /// duplicate.
    pub fn build(mut posts: Vec<Post>) -> Result<Collection, IngestError> {
        posts.sort_by(|a, b| b.front.pub_datetime.cmp(&a.front.pub_datetime));

        let mut slug_index = HashMap::with_capacity(posts.len());
        for (idx, post) in posts.iter().enumerate() {
            if let Some(prev) = slug_index.insert(post.slug.clone(), idx) {
                return Err(IngestError::SlugCollision {
                    slug: post.slug.clone(),
                    first: posts[prev].file_name.clone(),
                    second: post.file_name.clone(),
                });
            }
        }

        Ok(Collection { posts, slug_index })
    }

    /// Every post, drafts included, newest first.
    pub fn all(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }

    /// Public posts only, newest first.
    pub fn published(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|post| !post.front.draft)
    }

    /// Published posts flagged as featured, newest first.
    pub fn featured(&self) -> impl Iterator<Item = &Post> {
        self.published().filter(|post| post.front.featured)
    }

    /// Published posts carrying `tag`, matched case-insensitively.
    pub fn by_tag(&self, tag: &str) -> Vec<&Post> {
        let tag = tag.to_lowercase();
        self.published()
            .filter(|post| post.front.tags.iter().any(|t| t.to_lowercase() == tag))
            .collect()
    }

    pub fn by_slug(&self, slug: &str) -> Result<&Post, NotFoundError> {
        self.slug_index
            .get(slug)
            .map(|&idx| &self.posts[idx])
            .ok_or_else(|| NotFoundError {
                slug: slug.to_string(),
            })
    }

    /// Case-folded tag histogram over published posts, most used first,
    /// ties broken alphabetically.
    pub fn tags(&self) -> Vec<(String, usize)> {
        let mut tag_map: HashMap<String, usize> = HashMap::new();
        for post in self.published() {
            for tag in &post.front.tags {
                *tag_map.entry(tag.to_lowercase()).or_insert(0) += 1;
            }
        }

        let mut tag_list: Vec<(String, usize)> = tag_map.into_iter().collect();
        tag_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        tag_list
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
