use std::fs;

use spdlog::{debug, info};

use crate::collection::Collection;
use crate::config::Config;
use crate::error::IngestError;
use crate::post::Post;
use crate::post_list::PostList;

/// One full ingestion pass: discover sources, validate every file, build
/// the index. Single-threaded and stateless; a failed pass leaves nothing
/// behind for a publisher to pick up.
///
/// Per-file validation results are aggregated: one run reports every
/// broken file, not just the first. Slug collisions surface when the
/// collection is built, after all files validated.
pub fn ingest(config: &Config) -> Result<Collection, IngestError> {
    let post_list = PostList {
        root_dir: config.paths.posts_dir.clone(),
        index_file: format!("{}.md", config.defaults.index_base_name),
    };

    let sources = post_list.retrieve()?;

    let mut posts = Vec::with_capacity(sources.len());
    let mut errors = vec![];
    for file_name in sources {
        let raw = fs::read_to_string(&file_name)?;
        match Post::from_string(&file_name, &raw) {
            Ok(post) => {
                debug!("Validated {} as `{}`", file_name.display(), post.slug);
                posts.push(post);
            }
            Err(err) => errors.push(err),
        }
    }

    if !errors.is_empty() {
        return Err(IngestError::Validation(errors));
    }

    let collection = Collection::build(posts)?;
    let drafts = collection.all().filter(|post| post.front.draft).count();
    info!(
        "Ingested {} posts ({} drafts) from {}",
        collection.len(),
        drafts,
        config.paths.posts_dir.display()
    );

    Ok(collection)
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use crate::config::{Defaults, Paths, Site};
    use crate::error::ValidationError;
    use crate::test_data::{DRAFT_POST, VALID_POST};

    use super::*;

    fn write_post(dir: &Path, name: &str, content: &str) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    fn config_for(posts_dir: &Path) -> Config {
        Config {
            site: Site {
                base_url: "https://blog.example.com".to_string(),
                title: "Example blog".to_string(),
                description: None,
            },
            paths: Paths {
                posts_dir: posts_dir.to_path_buf(),
            },
            defaults: Defaults::default(),
            log: None,
        }
    }

    #[test]
    fn test_happy_pass() {
        let dir = tempfile::tempdir().unwrap();
        write_post(dir.path(), "aks.md", VALID_POST);
        write_post(dir.path(), "draft.md", DRAFT_POST);

        let collection = ingest(&config_for(dir.path())).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.published().count(), 1);
        assert!(collection.by_slug("aks-private-endpoint").is_ok());
    }

    #[test]
    fn test_all_broken_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_post(
            dir.path(),
            "no-author.md",
            "---\ntitle: t\npubDatetime: 2025-01-01\ndraft: false\n---\n",
        );
        write_post(
            dir.path(),
            "bad-date.md",
            "---\nauthor: a\ntitle: t\npubDatetime: someday\ndraft: false\n---\n",
        );
        write_post(dir.path(), "fine.md", VALID_POST);

        let err = ingest(&config_for(dir.path())).unwrap_err();
        match err {
            IngestError::Validation(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ValidationError::Schema { field: "author", .. })));
                assert!(errors.iter().any(
                    |e| matches!(e, ValidationError::MalformedField { field: "pubDatetime", .. })
                ));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_slug_collision_aborts_the_pass() {
        let dir = tempfile::tempdir().unwrap();
        let collide = "---\nauthor: a\ntitle: Hello\npubDatetime: 2025-01-01\npostSlug: hello\ndraft: false\n---\n";
        write_post(dir.path(), "hello-a.md", collide);
        write_post(dir.path(), "hello-b.md", collide);

        let err = ingest(&config_for(dir.path())).unwrap_err();
        match err {
            IngestError::SlugCollision { slug, first, second } => {
                assert_eq!(slug, "hello");
                let pair = [first, second];
                assert!(pair.contains(&dir.path().join("hello-a.md")));
                assert!(pair.contains(&dir.path().join("hello-b.md")));
            }
            other => panic!("expected SlugCollision, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_posts_dir_is_io_error() {
        let config = config_for(&PathBuf::from("does/not/exist"));
        assert!(matches!(
            ingest(&config).unwrap_err(),
            IngestError::Io(_)
        ));
    }
}
