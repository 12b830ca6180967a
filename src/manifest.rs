use serde::Serialize;

use crate::collection::Collection;
use crate::config::Site;

/* Example
{
  "site": {
    "title": "Example blog",
    "baseUrl": "https://blog.example.com"
  },
  "posts": [
    {
      "slug": "aks-private-endpoint",
      "title": "Running AKS behind a private endpoint",
      "author": "Nitya",
      "pubDatetime": "2025-03-14T09:30:00+00:00",
      "description": "What it takes...",
      "tags": ["AKS", "Private", "Pulumi"],
      "featured": true,
      "link": "https://blog.example.com/posts/aks-private-endpoint/"
    }
  ]
}
*/

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestSite<'a> {
    title: &'a str,
    base_url: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestEntry<'a> {
    slug: &'a str,
    title: &'a str,
    author: &'a str,
    pub_datetime: String,
    description: &'a str,
    tags: &'a [String],
    featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    og_image: Option<&'a str>,
    link: String,
}

#[derive(Serialize)]
struct ManifestDoc<'a> {
    site: ManifestSite<'a>,
    posts: Vec<ManifestEntry<'a>>,
}

/// Renders the published posts as the JSON document the static renderer
/// and deploy tooling consume. Drafts never appear here.
pub fn render_manifest(collection: &Collection, site: &Site) -> serde_json::Result<String> {
    let posts = collection
        .published()
        .map(|post| ManifestEntry {
            slug: &post.slug,
            title: &post.front.title,
            author: &post.front.author,
            pub_datetime: post.front.pub_datetime.to_rfc3339(),
            description: &post.front.description,
            tags: &post.front.tags,
            featured: post.front.featured,
            og_image: post.front.og_image.as_deref(),
            link: full_link(&site.base_url, &post.slug),
        })
        .collect();

    let doc = ManifestDoc {
        site: ManifestSite {
            title: &site.title,
            base_url: &site.base_url,
        },
        posts,
    };

    serde_json::to_string_pretty(&doc)
}

fn full_link(base_url: &str, slug: &str) -> String {
    let base_url = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{}/posts/{}/", base_url, slug)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};

    use crate::post::{FrontMatter, Post};

    use super::*;

    fn site() -> Site {
        Site {
            base_url: "https://blog.example.com".to_string(),
            title: "Example blog".to_string(),
            description: None,
        }
    }

    fn make_post(
        slug: &str,
        title: &str,
        day: u32,
        draft: bool,
        featured: bool,
        tags: &[&str],
        og_image: Option<&str>,
        description: &str,
    ) -> Post {
        Post {
            file_name: PathBuf::from(format!("posts/{}.md", slug)),
            slug: slug.to_string(),
            front: FrontMatter {
                author: "Nitya".to_string(),
                pub_datetime: Utc.with_ymd_and_hms(2025, 1, day, 8, 0, 0).unwrap(),
                title: title.to_string(),
                post_slug: Some(slug.to_string()),
                featured,
                draft,
                tags: tags.iter().map(|t| t.to_string()).collect(),
                og_image: og_image.map(|s| s.to_string()),
                description: description.to_string(),
            },
            body: String::new(),
        }
    }

    #[test]
    fn test_render_manifest() {
        let posts = vec![
            make_post(
                "docker-caching",
                "Dockerfile caching",
                2,
                false,
                false,
                &["Docker"],
                None,
                "",
            ),
            make_post(
                "pulumi-day-1",
                "Day 1",
                3,
                false,
                true,
                &["Azure", "Pulumi"],
                Some("images/day1.png"),
                "Setting up the developer account.",
            ),
            make_post("secret", "Hidden draft", 4, true, false, &[], None, ""),
        ];
        let collection = crate::collection::Collection::build(posts).unwrap();

        let json = render_manifest(&collection, &site()).unwrap();
        assert_eq!(json, EXPECTED);
    }

    #[test]
    fn test_full_link_normalizes_trailing_slash() {
        assert_eq!(
            full_link("https://blog.example.com/", "hello"),
            "https://blog.example.com/posts/hello/"
        );
        assert_eq!(
            full_link("https://blog.example.com", "hello"),
            "https://blog.example.com/posts/hello/"
        );
    }

    const EXPECTED: &str = r#"{
  "site": {
    "title": "Example blog",
    "baseUrl": "https://blog.example.com"
  },
  "posts": [
    {
      "slug": "pulumi-day-1",
      "title": "Day 1",
      "author": "Nitya",
      "pubDatetime": "2025-01-03T08:00:00+00:00",
      "description": "Setting up the developer account.",
      "tags": [
        "Azure",
        "Pulumi"
      ],
      "featured": true,
      "ogImage": "images/day1.png",
      "link": "https://blog.example.com/posts/pulumi-day-1/"
    },
    {
      "slug": "docker-caching",
      "title": "Dockerfile caching",
      "author": "Nitya",
      "pubDatetime": "2025-01-02T08:00:00+00:00",
      "description": "",
      "tags": [
        "Docker"
      ],
      "featured": false,
      "link": "https://blog.example.com/posts/docker-caching/"
    }
  ]
}"#;
}
