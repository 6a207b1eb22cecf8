//! Backend endpoint construction.
//!
//! | Operation | Method & Path |
//! |---|---|
//! | Create short link | `POST /api/shorten` |
//! | Get statistics | `GET /api/stats/{slug}` |
//! | Delete link | `DELETE /api/links/{slug}` |

use url::Url;

/// Builds an endpoint URL by appending path segments to `base`.
///
/// Each segment is percent-encoded on its own, so a slug can never escape
/// into another path. Any path already present on `base` is kept as a prefix.
pub fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

pub fn shorten(base: &Url) -> Url {
    endpoint(base, &["api", "shorten"])
}

pub fn stats(base: &Url, slug: &str) -> Url {
    endpoint(base, &["api", "stats", slug])
}

pub fn link(base: &Url, slug: &str) -> Url {
    endpoint(base, &["api", "links", slug])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn test_shorten_endpoint() {
        assert_eq!(
            shorten(&base("https://s.example.com")).as_str(),
            "https://s.example.com/api/shorten"
        );
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        assert_eq!(
            stats(&base("http://localhost:3000/backend/"), "abc123").as_str(),
            "http://localhost:3000/backend/api/stats/abc123"
        );
        assert_eq!(
            link(&base("http://localhost:3000/backend"), "abc123").as_str(),
            "http://localhost:3000/backend/api/links/abc123"
        );
    }

    #[test]
    fn test_slug_is_a_single_segment() {
        assert_eq!(
            stats(&base("https://s.example.com"), "a/b?c").as_str(),
            "https://s.example.com/api/stats/a%2Fb%3Fc"
        );
    }
}
