//! Navigation targets produced by the flows.

use std::fmt;
use std::sync::LazyLock;
use url::Url;

/// Anchor used only to run slugs through URL path-segment encoding.
static ROUTE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/").expect("route base is valid"));

/// Where the user goes after a flow completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Entry point of the creation flow.
    Home,
    /// Details view for a slug.
    Details(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Details(slug) => {
                let mut url = ROUTE_BASE.clone();
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.clear().extend(["stats", slug.as_str()]);
                }
                url.path().to_string()
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
