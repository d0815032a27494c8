use std::sync::Arc;

use url::Url;

mod desktop;

pub trait UiLinkOpener: Send + Sync {
    fn open_url(&self, url: &str);
}

pub type LinkOpenerRef = Arc<dyn UiLinkOpener>;

pub use desktop::DesktopLinkOpener;

/// Parse `raw` and accept it only as an absolute `http`/`https` URL.
#[must_use]
pub fn validate_link(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_web_links_only() {
        assert!(validate_link("https://www.youtube.com/results?search_query=area+of+circle").is_some());
        assert!(validate_link("  http://example.com  ").is_some());
        assert!(validate_link("file:///etc/passwd").is_none());
        assert!(validate_link("javascript:alert(1)").is_none());
        assert!(validate_link("not a url").is_none());
        assert!(validate_link("").is_none());
    }
}
