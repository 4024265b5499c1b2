//! Route table for the site (single source of truth for paths and labels).

/// Brand name shown in the navbar, the footer and the document title.
pub const SITE_NAME: &str = "Chief Live Gaming";

/// Every path the site links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    Portfolio,
    Contact,
    Commission,
}

impl SiteRoute {
    /// All routes in navbar order.
    pub const ALL: [SiteRoute; 4] = [
        SiteRoute::Home,
        SiteRoute::Portfolio,
        SiteRoute::Contact,
        SiteRoute::Commission,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            SiteRoute::Home => "/",
            SiteRoute::Portfolio => "/portfolio",
            SiteRoute::Contact => "/contact",
            SiteRoute::Commission => "/commission",
        }
    }

    /// Link text used in the navbar.
    pub const fn label(self) -> &'static str {
        match self {
            SiteRoute::Home => SITE_NAME,
            SiteRoute::Portfolio => "Portfolio",
            SiteRoute::Contact => "Contact",
            SiteRoute::Commission => "Commission Work",
        }
    }

    /// Resolve a request path to a route.
    ///
    /// Query strings and fragments are ignored, and a single trailing slash
    /// is tolerated (`/contact/` resolves like `/contact`).
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl std::fmt::Display for SiteRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_resolves_to_its_route() {
        for route in SiteRoute::ALL {
            assert_eq!(SiteRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn trailing_slash_query_and_fragment_are_ignored() {
        assert_eq!(SiteRoute::from_path("/contact/"), Some(SiteRoute::Contact));
        assert_eq!(
            SiteRoute::from_path("/portfolio?page=2"),
            Some(SiteRoute::Portfolio)
        );
        assert_eq!(
            SiteRoute::from_path("/commission#pricing"),
            Some(SiteRoute::Commission)
        );
        assert_eq!(SiteRoute::from_path("/?ref=twitch"), Some(SiteRoute::Home));
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert_eq!(SiteRoute::from_path("/blog"), None);
        assert_eq!(SiteRoute::from_path(""), None);
        assert_eq!(SiteRoute::from_path("/contact//"), None);
        assert_eq!(SiteRoute::from_path("contact"), None);
    }

    #[test]
    fn labels_match_navbar_copy() {
        let labels: Vec<_> = SiteRoute::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            ["Chief Live Gaming", "Portfolio", "Contact", "Commission Work"]
        );
    }
}
