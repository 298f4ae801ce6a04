//! The site's route table.

use std::fmt;

/// Every page the site serves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/cars`
    Cars,
    /// `/cars/{slug}`
    Car { slug: String },
    /// `/brands`
    Brands,
    /// `/brands/{slug}`
    Brand { slug: String },
    /// `/dealerships`
    Dealerships,
    /// `/dealerships/{slug}`
    Dealership { slug: String },
}

/// `(pattern, handler)` pairs in match order.
pub const ROUTE_TABLE: [(&str, &str); 7] = [
    ("/", "home"),
    ("/cars", "car_list"),
    ("/cars/:slug", "car_detail"),
    ("/brands", "brand_list"),
    ("/brands/:slug", "brand_detail"),
    ("/dealerships", "dealership_list"),
    ("/dealerships/:slug", "dealership_detail"),
];

impl Route {
    /// Match a request path. Query strings, fragments and trailing slashes
    /// are ignored and slugs are percent-decoded. Returns `None` for paths
    /// the site does not serve.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let collection = match segments.next() {
            None => return Some(Self::Home),
            Some(first) => first,
        };
        let slug = match segments.next() {
            None => None,
            Some(raw) => Some(decode_slug(raw)?),
        };
        if segments.next().is_some() {
            return None;
        }

        match (collection, slug) {
            ("cars", None) => Some(Self::Cars),
            ("cars", Some(slug)) => Some(Self::Car { slug }),
            ("brands", None) => Some(Self::Brands),
            ("brands", Some(slug)) => Some(Self::Brand { slug }),
            ("dealerships", None) => Some(Self::Dealerships),
            ("dealerships", Some(slug)) => Some(Self::Dealership { slug }),
            _ => None,
        }
    }

    /// Canonical path for this route, suitable for `href` attributes.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Cars => "/cars".to_string(),
            Self::Car { slug } => format!("/cars/{}", urlencoding::encode(slug)),
            Self::Brands => "/brands".to_string(),
            Self::Brand { slug } => format!("/brands/{}", urlencoding::encode(slug)),
            Self::Dealerships => "/dealerships".to_string(),
            Self::Dealership { slug } => format!("/dealerships/{}", urlencoding::encode(slug)),
        }
    }

    /// Route pattern this route was matched by, e.g. `/cars/:slug`.
    pub fn pattern(&self) -> &'static str {
        ROUTE_TABLE[self.table_index()].0
    }

    /// Handler name for logging and the workload manifest.
    pub fn handler(&self) -> &'static str {
        ROUTE_TABLE[self.table_index()].1
    }

    /// Slug for detail routes.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Car { slug } | Self::Brand { slug } | Self::Dealership { slug } => Some(slug),
            _ => None,
        }
    }

    fn table_index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Cars => 1,
            Self::Car { .. } => 2,
            Self::Brands => 3,
            Self::Brand { .. } => 4,
            Self::Dealerships => 5,
            Self::Dealership { .. } => 6,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn decode_slug(raw: &str) -> Option<String> {
    let decoded = urlencoding::decode(raw).ok()?;
    let slug = decoded.trim();
    if slug.is_empty() || slug.contains('/') {
        return None;
    }
    Some(slug.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/cars"), Some(Route::Cars));
        assert_eq!(Route::parse("/brands/"), Some(Route::Brands));
        assert_eq!(Route::parse("/dealerships?page=2"), Some(Route::Dealerships));
    }

    #[test]
    fn test_parse_detail_routes() {
        assert_eq!(
            Route::parse("/cars/porsche-911-turbo-s"),
            Some(Route::Car { slug: "porsche-911-turbo-s".to_string() })
        );
        assert_eq!(
            Route::parse("/brands/ferrari/"),
            Some(Route::Brand { slug: "ferrari".to_string() })
        );
        assert_eq!(
            Route::parse("/dealerships/beverly%20hills#map"),
            Some(Route::Dealership { slug: "beverly hills".to_string() })
        );
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse("/boats"), None);
        assert_eq!(Route::parse("/cars/a/b"), None);
        assert_eq!(Route::parse("/cars/%2F"), None);
        assert_eq!(Route::parse("/cars/%20"), None);
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        let route = Route::Brand { slug: "aston martin".to_string() };
        assert_eq!(route.path(), "/brands/aston%20martin");
        assert_eq!(Route::parse(&route.path()), Some(route));
    }

    #[test]
    fn test_pattern_and_handler() {
        let route = Route::Car { slug: "x".to_string() };
        assert_eq!(route.pattern(), "/cars/:slug");
        assert_eq!(route.handler(), "car_detail");
        assert_eq!(route.slug(), Some("x"));
        assert_eq!(Route::Home.slug(), None);
    }
}
