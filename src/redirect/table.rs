use crate::redirect::document::PathUrlPair;
use std::collections::HashMap;

/// Request targets mapped to the URLs they redirect to.
///
/// Keys are compared byte-for-byte against the request target, so case, query strings and trailing
/// slashes all matter. Once built, a table is only ever read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    urls: HashMap<String, String>,
}

impl Table {
    pub fn get(&self, target: &str) -> Option<&str> {
        self.urls.get(target).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Later entries for the same path replace earlier ones.
impl<P, U> FromIterator<(P, U)> for Table
where
    P: Into<String>,
    U: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        let mut urls = HashMap::new();
        for (path, url) in iter {
            urls.insert(path.into(), url.into());
        }
        Self { urls }
    }
}

impl FromIterator<PathUrlPair> for Table {
    fn from_iter<I: IntoIterator<Item = PathUrlPair>>(iter: I) -> Self {
        iter.into_iter().map(|p| (p.path, p.url)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let table = [("/", "https://a"), ("/", "https://b")]
            .into_iter()
            .collect::<Table>();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("/"), Some("https://b"));
    }

    #[test]
    fn exact_and_case_sensitive() {
        let table = [("/Docs", "https://docs.rs")].into_iter().collect::<Table>();
        assert_eq!(table.get("/Docs"), Some("https://docs.rs"));
        assert_eq!(table.get("/docs"), None);
        assert_eq!(table.get("/Docs/"), None);
        assert_eq!(table.get("/Docs?x=1"), None);
    }

    #[test]
    fn stores_values_verbatim() {
        let pairs = vec![
            PathUrlPair {
                path: String::new(),
                url: String::new(),
            },
            PathUrlPair {
                path: "/weird".to_string(),
                url: "not a url at all".to_string(),
            },
        ];
        let table = pairs.into_iter().collect::<Table>();
        assert_eq!(table.get(""), Some(""));
        assert_eq!(table.get("/weird"), Some("not a url at all"));
    }
}
