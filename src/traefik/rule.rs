use std::fmt;

/// One host match, optionally narrowed to a path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub(crate) host: String,
    pub(crate) path_prefix: Option<String>,
}

impl RouteMatch {
    /// An empty prefix means "match the whole host".
    pub fn new(host: &str, path_prefix: &str) -> Self {
        RouteMatch {
            host: host.to_string(),
            path_prefix: if path_prefix.is_empty() {
                None
            } else {
                Some(path_prefix.to_string())
            },
        }
    }
}

impl fmt::Display for RouteMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Host(`{}`)", self.host)?;
        if let Some(prefix) = &self.path_prefix {
            write!(f, " && PathPrefix(`{}`)", prefix)?;
        }
        Ok(())
    }
}

/// Joins the matches into a single router rule, keeping their order.
///
/// Traefik may treat earlier clauses as higher priority, so nothing is
/// reordered or deduplicated. No matches gives an empty rule.
pub fn build_rule(matches: &[RouteMatch]) -> String {
    matches
        .iter()
        .map(RouteMatch::to_string)
        .collect::<Vec<_>>()
        .join(" || ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host() {
        assert_eq!(build_rule(&[RouteMatch::new("a.com", "")]), "Host(`a.com`)");
    }

    #[test]
    fn host_with_prefix_then_bare_host() {
        let rule = build_rule(&[
            RouteMatch::new("a.com", "/api"),
            RouteMatch::new("b.com", ""),
        ]);
        assert_eq!(rule, "Host(`a.com`) && PathPrefix(`/api`) || Host(`b.com`)");
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let rule = build_rule(&[
            RouteMatch::new("b.com", ""),
            RouteMatch::new("a.com", ""),
            RouteMatch::new("b.com", ""),
        ]);
        assert_eq!(rule, "Host(`b.com`) || Host(`a.com`) || Host(`b.com`)");
    }

    #[test]
    fn no_matches_gives_empty_rule() {
        assert_eq!(build_rule(&[]), "");
    }
}
