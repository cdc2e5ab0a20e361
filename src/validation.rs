use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Letters, digits, dash and underscore only
    static ref NAMESPACE: Regex = Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();

    // Dot-separated labels of 1-63 chars, no leading or trailing dash
    static ref HOST: Regex = Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .unwrap();

    // 1-65535, one alternative per digit band
    static ref PORT: Regex = Regex::new(
        r"^([1-9][0-9]{0,3}|[1-5][0-9]{4}|6[0-4][0-9]{3}|65[0-4][0-9]{2}|655[0-2][0-9]|6553[0-5])$"
    )
    .unwrap();
}

/// Checks that a namespace is usable as a Traefik router/service name.
pub fn is_valid_namespace(namespace: &str) -> bool {
    NAMESPACE.is_match(namespace)
}

/// Checks that a host is a well-formed domain name.
pub fn is_valid_host(host: &str) -> bool {
    HOST.is_match(host)
}

/// Checks that a port is a decimal number between 1 and 65535 without leading zeros.
pub fn is_valid_port(port: &str) -> bool {
    PORT.is_match(port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_accepts_allowed_charset() {
        for ns in ["adminer", "api-gateway", "my_app", "A1", "-", "_", "x"] {
            assert!(is_valid_namespace(ns), "{ns} should be valid");
        }
    }

    #[test]
    fn namespace_rejects_empty_and_foreign_chars() {
        for ns in ["", "with space", "dot.ted", "slash/ed", "tab\t", "ümlaut", "new\n"] {
            assert!(!is_valid_namespace(ns), "{ns:?} should be invalid");
        }
    }

    #[test]
    fn host_accepts_domains() {
        for host in ["api.domain.com", "a.b", "localhost", "my-app.example.co.id", "a1.b2"] {
            assert!(is_valid_host(host), "{host} should be valid");
        }
    }

    #[test]
    fn host_rejects_malformed_labels() {
        let long_label = "a".repeat(64);
        for host in [
            "",
            "-lead.com",
            "trail-.com",
            "double..dot",
            ".leading",
            "trailing.",
            "under_score.com",
            long_label.as_str(),
        ] {
            assert!(!is_valid_host(host), "{host:?} should be invalid");
        }
    }

    #[test]
    fn host_label_length_limit() {
        let max_label = "a".repeat(63);
        assert!(is_valid_host(&max_label));
        assert!(is_valid_host(&format!("{}.com", max_label)));
        assert!(!is_valid_host(&format!("{}a.com", max_label)));
    }

    #[test]
    fn port_accepts_every_value_in_range() {
        for n in 1..=65535u32 {
            assert!(is_valid_port(&n.to_string()), "{n} should be valid");
        }
    }

    #[test]
    fn port_band_boundaries() {
        let accepted = [
            "1", "9", "10", "99", "100", "999", "1000", "9999", "10000", "59999", "60000",
            "64999", "65000", "65499", "65500", "65529", "65530", "65535",
        ];
        for port in accepted {
            assert!(is_valid_port(port), "{port} should be valid");
        }

        let rejected = [
            "", "0", "00", "007", "00080", "065535", "65536", "65540", "65600", "66000",
            "70000", "99999", "100000", " 80", "80 ", "80a", "-1", "+80", "8.0",
        ];
        for port in rejected {
            assert!(!is_valid_port(port), "{port:?} should be invalid");
        }
    }

    #[test]
    fn long_input_resolves() {
        let huge = "9".repeat(100_000);
        assert!(!is_valid_port(&huge));
        assert!(is_valid_namespace(&huge));
        let huge_host = format!("{}-", "a-".repeat(50_000));
        assert!(!is_valid_host(&huge_host));
    }
}
