//! Authority (`user:password@host:port`) rendering and splitting.

/// The four authority fields of a URL, each empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Authority {
    pub username: String,
    pub password: String,
    pub hostname: String,
    pub port: String,
}

/// Renders the network location. The password is only written when a
/// username is present, and `:port` only when the port is non-empty.
pub(crate) fn render_netloc(username: &str, password: &str, hostname: &str, port: &str) -> String {
    let mut netloc = String::with_capacity(
        username.len() + password.len() + hostname.len() + port.len() + 3,
    );
    if !username.is_empty() {
        netloc.push_str(username);
        if !password.is_empty() {
            netloc.push(':');
            netloc.push_str(password);
        }
        netloc.push('@');
    }
    netloc.push_str(hostname);
    if !port.is_empty() {
        netloc.push(':');
        netloc.push_str(port);
    }
    netloc
}

/// Splits an authority token handed to the builder (`user:pwd@host:port`).
///
/// The first `@` ends the userinfo. Every part missing from the token comes
/// back empty, so applying the result clears stale credentials and ports.
pub(crate) fn split_authority_token(token: &str) -> Authority {
    let (userinfo, host_port) = match token.split_once('@') {
        Some((userinfo, host_port)) => (Some(userinfo), host_port),
        None => (None, token),
    };
    let (username, password) = userinfo.map(split_userinfo).unwrap_or_default();
    let (hostname, port) = split_host_port(host_port);
    Authority {
        username,
        password,
        hostname,
        port,
    }
}

/// Splits the network location of a parsed URL.
///
/// The last `@` ends the userinfo, so an unescaped `@` inside a username or
/// password stays with the credentials.
pub(crate) fn split_netloc(netloc: &str) -> Authority {
    let (userinfo, host_port) = match netloc.rsplit_once('@') {
        Some((userinfo, host_port)) => (userinfo, host_port),
        None => ("", netloc),
    };
    let (username, password) = split_userinfo(userinfo);
    let (hostname, port) = split_host_port(host_port);
    Authority {
        username,
        password,
        hostname,
        port,
    }
}

fn split_userinfo(userinfo: &str) -> (String, String) {
    match userinfo.split_once(':') {
        Some((username, password)) => (username.to_string(), password.to_string()),
        None => (userinfo.to_string(), String::new()),
    }
}

/// Splits `host[:port]` on the first `:`. A bracketed IPv6 literal is kept
/// whole as the hostname.
fn split_host_port(host_port: &str) -> (String, String) {
    if host_port.starts_with('[') {
        if let Some(end) = host_port.find(']') {
            let (host, rest) = host_port.split_at(end + 1);
            if rest.is_empty() {
                return (host.to_string(), String::new());
            }
            if let Some(port) = rest.strip_prefix(':') {
                return (host.to_string(), port.to_string());
            }
        }
    }
    match host_port.split_once(':') {
        Some((hostname, port)) => (hostname.to_string(), port.to_string()),
        None => (host_port.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authority(username: &str, password: &str, hostname: &str, port: &str) -> Authority {
        Authority {
            username: username.to_string(),
            password: password.to_string(),
            hostname: hostname.to_string(),
            port: port.to_string(),
        }
    }

    #[test]
    fn render_full_and_partial() {
        assert_eq!(render_netloc("u", "p", "h", "1"), "u:p@h:1");
        assert_eq!(render_netloc("u", "", "h", ""), "u@h");
        assert_eq!(render_netloc("", "p", "h", ""), "h");
        assert_eq!(render_netloc("", "", "", "8080"), ":8080");
        assert_eq!(render_netloc("", "", "", ""), "");
    }

    #[test]
    fn token_full() {
        assert_eq!(
            split_authority_token("user:pwd@host:1234"),
            authority("user", "pwd", "host", "1234")
        );
    }

    #[test]
    fn token_host_only_clears_other_fields() {
        assert_eq!(
            split_authority_token("www.example.com"),
            authority("", "", "www.example.com", "")
        );
    }

    #[test]
    fn token_first_at_and_first_colon() {
        assert_eq!(
            split_authority_token("a:b:c@d@e:1:2"),
            authority("a", "b:c", "d@e", "1:2")
        );
    }

    #[test]
    fn netloc_last_at_wins() {
        assert_eq!(
            split_netloc("me@corp:secret@host:80"),
            authority("me@corp", "secret", "host", "80")
        );
    }

    #[test]
    fn netloc_without_userinfo() {
        assert_eq!(split_netloc("host:443"), authority("", "", "host", "443"));
        assert_eq!(split_netloc(""), authority("", "", "", ""));
    }

    #[test]
    fn token_bracketed_ipv6_host() {
        assert_eq!(
            split_authority_token("admin@[2001:db8::7]:8443"),
            authority("admin", "", "[2001:db8::7]", "8443")
        );
        assert_eq!(
            split_authority_token("[::1]"),
            authority("", "", "[::1]", "")
        );
    }

    #[test]
    fn unbracketed_host_splits_on_first_colon() {
        assert_eq!(split_netloc("::1"), authority("", "", "", ":1"));
        assert_eq!(split_netloc("[::1]x:9"), authority("", "", "[", ":1]x:9"));
    }

    #[test]
    fn bracketed_ipv6_host() {
        assert_eq!(split_netloc("[::1]:8080"), authority("", "", "[::1]", "8080"));
        assert_eq!(split_netloc("u@[fe80::1]"), authority("u", "", "[fe80::1]", ""));
    }
}
