//! `urlazy build` – assemble a URL from command-line parts.

use anyhow::{Context, Result};
use urlazy_core::config::UrlazyConfig;
use urlazy_core::Url;

use crate::cli::BuildArgs;

/// Applies `args` in order: base, scheme, authority, username, password,
/// host, port, then accumulated paths, queries and fragments.
pub(crate) fn build_url(args: &BuildArgs, cfg: &UrlazyConfig) -> Result<Url> {
    let mut url = match &args.base {
        Some(base) => Url::parse_with(base, &cfg.parse)
            .with_context(|| format!("parse base url {base:?}"))?,
        None => Url::new(),
    };

    if let Some(scheme) = &args.scheme {
        url.scheme(scheme.as_str());
    }
    if let Some(authority) = &args.authority {
        url.authority(authority);
    }
    if let Some(username) = &args.username {
        url.username(username.as_str());
    }
    if let Some(password) = &args.password {
        url.password(password.as_str());
    }
    if let Some(host) = &args.host {
        url.hostname(host.as_str());
    }
    if let Some(port) = &args.port {
        url.port(port);
    }
    for segment in &args.paths {
        url.path(segment.as_str());
    }
    for query in &args.queries {
        url.query_with(query, &cfg.parse);
    }
    for fragment in &args.fragments {
        url.fragment(fragment);
    }

    Ok(url)
}

/// Build the URL and print it.
pub fn run_build(args: &BuildArgs, cfg: &UrlazyConfig) -> Result<()> {
    let url = build_url(args, cfg)?;
    let rendered = url.to_string_with(&cfg.encode);
    tracing::debug!("built url {}", rendered);
    println!("{rendered}");
    Ok(())
}
