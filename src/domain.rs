use url::Url;

use crate::record::SearchRecord;

/// Lowercases a network location and strips a leading `www.`.
pub fn normalize_domain(netloc: &str) -> String {
    let netloc = netloc.trim().to_lowercase();

    match netloc.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => netloc,
    }
}

/// Text following the `scheme:` prefix of an absolute URL with a host, or the
/// whole input for a scheme-relative `//host/...` reference.
fn hierarchical_part(raw: &str) -> Option<&str> {
    if raw.starts_with("//") {
        let url = Url::parse(&format!("http:{raw}")).ok()?;
        return url.has_host().then_some(raw);
    }

    let url = Url::parse(raw).ok()?;
    if !url.has_host() {
        return None;
    }

    let (scheme, rest) = raw.split_at_checked(url.scheme().len())?;
    if !scheme.eq_ignore_ascii_case(url.scheme()) {
        return None;
    }
    rest.strip_prefix(':')
}

/// The network location of a URL exactly as written: `[userinfo@]host[:port]`.
///
/// Ports and userinfo are kept and internationalized hosts are not
/// punycoded, so `https://a.com:8443/` and `https://a.com/` stay distinct.
pub fn network_location(url_str: &str) -> Option<&str> {
    let rest = hierarchical_part(url_str.trim())?.strip_prefix("//")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Domain of a single URL, or `None` when it is empty, relative or hostless.
pub fn extract_domain(url_str: &str) -> Option<String> {
    if url_str.is_empty() {
        return None;
    }

    let domain = normalize_domain(network_location(url_str)?);

    if domain.is_empty() {
        None
    } else {
        Some(domain)
    }
}

/// One domain per record with a usable URL, in record order, duplicates kept.
pub fn extract_domains(records: &[SearchRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| extract_domain(record.url()))
        .collect()
}

/// Host part of a domain, without userinfo or a numeric port.
pub fn host_of(domain: &str) -> &str {
    let host = domain.rsplit_once('@').map_or(domain, |(_, host)| host);

    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

/// Whether a domain's host ends with one of the given dotted suffixes, e.g. `.edu`.
pub fn has_suffix(domain: &str, suffixes: &[&str]) -> bool {
    let host = host_of(domain);
    suffixes.iter().any(|suffix| host.ends_with(suffix))
}
