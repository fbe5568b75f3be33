//! Hostname predicates.

use std::net::IpAddr;

/// Hostname inside a raw authority: userinfo, port and IPv6 brackets are
/// dropped and the rest is lowercased. No numeric normalization happens, so
/// `0x7f.1` stays `0x7f.1`.
pub(super) fn hostname_from_netloc(netloc: &str) -> String {
    let hostinfo = netloc.rsplit_once('@').map_or(netloc, |(_, h)| h);
    let host = match hostinfo.split_once('[') {
        Some((_, bracketed)) => bracketed.split_once(']').map_or(bracketed, |(h, _)| h),
        None => hostinfo.split_once(':').map_or(hostinfo, |(h, _)| h),
    };
    host.to_lowercase()
}

/// True if `host` is an IPv4 or IPv6 literal. Empty and non-IP hosts are false.
pub fn is_ip_literal(host: &str) -> bool {
    host.parse::<IpAddr>().is_ok()
}

/// True if `https` occurs anywhere in `host`, ignoring ASCII case.
///
/// A hostname never legitimately carries a scheme; `https-paypal.example` and
/// `securehttps.example` are lexical tricks aimed at the reader.
pub fn https_in_hostname(host: &str) -> bool {
    host.to_ascii_lowercase().contains("https")
}
