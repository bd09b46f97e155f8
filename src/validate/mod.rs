//! Search input classification.
//!
//! Decides whether the text typed into the search box is an IPv4 address, a
//! domain name, or neither. Both checks are explicit grammar walks over
//! ASCII bytes, anchored at both ends: surrounding whitespace, a trailing
//! newline or any non-ASCII character makes the input invalid.
//!
//! Key functions:
//! - `is_valid_ipv4()` - four dot-separated decimal octets in 0..=255
//! - `is_valid_domain()` - DNS labels followed by a top-level label
//! - `classify()` - picks the lookup to run for a submission

use std::net::Ipv4Addr;

use crate::geolocation::Query;

const MAX_LABEL_LEN: usize = 63;
const ACE_PREFIX: &str = "xn--";
const MAX_ACE_SUFFIX_LEN: usize = 59;
const MIN_ALPHA_TLD_LEN: usize = 2;

/// Returns true if `text` is a dotted-quad IPv4 address.
///
/// Each octet is a decimal number in 0..=255 written without leading zeros
/// ("0" is fine, "01" is not).
pub fn is_valid_ipv4(text: &str) -> bool {
    let mut octets = 0;
    for group in text.split('.') {
        octets += 1;
        if octets > 4 || !is_octet(group) {
            return false;
        }
    }
    octets == 4
}

fn is_octet(group: &str) -> bool {
    let bytes = group.as_bytes();
    if bytes.is_empty() || bytes.len() > 3 || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    // At most three digits, so this cannot overflow
    let value = bytes
        .iter()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
    value <= 255
}

/// Returns true if `text` is a domain name.
///
/// The name is one or more labels, each followed by a dot, and then a
/// top-level label. Letters are matched case-insensitively.
///
/// A label is 1 to 63 characters: an ASCII letter or digit followed by
/// letters, digits or hyphens. Labels shorter than 63 characters may end in
/// a hyphen; a 63-character label must end in a letter or digit.
///
/// The top-level label is either an ASCII-compatible encoding (`xn--`
/// followed by up to 59 letters or digits) or 2 to 63 letters.
pub fn is_valid_domain(text: &str) -> bool {
    let Some((labels, tld)) = text.rsplit_once('.') else {
        return false;
    };
    labels.split('.').all(is_label) && is_top_level_label(tld)
}

fn is_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    let Some((first, rest)) = bytes.split_first() else {
        return false;
    };
    if bytes.len() > MAX_LABEL_LEN || !first.is_ascii_alphanumeric() {
        return false;
    }
    if !rest.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-') {
        return false;
    }
    bytes.len() < MAX_LABEL_LEN || bytes[MAX_LABEL_LEN - 1].is_ascii_alphanumeric()
}

fn is_top_level_label(tld: &str) -> bool {
    let bytes = tld.as_bytes();
    if bytes.len() >= ACE_PREFIX.len()
        && bytes[..ACE_PREFIX.len()].eq_ignore_ascii_case(ACE_PREFIX.as_bytes())
    {
        let suffix = &bytes[ACE_PREFIX.len()..];
        return suffix.len() <= MAX_ACE_SUFFIX_LEN
            && suffix.iter().all(u8::is_ascii_alphanumeric);
    }
    (MIN_ALPHA_TLD_LEN..=MAX_LABEL_LEN).contains(&bytes.len())
        && bytes.iter().all(u8::is_ascii_alphabetic)
}

/// Picks the lookup for a submitted search term.
///
/// IPv4 addresses take precedence over domain names. Returns `None` when the
/// text matches neither grammar, in which case nothing should be fetched.
pub fn classify(text: &str) -> Option<Query> {
    if is_valid_ipv4(text) {
        // The grammar above is a subset of what Ipv4Addr accepts
        return text.parse::<Ipv4Addr>().ok().map(Query::Ip);
    }
    if is_valid_domain(text) {
        return Some(Query::Domain(text.to_string()));
    }
    None
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
