//! Validators reject matches that a regex alone can't rule out.

use std::net::Ipv4Addr;

/// Result of running a validator: whether the match should be kept, and why.
pub type ValidatorOutcome = (bool, &'static str);

/// Accepts only addresses that are routable public internet space, per the
/// RFCs cited in the pattern catalog. RFC 5737 documentation ranges are
/// allowed through so fixtures can use stable, non-rotating addresses.
pub fn public_ip(text: &str) -> ValidatorOutcome {
    if text.starts_with("192.0.2.") || text.starts_with("198.51.100.") || text.starts_with("203.0.113.") {
        return (true, "rfc5737_documentation_allowed");
    }

    let Ok(ip) = text.parse::<Ipv4Addr>() else {
        return (false, "invalid_format");
    };

    if ip.is_private() {
        return (false, "rfc1918_private");
    }
    if ip.is_link_local() {
        return (false, "rfc3927_link_local");
    }
    if ip.is_loopback() {
        return (false, "rfc1122_loopback");
    }
    if ip.is_multicast() {
        return (false, "rfc1112_multicast");
    }
    if ip.is_broadcast() {
        return (false, "broadcast_address");
    }

    let octets = ip.octets();
    // RFC 6598 Carrier-Grade NAT: 100.64.0.0/10
    if octets[0] == 100 && (64..=127).contains(&octets[1]) {
        return (false, "rfc6598_cgn");
    }
    // RFC 2544 Benchmarking: 198.18.0.0/15
    if octets[0] == 198 && (octets[1] == 18 || octets[1] == 19) {
        return (false, "rfc2544_benchmark");
    }
    // RFC 1122 "this network": 0.0.0.0/8
    if octets[0] == 0 {
        return (false, "rfc1122_current_network");
    }
    // IANA reserved: 240.0.0.0/4 (excluding the broadcast address, handled above)
    if octets[0] >= 240 {
        return (false, "iana_reserved");
    }

    (true, "public_eligible")
}

/// Accepts a bare 12-digit string only if it falls inside AWS's legal
/// account-id range. Values below 10^11 cannot be real account ids.
pub fn account_id(text: &str) -> ValidatorOutcome {
    if text.len() != 12 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return (false, "invalid_format");
    }

    match text.parse::<u64>() {
        Ok(n) if n >= 100_000_000_000 => (true, "valid_account_id"),
        Ok(_) => (false, "too_small"),
        Err(_) => (false, "invalid_format"),
    }
}

/// CloudWatch Insights query ids and KMS key ids share a UUID shape with no
/// reliable discriminator. We keep the reference implementation's heuristic:
/// a UUID starting with a hex letter is classified as an insights query id: a
/// UUID starting with a decimal digit is left for the KMS-key pattern to
/// claim instead. See SPEC_FULL.md §9 for why this isn't principled.
pub fn insights_query_id(text: &str) -> ValidatorOutcome {
    let shape_ok = text.len() == 36
        && text
            .chars()
            .zip("xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx".chars())
            .all(|(c, marker)| if marker == '-' { c == '-' } else { c.is_ascii_hexdigit() });

    if !shape_ok {
        return (false, "invalid_uuid_format");
    }

    match text.as_bytes().first() {
        Some(b) if b.is_ascii_digit() => (false, "numeric_start_likely_kms"),
        Some(_) => (true, "valid_insights_query"),
        None => (false, "invalid_uuid_format"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_ip_rejects_private_ranges() {
        assert_eq!(public_ip("10.0.0.1").0, false);
        assert_eq!(public_ip("192.168.1.1").0, false);
        assert_eq!(public_ip("172.16.0.1").0, false);
        assert_eq!(public_ip("169.254.1.1").0, false);
        assert_eq!(public_ip("127.0.0.1").0, false);
        assert_eq!(public_ip("100.64.0.1").0, false);
        assert_eq!(public_ip("198.18.0.1").0, false);
        assert_eq!(public_ip("0.1.2.3").0, false);
        assert_eq!(public_ip("255.255.255.255").0, false);
    }

    #[test]
    fn public_ip_accepts_documentation_and_public_ranges() {
        assert!(public_ip("8.8.8.8").0);
        assert!(public_ip("192.0.2.1").0);
        assert!(public_ip("198.51.100.7").0);
        assert!(public_ip("203.0.113.9").0);
    }

    #[test]
    fn account_id_enforces_range() {
        assert!(account_id("123456789012").0);
        assert_eq!(account_id("000000000001").0, false);
        assert_eq!(account_id("12345").0, false);
    }

    #[test]
    fn insights_query_id_splits_on_leading_digit() {
        assert!(insights_query_id("abcd1234-ab12-ab12-ab12-abcdef123456").0);
        assert_eq!(
            insights_query_id("1bcd1234-ab12-ab12-ab12-abcdef123456").0,
            false
        );
        assert_eq!(insights_query_id("not-a-uuid").0, false);
    }
}
