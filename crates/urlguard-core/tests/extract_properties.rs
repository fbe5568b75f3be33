//! Properties of `extract` that must hold for any input string.

use urlguard_core::schema::{FeatureName, FEATURE_COUNT};
use urlguard_core::{categorize, extract, Category};

const INPUTS: &[&str] = &[
    "",
    " ",
    "http://",
    "https://",
    "://",
    "http://[::1",
    "http://user@@host@/a@b",
    "ftp://files.example.org/pub/debian-12.iso",
    "HTTPS://WWW.EXAMPLE.COM/Login.PHP?x=1",
    "http://192.168.0.10:8080/update/bank",
    "javascript:alert(1)",
    "data:text/html;base64,PHNjcmlwdD4=",
    "http://xn--80ak6aa92e.com/",
    "http://пример.рф/путь",
    "\u{0}\u{7f}\u{ffff}",
    "............----------@@@@@",
    "example.com",
    "//example.com/path",
    "http://example.com/%2e%2e/%2F",
    "http://x.com/a/../b",
    "http://x.com\\a\\b",
    "http://0x7f.1/",
    "paypal-login.example.com/verify?id=٣",
];

fn count(s: &str, c: char) -> u64 {
    s.chars().filter(|&x| x == c).count() as u64
}

#[test]
fn vector_shape_and_placeholder() {
    for url in INPUTS {
        let e = extract(url);
        assert_eq!(e.vector.as_slice().len(), FEATURE_COUNT, "{url:?}");
        assert_eq!(e.vector.get(FeatureName::Placeholder), 0.0, "{url:?}");
        assert_eq!(e.raw.len(), FEATURE_COUNT - 1, "{url:?}");
        assert!(e.raw.get(FeatureName::Placeholder).is_none());
    }
}

#[test]
fn whole_string_counts_are_literal() {
    for url in INPUTS {
        let e = extract(url);
        assert_eq!(e.raw.get(FeatureName::NumDots), Some(count(url, '.')), "{url:?}");
        assert_eq!(e.raw.get(FeatureName::NumDash), Some(count(url, '-')), "{url:?}");
        assert_eq!(e.raw.get(FeatureName::AtSymbol), Some(count(url, '@')), "{url:?}");
        assert_eq!(
            e.raw.get(FeatureName::UrlLength),
            Some(url.chars().count() as u64),
            "{url:?}"
        );
    }
}

#[test]
fn vector_mirrors_raw_values() {
    for url in INPUTS {
        let e = extract(url);
        for (name, value) in e.raw.iter() {
            assert_eq!(e.vector.get(name), value as f64, "{url:?} {name}");
        }
    }
}

#[test]
fn flags_are_binary() {
    for url in INPUTS {
        let e = extract(url);
        for name in [
            FeatureName::IpAddress,
            FeatureName::HttpsInHostname,
            FeatureName::SuspiciousKeyword,
        ] {
            let v = e.raw.get(name).unwrap();
            assert!(v <= 1, "{url:?} {name} = {v}");
        }
    }
}

#[test]
fn categories_agree_with_categorize() {
    for url in INPUTS {
        let e = extract(url);
        for name in [FeatureName::NumDots, FeatureName::UrlLength, FeatureName::NumDash] {
            let expected = categorize(name.as_str(), e.vector.get(name));
            assert_eq!(e.categories.get(name), Some(expected.as_str()), "{url:?}");
            assert_ne!(expected, Category::NotApplicable);
        }
        let flag = e.raw.get(FeatureName::SuspiciousKeyword).unwrap();
        let label = e.categories.get(FeatureName::SuspiciousKeyword).unwrap();
        assert_eq!(label, if flag == 1 { "Yes" } else { "No" });
    }
}

#[test]
fn path_is_a_slice_of_the_input() {
    for url in INPUTS {
        let e = extract(url);
        let level = e.raw.get(FeatureName::PathLevel).unwrap();
        let len = e.raw.get(FeatureName::PathLength).unwrap();
        assert!(level <= count(url, '/'), "{url:?}");
        assert!(len <= url.chars().count() as u64, "{url:?}");
    }
}

#[test]
fn path_features_follow_the_typed_path() {
    // (url, PathLevel, PathLength)
    let cases = [
        ("http://example.com", 0, 0),
        ("http://example.com/", 1, 1),
        ("http://x.com/a b", 1, 4),
        ("http://x.com/a/../b", 3, 7),
        ("http://x.com\\a\\b", 0, 0),
        ("example.com/login", 1, 17),
        ("example.com", 0, 11),
        ("http://example.com/%2e%2e/%2F", 2, 11),
        ("https://host/p?next=/a/b#/c", 1, 2),
    ];
    for (url, level, len) in cases {
        let e = extract(url);
        assert_eq!(e.raw.get(FeatureName::PathLevel), Some(level), "{url:?}");
        assert_eq!(e.raw.get(FeatureName::PathLength), Some(len), "{url:?}");
    }
}

#[test]
fn ip_flag_needs_a_literal_host() {
    for (url, flag) in [
        ("http://10.0.0.1/", 1),
        ("http://[::ffff:10.0.0.1]/", 1),
        ("http://0x7f.1/", 0),
        ("http://3232235777/", 0),
        ("http://0177.0.0.1/", 0),
        ("10.0.0.1/login", 0),
    ] {
        assert_eq!(extract(url).raw.get(FeatureName::IpAddress), Some(flag), "{url:?}");
    }
}

#[test]
fn ip_host_with_port_and_keywords() {
    let e = extract("http://192.168.0.10:8080/update/bank");
    assert_eq!(e.raw.get(FeatureName::IpAddress), Some(1));
    assert_eq!(e.raw.get(FeatureName::PathLevel), Some(2));
    assert_eq!(e.raw.get(FeatureName::PathLength), Some(12));
    assert_eq!(e.raw.get(FeatureName::NumNumericChars), Some(13));
    assert_eq!(e.raw.get(FeatureName::SuspiciousKeyword), Some(1));
}

#[test]
fn extraction_is_deterministic() {
    for url in INPUTS {
        assert_eq!(extract(url), extract(url));
    }
}
