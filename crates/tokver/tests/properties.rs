//! Property tests over randomly generated valid version strings.

use proptest::prelude::*;
use std::cmp::Ordering;
use tokver::TokenizedVersion;

/// Any grammatically valid version string: a full numeric triple with an
/// optional qualifier, or one of the terminal-wildcard forms.
fn valid_version() -> impl Strategy<Value = String> {
    let triple = (any::<u32>(), any::<u32>(), any::<u32>());
    prop_oneof![
        triple.prop_map(|(a, b, c)| format!("{a}.{b}.{c}")),
        (triple, "[-a-zA-Z0-9]{1,8}").prop_map(|((a, b, c), q)| format!("{a}.{b}.{c}_{q}")),
        Just("+".to_string()),
        any::<u32>().prop_map(|a| format!("{a}.+")),
        (any::<u32>(), any::<u32>()).prop_map(|(a, b)| format!("{a}.{b}.+")),
        triple.prop_map(|(a, b, c)| format!("{a}.{b}.{c}_+")),
    ]
}

fn parse(s: &str) -> TokenizedVersion {
    s.parse().unwrap_or_else(|e| panic!("failed to parse `{s}`: {e}"))
}

proptest! {
    #[test]
    fn parses_and_displays_verbatim(s in valid_version()) {
        prop_assert_eq!(parse(&s).to_string(), s);
    }

    #[test]
    fn reparsing_the_display_output_is_idempotent(s in valid_version()) {
        let version = parse(&s);
        let reparsed = parse(&version.to_string());
        prop_assert_eq!(&reparsed, &version);
        prop_assert_eq!(reparsed.to_string(), version.to_string());
    }

    #[test]
    fn ordering_is_reflexive(s in valid_version()) {
        let version = parse(&s);
        prop_assert_eq!(version.cmp(&version), Ordering::Equal);
    }

    #[test]
    fn ordering_is_antisymmetric(a in valid_version(), b in valid_version()) {
        let (a, b) = (parse(&a), parse(&b));
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn ordering_is_transitive(
        a in valid_version(),
        b in valid_version(),
        c in valid_version(),
    ) {
        let mut versions = [parse(&a), parse(&b), parse(&c)];
        versions.sort();
        prop_assert!(versions[0] <= versions[1]);
        prop_assert!(versions[1] <= versions[2]);
        prop_assert!(versions[0] <= versions[2]);
    }

    #[test]
    fn comparison_operators_agree_with_cmp(a in valid_version(), b in valid_version()) {
        let (a, b) = (parse(&a), parse(&b));
        match a.cmp(&b) {
            Ordering::Less => prop_assert!(a < b && a != b),
            Ordering::Equal => prop_assert!(a == b && a <= b && a >= b),
            Ordering::Greater => prop_assert!(a > b && a != b),
        }
    }

    #[test]
    fn serde_roundtrip_preserves_equality(s in valid_version()) {
        let version = parse(&s);
        let json = serde_json::to_string(&version).unwrap();
        let back: TokenizedVersion = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, version);
    }
}
