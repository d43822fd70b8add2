//! Property-based tests for token matching and descriptor parsing.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use hostprobe::domain::descriptor;
use hostprobe::domain::listing::{PluginListing, versioned_token};
use hostprobe::domain::{ArtifactConvention, Command};

const NAME: &str = "[a-z][a-z0-9_-]{0,15}";
const VERSION: &str = "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}";

// ============================================================================
// PluginListing exact-token matching
// ============================================================================

proptest! {
    /// A name never matches a listing that only holds a longer name it prefixes.
    #[test]
    fn prop_prefix_of_listed_name_never_matches(name in NAME, suffix in "[a-z-]{1,8}") {
        let listing = PluginListing::parse(&format!("{name}{suffix}\n"));
        prop_assert!(!listing.contains(&name));
    }

    /// A listed name always matches itself, whatever the line ending.
    #[test]
    fn prop_listed_name_matches(
        names in prop::collection::vec(NAME, 1..8),
        crlf in any::<bool>(),
    ) {
        let sep = if crlf { "\r\n" } else { "\n" };
        let listing = PluginListing::parse(&names.join(sep));
        for name in &names {
            prop_assert!(listing.contains(name), "missing {name}");
        }
    }

    /// Versioned tokens match only the exact version.
    #[test]
    fn prop_versioned_token_is_exact(name in NAME, v1 in VERSION, v2 in VERSION) {
        let listing = PluginListing::parse(&format!("{}\n", versioned_token(&name, &v1)));
        prop_assert!(listing.contains(&versioned_token(&name, &v1)));
        prop_assert_eq!(listing.contains(&versioned_token(&name, &v2)), v1 == v2);
        prop_assert!(!listing.contains(&name));
        prop_assert_eq!(listing.versions_of(&name), vec![v1.as_str()]);
    }
}

// ============================================================================
// Descriptor parsing never panics
// ============================================================================

proptest! {
    /// Arbitrary text yields either a descriptor with a non-empty name or an error.
    #[test]
    fn prop_parse_is_total(raw in "\\PC{0,200}") {
        if let Ok(spec) = descriptor::parse(&raw) {
            prop_assert!(!spec.name.trim().is_empty());
        }
    }

    /// Arbitrary assignments inside a real block never panic.
    #[test]
    fn prop_parse_block_body_is_total(body in "[ -~\n]{0,200}") {
        let raw = format!("Gem::Specification.new do |s|\n{body}\nend\n");
        if let Ok(spec) = descriptor::parse(&raw) {
            prop_assert!(!spec.name.trim().is_empty());
        }
    }

    /// Generated name/version pairs round-trip through the parser.
    #[test]
    fn prop_generated_name_and_version_are_read(name in NAME, version in VERSION) {
        let raw = format!(
            "Gem::Specification.new do |s|\n  s.name = \"{name}\".freeze\n  s.version = \"{version}\"\nend\n"
        );
        let spec = descriptor::parse(&raw).expect("parses");
        prop_assert_eq!(spec.name, name);
        prop_assert_eq!(spec.version, Some(version));
    }
}

// ============================================================================
// Commands and artifact paths
// ============================================================================

proptest! {
    /// Blank scripts are always rejected.
    #[test]
    fn prop_blank_commands_rejected(ws in "[ \t\n]{0,10}") {
        prop_assert!(Command::new(ws).is_err());
    }

    /// The arch infix is present unless skipped, and the extension always ends the path.
    #[test]
    fn prop_artifact_path_shape(file in NAME, arch in "[a-z0-9_]{1,8}") {
        let conv = ArtifactConvention::new("deb", arch.clone());
        let with = conv.build_path("/b", &file, false);
        let without = conv.build_path("/b", &file, true);
        prop_assert_eq!(with, format!("/b/{file}-{arch}.deb"));
        prop_assert_eq!(without, format!("/b/{file}.deb"));
    }
}
