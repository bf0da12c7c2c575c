//! Property tests for output routing and grouping.

use proptest::prelude::*;

use firecat::{manual_chunk, AssetCategory, OutputArtifact, OutputRouter};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,16}").unwrap()
}

fn module_id() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=5).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// PROPERTY: categorization is total and never panics
    #[test]
    fn property_category_is_total(name in "(?s).{0,32}") {
        let category = AssetCategory::from_file_name(&name);
        prop_assert!(AssetCategory::ALL.contains(&category));
    }

    /// PROPERTY: routing is a pure function of the artifact
    #[test]
    fn property_route_is_deterministic(
        id in module_id(),
        content in proptest::collection::vec(any::<u8>(), 0..256),
    ) {
        let router = OutputRouter::default();
        let a = OutputArtifact::asset(id.clone(), content.clone());
        let b = OutputArtifact::asset(id, content);
        prop_assert_eq!(router.route(&a), router.route(&b));
    }

    /// PROPERTY: an asset lands in the directory of its category
    #[test]
    fn property_asset_directory_matches_category(
        id in module_id(),
        content in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let artifact = OutputArtifact::asset(id, content);
        let category = AssetCategory::from_file_name(artifact.logical_name());
        let routed = OutputRouter::default().route(&artifact);
        let expected = format!("{}/", category.directory_name());
        prop_assert!(routed.starts_with(&expected));
    }

    /// PROPERTY: changing one byte changes the entry path
    #[test]
    fn property_one_byte_changes_entry_hash(
        content in proptest::collection::vec(any::<u8>(), 1..256),
        index in any::<prop::sample::Index>(),
        delta in 1u8..=255,
    ) {
        let router = OutputRouter::default();
        let mut changed = content.clone();
        let i = index.index(changed.len());
        changed[i] = changed[i].wrapping_add(delta);

        let before = router.route(&OutputArtifact::entry("src/main.js", vec![], content));
        let after = router.route(&OutputArtifact::entry("src/main.js", vec![], changed));
        prop_assert!(before.starts_with("js/app-"));
        prop_assert_ne!(before, after);
    }

    /// PROPERTY: vendor iff the id carries the dependency marker
    #[test]
    fn property_vendor_iff_dependency(id in module_id(), vendored in any::<bool>()) {
        let id = if vendored { format!("node_modules/{id}") } else { id };
        let expected = id.contains("node_modules").then_some("vendor");
        prop_assert_eq!(manual_chunk(&id), expected);
    }
}
