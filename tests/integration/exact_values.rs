use proptest::prelude::*;
use verstamp::{OutputFormat, RenderOptions, Revision, VersionStamp, placeholders};

proptest! {
    #[test]
    fn c_header_defines_equal_inputs(
        major in 0u32..100_000,
        minor in 0u32..100_000,
        patch in 0u32..100_000,
        rev in proptest::option::of("[0-9a-f]{7,12}"),
    ) {
        let revision = match &rev {
            Some(token) => Revision::parse(token).unwrap(),
            None => Revision::unavailable(),
        };
        let stamp = VersionStamp::builder()
            .major(major)
            .minor(minor)
            .patch(patch)
            .revision(revision)
            .build()
            .unwrap();
        let contents = verstamp::render(&stamp, &RenderOptions::new(OutputFormat::CHeader)).unwrap();

        let expected_major = format!("#define VERSION_MAJOR {major}\n");
        let expected_minor = format!("#define VERSION_MINOR {minor}\n");
        let expected_patch = format!("#define VERSION_PATCH {patch}\n");
        let expected_rev = format!("#define GIT_HASH \"{}\"\n", rev.as_deref().unwrap_or(""));
        prop_assert!(contents.contains(&expected_major));
        prop_assert!(contents.contains(&expected_minor));
        prop_assert!(contents.contains(&expected_patch));
        prop_assert!(contents.contains(&expected_rev));
        prop_assert!(placeholders::find_unresolved(&contents).is_empty());
    }
}
