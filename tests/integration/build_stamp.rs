use std::fs;

use verstamp::{BuildStamp, DomainError, GitRevisionProbe, OutputFormat, VerstampError, Visibility};

use crate::common::{source_2_5_1, source_without_patch};

#[test]
fn writes_rust_constants() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("version.rs");

    let stamp = BuildStamp::with_source(source_2_5_1(), dir.path())
        .revision("a1b2c3d")
        .visibility(Visibility::Crate)
        .write_to(&path)
        .unwrap();

    assert_eq!((stamp.major(), stamp.minor(), stamp.patch()), (2, 5, 1));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "// @generated by verstamp. Do not edit.\n\
         pub(crate) const VERSION_MAJOR: u32 = 2;\n\
         pub(crate) const VERSION_MINOR: u32 = 5;\n\
         pub(crate) const VERSION_PATCH: u32 = 1;\n\
         pub(crate) const GIT_HASH: &str = \"a1b2c3d\";\n"
    );
}

#[test]
fn missing_patch_fails_the_build() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("version.rs");

    let err = BuildStamp::with_source(source_without_patch(), dir.path())
        .revision("a1b2c3d")
        .write_to(&path)
        .unwrap_err();

    assert!(matches!(
        err,
        VerstampError::Domain(DomainError::MissingComponent { ref field }) if field == "patch"
    ));
    assert!(!path.exists());
}

#[test]
fn missing_revision_honours_policy() {
    let dir = tempfile::tempdir().unwrap();
    // A git that does not exist: nothing can be found.
    let no_git = || GitRevisionProbe::with_program("verstamp-no-such-git");

    let strict = BuildStamp::with_source(source_2_5_1(), dir.path())
        .git_program(no_git())
        .generate();
    // VERSTAMP_REVISION may be set by whoever runs the tests.
    if std::env::var_os("VERSTAMP_REVISION").is_none() {
        assert!(matches!(
            strict.unwrap_err(),
            VerstampError::Domain(DomainError::RevisionUnavailable { .. })
        ));

        let lenient = BuildStamp::with_source(source_2_5_1(), dir.path())
            .git_program(no_git())
            .allow_missing_revision()
            .format(OutputFormat::CHeader)
            .generate()
            .unwrap();
        assert!(lenient.contents.contains("#define GIT_HASH \"\"\n"));
        assert_eq!(lenient.stamp.to_string(), "2.5.1");
    }
}

#[test]
fn json_output_round_trips_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("version.json");
    BuildStamp::with_source(source_2_5_1(), dir.path())
        .revision("a1b2c3d-dirty")
        .format(OutputFormat::Json)
        .write_to(&path)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["revision"], "a1b2c3d-dirty");
    assert_eq!(value["minor"], 5);
}
