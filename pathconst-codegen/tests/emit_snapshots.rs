//! Snapshot tests for the generated C# unit.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use pathconst_codegen::emit;

#[test]
fn test_assets_files() {
    let unit = emit(&["icon.png", "data/readme.txt"], "Assets.Files");
    insta::assert_snapshot!(unit, @r#"
    // <auto-generated />
    // Generated code, do not edit.
    namespace Assets
    {
        public static class Files
        {
            public const string icon_png = "icon.png";
            public const string data_readme_txt = "data/readme.txt";
        }
    }
    "#);
}

#[test]
fn test_nested_namespace_without_members() {
    let unit = emit::<&str>(&[], "A.B.Type");
    insta::assert_snapshot!(unit, @r"
    // <auto-generated />
    // Generated code, do not edit.
    namespace A.B
    {
        public static class Type
        {
        }
    }
    ");
}

#[test]
fn test_bare_type_uses_default_namespace() {
    let unit = emit(&["logo.svg"], "Type");
    insta::assert_snapshot!(unit, @r#"
    // <auto-generated />
    // Generated code, do not edit.
    namespace GeneratedPaths
    {
        public static class Type
        {
            public const string logo_svg = "logo.svg";
        }
    }
    "#);
}

#[test]
fn test_windows_paths_and_awkward_names() {
    let unit = emit(
        &[r"C:\data\f.txt", "1st.png", "class", r#"quote"d.txt"#],
        "Win.Paths",
    );
    insta::assert_snapshot!(unit, @r#"
    // <auto-generated />
    // Generated code, do not edit.
    namespace Win
    {
        public static class Paths
        {
            public const string C__data_f_txt = "C:\\data\\f.txt";
            public const string _1st_png = "1st.png";
            public const string @class = "class";
            public const string quote_d_txt = "quote\"d.txt";
        }
    }
    "#);
}

#[test]
fn test_backslashes_are_doubled() {
    let unit = emit(&[r"C:\data\f.txt"], "N.T");
    assert!(unit.contains(r#""C:\\data\\f.txt""#));
}
