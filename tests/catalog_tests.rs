// Host-side tests for catalog decoding and Spine bundle resolution.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod catalog {
    include!("../src/catalog.rs");
}
mod bundle {
    include!("../src/bundle.rs");
}

use bundle::*;
use catalog::*;

#[test]
fn parses_array_of_file_names() {
    let files = parse_catalog(200, "OK", r#"["hero.json", "boss.json"]"#).unwrap();
    assert_eq!(files, vec!["hero.json".to_string(), "boss.json".to_string()]);
}

#[test]
fn empty_catalog_yields_placeholder_only() {
    let files = parse_catalog(200, "OK", "[]").unwrap();
    assert!(files.is_empty());
    assert_eq!(
        catalog_options(&files, Some("select a background")),
        vec![SelectOption::placeholder("select a background")]
    );
    assert!(catalog_options(&files, None).is_empty());
}

#[test]
fn non_success_status_is_an_error() {
    let err = parse_catalog(404, "Not Found", r#"["ignored.json"]"#).unwrap_err();
    assert_eq!(
        err,
        CatalogError::Status {
            status: 404,
            status_text: "Not Found".to_string()
        }
    );
    assert_eq!(err.to_string(), "server responded with 404 Not Found");
    assert!(parse_catalog(500, "Internal Server Error", "[]").is_err());
}

#[test]
fn malformed_bodies_are_rejected() {
    assert!(matches!(parse_catalog(200, "OK", "not json"), Err(CatalogError::Malformed(_))));
    assert!(matches!(parse_catalog(200, "OK", r#"{"files": []}"#), Err(CatalogError::Malformed(_))));
    assert!(matches!(parse_catalog(200, "OK", "[1, 2]"), Err(CatalogError::Malformed(_))));
    assert!(matches!(parse_catalog(200, "OK", ""), Err(CatalogError::Malformed(_))));
}

#[test]
fn options_mirror_file_names_after_placeholder() {
    let files = vec!["a_bg.png".to_string(), "b_bg.jpg".to_string()];
    let options = catalog_options(&files, Some("pick"));
    assert_eq!(options.len(), 3);
    assert_eq!(options[0].value, "");
    assert_eq!(options[1], SelectOption::file("a_bg.png"));
    assert_eq!(options[2].label, "b_bg.jpg");
}

#[test]
fn endpoint_urls_share_one_origin() {
    assert_eq!(CatalogKind::SpineFiles.url(""), "/list-spine-files");
    assert_eq!(CatalogKind::BackgroundImages.url(""), "/list-bg-images");
    assert_eq!(
        CatalogKind::BackgroundImages.url("http://localhost:8000/"),
        "http://localhost:8000/list-bg-images"
    );
    assert_eq!(
        CatalogKind::SpineFiles.url("http://localhost:8000"),
        "http://localhost:8000/list-spine-files"
    );
}

#[test]
fn bundle_requests_three_companion_files() {
    let bundle = SpineBundle::from_selection("foo.json");
    assert_eq!(bundle.base_name(), "foo");
    let requests = bundle.requests();
    let urls: Vec<&str> = requests.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["foo.json", "foo.atlas", "foo.png"]);
    let keys: Vec<&str> = requests.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["foo_spine", "foo.atlas", "foo.png"]);
}

#[test]
fn bundle_accepts_bare_base_name() {
    assert_eq!(SpineBundle::from_selection("foo"), SpineBundle::from_selection("foo.json"));
    assert_eq!(SpineBundle::from_selection("dir/hero.json").atlas_url(), "dir/hero.atlas");
}

#[test]
fn complete_result_set_passes() {
    let bundle = SpineBundle::from_selection("foo.json");
    let loaded = ["foo_spine", "foo.atlas", "foo.png"];
    assert!(bundle.missing(|k| loaded.iter().any(|l| *l == k)).is_empty());
    assert_eq!(bundle.check_loaded(|k| loaded.iter().any(|l| *l == k)), Ok(()));
}

#[test]
fn any_absent_resource_aborts() {
    let bundle = SpineBundle::from_selection("foo.json");
    for absent in ["foo_spine", "foo.atlas", "foo.png"] {
        let result = bundle.check_loaded(|k| k != absent);
        let Err(BundleError::Missing(urls)) = result else {
            panic!("expected missing error for {}", absent);
        };
        assert_eq!(urls.len(), 1);
    }
    let err = bundle.check_loaded(|_| false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "some required files failed to load: foo.json, foo.atlas, foo.png"
    );
}
