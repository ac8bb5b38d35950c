//! End-to-end resolution against an on-disk catalog.

use std::collections::BTreeMap;

use mock_locator::locator::{Locator, LocatorError, Request};
use mock_locator::store::FsStore;

mod common;

fn locator(root: &std::path::Path) -> Locator<FsStore> {
    Locator::new(FsStore::new(root))
}

fn find_path(locator: &Locator<FsStore>, req: &Request) -> String {
    locator.find(req).unwrap().expect("expected a match").path
}

#[test]
fn test_matches_path() {
    let tmp = common::fixture_catalog();
    let locator = locator(tmp.path());

    let found = locator.find(&Request::parse("GET", "/deal/26701138")).unwrap().unwrap();
    assert_eq!(found.path, "deal/26701138.GET.json");
    assert_eq!(found.weight, 50);
    assert!(found.params.is_empty());
}

#[test]
fn test_matches_method() {
    let tmp = common::fixture_catalog();
    let locator = locator(tmp.path());

    let found = locator.find(&Request::parse("POST", "/method")).unwrap().unwrap();
    assert_eq!(found.path, "method.POST.json");
    assert_eq!(found.weight, 30);

    assert!(locator.find(&Request::parse("GET", "/method")).unwrap().is_none());
}

#[test]
fn test_matches_query_string() {
    let tmp = common::fixture_catalog();
    let locator = locator(tmp.path());

    let query: BTreeMap<String, String> = [("key1".to_string(), "value1".to_string())].into();
    let req = Request::new(["qs"], query, "GET");
    assert_eq!(find_path(&locator, &req), "qs?key1=value1.GET.json");

    // extra request keys are ignored
    let req = Request::parse("GET", "/qs?key1=value1&other=1");
    assert_eq!(find_path(&locator, &req), "qs?key1=value1.GET.json");

    // declared key missing or different
    assert!(locator.find(&Request::parse("GET", "/qs")).unwrap().is_none());
    assert!(locator.find(&Request::parse("GET", "/qs?key1=nope")).unwrap().is_none());
}

#[test]
fn test_wildcard_leaf_binds_param() {
    let tmp = common::fixture_catalog();
    let locator = locator(tmp.path());

    let found = locator.find(&Request::parse("GET", "/wildcard/anything")).unwrap().unwrap();
    assert_eq!(found.path, "wildcard/:str.GET.json");
    assert_eq!(found.params["str"], "anything");
}

#[test]
fn test_parses_params_in_path() {
    let tmp = common::fixture_catalog();
    let locator = locator(tmp.path());

    let found = locator.find(&Request::parse("GET", "/params/someid/hello")).unwrap().unwrap();
    let expected: BTreeMap<String, String> = [
        ("id".to_string(), "someid".to_string()),
        ("value".to_string(), "hello".to_string()),
    ]
    .into();
    assert_eq!(found.params, expected);
}

#[test]
fn test_no_match_is_none() {
    let tmp = common::fixture_catalog();
    let locator = locator(tmp.path());

    let req = Request::parse("GET", "/nothing/here");
    assert!(locator.find(&req).unwrap().is_none());
    assert!(locator.find_all(&req).unwrap().is_empty());
}

#[test]
fn test_find_all_and_ranking() {
    let tmp = common::fixture_catalog();
    let locator = locator(tmp.path());
    let req = Request::parse("GET", "/weight/42");

    let all = locator.find_all(&req).unwrap();
    assert_eq!(all.len(), 2);

    let ranked = mock_locator::locator::rank(all);
    assert!(ranked[0].weight > ranked[1].weight);
    assert_eq!(ranked[0].path, "weight/42.GET.json");
    assert_eq!(ranked[1].path, "weight/:id.json");
    assert_eq!(ranked[1].params["id"], "42");

    assert_eq!(find_path(&locator, &req), "weight/42.GET.json");
}

#[test]
fn test_malformed_leaf_aborts_lookup() {
    let tmp = common::catalog(&["deal/README", "deal/1.json"]);
    let err = locator(tmp.path())
        .find(&Request::parse("GET", "/deal/1"))
        .unwrap_err();
    assert!(matches!(err, LocatorError::MalformedLeafName(ref name) if name == "README"));
}

#[test]
fn test_missing_mount_is_store_error() {
    let tmp = common::catalog(&[]);
    let err = locator(&tmp.path().join("absent"))
        .find(&Request::parse("GET", "/a"))
        .unwrap_err();
    assert!(matches!(err, LocatorError::Store { .. }));
}

#[test]
fn test_catalog_is_read_on_every_lookup() {
    let tmp = common::catalog(&["a.json"]);
    let locator = locator(tmp.path());
    let req = Request::parse("GET", "/b");

    assert!(locator.find(&req).unwrap().is_none());
    std::fs::write(tmp.path().join("b.GET.json"), "{}").unwrap();
    assert_eq!(find_path(&locator, &req), "b.GET.json");
}
