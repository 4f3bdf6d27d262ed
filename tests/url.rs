use serde_json::json;

use fnkit::url;

#[test]
fn single_part_is_identity() {
    assert_eq!(url::join(&["anything/"]), "anything/");
    assert_eq!(url::join(&[]), "");
}

#[test]
fn joins_paths_without_slashes() {
    assert_eq!(url::join(&["a", "b", "c"]), "a/b/c");
}

#[test]
fn joins_paths_with_slashes() {
    assert_eq!(url::join(&["a/", "/b/", "/c"]), "a/b/c");
    assert_eq!(url::join(&["a/", "/b/c", "d/e"]), "a/b/c/d/e");
}

#[test]
fn preserves_leading_and_trailing_slashes() {
    assert_eq!(url::join(&["/a", "b", "c"]), "/a/b/c");
    assert_eq!(url::join(&["a", "b", "c/"]), "a/b/c/");
    assert_eq!(url::join(&["/a", "b", "c/"]), "/a/b/c/");
}

#[test]
fn value_to_pairs_expands_arrays() {
    let user = json!({"name": "John", "age": 30, "tag": ["user", "admin", "owner"]});
    let mut ans = url::value_to_pairs(&user);
    ans.sort_by(|a, b| a.0.cmp(&b.0));

    let expected = [
        ("age", "30"),
        ("name", "John"),
        ("tag", "user"),
        ("tag", "admin"),
        ("tag", "owner"),
    ];
    assert_eq!(ans.len(), expected.len());
    for ((k, v), (ek, ev)) in ans.iter().zip(expected) {
        assert_eq!((k.as_str(), v.as_str()), (ek, ev));
    }
}

#[test]
fn value_to_pairs_escapes_keys_and_values() {
    let ans = url::value_to_pairs(&json!({"key=x": "one two"}));
    assert_eq!(ans, vec![("key%3Dx".to_string(), "one%20two".to_string())]);
}

#[test]
fn value_to_pairs_skips_nulls_and_non_objects() {
    assert!(url::value_to_pairs(&json!({"a": null})).is_empty());
    assert!(url::value_to_pairs(&json!([1, 2])).is_empty());
    assert_eq!(
        url::value_to_pairs(&json!({"on": true})),
        vec![("on".to_string(), "true".to_string())]
    );
}
