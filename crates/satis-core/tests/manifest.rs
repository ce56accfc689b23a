use satis_core::manifest::SatisConfig;
use satis_core::require::RequirementMap;

fn config(json: &str) -> SatisConfig {
    serde_json::from_str(json).unwrap()
}

#[test]
fn require_is_decoded() {
    let cfg = config(r#"{"name": "x/y", "require": {"a/a": "1.0|2.0"}}"#);
    let require = cfg.require().unwrap();
    assert_eq!(require.get("a/a").unwrap().tokens(), ["1.0", "2.0"]);
}

#[test]
fn missing_require_is_empty() {
    let cfg = config(r#"{"name": "x/y"}"#);
    assert!(cfg.require().unwrap().is_empty());
}

#[test]
fn null_require_is_empty() {
    let cfg = config(r#"{"require": null}"#);
    assert!(cfg.require().unwrap().is_empty());
}

#[test]
fn non_string_constraint_is_an_error() {
    let cfg = config(r#"{"require": {"a/a": 1}}"#);
    assert!(cfg.require().is_err());
}

#[test]
fn non_object_document_is_rejected() {
    let result: Result<SatisConfig, _> = serde_json::from_str("[1, 2]");
    assert!(result.is_err());
}

#[test]
fn set_require_keeps_field_position() {
    let mut cfg = config(r#"{"name": "x/y", "require": {}, "archive": {"directory": "dist"}}"#);
    let require: RequirementMap = [("a/a", "1.0")].into_iter().collect();
    cfg.set_require(&require).unwrap();

    let keys: Vec<&str> = cfg.as_map().keys().map(String::as_str).collect();
    assert_eq!(keys, ["name", "require", "archive"]);
    assert_eq!(
        serde_json::to_string(&cfg).unwrap(),
        r#"{"name":"x/y","require":{"a/a":"1.0"},"archive":{"directory":"dist"}}"#
    );
}

#[test]
fn set_require_appends_when_missing() {
    let mut cfg = config(r#"{"name": "x/y"}"#);
    cfg.set_require(&RequirementMap::new()).unwrap();
    assert_eq!(serde_json::to_string(&cfg).unwrap(), r#"{"name":"x/y","require":{}}"#);
}

#[test]
fn other_fields_are_untouched() {
    let cfg = config(r#"{"name": "x/y", "require-all": false}"#);
    assert_eq!(cfg.as_map().get("require-all"), Some(&serde_json::Value::Bool(false)));
}
