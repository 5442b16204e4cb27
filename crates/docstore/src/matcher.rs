//! Matching candidate values against query specs.
//!
//! A [`MatchSpec`] is classified once, when it is built, into one of four
//! shapes. Evaluation dispatches on that shape in a fixed precedence order:
//! predicate, then pattern, then container, then literal.

use std::fmt;

use docstore_path::get_nested_value;
use docstore_util::{deep_compare, Value};
use regex::Regex;

/// Predicate callback used by [`MatchSpec::Predicate`].
pub type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// How a candidate value is tested.
pub enum MatchSpec {
    /// Matches when the callback returns true for the candidate.
    Predicate(Box<PredicateFn>),
    /// Matches string candidates the expression finds a match in.
    Pattern(Regex),
    /// Matches candidates structurally equal to an array or object.
    Container(Value),
    /// Matches candidates strictly equal to a scalar, `null` or undefined.
    Literal(Value),
}

impl MatchSpec {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        MatchSpec::Predicate(Box::new(f))
    }

    /// Compile `pattern` into a [`MatchSpec::Pattern`].
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(MatchSpec::Pattern)
    }

    /// Test `candidate` against this spec.
    pub fn matches(&self, candidate: &Value) -> bool {
        match self {
            MatchSpec::Predicate(f) => f(candidate),
            MatchSpec::Pattern(re) => candidate.as_str().is_some_and(|s| re.is_match(s)),
            MatchSpec::Container(expected) => deep_compare(expected, candidate),
            MatchSpec::Literal(expected) => strict_equals(expected, candidate),
        }
    }
}

/// Strict equality: same kind and same value, no coercion.
///
/// Only scalars, `null` and undefined have a literal identity; a foreign kind
/// (date, bytes, map, set) never equals anything literally.
fn strict_equals(expected: &Value, candidate: &Value) -> bool {
    let kind = expected.kind();
    if !kind.is_scalar() && !expected.is_undefined() {
        return false;
    }
    deep_compare(expected, candidate)
}

impl From<Value> for MatchSpec {
    fn from(value: Value) -> Self {
        if value.is_container() {
            MatchSpec::Container(value)
        } else {
            MatchSpec::Literal(value)
        }
    }
}

impl From<Regex> for MatchSpec {
    fn from(re: Regex) -> Self {
        MatchSpec::Pattern(re)
    }
}

impl fmt::Debug for MatchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchSpec::Predicate(_) => f.write_str("Predicate(..)"),
            MatchSpec::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            MatchSpec::Container(v) => f.debug_tuple("Container").field(v).finish(),
            MatchSpec::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
        }
    }
}

/// Decide whether `candidate` satisfies `spec`.
///
/// Never fails: a type mismatch is simply a non-match.
///
/// # Example
///
/// ```
/// use docstore::{match_values, MatchSpec, Value};
///
/// assert!(match_values(&MatchSpec::from(Value::from("test")), &Value::from("test")));
/// assert!(match_values(&MatchSpec::pattern("test").unwrap(), &Value::from("test123")));
/// assert!(!match_values(&MatchSpec::pattern("test").unwrap(), &Value::from(123)));
/// ```
pub fn match_values(spec: &MatchSpec, candidate: &Value) -> bool {
    spec.matches(candidate)
}

/// Test a document against field conditions.
///
/// Each condition pairs a dot-path with a spec; the document matches when
/// every path resolves to a value its spec accepts. Missing paths resolve to
/// undefined. An empty condition list matches every document.
pub fn match_document(conditions: &[(String, MatchSpec)], doc: &Value) -> bool {
    conditions
        .iter()
        .all(|(path, spec)| spec.matches(get_nested_value(path, doc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(value: serde_json::Value) -> MatchSpec {
        MatchSpec::from(Value::from(value))
    }

    #[test]
    fn test_literals() {
        assert!(match_values(&spec(json!("test")), &Value::from("test")));
        assert!(match_values(&spec(json!(88)), &Value::from(88)));
        assert!(match_values(&spec(json!(true)), &Value::from(true)));
        assert!(match_values(&spec(json!(null)), &Value::Null));
        assert!(match_values(&MatchSpec::from(Value::Undefined), &Value::Undefined));

        assert!(!match_values(&spec(json!("test")), &Value::from(10)));
        assert!(!match_values(&spec(json!(1)), &Value::from("1")));
        assert!(!match_values(&spec(json!(null)), &Value::Undefined));
    }

    #[test]
    fn test_predicates() {
        let is_test = MatchSpec::predicate(|v| v.as_str() == Some("test"));
        assert!(match_values(&is_test, &Value::from("test")));

        let never = MatchSpec::predicate(|_| false);
        assert!(!match_values(&never, &Value::from(true)));
    }

    #[test]
    fn test_predicate_wins_over_equality() {
        // The candidate equals the container the predicate closes over,
        // but the predicate alone decides.
        let expected = Value::from(json!([1, 2, 3]));
        let reject = MatchSpec::predicate(move |v| !deep_compare(v, &expected));
        assert!(!match_values(&reject, &Value::from(json!([1, 2, 3]))));
    }

    #[test]
    fn test_patterns() {
        let re = MatchSpec::pattern("test").unwrap();
        assert!(match_values(&re, &Value::from("test123")));
        assert!(!match_values(&re, &Value::from(true)));
        assert!(!match_values(&re, &Value::from(123)));
        assert!(!match_values(&re, &Value::Undefined));
    }

    #[test]
    fn test_containers() {
        assert!(match_values(&spec(json!([1, 2, 3])), &Value::from(json!([1, 2, 3]))));
        assert!(match_values(&spec(json!({"value": true})), &Value::from(json!({"value": true}))));
        assert!(!match_values(
            &spec(json!({"test": [1, 2, 3]})),
            &Value::from(json!({"test": [1, 2, 3, 4]}))
        ));
    }

    #[test]
    fn test_container_with_foreign_member_never_matches_array() {
        let with_map = MatchSpec::from(Value::object([("test", Value::Map(vec![]))]));
        assert!(!match_values(&with_map, &Value::from(json!({"test": []}))));
    }

    #[test]
    fn test_foreign_literal_never_matches() {
        let date = MatchSpec::from(Value::Date(1.0));
        assert!(matches!(date, MatchSpec::Literal(_)));
        assert!(!match_values(&date, &Value::Date(1.0)));
    }

    #[test]
    fn test_classification() {
        assert!(matches!(spec(json!([])), MatchSpec::Container(_)));
        assert!(matches!(spec(json!({})), MatchSpec::Container(_)));
        assert!(matches!(spec(json!(1)), MatchSpec::Literal(_)));
        assert_eq!(format!("{:?}", MatchSpec::pattern("a+").unwrap()), "Pattern(\"a+\")");
    }

    #[test]
    fn test_match_document() {
        let doc = Value::from(json!({"name": "alpha", "tags": ["x", "y"], "meta": {"n": 3}}));
        let query = vec![
            ("name".to_string(), MatchSpec::pattern("^al").unwrap()),
            ("tags".to_string(), spec(json!(["x", "y"]))),
            (
                "meta.n".to_string(),
                MatchSpec::predicate(|v| v.as_f64().is_some_and(|n| n > 2.0)),
            ),
        ];
        assert!(match_document(&query, &doc));
        assert!(match_document(&[], &doc));

        let missing = vec![("meta.missing".to_string(), spec(json!(null)))];
        assert!(!match_document(&missing, &doc));

        let absent = vec![("meta.missing".to_string(), MatchSpec::from(Value::Undefined))];
        assert!(match_document(&absent, &doc));
    }
}
