//! Purpose: Typed, path-aware readers over decoded JSON objects.
//! Exports: `Fields`.
//! Role: Every wire field lookup in the model goes through here so errors carry a dotted path.
//! Invariants: Absent and `null` are indistinguishable to every reader.
//! Invariants: Readers borrow the decoded tree; nothing is copied until a value is returned.
//! Notes: Integers and booleans are also accepted in their textual form ("42", "true").

use crate::api::AbsentArrays;
use crate::core::error::Error;
use serde_json::{Map, Value};

#[derive(Debug)]
pub(crate) struct Fields<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wraps the document root. A non-object root is an `InvalidFormat` error.
    pub(crate) fn root(value: &'a Value) -> Result<Self, Error> {
        match value {
            Value::Object(map) => Ok(Self {
                path: String::new(),
                map,
            }),
            other => Err(Error::invalid(
                "$",
                format!("expected object, found {}", kind_of(other)),
            )),
        }
    }

    fn nested(value: &'a Value, path: String) -> Result<Self, Error> {
        match value {
            Value::Object(map) => Ok(Self { path, map }),
            Value::Null => Err(Error::missing(path)),
            other => {
                let message = format!("expected object, found {}", kind_of(other));
                Err(Error::invalid(path, message))
            }
        }
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn require(&self, key: &str) -> Result<&'a Value, Error> {
        self.present(key).ok_or_else(|| Error::missing(self.path_of(key)))
    }

    pub(crate) fn text(&self, key: &str) -> Option<String> {
        self.present(key).map(text_of)
    }

    pub(crate) fn required_text(&self, key: &str) -> Result<String, Error> {
        self.require(key).map(text_of)
    }

    pub(crate) fn required_int<T>(&self, key: &str) -> Result<T, Error>
    where
        T: TryFrom<i128>,
    {
        let value = self.require(key)?;
        let wide = match value {
            Value::Number(number) => number
                .as_i64()
                .map(i128::from)
                .or_else(|| number.as_u64().map(i128::from)),
            Value::String(text) => text.trim().parse::<i128>().ok(),
            _ => None,
        };
        let wide = wide.ok_or_else(|| {
            Error::invalid(
                self.path_of(key),
                format!("expected integer, found {}", kind_of(value)),
            )
        })?;
        T::try_from(wide)
            .map_err(|_| Error::invalid(self.path_of(key), format!("integer {wide} out of range")))
    }

    pub(crate) fn required_bool(&self, key: &str) -> Result<bool, Error> {
        let value = self.require(key)?;
        let parsed = match value {
            Value::Bool(flag) => Some(*flag),
            Value::String(text) => {
                let text = text.trim();
                if text.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if text.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        };
        parsed.ok_or_else(|| {
            Error::invalid(
                self.path_of(key),
                format!("expected boolean, found {}", kind_of(value)),
            )
        })
    }

    pub(crate) fn required_object(&self, key: &str) -> Result<Fields<'a>, Error> {
        let path = self.path_of(key);
        match self.map.get(key) {
            None => Err(Error::missing(path)),
            Some(value) => Self::nested(value, path),
        }
    }

    /// Returns one reader per element; every element must be an object.
    pub(crate) fn objects(&self, key: &str, absent: AbsentArrays) -> Result<Vec<Fields<'a>>, Error> {
        let path = self.path_of(key);
        let items = match self.present(key) {
            None => {
                return match absent {
                    AbsentArrays::Reject => Err(Error::missing(path)),
                    AbsentArrays::Empty => Ok(Vec::new()),
                };
            }
            Some(Value::Array(items)) => items,
            Some(other) => {
                let message = format!("expected array, found {}", kind_of(other));
                return Err(Error::invalid(path, message));
            }
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let item_path = format!("{path}[{index}]");
                match item {
                    Value::Object(map) => Ok(Fields {
                        path: item_path,
                        map,
                    }),
                    other => Err(Error::invalid(
                        item_path,
                        format!("expected object, found {}", kind_of(other)),
                    )),
                }
            })
            .collect()
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::Fields;
    use crate::api::AbsentArrays;
    use crate::core::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn null_and_absent_read_the_same() {
        let doc = json!({ "a": null });
        let fields = Fields::root(&doc).expect("root");
        assert_eq!(fields.text("a"), None);
        assert_eq!(fields.text("b"), None);

        let err = fields.required_int::<u64>("a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.field(), Some("a"));
    }

    #[test]
    fn integers_accept_numbers_and_numeric_text() {
        let doc = json!({ "n": 42, "s": " 17 ", "neg": -3, "f": 1.5, "word": "abc" });
        let fields = Fields::root(&doc).expect("root");
        assert_eq!(fields.required_int::<u64>("n").expect("n"), 42);
        assert_eq!(fields.required_int::<u64>("s").expect("s"), 17);
        assert_eq!(fields.required_int::<i64>("neg").expect("neg"), -3);

        let err = fields.required_int::<u64>("neg").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(err.to_string().contains("out of range"));

        for key in ["f", "word"] {
            let err = fields.required_int::<u64>(key).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "key {key}");
        }
    }

    #[test]
    fn booleans_accept_literals_and_text() {
        let doc = json!({ "a": true, "b": "False", "c": 1, "d": "yes" });
        let fields = Fields::root(&doc).expect("root");
        assert!(fields.required_bool("a").expect("a"));
        assert!(!fields.required_bool("b").expect("b"));
        assert_eq!(
            fields.required_bool("c").unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
        assert_eq!(
            fields.required_bool("d").unwrap_err().kind(),
            ErrorKind::InvalidFormat
        );
    }

    #[test]
    fn text_converts_non_string_scalars() {
        let doc = json!({ "n": 7, "o": { "k": "v" } });
        let fields = Fields::root(&doc).expect("root");
        assert_eq!(fields.text("n").as_deref(), Some("7"));
        assert_eq!(fields.text("o").as_deref(), Some(r#"{"k":"v"}"#));
    }

    #[test]
    fn nested_paths_are_dotted_and_indexed() {
        let doc = json!({ "outer": { "items": [ { "x": 1 }, "nope" ] } });
        let root = Fields::root(&doc).expect("root");
        let outer = root.required_object("outer").expect("outer");

        let err = outer.objects("items", AbsentArrays::Reject).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(err.field(), Some("outer.items[1]"));

        let err = outer.required_bool("flag").unwrap_err();
        assert_eq!(err.field(), Some("outer.flag"));
    }

    #[test]
    fn absent_arrays_follow_policy() {
        let doc = json!({ "present": [], "null": null });
        let fields = Fields::root(&doc).expect("root");
        assert!(fields
            .objects("present", AbsentArrays::Reject)
            .expect("present")
            .is_empty());

        for key in ["null", "missing"] {
            let err = fields.objects(key, AbsentArrays::Reject).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingField);
            assert!(fields
                .objects(key, AbsentArrays::Empty)
                .expect("lenient")
                .is_empty());
        }
    }

    #[test]
    fn non_object_root_is_invalid() {
        let doc = json!([1, 2]);
        let err = Fields::root(&doc).err().expect("error");
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(err.field(), Some("$"));
    }
}
