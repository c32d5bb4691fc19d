use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a `POST /api/save_result` request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    /// The quiz outcome. Opaque apart from an optional `uid` field.
    #[serde(default)]
    pub result: Option<Value>,
    /// Display name the client chose, if any.
    #[serde(default)]
    pub username: Option<String>,
}

impl Submission {
    /// Returns the result payload if it counts as present.
    ///
    /// Absent, `null`, `false`, `0` and `""` are all treated as missing.
    pub fn result(&self) -> Option<&Value> {
        match self.result.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            value => Some(value),
        }
    }
}

/// Lenient extraction from any parsed JSON body.
///
/// A body that is valid JSON but not an object simply has no result. A
/// non-zero numeric `username` is kept in its decimal form; other types are
/// ignored.
impl From<Value> for Submission {
    fn from(payload: Value) -> Self {
        let Value::Object(mut fields) = payload else {
            return Submission::default();
        };

        let username = match fields.remove("username") {
            Some(Value::String(name)) => Some(name),
            Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        };

        Submission {
            result: fields.remove("result"),
            username,
        }
    }
}

/// Body of a successful save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveResponse {
    pub ok: bool,
    /// Repository path the result was written to.
    pub path: String,
}

impl SaveResponse {
    pub fn stored(path: String) -> Self {
        SaveResponse { ok: true, path }
    }
}
