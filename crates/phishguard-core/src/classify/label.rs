//! Class labels as exported by the training pipeline.

use serde::Deserialize;

/// A class label of arbitrary JSON type (int, bool or string, depending on
/// how the training data encoded the target).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ClassLabel(pub serde_json::Value);

impl ClassLabel {
    /// Boolean reading of a label: zero, `false`, `""`, `null` and empty
    /// containers are false, everything else is true.
    pub fn is_truthy(&self) -> bool {
        use serde_json::Value;
        match &self.0 {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
        }
    }
}
