//! Request configuration.
//!
//! Every field is optional when deserialized; omitted fields fall back to
//! the values of `RequestConfig::default()`:
//!
//! | field      | default | meaning                                        |
//! |------------|---------|------------------------------------------------|
//! | `data`     | `{}`    | POST payload; `null` sends no body             |
//! | `blocking` | `false` | run the exchange inline on the calling thread  |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    pub data: Option<Value>,
    pub blocking: bool,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            data: Some(Value::Object(Map::new())),
            blocking: false,
        }
    }
}

impl RequestConfig {
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn without_data(mut self) -> Self {
        self.data = None;
        self
    }

    pub fn blocking(mut self, blocking: bool) -> Self {
        self.blocking = blocking;
        self
    }
}
