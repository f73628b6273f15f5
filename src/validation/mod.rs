//! Request validation.
//!
//! A request body is checked by an ordered list of [`Check`]s run with
//! [`run_chain`]. The first failing check ends the chain and its error is the
//! response; nothing is written to a repository until the whole chain passed.

pub mod dishes;
pub mod orders;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::errors::ApiError;
use crate::utils::canonical_id;

/// The `data` object of a request body.
pub type Data = Map<String, Value>;

pub type Check<'a> = Box<dyn Fn(&Data) -> Result<(), ApiError> + 'a>;

/// Raw request body. A missing or non-object `data` reads as `{}`.
#[derive(Debug, Default, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub data: Value,
}

impl Payload {
    /// Parses a raw request body whatever its content type. An empty body
    /// reads as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| ApiError::Validation(e.to_string()))
    }

    pub fn fields(&self) -> Data {
        self.data.as_object().cloned().unwrap_or_default()
    }
}

pub fn step<'a>(check: impl Fn(&Data) -> Result<(), ApiError> + 'a) -> Check<'a> {
    Box::new(check)
}

pub fn run_chain(data: &Data, chain: &[Check<'_>]) -> Result<(), ApiError> {
    chain.iter().try_for_each(|check| check(data)).inspect_err(|e| {
        warn!(reason = %e, "request rejected");
    })
}

/// `null`, `false`, `0`, `NaN` and `""` are falsy; everything else, empty
/// arrays and objects included, is truthy.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A JSON number that is a whole number greater than zero. `5.0` counts.
pub fn positive_integer(v: &Value) -> Option<u64> {
    let Value::Number(n) = v else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return (u > 0).then_some(u);
    }
    n.as_f64()
        .filter(|f| *f > 0.0 && f.fract() == 0.0 && *f < u64::MAX as f64)
        .map(|f| f as u64)
}

fn missing(property: &str) -> ApiError {
    ApiError::Validation(format!("Must include a {property}"))
}

pub fn has_property(property: &'static str) -> Check<'static> {
    step(move |data: &Data| match data.get(property) {
        Some(v) if is_truthy(v) => Ok(()),
        _ => Err(missing(property)),
    })
}

/// Body id, when present and truthy, must equal the route id. `kind` is the
/// capitalized entity name used in the message.
pub fn id_matches<'a>(kind: &'static str, route_id: &'a str) -> Check<'a> {
    step(move |data: &Data| match data.get("id") {
        Some(id) if is_truthy(id) => {
            let body_id = canonical_id(id);
            if body_id == route_id {
                Ok(())
            } else {
                Err(ApiError::Conflict(format!(
                    "{kind} id does not match route id. {kind}: {body_id}, Route: {route_id}"
                )))
            }
        }
        _ => Ok(()),
    })
}

/// Reads a text field after the chain has passed. Truthy values that are not
/// strings are treated as missing.
pub fn text_field(data: &Data, property: &str) -> Result<String, ApiError> {
    match data.get(property) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(missing(property)),
    }
}
