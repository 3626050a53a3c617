//! Internal wire types for the Reddit JSON envelopes and form bodies.

use serde::{Deserialize, Serialize};

use crate::de::null_default;
use crate::error::{ApiError, Result};
use crate::types::Submitted;

/// The `{kind, data}` envelope returned by listing endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ListingRoot {
    pub kind: Option<String>,
    pub data: Option<ListingData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ListingData {
    pub dist: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub children: Vec<RawThing>,
    pub after: Option<String>,
    pub before: Option<String>,
}

/// A thing decoded only far enough to read its discriminator.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawThing {
    #[serde(deserialize_with = "null_default")]
    pub kind: String,
    pub data: serde_json::Value,
}

/// The `{json: {errors, data}}` envelope returned when `api_type=json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SubmitRoot {
    pub json: SubmitJson,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SubmitJson {
    #[serde(deserialize_with = "null_default")]
    pub errors: Vec<Vec<serde_json::Value>>,
    pub data: Option<Submitted>,
}

impl SubmitJson {
    /// Convert Reddit's `[code, message, field]` arrays into [`ApiError`]s.
    pub fn api_errors(&self) -> Vec<ApiError> {
        self.errors
            .iter()
            .map(|parts| {
                let part = |i: usize| parts.get(i).and_then(|v| v.as_str()).map(str::to_owned);
                ApiError {
                    code: part(0).unwrap_or_default(),
                    message: part(1).unwrap_or_default(),
                    field: part(2),
                }
            })
            .collect()
    }
}

/// Form body for `api/submit`: the caller's options plus the fixed fields.
#[derive(Debug, Serialize)]
pub(crate) struct SubmitForm<'a, O> {
    #[serde(flatten)]
    pub options: &'a O,
    pub kind: &'static str,
    pub api_type: &'static str,
}

impl<'a, O> SubmitForm<'a, O> {
    pub fn new(options: &'a O, kind: &'static str) -> Self {
        Self {
            options,
            kind,
            api_type: "json",
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct IdForm<'a> {
    pub id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SendRepliesForm<'a> {
    pub id: &'a str,
    pub state: bool,
}

/// Encode a form body as `application/x-www-form-urlencoded`.
pub(crate) fn encode_form<T: Serialize>(form: &T) -> Result<String> {
    Ok(serde_urlencoded::to_string(form)?)
}
