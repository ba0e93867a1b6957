//! HAR 1.2 structures with the `x-` annotations used for naming.
//!
//! Fields the pipeline does not read are kept in `extra` so the log can be
//! handed to the spec transformer without losing headers, timings or bodies.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The `log` object of a HAR file. Entry order is capture order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchiveLog {
    #[serde(default)]
    pub entries: Vec<Entry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub request: Request,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: Response,
    #[serde(
        default,
        rename = "x-service-name",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_name: Option<String>,
    #[serde(
        default,
        rename = "x-resource-name",
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub url: String,
    #[serde(
        default,
        rename = "queryString",
        deserialize_with = "null_as_default"
    )]
    pub query_string: Vec<NameValue>,
    #[serde(
        default,
        rename = "x-path-params",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub path_params: Vec<NameValue>,
    #[serde(
        default,
        rename = "x-service-name",
        skip_serializing_if = "Option::is_none"
    )]
    pub service_name: Option<String>,
    #[serde(
        default,
        rename = "x-resource-name",
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: u16,
    #[serde(
        default,
        rename = "statusText",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A `{name, value}` pair as used by `queryString` and `x-path-params`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameValue {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NameValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            extra: Map::new(),
        }
    }
}

impl Entry {
    /// Builds an entry with only the required request fields and a status.
    pub fn new(method: impl Into<String>, url: impl Into<String>, status: u16) -> Self {
        Self {
            request: Request {
                method: method.into(),
                url: url.into(),
                ..Request::default()
            },
            response: Response {
                status,
                ..Response::default()
            },
            ..Entry::default()
        }
    }

    /// Explicit service name, request-level first, trimmed. `None` if blank.
    pub fn service_annotation(&self) -> Option<&str> {
        non_blank(self.request.service_name.as_deref())
            .or_else(|| non_blank(self.service_name.as_deref()))
    }

    /// Explicit resource name, request-level first, trimmed. `None` if blank.
    pub fn resource_annotation(&self) -> Option<&str> {
        non_blank(self.request.resource_name.as_deref())
            .or_else(|| non_blank(self.resource_name.as_deref()))
    }
}

/// Stored captures may carry explicit `null`s; treat them like absent fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
