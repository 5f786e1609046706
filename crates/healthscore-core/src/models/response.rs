use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A raw answer. `null` in JSON is represented by `Response::value == None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ResponseValue {
    Number(f64),
    Text(String),
    Choices(Vec<String>),
}

impl ResponseValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ResponseValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            ResponseValue::Choices(c) => Some(c),
            _ => None,
        }
    }

    /// True when a select answer is, or includes, `option`.
    pub fn selects(&self, option: &str) -> bool {
        match self {
            ResponseValue::Text(s) => s == option,
            ResponseValue::Choices(c) => c.iter().any(|v| v == option),
            ResponseValue::Number(_) => false,
        }
    }
}

impl From<f64> for ResponseValue {
    fn from(n: f64) -> Self {
        ResponseValue::Number(n)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        ResponseValue::Text(s.to_string())
    }
}

impl From<Vec<&str>> for ResponseValue {
    fn from(c: Vec<&str>) -> Self {
        ResponseValue::Choices(c.into_iter().map(str::to_string).collect())
    }
}

/// One answered (or explicitly skipped) question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Response {
    pub question_id: String,
    #[serde(default)]
    pub value: Option<ResponseValue>,
}

impl Response {
    pub fn new(question_id: impl Into<String>, value: impl Into<ResponseValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: Some(value.into()),
        }
    }

    pub fn skipped(question_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: None,
        }
    }
}

/// Wire format accepted from callers: either a list of responses or a
/// `{questionId: value}` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResponseSheet {
    List(Vec<Response>),
    Map(ResponseMap),
}

impl ResponseSheet {
    pub fn from_json(json: &str) -> Result<Vec<Response>, CoreError> {
        let sheet: ResponseSheet = serde_json::from_str(json)?;
        Ok(sheet.into_responses())
    }

    pub fn into_responses(self) -> Vec<Response> {
        match self {
            ResponseSheet::List(responses) => responses,
            ResponseSheet::Map(ResponseMap(responses)) => responses,
        }
    }
}

/// The object form of a sheet, in document order. A repeated key is kept
/// as a second response so validation rejects it instead of the last
/// value silently replacing the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMap(pub Vec<Response>);

impl<'de> Deserialize<'de> for ResponseMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = ResponseMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping question ids to answers")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut responses = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((question_id, value)) =
                    map.next_entry::<String, Option<ResponseValue>>()?
                {
                    responses.push(Response { question_id, value });
                }
                Ok(ResponseMap(responses))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}
