use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Copy, Clone)]
pub enum HttpRequestMethod {
    Get,
    Post,
    Patch,
}

impl Default for HttpRequestMethod {
    fn default() -> Self {
        Self::Get
    }
}

pub type Headers = HashMap<String, String>;
pub type Queries = HashMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct HttpRequestData {
    pub method: HttpRequestMethod,
    pub url: String,
    pub headers: Option<Headers>,
    pub queries: Option<Queries>,
    pub body: Option<Value>,
}

impl HttpRequestData {
    pub fn new(method: HttpRequestMethod, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn with_header(mut self, header: &str, value: &str) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(header.to_string(), value.to_string());
        self
    }

    pub fn with_query(mut self, param: &str, value: &str) -> Self {
        self.queries
            .get_or_insert_with(Queries::new)
            .insert(param.to_string(), value.to_string());
        self
    }

    pub fn with_json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

pub type NumberOfRetries = u32;
pub type SecondsToSleep = u32;

#[derive(Default)]
pub struct HttpRequestWithRetriesParams<'a> {
    pub req_entity_name: &'a str,
    pub number_of_retries: NumberOfRetries,
    pub seconds_to_sleep: SecondsToSleep,
}
