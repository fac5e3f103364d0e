//! Query-string construction shared by every feed command.

use std::borrow::Cow;

use reqwest::Url;

use crate::command::Command;

/// One fragment of a feed query string: either `key=value` or a bare `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    key: Cow<'static, str>,
    value: Option<String>,
}

impl QueryParam {
    pub fn pair(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A key with no value, e.g. `terse`.
    pub fn flag(key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Builds the request URL for `command`.
///
/// The query is `command=<name>`, then `a=<agency>` when given, then `params`
/// in order. Keys and values are form-urlencoded.
pub fn build_url<I>(base: &Url, command: Command, agency: Option<&str>, params: I) -> Url
where
    I: IntoIterator<Item = QueryParam>,
{
    let mut url = base.clone();
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("command", command.as_str());
        if let Some(agency) = agency {
            query.append_pair("a", agency);
        }
        for param in params {
            match param.value() {
                Some(value) => query.append_pair(param.key(), value),
                None => query.append_key_only(param.key()),
            };
        }
    }
    url
}
