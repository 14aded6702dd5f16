//! Supported http verbs.

use crate::error::ParseMethodError;
use std::{fmt, str::FromStr};

/// The `GET` verb constant.
pub const HTTP_METHOD_GET: &str = "GET";
/// The `POST` verb constant.
pub const HTTP_METHOD_POST: &str = "POST";
/// The `PUT` verb constant.
pub const HTTP_METHOD_PUT: &str = "PUT";
/// The `PATCH` verb constant.
pub const HTTP_METHOD_PATCH: &str = "PATCH";
/// The `DELETE` verb constant.
pub const HTTP_METHOD_DELETE: &str = "DELETE";

/// An http method a route can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl Method {
    /// All supported methods, in declaration order.
    pub const ALL: [Method; 5] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
    ];

    /// The literal verb string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => HTTP_METHOD_GET,
            Method::Post => HTTP_METHOD_POST,
            Method::Put => HTTP_METHOD_PUT,
            Method::Patch => HTTP_METHOD_PATCH,
            Method::Delete => HTTP_METHOD_DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Case-sensitive on purpose: matching compares verbs by exact string.
impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}

impl PartialEq<str> for Method {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Method {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
