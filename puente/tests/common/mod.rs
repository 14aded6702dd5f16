#![allow(dead_code)]

use puente::{
    Request, Response, Router,
    testing::{MockRequest, MockResponse},
};

// ============================================================================
// Test Envelope Types
// ============================================================================

/// A request carrying a header-like tenant field the router never reads.
#[derive(Clone, Debug)]
pub struct TenantRequest {
    pub path: String,
    pub method: String,
    pub tenant: String,
}

impl TenantRequest {
    pub fn new(method: &str, path: &str, tenant: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            tenant: tenant.to_string(),
        }
    }
}

impl Request for TenantRequest {
    fn path(&self) -> &str {
        &self.path
    }

    fn method(&self) -> &str {
        &self.method
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JsonResponse {
    pub status: u16,
    pub body: String,
    pub content_type: &'static str,
}

impl Response for JsonResponse {
    fn from_parts(status: u16, body: String) -> Self {
        Self {
            status,
            body,
            content_type: "text/plain",
        }
    }

    fn status_code(&self) -> u16 {
        self.status
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type MockRouter = Router<MockRequest, MockResponse>;

pub fn empty(_req: MockRequest) -> MockResponse {
    MockResponse::default()
}

pub fn test_response(_req: MockRequest) -> MockResponse {
    MockResponse::ok("test response")
}
