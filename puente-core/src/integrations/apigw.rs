//! AWS API Gateway proxy envelopes.
//!
//! A missing path reads as the empty string, which only matches a route
//! registered on `""`. Status codes outside `0..=65535` are clamped when
//! read through [`Response::status_code`]; the stored value is untouched.

use crate::message::{Request, Response};
use aws_lambda_events::{
    encodings::Body,
    event::apigw::{
        ApiGatewayProxyRequest, ApiGatewayProxyResponse, ApiGatewayV2httpRequest,
        ApiGatewayV2httpResponse,
    },
};

fn clamp_status(status: i64) -> u16 {
    status.clamp(0, i64::from(u16::MAX)) as u16
}

impl Request for ApiGatewayProxyRequest {
    fn path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    fn method(&self) -> &str {
        self.http_method.as_str()
    }
}

impl Response for ApiGatewayProxyResponse {
    fn from_parts(status: u16, body: String) -> Self {
        let mut response = ApiGatewayProxyResponse::default();
        response.status_code = i64::from(status);
        response.body = Some(Body::Text(body));
        response
    }

    fn status_code(&self) -> u16 {
        clamp_status(self.status_code)
    }
}

impl Request for ApiGatewayV2httpRequest {
    fn path(&self) -> &str {
        self.raw_path.as_deref().unwrap_or_default()
    }

    fn method(&self) -> &str {
        self.request_context.http.method.as_str()
    }
}

impl Response for ApiGatewayV2httpResponse {
    fn from_parts(status: u16, body: String) -> Self {
        let mut response = ApiGatewayV2httpResponse::default();
        response.status_code = i64::from(status);
        response.body = Some(Body::Text(body));
        response
    }

    fn status_code(&self) -> u16 {
        clamp_status(self.status_code)
    }
}
