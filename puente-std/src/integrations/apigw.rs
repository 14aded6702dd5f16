//! Routers over AWS API Gateway proxy events.
//!
//! The `Request`/`Response` impls live in `puente_core::integrations::apigw`.

use crate::router::Router;
use aws_lambda_events::event::apigw::{
    ApiGatewayProxyRequest, ApiGatewayProxyResponse, ApiGatewayV2httpRequest,
    ApiGatewayV2httpResponse,
};

/// A router over API Gateway REST (v1) proxy events.
pub type ApiGatewayRouter = Router<ApiGatewayProxyRequest, ApiGatewayProxyResponse>;

/// A router over API Gateway HTTP API (v2) events.
pub type ApiGatewayV2Router = Router<ApiGatewayV2httpRequest, ApiGatewayV2httpResponse>;
