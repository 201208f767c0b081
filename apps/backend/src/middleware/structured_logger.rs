use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn, Level};

use super::request_trace::TraceId;

/// Emits one `request_completed` event per request; level follows the status class.
///
/// `http.route` is the matched pattern (`/api/matches/{id}/deliveries`), so
/// scoring traffic can be grouped without parsing ids out of paths.
pub struct StructuredLogger;

fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

struct Completed {
    method: String,
    path: String,
    route: String,
    trace_id: String,
}

impl Completed {
    fn emit(&self, status: StatusCode, duration_us: u64) {
        let status_code = status.as_u16();
        let level = level_for(status);
        if level == Level::ERROR {
            error!(
                http.method = %self.method, url.path = %self.path, http.route = %self.route,
                http.status_code = status_code, duration_us, trace_id = %self.trace_id,
                "request_completed"
            );
        } else if level == Level::WARN {
            warn!(
                http.method = %self.method, url.path = %self.path, http.route = %self.route,
                http.status_code = status_code, duration_us, trace_id = %self.trace_id,
                "request_completed"
            );
        } else {
            info!(
                http.method = %self.method, url.path = %self.path, http.route = %self.route,
                http.status_code = status_code, duration_us, trace_id = %self.trace_id,
                "request_completed"
            );
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let completed = Completed {
            method: req.method().to_string(),
            path: req.path().to_string(),
            route: req.match_pattern().unwrap_or_else(|| "unmatched".to_string()),
            trace_id: req
                .extensions()
                .get::<TraceId>()
                .map(|t| t.0.clone())
                .unwrap_or_else(|| "unknown".to_string()),
        };

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            completed.emit(status, start.elapsed().as_micros() as u64);
            result
        })
    }
}
