//! HTTP implementation of the meal plan service
//!
//! Both endpoints take a JSON body via `POST`. Failures keep the backend's
//! `{"error": "..."}` message when it sends one.

use gloo_net::http::{Request, Response};
use nutriplan_core::config::ApiConfig;
use nutriplan_core::error::server_error_message;
use nutriplan_core::{ClientError, Plan, PlanRequest, PlanService};
use serde::Serialize;

pub struct HttpPlanService {
    api: ApiConfig,
}

impl HttpPlanService {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }
}

impl PlanService for HttpPlanService {
    async fn generate(&self, request: &PlanRequest) -> Result<Option<Plan>, ClientError> {
        let resp = post_json(&self.api.generate_url(), request).await?;

        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        Ok(Plan::from_response_json(&body)?)
    }

    async fn export_pdf(&self, plan: &Plan) -> Result<Vec<u8>, ClientError> {
        let resp = post_json(&self.api.export_url(), plan).await?;

        resp.binary()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Send `body` as JSON and return the response if its status is 2xx
async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<Response, ClientError> {
    log::debug!("POST {}", url);

    let resp = Request::post(url)
        .json(body)
        .map_err(|e| ClientError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if resp.ok() {
        return Ok(resp);
    }

    let status = resp.status();
    let status_text = resp.status_text();
    let body = resp.text().await.unwrap_or_default();

    Err(ClientError::Server {
        status,
        message: server_error_message(&body, &status_text),
    })
}
