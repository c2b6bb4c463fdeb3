use crate::core::{
    Classifier, ClassificationRequest, ClassificationResponse, ConfigProvider, StatusPolicy,
};
use crate::utils::error::{ClassifierError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// HTTP client for the prediction endpoint, shared by both triggers.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    endpoint: String,
}

impl PredictionClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Classifier for PredictionClient {
    async fn classify(
        &self,
        request: &ClassificationRequest,
        policy: StatusPolicy,
    ) -> Result<ClassificationResponse> {
        tracing::debug!("POST {} for {}", self.endpoint, request.url);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Prediction response status: {}", status);

        if policy == StatusPolicy::RequireSuccess && !status.is_success() {
            return Err(ClassifierError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        ClassificationResponse::from_json_slice(&body)
    }
}
