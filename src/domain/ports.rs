use crate::domain::model::{
    Acknowledgement, ClassificationRequest, ClassificationResponse, MenuItem, Notification, Tab,
};
use crate::domain::messages::Messages;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// How the classifier treats the HTTP status of the prediction response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Decode the body whatever the status code.
    ReadBody,
    /// Fail with `HttpStatus` before decoding when the status is not 2xx.
    RequireSuccess,
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn messages(&self) -> &Messages;
}

#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(
        &self,
        request: &ClassificationRequest,
        policy: StatusPolicy,
    ) -> Result<ClassificationResponse>;
}

#[async_trait]
pub trait TabProvider: Send + Sync {
    /// The active tab of the current window, if any.
    async fn active_tab(&self) -> Result<Option<Tab>>;
}

pub trait MenuRegistry: Send + Sync {
    fn create(&mut self, item: MenuItem) -> Result<()>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<Acknowledgement>;
}
