use crate::utils::error::{ClassifierError, Result};
use serde::{Deserialize, Serialize};

/// A browser tab as seen by the triggers. Internal pages may carry no URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub url: Option<String>,
}

impl Tab {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    pub fn without_url() -> Self {
        Self { url: None }
    }

    /// The tab URL, treating an empty string as absent.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRequest {
    pub url: String,
}

impl ClassificationRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub label: String,
    pub echoed_url: Option<String>,
    pub transformed_url: Option<String>,
}

impl Prediction {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            echoed_url: None,
            transformed_url: None,
        }
    }

    pub fn category(&self) -> Option<RiskCategory> {
        RiskCategory::from_label(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationResponse {
    Prediction(Prediction),
    ServiceError(String),
}

/// Response body exactly as the service sends it.
#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    prediction: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    transformed_url: Option<String>,
}

impl ClassificationResponse {
    /// Decodes a response body. A non-empty `error` wins over `prediction`;
    /// a body carrying neither is a protocol violation.
    pub fn from_json_slice(body: &[u8]) -> Result<Self> {
        let wire: WireResponse = serde_json::from_slice(body)?;
        Self::from_wire(wire)
    }

    fn from_wire(wire: WireResponse) -> Result<Self> {
        if let Some(error) = wire.error.filter(|e| !e.is_empty()) {
            return Ok(Self::ServiceError(error));
        }

        match wire.prediction {
            Some(label) => Ok(Self::Prediction(Prediction {
                label,
                echoed_url: wire.url,
                transformed_url: wire.transformed_url,
            })),
            None => Err(ClassifierError::Protocol {
                message: "response has neither 'prediction' nor 'error'".to_string(),
            }),
        }
    }
}

/// Labels the prediction service is known to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskCategory {
    Safe,
    Defacement,
    Phishing,
    Malware,
}

impl RiskCategory {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "safe" | "benign" | "legitimate" => Some(Self::Safe),
            "defacement" => Some(Self::Defacement),
            "phishing" => Some(Self::Phishing),
            "malware" => Some(Self::Malware),
            _ => None,
        }
    }

    pub fn is_threat(&self) -> bool {
        !matches!(self, Self::Safe)
    }
}

/// A context-menu entry registered with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub contexts: Vec<MenuContext>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuContext {
    All,
    Page,
    Link,
    Selection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Prediction,
    ServiceError,
    Failure,
    NoUrl,
}

impl NotificationKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Prediction => "Prediction",
            Self::ServiceError | Self::Failure | Self::NoUrl => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Prediction)
    }
}

/// Feedback for a single context-menu action. `message` is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    Acknowledged,
    Dismissed,
}
