use crate::core::{
    Classifier, ClassificationRequest, ClassificationResponse, Messages, StatusPolicy, TabProvider,
};
use crate::utils::error::ClassifierError;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    Idle,
    Ready,
    Disabled,
    Pending,
    Success,
    Failed,
}

/// What the popup currently renders. At most one of `prediction`/`error` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView {
    pub state: PopupState,
    pub url_label: String,
    pub check_enabled: bool,
    pub prediction: Option<String>,
    pub error: Option<String>,
}

impl PopupView {
    fn idle() -> Self {
        Self {
            state: PopupState::Idle,
            url_label: String::new(),
            check_enabled: false,
            prediction: None,
            error: None,
        }
    }

    fn show_prediction(&mut self, label: String) {
        self.state = PopupState::Success;
        self.prediction = Some(label);
        self.error = None;
    }

    fn show_error(&mut self, message: String) {
        self.state = PopupState::Failed;
        self.error = Some(message);
        self.prediction = None;
    }
}

/// One popup instance. Created fresh on every open; nothing survives a close.
pub struct PopupTrigger<C: Classifier> {
    classifier: C,
    messages: Messages,
    url: Option<String>,
    view: Mutex<PopupView>,
}

impl<C: Classifier> PopupTrigger<C> {
    /// Opens the popup and captures the active tab's URL.
    pub async fn open<T: TabProvider>(tabs: &T, classifier: C, messages: Messages) -> Self {
        let mut view = PopupView::idle();

        let url = match tabs.active_tab().await {
            Ok(tab) => tab.and_then(|tab| tab.url().map(str::to_string)),
            Err(e) => {
                tracing::warn!("Active tab query failed: {}", e);
                None
            }
        };

        match &url {
            Some(url) => {
                view.state = PopupState::Ready;
                view.url_label = url.clone();
                view.check_enabled = true;
            }
            None => {
                view.state = PopupState::Disabled;
                view.url_label = messages.popup_url_unavailable.clone();
                view.check_enabled = false;
            }
        }

        Self {
            classifier,
            messages,
            url,
            view: Mutex::new(view),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub async fn view(&self) -> PopupView {
        self.view.lock().await.clone()
    }

    /// Runs one classification and renders its outcome.
    ///
    /// Overlapping calls are not serialised: each one renders when it
    /// resolves, so the last response to arrive is what stays on screen.
    pub async fn check(&self) -> PopupView {
        let Some(url) = self.url.as_deref() else {
            let mut view = self.view.lock().await;
            view.show_error(self.messages.popup_no_url.clone());
            return view.clone();
        };

        self.view.lock().await.state = PopupState::Pending;

        let request = ClassificationRequest::new(url);
        let outcome = self
            .classifier
            .classify(&request, StatusPolicy::RequireSuccess)
            .await;

        let mut view = self.view.lock().await;
        match outcome {
            Ok(ClassificationResponse::Prediction(prediction)) => {
                tracing::info!("Prediction for {}: {}", url, prediction.label);
                view.show_prediction(prediction.label);
            }
            Ok(ClassificationResponse::ServiceError(message)) => {
                tracing::info!("Prediction service reported an error for {}: {}", url, message);
                view.show_error(message);
            }
            Err(e) => {
                log_failure(url, &e);
                view.show_error(self.messages.popup_request_failed.clone());
            }
        }
        view.clone()
    }
}

fn log_failure(url: &str, e: &ClassifierError) {
    match e {
        ClassifierError::HttpStatus { status } => {
            tracing::warn!("Prediction endpoint answered HTTP {} for {}", status, url)
        }
        _ => tracing::error!("❌ Prediction request for {} failed: {}", url, e),
    }
}
