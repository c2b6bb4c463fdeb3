use anyhow::Result;
use async_trait::async_trait;
use fraud_url_check::core::{
    Acknowledgement, Messages, Notification, NotificationKind, Notifier, Tab,
};
use fraud_url_check::{ClientConfig, ContextMenuTrigger, InMemoryMenus, PredictionClient};
use httpmock::prelude::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Notifier that records everything and lets the user dismiss it.
#[derive(Clone, Default)]
struct DismissingNotifier {
    shown: Arc<Mutex<Vec<Notification>>>,
}

#[async_trait]
impl Notifier for DismissingNotifier {
    async fn notify(
        &self,
        notification: &Notification,
    ) -> fraud_url_check::Result<Acknowledgement> {
        self.shown.lock().await.push(notification.clone());
        Ok(Acknowledgement::Dismissed)
    }
}

fn menu_trigger(
    endpoint: String,
    messages: Messages,
) -> Result<(
    ContextMenuTrigger<PredictionClient, DismissingNotifier>,
    DismissingNotifier,
)> {
    let client = PredictionClient::new(&ClientConfig::with_endpoint(endpoint))?;
    let notifier = DismissingNotifier::default();
    Ok((
        ContextMenuTrigger::new(client, notifier.clone(), messages),
        notifier,
    ))
}

#[tokio::test]
async fn test_menu_click_reports_prediction() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/predict")
            .json_body(serde_json::json!({"url": "https://example.com"}));
        then.status(200).json_body(serde_json::json!({
            "url": "https://example.com",
            "transformed_url": ".example.com",
            "prediction": "SAFE"
        }));
    });

    let (trigger, notifier) = menu_trigger(server.url("/predict"), Messages::default())?;
    let mut menus = InMemoryMenus::new();
    trigger.register(&mut menus)?;
    assert!(menus.find("checkURL").is_some());

    let tab = Tab::with_url("https://example.com");
    let notification = trigger.handle_click("checkURL", Some(&tab)).await?;

    api_mock.assert();
    let notification = notification.expect("menu click should notify");
    assert_eq!(notification.kind, NotificationKind::Prediction);
    assert_eq!(notification.message, "SAFE");
    assert_eq!(notifier.shown.lock().await.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_menu_reads_error_body_on_bad_request() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(400)
            .json_body(serde_json::json!({"error": "URL is required"}));
    });

    let (trigger, _) = menu_trigger(server.url("/predict"), Messages::default())?;
    let tab = Tab::with_url("chrome://newtab");
    let notification = trigger.handle_click("checkURL", Some(&tab)).await?.unwrap();

    api_mock.assert();
    assert_eq!(notification.kind, NotificationKind::ServiceError);
    assert_eq!(notification.message, "URL is required");
    Ok(())
}

#[tokio::test]
async fn test_menu_missing_url_issues_no_request() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200).json_body(serde_json::json!({"prediction": "SAFE"}));
    });

    let (trigger, notifier) = menu_trigger(server.url("/predict"), Messages::default())?;
    let notification = trigger
        .handle_click("checkURL", Some(&Tab::without_url()))
        .await?
        .unwrap();

    api_mock.assert_hits(0);
    assert_eq!(notification.kind, NotificationKind::NoUrl);
    assert_eq!(notification.message, "No valid URL found for this tab.");
    assert_eq!(notifier.shown.lock().await.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_menu_protocol_violation_uses_configured_message() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/predict");
        then.status(200).json_body(serde_json::json!({"status": "ok"}));
    });

    let messages = Messages {
        menu_request_failed: "Classifier is not responding.".to_string(),
        ..Messages::default()
    };
    let (trigger, _) = menu_trigger(server.url("/predict"), messages)?;
    let tab = Tab::with_url("https://example.com");
    let notification = trigger.handle_click("checkURL", Some(&tab)).await?.unwrap();

    assert_eq!(notification.kind, NotificationKind::Failure);
    assert_eq!(notification.message, "Classifier is not responding.");
    Ok(())
}
