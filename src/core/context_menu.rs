use crate::core::{
    Classifier, ClassificationRequest, ClassificationResponse, MenuContext, MenuItem,
    MenuRegistry, Messages, Notification, NotificationKind, Notifier, StatusPolicy, Tab,
};
use crate::domain::messages::{MENU_ITEM_ID, MENU_ITEM_TITLE};
use crate::utils::error::Result;

/// Right-click entry that classifies the tab it was invoked on.
pub struct ContextMenuTrigger<C: Classifier, N: Notifier> {
    classifier: C,
    notifier: N,
    messages: Messages,
}

impl<C: Classifier, N: Notifier> ContextMenuTrigger<C, N> {
    pub fn new(classifier: C, notifier: N, messages: Messages) -> Self {
        Self {
            classifier,
            notifier,
            messages,
        }
    }

    pub fn menu_item() -> MenuItem {
        MenuItem {
            id: MENU_ITEM_ID.to_string(),
            title: MENU_ITEM_TITLE.to_string(),
            contexts: vec![MenuContext::All],
        }
    }

    /// Creates the menu entry. Call once during initialisation.
    pub fn register<R: MenuRegistry>(&self, registry: &mut R) -> Result<()> {
        let item = Self::menu_item();
        tracing::debug!("Registering context menu entry '{}'", item.id);
        registry.create(item)
    }

    /// Handles a menu click. Clicks on other entries are ignored and return `None`.
    pub async fn handle_click(
        &self,
        menu_item_id: &str,
        tab: Option<&Tab>,
    ) -> Result<Option<Notification>> {
        if menu_item_id != MENU_ITEM_ID {
            tracing::debug!("Ignoring click on menu entry '{}'", menu_item_id);
            return Ok(None);
        }

        let notification = self.classify_tab(tab).await;
        let ack = self.notifier.notify(&notification).await?;
        tracing::debug!("Notification {:?} -> {:?}", notification.kind, ack);

        Ok(Some(notification))
    }

    async fn classify_tab(&self, tab: Option<&Tab>) -> Notification {
        let Some(url) = tab.and_then(Tab::url) else {
            return Notification::new(NotificationKind::NoUrl, &self.messages.menu_no_url);
        };

        let request = ClassificationRequest::new(url);
        match self
            .classifier
            .classify(&request, StatusPolicy::ReadBody)
            .await
        {
            Ok(ClassificationResponse::Prediction(prediction)) => {
                tracing::info!("Prediction for {}: {}", url, prediction.label);
                Notification::new(NotificationKind::Prediction, prediction.label)
            }
            Ok(ClassificationResponse::ServiceError(message)) => {
                tracing::info!("Prediction service reported an error for {}: {}", url, message);
                Notification::new(NotificationKind::ServiceError, message)
            }
            Err(e) => {
                tracing::error!("❌ Prediction request for {} failed: {}", url, e);
                Notification::new(NotificationKind::Failure, &self.messages.menu_request_failed)
            }
        }
    }
}
