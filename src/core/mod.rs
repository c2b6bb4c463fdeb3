pub mod client;
pub mod context_menu;
pub mod popup;

pub use crate::domain::messages::Messages;
pub use crate::domain::model::{
    Acknowledgement, ClassificationRequest, ClassificationResponse, MenuContext, MenuItem,
    Notification, NotificationKind, Prediction, RiskCategory, Tab,
};
pub use crate::domain::ports::{
    Classifier, ConfigProvider, MenuRegistry, Notifier, StatusPolicy, TabProvider,
};
pub use crate::utils::error::Result;
