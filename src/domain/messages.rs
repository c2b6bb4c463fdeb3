use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

pub const MENU_ITEM_ID: &str = "checkURL";
pub const MENU_ITEM_TITLE: &str = "Check Current Tab URL for Fraud";

/// User-facing strings. Each trigger keeps its own wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub menu_no_url: String,
    pub menu_request_failed: String,
    pub popup_url_unavailable: String,
    pub popup_no_url: String,
    pub popup_request_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            menu_no_url: "No valid URL found for this tab.".to_string(),
            menu_request_failed: "An error occurred while fetching the prediction.".to_string(),
            popup_url_unavailable: "Unable to detect URL.".to_string(),
            popup_no_url: "No URL available to check.".to_string(),
            popup_request_failed: "Failed to fetch prediction.".to_string(),
        }
    }
}

impl Validate for Messages {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("messages.menu_no_url", &self.menu_no_url)?;
        validate_non_empty_string("messages.menu_request_failed", &self.menu_request_failed)?;
        validate_non_empty_string("messages.popup_url_unavailable", &self.popup_url_unavailable)?;
        validate_non_empty_string("messages.popup_no_url", &self.popup_no_url)?;
        validate_non_empty_string("messages.popup_request_failed", &self.popup_request_failed)?;
        Ok(())
    }
}
