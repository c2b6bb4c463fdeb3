use crate::core::{MenuItem, MenuRegistry, Tab, TabProvider};
use crate::utils::error::{ClassifierError, Result};
use async_trait::async_trait;

/// A host whose active tab is fixed up front, e.g. from a command-line flag.
#[derive(Debug, Clone, Default)]
pub struct StaticTabProvider {
    tab: Option<Tab>,
}

impl StaticTabProvider {
    pub fn new(tab: Option<Tab>) -> Self {
        Self { tab }
    }

    pub fn tab(&self) -> Option<&Tab> {
        self.tab.as_ref()
    }
}

#[async_trait]
impl TabProvider for StaticTabProvider {
    async fn active_tab(&self) -> Result<Option<Tab>> {
        Ok(self.tab.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryMenus {
    items: Vec<MenuItem>,
}

impl InMemoryMenus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl MenuRegistry for InMemoryMenus {
    fn create(&mut self, item: MenuItem) -> Result<()> {
        if self.find(&item.id).is_some() {
            return Err(ClassifierError::Config {
                message: format!("menu entry '{}' is already registered", item.id),
            });
        }
        self.items.push(item);
        Ok(())
    }
}
