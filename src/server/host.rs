//! Server host holding all service state
//!
//! The host is transport-agnostic: it owns the store, the contact desk and
//! the configuration, and exposures build their routers from it.

use crate::config::StorefrontConfig;
use crate::core::contact::ContactDesk;
use crate::core::service::OrderStore;
use crate::orders::handlers::AppState;
use std::sync::Arc;

/// Host context containing all service state
pub struct ServerHost {
    /// Validated configuration
    pub config: Arc<StorefrontConfig>,

    /// Order storage backend
    pub store: Arc<dyn OrderStore>,

    /// Contact-form intake
    pub contacts: Arc<ContactDesk>,
}

impl ServerHost {
    /// Build the host from builder components
    pub fn new(store: Arc<dyn OrderStore>, config: StorefrontConfig) -> Self {
        Self {
            config: Arc::new(config),
            store,
            contacts: Arc::new(ContactDesk::new()),
        }
    }

    /// Handler state derived from the host
    pub fn app_state(&self) -> AppState {
        AppState {
            store: self.store.clone(),
            contacts: self.contacts.clone(),
            branding: Arc::new(self.config.branding()),
            whatsapp_phone: Arc::from(self.config.whatsapp_phone.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryOrderStore;

    fn make_host() -> ServerHost {
        let config = StorefrontConfig {
            whatsapp_phone: "15550001111".to_string(),
            brand_name: "Acme".to_string(),
            ..StorefrontConfig::default()
        };
        ServerHost::new(Arc::new(InMemoryOrderStore::new()), config)
    }

    #[test]
    fn test_app_state_uses_config() {
        let state = make_host().app_state();
        assert_eq!(&*state.whatsapp_phone, "15550001111");
        assert_eq!(state.branding.brand_name, "Acme");
    }

    #[tokio::test]
    async fn test_app_state_shares_store() {
        let host = make_host();
        let state = host.app_state();
        assert_eq!(state.store.count().await.unwrap(), 0);
        assert!(Arc::ptr_eq(&state.contacts, &host.contacts));
    }
}
