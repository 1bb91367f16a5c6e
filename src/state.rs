use std::sync::Arc;
use std::time::Duration;

use crate::db::store::AccountStore;
use crate::services::{AuthenticationService, ListingService, ProvisioningService, RegistrationService};
use crate::utils::password::CredentialHasher;

/// Everything a request handler can reach. Built once, shared by all workers.
#[derive(Clone)]
pub struct AppState {
    pub registration: RegistrationService,
    pub authentication: AuthenticationService,
    pub listing: ListingService,
    pub provisioning: ProvisioningService,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>, hasher: CredentialHasher, store_timeout: Duration) -> Self {
        AppState {
            registration: RegistrationService::new(Arc::clone(&store), hasher.clone(), store_timeout),
            authentication: AuthenticationService::new(Arc::clone(&store), hasher.clone(), store_timeout),
            listing: ListingService::new(Arc::clone(&store), store_timeout),
            provisioning: ProvisioningService::new(store, hasher, store_timeout),
        }
    }
}
