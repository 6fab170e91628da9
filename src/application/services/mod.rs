// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::registrations::RegistrationCommandService,
        ports::time::Clock,
        queries::registrations::RegistrationQueryService,
    },
    domain::registration::RegistrationRepository,
};

pub struct ApplicationServices {
    pub registration_commands: Arc<RegistrationCommandService>,
    pub registration_queries: Arc<RegistrationQueryService>,
}

impl ApplicationServices {
    pub fn new(registration_repo: Arc<dyn RegistrationRepository>, clock: Arc<dyn Clock>) -> Self {
        let registration_commands = Arc::new(RegistrationCommandService::new(
            Arc::clone(&registration_repo),
            Arc::clone(&clock),
        ));
        let registration_queries =
            Arc::new(RegistrationQueryService::new(Arc::clone(&registration_repo)));

        Self {
            registration_commands,
            registration_queries,
        }
    }
}
