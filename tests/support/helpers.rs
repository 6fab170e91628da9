// tests/support/helpers.rs
use super::mocks::FixedClock;
use std::sync::Arc;

use inscription_core::application::ports::time::Clock;
use inscription_core::application::services::ApplicationServices;
use inscription_core::domain::registration::RegistrationRepository;
use inscription_core::infrastructure::repositories::InMemoryRegistrationRepository;
use inscription_core::presentation::http::{routes::build_router, state::HttpState};

pub fn build_test_state() -> HttpState {
    let registration_repo: Arc<dyn RegistrationRepository> =
        Arc::new(InMemoryRegistrationRepository::new());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::default());

    let services = Arc::new(ApplicationServices::new(registration_repo, clock));
    HttpState { services }
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state())
}
