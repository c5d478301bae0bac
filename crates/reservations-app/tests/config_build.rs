use reservations_hex::application::reservation_service::ReservationService;
use reservations_hex::config::Config;
use reservations_providers::ProviderRegistry;
use reservations_types::domain::system::ReservationSystemType;
use std::env;

#[tokio::test]
async fn builds_service_from_env() {
    env::set_var("SERVER_PORT", "4100");
    env::set_var("RESERVATIONS_SANDBOX", "true");
    env::set_var("RESERVATIONS_API_KEY", "env-key");

    let config = Config::from_env().expect("config");
    assert_eq!(config.server_port, "4100");
    assert!(config.provider_defaults.is_sandbox());
    assert_eq!(config.provider_defaults.api_key.as_deref(), Some("env-key"));

    // basic sanity: the service answers from the shared registry
    let svc = ReservationService::new(ProviderRegistry::new(), config.provider_defaults);
    assert!(svc.is_direct_booking_supported(Some(ReservationSystemType::Resy)));
    assert!(!svc.is_direct_booking_supported(Some(ReservationSystemType::Website)));
}
