use crate::errors::AppError;
use reservations_providers::{BookingDecision, ProviderRegistry, ReservationInfo};
use reservations_types::domain::reservation::{
    AvailabilityRequest, AvailabilityResponse, CancelReservationRequest, CancellationOutcome,
    CreateReservationRequest, Reservation, ReservationProviderConfig,
};
use reservations_types::domain::result::ProviderResult;
use reservations_types::domain::system::ReservationSystemType;
use reservations_types::ports::reservation_provider::{ProviderCapabilities, ReservationProvider};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSummary {
    pub name: String,
    #[serde(flatten)]
    pub capabilities: ProviderCapabilities,
    pub direct_booking_supported: bool,
}

pub struct ReservationService {
    registry: ProviderRegistry,
    defaults: ReservationProviderConfig,
}

impl ReservationService {
    pub fn new(registry: ProviderRegistry, defaults: ReservationProviderConfig) -> Self {
        Self { registry, defaults }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn reservation_info(
        &self,
        system: Option<ReservationSystemType>,
        link: Option<&str>,
    ) -> ReservationInfo {
        self.registry.reservation_info(system, link)
    }

    pub fn booking_decision(
        &self,
        system: Option<ReservationSystemType>,
        link: Option<&str>,
    ) -> BookingDecision {
        self.reservation_info(system, link).decision
    }

    pub fn is_direct_booking_supported(&self, system: Option<ReservationSystemType>) -> bool {
        self.registry.is_direct_booking_supported(system)
    }

    pub fn provider_summary(&self, system: Option<ReservationSystemType>) -> ProviderSummary {
        let provider = self.registry.provider(system);
        ProviderSummary {
            name: provider.name().to_string(),
            capabilities: provider.capabilities(),
            direct_booking_supported: self.registry.is_direct_booking_supported(system),
        }
    }

    pub async fn get_availability(
        &self,
        system: Option<ReservationSystemType>,
        request: AvailabilityRequest,
        overrides: Option<ReservationProviderConfig>,
    ) -> Result<ProviderResult<AvailabilityResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let provider = self.registry.provider(system);
        let config = self.effective_config(overrides.as_ref());
        let result = provider.get_availability(&request, Some(&config)).await;
        log_outcome(provider.name(), "get_availability", &result);
        Ok(result)
    }

    pub async fn create_reservation(
        &self,
        system: Option<ReservationSystemType>,
        request: CreateReservationRequest,
        overrides: Option<ReservationProviderConfig>,
    ) -> Result<ProviderResult<Reservation>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let provider = self.registry.provider(system);
        let config = self.effective_config(overrides.as_ref());
        let result = provider.create_reservation(&request, Some(&config)).await;
        log_outcome(provider.name(), "create_reservation", &result);
        Ok(result)
    }

    pub async fn cancel_reservation(
        &self,
        system: Option<ReservationSystemType>,
        request: CancelReservationRequest,
        overrides: Option<ReservationProviderConfig>,
    ) -> Result<ProviderResult<CancellationOutcome>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let provider = self.registry.provider(system);
        let config = self.effective_config(overrides.as_ref());
        let result = provider.cancel_reservation(&request, Some(&config)).await;
        log_outcome(provider.name(), "cancel_reservation", &result);
        Ok(result)
    }

    fn effective_config(
        &self,
        overrides: Option<&ReservationProviderConfig>,
    ) -> ReservationProviderConfig {
        match overrides {
            Some(o) => self.defaults.merged_with(o),
            None => self.defaults.clone(),
        }
    }
}

fn log_outcome<T>(provider: &str, operation: &str, result: &ProviderResult<T>) {
    if result.is_success() {
        tracing::info!(provider, operation, "provider call succeeded");
    } else {
        tracing::info!(
            provider,
            operation,
            error_code = result.error_code().map(|c| c.as_str()).unwrap_or("UNKNOWN"),
            "provider call failed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservations_types::domain::result::ProviderErrorCode;

    fn service() -> ReservationService {
        ReservationService::new(ProviderRegistry::new(), ReservationProviderConfig::default())
    }

    fn booking() -> CreateReservationRequest {
        CreateReservationRequest {
            vendor_id: "vendor-1".into(),
            user_id: "user-1".into(),
            date: "2026-11-02".into(),
            time: "19:30".into(),
            party_size: 2,
            guest_name: "Bob".into(),
            guest_email: "bob@example.com".into(),
            guest_phone: None,
            special_requests: None,
        }
    }

    #[tokio::test]
    async fn validation_errors_propagate() {
        let svc = service();
        let mut bad = booking();
        bad.party_size = 0;
        let res = svc
            .create_reservation(Some(ReservationSystemType::Resy), bad, None)
            .await;
        assert!(matches!(res, Err(AppError::BadRequest(_))));

        let res = svc
            .get_availability(
                None,
                AvailabilityRequest {
                    vendor_id: "".into(),
                    date: "2026-11-02".into(),
                    party_size: 2,
                    time: None,
                },
                None,
            )
            .await;
        assert!(matches!(res, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn provider_failures_come_back_as_envelopes() {
        let svc = service();
        let res = svc
            .create_reservation(Some(ReservationSystemType::Website), booking(), None)
            .await
            .unwrap();
        assert_eq!(res.error_code(), Some(&ProviderErrorCode::DeepLinkOnly));

        let res = svc
            .create_reservation(Some(ReservationSystemType::OpenTable), booking(), None)
            .await
            .unwrap();
        assert_eq!(res.error_code(), Some(&ProviderErrorCode::NotImplemented));
    }

    #[test]
    fn overrides_win_over_defaults() {
        let svc = ReservationService::new(
            ProviderRegistry::new(),
            ReservationProviderConfig {
                api_key: Some("default-key".into()),
                sandbox: Some(false),
                ..Default::default()
            },
        );
        let merged = svc.effective_config(Some(&ReservationProviderConfig {
            sandbox: Some(true),
            ..Default::default()
        }));
        assert!(merged.is_sandbox());
        assert_eq!(merged.api_key.as_deref(), Some("default-key"));
        assert_eq!(svc.effective_config(None).sandbox, Some(false));
    }

    #[test]
    fn summary_reports_flags() {
        let svc = service();
        let resy = svc.provider_summary(Some(ReservationSystemType::Resy));
        assert_eq!(resy.name, "Resy");
        assert!(resy.capabilities.supports_direct_booking);
        assert!(resy.direct_booking_supported);

        let phone = svc.provider_summary(Some(ReservationSystemType::Phone));
        assert_eq!(phone.name, "DeepLink");
        assert!(!phone.direct_booking_supported);
    }
}
