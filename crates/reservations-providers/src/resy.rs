use async_trait::async_trait;
use reservations_types::domain::reservation::{
    AvailabilityRequest, AvailabilityResponse, CancelReservationRequest, CancellationOutcome,
    CreateReservationRequest, Reservation, ReservationProviderConfig,
};
use reservations_types::domain::result::ProviderResult;
use reservations_types::ports::reservation_provider::{ProviderCapabilities, ReservationProvider};

use crate::shared::not_implemented;

/// Resy adapter.
///
/// Advertises availability and direct booking, yet every operation still
/// answers `NOT_IMPLEMENTED`. Callers that trust the flags must handle that
/// code and fall back to the deep link.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResyProvider;

impl ResyProvider {
    pub const NAME: &'static str = "Resy";
}

#[async_trait]
impl ReservationProvider for ResyProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            supports_real_time_availability: true,
            supports_direct_booking: true,
        }
    }

    async fn get_availability(
        &self,
        request: &AvailabilityRequest,
        _config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<AvailabilityResponse> {
        tracing::debug!(provider = Self::NAME, vendor_id = %request.vendor_id, "availability requested");
        not_implemented(Self::NAME, "get_availability")
    }

    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
        _config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<Reservation> {
        tracing::debug!(provider = Self::NAME, vendor_id = %request.vendor_id, "booking requested");
        not_implemented(Self::NAME, "create_reservation")
    }

    async fn cancel_reservation(
        &self,
        request: &CancelReservationRequest,
        _config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<CancellationOutcome> {
        tracing::debug!(
            provider = Self::NAME,
            vendor_id = %request.vendor_id,
            reservation_id = %request.reservation_id,
            "cancellation requested"
        );
        not_implemented(Self::NAME, "cancel_reservation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservations_types::domain::result::ProviderErrorCode;

    #[tokio::test]
    async fn advertised_booking_still_not_implemented() {
        let provider = ResyProvider;
        assert!(provider.supports_direct_booking());
        assert!(provider.supports_real_time_availability());

        let request = CreateReservationRequest {
            vendor_id: "vendor-1".into(),
            user_id: "user-1".into(),
            date: "2026-11-02".into(),
            time: "19:30".into(),
            party_size: 2,
            guest_name: "Alice".into(),
            guest_email: "alice@example.com".into(),
            guest_phone: None,
            special_requests: None,
        };
        let result = provider.create_reservation(&request, None).await;
        assert!(!result.is_success());
        assert_eq!(result.error_code(), Some(&ProviderErrorCode::NotImplemented));
    }
}
