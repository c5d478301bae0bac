use async_trait::async_trait;
use reservations_types::domain::reservation::{
    AvailabilityRequest, AvailabilityResponse, CancelReservationRequest, CancellationOutcome,
    CreateReservationRequest, Reservation, ReservationProviderConfig,
};
use reservations_types::domain::result::ProviderResult;
use reservations_types::ports::reservation_provider::{ProviderCapabilities, ReservationProvider};

use crate::shared::not_implemented;

/// OpenTable partner API adapter. No operation is wired to the platform yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenTableProvider;

impl OpenTableProvider {
    pub const NAME: &'static str = "OpenTable";
}

#[async_trait]
impl ReservationProvider for OpenTableProvider {
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
        config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<AvailabilityResponse> {
        tracing::debug!(
            provider = Self::NAME,
            vendor_id = %request.vendor_id,
            sandbox = config.is_some_and(ReservationProviderConfig::is_sandbox),
            "availability requested"
        );
        not_implemented(Self::NAME, "get_availability")
    }

    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
        config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<Reservation> {
        tracing::debug!(
            provider = Self::NAME,
            vendor_id = %request.vendor_id,
            sandbox = config.is_some_and(ReservationProviderConfig::is_sandbox),
            "booking requested"
        );
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
