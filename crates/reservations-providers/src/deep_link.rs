use async_trait::async_trait;
use reservations_types::domain::reservation::{
    AvailabilityRequest, AvailabilityResponse, CancelReservationRequest, CancellationOutcome,
    CreateReservationRequest, Reservation, ReservationProviderConfig,
};
use reservations_types::domain::result::ProviderResult;
use reservations_types::ports::reservation_provider::{ProviderCapabilities, ReservationProvider};

use crate::shared::deep_link_only;

/// Fallback for vendors without an API integration: every operation tells the
/// caller to redirect to the vendor's own booking page.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepLinkProvider;

impl DeepLinkProvider {
    pub const NAME: &'static str = "DeepLink";
}

#[async_trait]
impl ReservationProvider for DeepLinkProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            supports_real_time_availability: false,
            supports_direct_booking: false,
        }
    }

    async fn get_availability(
        &self,
        request: &AvailabilityRequest,
        _config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<AvailabilityResponse> {
        tracing::debug!(
            provider = Self::NAME,
            vendor_id = %request.vendor_id,
            "availability requested"
        );
        deep_link_only(Self::NAME, "get_availability")
    }

    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
        _config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<Reservation> {
        tracing::debug!(
            provider = Self::NAME,
            vendor_id = %request.vendor_id,
            "booking requested"
        );
        deep_link_only(Self::NAME, "create_reservation")
    }

    async fn cancel_reservation(
        &self,
        request: &CancelReservationRequest,
        _config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<CancellationOutcome> {
        tracing::debug!(
            provider = Self::NAME,
            vendor_id = %request.vendor_id,
            "cancellation requested"
        );
        deep_link_only(Self::NAME, "cancel_reservation")
    }
}
