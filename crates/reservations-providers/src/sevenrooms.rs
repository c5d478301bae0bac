use async_trait::async_trait;
use reservations_types::domain::reservation::{
    AvailabilityRequest, AvailabilityResponse, CancelReservationRequest, CancellationOutcome,
    CreateReservationRequest, Reservation, ReservationProviderConfig,
};
use reservations_types::domain::result::ProviderResult;
use reservations_types::ports::reservation_provider::{ProviderCapabilities, ReservationProvider};

use crate::shared::not_implemented;

/// SevenRooms adapter. No operation is wired to the platform yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct SevenRoomsProvider;

impl SevenRoomsProvider {
    pub const NAME: &'static str = "SevenRooms";
}

#[async_trait]
impl ReservationProvider for SevenRoomsProvider {
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
            restaurant_id = config.and_then(|c| c.restaurant_id.as_deref()).unwrap_or("-"),
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
            restaurant_id = config.and_then(|c| c.restaurant_id.as_deref()).unwrap_or("-"),
            "booking requested"
        );
        not_implemented(Self::NAME, "create_reservation")
    }

    async fn cancel_reservation(
        &self,
        request: &CancelReservationRequest,
        config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<CancellationOutcome> {
        tracing::debug!(
            provider = Self::NAME,
            vendor_id = %request.vendor_id,
            restaurant_id = config.and_then(|c| c.restaurant_id.as_deref()).unwrap_or("-"),
            "cancellation requested"
        );
        not_implemented(Self::NAME, "cancel_reservation")
    }
}
