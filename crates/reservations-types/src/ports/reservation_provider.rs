use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::reservation::{
    AvailabilityRequest, AvailabilityResponse, CancelReservationRequest, CancellationOutcome,
    CreateReservationRequest, Reservation, ReservationProviderConfig,
};
use crate::domain::result::ProviderResult;

/// Static capability flags of a provider. Never computed per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCapabilities {
    pub supports_real_time_availability: bool,
    pub supports_direct_booking: bool,
}

/// Booking operations against one reservation platform.
///
/// Expected failures resolve to a failed `ProviderResult`; implementations
/// must not return them by panicking.
#[async_trait]
pub trait ReservationProvider: Send + Sync + 'static {
    /// Stable identifier, stamped onto every response and reservation.
    fn name(&self) -> &'static str;

    fn capabilities(&self) -> ProviderCapabilities;

    fn supports_real_time_availability(&self) -> bool {
        self.capabilities().supports_real_time_availability
    }

    fn supports_direct_booking(&self) -> bool {
        self.capabilities().supports_direct_booking
    }

    async fn get_availability(
        &self,
        request: &AvailabilityRequest,
        config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<AvailabilityResponse>;

    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
        config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<Reservation>;

    async fn cancel_reservation(
        &self,
        request: &CancelReservationRequest,
        config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<CancellationOutcome>;
}
