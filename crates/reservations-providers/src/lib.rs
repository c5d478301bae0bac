//! reservations-providers: one adapter per reservation platform plus the
//! registry that picks between them.

use async_trait::async_trait;
use reservations_types::domain::reservation::{
    AvailabilityRequest, AvailabilityResponse, CancelReservationRequest, CancellationOutcome,
    CreateReservationRequest, Reservation, ReservationProviderConfig,
};
use reservations_types::domain::result::ProviderResult;
use reservations_types::domain::system::ReservationSystemType;
use reservations_types::ports::reservation_provider::{ProviderCapabilities, ReservationProvider};

pub mod deep_link;
pub mod opentable;
pub mod registry;
pub mod resy;
pub mod sevenrooms;
pub mod shared;

pub use deep_link::DeepLinkProvider;
pub use opentable::OpenTableProvider;
pub use registry::{BookingDecision, BookingStrategy, ProviderRegistry, ReservationInfo};
pub use resy::ResyProvider;
pub use sevenrooms::SevenRoomsProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    DeepLink,
    OpenTable,
    SevenRooms,
    Resy,
}

impl ProviderKind {
    /// Vendors without an API integration (or with none configured) get the
    /// deep-link fallback.
    pub fn for_system(system: Option<ReservationSystemType>) -> Self {
        match system {
            Some(ReservationSystemType::OpenTable) => Self::OpenTable,
            Some(ReservationSystemType::SevenRooms) => Self::SevenRooms,
            Some(ReservationSystemType::Resy) => Self::Resy,
            Some(ReservationSystemType::Website)
            | Some(ReservationSystemType::Phone)
            | Some(ReservationSystemType::None)
            | None => Self::DeepLink,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::DeepLink => DeepLinkProvider::NAME,
            Self::OpenTable => OpenTableProvider::NAME,
            Self::SevenRooms => SevenRoomsProvider::NAME,
            Self::Resy => ResyProvider::NAME,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Provider {
    DeepLink(DeepLinkProvider),
    OpenTable(OpenTableProvider),
    SevenRooms(SevenRoomsProvider),
    Resy(ResyProvider),
}

impl Provider {
    pub fn new(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::DeepLink => Self::DeepLink(DeepLinkProvider),
            ProviderKind::OpenTable => Self::OpenTable(OpenTableProvider),
            ProviderKind::SevenRooms => Self::SevenRooms(SevenRoomsProvider),
            ProviderKind::Resy => Self::Resy(ResyProvider),
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::DeepLink(_) => ProviderKind::DeepLink,
            Self::OpenTable(_) => ProviderKind::OpenTable,
            Self::SevenRooms(_) => ProviderKind::SevenRooms,
            Self::Resy(_) => ProviderKind::Resy,
        }
    }

    fn inner(&self) -> &dyn ReservationProvider {
        match self {
            Self::DeepLink(p) => p,
            Self::OpenTable(p) => p,
            Self::SevenRooms(p) => p,
            Self::Resy(p) => p,
        }
    }
}

#[async_trait]
impl ReservationProvider for Provider {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn capabilities(&self) -> ProviderCapabilities {
        self.inner().capabilities()
    }

    async fn get_availability(
        &self,
        request: &AvailabilityRequest,
        config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<AvailabilityResponse> {
        self.inner().get_availability(request, config).await
    }

    async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
        config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<Reservation> {
        self.inner().create_reservation(request, config).await
    }

    async fn cancel_reservation(
        &self,
        request: &CancelReservationRequest,
        config: Option<&ReservationProviderConfig>,
    ) -> ProviderResult<CancellationOutcome> {
        self.inner().cancel_reservation(request, config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_name_round_trip_through_provider() {
        for kind in [
            ProviderKind::DeepLink,
            ProviderKind::OpenTable,
            ProviderKind::SevenRooms,
            ProviderKind::Resy,
        ] {
            let provider = Provider::new(kind);
            assert_eq!(provider.kind(), kind);
            assert_eq!(provider.name(), kind.name());
        }
    }

    #[test]
    fn systems_without_integration_map_to_deep_link() {
        for system in [
            None,
            Some(ReservationSystemType::Website),
            Some(ReservationSystemType::Phone),
            Some(ReservationSystemType::None),
        ] {
            assert_eq!(ProviderKind::for_system(system), ProviderKind::DeepLink);
        }
        assert_eq!(
            ProviderKind::for_system(Some(ReservationSystemType::SevenRooms)),
            ProviderKind::SevenRooms
        );
    }
}
