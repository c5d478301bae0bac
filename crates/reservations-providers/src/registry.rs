use dashmap::DashMap;
use reservations_types::domain::system::ReservationSystemType;
use reservations_types::ports::reservation_provider::ReservationProvider;
use serde::Serialize;
use std::sync::Arc;

use crate::{Provider, ProviderKind};

/// How a booking flow proceeds once the vendor's system is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStrategy {
    DeepLink,
    DirectBooking,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDecision {
    pub provider_name: String,
    pub use_deep_link: bool,
    pub deep_link_url: Option<String>,
    pub supports_direct_booking: bool,
    pub supports_availability: bool,
}

impl BookingDecision {
    pub fn strategy(&self) -> BookingStrategy {
        if self.use_deep_link {
            BookingStrategy::DeepLink
        } else {
            BookingStrategy::DirectBooking
        }
    }
}

/// The decision bundle plus the provider handle it was derived from.
#[derive(Debug, Clone)]
pub struct ReservationInfo {
    pub provider: Arc<Provider>,
    pub decision: BookingDecision,
}

/// Lazily built, one-per-kind provider instances.
///
/// Construct once at startup and share; clones point at the same instances.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    instances: Arc<DashMap<ProviderKind, Arc<Provider>>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provider(&self, system: Option<ReservationSystemType>) -> Arc<Provider> {
        let kind = ProviderKind::for_system(system);
        self.instances
            .entry(kind)
            .or_insert_with(|| {
                tracing::debug!(provider = kind.name(), "creating reservation provider");
                Arc::new(Provider::new(kind))
            })
            .clone()
    }

    pub fn reservation_info(
        &self,
        system: Option<ReservationSystemType>,
        link: Option<&str>,
    ) -> ReservationInfo {
        let provider = self.provider(system);
        let explicit_external = matches!(
            system,
            Some(ReservationSystemType::Website) | Some(ReservationSystemType::Phone)
        );
        let use_deep_link = !provider.supports_direct_booking() || explicit_external;
        let deep_link_url = match link {
            Some(url) if use_deep_link && !url.trim().is_empty() => Some(url.to_string()),
            _ => None,
        };
        let decision = BookingDecision {
            provider_name: provider.name().to_string(),
            use_deep_link,
            deep_link_url,
            supports_direct_booking: provider.supports_direct_booking() && !use_deep_link,
            supports_availability: provider.supports_real_time_availability() && !use_deep_link,
        };
        ReservationInfo { provider, decision }
    }

    pub fn is_direct_booking_supported(&self, system: Option<ReservationSystemType>) -> bool {
        match system {
            None
            | Some(ReservationSystemType::Website)
            | Some(ReservationSystemType::Phone)
            | Some(ReservationSystemType::None) => false,
            Some(_) => self.provider(system).supports_direct_booking(),
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_are_created_lazily() {
        let registry = ProviderRegistry::new();
        assert!(registry.is_empty());
        registry.provider(Some(ReservationSystemType::Resy));
        registry.provider(Some(ReservationSystemType::Resy));
        assert_eq!(registry.len(), 1);
        registry.provider(None);
        registry.provider(Some(ReservationSystemType::Phone));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn empty_link_is_treated_as_absent() {
        let registry = ProviderRegistry::new();
        let info = registry.reservation_info(Some(ReservationSystemType::Website), Some(""));
        assert!(info.decision.use_deep_link);
        assert_eq!(info.decision.deep_link_url, None);

        let info = registry.reservation_info(Some(ReservationSystemType::Phone), Some("  "));
        assert!(info.decision.use_deep_link);
        assert_eq!(info.decision.deep_link_url, None);
    }

    #[test]
    fn direct_booking_drops_the_link() {
        let registry = ProviderRegistry::new();
        let info = registry.reservation_info(
            Some(ReservationSystemType::OpenTable),
            Some("https://example.com/book"),
        );
        assert_eq!(info.decision.strategy(), BookingStrategy::DirectBooking);
        assert_eq!(info.decision.deep_link_url, None);
        assert_eq!(info.provider.kind(), ProviderKind::OpenTable);
    }
}
