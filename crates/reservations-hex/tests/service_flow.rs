use reservations_hex::application::reservation_service::ReservationService;
use reservations_providers::{BookingStrategy, ProviderRegistry};
use reservations_types::domain::reservation::{
    AvailabilityRequest, CancelReservationRequest, CreateReservationRequest,
    ReservationProviderConfig,
};
use reservations_types::domain::result::ProviderErrorCode;
use reservations_types::domain::system::ReservationSystemType;

// A booking flow decides its strategy once, then follows it.
#[tokio::test]
async fn booking_flow_follows_decision() {
    let svc = ReservationService::new(ProviderRegistry::new(), ReservationProviderConfig::default());

    let website = svc.reservation_info(
        Some(ReservationSystemType::Website),
        Some("https://example.com/book"),
    );
    assert_eq!(website.decision.strategy(), BookingStrategy::DeepLink);
    assert_eq!(
        website.decision.deep_link_url.as_deref(),
        Some("https://example.com/book")
    );

    let sevenrooms = svc.reservation_info(Some(ReservationSystemType::SevenRooms), None);
    assert_eq!(sevenrooms.decision.strategy(), BookingStrategy::DirectBooking);

    let availability = svc
        .get_availability(
            Some(ReservationSystemType::SevenRooms),
            AvailabilityRequest {
                vendor_id: "vendor-7".into(),
                date: "2026-12-24".into(),
                party_size: 6,
                time: Some("20:00".into()),
            },
            Some(ReservationProviderConfig {
                restaurant_id: Some("sr-1".into()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
    // Direct path chosen, but the adapter is not wired yet: fall back to the link.
    assert_eq!(
        availability.error_code(),
        Some(&ProviderErrorCode::NotImplemented)
    );

    let created = svc
        .create_reservation(
            Some(ReservationSystemType::SevenRooms),
            CreateReservationRequest {
                vendor_id: "vendor-7".into(),
                user_id: "user-9".into(),
                date: "2026-12-24".into(),
                time: "20:00".into(),
                party_size: 6,
                guest_name: "Eve".into(),
                guest_email: "eve@example.com".into(),
                guest_phone: None,
                special_requests: Some("birthday".into()),
            },
            None,
        )
        .await
        .unwrap();
    assert!(created.into_result().is_err());

    let cancelled = svc
        .cancel_reservation(
            None,
            CancelReservationRequest {
                reservation_id: uuid::Uuid::new_v4(),
                vendor_id: "vendor-7".into(),
                reason: None,
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(cancelled.error_code(), Some(&ProviderErrorCode::DeepLinkOnly));

    assert!(svc.is_direct_booking_supported(Some(ReservationSystemType::SevenRooms)));
    assert!(!svc.is_direct_booking_supported(None));
    assert_eq!(svc.registry().len(), 2);
}
