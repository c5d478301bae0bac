///  To run :
///  cargo r --example client_example
use reservations_client::ReservationsClient;
use reservations_hex::application::reservation_service::ReservationService;
use reservations_hex::inbound::http::{HttpServer, HttpServerConfig};
use reservations_providers::ProviderRegistry;
use reservations_types::domain::reservation::{CreateReservationRequest, ReservationProviderConfig};
use reservations_types::domain::system::ReservationSystemType;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Start server on ephemeral port with a fresh registry.
    let port = find_free_port();
    let addr = format!("http://127.0.0.1:{port}/");

    let service = ReservationService::new(
        ProviderRegistry::new(),
        ReservationProviderConfig {
            sandbox: Some(true),
            ..Default::default()
        },
    );
    let server = HttpServer::new(
        service,
        HttpServerConfig {
            port: port.to_string(),
        },
    )
    .await?;

    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let client = ReservationsClient::new(&addr)?;
    let vendors = [
        (Some(ReservationSystemType::Resy), None),
        (
            Some(ReservationSystemType::Website),
            Some("https://example.com/book"),
        ),
        (None, None),
    ];

    for (system, link) in vendors {
        let decision = client.reservation_info(system, link).await?;
        println!(
            "system={:?} provider={} deep_link={} url={:?}",
            system, decision.provider_name, decision.use_deep_link, decision.deep_link_url
        );

        if decision.use_deep_link {
            continue;
        }

        // Direct path: the provider may still answer NOT_IMPLEMENTED.
        let result = client
            .create_reservation(
                system,
                CreateReservationRequest {
                    vendor_id: "vendor-1".into(),
                    user_id: "user-1".into(),
                    date: "2026-11-02".into(),
                    time: "19:30".into(),
                    party_size: 2,
                    guest_name: "Example".into(),
                    guest_email: "example@example.com".into(),
                    guest_phone: None,
                    special_requests: None,
                },
                None,
            )
            .await?;
        match result.into_result() {
            Ok(reservation) => println!("Booked id={}", reservation.id),
            Err(failure) => println!("Booking fell back to deep link: {failure}"),
        }
    }

    handle.abort();
    Ok(())
}
