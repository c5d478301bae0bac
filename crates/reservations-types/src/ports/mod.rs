pub mod reservation_provider;
