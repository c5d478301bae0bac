pub mod reservation;
pub mod result;
pub mod system;
