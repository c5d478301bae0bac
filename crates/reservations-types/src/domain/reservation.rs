use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl ReservationStatus {
    /// Cancelled, completed and no-show bookings never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed | Self::NoShow)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_size: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub vendor_id: String,
    pub date: String,
    pub party_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl AvailabilityRequest {
    pub fn validate(&self) -> anyhow::Result<()> {
        require_non_empty("vendorId", &self.vendor_id)?;
        check_date(&self.date)?;
        check_party_size(self.party_size)?;
        if let Some(time) = &self.time {
            check_time(time)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub date: String,
    pub slots: Vec<TimeSlot>,
    pub provider_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub vendor_id: String,
    pub user_id: String,
    pub date: String,
    pub time: String,
    pub party_size: u32,
    pub guest_name: String,
    pub guest_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl CreateReservationRequest {
    pub fn validate(&self) -> anyhow::Result<()> {
        require_non_empty("vendorId", &self.vendor_id)?;
        require_non_empty("userId", &self.user_id)?;
        check_date(&self.date)?;
        check_time(&self.time)?;
        check_party_size(self.party_size)?;
        require_non_empty("guestName", &self.guest_name)?;
        if !self.guest_email.contains('@') {
            anyhow::bail!("invalid guestEmail");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationRequest {
    pub reservation_id: Uuid,
    pub vendor_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CancelReservationRequest {
    pub fn validate(&self) -> anyhow::Result<()> {
        require_non_empty("vendorId", &self.vendor_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CancellationOutcome {
    pub cancelled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub vendor_id: String,
    pub user_id: String,
    pub date: String,
    pub time: String,
    pub party_size: u32,
    pub guest_name: String,
    pub guest_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_reservation_id: Option<String>,
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_code: Option<String>,
    pub provider_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Builds a pending booking record for a request accepted by `provider_name`.
    pub fn pending(
        request: CreateReservationRequest,
        provider_name: &str,
        provider_reservation_id: Option<String>,
        confirmation_code: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            vendor_id: request.vendor_id,
            user_id: request.user_id,
            date: request.date,
            time: request.time,
            party_size: request.party_size,
            guest_name: request.guest_name,
            guest_email: request.guest_email,
            guest_phone: request.guest_phone,
            special_requests: request.special_requests,
            provider_reservation_id,
            status: ReservationStatus::Pending,
            confirmation_code,
            provider_name: provider_name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_status(&mut self, status: ReservationStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

/// Per-call provider credentials. Never persisted.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationProviderConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<bool>,
}

impl ReservationProviderConfig {
    /// Fields set on `overrides` win; the rest fall back to `self`.
    pub fn merged_with(&self, overrides: &ReservationProviderConfig) -> ReservationProviderConfig {
        ReservationProviderConfig {
            api_key: overrides.api_key.clone().or_else(|| self.api_key.clone()),
            restaurant_id: overrides
                .restaurant_id
                .clone()
                .or_else(|| self.restaurant_id.clone()),
            webhook_secret: overrides
                .webhook_secret
                .clone()
                .or_else(|| self.webhook_secret.clone()),
            sandbox: overrides.sandbox.or(self.sandbox),
        }
    }

    pub fn is_sandbox(&self) -> bool {
        self.sandbox.unwrap_or(false)
    }
}

impl std::fmt::Debug for ReservationProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("restaurant_id", &self.restaurant_id)
            .field(
                "webhook_secret",
                &self.webhook_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("sandbox", &self.sandbox)
            .finish()
    }
}

fn require_non_empty(field: &str, value: &str) -> anyhow::Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{field} empty");
    }
    Ok(())
}

fn check_date(date: &str) -> anyhow::Result<()> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| anyhow::anyhow!("invalid date {date:?}, expected YYYY-MM-DD"))?;
    Ok(())
}

fn check_time(time: &str) -> anyhow::Result<()> {
    NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|_| anyhow::anyhow!("invalid time {time:?}, expected HH:MM"))?;
    Ok(())
}

fn check_party_size(party_size: u32) -> anyhow::Result<()> {
    if party_size == 0 {
        anyhow::bail!("partySize must be > 0");
    }
    Ok(())
}
