use std::time::Duration;

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;
use reservations_types::domain::reservation::{
    AvailabilityRequest, AvailabilityResponse, CancelReservationRequest, CancellationOutcome,
    CreateReservationRequest, Reservation, ReservationProviderConfig,
};
use reservations_types::domain::result::ProviderResult;
use reservations_types::domain::system::ReservationSystemType;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct ReservationsClientBuilder {
    base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

#[derive(Clone)]
pub struct ReservationsClient {
    base: Url,
    client: reqwest::Client,
}

impl ReservationsClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<ReservationsClientBuilder> {
        let base = Url::parse(base_url).context("invalid base url")?;
        Ok(ReservationsClientBuilder {
            base,
            headers: HeaderMap::new(),
            timeout: None,
            client: None,
        })
    }

    fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base.join(path).context("failed to join url")
    }

    pub async fn reservation_info(
        &self,
        system: Option<ReservationSystemType>,
        link: Option<&str>,
    ) -> anyhow::Result<BookingDecision> {
        let mut url = self.url("reservations/info")?;
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(system) = system {
                pairs.append_pair("system", system.as_str());
            }
            if let Some(link) = link {
                pairs.append_pair("link", link);
            }
        }
        let res = self.client.get(url).send().await?.error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn provider_summary(
        &self,
        system: ReservationSystemType,
    ) -> anyhow::Result<ProviderSummary> {
        let res = self
            .client
            .get(self.url(&format!("reservations/providers/{system}"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn get_availability(
        &self,
        system: Option<ReservationSystemType>,
        request: AvailabilityRequest,
        config: Option<ReservationProviderConfig>,
    ) -> anyhow::Result<ProviderResult<AvailabilityResponse>> {
        self.call("reservations/availability", system, request, config)
            .await
    }

    pub async fn create_reservation(
        &self,
        system: Option<ReservationSystemType>,
        request: CreateReservationRequest,
        config: Option<ReservationProviderConfig>,
    ) -> anyhow::Result<ProviderResult<Reservation>> {
        self.call("reservations", system, request, config).await
    }

    pub async fn cancel_reservation(
        &self,
        system: Option<ReservationSystemType>,
        request: CancelReservationRequest,
        config: Option<ReservationProviderConfig>,
    ) -> anyhow::Result<ProviderResult<CancellationOutcome>> {
        self.call("reservations/cancel", system, request, config)
            .await
    }

    async fn call<Req, Res>(
        &self,
        path: &str,
        system: Option<ReservationSystemType>,
        request: Req,
        config: Option<ReservationProviderConfig>,
    ) -> anyhow::Result<ProviderResult<Res>>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let res = self
            .client
            .post(self.url(path)?)
            .json(&ProviderCall {
                system,
                request,
                config,
            })
            .send()
            .await?
            .error_for_status()?;
        let envelope: ProviderResult<Res> = res.json().await?;
        if let Some(code) = envelope.error_code() {
            tracing::debug!(path, error_code = %code, "provider call failed");
        }
        Ok(envelope)
    }
}

impl ReservationsClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("invalid header value")?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> anyhow::Result<ReservationsClient> {
        if let Some(client) = self.client {
            return Ok(ReservationsClient {
                base: self.base,
                client,
            });
        }

        let mut builder = reqwest::Client::builder();
        if !self.headers.is_empty() {
            builder = builder.default_headers(self.headers);
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(ReservationsClient {
            base: self.base,
            client,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDecision {
    pub provider_name: String,
    pub use_deep_link: bool,
    pub deep_link_url: Option<String>,
    pub supports_direct_booking: bool,
    pub supports_availability: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSummary {
    pub name: String,
    pub supports_real_time_availability: bool,
    pub supports_direct_booking: bool,
    pub direct_booking_supported: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ProviderCall<T> {
    system: Option<ReservationSystemType>,
    request: T,
    config: Option<ReservationProviderConfig>,
}
