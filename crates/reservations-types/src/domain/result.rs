//! The uniform envelope every provider operation resolves to.
//!
//! A result is either a success carrying `data`, or a failure carrying an
//! `error` message and an optional `errorCode`. No other combination can be
//! built or deserialized.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderErrorCode {
    /// Operation not built for this provider yet; fall back to the deep link.
    NotImplemented,
    /// Provider cannot book in-app; the caller must redirect.
    DeepLinkOnly,
    /// Code reported by a third-party platform.
    Provider(String),
}

impl ProviderErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::DeepLinkOnly => "DEEP_LINK_ONLY",
            Self::Provider(code) => code,
        }
    }
}

impl From<String> for ProviderErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "NOT_IMPLEMENTED" => Self::NotImplemented,
            "DEEP_LINK_ONLY" => Self::DeepLinkOnly,
            _ => Self::Provider(code),
        }
    }
}

impl From<ProviderErrorCode> for String {
    fn from(code: ProviderErrorCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for ProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResult<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<ProviderErrorCode>,
}

impl<T> ProviderResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            error_code: None,
        }
    }

    pub fn fail(code: ProviderErrorCode, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            error_code: Some(code),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn error_code(&self) -> Option<&ProviderErrorCode> {
        self.error_code.as_ref()
    }

    pub fn into_result(self) -> Result<T, ProviderFailure> {
        match self.data {
            Some(data) if self.success => Ok(data),
            _ => Err(ProviderFailure {
                code: self.error_code,
                message: self.error.unwrap_or_default(),
            }),
        }
    }
}

/// A failed envelope lifted into a `Result` error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("provider error{}: {message}", .code.as_ref().map(|c| format!(" [{c}]")).unwrap_or_default())]
pub struct ProviderFailure {
    pub code: Option<ProviderErrorCode>,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProviderResult<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
    error_code: Option<ProviderErrorCode>,
}

impl<'de, T> Deserialize<'de> for ProviderResult<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawProviderResult::<T>::deserialize(deserializer)?;
        match (raw.success, raw.data, raw.error) {
            (true, Some(data), None) if raw.error_code.is_none() => Ok(Self::ok(data)),
            (false, None, Some(error)) => Ok(Self {
                success: false,
                data: None,
                error: Some(error),
                error_code: raw.error_code,
            }),
            _ => Err(serde::de::Error::custom(
                "success requires data without error; failure requires error without data",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let result = ProviderResult::ok(42u32);
        assert!(result.is_success());
        assert_eq!(result.data(), Some(&42));
        assert!(result.error().is_none());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "success": true, "data": 42 })
        );
    }

    #[test]
    fn failure_envelope_shape() {
        let result: ProviderResult<u32> =
            ProviderResult::fail(ProviderErrorCode::DeepLinkOnly, "redirect instead");
        assert!(!result.is_success());
        assert!(result.data().is_none());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "success": false, "error": "redirect instead", "errorCode": "DEEP_LINK_ONLY" })
        );

        let failure = result.into_result().unwrap_err();
        assert_eq!(failure.code, Some(ProviderErrorCode::DeepLinkOnly));
        assert_eq!(
            failure.to_string(),
            "provider error [DEEP_LINK_ONLY]: redirect instead"
        );
    }

    #[test]
    fn deserialize_rejects_broken_invariant() {
        let both: Result<ProviderResult<u32>, _> =
            serde_json::from_value(json!({ "success": true, "data": 1, "error": "x" }));
        assert!(both.is_err());

        let empty_success: Result<ProviderResult<u32>, _> =
            serde_json::from_value(json!({ "success": true }));
        assert!(empty_success.is_err());

        let silent_failure: Result<ProviderResult<u32>, _> =
            serde_json::from_value(json!({ "success": false }));
        assert!(silent_failure.is_err());
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Slot {
        time: String,
    }

    #[test]
    fn payload_without_default_deserializes() {
        let ok: ProviderResult<Slot> =
            serde_json::from_value(json!({ "success": true, "data": { "time": "19:00" } }))
                .unwrap();
        assert_eq!(ok.data().map(|s| s.time.as_str()), Some("19:00"));

        let failed: ProviderResult<Slot> =
            serde_json::from_value(json!({ "success": false, "error": "no tables" })).unwrap();
        assert!(failed.error_code().is_none());
        assert_eq!(failed.error(), Some("no tables"));
    }

    #[test]
    fn unknown_codes_are_kept_verbatim() {
        let result: ProviderResult<u32> = serde_json::from_value(
            json!({ "success": false, "error": "slow down", "errorCode": "RATE_LIMITED" }),
        )
        .unwrap();
        assert_eq!(
            result.error_code(),
            Some(&ProviderErrorCode::Provider("RATE_LIMITED".into()))
        );

        let not_impl: ProviderResult<u32> = serde_json::from_value(
            json!({ "success": false, "error": "todo", "errorCode": "NOT_IMPLEMENTED" }),
        )
        .unwrap();
        assert_eq!(not_impl.error_code(), Some(&ProviderErrorCode::NotImplemented));
    }
}
