//! Result builders shared by every provider.

use rand::Rng;
use reservations_types::domain::result::{ProviderErrorCode, ProviderResult};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 4;

/// Human-shareable booking code: `RL-<base36 millis>-<4 random base36>`.
///
/// Display only. Nothing checks for collisions.
pub fn generate_confirmation_code() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("RL-{}-{}", to_base36(millis), suffix)
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

pub fn not_implemented<T>(provider: &str, method: &str) -> ProviderResult<T> {
    tracing::debug!(provider, method, "provider operation not implemented");
    ProviderResult::fail(
        ProviderErrorCode::NotImplemented,
        format!("{method} is not implemented for the {provider} provider"),
    )
}

pub fn deep_link_only<T>(provider: &str, method: &str) -> ProviderResult<T> {
    tracing::debug!(provider, method, "deep-link provider cannot serve operation");
    ProviderResult::fail(
        ProviderErrorCode::DeepLinkOnly,
        format!(
            "{provider} does not support {method}; redirect the guest to the vendor's booking link instead"
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_base36_upper(s: &str) -> bool {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    }

    #[test]
    fn confirmation_code_shape() {
        for _ in 0..100 {
            let code = generate_confirmation_code();
            let parts: Vec<&str> = code.split('-').collect();
            assert_eq!(parts.len(), 3, "{code}");
            assert_eq!(parts[0], "RL");
            assert!(is_base36_upper(parts[1]), "{code}");
            assert_eq!(parts[2].len(), SUFFIX_LEN, "{code}");
            assert!(is_base36_upper(parts[2]), "{code}");
        }
    }

    #[test]
    fn codes_in_same_millisecond_differ() {
        let a = generate_confirmation_code();
        let b = generate_confirmation_code();
        assert_ne!(a, b);
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "LOYW3V28");
    }

    #[test]
    fn failure_builders_carry_codes() {
        let r: ProviderResult<()> = not_implemented("Resy", "create_reservation");
        assert_eq!(r.error_code(), Some(&ProviderErrorCode::NotImplemented));
        assert!(r.error().unwrap().contains("create_reservation"));
        assert!(r.error().unwrap().contains("Resy"));

        let r: ProviderResult<()> = deep_link_only("DeepLink", "get_availability");
        assert_eq!(r.error_code(), Some(&ProviderErrorCode::DeepLinkOnly));
    }
}
