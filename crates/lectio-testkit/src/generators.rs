//! Proptest generators for property-based testing.

use proptest::prelude::*;

use lectio_core::{GrantPayload, SealKey, ShortId, TokenDigest};
use lectio_player::Speed;

/// Generate a random ShortId.
pub fn short_id() -> impl Strategy<Value = ShortId> {
    any::<[u8; 4]>().prop_map(ShortId::from_bytes)
}

/// Generate a random TokenDigest.
pub fn token_digest() -> impl Strategy<Value = TokenDigest> {
    any::<[u8; 4]>().prop_map(TokenDigest::from_bytes)
}

/// Generate a random SealKey.
pub fn seal_key() -> impl Strategy<Value = SealKey> {
    any::<[u8; 32]>().prop_map(SealKey::from_bytes)
}

/// Generate an https video URL.
pub fn video_url() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,15}(/[a-z0-9]{1,8}){0,3}/[a-z0-9]{1,12}\\.mp4"
        .prop_map(|path| format!("https://{path}"))
}

/// Generate a viewer id: numeric host ids plus the anonymous fallback.
pub fn user_id() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[1-9][0-9]{0,11}".prop_map(String::from),
        1 => Just("anonymous".to_string()),
    ]
}

/// Generate a reasonable mint timestamp (Unix ms).
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=4_102_444_800_000 // through 2100
}

/// Generate a selectable playback speed.
pub fn speed() -> impl Strategy<Value = Speed> {
    prop_oneof![
        Just(Speed::Half),
        Just(Speed::Normal),
        Just(Speed::OneAndQuarter),
        Just(Speed::OneAndHalf),
        Just(Speed::Double),
    ]
}

/// Generate a seek fraction, including out-of-range values the engine clamps.
pub fn seek_fraction() -> impl Strategy<Value = f64> {
    -0.5f64..=1.5f64
}

/// Parameters for generating a grant payload.
#[derive(Debug, Clone)]
pub struct GrantParams {
    pub url: String,
    pub user_id: String,
    pub timestamp: i64,
    pub short_id: ShortId,
}

impl Arbitrary for GrantParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (video_url(), user_id(), timestamp(), short_id())
            .prop_map(|(url, user_id, timestamp, short_id)| GrantParams {
                url,
                user_id,
                timestamp,
                short_id,
            })
            .boxed()
    }
}

/// Build a payload from generated parameters.
pub fn payload_from_params(params: &GrantParams) -> GrantPayload {
    GrantPayload::new(
        params.url.clone(),
        params.user_id.clone(),
        params.timestamp,
        params.short_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectio_core::GrantToken;

    proptest! {
        #[test]
        fn payload_json_roundtrips(params: GrantParams) {
            let payload = payload_from_params(&params);
            let json = payload.to_json().unwrap();
            let back = GrantPayload::from_json(json.as_bytes()).unwrap();
            prop_assert_eq!(payload, back);
        }

        #[test]
        fn sealed_payloads_reopen(params: GrantParams, key in seal_key()) {
            let payload = payload_from_params(&params);
            let sealed = key.seal(payload.to_json().unwrap().as_bytes()).unwrap();
            let opened = key.open(&sealed).unwrap();
            prop_assert_eq!(GrantPayload::from_json(&opened).unwrap(), payload);
        }

        #[test]
        fn tokens_roundtrip(id in short_id(), digest in token_digest()) {
            let token = GrantToken::new(id, digest);
            prop_assert_eq!(GrantToken::parse(&token.encode()).unwrap(), token);
        }

        #[test]
        fn digest_is_deterministic(id in short_id(), blob in "[A-Za-z0-9+/=]{0,64}") {
            let d1 = TokenDigest::compute(&blob, &id);
            let d2 = TokenDigest::compute(&blob, &id);
            prop_assert_eq!(d1, d2);
        }

        #[test]
        fn speed_values_roundtrip(speed in speed()) {
            prop_assert_eq!(Speed::from_value(speed.value()), Some(speed));
        }
    }
}
