//! Property tests for weather payload decoding

use proptest::prelude::*;
use sunshine_protocol::WeatherUpdate;

proptest! {
    #[test]
    fn parse_never_panics(payload in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = WeatherUpdate::parse(&payload);
    }

    #[test]
    fn string_and_number_forms_agree(
        high in -150i32..150,
        low in -150i32..150,
        condition in "[a-z_]{1,24}",
    ) {
        let numeric = format!(r#"{{"high": {high}, "low": {low}, "conditionId": "{condition}"}}"#);
        let legacy = format!(r#"{{"high": "{high}", "low": "{low}", "art": "{condition}"}}"#);

        let a = WeatherUpdate::parse(numeric.as_bytes()).unwrap();
        let b = WeatherUpdate::parse(legacy.as_bytes()).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.high, f64::from(high));
        prop_assert_eq!(a.condition_id(), Some(condition.as_str()));
    }
}
