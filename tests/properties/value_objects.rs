//! Round-trip and rejection properties for postal codes, phone numbers,
//! and shop ids.

use proptest::prelude::*;

use shipctl::domain::value_objects::{PhoneNumber, PostalCode, ShopifyShopId};

fn postal_digits() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{7}").unwrap()
}

fn phone_digits() -> impl Strategy<Value = String> {
    proptest::string::string_regex("0[0-9]{9}|0[0-9]{10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing the canonical form yields the same value as
    /// parsing the raw input.
    #[test]
    fn property_postal_code_reparse_is_stable(digits in postal_digits()) {
        let parsed = PostalCode::from(&digits).unwrap();
        let reparsed = PostalCode::from(&parsed.to_string()).unwrap();
        prop_assert_eq!(parsed, reparsed);
    }

    /// PROPERTY: hyphenated and bare forms of the same digits are equal.
    #[test]
    fn property_postal_code_equality_ignores_hyphenation(digits in postal_digits()) {
        let bare = PostalCode::from(&digits).unwrap();
        let hyphenated =
            PostalCode::from(&format!("{}-{}", &digits[..3], &digits[3..])).unwrap();
        prop_assert_eq!(bare, hyphenated);
    }

    /// PROPERTY: canonical postal form is always NNN-NNNN.
    #[test]
    fn property_postal_code_canonical_shape(digits in postal_digits()) {
        let rendered = PostalCode::from(&digits).unwrap().to_string();
        prop_assert_eq!(rendered.len(), 8);
        prop_assert_eq!(&rendered[3..4], "-");
    }

    /// PROPERTY: valid phone digits re-parse to the same value.
    #[test]
    fn property_phone_reparse_is_stable(digits in phone_digits()) {
        let parsed = PhoneNumber::from(&digits).unwrap();
        let reparsed = PhoneNumber::from(&parsed.to_string()).unwrap();
        prop_assert_eq!(parsed, reparsed);
    }

    /// PROPERTY: canonical phone form keeps exactly the input digits.
    #[test]
    fn property_phone_canonical_keeps_digits(digits in phone_digits()) {
        let rendered = PhoneNumber::from(&digits).unwrap().to_string();
        let stripped: String = rendered.chars().filter(|c| *c != '-').collect();
        prop_assert_eq!(stripped, digits);
    }

    /// PROPERTY: digit counts other than 10 or 11 are rejected.
    #[test]
    fn property_phone_rejects_wrong_lengths(
        digits in proptest::string::string_regex("0[0-9]{0,8}|0[0-9]{11,13}").unwrap()
    ) {
        prop_assert!(PhoneNumber::from(&digits).is_err());
    }

    /// PROPERTY: numbers not starting with 0 are rejected.
    #[test]
    fn property_phone_rejects_nonzero_start(
        digits in proptest::string::string_regex("[1-9][0-9]{9,10}").unwrap()
    ) {
        prop_assert!(PhoneNumber::from(&digits).is_err());
    }

    /// PROPERTY: well-formed shop names round-trip through the full id.
    #[test]
    fn property_shop_id_round_trips(
        name in proptest::string::string_regex("[a-z0-9][a-z0-9-]{0,30}").unwrap()
    ) {
        let id = ShopifyShopId::from(&format!("{name}.myshopify.com")).unwrap();
        prop_assert_eq!(id.shop_name(), name.as_str());
        let reparsed = ShopifyShopId::from(id.as_str()).unwrap();
        prop_assert_eq!(id, reparsed);
    }
}
