//! Checks against the bundled libphonenumber metadata, validating the
//! generated numbers with the `phonenumber` parser.

use proptest::prelude::*;

use crate::{
    Inclusion, NumberFormatKind, PHONE_NUMBER_REGISTRY, PhoneNumberFormat, PhoneNumberStrategy,
    invalid_national_number, phone_number,
};

use super::region_code::RegionCode;

fn is_valid_e164(e164: &str) -> bool {
    phonenumber::parse(None, e164).is_ok_and(|parsed| phonenumber::is_valid(&parsed))
}

#[test]
fn registry_covers_known_regions() {
    super::init_logger();
    let registry = &*PHONE_NUMBER_REGISTRY;

    assert!(registry.regions().len() > 200);
    for region in [RegionCode::au(), RegionCode::us(), RegionCode::gb(), RegionCode::un001_800()] {
        assert!(registry.contains(&region), "missing {}", region);
    }

    let au = registry.region_metadata(&RegionCode::au()).unwrap();
    assert_eq!(au.national_prefix.as_deref(), Some("0"));
    assert!(au.has_format(NumberFormatKind::Mobile));
    assert!(!au.has_format(NumberFormatKind::SmsServices));
    assert!(registry.regions_with_format(NumberFormatKind::Mobile).contains(&RegionCode::au()));

    let toll_free_service = registry.region_metadata(&RegionCode::un001_800()).unwrap();
    assert!(!toll_free_service.has_national_prefix());
}

#[test]
fn region_finder_over_database() {
    let registry = &*PHONE_NUMBER_REGISTRY;

    let nanpa = registry.region_finder(Some([1].as_slice()), None).unwrap();
    assert!(nanpa.contains(&RegionCode::us()));
    assert!(nanpa.contains(&RegionCode::ca()));
    assert!(nanpa.iter().all(|region| region.country_code == 1));

    let found = registry.region_finder(None, Some(["de"].as_slice())).unwrap();
    assert_eq!(found, vec![RegionCode::de()]);

    let toll_free = registry.region_finder(Some([800].as_slice()), None).unwrap();
    assert_eq!(toll_free, vec![RegionCode::un001_800()]);
    assert_eq!(toll_free[0].region_code, crate::i18n::RegionCode::get_non_geo_entity());
}

#[test]
fn every_metadata_pattern_can_be_generated() {
    let registry = &*PHONE_NUMBER_REGISTRY;
    for format in registry.number_formats() {
        assert!(
            registry.generator_for(&format.region, format.format_name).is_ok(),
            "{} {} pattern {} is not supported",
            format.region,
            format.format_name,
            format.format_regex
        );
    }
}

#[test]
fn strategy_over_every_region_builds() {
    let strategy = PhoneNumberStrategy::builder().build().unwrap();
    assert_eq!(strategy.regions().len(), PHONE_NUMBER_REGISTRY.regions().len());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn national_numbers_have_no_prefix(
        national_number in phone_number(
            Some([RegionCode::au(), RegionCode::gb(), RegionCode::de()].as_slice()),
            Some([NumberFormatKind::Mobile].as_slice()),
        ).unwrap()
    ) {
        prop_assert!(national_number.bytes().all(|b| b.is_ascii_digit()));
        prop_assert!(!national_number.starts_with('0'));
        let valid = ["+61", "+44", "+49"]
            .iter()
            .any(|prefix| is_valid_e164(&format!("{}{}", prefix, national_number)));
        prop_assert!(valid, "{} is valid in none of AU/GB/DE", national_number);
    }

    #[test]
    fn generated_numbers_parse_as_valid(
        number in PhoneNumberStrategy::builder()
            .regions([RegionCode::au(), RegionCode::us(), RegionCode::de()])
            .number_formats([NumberFormatKind::FixedLine, NumberFormatKind::Mobile])
            .build()
            .unwrap()
    ) {
        prop_assert!(PHONE_NUMBER_REGISTRY.matches_format(
            &number.region,
            number.number_format,
            &number.national_number
        ));
        prop_assert!(is_valid_e164(&number.e164()), "{} is not valid", number.e164());
    }

    #[test]
    fn e164_formatting_round_trips(
        e164 in PhoneNumberStrategy::builder()
            .regions([RegionCode::au(), RegionCode::gb()])
            .number_formats([NumberFormatKind::Mobile])
            .build()
            .unwrap()
            .formatted(PhoneNumberFormat::E164)
    ) {
        let parsed = phonenumber::parse(None, &e164).unwrap();
        prop_assert_eq!(
            phonenumber::format(&parsed).mode(phonenumber::Mode::E164).to_string(),
            e164
        );
    }

    #[test]
    fn international_notation_is_parseable(
        text in PhoneNumberStrategy::builder()
            .regions([RegionCode::au()])
            .number_formats([NumberFormatKind::Mobile])
            .national_prefix(Inclusion::Exclude)
            .local_number(Inclusion::Exclude)
            .build()
            .unwrap()
            .rendered()
    ) {
        prop_assert!(text.starts_with("+61 "));
        prop_assert!(phonenumber::parse(None, &text).is_ok());
    }

    #[test]
    fn invalid_numbers_miss_general_description(
        number in invalid_national_number(&PHONE_NUMBER_REGISTRY, RegionCode::de()).unwrap()
    ) {
        prop_assert!(!PHONE_NUMBER_REGISTRY.matches_format(
            &RegionCode::de(),
            NumberFormatKind::GeneralDesc,
            &number
        ));
    }
}
