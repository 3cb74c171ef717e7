use super::*;
use crate::style::control::{ControlSize, ControlVariant, Rounding};

#[test]
fn parse_key_matches_case_insensitively_after_trim() {
    assert_eq!(ControlVariant::parse_key("  Danger "), Ok(ControlVariant::Danger));
    assert_eq!(ControlSize::parse_key("LG"), Ok(ControlSize::Lg));
}

#[test]
fn parse_key_reports_family_and_original_key() {
    assert_eq!(
        Rounding::parse_key("pill"),
        Err(StyleKeyError::Unknown { family: "rounding", key: "pill".to_owned() })
    );
}

#[test]
fn from_key_or_default_substitutes_default() {
    assert_eq!(ControlVariant::from_key_or_default("shiny"), ControlVariant::Primary);
    assert_eq!(ControlSize::from_key_or_default(""), ControlSize::Md);
    assert_eq!(Rounding::from_key_or_default("xxl"), Rounding::Md);
}

#[test]
fn every_member_round_trips_through_its_key() {
    for &variant in ControlVariant::ALL {
        assert_eq!(ControlVariant::parse_key(variant.key()), Ok(variant));
    }
    for &size in ControlSize::ALL {
        assert_eq!(ControlSize::parse_key(size.key()), Ok(size));
    }
    for &rounding in Rounding::ALL {
        assert_eq!(Rounding::parse_key(rounding.key()), Ok(rounding));
    }
}

#[test]
fn conversions_generated_for_key_families() {
    let strict: Result<ControlVariant, _> = "ghost".parse();
    assert_eq!(strict, Ok(ControlVariant::Ghost));
    assert!("nope".parse::<ControlVariant>().is_err());
    assert_eq!(ControlVariant::from("nope"), ControlVariant::Primary);
    assert_eq!(Rounding::Full.to_string(), "full");
}
