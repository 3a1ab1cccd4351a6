//! Token grammars for the route elements.
//!
//! Every predicate is a whole-token test and answers only whether a token
//! *could* be an element of that kind. Several grammars overlap (an airway
//! designator and a named point are both short words), so a single predicate
//! never decides the classification on its own; see [`crate::resolve`].

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub(crate) static ref NAMED_POINT_REGEX: Regex =
        Regex::new(r"^[^\d\s/]{2,}\d*$").unwrap();
    pub(crate) static ref COORDINATE_POINT_REGEX: Regex =
        Regex::new(r"^(?P<vertical>(?:\d{2}|\d{4})[NS])(?P<horizontal>(?:\d{3}|\d{5})[EW])$")
            .unwrap();
    pub(crate) static ref NAVAID_POINT_REGEX: Regex =
        Regex::new(r"^(?P<ident>\w{2,3})(?P<bearing>\d{3})(?P<distance>\d{3})$").unwrap();
    pub(crate) static ref SPEED_LEVEL_REGEX: Regex =
        Regex::new(r"^(?P<speed>[KN]\d{4}|M\d{3})(?P<level>[AF]\d{3}|[SM]\d{4})$").unwrap();
    pub(crate) static ref AIRWAY_REGEX: Regex = Regex::new(r"^\w{2,7}$").unwrap();
}

pub const DIRECT: &str = "DCT";

/// Separator between the point and the speed/level of a change point.
pub const CHANGE_SEPARATOR: char = '/';

pub fn is_named_point(token: &str) -> bool {
    NAMED_POINT_REGEX.is_match(token)
}

pub fn is_coordinate_point(token: &str) -> bool {
    COORDINATE_POINT_REGEX.is_match(token)
}

pub fn is_navaid_point(token: &str) -> bool {
    NAVAID_POINT_REGEX.is_match(token)
}

pub fn is_significant_point(token: &str) -> bool {
    is_navaid_point(token) || is_coordinate_point(token) || is_named_point(token)
}

pub fn is_direct(token: &str) -> bool {
    token == DIRECT
}

pub fn is_change_of_flight_rule(token: &str) -> bool {
    token == "IFR" || token == "VFR"
}

pub fn is_speed_level(token: &str) -> bool {
    SPEED_LEVEL_REGEX.is_match(token)
}

pub fn is_airway(token: &str) -> bool {
    AIRWAY_REGEX.is_match(token)
}

/// Splits `point/speedlevel` into its two non-empty halves.
pub fn split_change(token: &str) -> Option<(&str, &str)> {
    let mut parts = token.split(CHANGE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(point), Some(change), None) if !point.is_empty() && !change.is_empty() => {
            Some((point, change))
        }
        _ => None,
    }
}

pub fn is_change_of_speed_level_point(token: &str) -> bool {
    split_change(token)
        .map(|(point, change)| is_significant_point(point) && is_speed_level(change))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_named_points() {
        assert!(is_named_point("DOVER"));
        assert!(is_named_point("WPT1"));
        assert!(is_named_point("CHIEVRES"));
        assert!(!is_named_point("XX99YY"));
        assert!(!is_named_point("A"));
        assert!(!is_named_point("12"));
        assert!(!is_named_point("WPT2/N0420F250"));
    }

    #[test]
    fn matches_coordinates() {
        assert!(is_coordinate_point("50N020W"));
        assert!(is_coordinate_point("5030N00145E"));
        assert!(!is_coordinate_point("50N0200W"));
        assert!(!is_coordinate_point("5N020W"));
        assert!(!is_coordinate_point("50,020W"));
    }

    #[test]
    fn matches_navaid_points() {
        assert!(is_navaid_point("DUB180040"));
        assert!(is_navaid_point("FL090015"));
        assert!(!is_navaid_point("DUB18004"));
        assert!(!is_navaid_point("DUBL180040"));
    }

    #[test]
    fn matches_keywords_exactly() {
        assert!(is_direct("DCT"));
        assert!(!is_direct("DCTX"));
        assert!(is_change_of_flight_rule("IFR"));
        assert!(is_change_of_flight_rule("VFR"));
        assert!(!is_change_of_flight_rule("IFRX"));
    }

    #[test]
    fn matches_speed_levels() {
        assert!(is_speed_level("N0450F350"));
        assert!(is_speed_level("K0830S1130"));
        assert!(is_speed_level("M082F390"));
        assert!(is_speed_level("N0120A045"));
        assert!(is_speed_level("K0400M0900"));
        assert!(!is_speed_level("M0820F390"));
        assert!(!is_speed_level("N0450F3500"));
        assert!(!is_speed_level("N0450"));
    }

    #[test]
    fn overlapping_grammars_accept_the_same_token() {
        assert!(is_airway("DOVER"));
        assert!(is_named_point("DOVER"));
        assert!(is_airway("50N020W"));
        assert!(is_coordinate_point("50N020W"));
        assert!(!is_airway("UL607X99"));
    }

    #[test]
    fn splits_change_points() {
        assert_eq!(split_change("WPT2/N0420F250"), Some(("WPT2", "N0420F250")));
        assert_eq!(split_change("WPT2"), None);
        assert_eq!(split_change("/N0420F250"), None);
        assert_eq!(split_change("A/B/C"), None);
        assert!(is_change_of_speed_level_point("WPT2/N0420F250"));
        assert!(is_change_of_speed_level_point("50N020W/M082F390"));
        assert!(!is_change_of_speed_level_point("WPT2/N0420"));
    }
}
