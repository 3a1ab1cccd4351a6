//! Context-sensitive classification of a single route token.
//!
//! Airway designators and named points share the same lexical shape, so a
//! token is classified from its own shape together with the kind of the
//! element before it and whether a token follows it. The rules are applied
//! in order and the first one that admits the token wins:
//!
//! 1. `DCT` is always a direct leg.
//! 2. The first token is a speed/level group or an airway. A route made of a
//!    single token is also the last one, so if it is not an airway it may
//!    still be a significant point.
//! 3. The last token is a significant point.
//! 4. An interior token is a flight rule change, a change point, a
//!    coordinate, or otherwise alternates with the previous element: after an
//!    airway, speed/level or direct comes a point, after anything else an
//!    airway.

use log::trace;

use crate::element::{ElementKind, RouteElement};
use crate::error::{Error, Result};
use crate::grammar::*;

pub fn resolve(
    previous: Option<ElementKind>,
    current: &str,
    next: Option<&str>,
) -> Result<RouteElement> {
    if is_direct(current) {
        trace!("{}: direct", current);
        return Ok(RouteElement::Direct);
    }

    match (previous, next) {
        (None, next) => resolve_first(current, next.is_none()),
        (Some(_), None) => {
            trace!("{}: last token, significant point", current);
            RouteElement::point(current)
        }
        (Some(previous), Some(_)) => resolve_interior(previous, current),
    }
}

fn resolve_first(current: &str, is_last: bool) -> Result<RouteElement> {
    if is_speed_level(current) {
        trace!("{}: first token, speed/level", current);
        return RouteElement::speed_level(current);
    }

    if is_airway(current) {
        trace!("{}: first token, airway", current);
        return RouteElement::airway(current);
    }

    if is_last {
        trace!("{}: only token, significant point", current);
        return RouteElement::point(current);
    }

    Err(Error::classification(current))
}

fn resolve_interior(previous: ElementKind, current: &str) -> Result<RouteElement> {
    if is_change_of_flight_rule(current) {
        trace!("{}: change of flight rule", current);
        return RouteElement::change_of_flight_rule(current);
    }

    if current.contains(CHANGE_SEPARATOR) {
        trace!("{}: change of speed/level point", current);
        return RouteElement::change_of_speed_level_point(current);
    }

    // A coordinate also satisfies the airway shape.
    if is_coordinate_point(current) {
        trace!("{}: coordinate point", current);
        return RouteElement::point(current);
    }

    match previous {
        ElementKind::Airway | ElementKind::SpeedLevel | ElementKind::Direct => {
            trace!("{}: follows {}, significant point", current, previous);
            RouteElement::point(current)
        }
        _ => {
            trace!("{}: follows {}, airway", current, previous);
            RouteElement::airway(current)
        }
    }
}
