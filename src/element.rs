use std::fmt;

use crate::error::{Error, Result};
use crate::grammar::*;
use crate::units::{FlightRule, LevelUnit, SpeedUnit};

/// Cruising speed and level group, e.g. `N0450F350`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SpeedLevel {
    pub speed_unit: SpeedUnit,
    pub speed: String,
    pub level_unit: LevelUnit,
    pub level: String,
}

impl SpeedLevel {
    pub fn parse(token: &str) -> Result<Self> {
        let cap = SPEED_LEVEL_REGEX
            .captures(token)
            .ok_or_else(|| Error::malformed(token, "speed/level"))?;
        let (speed_unit, speed) = split_unit(&cap["speed"]);
        let (level_unit, level) = split_unit(&cap["level"]);

        Ok(SpeedLevel {
            speed_unit: SpeedUnit::from_code(speed_unit)
                .map_err(|_| Error::malformed(token, "speed unit"))?,
            speed: speed.to_owned(),
            level_unit: LevelUnit::from_code(level_unit)
                .map_err(|_| Error::malformed(token, "level unit"))?,
            level: level.to_owned(),
        })
    }
}

// The grammar guarantees a non-empty ASCII group.
fn split_unit(group: &str) -> (char, &str) {
    let (code, value) = group.split_at(1);
    (code.chars().next().unwrap_or_default(), value)
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.speed_unit, self.speed, self.level_unit, self.level
        )
    }
}

/// A position along the route.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum SignificantPoint {
    Named {
        name: String,
    },
    Coordinate {
        vertical: String,
        horizontal: String,
    },
    Navaid {
        ident: String,
        bearing: String,
        distance: String,
    },
}

impl SignificantPoint {
    /// Classifies a point token, trying navaid, coordinate and named point
    /// in that order. The first two are strictly more specific than a name.
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(cap) = NAVAID_POINT_REGEX.captures(token) {
            return Some(SignificantPoint::Navaid {
                ident: cap["ident"].to_owned(),
                bearing: cap["bearing"].to_owned(),
                distance: cap["distance"].to_owned(),
            });
        }

        if let Some(cap) = COORDINATE_POINT_REGEX.captures(token) {
            return Some(SignificantPoint::Coordinate {
                vertical: cap["vertical"].to_owned(),
                horizontal: cap["horizontal"].to_owned(),
            });
        }

        if is_named_point(token) {
            return Some(SignificantPoint::Named {
                name: token.to_owned(),
            });
        }

        None
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            SignificantPoint::Named { .. } => ElementKind::NamedPoint,
            SignificantPoint::Coordinate { .. } => ElementKind::CoordinatePoint,
            SignificantPoint::Navaid { .. } => ElementKind::NavaidPoint,
        }
    }
}

impl fmt::Display for SignificantPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SignificantPoint::Named { name } => f.write_str(name),
            SignificantPoint::Coordinate {
                vertical,
                horizontal,
            } => write!(f, "{}{}", vertical, horizontal),
            SignificantPoint::Navaid {
                ident,
                bearing,
                distance,
            } => write!(f, "{}{}{}", ident, bearing, distance),
        }
    }
}

/// One classified token of a route string.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum RouteElement {
    Direct,
    ChangeOfFlightRule {
        rule: FlightRule,
    },
    Airway {
        designator: String,
    },
    SpeedLevel(SpeedLevel),
    Point(SignificantPoint),
    ChangeOfSpeedLevelPoint {
        point: SignificantPoint,
        change: SpeedLevel,
    },
}

impl RouteElement {
    pub fn airway(token: &str) -> Result<Self> {
        if is_airway(token) {
            Ok(RouteElement::Airway {
                designator: token.to_owned(),
            })
        } else {
            Err(Error::classification(token))
        }
    }

    pub fn point(token: &str) -> Result<Self> {
        SignificantPoint::parse(token)
            .map(RouteElement::Point)
            .ok_or_else(|| Error::classification(token))
    }

    pub fn speed_level(token: &str) -> Result<Self> {
        SpeedLevel::parse(token).map(RouteElement::SpeedLevel)
    }

    pub fn change_of_flight_rule(token: &str) -> Result<Self> {
        FlightRule::from_code(token)
            .map(|rule| RouteElement::ChangeOfFlightRule { rule })
            .ok_or_else(|| Error::classification(token))
    }

    /// Parses `point/speedlevel`. Only change points contain a `/`, so a
    /// token that has one but fails to decompose is malformed rather than
    /// unclassifiable.
    pub fn change_of_speed_level_point(token: &str) -> Result<Self> {
        let (point, change) =
            split_change(token).ok_or_else(|| Error::malformed(token, "point/speed-level"))?;
        let point =
            SignificantPoint::parse(point).ok_or_else(|| Error::malformed(token, "significant point"))?;
        let change = SpeedLevel::parse(change).map_err(|_| Error::malformed(token, "speed/level"))?;

        Ok(RouteElement::ChangeOfSpeedLevelPoint { point, change })
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            RouteElement::Direct => ElementKind::Direct,
            RouteElement::ChangeOfFlightRule { .. } => ElementKind::ChangeOfFlightRule,
            RouteElement::Airway { .. } => ElementKind::Airway,
            RouteElement::SpeedLevel(_) => ElementKind::SpeedLevel,
            RouteElement::Point(point) => point.kind(),
            RouteElement::ChangeOfSpeedLevelPoint { .. } => ElementKind::ChangeOfSpeedLevelPoint,
        }
    }

    /// Reconstructs the source token from the element's fields.
    pub fn representation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RouteElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RouteElement::Direct => f.write_str(DIRECT),
            RouteElement::ChangeOfFlightRule { rule } => write!(f, "{}", rule),
            RouteElement::Airway { designator } => f.write_str(designator),
            RouteElement::SpeedLevel(speed_level) => write!(f, "{}", speed_level),
            RouteElement::Point(point) => write!(f, "{}", point),
            RouteElement::ChangeOfSpeedLevelPoint { point, change } => {
                write!(f, "{}{}{}", point, CHANGE_SEPARATOR, change)
            }
        }
    }
}

/// Payload-free tag of a [`RouteElement`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ElementKind {
    Direct,
    ChangeOfFlightRule,
    Airway,
    SpeedLevel,
    NamedPoint,
    CoordinatePoint,
    NavaidPoint,
    ChangeOfSpeedLevelPoint,
}

impl ElementKind {
    pub fn is_significant_point(self) -> bool {
        matches!(
            self,
            ElementKind::NamedPoint | ElementKind::CoordinatePoint | ElementKind::NavaidPoint
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Direct => "Direct",
            ElementKind::ChangeOfFlightRule => "ChangeOfFlightRule",
            ElementKind::Airway => "Airway",
            ElementKind::SpeedLevel => "SpeedLevel",
            ElementKind::NamedPoint => "NamedPoint",
            ElementKind::CoordinatePoint => "CoordinatePoint",
            ElementKind::NavaidPoint => "NavaidPoint",
            ElementKind::ChangeOfSpeedLevelPoint => "ChangeOfSpeedLevelPoint",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
