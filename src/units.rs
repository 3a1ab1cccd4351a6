use std::convert::TryFrom;
use std::fmt;

use crate::error::{Error, Result};

/// Unit of the cruising speed in a speed/level group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SpeedUnit {
    Kilometer,
    Knot,
    Mach,
}

impl SpeedUnit {
    pub const ALL: [SpeedUnit; 3] = [SpeedUnit::Kilometer, SpeedUnit::Knot, SpeedUnit::Mach];

    pub fn from_code(code: char) -> Result<Self> {
        match code {
            'K' => Ok(SpeedUnit::Kilometer),
            'N' => Ok(SpeedUnit::Knot),
            'M' => Ok(SpeedUnit::Mach),
            c => Err(Error::UnknownUnit { code: c.to_string() }),
        }
    }

    pub fn code(self) -> char {
        match self {
            SpeedUnit::Kilometer => 'K',
            SpeedUnit::Knot => 'N',
            SpeedUnit::Mach => 'M',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpeedUnit::Kilometer => "Kilometers per hour",
            SpeedUnit::Knot => "Knots",
            SpeedUnit::Mach => "Mach",
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            SpeedUnit::Kilometer => 1,
            SpeedUnit::Knot => 2,
            SpeedUnit::Mach => 3,
        }
    }
}

impl TryFrom<u8> for SpeedUnit {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self> {
        SpeedUnit::ALL
            .iter()
            .copied()
            .find(|u| u.ordinal() == ordinal)
            .ok_or_else(|| Error::UnknownUnit {
                code: ordinal.to_string(),
            })
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Unit of the cruising level in a speed/level group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LevelUnit {
    FlightLevel,
    StandardMetric,
    AltitudeInFeet,
    AltitudeInMeter,
}

impl LevelUnit {
    pub const ALL: [LevelUnit; 4] = [
        LevelUnit::FlightLevel,
        LevelUnit::StandardMetric,
        LevelUnit::AltitudeInFeet,
        LevelUnit::AltitudeInMeter,
    ];

    pub fn from_code(code: char) -> Result<Self> {
        match code {
            'F' => Ok(LevelUnit::FlightLevel),
            'S' => Ok(LevelUnit::StandardMetric),
            'A' => Ok(LevelUnit::AltitudeInFeet),
            'M' => Ok(LevelUnit::AltitudeInMeter),
            c => Err(Error::UnknownUnit { code: c.to_string() }),
        }
    }

    pub fn code(self) -> char {
        match self {
            LevelUnit::FlightLevel => 'F',
            LevelUnit::StandardMetric => 'S',
            LevelUnit::AltitudeInFeet => 'A',
            LevelUnit::AltitudeInMeter => 'M',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LevelUnit::FlightLevel => "Flight level",
            LevelUnit::StandardMetric => "Standard metric level",
            LevelUnit::AltitudeInFeet => "Altitude in feet",
            LevelUnit::AltitudeInMeter => "Altitude in meters",
        }
    }

    pub fn ordinal(self) -> u8 {
        match self {
            LevelUnit::FlightLevel => 1,
            LevelUnit::StandardMetric => 2,
            LevelUnit::AltitudeInFeet => 3,
            LevelUnit::AltitudeInMeter => 4,
        }
    }
}

impl TryFrom<u8> for LevelUnit {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self> {
        LevelUnit::ALL
            .iter()
            .copied()
            .find(|u| u.ordinal() == ordinal)
            .ok_or_else(|| Error::UnknownUnit {
                code: ordinal.to_string(),
            })
    }
}

impl fmt::Display for LevelUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FlightRule {
    Ifr,
    Vfr,
}

impl FlightRule {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "IFR" => Some(FlightRule::Ifr),
            "VFR" => Some(FlightRule::Vfr),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            FlightRule::Ifr => "IFR",
            FlightRule::Vfr => "VFR",
        }
    }
}

impl fmt::Display for FlightRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_codes_both_ways() {
        for unit in SpeedUnit::ALL.iter() {
            assert_eq!(SpeedUnit::from_code(unit.code()), Ok(*unit));
            assert_eq!(SpeedUnit::try_from(unit.ordinal()), Ok(*unit));
        }
        for unit in LevelUnit::ALL.iter() {
            assert_eq!(LevelUnit::from_code(unit.code()), Ok(*unit));
            assert_eq!(LevelUnit::try_from(unit.ordinal()), Ok(*unit));
        }
    }

    #[test]
    fn shares_m_between_mach_and_meters() {
        assert_eq!(SpeedUnit::from_code('M'), Ok(SpeedUnit::Mach));
        assert_eq!(LevelUnit::from_code('M'), Ok(LevelUnit::AltitudeInMeter));
    }

    #[test]
    fn rejects_codes_outside_the_set() {
        assert_eq!(
            SpeedUnit::from_code('F'),
            Err(Error::UnknownUnit {
                code: "F".to_owned()
            })
        );
        assert!(LevelUnit::from_code('N').is_err());
        assert!(SpeedUnit::try_from(0).is_err());
        assert!(LevelUnit::try_from(5).is_err());
    }

    #[test]
    fn parses_flight_rules() {
        assert_eq!(FlightRule::from_code("IFR"), Some(FlightRule::Ifr));
        assert_eq!(FlightRule::from_code("VFR"), Some(FlightRule::Vfr));
        assert_eq!(FlightRule::from_code("ifr"), None);
        assert_eq!(FlightRule::Vfr.to_string(), "VFR");
    }
}
