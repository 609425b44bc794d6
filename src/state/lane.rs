//! Lane markers and bridge validation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GameError;

/// Shortest bridge a game accepts.
pub const MIN_BRIDGE_LENGTH: usize = 3;

/// Longest bridge a game accepts.
pub const MAX_BRIDGE_LENGTH: usize = 20;

/// The lane holding the safe stone at one bridge position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lane {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "D")]
    Down,
}

impl Lane {
    /// Both lanes, in display order (up lane is drawn first).
    pub const ALL: [Lane; 2] = [Lane::Up, Lane::Down];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "U",
            Self::Down => "D",
        }
    }

    /// Map a generator value to a lane: 1 is up, 0 is down.
    pub fn from_number(number: u8) -> Result<Self, GameError> {
        match number {
            1 => Ok(Self::Up),
            0 => Ok(Self::Down),
            other => Err(GameError::InvalidLaneNumber(other)),
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lane {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Self::Up),
            "D" => Ok(Self::Down),
            other => Err(GameError::InvalidLane(other.to_string())),
        }
    }
}

/// Check that a bridge length is within the playable range.
pub fn validate_length(length: usize) -> Result<(), GameError> {
    if (MIN_BRIDGE_LENGTH..=MAX_BRIDGE_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(GameError::InvalidLength(length))
    }
}

/// Parse a bridge written as a run of `U`/`D` characters, e.g. `"UDU"`.
pub fn parse_bridge(symbols: &str) -> Result<Vec<Lane>, GameError> {
    let lanes = symbols
        .chars()
        .map(|c| c.to_string().parse())
        .collect::<Result<Vec<Lane>, _>>()?;
    validate_length(lanes.len())?;
    Ok(lanes)
}

/// Render lanes back into their `U`/`D` form.
pub fn lanes_to_string(lanes: &[Lane]) -> String {
    lanes.iter().map(Lane::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lane_parse() {
        assert_eq!("U".parse::<Lane>(), Ok(Lane::Up));
        assert_eq!("D".parse::<Lane>(), Ok(Lane::Down));
        assert_eq!(
            "u".parse::<Lane>(),
            Err(GameError::InvalidLane("u".to_string()))
        );
        assert!("".parse::<Lane>().is_err());
        assert!("UD".parse::<Lane>().is_err());
    }

    #[test]
    fn test_lane_from_number() {
        assert_eq!(Lane::from_number(1), Ok(Lane::Up));
        assert_eq!(Lane::from_number(0), Ok(Lane::Down));
        assert_eq!(Lane::from_number(2), Err(GameError::InvalidLaneNumber(2)));
    }

    #[test]
    fn test_validate_length_bounds() {
        assert!(validate_length(2).is_err());
        assert!(validate_length(3).is_ok());
        assert!(validate_length(20).is_ok());
        assert!(validate_length(21).is_err());
    }

    #[test]
    fn test_parse_bridge() {
        let bridge = parse_bridge("UDU").unwrap();
        assert_eq!(bridge, vec![Lane::Up, Lane::Down, Lane::Up]);
        assert_eq!(lanes_to_string(&bridge), "UDU");

        assert_eq!(parse_bridge("UD"), Err(GameError::InvalidLength(2)));
        assert_eq!(
            parse_bridge("UXD"),
            Err(GameError::InvalidLane("X".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Lane::Up), "U");
        assert_eq!(serde_json::to_string(&Lane::Down).unwrap(), "\"D\"");
    }
}
