//! The 2-bit message domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProtocolError;

/// A 2-bit classical message.
///
/// The full domain of superdense coding: each variant selects one of the
/// four Bell states on the encoding side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Message {
    /// "00" — identity encoding.
    #[serde(rename = "00")]
    B00,
    /// "01" — Pauli-Z encoding.
    #[serde(rename = "01")]
    B01,
    /// "10" — Pauli-X encoding.
    #[serde(rename = "10")]
    B10,
    /// "11" — Pauli-X then Pauli-Z encoding.
    #[serde(rename = "11")]
    B11,
}

impl Message {
    /// All four messages, in numeric order.
    pub const ALL: [Message; 4] = [Message::B00, Message::B01, Message::B10, Message::B11];

    /// The message as its 2-character bitstring.
    pub fn as_str(&self) -> &'static str {
        match self {
            Message::B00 => "00",
            Message::B01 => "01",
            Message::B10 => "10",
            Message::B11 => "11",
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "00" => Ok(Message::B00),
            "01" => Ok(Message::B01),
            "10" => Ok(Message::B10),
            "11" => Ok(Message::B11),
            other => Err(ProtocolError::InvalidMessage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_messages() {
        for message in Message::ALL {
            assert_eq!(message.as_str().parse::<Message>().unwrap(), message);
        }
    }

    #[test]
    fn test_parse_invalid_messages() {
        for bad in ["22", "0", "001", "ab", "", "2"] {
            assert!(matches!(
                bad.parse::<Message>(),
                Err(ProtocolError::InvalidMessage(_))
            ));
        }
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(Message::B10.to_string(), "10");
    }

    #[test]
    fn test_serde_renames() {
        let json = serde_json::to_string(&Message::B01).unwrap();
        assert_eq!(json, "\"01\"");
        let back: Message = serde_json::from_str("\"11\"").unwrap();
        assert_eq!(back, Message::B11);
    }
}
