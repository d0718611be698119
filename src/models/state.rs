//! German federal states.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the sixteen German federal states, identified on the wire by
/// its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FederalState {
    /// Brandenburg.
    #[serde(rename = "BB")]
    Brandenburg,
    /// Berlin.
    #[serde(rename = "BE")]
    Berlin,
    /// Baden-Württemberg.
    #[serde(rename = "BW")]
    BadenWuerttemberg,
    /// Bavaria.
    #[serde(rename = "BY")]
    Bavaria,
    /// Bremen.
    #[serde(rename = "HB")]
    Bremen,
    /// Hesse.
    #[serde(rename = "HE")]
    Hesse,
    /// Hamburg.
    #[serde(rename = "HH")]
    Hamburg,
    /// Mecklenburg-Western Pomerania.
    #[serde(rename = "MV")]
    MecklenburgWesternPomerania,
    /// Lower Saxony.
    #[serde(rename = "NI")]
    LowerSaxony,
    /// North Rhine-Westphalia.
    #[serde(rename = "NW")]
    NorthRhineWestphalia,
    /// Rhineland-Palatinate.
    #[serde(rename = "RP")]
    RhinelandPalatinate,
    /// Schleswig-Holstein.
    #[serde(rename = "SH")]
    SchleswigHolstein,
    /// Saarland.
    #[serde(rename = "SL")]
    Saarland,
    /// Saxony.
    #[serde(rename = "SN")]
    Saxony,
    /// Saxony-Anhalt.
    #[serde(rename = "ST")]
    SaxonyAnhalt,
    /// Thuringia.
    #[serde(rename = "TH")]
    Thuringia,
}

impl FederalState {
    /// All states in code order.
    pub const ALL: [FederalState; 16] = [
        FederalState::Brandenburg,
        FederalState::Berlin,
        FederalState::BadenWuerttemberg,
        FederalState::Bavaria,
        FederalState::Bremen,
        FederalState::Hesse,
        FederalState::Hamburg,
        FederalState::MecklenburgWesternPomerania,
        FederalState::LowerSaxony,
        FederalState::NorthRhineWestphalia,
        FederalState::RhinelandPalatinate,
        FederalState::SchleswigHolstein,
        FederalState::Saarland,
        FederalState::Saxony,
        FederalState::SaxonyAnhalt,
        FederalState::Thuringia,
    ];

    /// Returns the two-letter state code.
    pub fn code(self) -> &'static str {
        match self {
            FederalState::Brandenburg => "BB",
            FederalState::Berlin => "BE",
            FederalState::BadenWuerttemberg => "BW",
            FederalState::Bavaria => "BY",
            FederalState::Bremen => "HB",
            FederalState::Hesse => "HE",
            FederalState::Hamburg => "HH",
            FederalState::MecklenburgWesternPomerania => "MV",
            FederalState::LowerSaxony => "NI",
            FederalState::NorthRhineWestphalia => "NW",
            FederalState::RhinelandPalatinate => "RP",
            FederalState::SchleswigHolstein => "SH",
            FederalState::Saarland => "SL",
            FederalState::Saxony => "SN",
            FederalState::SaxonyAnhalt => "ST",
            FederalState::Thuringia => "TH",
        }
    }
}

impl fmt::Display for FederalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FederalState {
    type Err = EngineError;

    /// Parses a state code, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::FederalState;
    ///
    /// assert_eq!("sn".parse::<FederalState>().unwrap(), FederalState::Saxony);
    /// assert!("XX".parse::<FederalState>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        FederalState::ALL
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or_else(|| EngineError::invalid_field("state", format!("unknown state code '{}'", s)))
    }
}
