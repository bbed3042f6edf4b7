use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Long,
    Short,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Long => "LONG",
            Direction::Short => "SHORT",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "LONG" | "BUY" | "COMPRA" => Some(Direction::Long),
            "SHORT" | "SELL" | "VENTA" => Some(Direction::Short),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Open,
    Closed,
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeStatus::Open => write!(f, "OPEN"),
            TradeStatus::Closed => write!(f, "CLOSED"),
        }
    }
}

impl TradeStatus {
    /// Accepts the journal's native values ("Cerrado", "Abierto") as well as English ones.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "closed" | "cerrado" | "cerrada" => Some(TradeStatus::Closed),
            "open" | "abierto" | "abierta" | "activo" | "activa" => Some(TradeStatus::Open),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Won,
    Lost,
    Breakeven,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Won, Outcome::Lost, Outcome::Breakeven];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Won => "WON",
            Outcome::Lost => "LOST",
            Outcome::Breakeven => "BREAKEVEN",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "won" | "win" | "ganado" | "ganada" => Some(Outcome::Won),
            "lost" | "loss" | "perdido" | "perdida" => Some(Outcome::Lost),
            "breakeven" | "break-even" | "break even" | "be" => Some(Outcome::Breakeven),
            _ => None,
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Won)
    }
}

/// Coarse trading-hours category recorded on the journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Session {
    Asia,
    London,
    NewYork,
    Overlap,
    /// Any other non-blank label, kept verbatim.
    Other(String),
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Session {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let session = match trimmed.to_lowercase().as_str() {
            "asia" => Session::Asia,
            "londres" | "london" => Session::London,
            "nueva york" | "new york" | "new_york" | "newyork" | "ny" => Session::NewYork,
            "overlap" => Session::Overlap,
            _ => Session::Other(trimmed.to_string()),
        };
        Some(session)
    }

    /// Label used as the grouping key, matching the journal's own wording.
    pub fn label(&self) -> &str {
        match self {
            Session::Asia => "Asia",
            Session::London => "Londres",
            Session::NewYork => "Nueva York",
            Session::Overlap => "Overlap",
            Session::Other(label) => label,
        }
    }
}
