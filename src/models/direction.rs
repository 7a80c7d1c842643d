use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which way text flows through the conversion gateway
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ConversionDirection {
    #[default]
    UnicodeToBijoy,
    BijoyToUnicode,
}

impl ConversionDirection {
    pub fn opposite(self) -> Self {
        match self {
            Self::UnicodeToBijoy => Self::BijoyToUnicode,
            Self::BijoyToUnicode => Self::UnicodeToBijoy,
        }
    }

    pub fn input_label(self) -> &'static str {
        match self {
            Self::UnicodeToBijoy => "Unicode Input",
            Self::BijoyToUnicode => "Bijoy 52 Input",
        }
    }

    pub fn output_label(self) -> &'static str {
        match self {
            Self::UnicodeToBijoy => "Bijoy 52 Output",
            Self::BijoyToUnicode => "Unicode Output",
        }
    }

    pub fn input_placeholder(self) -> &'static str {
        match self {
            Self::UnicodeToBijoy => "Enter Bengali text (e.g., আমার সোনার বাংলা)...",
            Self::BijoyToUnicode => "Enter Bijoy codes (e.g., Avgvi †mvbvi evsjv)...",
        }
    }

    pub fn output_placeholder(self) -> &'static str {
        match self {
            Self::UnicodeToBijoy => "Converted Bijoy text will appear here...",
            Self::BijoyToUnicode => "Converted Unicode text will appear here...",
        }
    }

    /// Short tag shown on history cards
    pub fn badge(self) -> &'static str {
        match self {
            Self::UnicodeToBijoy => "Uni → Bijoy",
            Self::BijoyToUnicode => "Bijoy → Uni",
        }
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnicodeToBijoy => write!(f, "UnicodeToBijoy"),
            Self::BijoyToUnicode => write!(f, "BijoyToUnicode"),
        }
    }
}
