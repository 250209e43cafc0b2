// Imports
use serde::{Deserialize, Serialize};

/// The cap at the start and end of a thickened path.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    num_derive::FromPrimitive,
    num_derive::ToPrimitive,
)]
#[cfg_attr(feature = "clap-derive", derive(clap::ValueEnum))]
#[serde(rename = "cap_style")]
pub enum CapStyle {
    /// The path ends flush with its end points.
    #[serde(rename = "butt")]
    Butt = 0,
    /// The path is extended by half a square.
    #[serde(rename = "square")]
    Square = 1,
    /// The path ends in a triangular point.
    #[serde(rename = "triangle")]
    Triangle = 2,
    /// The path ends in a half circle.
    #[default]
    #[serde(rename = "round")]
    Round = 3,
}

impl TryFrom<u32> for CapStyle {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_u32(value)
            .ok_or_else(|| anyhow::anyhow!("CapStyle try_from::<u32>() for value {value} failed"))
    }
}

#[cfg(feature = "clap-derive")]
impl std::fmt::Display for CapStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CapStyle::Butt => "butt",
                CapStyle::Square => "square",
                CapStyle::Triangle => "triangle",
                CapStyle::Round => "round",
            }
        )
    }
}

/// The join between two consecutive segments of a thickened path.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    num_derive::FromPrimitive,
    num_derive::ToPrimitive,
)]
#[cfg_attr(feature = "clap-derive", derive(clap::ValueEnum))]
#[serde(rename = "join_style")]
pub enum JoinStyle {
    /// The outer corners are connected with a straight edge.
    #[serde(rename = "bevel")]
    Bevel = 0,
    /// The outer edges are extended until they meet.
    #[serde(rename = "miter")]
    Miter = 1,
    /// The outer corners are connected with a circular arc.
    #[default]
    #[serde(rename = "round")]
    Round = 2,
}

impl TryFrom<u32> for JoinStyle {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_u32(value)
            .ok_or_else(|| anyhow::anyhow!("JoinStyle try_from::<u32>() for value {value} failed"))
    }
}

#[cfg(feature = "clap-derive")]
impl std::fmt::Display for JoinStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                JoinStyle::Bevel => "bevel",
                JoinStyle::Miter => "miter",
                JoinStyle::Round => "round",
            }
        )
    }
}
