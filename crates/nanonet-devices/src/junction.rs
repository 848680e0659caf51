//! Junction classification and the fixed parameter preset tables.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Classification of a wire-wire (or electrode-wire) junction by the
/// character of the two sides: `m` metallic, `s` semiconducting, `v`
/// electrode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JunctionType {
    /// metallic-semiconducting
    Ms,
    /// semiconducting-metallic
    Sm,
    /// metallic-metallic
    Mm,
    /// semiconducting-semiconducting
    Ss,
    /// electrode-semiconducting
    Vs,
    /// semiconducting-electrode
    Sv,
    /// electrode-metallic
    Vm,
    /// metallic-electrode
    Mv,
}

impl JunctionType {
    /// All junction types, in preset-table order.
    pub const ALL: [JunctionType; 8] = [
        JunctionType::Ms,
        JunctionType::Sm,
        JunctionType::Mm,
        JunctionType::Ss,
        JunctionType::Vs,
        JunctionType::Sv,
        JunctionType::Vm,
        JunctionType::Mv,
    ];

    /// Gate-response exponent for the linear-exponential transistor model.
    ///
    /// Three presets, differing in which junction classes actually switch
    /// (alpha 0.5) versus stay essentially flat (alpha 1e-5):
    /// 0 = m-s junctions only, 1 = m-s plus electrode-s, 2 = m-s, s-s and
    /// electrode-s.
    pub fn lin_exp_alpha(self, preset: usize) -> Result<f64> {
        use JunctionType::*;
        let alpha = match preset {
            0 => match self {
                Ms | Sm => 0.5,
                Mm | Ss | Vs | Sv | Vm | Mv => 1e-5,
            },
            1 => match self {
                Ms | Sm | Vs | Sv => 0.5,
                Mm | Ss | Vm | Mv => 1e-5,
            },
            2 => match self {
                Ms | Sm | Ss | Vs | Sv => 0.5,
                Mm | Vm | Mv => 1e-5,
            },
            _ => {
                return Err(Error::UnknownPreset {
                    model: "lin-exp transistor",
                    index: preset,
                })
            }
        };
        Ok(alpha)
    }

    /// On/off conductance ratio for the Fermi-Dirac transistor model.
    ///
    /// One preset: only m-s junctions switch, with a ratio of 2e4
    /// (matching lin-exp preset 0 at full swing).
    pub fn on_off_ratio(self, preset: usize) -> Result<f64> {
        use JunctionType::*;
        let ratio = match preset {
            0 => match self {
                Ms | Sm => 1.0 / 5e-5,
                Mm | Ss | Vs | Sv | Vm | Mv => 1.0,
            },
            _ => {
                return Err(Error::UnknownPreset {
                    model: "fermi-dirac transistor",
                    index: preset,
                })
            }
        };
        Ok(ratio)
    }

    /// Two-letter label, e.g. `ms`.
    pub fn as_str(self) -> &'static str {
        match self {
            JunctionType::Ms => "ms",
            JunctionType::Sm => "sm",
            JunctionType::Mm => "mm",
            JunctionType::Ss => "ss",
            JunctionType::Vs => "vs",
            JunctionType::Sv => "sv",
            JunctionType::Vm => "vm",
            JunctionType::Mv => "mv",
        }
    }
}

impl fmt::Display for JunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JunctionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ms" => Ok(JunctionType::Ms),
            "sm" => Ok(JunctionType::Sm),
            "mm" => Ok(JunctionType::Mm),
            "ss" => Ok(JunctionType::Ss),
            "vs" => Ok(JunctionType::Vs),
            "sv" => Ok(JunctionType::Sv),
            "vm" => Ok(JunctionType::Vm),
            "mv" => Ok(JunctionType::Mv),
            other => Err(format!("unknown junction type: {other}")),
        }
    }
}
