use std::{fmt, str::FromStr};

use crate::{
    foundation::core::Rgb,
    foundation::error::HalftoneError,
    params::model::{ChannelCorrection, GrainParams, HalftoneParams, PerChannel, RenderMode},
};

/// Named parameter bundles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Plain process inks on white, hard round dots.
    Default,
    /// Saturated ink blobs on cream paper.
    Drops,
    /// Fine, noisy gray screen on newsprint.
    Newspaper,
    /// Hard-edged single-sample dots in faded inks.
    Vintage,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Default,
        Preset::Drops,
        Preset::Newspaper,
        Preset::Vintage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Drops => "drops",
            Preset::Newspaper => "newspaper",
            Preset::Vintage => "vintage",
        }
    }

    pub fn params(self) -> HalftoneParams {
        match self {
            Preset::Default => HalftoneParams {
                dot_size: 10.0,
                grid_noise: 0.0,
                mode: RenderMode::Dots,
                softness: 0.0,
                contrast: 1.0,
                scale: 1.0,
                corrections: PerChannel::splat(ChannelCorrection::default()),
                grain: GrainParams::default(),
                inks: PerChannel {
                    cyan: hex(0x00FFFF),
                    magenta: hex(0xFF00FF),
                    yellow: hex(0xFFFF00),
                    black: hex(0x000000),
                },
                background: hex(0xFFFFFF),
            },
            Preset::Drops => HalftoneParams {
                dot_size: 88.0,
                grid_noise: 0.5,
                mode: RenderMode::Ink,
                softness: 0.0,
                contrast: 1.15,
                scale: 1.0,
                corrections: PerChannel {
                    cyan: ChannelCorrection::new(1.0, 0.15),
                    magenta: ChannelCorrection::new(0.44, 0.0),
                    yellow: ChannelCorrection::new(-1.0, 0.0),
                    black: ChannelCorrection::new(0.0, 0.0),
                },
                grain: GrainParams {
                    mixing: 0.05,
                    overlay: 0.25,
                    size: 0.01,
                },
                inks: PerChannel {
                    cyan: hex(0x00B2FF),
                    magenta: hex(0xFC4F4F),
                    yellow: hex(0xFFD900),
                    black: hex(0x231F20),
                },
                background: hex(0xEEEFD7),
            },
            Preset::Newspaper => HalftoneParams {
                dot_size: 1.0,
                grid_noise: 0.6,
                mode: RenderMode::Dots,
                softness: 0.2,
                contrast: 2.0,
                scale: 1.0,
                corrections: PerChannel {
                    cyan: ChannelCorrection::new(-0.17, 0.0),
                    magenta: ChannelCorrection::new(-0.45, 0.0),
                    yellow: ChannelCorrection::new(-0.45, 0.0),
                    black: ChannelCorrection::new(0.0, 0.1),
                },
                grain: GrainParams {
                    mixing: 0.0,
                    overlay: 0.2,
                    size: 0.0,
                },
                inks: PerChannel {
                    cyan: hex(0x7A7A75),
                    magenta: hex(0x7A7A75),
                    yellow: hex(0x7A7A75),
                    black: hex(0x231F20),
                },
                background: hex(0xF2F1E8),
            },
            Preset::Vintage => HalftoneParams {
                dot_size: 20.0,
                grid_noise: 0.45,
                mode: RenderMode::Sharp,
                softness: 0.4,
                contrast: 1.25,
                scale: 1.0,
                corrections: PerChannel {
                    cyan: ChannelCorrection::new(0.3, 0.15),
                    magenta: ChannelCorrection::new(0.0, 0.0),
                    yellow: ChannelCorrection::new(0.2, 0.0),
                    black: ChannelCorrection::new(0.0, 0.0),
                },
                grain: GrainParams {
                    mixing: 0.15,
                    overlay: 0.1,
                    size: 0.5,
                },
                inks: PerChannel {
                    cyan: hex(0x59AFC5),
                    magenta: hex(0xD8697C),
                    yellow: hex(0xFAD85C),
                    black: hex(0x2D2824),
                },
                background: hex(0xFFFAF0),
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = HalftoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names = Preset::ALL.map(Preset::name).join(", ");
                HalftoneError::validation(format!("unknown preset '{s}' (expected one of {names})"))
            })
    }
}

fn hex(rgb: u32) -> Rgb {
    Rgb::from_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/params/presets.rs"]
mod tests;
