use crate::constants::*;
use glam::DVec2;
use std::fmt;
use std::str::FromStr;

// Typed view of the visual parameters the trail reads from `:root`.

/// One of the fixed set of visual parameters, each backed by a CSS custom property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    WFrame,
    HFrame,
    Radius,
    BlurStart,
    BlurEnd,
    ScaleEnd,
    ImgColor,
    FrameColor,
    ImgBlendMode,
    FrameBlendMode,
}

impl ParamKey {
    pub const ALL: [ParamKey; 10] = [
        ParamKey::WFrame,
        ParamKey::HFrame,
        ParamKey::Radius,
        ParamKey::BlurStart,
        ParamKey::BlurEnd,
        ParamKey::ScaleEnd,
        ParamKey::ImgColor,
        ParamKey::FrameColor,
        ParamKey::ImgBlendMode,
        ParamKey::FrameBlendMode,
    ];

    #[inline]
    pub fn css_name(self) -> &'static str {
        match self {
            ParamKey::WFrame => CSS_W_FRAME,
            ParamKey::HFrame => CSS_H_FRAME,
            ParamKey::Radius => CSS_RADIUS,
            ParamKey::BlurStart => CSS_BLUR_START,
            ParamKey::BlurEnd => CSS_BLUR_END,
            ParamKey::ScaleEnd => CSS_SCALE_END,
            ParamKey::ImgColor => CSS_IMG_COLOR,
            ParamKey::FrameColor => CSS_FRAME_COLOR,
            ParamKey::ImgBlendMode => CSS_IMG_BLEND_MODE,
            ParamKey::FrameBlendMode => CSS_FRAME_BLEND_MODE,
        }
    }

    /// The other half of this key's linked pair, if it has one.
    #[inline]
    pub fn linked_partner(self) -> Option<ParamKey> {
        match self {
            ParamKey::FrameColor => Some(ParamKey::ImgColor),
            ParamKey::ImgColor => Some(ParamKey::FrameColor),
            ParamKey::FrameBlendMode => Some(ParamKey::ImgBlendMode),
            ParamKey::ImgBlendMode => Some(ParamKey::FrameBlendMode),
            _ => None,
        }
    }

    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ParamKey::WFrame
                | ParamKey::HFrame
                | ParamKey::Radius
                | ParamKey::BlurStart
                | ParamKey::BlurEnd
                | ParamKey::ScaleEnd
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown blend mode: {0:?}")]
pub struct UnknownBlendMode(pub String);

/// CSS `mix-blend-mode` keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlendMode {
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    pub const ALL: [BlendMode; 16] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
        }
    }
}

impl FromStr for BlendMode {
    type Err = UnknownBlendMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BlendMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownBlendMode(s.to_string()))
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of a parameter.
///
/// `Raw` keeps a blend-mode string that did not parse, so a malformed
/// stylesheet value is written back exactly as it was read.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Color(String),
    Blend(BlendMode),
    Raw(String),
}

impl ParamValue {
    /// Inline-style text for this value.
    pub fn to_css(&self) -> String {
        match self {
            ParamValue::Number(n) => format_number(*n),
            ParamValue::Color(c) | ParamValue::Raw(c) => c.clone(),
            ParamValue::Blend(m) => m.as_str().to_string(),
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Parse a computed numeric property with JS `Number()` rules, except that
/// empty text yields `NaN` rather than 0.
///
/// Accepts decimal with optional sign and exponent, `Infinity` with optional
/// sign, and unsigned `0x`/`0o`/`0b` integers. Anything else is `NaN`.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * radix as f64 + d as f64);
    }

    let (sign, body) = match trimmed.as_bytes()[0] {
        b'-' => (-1.0, &trimmed[1..]),
        b'+' => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    if body == "Infinity" {
        return sign * f64::INFINITY;
    }
    // f64::from_str also takes `inf`/`nan` spellings, which Number() rejects
    let decimal = body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a number the way JS string conversion does for the values the
/// panel produces (`40`, `0.5`, `NaN`, `Infinity`).
pub fn format_number(n: f64) -> String {
    if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}

/// Parse a computed blend-mode property, keeping unrecognized text as `Raw`.
pub fn parse_blend(raw: &str) -> ParamValue {
    match raw.parse::<BlendMode>() {
        Ok(mode) => ParamValue::Blend(mode),
        Err(e) => {
            log::warn!("[config] {}; passing through", e);
            ParamValue::Raw(raw.trim().to_string())
        }
    }
}

/// All visual parameters, one named field per key.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    pub w_frame: f64,
    pub h_frame: f64,
    pub radius: f64,
    pub blur_start: f64,
    pub blur_end: f64,
    pub scale_end: f64,
    pub img_color: ParamValue,
    pub frame_color: ParamValue,
    pub img_blend_mode: ParamValue,
    pub frame_blend_mode: ParamValue,
}

impl TrailConfig {
    /// Build the configuration from computed style.
    ///
    /// `lookup` returns the computed text of a custom property (empty when
    /// unset). The two color entries always take their literal defaults.
    pub fn seed(mut lookup: impl FnMut(&str) -> String) -> Self {
        let mut number = |key: ParamKey| {
            let raw = lookup(key.css_name());
            let n = parse_number(&raw);
            if n.is_nan() {
                log::warn!("[config] {} is not numeric ({:?})", key.css_name(), raw);
            }
            n
        };
        let w_frame = number(ParamKey::WFrame);
        let h_frame = number(ParamKey::HFrame);
        let radius = number(ParamKey::Radius);
        let blur_start = number(ParamKey::BlurStart);
        let blur_end = number(ParamKey::BlurEnd);
        let scale_end = number(ParamKey::ScaleEnd);

        let img_blend_mode = parse_blend(&lookup(ParamKey::ImgBlendMode.css_name()));
        let frame_blend_mode = parse_blend(&lookup(ParamKey::FrameBlendMode.css_name()));

        TrailConfig {
            w_frame,
            h_frame,
            radius,
            blur_start,
            blur_end,
            scale_end,
            img_color: ParamValue::Color(DEFAULT_IMG_COLOR.to_string()),
            frame_color: ParamValue::Color(DEFAULT_FRAME_COLOR.to_string()),
            img_blend_mode,
            frame_blend_mode,
        }
    }

    pub fn get(&self, key: ParamKey) -> ParamValue {
        match key {
            ParamKey::WFrame => ParamValue::Number(self.w_frame),
            ParamKey::HFrame => ParamValue::Number(self.h_frame),
            ParamKey::Radius => ParamValue::Number(self.radius),
            ParamKey::BlurStart => ParamValue::Number(self.blur_start),
            ParamKey::BlurEnd => ParamValue::Number(self.blur_end),
            ParamKey::ScaleEnd => ParamValue::Number(self.scale_end),
            ParamKey::ImgColor => self.img_color.clone(),
            ParamKey::FrameColor => self.frame_color.clone(),
            ParamKey::ImgBlendMode => self.img_blend_mode.clone(),
            ParamKey::FrameBlendMode => self.frame_blend_mode.clone(),
        }
    }

    /// Store a value. A non-numeric value for a numeric key becomes `NaN`.
    pub fn set(&mut self, key: ParamKey, value: ParamValue) {
        let num = value.as_number().unwrap_or(f64::NAN);
        match key {
            ParamKey::WFrame => self.w_frame = num,
            ParamKey::HFrame => self.h_frame = num,
            ParamKey::Radius => self.radius = num,
            ParamKey::BlurStart => self.blur_start = num,
            ParamKey::BlurEnd => self.blur_end = num,
            ParamKey::ScaleEnd => self.scale_end = num,
            ParamKey::ImgColor => self.img_color = value,
            ParamKey::FrameColor => self.frame_color = value,
            ParamKey::ImgBlendMode => self.img_blend_mode = value,
            ParamKey::FrameBlendMode => self.frame_blend_mode = value,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (ParamKey, ParamValue)> + '_ {
        ParamKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    #[inline]
    pub fn frame_size(&self) -> DVec2 {
        DVec2::new(self.w_frame, self.h_frame)
    }
}
