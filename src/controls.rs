use crate::config::{BlendMode, ParamKey, ParamValue};
use crate::constants::*;

// Declarative layout of the tweak panel. The web side walks this table to
// build the widgets; nothing here touches the DOM.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlKind {
    Slider { min: f64, max: f64, step: Option<f64> },
    Color,
    Options(&'static [BlendMode]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlSpec {
    pub key: ParamKey,
    /// Partner written alongside `key` while linking is on.
    pub link: Option<ParamKey>,
    pub kind: ControlKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlGroup {
    Root,
    Cursor,
    Image,
}

impl ControlGroup {
    /// Folder label; `None` for controls placed on the panel itself.
    pub fn folder_name(self) -> Option<&'static str> {
        match self {
            ControlGroup::Root => None,
            ControlGroup::Cursor => Some(FOLDER_CURSOR),
            ControlGroup::Image => Some(FOLDER_IMAGE),
        }
    }
}

const fn slider(key: ParamKey, range: (f64, f64)) -> ControlSpec {
    ControlSpec {
        key,
        link: None,
        kind: ControlKind::Slider {
            min: range.0,
            max: range.1,
            step: None,
        },
    }
}

const fn linked(key: ParamKey, partner: ParamKey, kind: ControlKind) -> ControlSpec {
    ControlSpec {
        key,
        link: Some(partner),
        kind,
    }
}

const BLEND_OPTIONS: ControlKind = ControlKind::Options(&BlendMode::ALL);

static ROOT_CONTROLS: [ControlSpec; 2] = [
    slider(ParamKey::WFrame, FRAME_SIZE_RANGE),
    slider(ParamKey::HFrame, FRAME_SIZE_RANGE),
];

static CURSOR_CONTROLS: [ControlSpec; 6] = [
    slider(ParamKey::Radius, RADIUS_RANGE),
    slider(ParamKey::BlurStart, BLUR_RANGE),
    slider(ParamKey::BlurEnd, BLUR_RANGE),
    ControlSpec {
        key: ParamKey::ScaleEnd,
        link: None,
        kind: ControlKind::Slider {
            min: SCALE_END_RANGE.0,
            max: SCALE_END_RANGE.1,
            step: Some(SCALE_END_STEP),
        },
    },
    linked(ParamKey::FrameColor, ParamKey::ImgColor, ControlKind::Color),
    linked(ParamKey::FrameBlendMode, ParamKey::ImgBlendMode, BLEND_OPTIONS),
];

static IMAGE_CONTROLS: [ControlSpec; 2] = [
    linked(ParamKey::ImgColor, ParamKey::FrameColor, ControlKind::Color),
    linked(ParamKey::ImgBlendMode, ParamKey::FrameBlendMode, BLEND_OPTIONS),
];

/// Panel groups in display order.
pub fn panel_layout() -> [(ControlGroup, &'static [ControlSpec]); 3] {
    [
        (ControlGroup::Root, &ROOT_CONTROLS),
        (ControlGroup::Cursor, &CURSOR_CONTROLS),
        (ControlGroup::Image, &IMAGE_CONTROLS),
    ]
}

/// Convert a slider reading into a value.
#[inline]
pub fn value_from_number(n: f64) -> ParamValue {
    ParamValue::Number(n)
}

/// Convert widget text into a value for a control of `kind`.
///
/// Option text that is not a known blend mode passes through as `Raw`.
pub fn value_from_text(kind: ControlKind, text: &str) -> ParamValue {
    match kind {
        ControlKind::Slider { .. } => ParamValue::Number(crate::config::parse_number(text)),
        ControlKind::Color => ParamValue::Color(text.to_string()),
        ControlKind::Options(_) => crate::config::parse_blend(text),
    }
}
