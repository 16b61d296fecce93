//! Built-in sources and resources every registry starts with.
use crate::model::{Color, Resource, ResourceSource, SolidBrush};

pub const SYSTEM_SOURCE_NAME: &str = "System Resources";
pub const APPLICATION_SOURCE_NAME: &str = "App resources";
pub const SHARED_DICTIONARY_SOURCE_NAME: &str = "Resources.xaml";
pub const DOCUMENT_SOURCE_NAME: &str = "Window: <no name>";

const BLACK: SolidBrush = SolidBrush::rgb(0, 0, 0);
const HIGHLIGHT: SolidBrush = SolidBrush::rgb(51, 153, 255);
const TRANSPARENT: SolidBrush = SolidBrush::rgba(0, 0, 0, 0);

/// System brushes, in declaration order.
const SYSTEM_BRUSHES: &[(&str, SolidBrush)] = &[
    ("ControlTextBrush", BLACK),
    ("HighlightBrush", HIGHLIGHT),
    ("TransparentBrush", TRANSPARENT),
    ("ATextBrush", BLACK),
    ("ATransparentBrush", HIGHLIGHT),
    ("AHighlightBrush", TRANSPARENT),
    ("BTextBrush", BLACK),
    ("BHighlightBrush", HIGHLIGHT),
    ("BTransparentBrush", TRANSPARENT),
    ("CTextBrush", BLACK),
    ("CHighlightBrush", HIGHLIGHT),
    ("CTransparentBrush", TRANSPARENT),
];

const SYSTEM_COLORS: &[(&str, Color)] = &[
    ("ControlTextColor", Color::rgb(0, 0, 0)),
    ("HighlightColor", Color::rgb(51, 153, 255)),
];

/// The built-in seed: system brushes and colors, then the application's custom brush.
pub fn builtin_resources(system: &ResourceSource, application: &ResourceSource) -> Vec<Resource> {
    let brushes = SYSTEM_BRUSHES
        .iter()
        .map(|(name, brush)| Resource::new(system.clone(), *name, *brush));
    let colors = SYSTEM_COLORS
        .iter()
        .map(|(name, color)| Resource::new(system.clone(), *name, *color));
    let custom = Resource::new(
        application.clone(),
        "CustomHighlightBrush",
        SolidBrush::rgb(255, 165, 0),
    );

    brushes.chain(colors).chain(std::iter::once(custom)).collect()
}
