// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are embedded as SVG sources and rasterized once at runtime
//! (the same pipeline the window icon uses), with handles cached in
//! `OnceLock` so each icon is rendered exactly once per process.
//!
//! # Module Structure
//!
//! - **`icons::*`** - Neutral gray icons for toolbars and menu items
//! - **`icons::light::*`** - White icons for use on filled primary buttons
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `magnifier` not `search_employee`).

use iced::widget::image::{Handle, Image};
use iced::Length;
use resvg::usvg;
use std::sync::OnceLock;

/// Rasterization size; icons are downscaled by the widgets that place them.
const RASTER_SIZE: u32 = 64;

/// Neutral icon color, readable on both light and dark surfaces.
const NEUTRAL: &str = "#8c8c8c";

/// Renders an SVG source at `RASTER_SIZE`, substituting `currentColor`.
/// Returns `None` if parsing or rendering fails.
fn rasterize(svg_source: &str, color: &str) -> Option<Handle> {
    let colored = svg_source.replace("currentColor", color);
    let tree = usvg::Tree::from_data(colored.as_bytes(), &usvg::Options::default()).ok()?;

    let orig_size = tree.size();
    let scale_x = RASTER_SIZE as f32 / orig_size.width();
    let scale_y = RASTER_SIZE as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(RASTER_SIZE, RASTER_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(Handle::from_rgba(
        RASTER_SIZE,
        RASTER_SIZE,
        pixmap.data().to_vec(),
    ))
}

/// Fallback handle when rasterization fails: a single transparent pixel.
fn blank_handle() -> Handle {
    Handle::from_rgba(1, 1, vec![0; 4])
}

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $file:literal, $color:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Image<Handle> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static SOURCE: &str = include_str!(concat!("../../assets/icons/svg/", $file));
            let handle = HANDLE
                .get_or_init(|| rasterize(SOURCE, $color).unwrap_or_else(blank_handle));
            Image::new(handle.clone())
        }
    };
}

define_icon!(menu, "menu.svg", NEUTRAL, "Hamburger menu: three bars.");
define_icon!(cross, "cross.svg", NEUTRAL, "Cross: dismiss/close.");
define_icon!(home, "home.svg", NEUTRAL, "House outline.");
define_icon!(user_plus, "user_plus.svg", NEUTRAL, "Person with a plus sign.");
define_icon!(magnifier, "magnifier.svg", NEUTRAL, "Magnifying glass.");
define_icon!(building, "building.svg", NEUTRAL, "Office building outline.");
define_icon!(message, "message.svg", NEUTRAL, "Speech bubble with lines.");
define_icon!(cog, "cog.svg", NEUTRAL, "Cog wheel.");

// Severity icons keep their semantic colors on every theme.
define_icon!(
    checkmark,
    "checkmark.svg",
    "#43b367",
    "Checkmark: success severity."
);
define_icon!(
    warning,
    "warning.svg",
    "#f1a620",
    "Triangle with exclamation mark: warning and error severity."
);
define_icon!(info, "info.svg", "#6496ff", "Circled i: info severity.");

/// White icon variants for filled (primary) buttons.
pub mod light {
    use super::*;

    define_icon!(
        magnifier,
        "magnifier.svg",
        "#ffffff",
        "Magnifying glass, white."
    );
    define_icon!(floppy, "floppy.svg", "#ffffff", "Floppy disk, white.");
}

/// Constrains an icon to a square of the given size.
pub fn sized(icon: Image<Handle>, size: f32) -> Image<Handle> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
