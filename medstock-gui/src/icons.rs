//! Bundled SVG icons.

use iced::widget::{Svg, svg::Handle};
use include_dir::{Dir, include_dir};

static ICONS: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

/// Look up a bundled icon by name.
pub fn icon(name: &str) -> Svg<'static> {
    let file = ICONS
        .get_file(format!("{name}.svg"))
        .unwrap_or_else(|| panic!("unknown icon: {name}"));

    Svg::new(Handle::from_memory(file.contents()))
        .width(16.0)
        .height(16.0)
}
