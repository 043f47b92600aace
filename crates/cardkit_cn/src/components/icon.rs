//! Icon component - inline Lucide SVG.

use cardkit_core::ClassList;
use cardkit_layout::prelude::*;

pub use cardkit_icons::icons;

/// Builder for an inline icon
pub struct IconBuilder {
    path_data: &'static str,
    classes: ClassList,
}

impl IconBuilder {
    pub fn new(path_data: &'static str) -> Self {
        Self {
            path_data,
            classes: ClassList::new(),
        }
    }

    pub fn class(mut self, classes: &str) -> Self {
        self.classes.add(classes);
        self
    }

    pub fn build_component(self) -> Node {
        raw(cardkit_icons::inline_svg(
            self.path_data,
            &self.classes.to_string(),
        ))
    }
}

impl From<IconBuilder> for Node {
    fn from(builder: IconBuilder) -> Self {
        builder.build_component()
    }
}

/// Create an icon from Lucide path data
pub fn icon(path_data: &'static str) -> IconBuilder {
    IconBuilder::new(path_data)
}
