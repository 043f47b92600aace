//! Badge component - small pill label.

use cardkit_core::ClassList;
use cardkit_layout::prelude::*;

const BADGE: &str = "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs \
                     font-semibold transition-colors focus:outline-none focus:ring-2 \
                     focus:ring-ring focus:ring-offset-2";

/// Badge visual variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
}

impl BadgeVariant {
    fn classes(self) -> &'static str {
        match self {
            Self::Default => "border-transparent bg-primary text-primary-foreground hover:bg-primary/80",
            Self::Secondary => {
                "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct BadgeConfig {
    pub(crate) label: String,
    pub(crate) variant: BadgeVariant,
    pub(crate) classes: ClassList,
}

/// Builder for a badge element
pub struct BadgeBuilder {
    pub(crate) config: BadgeConfig,
}

impl BadgeBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            config: BadgeConfig {
                label: label.into(),
                ..Default::default()
            },
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.config.variant = variant;
        self
    }

    pub fn secondary(self) -> Self {
        self.variant(BadgeVariant::Secondary)
    }

    /// Extra classes; they replace conflicting base and variant classes
    pub fn class(mut self, classes: &str) -> Self {
        self.config.classes.add(classes);
        self
    }

    pub fn classes_from(mut self, classes: &ClassList) -> Self {
        self.config.classes.extend(classes);
        self
    }

    pub fn build_component(self) -> Element {
        let BadgeConfig {
            label,
            variant,
            classes,
        } = self.config;

        div()
            .slot("badge")
            .class(BADGE)
            .class(variant.classes())
            .classes_from(&classes)
            .text(label)
    }
}

impl From<BadgeBuilder> for Node {
    fn from(builder: BadgeBuilder) -> Self {
        builder.build_component().into()
    }
}

/// Create a badge with the given label
pub fn badge(label: impl Into<String>) -> BadgeBuilder {
    BadgeBuilder::new(label)
}
