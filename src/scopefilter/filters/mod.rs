//! # Filters
//!
//! Six filter variants, each with its own selection policy over a shared
//! [`FilterState`](crate::state::FilterState):
//!
//! | Variant | `filter_type` | State slot |
//! |---------|---------------|------------|
//! | [`OptionSelectorFilter`] | `option_selector` | sorted list of option ids |
//! | [`RadioButtonsFilter`] | `radio_buttons` | zero or one option id (list) |
//! | [`RatingFilter`] | `rating` | one option id (string) |
//! | [`SwitchFilter`] | `switch` | boolean |
//! | [`RangeInputFilter`] | `range_input` | `[start, end]` |
//! | [`ValueSliderFilter`] | `value_slider` | number |
//!
//! [`Filter`] is the closed sum over all of them. Its [`describe`](Filter::describe)
//! produces the rendering-ready structure sent to the display client; the same
//! shape is accepted back when loading filter definitions.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};
use std::ops::BitOr;

mod option;
mod option_selector;
mod radio_buttons;
mod range_input;
mod rating;
mod switch;
mod value_slider;

pub use option::{FilterOption, OptionList};
pub use option_selector::OptionSelectorFilter;
pub use radio_buttons::RadioButtonsFilter;
pub use range_input::RangeInputFilter;
pub use rating::RatingFilter;
pub use switch::SwitchFilter;
pub use value_slider::{SliderType, ValueSliderFilter};

/// Rendering priority bitmask. Orthogonal to selection logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayHints(u32);

impl DisplayHints {
    pub const DEFAULT: DisplayHints = DisplayHints(0);
    pub const PRIMARY: DisplayHints = DisplayHints(1);

    pub const fn from_bits(bits: u32) -> Self {
        DisplayHints(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_primary(self) -> bool {
        self.0 & Self::PRIMARY.0 != 0
    }
}

impl BitOr for DisplayHints {
    type Output = DisplayHints;

    fn bitor(self, rhs: Self) -> Self::Output {
        DisplayHints(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "filter_type", rename_all = "snake_case")]
pub enum Filter {
    OptionSelector(OptionSelectorFilter),
    RadioButtons(RadioButtonsFilter),
    Rating(RatingFilter),
    Switch(SwitchFilter),
    RangeInput(RangeInputFilter),
    ValueSlider(ValueSliderFilter),
}

impl Filter {
    pub fn id(&self) -> &str {
        match self {
            Filter::OptionSelector(f) => f.id(),
            Filter::RadioButtons(f) => f.id(),
            Filter::Rating(f) => f.id(),
            Filter::Switch(f) => f.id(),
            Filter::RangeInput(f) => f.id(),
            Filter::ValueSlider(f) => f.id(),
        }
    }

    pub fn filter_type(&self) -> &'static str {
        match self {
            Filter::OptionSelector(f) => f.filter_type(),
            Filter::RadioButtons(f) => f.filter_type(),
            Filter::Rating(f) => f.filter_type(),
            Filter::Switch(f) => f.filter_type(),
            Filter::RangeInput(f) => f.filter_type(),
            Filter::ValueSlider(f) => f.filter_type(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Filter::OptionSelector(f) => &f.label,
            Filter::RadioButtons(f) => &f.label,
            Filter::Rating(f) => &f.label,
            Filter::Switch(f) => &f.label,
            Filter::RangeInput(f) => &f.label,
            Filter::ValueSlider(f) => &f.label,
        }
    }

    pub fn display_hints(&self) -> DisplayHints {
        match self {
            Filter::OptionSelector(f) => f.display_hints,
            Filter::RadioButtons(f) => f.display_hints,
            Filter::Rating(f) => f.display_hints,
            Filter::Switch(f) => f.display_hints,
            Filter::RangeInput(f) => f.display_hints,
            Filter::ValueSlider(f) => f.display_hints,
        }
    }

    pub fn set_display_hints(&mut self, hints: DisplayHints) {
        match self {
            Filter::OptionSelector(f) => f.display_hints = hints,
            Filter::RadioButtons(f) => f.display_hints = hints,
            Filter::Rating(f) => f.display_hints = hints,
            Filter::Switch(f) => f.display_hints = hints,
            Filter::RangeInput(f) => f.display_hints = hints,
            Filter::ValueSlider(f) => f.display_hints = hints,
        }
    }

    /// Options for the selector-style variants, `None` for the rest.
    pub fn options(&self) -> Option<&OptionList> {
        match self {
            Filter::OptionSelector(f) => Some(f.options()),
            Filter::RadioButtons(f) => Some(f.options()),
            Filter::Rating(f) => Some(f.options()),
            Filter::Switch(_) | Filter::RangeInput(_) | Filter::ValueSlider(_) => None,
        }
    }

    /// The rendering-ready description of this filter's configuration.
    ///
    /// Always carries `filter_type`, `id`, `display_hints` and `label`; the
    /// remaining keys depend on the variant. Never looks at filter state.
    pub fn describe(&self) -> Value {
        let mut desc = json!({
            "filter_type": self.filter_type(),
            "id": self.id(),
            "display_hints": self.display_hints(),
            "label": self.label(),
        });

        let extra = match self {
            Filter::OptionSelector(f) => json!({
                "multi_select": f.multi_select(),
                "options": f.options(),
            }),
            Filter::RadioButtons(f) => json!({ "options": f.options() }),
            Filter::Rating(f) => json!({ "options": f.options() }),
            Filter::Switch(_) => json!({}),
            Filter::RangeInput(f) => json!({
                "start_label": f.start_label,
                "end_label": f.end_label,
                "unit_label": f.unit_label,
            }),
            Filter::ValueSlider(f) => json!({
                "label_template": f.value_label_template,
                "min": f.min(),
                "max": f.max(),
                "default": f.default_value(),
                "slider_type": f.slider_type,
            }),
        };

        if let (Value::Object(desc), Value::Object(extra)) = (&mut desc, extra) {
            desc.extend(extra);
        }
        desc
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.describe().serialize(serializer)
    }
}

impl From<OptionSelectorFilter> for Filter {
    fn from(value: OptionSelectorFilter) -> Self {
        Filter::OptionSelector(value)
    }
}

impl From<RadioButtonsFilter> for Filter {
    fn from(value: RadioButtonsFilter) -> Self {
        Filter::RadioButtons(value)
    }
}

impl From<RatingFilter> for Filter {
    fn from(value: RatingFilter) -> Self {
        Filter::Rating(value)
    }
}

impl From<SwitchFilter> for Filter {
    fn from(value: SwitchFilter) -> Self {
        Filter::Switch(value)
    }
}

impl From<RangeInputFilter> for Filter {
    fn from(value: RangeInputFilter) -> Self {
        Filter::RangeInput(value)
    }
}

impl From<ValueSliderFilter> for Filter {
    fn from(value: ValueSliderFilter) -> Self {
        Filter::ValueSlider(value)
    }
}
