use super::DisplayHints;
use crate::error::{StateError, ValidationError};
use crate::state::FilterState;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Renderer hint for how the slider value reads ("less than" / "more than").
/// Has no effect on validation or storage. Sent as `0` and `2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SliderType {
    #[default]
    LessThan,
    MoreThan,
}

impl From<SliderType> for u8 {
    fn from(value: SliderType) -> Self {
        match value {
            SliderType::LessThan => 0,
            SliderType::MoreThan => 2,
        }
    }
}

impl TryFrom<u8> for SliderType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SliderType::LessThan),
            2 => Ok(SliderType::MoreThan),
            other => Err(format!("unknown slider type {}", other)),
        }
    }
}

/// A slider selecting one value within an inclusive `[min, max]` range.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ValueSliderDefinition")]
pub struct ValueSliderFilter {
    id: String,
    pub display_hints: DisplayHints,
    pub label: String,
    pub slider_type: SliderType,
    default_value: f64,
    min: f64,
    max: f64,
    pub value_label_template: String,
}

impl ValueSliderFilter {
    pub const FILTER_TYPE: &'static str = "value_slider";

    /// The default value starts out at `max`.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        label_template: impl Into<String>,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_hints: DisplayHints::DEFAULT,
            label: label.into(),
            slider_type: SliderType::LessThan,
            default_value: max,
            min,
            max,
            value_label_template: label_template.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn filter_type(&self) -> &'static str {
        Self::FILTER_TYPE
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    /// Store `value` if it lies within `[min, max]`; otherwise leave the state alone.
    pub fn update_state(&self, state: &mut FilterState, value: f64) -> Result<(), ValidationError> {
        if !(self.min..=self.max).contains(&value) {
            return Err(ValidationError::OutOfBounds {
                filter_id: self.id.clone(),
                value,
                min: self.min,
                max: self.max,
            });
        }

        tracing::trace!(filter = %self.id, value, "slider updated");
        state.set(self.id.clone(), Value::from(value));
        Ok(())
    }

    pub fn value(&self, state: &FilterState) -> Result<Option<f64>, StateError> {
        state.number(&self.id)
    }
}

/// On-disk form of a slider definition. `default` falls back to `max`.
#[derive(Deserialize)]
struct ValueSliderDefinition {
    id: String,
    #[serde(default)]
    display_hints: DisplayHints,
    label: String,
    #[serde(default)]
    slider_type: SliderType,
    #[serde(default)]
    default: Option<f64>,
    min: f64,
    max: f64,
    #[serde(default)]
    label_template: String,
}

impl TryFrom<ValueSliderDefinition> for ValueSliderFilter {
    type Error = String;

    fn try_from(def: ValueSliderDefinition) -> Result<Self, Self::Error> {
        if def.min > def.max {
            return Err(format!(
                "slider {}: min {} is greater than max {}",
                def.id, def.min, def.max
            ));
        }
        Ok(Self {
            default_value: def.default.unwrap_or(def.max),
            id: def.id,
            display_hints: def.display_hints,
            label: def.label,
            slider_type: def.slider_type,
            min: def.min,
            max: def.max,
            value_label_template: def.label_template,
        })
    }
}
