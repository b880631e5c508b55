//! # Filter Reply
//!
//! The pair of JSON documents handed to the display client on every search
//! reply:
//!
//! ```text
//! filters_json = [ { filter_type, id, display_hints, label, ...variant fields }, ... ]
//! state_json   = { <filter id>: <variant-shaped value>, ... }
//! ```
//!
//! Filters are described in the order given. The state is written verbatim,
//! including slots no listed filter owns. A later request hands `state_json`
//! back, and [`FilterReply::state`] restores it with no loss.

use crate::filters::Filter;
use crate::state::FilterState;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReply {
    pub filters_json: String,
    pub state_json: String,
}

impl FilterReply {
    /// Serialize `filters` and `state` as compact JSON.
    pub fn new(filters: &[Filter], state: &FilterState) -> serde_json::Result<Self> {
        Ok(Self {
            filters_json: serde_json::to_string(filters)?,
            state_json: serde_json::to_string(state)?,
        })
    }

    /// Same documents, indented for humans.
    pub fn pretty(filters: &[Filter], state: &FilterState) -> serde_json::Result<Self> {
        Ok(Self {
            filters_json: to_pretty(filters)?,
            state_json: to_pretty(state)?,
        })
    }
}

fn to_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{
        OptionSelectorFilter, RadioButtonsFilter, RangeInputFilter, RatingFilter, SwitchFilter,
        ValueSliderFilter,
    };
    use serde_json::{json, Value};

    struct Fixture {
        genre: OptionSelectorFilter,
        sort: RadioButtonsFilter,
        stars: RatingFilter,
        free: SwitchFilter,
        price: RangeInputFilter,
        size: ValueSliderFilter,
    }

    impl Fixture {
        fn new() -> Self {
            let mut genre = OptionSelectorFilter::new("genre", "Genre", true);
            genre.add_option("rock", "Rock");
            genre.add_option("jazz", "Jazz");
            genre.add_option("folk", "Folk");

            let mut sort = RadioButtonsFilter::new("sort", "Sort by");
            sort.add_option("name", "Name");
            sort.add_option("date", "Date");

            let mut stars = RatingFilter::new("stars", "Rating");
            for n in 1..=5 {
                stars.add_option(n.to_string(), format!("{} stars", n));
            }

            Self {
                genre,
                sort,
                stars,
                free: SwitchFilter::new("free", "Free only"),
                price: RangeInputFilter::new("price", "Price", "From", "To", "EUR"),
                size: ValueSliderFilter::new("size", "Size", "up to %1 MB", 1.0, 500.0),
            }
        }

        fn filters(&self) -> Vec<Filter> {
            vec![
                self.genre.clone().into(),
                self.sort.clone().into(),
                self.stars.clone().into(),
                self.free.clone().into(),
                self.price.clone().into(),
                self.size.clone().into(),
            ]
        }
    }

    #[test]
    fn round_trip_preserves_every_query() {
        let fx = Fixture::new();
        let mut state = FilterState::new();
        fx.genre.update_state(&mut state, "rock", true).unwrap();
        fx.genre.update_state(&mut state, "folk", true).unwrap();
        fx.sort.update_state(&mut state, "date", true).unwrap();
        fx.stars.update_state(&mut state, "4", true).unwrap();
        fx.free.update_state(&mut state, true);
        fx.price.update_state(&mut state, Value::Null, json!(20)).unwrap();
        fx.size.update_state(&mut state, 125.5).unwrap();

        let reply = FilterReply::new(&fx.filters(), &state).unwrap();
        let restored = FilterState::from_json(&reply.state_json).unwrap();

        assert_eq!(restored, state);
        assert_eq!(
            fx.genre.active_options(&restored).unwrap(),
            fx.genre.active_options(&state).unwrap()
        );
        assert_eq!(
            fx.sort.active_options(&restored).unwrap(),
            vec!["date".to_string()]
        );
        assert_eq!(
            fx.stars.active_rating(&restored).unwrap().as_deref(),
            Some("4")
        );
        assert!(fx.free.is_on(&restored).unwrap());
        assert_eq!(fx.price.start_value(&restored).unwrap(), None);
        assert_eq!(fx.price.end_value(&restored).unwrap(), Some(20.0));
        assert_eq!(fx.size.value(&restored).unwrap(), Some(125.5));
    }

    #[test]
    fn filters_json_is_array_of_descriptions_in_order() {
        let fx = Fixture::new();
        let reply = FilterReply::new(&fx.filters(), &FilterState::new()).unwrap();

        let parsed: Value = serde_json::from_str(&reply.filters_json).unwrap();
        let ids: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["genre", "sort", "stars", "free", "price", "size"]);
        assert_eq!(parsed[0]["filter_type"], "option_selector");
        assert_eq!(reply.state_json, "{}");
    }

    #[test]
    fn filters_json_loads_back() {
        let fx = Fixture::new();
        let reply = FilterReply::pretty(&fx.filters(), &FilterState::new()).unwrap();
        let loaded: Vec<Filter> = serde_json::from_str(&reply.filters_json).unwrap();
        assert_eq!(loaded, fx.filters());
    }

    #[test]
    fn foreign_slots_are_carried_verbatim() {
        let mut state = FilterState::new();
        state.set("legacy", json!({"anything": [1, "two"]}));

        let reply = FilterReply::new(&[], &state).unwrap();
        assert_eq!(reply.filters_json, "[]");
        assert_eq!(
            FilterState::from_json(&reply.state_json).unwrap().get("legacy"),
            Some(&json!({"anything": [1, "two"]}))
        );
    }
}
