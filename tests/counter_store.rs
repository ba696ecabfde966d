mod common;

use colormix::mvi::Reducer;
use colormix::store::{
    self, Bounds, ChannelSpec, CounterState, StoreError, StoreIntent, StoreReducer,
};
use common::rgb_state;
use proptest::prelude::*;

#[test]
fn clamps_at_upper_bound() {
    let state = store::initialize([ChannelSpec::bounded("red", 250, 0, 255)]).unwrap();
    let state = store::apply(&state, Some("red"), 20).unwrap();
    assert_eq!(store::read(&state, Some("red")).unwrap(), 255);
}

#[test]
fn clamps_at_lower_bound() {
    let state = store::initialize([ChannelSpec::bounded("red", 10, 0, 255)]).unwrap();
    let state = store::apply(&state, Some("red"), -20).unwrap();
    assert_eq!(store::read(&state, Some("red")).unwrap(), 0);
}

#[test]
fn applying_red_leaves_green_and_blue_alone() {
    let before = rgb_state();
    let before = store::apply(&before, Some("green"), 45).unwrap();
    let before = store::apply(&before, Some("blue"), 90).unwrap();

    let after = store::apply(&before, Some("red"), 20).unwrap();

    assert_eq!(after.get("green"), before.get("green"));
    assert_eq!(after.get("blue"), before.get("blue"));
    assert_eq!(store::read(&after, Some("red")).unwrap(), 20);
}

#[test]
fn apply_returns_distinct_snapshot() {
    let before = rgb_state();
    let snapshot = before.clone();

    let after = store::apply(&before, Some("red"), 20).unwrap();

    assert_eq!(before, snapshot);
    assert_ne!(after, before);
}

#[test]
fn unknown_channel_fails_without_touching_state() {
    let state = rgb_state();
    let snapshot = state.clone();

    let err = store::apply(&state, Some("purple"), 10).unwrap_err();

    assert_eq!(
        err,
        StoreError::UnknownChannel {
            name: Some("purple".to_string())
        }
    );
    assert_eq!(state, snapshot);
}

#[test]
fn read_unknown_channel_fails() {
    let err = store::read(&rgb_state(), Some("alpha")).unwrap_err();
    assert!(matches!(err, StoreError::UnknownChannel { .. }));
}

#[test]
fn initialize_rejects_initial_outside_bounds() {
    let err = store::initialize([ChannelSpec::bounded("blue", -1, 0, 255)]).unwrap_err();
    assert!(matches!(
        err,
        StoreError::InvalidInitialValue { ref name, value: -1, .. } if name == "blue"
    ));
}

#[test]
fn single_counter_scenario() {
    let state = store::initialize([ChannelSpec::unbounded("count", 0)]).unwrap();
    let state = store::apply(&state, None, 1).unwrap();
    let state = store::apply(&state, None, 1).unwrap();
    let state = store::apply(&state, None, 1).unwrap();
    let state = store::apply(&state, None, -1).unwrap();
    assert_eq!(store::read(&state, None).unwrap(), 2);
}

#[test]
fn rgb_scenario_clamps_thirteenth_press() {
    let mut state = rgb_state();
    for _ in 0..12 {
        state = store::apply(&state, Some("red"), 20).unwrap();
    }
    assert_eq!(store::read(&state, Some("red")).unwrap(), 240);

    let state = store::apply(&state, Some("red"), 20).unwrap();
    assert_eq!(store::read(&state, Some("red")).unwrap(), 255);
}

#[test]
fn store_reducer_dispatches_apply() {
    let state = rgb_state();
    let state = StoreReducer::reduce(
        &state,
        StoreIntent::Apply {
            channel: Some("blue".to_string()),
            delta: 15,
        },
    )
    .unwrap();
    assert_eq!(state.read(Some("blue")).unwrap(), 15);
}

fn spec_strategy() -> impl Strategy<Value = ChannelSpec> {
    (-1000i64..1000, 0i64..500)
        .prop_flat_map(|(min, width)| {
            let max = min + width;
            (Just(min), Just(max), min..=max)
        })
        .prop_map(|(min, max, initial)| ChannelSpec::bounded("ch", initial, min, max))
}

proptest! {
    #[test]
    fn bounded_values_never_leave_range(
        spec in spec_strategy(),
        deltas in proptest::collection::vec(any::<i64>(), 0..64),
    ) {
        let bounds: Bounds = spec.bounds;
        let mut state = CounterState::initialize([spec]).unwrap();
        for delta in deltas {
            state = state.apply(None, delta).unwrap();
            let value = state.read(None).unwrap();
            prop_assert!(bounds.contains(value), "{} escaped {}", value, bounds);
        }
    }

    #[test]
    fn untouched_channels_keep_their_values(
        deltas in proptest::collection::vec((0usize..3, -300i64..300), 0..64),
    ) {
        let names = ["red", "green", "blue"];
        let mut state = rgb_state();
        for (index, delta) in deltas {
            let next = state.apply(Some(names[index]), delta).unwrap();
            for (i, name) in names.iter().enumerate() {
                if i != index {
                    prop_assert_eq!(next.get(name), state.get(name));
                }
            }
            state = next;
        }
    }
}
