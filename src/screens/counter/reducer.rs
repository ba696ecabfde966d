use tracing::debug;

use crate::mvi::Reducer;
use crate::store::{StoreError, StoreIntent, StoreReducer};

use super::intent::CounterIntent;
use super::state::{CounterScreenState, COUNT_CHANNEL};

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterScreenState;
    type Intent = CounterIntent;
    type Error = StoreError;

    fn reduce(state: &Self::State, intent: Self::Intent) -> Result<Self::State, Self::Error> {
        let delta = match intent {
            CounterIntent::Increment => state.step,
            CounterIntent::Decrement => state.step.saturating_neg(),
        };
        debug!(?intent, delta, "Counter press");

        let counter = StoreReducer::reduce(
            &state.counter,
            StoreIntent::Apply {
                channel: Some(COUNT_CHANNEL.to_string()),
                delta,
            },
        )?;
        Ok(CounterScreenState {
            step: state.step,
            counter,
        })
    }
}
