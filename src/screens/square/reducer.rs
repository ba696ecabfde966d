use tracing::debug;

use crate::mvi::Reducer;
use crate::store::{StoreError, StoreIntent, StoreReducer};

use super::intent::MixerIntent;
use super::state::MixerState;

/// Reducer for the RGB mixer.
///
/// Out-of-range results are absorbed by the channel bounds, never rejected.
pub struct MixerReducer;

impl Reducer for MixerReducer {
    type State = MixerState;
    type Intent = MixerIntent;
    type Error = StoreError;

    fn reduce(state: &Self::State, intent: Self::Intent) -> Result<Self::State, Self::Error> {
        match intent {
            MixerIntent::Change { color, direction } => {
                let delta = direction.delta(state.step);
                debug!(color = color.channel(), delta, "Mixer press");

                let channels = StoreReducer::reduce(
                    &state.channels,
                    StoreIntent::Apply {
                        channel: Some(color.channel().to_string()),
                        delta,
                    },
                )?;
                Ok(MixerState {
                    step: state.step,
                    channels,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::color::{Color, Rgb};
    use crate::screens::square::DEFAULT_COLOR_STEP;

    fn press(state: MixerState, intent: MixerIntent, times: usize) -> MixerState {
        (0..times).fold(state, |s, _| MixerReducer::reduce(&s, intent).unwrap())
    }

    #[test]
    fn increase_moves_by_step() {
        let state = MixerState::new(DEFAULT_COLOR_STEP).unwrap();
        let state = MixerReducer::reduce(&state, MixerIntent::increase(Color::Red)).unwrap();
        assert_eq!(state.value(Color::Red), 15);
    }

    #[test]
    fn increase_clamps_at_255() {
        let state = MixerState::new(DEFAULT_COLOR_STEP).unwrap();
        // 18 * 15 = 270
        let state = press(state, MixerIntent::increase(Color::Green), 18);
        assert_eq!(state.value(Color::Green), 255);
    }

    #[test]
    fn decrease_clamps_at_zero() {
        let state = MixerState::new(DEFAULT_COLOR_STEP).unwrap();
        let state = MixerReducer::reduce(&state, MixerIntent::decrease(Color::Blue)).unwrap();
        assert_eq!(state.value(Color::Blue), 0);
    }

    #[test]
    fn other_channels_are_unaffected() {
        let state = MixerState::new(DEFAULT_COLOR_STEP).unwrap();
        let state = press(state, MixerIntent::increase(Color::Blue), 2);
        let state = MixerReducer::reduce(&state, MixerIntent::increase(Color::Red)).unwrap();
        assert_eq!(state.rgb(), Rgb::new(15, 0, 30));
    }
}
