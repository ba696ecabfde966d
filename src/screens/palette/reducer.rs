use std::convert::Infallible;

use tracing::debug;

use crate::mvi::Reducer;

use super::intent::PaletteIntent;
use super::state::PaletteState;

pub struct PaletteReducer;

impl Reducer for PaletteReducer {
    type State = PaletteState;
    type Intent = PaletteIntent;
    type Error = Infallible;

    fn reduce(state: &Self::State, intent: Self::Intent) -> Result<Self::State, Self::Error> {
        match intent {
            PaletteIntent::AddColor(rgb) => {
                debug!(color = %rgb, "Palette add");
                let mut colors = state.colors.clone();
                colors.push(rgb);
                Ok(PaletteState { colors })
            }
        }
    }
}
