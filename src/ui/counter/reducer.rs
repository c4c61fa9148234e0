use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Unbounded by contract; wrap instead of panicking at the i64 edges.
        let value = match intent {
            CounterIntent::Increment => state.value.wrapping_add(1),
            CounterIntent::Decrement => state.value.wrapping_sub(1),
            CounterIntent::Reset => 0,
        };
        CounterState { value }
    }
}
