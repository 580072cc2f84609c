mod backdrop_service;
mod character_service;
mod dialogue_session;
mod wall_clock;

pub use backdrop_service::{BackdropService, BackdropSnapshot, RefreshOutcome, PROBE_HEADINGS};
pub use character_service::{CharacterService, RouteSelection};
pub use dialogue_session::{
    DialogueSession, UnitRng, INITIAL_GREETINGS, NEXT_FAILED_MESSAGE, NO_CHARACTER_MESSAGE,
    RESET_GREETING, START_FAILED_MESSAGE,
};
pub use wall_clock::WallClock;
