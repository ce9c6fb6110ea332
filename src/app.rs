use dioxus::prelude::*;
use lovenote_core::effects::ParallaxOffset;
use lovenote_core::{Screen, UnlockGate};

use crate::context::{BurstTrigger, LetterOpen};
use crate::pages::{Finale, Intro, Quiz, Story};
use crate::theme::GLOBAL_STYLES;

/// Application routes, one per screen of the card.
///
/// - `/` - Intro hero
/// - `/story` - Timeline of story moments
/// - `/quiz` - Memory quiz and letter vault
/// - `/finale` - Closing view
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Intro {},
    #[route("/story")]
    Story {},
    #[route("/quiz")]
    Quiz {},
    #[route("/finale")]
    Finale {},
}

impl Route {
    /// The route rendering the given screen
    pub fn for_screen(screen: Screen) -> Route {
        match screen {
            Screen::Intro => Route::Intro {},
            Screen::Story => Route::Story {},
            Screen::Quiz => Route::Quiz {},
            Screen::Finale => Route::Finale {},
        }
    }

    /// The screen this route renders
    pub fn screen(&self) -> Screen {
        match self {
            Route::Intro {} => Screen::Intro,
            Route::Story {} => Screen::Story,
            Route::Quiz {} => Screen::Quiz,
            Route::Finale {} => Screen::Finale,
        }
    }
}

/// Root application component.
///
/// Provides global styles and the cross-screen state (unlock gate, burst
/// trigger, letter-modal flag), then hands off to the router. State is
/// created fresh on every launch; nothing persists across sessions.
#[component]
pub fn App() -> Element {
    let gate: Signal<UnlockGate> = use_signal(UnlockGate::new);
    let burst: Signal<BurstTrigger> = use_signal(BurstTrigger::default);
    let letter_open: Signal<LetterOpen> = use_signal(LetterOpen::default);
    let parallax: Signal<ParallaxOffset> = use_signal(ParallaxOffset::default);

    use_context_provider(|| gate);
    use_context_provider(|| burst);
    use_context_provider(|| letter_open);
    use_context_provider(|| parallax);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_and_screens_are_a_bijection() {
        for screen in Screen::all() {
            assert_eq!(Route::for_screen(screen).screen(), screen);
        }
    }
}
