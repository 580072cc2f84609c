//! Dialogue session state machine.
//!
//! Owns everything a conversation needs: the active character, the
//! conversation history, the affection score, the presented options and the
//! transient effect bursts. Every backend turn is the same two-call
//! exchange: fetch the character's line, then fetch the options matching
//! that line. Backend failures never escape as errors; they collapse into a
//! fixed on-screen message with the options cleared.

use std::sync::Arc;

use tracing::{debug, warn};

use aikata_domain::{
    AffectionScore, CharacterProfile, ChoiceKind, ConversationTurn, DialogueChoice, DialogueState,
    EffectBurst, EffectInstance, GeoPosition,
};
use aikata_protocol::{ChoiceOptionsRequest, DialogueTurnRequest};

use crate::ports::{BackendError, ClockPort, DialogueBackendPort};

/// Shown when a dialogue action is attempted with no character selected.
pub const NO_CHARACTER_MESSAGE: &str = "キャラクターが選択されていません。";
/// Shown when the opening exchange fails.
pub const START_FAILED_MESSAGE: &str = "会話の開始に失敗しました。";
/// Shown when a mid-conversation exchange fails.
pub const NEXT_FAILED_MESSAGE: &str = "次の会話の取得に失敗しました。";
/// Greeting restored when the dialogue is reset.
pub const RESET_GREETING: &str = "やっほー！今日もお疲れ！";

/// Idle greetings, one picked at random when the session is created.
pub const INITIAL_GREETINGS: [&str; 3] = [
    "こんにちは！今日もお疲れさまです。",
    "おはようございます！今日も一日頑張りましょうね。",
    "お疲れさまでした！今日はどんな一日でしたか？",
];

/// RNG closure yielding unit values in `[0, 1)`.
///
/// Injected instead of depending on a random crate in the domain; effect
/// offsets and the initial-greeting pick both draw from it.
pub type UnitRng = Box<dyn FnMut() -> f32 + Send>;

pub struct DialogueSession {
    backend: Arc<dyn DialogueBackendPort>,
    clock: Arc<dyn ClockPort>,
    unit_rng: UnitRng,
    character: Option<CharacterProfile>,
    position: Option<GeoPosition>,
    state: DialogueState,
    dialogue_mode: bool,
    loading: bool,
    message: String,
    options: Vec<DialogueChoice>,
    history: Vec<ConversationTurn>,
    affection: AffectionScore,
    effects: Vec<EffectBurst>,
}

impl DialogueSession {
    pub fn new(
        backend: Arc<dyn DialogueBackendPort>,
        clock: Arc<dyn ClockPort>,
        mut unit_rng: UnitRng,
    ) -> Self {
        let pick = (unit_rng() * INITIAL_GREETINGS.len() as f32) as usize;
        let message = INITIAL_GREETINGS[pick.min(INITIAL_GREETINGS.len() - 1)].to_string();
        Self {
            backend,
            clock,
            unit_rng,
            character: None,
            position: None,
            state: DialogueState::Idle,
            dialogue_mode: false,
            loading: false,
            message,
            options: Vec::new(),
            history: Vec::new(),
            affection: AffectionScore::default(),
            effects: Vec::new(),
        }
    }

    /// Make `profile` the active character and reset the conversation.
    pub fn activate(&mut self, profile: CharacterProfile) {
        debug!(character_id = %profile.id, "activating character");
        self.character = Some(profile);
        self.reset();
    }

    /// Update the position sent alongside dialogue requests.
    pub fn set_position(&mut self, position: Option<GeoPosition>) {
        self.position = position;
    }

    /// Enter dialogue mode and run the opening exchange.
    ///
    /// With no active character this is a no-op apart from the on-screen
    /// message; no request leaves the client.
    pub async fn start(&mut self) {
        let Some(character) = self.character.clone() else {
            self.message = NO_CHARACTER_MESSAGE.to_string();
            return;
        };
        self.loading = true;
        self.dialogue_mode = true;
        self.history.clear();
        self.options.clear();
        self.state = DialogueState::AwaitingCharacterTurn;

        let request = self.turn_request(&character, String::new());
        if let Err(e) = self.run_exchange(request).await {
            warn!(error = %e, "opening exchange failed");
            self.message = START_FAILED_MESSAGE.to_string();
            self.options.clear();
            self.state = DialogueState::ErrorRecovered;
        }
        self.loading = false;
    }

    /// Apply the user's chosen option and run the next exchange.
    ///
    /// The affection delta, the effect burst and the history entry are all
    /// applied before the request is built, so the backend sees the updated
    /// affection and the turn being responded to.
    pub async fn select_option(&mut self, choice: DialogueChoice) {
        if !self.dialogue_mode {
            return;
        }
        let Some(character) = self.character.clone() else {
            self.message = NO_CHARACTER_MESSAGE.to_string();
            return;
        };
        self.loading = true;
        self.affection = self.affection.apply(choice.kind.affection_delta());
        self.spawn_effects(choice.kind);
        self.history
            .push(ConversationTurn::new(choice.text.clone(), self.message.clone()));
        self.options.clear();
        self.state = DialogueState::AwaitingCharacterTurn;

        let request = self.turn_request(&character, choice.text);
        if let Err(e) = self.run_exchange(request).await {
            warn!(error = %e, "dialogue exchange failed");
            self.message = NEXT_FAILED_MESSAGE.to_string();
            self.options.clear();
            self.state = DialogueState::ErrorRecovered;
        }
        self.loading = false;
    }

    /// Leave dialogue mode and restore the idle greeting.
    pub fn reset(&mut self) {
        self.dialogue_mode = false;
        self.loading = false;
        self.history.clear();
        self.options.clear();
        self.message = RESET_GREETING.to_string();
        self.affection = AffectionScore::INITIAL;
        self.state = DialogueState::Idle;
    }

    /// The two-call exchange shared by `start` and `select_option`.
    async fn run_exchange(&mut self, request: DialogueTurnRequest) -> Result<(), BackendError> {
        let message = self.backend.character_turn(request.clone()).await?;
        self.message = message.clone();
        self.state = DialogueState::AwaitingOptions;

        let options_request = ChoiceOptionsRequest::following(request, message);
        let options = self.backend.choice_options(options_request).await?;
        self.options = options;
        self.state = DialogueState::PresentingOptions;
        Ok(())
    }

    fn turn_request(&self, character: &CharacterProfile, user_choice: String) -> DialogueTurnRequest {
        DialogueTurnRequest {
            character_id: character.id.clone(),
            user_choice,
            conversation_history: self.history.clone(),
            lat: self.position.map(|p| p.latitude),
            lon: self.position.map(|p| p.longitude),
            affection_level: self.affection.value(),
        }
    }

    fn spawn_effects(&mut self, kind: ChoiceKind) {
        let now = self.clock.now();
        self.effects.retain(|burst| !burst.is_expired(now));
        let burst = EffectBurst::spawn(kind, now, self.unit_rng.as_mut());
        self.effects.push(burst);
    }

    // ---- read accessors -------------------------------------------------

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn options(&self) -> &[DialogueChoice] {
        &self.options
    }

    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    pub fn affection(&self) -> AffectionScore {
        self.affection
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn in_dialogue(&self) -> bool {
        self.dialogue_mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn character(&self) -> Option<&CharacterProfile> {
        self.character.as_ref()
    }

    /// Effect instances still alive at the injected clock's current time.
    pub fn active_effects(&self) -> Vec<&EffectInstance> {
        let now = self.clock.now();
        self.effects
            .iter()
            .filter(|burst| !burst.is_expired(now))
            .flat_map(|burst| burst.instances().iter())
            .collect()
    }
}

#[cfg(test)]
impl DialogueSession {
    /// Test hook: force an affection score mid-session.
    pub(crate) fn force_affection(&mut self, value: u8) {
        self.affection = AffectionScore::new(value);
    }
}
