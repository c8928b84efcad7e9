use crate::battle::rng::RandomSource;
use crate::battle::state::BattleEvent;
use crate::config::BattleConfig;
use crate::errors::{ActionError, BattleResult};
use crate::interface::{EventSink, InputSource, Reply};

/// Everything a trainer may consult while deciding a turn.
pub struct TurnContext<'a> {
    pub input: &'a mut dyn InputSource,
    pub rng: &'a mut dyn RandomSource,
    pub sink: &'a mut dyn EventSink,
    pub config: &'a BattleConfig,
}

impl<'a> TurnContext<'a> {
    pub fn new(
        input: &'a mut dyn InputSource,
        rng: &'a mut dyn RandomSource,
        sink: &'a mut dyn EventSink,
        config: &'a BattleConfig,
    ) -> Self {
        Self {
            input,
            rng,
            sink,
            config,
        }
    }

    pub fn emit(&mut self, event: BattleEvent) {
        self.sink.emit(&event);
    }

    /// Ask the input collaborator to pick one of `options`, re-prompting on
    /// out-of-range or unreadable replies. `max_prompt_attempts` of 0 never gives up.
    pub fn choose(&mut self, prompt: &str, options: &[String]) -> BattleResult<usize> {
        let limit = self.config.max_prompt_attempts;
        let mut attempts = 0;
        while limit == 0 || attempts < limit {
            attempts += 1;
            let reply = match self.input.request_choice(prompt, options) {
                Reply::Index(index) if index < options.len() => return Ok(index),
                Reply::Index(index) => (index + 1).to_string(),
                Reply::Unrecognized(text) => text,
                Reply::Closed => return Err(ActionError::InputClosed.into()),
            };
            tracing::warn!(prompt, reply = %reply, "invalid choice");
            self.emit(BattleEvent::InvalidChoice {
                prompt: prompt.to_string(),
                reply,
            });
        }

        Err(ActionError::TooManyInvalidChoices {
            prompt: prompt.to_string(),
        }
        .into())
    }
}
