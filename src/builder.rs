use crate::engine::{ChoiceEngine, Strategy};
use crate::error::SelectionError;
use crate::path::Path;
use crate::selector::check_budget;

/// Validating builder for [`ChoiceEngine`].
///
/// Unlike [`ChoiceEngine::new`], an oversized budget is reported as an error
/// rather than a panic.
pub struct ChoiceEngineBuilder<'p> {
    path: &'p Path,
    n_choices: usize,
    strategy: Option<Strategy>,
}

impl<'p> ChoiceEngineBuilder<'p> {
    pub fn new(path: &'p Path) -> Self {
        Self {
            path,
            n_choices: 0,
            strategy: None,
        }
    }
    pub fn with_choices(mut self, n_choices: usize) -> Self {
        self.n_choices = n_choices;
        self
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn build(self) -> Result<ChoiceEngine<'p>, SelectionError> {
        check_budget(self.n_choices, self.path.len())?;
        let strategy = match self.strategy {
            Some(s) => s,
            None => default_strategy(self.path.len()),
        };
        Ok(ChoiceEngine::with_strategy(self.path, self.n_choices, strategy))
    }
}

/// Path length above which the builder prefers the layered strategy when no
/// strategy is given.
pub const LAYERED_THRESHOLD: usize = 2048;

fn default_strategy(path_len: usize) -> Strategy {
    if path_len > LAYERED_THRESHOLD {
        Strategy::Layered
    } else {
        Strategy::Memoized
    }
}
