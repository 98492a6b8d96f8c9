use serde::Serialize;
use std::fmt::{Display, Formatter};

/// The three screens of the registration, in the order they are reached.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Key,
    Form,
    Result,
}

impl Step {
    /// Whether the registration may go straight from `self` to `next`.
    pub fn can_move_to(&self, next: Step) -> bool {
        matches!(
            (self, next),
            (Step::Key, Step::Form)
                | (Step::Key, Step::Result)
                | (Step::Form, Step::Result)
                | (Step::Result, Step::Key)
        )
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            Step::Key => "key",
            Step::Form => "form",
            Step::Result => "result",
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.template_name())
    }
}
