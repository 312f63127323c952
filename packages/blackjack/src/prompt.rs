use serde::{Deserialize, Serialize};

/// Three-way result of a yes/no question put to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptReply {
    /// Answer matched the yes token.
    Continue,
    /// Answer matched the no token.
    Exit,
    /// No recognizable answer within the retry ceiling.
    Error,
}

/// Player input collaborator. The rule engine asks its hit/stand
/// question through this seam; the console client reads stdin, tests
/// script the answers.
pub trait Prompt {
    /// Ask `question` until the answer matches `yes` or `no`
    /// (case-insensitive), giving up after `max_retries` malformed
    /// answers.
    fn ask_yes_no(&mut self, question: &str, yes: &str, no: &str, max_retries: u32) -> PromptReply;
}
