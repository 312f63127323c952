use blackjack::{Prompt, PromptReply};
use std::io::{self, BufRead, BufReader, Stdin};
use std::thread;
use std::time::Duration;

/// Stdin-backed yes/no prompt. Echoes the question, matches answers
/// case-insensitively and pauses briefly after rejecting malformed
/// input so the correction stays readable.
pub struct LinePrompt<R> {
    input: R,
    retry_pause: Duration,
}

impl LinePrompt<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self {
            input: BufReader::new(io::stdin()),
            retry_pause: Duration::from_secs(1),
        }
    }
}

#[cfg(test)]
impl<R: BufRead> LinePrompt<R> {
    fn with_reader(input: R) -> Self {
        Self {
            input,
            retry_pause: Duration::ZERO,
        }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask_yes_no(&mut self, question: &str, yes: &str, no: &str, max_retries: u32) -> PromptReply {
        for _ in 0..max_retries {
            println!("{question}");
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    // Stdin closed; nothing more will ever match.
                    log::error!("Input stream closed while waiting for an answer");
                    return PromptReply::Error;
                }
                Ok(_) => {}
                Err(err) => {
                    log::error!("Failed to read input: {err}");
                    return PromptReply::Error;
                }
            }

            let answer = line.trim();
            if answer.eq_ignore_ascii_case(yes) {
                return PromptReply::Continue;
            }
            if answer.eq_ignore_ascii_case(no) {
                return PromptReply::Exit;
            }

            log::info!("Unrecognized input, only '{yes}' or '{no}' are accepted");
            thread::sleep(self.retry_pause);
        }

        log::error!("No valid answer after {max_retries} attempts");
        PromptReply::Error
    }
}
