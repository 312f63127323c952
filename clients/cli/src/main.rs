mod prompt;
mod rng;

use blackjack::{Prompt, PromptReply, Table, TableRules};
use clap::Parser;
use prompt::LinePrompt;

const RULES_HELP: &str = "\
House rules:
  - Dealer hits on soft 17 and stands on hard 17 or higher.
  - The dealer wins score ties, including 21 against 21.
  - A natural (face card plus Ace) beats a non-natural 21.
  - If both sides hold a natural, the hand is a push.
  - The deck is reshuffled every 6 completed hands.";

#[derive(Parser)]
#[command(
    name = "blackjack",
    about = "A console blackjack game with one player and a dealer",
    after_help = RULES_HELP
)]
struct Cli {}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .format_timestamp(None)
        .init();

    let _cli = Cli::parse();

    log::info!("**** Welcome to virtual blackjack! Get ready to start ****");

    let mut table = Table::new(TableRules::interactive(), rng::session_rng());
    let mut prompt = LinePrompt::stdin();

    loop {
        table.play_hand(&mut prompt);
        log::info!("{}", table.stats.report());

        let question = "Continue game? Enter 'Y' to play another hand or 'N' to exit";
        match prompt.ask_yes_no(question, "Y", "N", table.rules.max_input_retries) {
            PromptReply::Continue => log::info!("Get ready to play the next hand"),
            PromptReply::Exit | PromptReply::Error => {
                log::info!("Exiting game");
                break;
            }
        }
    }
}
