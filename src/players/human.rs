use crate::Chips;
use crate::EPSILON;
use crate::cards::Hole;
use crate::gameplay::Action;
use crate::gameplay::HandState;
use crate::gameplay::Seat;
use crate::gameplay::Stacks;
use crate::gameplay::pot_odds;
use dialoguer::Input;
use dialoguer::Select;

/// The hero at the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Human;

impl Human {
    /// Prompts for a decision, offering only the actions that are legal.
    pub fn act(&self, state: &HandState, stacks: &Stacks, seat: Seat, hole: Hole) -> anyhow::Result<Action> {
        let to_call = state.to_call(seat);
        let stack = stacks.get(seat)?;
        let choices = match (to_call > EPSILON, state.current_bet() > EPSILON) {
            (true, _) => vec!["Fold", "Call", "Raise"],
            (false, true) => vec!["Check", "Raise", "Fold"],
            (false, false) => vec!["Check", "Bet", "Fold"],
        };
        let prompt = match to_call > EPSILON {
            true => format!(
                "YOU HOLD {} | {:.1} to call into {:.1} (pot odds {:.1}%)",
                hole,
                to_call,
                state.pot(),
                pot_odds(to_call, state.pot()) * 100.0
            ),
            false => format!("YOU HOLD {} | pot {:.1}", hole, state.pot()),
        };
        let selection = Select::new()
            .with_prompt(prompt)
            .report(false)
            .items(choices.as_slice())
            .default(0)
            .interact()?;
        match choices[selection] {
            "Fold" => Ok(Action::Fold),
            "Check" => Ok(Action::Check),
            "Call" => Ok(Action::Call),
            "Bet" => Ok(Action::Bet(self.amount("Bet", 1.0, stack)?)),
            "Raise" => Ok(Action::Raise(self.amount(
                "Raise to",
                state.min_raise_to(),
                state.contributed(seat) + stack,
            )?)),
            _ => unreachable!(),
        }
    }
    fn amount(&self, prompt: &str, min: Chips, max: Chips) -> anyhow::Result<Chips> {
        let input = Input::<String>::new()
            .with_prompt(format!("{} ({:.1} - {:.1})", prompt, min.min(max), max))
            .report(false)
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.trim().parse::<Chips>() {
                    Ok(n) if n.is_finite() && n > 0.0 => Ok(()),
                    _ => Err("Enter a positive NUMBER"),
                }
            })
            .interact_text()?;
        Ok(input.trim().parse::<Chips>()?)
    }
}
