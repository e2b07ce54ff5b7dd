//! Console text templates
//!
//! Pure formatting over `&mut dyn Write`: banners, menus, prompts and
//! the stats block. No game decisions are made here; the state machine
//! hands over the values and this module renders them.

use core::fmt::Write;

use crate::error::GameError;
use crate::game::GameState;

/// Welcome banner shown once at startup.
pub fn welcome(out: &mut dyn Write) {
    let _ = writeln!(out, r" __  __  ___  ____  ____  _____ ");
    let _ = writeln!(out, r"|  \/  |/ _ \|  _ \/ ___|| ____|");
    let _ = writeln!(out, r"| |\/| | | | | |_) \___ \|  _|  ");
    let _ = writeln!(out, r"| |  | | |_| |  _ < ___) | |___ ");
    let _ = writeln!(out, r"|_|  |_|\___/|_| \_\____/|_____|");
    let _ = writeln!(out, r" _____ ____      _    ___ _   _ _____ ____  ");
    let _ = writeln!(out, r"|_   _|  _ \    / \  |_ _| \ | | ____|  _ \ ");
    let _ = writeln!(out, r"  | | | |_) |  / _ \  | || \| |  _| | |_) |");
    let _ = writeln!(out, r"  | | |  _ <  / ___ \ | || |\  | |___|  _ < ");
    let _ = writeln!(out, r"  |_| |_| \_\/_/   \_\___|_| \_|_____|_| \_\");
    let _ = writeln!(out);
    let _ = writeln!(out, "       WELCOME TO THE MORSE CODE TRAINER!");
    let _ = writeln!(out);
}

/// How-to-play text.
pub fn instructions(out: &mut dyn Write) {
    let _ = writeln!(out, "                 HOW TO PLAY");
    let _ = writeln!(out, "Key the correct Morse code sequence on the button.");
    let _ = writeln!(out, "There are 4 levels - each level is 5 correct answers!");
    let _ = writeln!(out, "You have 3 lives before the level is over.");
    let _ = writeln!(out);
    let _ = writeln!(out, "1. For a dot (.), hold the button < 0.25s");
    let _ = writeln!(out, "2. For a dash (-), hold the button >= 0.25s");
    let _ = writeln!(out, "3. For a letter gap, leave the button up for 1s");
    let _ = writeln!(out, "4. To submit, leave the button up for 2s");
    let _ = writeln!(out);
}

/// Level select menu.
pub fn level_menu(out: &mut dyn Write) {
    let _ = writeln!(out, "  *******************************");
    let _ = writeln!(out, "  *                             *");
    let _ = writeln!(out, "  * Enter .---- for Level 1     *");
    let _ = writeln!(out, "  * Enter ..--- for Level 2     *");
    let _ = writeln!(out, "  * Enter ...-- for Level 3     *");
    let _ = writeln!(out, "  * Enter ....- for Level 4     *");
    let _ = writeln!(out, "  * Enter ..... to quit         *");
    let _ = writeln!(out, "  *                             *");
    let _ = writeln!(out, "  *******************************");
}

/// Play-again menu shown after a level ends.
pub fn result_menu(out: &mut dyn Write) {
    let _ = writeln!(out, "  *****************************");
    let _ = writeln!(out, "  *                           *");
    let _ = writeln!(out, "  * Enter .---- to play again *");
    let _ = writeln!(out, "  * Enter ..--- to exit       *");
    let _ = writeln!(out, "  *                           *");
    let _ = writeln!(out, "  *****************************");
}

/// Challenge prompt for one round.
///
/// The answer code is shown only on the show-answer levels; elsewhere
/// `answer` is `None`.
pub fn round_prompt(out: &mut dyn Write, label: &str, answer: Option<&str>) {
    let _ = writeln!(out);
    match answer {
        Some(code) => {
            let _ = writeln!(out, "Key the code for: {}   ({})", label, code);
        }
        None => {
            let _ = writeln!(out, "Key the code for: {}", label);
        }
    }
}

/// Feedback for a correct answer.
pub fn report_correct(out: &mut dyn Write, remaining: u8) {
    let _ = writeln!(out, "Correct! {} to go.", remaining);
}

/// Feedback for a wrong answer: what the player actually keyed and
/// what the round wanted.
pub fn report_incorrect(out: &mut dyn Write, decoded: &str, answer: &str, code: &str, lives: u8) {
    let _ = writeln!(out, "Wrong! You keyed: {}", decoded);
    let _ = writeln!(out, "The answer was: {}   ({})", answer, code);
    let _ = writeln!(out, "Lives left: {}", lives);
}

/// Session statistics block, printed when a level ends.
pub fn stats(out: &mut dyn Write, state: &GameState, won: bool) {
    let _ = writeln!(out);
    let _ = writeln!(out, "  ***************STATS***************");
    if won {
        let _ = writeln!(out, "  *  LEVEL COMPLETE                 *");
    } else {
        let _ = writeln!(out, "  *  GAME OVER                      *");
    }
    let _ = writeln!(out, "  *  Attempts:   {:<18}*", state.right + state.wrong);
    let _ = writeln!(out, "  *  Correct:    {:<18}*", state.right);
    let _ = writeln!(out, "  *  Incorrect:  {:<18}*", state.wrong);
    // Accuracy is undefined with zero attempts and simply not shown.
    if let Some(accuracy) = state.accuracy() {
        let _ = writeln!(out, "  *  Accuracy:   {:<17.2}%*", accuracy);
    }
    let _ = writeln!(out, "  *  Win streak: {:<18}*", state.streak);
    let _ = writeln!(out, "  *  Lives left: {:<18}*", state.lives);
    let _ = writeln!(out, "  ***********************************");
    let _ = writeln!(out);
}

/// Session exit message.
pub fn goodbye(out: &mut dyn Write) {
    let _ = writeln!(out, "Thanks for playing. 73!");
}

/// Recoverable error report; the player is re-prompted afterwards.
pub fn report_error(out: &mut dyn Write, error: GameError) {
    let _ = writeln!(out, "Error {}", error);
}
