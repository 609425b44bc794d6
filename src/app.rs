//! Driving loop for one play session.

use std::io::{BufRead, Write};

use crate::error::PlayError;
use crate::maker::{BridgeMaker, NumberGenerator};
use crate::state::{BridgeGame, GameStatus};
use crate::view::InputView;

/// Play one full session: ask for a size, build the bridge, then take moves
/// until the player crosses or gives up.
///
/// A winning move quits the game by itself, so `quit` is only called here
/// when the player declines to retry.
pub fn play<G, R, W>(
    game: &mut BridgeGame,
    maker: &mut BridgeMaker<G>,
    input: &mut InputView<R, W>,
) -> Result<(), PlayError>
where
    G: NumberGenerator,
    R: BufRead,
    W: Write,
{
    let size = input.ask_bridge_size()?;
    let bridge = maker.make_bridge(size)?;
    game.start(bridge)?;

    loop {
        while game.running() {
            game.move_to(input.ask_move()?)?;
        }

        if game.status() == GameStatus::Finished {
            break;
        }

        if input.ask_retry()? {
            game.retry()?;
        } else {
            game.quit()?;
            break;
        }
    }

    tracing::debug!("session over");
    Ok(())
}
