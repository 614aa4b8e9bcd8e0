//! The read-dispatch-render loop.
//!
//! Generic over the input, output and random source so whole sessions can be
//! scripted in tests.

use super::game_state::GameState;
use crate::combat::{fight, OpponentKind};
use crate::error::GameError;
use crate::items::{buy_from, use_item, Catalog, Shop};
use crate::ui::{text, Console};
use crate::world::{hunt, travel, Action, Location};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";

/// Why a session stopped. All of these are normal endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Defeated,
    Victory,
    InputClosed,
}

/// What the loop should do after handling one action.
enum Flow {
    Continue,
    Stop(SessionEnd),
}

/// Asks for the player's name. Blank answers fall back to a default.
pub fn read_player_name<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<String> {
    let answer = console.ask("Enter your name, adventurer: ")?;
    let name = answer
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PLAYER_NAME);
    Ok(name.to_string())
}

/// Runs one session to completion.
pub fn run<R: BufRead, W: Write>(
    state: &mut GameState,
    catalog: &Catalog,
    console: &mut Console<R, W>,
    rng: &mut impl Rng,
) -> io::Result<SessionEnd> {
    console.say_all(&text::welcome(state))?;

    loop {
        if let Some(end) = check_terminal(state, console)? {
            info!(?end, "session over");
            return Ok(end);
        }

        console.say_all(&text::location_view(state))?;
        let menu = state.location().menu();
        let Some(index) = console.choose(menu.len(), &text::choice_prompt(menu.len()))? else {
            console.say(&text::farewell(state))?;
            return Ok(SessionEnd::InputClosed);
        };
        let Some(action) = state.location().action(index) else {
            continue;
        };

        if let Flow::Stop(end) = dispatch(state, catalog, console, rng, action)? {
            if end == SessionEnd::InputClosed {
                console.say(&text::farewell(state))?;
            }
            info!(?end, "session over");
            return Ok(end);
        }
    }
}

/// Location-agnostic end check, run after every action.
fn check_terminal<R: BufRead, W: Write>(
    state: &GameState,
    console: &mut Console<R, W>,
) -> io::Result<Option<SessionEnd>> {
    if !state.is_over() {
        return Ok(None);
    }
    if state.is_defeated() {
        console.say_all(&text::defeat(state))?;
        return Ok(Some(SessionEnd::Defeated));
    }
    console.say_all(&text::victory(state))?;
    Ok(Some(SessionEnd::Victory))
}

fn dispatch<R: BufRead, W: Write>(
    state: &mut GameState,
    catalog: &Catalog,
    console: &mut Console<R, W>,
    rng: &mut impl Rng,
    action: Action,
) -> io::Result<Flow> {
    match action {
        Action::Travel(to) => match travel(state, to, rng) {
            Ok(outcome) => console.say_all(&text::travelled(&outcome))?,
            Err(err) => report_error(console, &err)?,
        },
        Action::Browse(shop) => return browse(state, catalog, console, shop),
        Action::Hunt => {
            let report = hunt(state, rng);
            console.say_all(&text::combat(&report))?;
            if state.location() == Location::Village && state.player.is_alive() {
                console.say("You make your way back to the village.")?;
            }
        }
        Action::FightDragon => {
            let report = fight(state, OpponentKind::Dragon, rng);
            console.say_all(&text::combat(&report))?;
        }
        Action::Status => console.say_all(&text::status(state))?,
        Action::UseItem => return choose_item(state, console),
        Action::Help => console.say_all(&text::help(state.location()))?,
        Action::Quit => {
            console.say(&text::farewell(state))?;
            return Ok(Flow::Stop(SessionEnd::Quit));
        }
    }
    Ok(Flow::Continue)
}

fn browse<R: BufRead, W: Write>(
    state: &mut GameState,
    catalog: &Catalog,
    console: &mut Console<R, W>,
    shop: Shop,
) -> io::Result<Flow> {
    let stock = catalog.stock(shop);
    if stock.is_empty() {
        report_error(
            console,
            &GameError::EmptySelection("There is nothing for sale here."),
        )?;
        return Ok(Flow::Continue);
    }

    console.say_all(&text::shop_listing(
        state.location(),
        stock,
        state.player.gold(),
    ))?;
    let options = stock.len() + 1;
    let Some(index) = console.choose(options, &text::choice_prompt(options))? else {
        return Ok(Flow::Stop(SessionEnd::InputClosed));
    };
    if index == stock.len() {
        return Ok(Flow::Continue);
    }

    match buy_from(state, catalog, shop, index) {
        Ok(item) => console.say(&text::purchased(&item, state))?,
        Err(err) => report_error(console, &err)?,
    }
    Ok(Flow::Continue)
}

fn choose_item<R: BufRead, W: Write>(
    state: &mut GameState,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    if state.inventory.is_empty() {
        report_error(console, &GameError::EmptySelection("Your inventory is empty."))?;
        return Ok(Flow::Continue);
    }

    console.say_all(&text::inventory_listing(&state.inventory))?;
    let options = state.inventory.len() + 1;
    let Some(index) = console.choose(options, &text::choice_prompt(options))? else {
        return Ok(Flow::Stop(SessionEnd::InputClosed));
    };
    if index == state.inventory.len() {
        return Ok(Flow::Continue);
    }

    match use_item(state, index) {
        Ok(outcome) => console.say(&text::item_used(&outcome))?,
        Err(err) => report_error(console, &err)?,
    }
    Ok(Flow::Continue)
}

fn report_error<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &GameError,
) -> io::Result<()> {
    console.say(&err.to_string())
}
