//! Game controller
//!
//! Owns the territory store, the player, the active mission and the random
//! generator for one session, and runs the menu loop over a console.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::combat;
use crate::console::Console;
use crate::core::config::GameConfig;
use crate::core::error::{Result, WarError};
use crate::core::types::{ArmyColor, Side, TerritoryId};
use crate::game::menu::{print_menu, MenuChoice};
use crate::map;
use crate::mission::{self, Mission, Player};
use crate::territory::TerritoryStore;

/// What the loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Victory,
    Exit,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The player chose Exit
    Exit,
    /// The active mission was fulfilled
    Victory,
    /// Input ran out before the player exited
    InputClosed,
}

pub struct Game<G> {
    config: GameConfig,
    store: TerritoryStore,
    player: Player,
    mission: Option<Mission>,
    fallback_enemy: ArmyColor,
    rng: G,
}

impl<G: Rng> Game<G> {
    /// Validate the configuration and allocate an unregistered map
    pub fn new(config: GameConfig, rng: G) -> Result<Self> {
        config.validate()?;
        let store = TerritoryStore::allocate(config.territory_count)?;
        Self::with_store(config, store, rng)
    }

    /// Start from an existing map. Home territories are recorded
    /// immediately.
    pub fn with_store(config: GameConfig, store: TerritoryStore, rng: G) -> Result<Self> {
        config.validate()?;
        let mut player = Player::new(config.player_army()?);
        player.record_home(&store);
        let fallback_enemy = config.enemy_army()?;

        Ok(Self {
            config,
            store,
            player,
            mission: None,
            fallback_enemy,
            rng,
        })
    }

    pub fn store(&self) -> &TerritoryStore {
        &self.store
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn mission(&self) -> Option<&Mission> {
        self.mission.as_ref()
    }

    /// Replace the active mission
    pub fn set_mission(&mut self, mission: Mission) {
        self.mission = Some(mission);
    }

    /// End the session and release the map
    pub fn finish(self) {
        self.store.release();
    }

    /// Run the menu loop until the player exits, wins, or input runs out
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<GameEnd> {
        tracing::info!(
            territories = self.store.len(),
            player = %self.player.color,
            "game started"
        );

        loop {
            let mission_text = self.mission.as_ref().map(Mission::describe);
            print_menu(console.out(), mission_text.as_deref())?;

            let answer = console
                .prompt("Choose an option: ")
                .and_then(|answer| MenuChoice::parse(&answer));
            let choice = match answer {
                Ok(choice) => choice,
                Err(WarError::InputClosed) => return Ok(self.input_closed()),
                Err(e) if e.is_recoverable() => {
                    tracing::debug!(error = %e, "invalid menu option");
                    writeln!(console.out(), "Invalid option!")?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match self.step(choice, console) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Victory) => {
                    tracing::info!("game won");
                    return Ok(GameEnd::Victory);
                }
                Ok(Flow::Exit) => {
                    tracing::info!("game exited by player");
                    return Ok(GameEnd::Exit);
                }
                Err(WarError::InputClosed) => return Ok(self.input_closed()),
                Err(e) if e.is_recoverable() => {
                    writeln!(console.out(), "{e}")?;
                }
                Err(e) => return Err(e),
            }

            if self.config.pause_after_action {
                match console.pause() {
                    Ok(()) => {}
                    Err(WarError::InputClosed) => return Ok(self.input_closed()),
                    Err(e) => return Err(e),
                }
            }
        }
    }

    /// Carry out one menu action
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        console: &mut Console<R, W>,
    ) -> Result<Flow> {
        tracing::debug!(?choice, "menu action");
        match choice {
            MenuChoice::Register => self.register(console),
            MenuChoice::ShowMap => {
                map::display(&self.store, console.out())?;
                Ok(Flow::Continue)
            }
            MenuChoice::Attack => match self.attack_phase(console) {
                Err(WarError::InvalidAttack(e)) => {
                    tracing::warn!(error = %e, "attack rejected");
                    writeln!(console.out(), "Attack aborted: {e}")?;
                    Ok(Flow::Continue)
                }
                other => other,
            },
            MenuChoice::DrawMission => self.draw_mission(console),
            MenuChoice::CheckVictory => self.check_victory(console),
            MenuChoice::Exit => {
                writeln!(console.out(), "Goodbye!")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn register<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        self.store.initialize(console)?;
        self.player.record_home(&self.store);

        let out = console.out();
        let home = self.player.home_territories().len();
        writeln!(
            out,
            "\nYou command the {} army and start with {home} territor{}.",
            self.player.color,
            if home == 1 { "y" } else { "ies" }
        )?;
        if home == 0 {
            tracing::warn!(color = %self.player.color, "player holds no territory after registration");
        }
        if self.mission.take().is_some() {
            writeln!(out, "The map changed, so your previous mission was discarded. Draw a new one.")?;
        }
        Ok(Flow::Continue)
    }

    fn attack_phase<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        if !self.store.is_registered() {
            writeln!(console.out(), "Register the territories first (option 1).")?;
            return Ok(Flow::Continue);
        }

        writeln!(console.out(), "\n=== ATTACK PHASE ===")?;
        map::display(&self.store, console.out())?;

        let last = self.store.len() - 1;
        let origin = console.prompt_number(&format!("Attacking territory (0-{last}): "), 0)?;
        let target = console.prompt_number(&format!("Defending territory (0-{last}): "), 0)?;
        let (origin, target) = (TerritoryId(origin as usize), TerritoryId(target as usize));

        tracing::debug!(origin = origin.0, target = target.0, "attack ordered");
        let outcome = combat::attack(
            &mut self.store,
            origin,
            target,
            &mut self.rng,
            self.config.die_sides,
        )?;

        let out = console.out();
        writeln!(
            out,
            "Attacker rolled {}, defender rolled {}.",
            outcome.attacker_roll, outcome.defender_roll
        )?;
        let loser = match outcome.casualty {
            Side::Attacker => origin,
            Side::Defender => target,
        };
        if let Some(territory) = self.store.get(loser) {
            writeln!(
                out,
                "The {} loses 1 troop in {}.",
                outcome.casualty.label(),
                territory.name
            )?;
        }
        if outcome.conquered {
            if let Some(territory) = self.store.get(target) {
                writeln!(
                    out,
                    "{} was conquered by the {} army!",
                    territory.name, territory.army_color
                )?;
            }
        }

        if self.mission_fulfilled() {
            self.announce_victory(console)?;
            return Ok(Flow::Victory);
        }
        Ok(Flow::Continue)
    }

    fn draw_mission<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        let id = mission::draw(&mut self.rng);
        self.mission = Mission::assign(
            id,
            &self.store,
            &self.player,
            &self.fallback_enemy,
            &mut self.rng,
        );

        let text = self
            .mission
            .as_ref()
            .map_or_else(|| mission::describe(id).to_string(), Mission::describe);
        writeln!(console.out(), "\n=== YOUR MISSION ===")?;
        writeln!(console.out(), "{}", capitalize(&text))?;
        Ok(Flow::Continue)
    }

    fn check_victory<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        let Some(mission) = self.mission.as_ref() else {
            writeln!(console.out(), "No mission drawn yet (option 4).")?;
            return Ok(Flow::Continue);
        };
        if !self.store.is_registered() {
            writeln!(console.out(), "Register the territories first (option 1).")?;
            return Ok(Flow::Continue);
        }

        if mission.is_fulfilled(&self.store, &self.player) {
            self.announce_victory(console)?;
            return Ok(Flow::Victory);
        }

        let (done, goal) = mission.progress(&self.store, &self.player);
        let text = mission.describe();
        let out = console.out();
        match mission {
            Mission::DestroyArmy { color } => writeln!(
                out,
                "Mission not complete yet: {text} ({goal} {color} territor{} left).",
                if goal == 1 { "y" } else { "ies" }
            )?,
            Mission::Conquer { .. } => writeln!(
                out,
                "Mission not complete yet: {text} ({done}/{goal} conquered)."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn mission_fulfilled(&self) -> bool {
        self.mission
            .as_ref()
            .is_some_and(|m| self.store.is_registered() && m.is_fulfilled(&self.store, &self.player))
    }

    fn announce_victory<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let text = self.mission.as_ref().map(Mission::describe).unwrap_or_default();
        writeln!(console.out(), "\n*** MISSION ACCOMPLISHED: {text}! You win! ***")?;
        map::display(&self.store, console.out())?;
        Ok(())
    }

    fn input_closed(&self) -> GameEnd {
        tracing::info!("input closed, ending game");
        GameEnd::InputClosed
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
