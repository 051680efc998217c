// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};

use solobattleship::{
    config::parse_fleet, parse_coordinate, CannotShootReason, Coordinate, Dimensions, Game,
    GameConfig, Grid, ShotOutcome,
};

mod logging;

fn main() -> io::Result<()> {
    logging::init();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Single-player command line battleship game.")
        .arg(
            Arg::with_name("size")
                .short("n")
                .long("size")
                .value_name("N")
                .help("play on an NxN board, at most 10")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("ships")
                .short("s")
                .long("ships")
                .value_name("SIZES")
                .help("comma-separated ship sizes, e.g. 5,4,4")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("attempts")
                .short("a")
                .long("attempts")
                .value_name("COUNT")
                .help("random placements to try per ship")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed the ship layout for a repeatable game")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("reveal")
                .short("r")
                .long("reveal")
                .help("show the ships on the board while playing"),
        )
        .get_matches();

    let config = match build_config(&matches) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(2);
        }
    };
    let reveal = matches.is_present("reveal");

    let mut game = Game::with_config(&config);
    let filled = match parse_arg::<u64>(&matches, "seed") {
        Ok(Some(seed)) => {
            info!("using seed {}", seed);
            game.fill_board_with_rng(config.ships(), &mut StdRng::seed_from_u64(seed))
        }
        Ok(None) => game.fill_board(config.ships()),
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(2);
        }
    };
    if let Err(err) = filled {
        warn!("{}", err);
        println!(
            "Could only fit {} of {} ships, playing with those.",
            err.placed(),
            err.requested()
        );
    }

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    play(&mut game, &mut input, reveal)
}

/// Build the game configuration from the command line arguments.
fn build_config(matches: &ArgMatches) -> Result<GameConfig, String> {
    let mut config = GameConfig::default();
    if let Some(size) = parse_arg::<usize>(matches, "size")? {
        config.dimensions =
            Dimensions::try_new(size, size).ok_or_else(|| format!("invalid size: {}", size))?;
    }
    if let Some(ships) = matches.value_of("ships") {
        config.fleet = parse_fleet(ships).map_err(|err| err.to_string())?;
    }
    if let Some(attempts) = parse_arg::<usize>(matches, "attempts")? {
        config.max_attempts = attempts;
    }
    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}

/// Parse the value of an optional argument.
fn parse_arg<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>, String> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid {}: {}", name, value)),
    }
}

/// Run the shot loop until every ship is sunk.
fn play<B: BufRead>(game: &mut Game, input: &mut InputReader<B>, reveal: bool) -> io::Result<()> {
    let dim = *game.dimensions();
    let last = Coordinate::new(dim.rows() - 1, dim.cols() - 1);
    let prompt = format!("Please insert a new position in form 'A1'-'{}':", last);

    while game.playable() {
        show_board(&game.board(!reveal));
        let coord = input.read_input_upper(&prompt, |text| match parse_coordinate(text) {
            Ok(coord) if dim.contains(coord) => Some(coord),
            Ok(coord) => {
                println!("{} is not on the board. Please type again.", coord);
                None
            }
            Err(err) => {
                println!(
                    "Your input {:?} doesn't match the required form.",
                    err.into_input()
                );
                None
            }
        })?;
        match game.shot(coord) {
            Ok(outcome) => {
                println!();
                if outcome.hit() {
                    println!("You've hit a ship");
                }
                if outcome == ShotOutcome::Sunk {
                    let stats = game.stats();
                    println!(
                        "A ship has sunk! {}/{} still afloat",
                        stats.remaining_ships(),
                        stats.initial_ships()
                    );
                }
                println!();
            }
            Err(err) if err.reason() == CannotShootReason::OutOfBounds => {
                println!("{}", err);
            }
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        }
    }
    show_board(&game.board(false));
    println!(
        "Game over. All ships are sunk after {} shots",
        game.stats().shots_fired()
    );
    Ok(())
}

/// Print the grid with numbered columns and lettered rows.
fn show_board(grid: &Grid) {
    print!("  ");
    for col in 1..=grid.dimensions().cols() {
        print!("{:>3}", col);
    }
    println!();
    for (row, cells) in grid.rows().enumerate() {
        // Boards are limited to ten rows, so every row has a letter.
        print!("{:>2}", char::from(b'A' + row as u8));
        for cell in cells {
            print!("{:>3}", cell);
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii upper before running the checker.
    fn read_input_upper<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_uppercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            process::exit(0);
        }
        Ok(())
    }
}
