//! Seats a single pair-calling bot at a poker server and plays until the
//! server goes away.

mod config;

use std::net::SocketAddr;

use anyhow::Error;
use ctrlc::set_handler;
use holdem_agent::{
    Client, SessionEnd,
    bot::PairBot,
    messages::Room,
};
use log::info;
use pico_args::Arguments;

use config::BotSettings;

const HELP: &str = "\
Play poker with a bot that calls with pairs and folds to big bets

USAGE:
  holdem_bot [OPTIONS]

OPTIONS:
  --server     IP:PORT     Poker server address  [default: env BOT_SERVER or 127.0.0.1:4711]
  --name       NAME        Name to register with  [default: env BOT_NAME]
  --room       ROOM        training, freeplay or tournament  [default: env BOT_ROOM or training]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  BOT_SERVER                  Poker server address
  BOT_NAME                    Bot name
  BOT_ROOM                    Room to play in
  BOT_AGGRESSION_MULTIPLIER   Big blinds an opponent must put in before the bot backs off [default: 4]
";

struct Args {
    server: Option<SocketAddr>,
    name: Option<String>,
    room: Option<Room>,
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        server: pargs.opt_value_from_str("--server")?,
        name: pargs.opt_value_from_str("--name")?,
        room: pargs.opt_value_from_str("--room")?,
    };

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();

    let settings = BotSettings::from_env(args.server, args.name, args.room)?;
    settings.validate()?;

    let mut bot = PairBot::new(settings.bot_config());
    let mut session =
        Client::connect(&settings.server)?.register_for_play(&mut bot, settings.room)?;
    match session.play(&mut bot)? {
        SessionEnd::ServerShutdown => info!("Server shut down, leaving"),
        SessionEnd::ConnectionLost => info!("Lost connection to {}, leaving", settings.server),
    }

    Ok(())
}
