mod draw;
mod input;
mod state;
use state::State;

use anyhow::{anyhow, ensure, Context as _};
use ggez::{
    conf::{Conf, WindowMode, WindowSetup},
    event, ContextBuilder,
};
use log::info;

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scenarios = loader::all_builtin().context("couldn't load the built-in scenarios")?;
    ensure!(!scenarios.is_empty(), "there are no scenarios to run");

    let c = Conf::new();
    let (ref mut ctx, ref mut event_loop) = ContextBuilder::new("space_engine", "gamma-delta")
        .conf(c)
        .window_setup(WindowSetup {
            title: "Space Engine".to_owned(),
            ..Default::default()
        })
        .window_mode(WindowMode {
            width: 1280.0,
            height: 800.0,
            resizable: true,
            ..Default::default()
        })
        .build()
        .map_err(|e| anyhow!("couldn't open a window: {}", e))?;

    let state = &mut State::new(ctx, scenarios);

    event::run(ctx, event_loop, state).map_err(|e| anyhow!("event loop failed: {}", e))?;
    info!("Bye!");
    Ok(())
}
