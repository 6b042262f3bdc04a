use anyhow::Context;
use log::info;
use winit::event_loop::{ControlFlow, EventLoop};

mod app;

use app::handler::AppHandler;
use flycam::error::FlycamError;
use flycam::settings::Settings;

#[derive(Debug, Default, PartialEq)]
struct Args {
    lock_to_horizontal_plane: bool,
    write_config: bool,
    check_config: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Args::default();
        for arg in args {
            match arg.as_str() {
                "--lock" => parsed.lock_to_horizontal_plane = true,
                "--write-config" => parsed.write_config = true,
                "--check-config" => parsed.check_config = true,
                other => anyhow::bail!(
                    "unknown argument '{other}' (expected --lock, --write-config or --check-config)"
                ),
            }
        }
        Ok(parsed)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse(std::env::args().skip(1))?;

    if args.check_config {
        Settings::try_load().context("settings check failed")?;
        info!("settings are valid");
        return Ok(());
    }

    let settings = Settings::load();

    if args.write_config {
        settings.save().context("failed to write settings")?;
        return Ok(());
    }

    let event_loop = EventLoop::new()
        .map_err(FlycamError::from)
        .context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = AppHandler {
        app: None,
        settings,
        lock_to_horizontal_plane: args.lock_to_horizontal_plane,
    };

    event_loop
        .run_app(&mut handler)
        .map_err(|e| FlycamError::from(e).with_arg("stage", "run"))
        .context("event loop terminated with an error")?;

    Ok(())
}
