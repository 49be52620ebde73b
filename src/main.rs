//! Hand Breakout entry point
//!
//! Logging is configured with `RUST_LOG`; game settings come from the
//! environment (see `hand_breakout::settings`).

use hand_breakout::Settings;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Hand Breakout starting...");

    let settings = Settings::from_env();
    log::info!(
        "Settings: tracker={}, mirror={}, clamp_paddle={}, max_spin_speed={:?}, fps={}",
        settings.tracker.as_str(),
        settings.mirror,
        settings.clamp_paddle,
        settings.max_spin_speed,
        settings.fps
    );

    hand_breakout::app::run(settings)?;

    log::info!("Goodbye");
    Ok(())
}
