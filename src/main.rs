//! Terminal slot machine runner (default binary).
//!
//! The frame host: crossterm input polled between fixed 16ms ticks, HUD and
//! controller ticked with a monotonic clock, framebuffer diffed to the terminal.
//!
//! Logs go to the file named by `TUI_SLOTS_LOG_PATH` (filtered by `RUST_LOG`,
//! default `info`); without it nothing is logged, so the alternate screen stays
//! clean.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_slots::core::{MachineSnapshot, SlotConfig, SpinController};
use tui_slots::input::{action_for_key, should_quit};
use tui_slots::term::{
    Fingerprint, FrameBuffer, GlyphTextures, Hud, MachineView, RenderThrottle, TerminalRenderer,
    Viewport,
};
use tui_slots::types::TICK_MS;

/// Keep-alive redraw interval of an idle screen.
const STATIC_REDRAW_MS: u64 = 250;

type Machine = SpinController<GlyphTextures>;

fn main() -> Result<()> {
    init_logging()?;

    let config = SlotConfig::from_env();
    let mut machine = SpinController::new(config, GlyphTextures::default())
        .context("invalid machine configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut machine);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::info!(
        "session over: {} spins, balance {}",
        machine.spin_count(),
        machine.balance()
    );
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var("TUI_SLOTS_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("cannot open log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, machine: &mut Machine) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let view = MachineView::default();
    let mut hud = Hud::new();
    machine.sync_ui(&mut hud);

    let mut snapshot = MachineSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        machine.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let animating = machine.is_running() || hud.is_animating();
        if throttle.should_render(now_ms(), fingerprint(&snapshot, &hud, w, h), animating) {
            view.render_into(machine, &hud, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                // Terminal auto-repeat would toggle spin/stop on a held key.
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = action_for_key(key) {
                        let now = now_ms();
                        if snapshot.accepts(action) {
                            hud.press(now);
                        }
                        if !machine.handle_action(action, now, &mut hud) {
                            log::debug!("{} ignored", action.as_str());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let now = now_ms();
            hud.tick(now);
            machine.tick(now, &mut hud);
        }
    }
}

fn fingerprint(snapshot: &MachineSnapshot, hud: &Hud, w: u16, h: u16) -> u64 {
    let mut fp = Fingerprint::default()
        .push(((w as u64) << 16) | h as u64)
        .push(snapshot.phase as u64)
        .push(snapshot.spin_count)
        .push(hud.balance() as u64)
        .push(hud.win_count() as u64)
        .push(hud.last_win() as u64)
        .push(hud.message().is_some() as u64)
        .push(hud.enabled() as u64 | (hud.busy() as u64) << 1 | (hud.is_pressed() as u64) << 2);
    for reel in &snapshot.reels {
        let centered = reel.centered.map_or(u64::MAX, |s| s.index() as u64);
        fp = fp.push(reel.position.to_bits()).push(centered);
    }
    fp.finish()
}
