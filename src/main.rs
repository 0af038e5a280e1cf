use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use retrotris::audio::AudioOutput;
use retrotris::core::Session;
use retrotris::input;
use retrotris::term::{GameView, TerminalRenderer, Viewport};
use retrotris::types::TICK_MS;

fn main() -> Result<()> {
    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;
    let result = run(&mut renderer);
    // Always restore the terminal, even when the loop errored.
    let exit = renderer.exit();
    result?;
    exit
}

fn run(renderer: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new();
    let view = GameView::default();
    let mut audio = AudioOutput::open();

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (cols, rows) = terminal::size()?;
        let fb = view.render(&session, Viewport::new(cols, rows));
        renderer.draw(&fb)?;

        // Sleep inside poll until the next tick boundary.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::should_quit(&key) {
                        return Ok(());
                    }
                    if input::is_music_toggle(key.code) {
                        if let Some(audio) = audio.as_mut() {
                            audio.toggle_muted();
                        }
                    } else if let Some(action) = input::action_for(session.phase(), key.code) {
                        session.handle(action);
                    }
                }
                Event::Resize(..) => renderer.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            session.tick(TICK_MS);
            last_tick = Instant::now();
        }

        // Drain even without a device so the queue never sits full.
        for tone in session.drain_tones() {
            if let Some(audio) = &audio {
                audio.play(tone);
            }
        }
    }
}
