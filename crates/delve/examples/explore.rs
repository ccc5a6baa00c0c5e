//! Walk a generated dungeon in the terminal.
//!
//! Arrow keys or WASD move, `q` or Esc quits. Pass a seed as the first
//! argument to revisit a map; set `RUST_LOG=debug` to log moves to
//! stderr.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use delve::prelude::*;
use log::info;

struct Terminal {
    out: Stdout,
}

impl Terminal {
    fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self { out })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        execute!(self.out, Show, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
    }
}

impl RenderSink for Terminal {
    fn draw_row(&mut self, row: u32, text: &str) -> io::Result<()> {
        queue!(self.out, MoveTo(0, row as u16), Print(text))
    }

    fn flush_frame(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

struct Keyboard;

impl InputSource for Keyboard {
    fn poll(&mut self) -> io::Result<Option<Intent>> {
        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }
        Ok(match key.code {
            KeyCode::Up | KeyCode::Char('w') => Some(Intent::Move(Direction::Up)),
            KeyCode::Left | KeyCode::Char('a') => Some(Intent::Move(Direction::Left)),
            KeyCode::Down | KeyCode::Char('s') => Some(Intent::Move(Direction::Down)),
            KeyCode::Right | KeyCode::Char('d') => Some(Intent::Move(Direction::Right)),
            KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
            _ => None,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 0,
    };
    let config = WorldConfig {
        seed,
        ..WorldConfig::default()
    };
    let mut session = Session::new(&config)?;
    {
        let mut screen = Terminal::enter()?;
        session.run(&mut Keyboard, &mut screen)?;
    }
    info!("explored seed {seed}: {:?}", session.stats());
    Ok(())
}
