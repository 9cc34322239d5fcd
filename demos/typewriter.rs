//! Typewriter demo: the two-segment hero line, animated in place.
//!
//! Runs the animation for a few cycles on the current terminal line, then
//! disposes it and restores the cursor.

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::{cursor, execute};
use typewheel::{Animator, LinePainter, TimerScheduler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let scheduler = Arc::new(TimerScheduler::new()?);

    let (_, row) = crossterm::cursor::position().unwrap_or((0, 0));
    execute!(io::stdout(), cursor::Hide)?;

    let painter = LinePainter::new(io::stdout(), 0, row);
    let animator = Animator::new("أفـكار اليـوم ", "إستثمار الغـد", painter, scheduler.clone());
    animator.start();

    // Two full cycles at default timing, then stop.
    thread::sleep(Duration::from_secs(12));
    animator.dispose();

    execute!(io::stdout(), cursor::Show)?;
    println!();
    Ok(())
}
