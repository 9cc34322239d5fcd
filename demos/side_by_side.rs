//! Two independent animators sharing one scheduler.
//!
//! Each instance has its own text, timing, and line; one is disposed
//! halfway through to show that the other keeps running.

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::style::Color;
use crossterm::{cursor, execute, terminal};
use typewheel::{Animator, LinePainter, LineStyle, TimerScheduler, Timing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let scheduler = Arc::new(TimerScheduler::new()?);

    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::Hide
    )?;

    let calm = Animator::new(
        "Ideas of today, ",
        "investment of tomorrow",
        LinePainter::new(io::stdout(), 2, 1),
        scheduler.clone(),
    );

    let brisk = Animator::with_timing(
        "fast> ",
        "keystrokes",
        LinePainter::with_style(
            io::stdout(),
            2,
            3,
            LineStyle {
                first: Color::Cyan,
                second: Color::Grey,
            },
        ),
        scheduler.clone(),
        Timing {
            write_delay: Duration::from_millis(40),
            delete_delay: Duration::from_millis(20),
            pause_after_write: Duration::from_millis(600),
            pause_after_delete: Duration::from_millis(300),
        },
    );

    calm.start();
    brisk.start();

    thread::sleep(Duration::from_secs(6));
    brisk.dispose();

    thread::sleep(Duration::from_secs(6));
    calm.dispose();

    execute!(io::stdout(), cursor::MoveTo(0, 5), cursor::Show)?;
    Ok(())
}
