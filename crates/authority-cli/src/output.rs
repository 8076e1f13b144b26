use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

/// Labelled value, aligned like the other detail lines.
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("{:<20}{value}", format!("{label}:"));
}

pub fn rule() {
    println!("{}", "-".repeat(48));
}

pub fn success(msg: &str) -> io::Result<()> {
    colored(&mut stdout(), Color::Green, msg)
}

pub fn failure(msg: &str) {
    let _ = colored(&mut stderr(), Color::Red, msg);
}

pub fn eprintln_line(msg: &str) {
    let _ = writeln!(io::stderr(), "{msg}");
}

fn colored(out: &mut StandardStream, color: Color, msg: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    writeln!(out, "{msg}")?;
    out.reset()
}

fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}

fn stderr() -> StandardStream {
    StandardStream::stderr(ColorChoice::Auto)
}
