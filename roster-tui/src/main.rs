use std::env;
use std::fs::File;
use std::process::ExitCode;

use log::{debug, info, warn};
use roster::{
    translate_events, view, DefaultTheme, Event, GuestList, Key, MouseButton, Roster, Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const SAMPLE_ROSTER: &str = include_str!("../data/sample-roster.json");

fn main() -> ExitCode {
    let log_file = match File::create("roster-tui.log") {
        Ok(file) => file,
        Err(err) => {
            eprintln!("failed to create log file: {err}");
            return ExitCode::FAILURE;
        }
    };
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let roster = match load_roster() {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut list = GuestList::new(roster);
    info!("{} fridays on the roster", list.groups().len());

    match run(&mut list) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_roster() -> Result<Roster, String> {
    match env::args().nth(1) {
        Some(path) => {
            let roster = Roster::load(&path).map_err(|err| format!("{path}: {err}"))?;
            info!("loaded roster from {path}");
            Ok(roster)
        }
        None => {
            info!("no roster given, using the sample");
            Roster::from_json(SAMPLE_ROSTER).map_err(|err| format!("sample roster: {err}"))
        }
    }
}

fn run(list: &mut GuestList) -> std::io::Result<()> {
    let theme = DefaultTheme::new();
    let mut term = Terminal::new()?;

    loop {
        let root = view(list);
        term.render(&root, &theme)?;

        let raw = term.poll(None)?;
        let events = translate_events(&raw, &root, term.layout());

        for event in &events {
            match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => {
                    info!("quit");
                    return Ok(());
                }
                Event::Key { key: Key::Up, .. } => list.select_prev(),
                Event::Key { key: Key::Down, .. } => list.select_next(),
                Event::Key {
                    key: Key::Enter | Key::Char(' '),
                    ..
                } => {
                    if let Some(expanded) = list.toggle_selected() {
                        debug!("toggled selected group, expanded={expanded}");
                    }
                }
                Event::Click {
                    target: Some(id),
                    button: MouseButton::Left,
                    ..
                } => match list.toggle(id) {
                    Some(expanded) => debug!("toggled {id}, expanded={expanded}"),
                    None => warn!("click on unknown element {id}"),
                },
                Event::Click {
                    target: None, x, y, ..
                } => {
                    debug!("click at ({x}, {y}) hit nothing");
                }
                _ => {}
            }
        }
    }
}
