use std::fs::File;
use std::io::{self, BufRead, Write};

use chooser::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

const DEFINITION: &str = r#"{
    "label": "Topic",
    "options": [
        { "name": "Animals", "value": "animals" },
        { "name": "Food", "value": "food" },
        { "name": "Music", "value": "music" }
    ],
    "filters": [
        { "field": "sheet", "operator": "equals", "value": "$radio" }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("radio.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut radio = Radio::from_json(DEFINITION)?;
    let mut data = Table::from_rows([
        Row::new().set("sheet", "animals").set("label", "cat"),
        Row::new().set("sheet", "food").set("label", "pizza"),
    ]);
    let state = StateStore::new();
    state.subscribe(|keys| log::info!("state changed: {:?}", keys));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let view = radio.render(&state, &data);
        print_view(&view, &state);

        print!("number to click, 'm' to add music rows, 'q' to quit> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        match line?.trim() {
            "q" => break,
            "m" => data.push(Row::new().set("sheet", "music").set("label", "jazz")),
            input => match input.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if !view.click(n - 1, &state) {
                        println!("(not clickable)");
                    }
                }
                _ => println!("(unrecognized input)"),
            },
        }
    }
    Ok(())
}

fn print_view(view: &ChooserView, state: &StateStore) {
    if let Some(legend) = &view.legend {
        println!("-- {} --", legend);
    }
    for entry in &view.entries {
        let marker = if entry.highlighted { "(*)" } else { "( )" };
        let disabled = if entry.disabled { " [disabled]" } else { "" };
        println!("{} {} {}{}", entry.index + 1, marker, entry.label, disabled);
    }
    let primary = view.controller().primary();
    println!("{} = {:?}", primary, state.text(primary));
}
