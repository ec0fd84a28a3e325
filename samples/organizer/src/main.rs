//! Interactive task organizer built on the crimson tree map.
//!
//! Tasks are `<priority> <text>` pairs stored in a [`RedBlackTreeMap`];
//! the command loop supports bulk input, ordered output, clearing, and
//! saving/loading through the line-oriented store format at `./save.txt`.

use std::io::{self, BufRead, Write};

use crimson::prelude::*;
use crimson::store;
use thiserror::Error;

const SAVE_PATH: &str = "./save.txt";

#[derive(Debug, Error)]
enum DriverError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Reads one trimmed line after printing a prompt.
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>, DriverError> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn read_command(input: &mut impl BufRead) -> Result<u32, DriverError> {
    let prompt =
        "Input command (0 - exit, 1 - input, 2 - output, 3 - clear, 4 - save, 5 - load): ";
    let Some(line) = read_line(input, prompt)? else {
        return Ok(0);
    };
    // Anything unparsable exits, like end of input does.
    Ok(line.parse().unwrap_or(0))
}

/// Bulk-inserts tasks: a count line, then `<priority> <text>` per task.
fn input_tasks(map: &mut RedBlackTreeMap, input: &mut impl BufRead) -> Result<(), DriverError> {
    let Some(count_line) = read_line(input, "Input task count: ")? else {
        return Ok(());
    };
    let Ok(count) = count_line.parse::<usize>() else {
        println!("Not a task count: {count_line}");
        return Ok(());
    };

    for _ in 0..count {
        let Some(line) = read_line(input, "Input task (<priority> <text>): ")? else {
            return Ok(());
        };
        match parse_task(&line) {
            Some((priority, text)) => map.insert(priority, text),
            None => println!("Expected `<priority> <text>`, got: {line}"),
        }
    }
    Ok(())
}

fn parse_task(line: &str) -> Option<(i64, &str)> {
    let (priority, text) = line.split_once(' ')?;
    Some((priority.parse().ok()?, text.trim()))
}

fn output_tasks(map: &RedBlackTreeMap) {
    for (priority, text) in map.iter() {
        println!("{priority} {text}");
    }
}

fn run(input: &mut impl BufRead) -> Result<(), DriverError> {
    let mut map = RedBlackTreeMap::new();

    loop {
        match read_command(input)? {
            0 => return Ok(()),
            1 => input_tasks(&mut map, input)?,
            2 => output_tasks(&map),
            3 => map.clear(),
            4 => {
                if let Err(error) = store::save_to_path(&map, SAVE_PATH) {
                    println!("Save failed: {error}");
                }
            }
            5 => {
                if let Err(error) = store::load_from_path(&mut map, SAVE_PATH) {
                    println!("Load failed: {error}");
                }
            }
            other => println!("Unknown command: {other}"),
        }
    }
}

fn main() -> Result<(), DriverError> {
    let stdin = io::stdin();
    run(&mut stdin.lock())
}
