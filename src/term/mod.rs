extern crate ansi_term;
extern crate linefeed;
use crate::mach::Runtime;
use crate::{error, lang::Error};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};

const PROMPT: &str = "   ";

const HELP: &str = "\
Verbs read right to left. There is no precedence: 2#3+i.2 is 2#(3+(i.2)).

       monadic     dyadic
  +    identity    plus         1+2
  {    size        from         1{i.3
  ~    iota        find         ~5 or i.5
  <    box                      <i.2
  #    shape       reshape      #2 3#i.6
  ,                concatenate  1,2

Nouns are single digits. Assign with a letter: x=i.4
Commands: help, vars, clear.
";

pub fn main(plain: bool) {
    if let Err(error) = main_loop(plain) {
        eprintln!("{}", error);
    }
}

fn main_loop(plain: bool) -> std::io::Result<()> {
    let mut runtime = Runtime::new();
    let command = Interface::new("incunabulum")?;
    command.set_prompt(PROMPT)?;
    command.set_report_signal(Signal::Interrupt, true);

    loop {
        match command.read_line()? {
            ReadResult::Input(string) => {
                if string.trim().is_empty() {
                    continue;
                }
                command.write_fmt(format_args!("{}", respond(&mut runtime, &string, plain)))?;
                command.add_history_unique(string);
            }
            ReadResult::Signal(Signal::Interrupt) => {
                command.set_buffer("")?;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        }
    }
    Ok(())
}

/// Output for one line typed at the prompt or read from a script.
pub fn respond(runtime: &mut Runtime, line: &str, plain: bool) -> String {
    match line.trim() {
        "help" => return HELP.to_string(),
        "clear" => {
            runtime.clear();
            return String::new();
        }
        "vars" => {
            let names: Vec<String> = runtime.vars().names().map(String::from).collect();
            return format!("{}\n", names.join(" "));
        }
        _ => {}
    }
    match runtime.evaluate_str(line) {
        Ok(array) => array.to_string(),
        Err(error) => paint(&format!("Error: {}", error), plain) + "\n",
    }
}

fn paint(s: &str, plain: bool) -> String {
    if plain {
        s.to_string()
    } else {
        Style::new().bold().paint(s).to_string()
    }
}

/// Non-empty lines of a script file.
pub fn load(filename: &str) -> Result<Vec<String>, Error> {
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; &msg)),
                _ => return Err(error!(InternalError; &msg)),
            }
        }
    };
    let mut lines = vec![];
    for (index, line) in reader.lines().enumerate() {
        match line {
            Err(error) => {
                return Err(error!(InternalError; &format!(
                    "line {} of {}: {}",
                    index + 1,
                    filename,
                    error
                )))
            }
            Ok(line) => {
                if !line.trim().is_empty() {
                    lines.push(line);
                }
            }
        }
    }
    Ok(lines)
}
