extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{compile, Compilation, Error};
use crate::mach::{Event, Runtime, CYCLES};
use crate::error;
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const HELP: &str = "\
LOAD file   compile a PL/0 source file
RUN         run the compiled program
LIST        show the source, erroneous lines underlined
CODE        show the P-code
TABLE       show the symbol table
ERRORS      show the compile errors
HELP        show this text
QUIT        leave
";

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("{}", error);
    }
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [] => shell(&interrupted),
        [filename] => batch(filename, &interrupted),
        [filename, input, ..] => batch_with_input(filename, input, &interrupted),
    };
    if let Err(error) = result {
        eprintln!("{}", error);
    }
}

#[derive(Default)]
struct Session {
    source: String,
    compilation: Option<Compilation>,
}

impl Session {
    fn load(&mut self, filename: &str) -> Result<&[Error], Error> {
        let source = load(filename)?;
        self.compilation = Some(compile(&source));
        self.source = source;
        Ok(match &self.compilation {
            Some(compilation) => compilation.errors(),
            None => &[],
        })
    }
}

fn shell(interrupted: &AtomicBool) -> std::io::Result<()> {
    let command = Interface::new("PL/0")?;
    command.set_prompt("> ")?;
    let input = Interface::new("Input")?;
    input.set_report_signal(Signal::Interrupt, true);
    let mut session = Session::default();
    command.write_fmt(format_args!("PL/0\nREADY.\n"))?;

    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let mut words = string.split_whitespace();
        let verb = match words.next() {
            Some(verb) => verb.to_ascii_uppercase(),
            None => continue,
        };
        let argument = words.next();
        command.add_history_unique(string.clone());
        match verb.as_str() {
            "LOAD" => {
                let loaded = match argument {
                    Some(filename) => session.load(filename),
                    None => Err(error!(FileNotFound)),
                };
                match loaded {
                    Ok(errors) => {
                        print_errors(&command, errors)?;
                        command.write_fmt(format_args!("{} ERRORS\n", errors.len()))?;
                    }
                    Err(error) => print_errors(&command, &[error])?,
                }
            }
            "RUN" => match session.compilation.as_ref().map(Runtime::load) {
                Some(Ok(mut runtime)) => run(&mut runtime, &command, &input, interrupted)?,
                Some(Err(error)) => print_errors(&command, &[error])?,
                None => print_errors(&command, &[error!(FileNotFound; "NOTHING LOADED")])?,
            },
            "LIST" => {
                let errors = match &session.compilation {
                    Some(compilation) => compilation.errors(),
                    None => &[],
                };
                command.write_fmt(format_args!("{}", list(&session.source, errors)))?;
            }
            "CODE" => {
                if let Some(compilation) = &session.compilation {
                    command.write_fmt(format_args!("{}", compilation.program()))?;
                }
            }
            "TABLE" => {
                if let Some(compilation) = &session.compilation {
                    command.write_fmt(format_args!("{}", table(compilation)))?;
                }
            }
            "ERRORS" => {
                if let Some(compilation) = &session.compilation {
                    print_errors(&command, compilation.errors())?;
                }
            }
            "HELP" => command.write_fmt(format_args!("{}", HELP))?,
            "QUIT" | "EXIT" => break,
            _ => command.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(format!("UNKNOWN COMMAND {}", verb))
            ))?,
        }
        interrupted.store(false, Ordering::SeqCst);
    }
    Ok(())
}

fn batch(filename: &str, interrupted: &AtomicBool) -> std::io::Result<()> {
    let source = match load(filename) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return Ok(());
        }
    };
    let compilation = compile(&source);
    let command = Interface::new("PL/0")?;
    match Runtime::load(&compilation) {
        Ok(mut runtime) => {
            let input = Interface::new("Input")?;
            input.set_report_signal(Signal::Interrupt, true);
            run(&mut runtime, &command, &input, interrupted)
        }
        Err(_) => {
            command.write_fmt(format_args!("{}", list(&source, compilation.errors())))?;
            print_errors(&command, compilation.errors())
        }
    }
}

fn batch_with_input(filename: &str, input: &str, interrupted: &AtomicBool) -> std::io::Result<()> {
    let compilation = match load(filename) {
        Ok(source) => compile(&source),
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return Ok(());
        }
    };
    let result = Runtime::load(&compilation).and_then(|mut runtime| {
        let file = open(input)?;
        let stdout = std::io::stdout();
        let handle = stdout.lock();
        runtime.run_until_break(BufReader::new(file), handle, interrupted)
    });
    if let Err(error) = result {
        for error in compilation.errors() {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
        }
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
    }
    Ok(())
}

fn run(
    runtime: &mut Runtime,
    command: &Interface<DefaultTerminal>,
    input: &Interface<DefaultTerminal>,
    interrupted: &AtomicBool,
) -> std::io::Result<()> {
    interrupted.store(false, Ordering::SeqCst);
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(CYCLES) {
            Event::Running => {}
            Event::Print(s) => command.write_fmt(format_args!("{}", s))?,
            Event::Input => {
                input.set_prompt("? ")?;
                match input.read_line()? {
                    ReadResult::Input(string) => {
                        runtime.enter(&string);
                        input.add_history_unique(string);
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => runtime.close_input(),
                }
            }
            Event::Fault(error) => {
                print_errors(command, &[error])?;
                break;
            }
            Event::Stopped => break,
        }
    }
    Ok(())
}

fn print_errors(command: &Interface<DefaultTerminal>, errors: &[Error]) -> std::io::Result<()> {
    for error in errors.iter() {
        command.write_fmt(format_args!(
            "{}\n",
            Style::new().bold().paint(error.to_string())
        ))?;
    }
    Ok(())
}

fn table(compilation: &Compilation) -> String {
    let mut out = String::new();
    for (index, entry) in compilation.table().entries().iter().enumerate() {
        out.push_str(&format!("{:>5} {}\n", index, entry));
    }
    out.push_str(&format!(
        "      MAIN ADDRESS {} SIZE {}\n",
        compilation.entry(),
        compilation.frame_size()
    ));
    out
}

/// Number every source line and underline the ones with errors.
fn list(source: &str, errors: &[Error]) -> String {
    let mut out = String::new();
    for (index, line) in source.lines().enumerate() {
        let number = index + 1;
        let text = if errors.iter().any(|e| e.line_number() == Some(number)) {
            decorate(line)
        } else {
            line.to_string()
        };
        out.push_str(&format!("{:>5} {}\n", number, text));
    }
    out
}

fn decorate(line: &str) -> String {
    let style = Style::new().underline();
    let mut out = format!("{}", style.prefix());
    out.push_str(line);
    if line.trim().is_empty() {
        out.push(' ');
    }
    out.push_str(&format!("{}", style.suffix()));
    out
}

fn open(filename: &str) -> Result<File, Error> {
    match File::open(filename) {
        Ok(file) => Ok(file),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg.as_str())),
                _ => Err(error!(IoError; msg.as_str())),
            }
        }
    }
}

fn load(filename: &str) -> Result<String, Error> {
    let mut source = String::new();
    open(filename)?
        .read_to_string(&mut source)
        .map_err(|error| error!(IoError; error.to_string().as_str()))?;
    Ok(source)
}
