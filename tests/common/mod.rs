use pl0::lang::compile;
use pl0::mach::{Event, Runtime};

pub fn exec(source: &str, input: &str) -> String {
    exec_n(source, input, 5000)
}

/// Compile and run `source`, feeding `input` to the first `read` and
/// ending the input stream after that. Faults are appended as text.
pub fn exec_n(source: &str, input: &str, cycles: usize) -> String {
    let compilation = compile(source);
    let mut runtime = match Runtime::load(&compilation) {
        Ok(runtime) => runtime,
        Err(error) => return format!("{}\n", error),
    };
    let mut s = String::new();
    let mut input = Some(input);
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => break,
            Event::Fault(error) => s.push_str(&format!("{}\n", error)),
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => s.push_str(ps),
            Event::Input => match input.take() {
                Some(text) => runtime.enter(text),
                None => runtime.close_input(),
            },
        }
        prev_running = event == Event::Running;
    }
    s
}

pub fn errors(source: &str) -> Vec<u16> {
    compile(source).errors().iter().map(|e| e.code()).collect()
}
