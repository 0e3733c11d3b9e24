use std::process::ExitCode;

use promptline::utils::*;

/// JSON file overriding the built-in response templates.
const RESPONSES_ENV: &str = "PROMPTLINE_RESPONSES";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_responses() -> ResponseTemplates {
    let Ok(path) = std::env::var(RESPONSES_ENV) else {
        return ResponseTemplates::default();
    };
    let loaded = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| ResponseTemplates::from_json_str(&json).map_err(|e| e.to_string()));
    match loaded {
        Ok(responses) => {
            tracing::info!(%path, "loaded response templates");
            responses
        }
        Err(e) => {
            tracing::warn!(%path, error = %e, "ignoring response templates");
            ResponseTemplates::default()
        }
    }
}

fn banner() {
    println!("------------------------------------------------------------");
    println!("██████  ██████   ██████  ███    ███ ██████  ████████ ");
    println!("██   ██ ██   ██ ██    ██ ████  ████ ██   ██    ██    ");
    println!("██████  ██████  ██    ██ ██ ████ ██ ██████     ██    ");
    println!("██      ██   ██ ██    ██ ██  ██  ██ ██         ██    ");
    println!("██      ██   ██  ██████  ██      ██ ██         ██    ");
    println!("                       LINE                 ");
    println!("            VERSION:   {}", env!("CARGO_PKG_VERSION"));
    println!("------------------------------------------------------------");
}

fn run() -> Result<(), PromptError> {
    let responses = load_responses();
    let mut term = Terminal::stdio();

    // Answered up front, the user is never asked.
    let mut level: u8 = 0;
    let levels = AnswerSet::range(1u64, 10)?;
    term.ask(&mut level, "Verbosity level (1-10)?  ", |q| {
        q.set_first_answer(3u8);
        q.in_set(levels);
        q.responses = responses.clone();
    })?;
    term.say(&format!("Verbosity level preset to {}.", level))?;

    let mut age: i32 = 0;
    let ages = AnswerSet::range(26i64, 62)?;
    term.ask(&mut age, "Enter an age between 26 and 62:  ", |q| {
        q.set_default(13i32);
        q.in_set(ages);
        q.responses = responses.clone();
    })?;
    term.say(&format!("Age: {}", age))?;

    let mut ratio: f64 = 0.0;
    term.ask(&mut ratio, "Enter a ratio above zero:  ", |q| {
        q.in_set(AnswerSet::above_strictly(0.0f64));
        q.responses = responses.clone();
    })?;
    term.say(&format!("Ratio: {}", ratio))?;

    let color = term.choose(|m| {
        m.header = String::from("Pick a color");
        m.index_mode = IndexMode::Letter;
        m.list_mode = ListMode::columns_across();
        for c in ["red", "orange", "yellow", "green", "blue", "indigo", "violet"] {
            m.choice(c);
        }
    })?;
    term.say(&format!("Picked {} (#{}).", color.label, color.index + 1))?;

    loop {
        let mut history: Vec<String> = Vec::new();
        loop {
            let command = term.choose(|m| {
                m.header = String::from("Commands: ");
                m.question = String::from("> ");
                m.shell = true;
                m.list_mode = ListMode::inline();
                m.index_mode = IndexMode::NoIndex;
                m.choice("echo");
                m.choice("history");
                m.choice("quit");
            })?;
            match command.label.as_str() {
                "quit" => break,
                "history" => term.list(&history, &ListMode::columns_down())?,
                _ => {
                    term.say(&command.args)?;
                    history.push(format!("{} {}", command.label, command.args));
                }
            }
        }
        if term.confirm("Exit?  ", true, |q| q.responses = responses.clone()) {
            break;
        }
    }
    term.say("Bye.")
}

fn main() -> ExitCode {
    init_tracing();
    banner();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
