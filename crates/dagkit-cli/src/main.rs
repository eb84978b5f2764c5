use dagkit::{Canvas, CanvasConfig, Event, Notice, Snapshot, ViewportRequest};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Config(dagkit::Error),
    Json(serde_json::Error),
    Script { line: usize, source: serde_json::Error },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Config(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Script { line, source } => write!(f, "line {line}: invalid event: {source}"),
        }
    }
}

impl CliError {
    /// 2 for usage errors, 3 for every runtime failure. 1 stays reserved for a cyclic graph.
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Io(_) | CliError::Config(_) | CliError::Json(_) | CliError::Script { .. } => 3,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<dagkit::Error> for CliError {
    fn from(value: dagkit::Error) -> Self {
        Self::Config(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Run,
    Check,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    config: Option<String>,
    pretty: bool,
    trace: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunOut<'a> {
    #[serde(flatten)]
    snapshot: &'a Snapshot,
    notices: &'a [Notice],
    viewport: &'a [ViewportRequest],
}

fn usage() -> &'static str {
    "dagkit-cli\n\
\n\
USAGE:\n\
  dagkit-cli [run] [--config <path>] [--pretty] [--trace] [<path>|-]\n\
  dagkit-cli check [--config <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the event script is read from stdin.\n\
  - A script holds one JSON event per line; blank lines and lines starting with '#' are skipped.\n\
  - run prints the final canvas (status, nodes, edges, selection, notices) as JSON.\n\
  - check prints the DAG status and exits with 1 when the graph has a cycle.\n\
  - Exit codes: 0 ok, 1 cyclic graph (check), 2 usage error, 3 I/O, config or script error.\n\
  - --config accepts JSON, or YAML for .yaml/.yml files.\n\
  - Set DAGKIT_LOG (e.g. DAGKIT_LOG=debug) to log to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "run" => args.command = Command::Run,
            "check" => args.command = Command::Check,
            "--pretty" => args.pretty = true,
            "--trace" => args.trace = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn parse_script(text: &str) -> Result<Vec<(usize, Event)>, CliError> {
    let mut events = Vec::new();
    for (ix, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str::<Event>(line).map_err(|source| CliError::Script {
            line: ix + 1,
            source,
        })?;
        events.push((ix + 1, event));
    }
    Ok(events)
}

fn load_config(path: Option<&str>) -> Result<CanvasConfig, CliError> {
    match path {
        None => Ok(CanvasConfig::default()),
        Some(path) => Ok(CanvasConfig::from_path(path)?),
    }
}

fn replay(canvas: &mut Canvas, events: Vec<(usize, Event)>, trace: bool) {
    for (line, event) in events {
        // Rejections are already recorded as notices on the canvas.
        if let Err(rejection) = canvas.dispatch(event) {
            tracing::debug!(line, %rejection, "event rejected");
        }
        if trace {
            eprintln!("line {line}: {}", canvas.status());
        }
    }
}

/// Returns the process exit code.
fn run(args: Args) -> Result<i32, CliError> {
    let config = load_config(args.config.as_deref())?;
    let text = read_input(args.input.as_deref())?;
    let events = parse_script(&text)?;

    let mut canvas = dagkit::canvas(config);
    replay(&mut canvas, events, args.trace);

    match args.command {
        Command::Run => {
            let snapshot = canvas.snapshot();
            let notices = canvas.take_notices();
            let viewport = canvas.drain_deferred();
            let out = RunOut {
                snapshot: &snapshot,
                notices: &notices,
                viewport: &viewport,
            };
            write_json(&out, args.pretty)?;
            Ok(0)
        }
        Command::Check => {
            let status = canvas.status();
            println!("{status}");
            Ok(if status.is_valid() { 0 } else { 1 })
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("DAGKIT_LOG"))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    };

    init_tracing();

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}
