use std::{
    fs,
    io::{Read, Write},
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use emojify::{dictionary, export, record, EmojiRecord, Emojifier};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod web;

use config::Settings;

#[derive(Parser, Debug)]
#[command(author, version)]
/// Command-line utility for replacing words with emoji
struct Arguments {
    /// JSON emoji data to use instead of the integrated data set
    #[arg(long, short = 'd', global = true)]
    dictionary: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert text
    Convert(ConvertArgs),
    /// Write every glyph on its own line
    Export(ExportArgs),
    /// Serve the web form
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// File to read input from, otherwise STDIN
    input_path: Option<PathBuf>,

    /// File to write output to, otherwise STDOUT
    output_path: Option<PathBuf>,

    /// Write the matches as JSON instead of the converted text
    #[arg(long, short = 'j')]
    json: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// File to write the glyph list to, `-` for STDOUT
    #[arg(default_value = "emoji_list.txt")]
    output_path: PathBuf,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to listen on [default: 127.0.0.1:5000]
    #[arg(long, short = 'a')]
    addr: Option<String>,
}

fn input(input_path: Option<impl AsRef<Path>>) -> anyhow::Result<String> {
    match input_path {
        Some(p) => fs::read_to_string(&p)
            .with_context(|| format!("Could not read input file {}", p.as_ref().display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Could not read STDIN")?;
            Ok(buf)
        }
    }
}

fn output(output_path: Option<impl AsRef<Path>>) -> anyhow::Result<Box<dyn Write>> {
    match output_path {
        Some(o) if o.as_ref() != Path::new("-") => {
            let file = fs::File::create(&o).with_context(|| {
                format!("Could not create output file {}", o.as_ref().display())
            })?;
            Ok(Box::new(file))
        }
        _ => Ok(Box::new(std::io::stdout())),
    }
}

fn load_records(path: Option<&Path>) -> anyhow::Result<Vec<EmojiRecord>> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading emoji data");
            record::from_path(path)
                .with_context(|| format!("Could not load emoji data from {}", path.display()))
        }
        None => emojify::integrated_records().context("Could not load integrated emoji data"),
    }
}

fn load_emojifier(path: Option<&Path>) -> anyhow::Result<Emojifier> {
    let records = load_records(path)?;
    let emojifier = Emojifier::new(dictionary::build(&records));
    info!(
        records = records.len(),
        keys = emojifier.dictionary().len(),
        "Emoji dictionary ready"
    );
    Ok(emojifier)
}

fn render(emojifier: &Emojifier, text: &str, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&emojifier.annotate(text))?)
    } else {
        Ok(emojifier.convert(text))
    }
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Arguments::parse();
    let settings = Settings::from_env().context("Invalid EMOJIFY_* environment variable")?;

    init_tracing(&settings);

    let dictionary_path = settings.dictionary_path(args.dictionary);

    match args.command {
        Command::Convert(a) => {
            let emojifier = load_emojifier(dictionary_path.as_deref())?;
            let input_text = input(a.input_path)?;

            let generated = render(&emojifier, &input_text, a.json)?;

            let mut out = output(a.output_path)?;
            writeln!(out, "{generated}")
                .and_then(|()| out.flush())
                .context("Could not write output")?;
        }
        Command::Export(a) => {
            let records = load_records(dictionary_path.as_deref())?;
            let count = export::write_glyphs(&records, output(Some(&a.output_path))?)
                .context("Could not write glyph list")?;

            info!(
                count,
                path = %a.output_path.display(),
                "Glyph list has been created successfully"
            );
        }
        Command::Serve(a) => {
            let addr: SocketAddr = settings
                .addr(a.addr)
                .parse()
                .context("Invalid listen address")?;
            let emojifier = load_emojifier(dictionary_path.as_deref())?;

            web::serve(addr, emojifier).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{
        io::Write,
        path::{Path, PathBuf},
    };

    use clap::Parser;
    use emojify::{dictionary, record, Emojifier};
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::{load_records, output, render, Arguments, Command};

    const RECORDS: &str = r#"[
        {"emoji": "🐱", "aliases": ["cat"], "tags": ["pet"], "description": "cat face"},
        {"emoji": "👍", "aliases": ["+1"], "tags": ["approve"], "description": "thumbs up"}
    ]"#;

    fn emojifier() -> Emojifier {
        Emojifier::new(dictionary::build(&record::from_str(RECORDS).unwrap()))
    }

    #[test]
    fn export_defaults_to_glyph_list_file() {
        let args = Arguments::try_parse_from(["emojify", "export"]).unwrap();

        match args.command {
            Command::Export(a) => assert_eq!(a.output_path, PathBuf::from("emoji_list.txt")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn dictionary_flag_after_subcommand() {
        let args =
            Arguments::try_parse_from(["emojify", "convert", "--json", "-d", "mine.json"]).unwrap();

        assert_eq!(args.dictionary, Some(PathBuf::from("mine.json")));
        match args.command {
            Command::Convert(a) => {
                assert!(a.json);
                assert_eq!(a.input_path, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn dash_writes_to_stdout() {
        assert!(output(Some("-")).is_ok());
        assert!(output(None::<&Path>).is_ok());
        assert!(!Path::new("-").exists());
    }

    #[test]
    fn output_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        {
            let mut out = output(Some(&path)).unwrap();
            writeln!(out, "🐱").unwrap();
            out.flush().unwrap();
        }

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "🐱\n");
    }

    #[test]
    fn missing_dictionary_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(Some(dir.path().join("missing.json").as_path())).unwrap_err();

        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn malformed_dictionary_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"emoji": "🐱"}}"#).unwrap();
        file.flush().unwrap();

        assert!(load_records(Some(file.path())).is_err());
    }

    #[test]
    fn dictionary_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{RECORDS}").unwrap();
        file.flush().unwrap();

        let records = load_records(Some(file.path())).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].glyph, "👍");
    }

    #[test]
    fn integrated_dictionary_loads() {
        assert!(!load_records(None).unwrap().is_empty());
    }

    #[test]
    fn render_text() {
        assert_eq!(
            render(&emojifier(), "the cat sat", false).unwrap(),
            "the 🐱 sat"
        );
    }

    #[test]
    fn render_json() {
        let emojifier = emojifier();

        let words: serde_json::Value =
            serde_json::from_str(&render(&emojifier, "the cat", true).unwrap()).unwrap();
        assert_eq!(words["kind"], "words");
        assert_eq!(words["fragments"][0]["token"], "the");
        assert_eq!(words["fragments"][0]["glyph"], serde_json::Value::Null);
        assert_eq!(words["fragments"][1]["glyph"], "🐱");

        let phrase: serde_json::Value =
            serde_json::from_str(&render(&emojifier, "thumbs up", true).unwrap()).unwrap();
        assert_eq!(phrase["kind"], "phrase");
        assert_eq!(phrase["phrase"], "thumbs up");
        assert_eq!(phrase["glyph"], "👍");
    }
}
