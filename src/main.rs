use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use helpdoc::config::{Opt, OutputFormat};
use helpdoc::error::Error;
use helpdoc::{render_content, translator};

fn read(opt: &Opt) -> Result<String, Error> {
    match &opt.input {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut content = String::new();
            let stdin = io::stdin();
            let mut handle = stdin.lock();
            handle
                .read_to_string(&mut content)
                .map_err(|source| Error::Read {
                    path: String::from("stdin"),
                    source,
                })?;
            Ok(content)
        }
    }
}

fn write(buf: &str) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", buf)?;
    Ok(())
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&opt.log_level)),
        )
        .with_writer(io::stderr)
        .init();
    debug!(?opt, "parsed options");

    let content = read(&opt)?;
    let tree = render_content(&content);
    info!(bytes = content.len(), nodes = tree.len(), "rendered article");
    if opt.debug {
        eprintln!(">>> tree = {:#?}", &tree);
    }

    let output = match opt.format {
        OutputFormat::Json => translator::to_json(&tree).context("rendering JSON output")?,
        OutputFormat::Html => translator::to_html(&tree),
        OutputFormat::Text => translator::to_plain_text(&tree),
        OutputFormat::Debug => format!("{:#?}", tree),
    };
    write(&output)?;
    Ok(())
}
