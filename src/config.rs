use std::path::PathBuf;
use std::str::FromStr;

use structopt::StructOpt;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Html,
    Text,
    Debug,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            "text" | "txt" => Ok(OutputFormat::Text),
            "debug" => Ok(OutputFormat::Debug),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "helpdoc", about = "Render a help center article")]
pub struct Opt {
    /// Article to render; stdin when omitted
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// json, html, text or debug
    #[structopt(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Dump the parsed tree to stderr
    #[structopt(long = "debug")]
    pub debug: bool,

    /// Default log filter; RUST_LOG takes precedence
    #[structopt(long = "log-level", default_value = "warn")]
    pub log_level: String,
}
