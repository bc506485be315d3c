use std::io::Write;

use clap::{Parser, ValueEnum};
use log::{debug, LevelFilter};

use boolfn::report::{Language, Report};
use boolfn::table::TruthTable;

#[derive(Debug, Clone, ValueEnum)]
enum Lang {
    /// Ukrainian labels
    Uk,
    /// English labels
    En,
}

impl From<Lang> for Language {
    fn from(val: Lang) -> Self {
        match val {
            Lang::Uk => Language::Ukrainian,
            Lang::En => Language::English,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "boolfn")]
#[command(about = "Normal forms and properties of a three-variable Boolean function", long_about = None)]
struct Args {
    /// Language of the report labels
    #[arg(long, value_enum, default_value = "uk")]
    lang: Lang,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    debug!("args = {:?}", args);

    let table = TruthTable::sample()?;
    let report = Report::analyze(&table)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.write_to(&mut out, args.lang.into())?;
    out.flush()?;

    Ok(())
}
