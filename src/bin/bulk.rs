use clap::Parser;
use ethic_assessment::{evaluate, read_bulk, telemetry, Error};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use tracing::warn;

/// Scores every answer sheet of a CSV file.
#[derive(Parser)]
struct Args {
    path: String,
    /// Pretty-print each JSON document.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Row<'a> {
    id: &'a str,
    #[serde(flatten)]
    results: ethic_assessment::Results,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    telemetry::init("warn")?;

    let reader = BufReader::new(File::open(&args.path)?);
    for (index, row) in read_bulk(reader).enumerate() {
        let scored = row.and_then(|(id, store)| {
            let data = store.submit()?;
            Ok((id, evaluate(Some(&data))?))
        });
        match scored {
            Ok((id, results)) => {
                let row = Row { id: &id, results };
                let json = if args.pretty {
                    serde_json::to_string_pretty(&row)?
                } else {
                    serde_json::to_string(&row)?
                };
                println!("{}", json);
            }
            Err(e) => warn!(row = index + 1, error = %e, "skipping answer sheet"),
        }
    }
    Ok(())
}
