use anyhow::bail;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use xsv_parse::{parse, text_from_path, Dialect, DialectOptions, QuoteEscape};

fn main() -> anyhow::Result<()> {
    let matches = Command::new("preview")
        .arg(
            Arg::new("path")
                .long("path")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true),
        )
        .arg(Arg::new("delim").long("delim").default_value(","))
        .arg(Arg::new("quote").long("quote").default_value("\""))
        .arg(
            Arg::new("escape")
                .long("escape")
                .help("Quote escape convention: repeat or backslash")
                .default_value("repeat"),
        )
        .arg(
            Arg::new("headers")
                .long("headers")
                .help("Treat the first row as column labels")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("trim-leading")
                .long("trim-leading")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("trim-trailing")
                .long("trim-trailing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rows")
                .long("rows")
                .help("How many rows to show")
                .value_parser(clap::value_parser!(usize))
                .default_value("8"),
        )
        .get_matches();

    let quote_escape = match matches.get_one::<String>("escape").unwrap().as_str() {
        "repeat" => QuoteEscape::Repeat,
        "backslash" => QuoteEscape::Backslash,
        other => bail!("unknown escape convention '{other}' (expected repeat or backslash)"),
    };

    let dialect = Dialect::new(DialectOptions {
        delimiter: matches.get_one::<String>("delim").unwrap().clone(),
        quote: matches.get_one::<String>("quote").unwrap().clone(),
        quote_escape,
        read_headers: matches.get_flag("headers"),
        trim_leading: matches.get_flag("trim-leading"),
        trim_trailing: matches.get_flag("trim-trailing"),
    })?;

    let path = matches.get_one::<PathBuf>("path").unwrap();
    let window = *matches.get_one::<usize>("rows").unwrap();

    let (text, _meta) = text_from_path(path)?;
    let doc = parse(&text, &dialect)?;

    if let Some(header) = doc.header() {
        println!("{}", header.join(" | "));
        println!("{}", "-".repeat(header.join(" | ").len().max(4)));
    }
    for row in doc.first(window) {
        println!("{}", row.join(" | "));
    }
    println!(
        "source={} rows={} shown={}",
        path.display(),
        doc.row_count(),
        doc.first(window).len()
    );
    Ok(())
}
