use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{builder::TypedValueParser, Args, Parser, Subcommand};
use log::LevelFilter;
use rhuff::{Codec, CodecConfig, Framing, MAX_CODE_LENGTH};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compress a file with a code trained on another file
    Encode(Transform),
    /// Restore a file compressed with the same training file
    Decode(Transform),
    /// Print the code of every byte value
    Codes {
        /// Path of the training file
        training: PathBuf,

        #[command(flatten)]
        options: CodecOptions,
    },
}

#[derive(Args, Debug)]
struct Transform {
    /// Path of the training file
    training: PathBuf,

    /// Path of the input file
    input: PathBuf,

    /// Path of the output file
    output: PathBuf,

    #[command(flatten)]
    options: CodecOptions,
}

#[derive(Args, Debug)]
struct CodecOptions {
    /// How the end of the encoded stream is marked
    #[arg(long, value_enum, default_value_t = Framing::Counted)]
    framing: Framing,

    /// Reject trees with codes longer than this
    #[arg(long, default_value_t = MAX_CODE_LENGTH,
          value_parser = clap::value_parser!(u8).range(1..=MAX_CODE_LENGTH as i64).map(usize::from))]
    max_code_length: usize,
}

impl From<&CodecOptions> for CodecConfig {
    fn from(options: &CodecOptions) -> Self {
        CodecConfig {
            framing: options.framing,
            max_code_length: options.max_code_length,
        }
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("cannot open \"{}\"", path.display()))
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("cannot create \"{}\"", path.display()))
}

fn train(training: &Path, options: &CodecOptions) -> Result<Codec> {
    let mut file = open(training)?;
    Codec::train(&mut file, options.into())
        .with_context(|| format!("cannot build a code from \"{}\"", training.display()))
}

fn print_codes(codec: &Codec) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let frequencies: Vec<u64> = {
        let mut f = vec![0; rhuff::ALPHABET_SIZE];
        for (symbol, frequency, _) in codec.tree().leaves() {
            f[symbol as usize] = frequency;
        }
        f
    };

    for (symbol, code) in codec.codes().iter() {
        writeln!(
            out,
            "{:#04x}\t{}\t{}\t{}",
            symbol,
            frequencies[symbol as usize],
            code.len(),
            code
        )?;
    }

    let stats = codec.tree().stats();
    writeln!(
        out,
        "# {} leaves, {} internal nodes, longest code {} bits, training data encodes to {} bits",
        stats.leaves, stats.internal, stats.deepest.1, stats.weighted_length
    )?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match args.command {
        Commands::Encode(t) => {
            let codec = train(&t.training, &t.options)?;
            let mut input = open(&t.input)?;
            let mut output = create(&t.output)?;
            codec
                .encode(&mut input, &mut output)
                .with_context(|| format!("error while encoding \"{}\"", t.input.display()))?;
        }
        Commands::Decode(t) => {
            let codec = train(&t.training, &t.options)?;
            let mut input = open(&t.input)?;
            let mut output = create(&t.output)?;
            codec
                .decode(&mut input, &mut output)
                .with_context(|| format!("error while decoding \"{}\"", t.input.display()))?;
        }
        Commands::Codes { training, options } => {
            let codec = train(&training, &options)?;
            print_codes(&codec)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rhuff::{Framing, MAX_CODE_LENGTH};

    use super::{Cli, Commands};

    #[test]
    fn encode_takes_three_paths() {
        let cli = Cli::try_parse_from(["rhuff", "encode", "train.txt", "in.txt", "out.huff"]).unwrap();

        match cli.command {
            Commands::Encode(t) => {
                assert_eq!(t.training.to_str(), Some("train.txt"));
                assert_eq!(t.input.to_str(), Some("in.txt"));
                assert_eq!(t.output.to_str(), Some("out.huff"));
                assert_eq!(t.options.framing, Framing::Counted);
                assert_eq!(t.options.max_code_length, MAX_CODE_LENGTH);
            }
            other => panic!("expected encode, got {:?}", other),
        }
    }

    #[test]
    fn max_code_length_is_parsed_and_bounded() {
        let cli = Cli::try_parse_from([
            "rhuff", "decode", "t", "i", "o", "--framing", "raw", "--max-code-length", "12",
        ])
        .unwrap();
        match cli.command {
            Commands::Decode(t) => {
                assert_eq!(t.options.framing, Framing::Raw);
                assert_eq!(t.options.max_code_length, 12);
            }
            other => panic!("expected decode, got {:?}", other),
        }

        assert!(Cli::try_parse_from(["rhuff", "codes", "t", "--max-code-length", "33"]).is_err());
        assert!(Cli::try_parse_from(["rhuff", "codes", "t", "--max-code-length", "0"]).is_err());
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        assert!(Cli::try_parse_from(["rhuff", "encode", "train.txt", "in.txt"]).is_err());
        assert!(Cli::try_parse_from(["rhuff", "decode", "a", "b", "c", "d"]).is_err());
    }
}
