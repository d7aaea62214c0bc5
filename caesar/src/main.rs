use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use caesar_cipher::{
    CaesarCipher, Cracker, Dictionary, Key, LegacyShift, ModularShift, ShiftTransform,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the Caesar cipher program.
#[derive(Parser, Debug)]
#[command(name = "caesar", version, about = "Encrypt, decrypt and crack Caesar ciphers")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = ShiftVariant::Legacy,
        help = "Rotation used for shifting letters"
    )]
    shift: ShiftVariant,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a message with a known key
    Encrypt {
        #[arg(short, long, help = "Path to the message file")]
        file: PathBuf,

        #[arg(short, long, help = "Key letter A-Z (or offset 0-25)")]
        key: Key,

        #[arg(short, long, help = "Path to the output file")]
        output: Option<PathBuf>,
    },
    /// Decrypt a cipher with a known key
    Decrypt {
        #[arg(short, long, help = "Path to the cipher file")]
        file: PathBuf,

        #[arg(short, long, help = "Key letter A-Z (or offset 0-25)")]
        key: Key,

        #[arg(short, long, help = "Path to the output file")]
        output: Option<PathBuf>,
    },
    /// Recover the key of a cipher from letter frequencies
    Crack {
        #[arg(short, long, help = "Path to the cipher file")]
        file: PathBuf,

        #[arg(short, long, help = "Path to the dictionary frequency file (26 lines, A to Z)")]
        dictionary: PathBuf,

        #[arg(short, long, help = "Path to the output file")]
        output: Option<PathBuf>,

        #[arg(long, help = "Print the recovered key and the score of every key")]
        scores: bool,
    },
}

/// Rotation variant for forward shifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ShiftVariant {
    /// Bit-compatible rotation (forward wrap reduces modulo 25)
    Legacy,
    /// Plain modulo-26 rotation
    Modular,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    debug!(shift = ?cli.shift, "parsed arguments");
    match cli.shift {
        ShiftVariant::Legacy => run(cli.command, LegacyShift),
        ShiftVariant::Modular => run(cli.command, ModularShift),
    }
}

fn init_logging(verbose: bool) {
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("caesar=debug,caesar_cipher=debug")
    } else {
        EnvFilter::new("caesar=warn,caesar_cipher=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run<S: ShiftTransform>(command: Command, transform: S) -> Result<()> {
    match command {
        Command::Encrypt { file, key, output } => {
            let message = read_input(&file)?;
            info!(%key, file = %file.display(), "encrypting");
            let cipher = CaesarCipher::new(transform).encrypt(&message, key);
            write_output(&cipher, output.as_deref())
        }
        Command::Decrypt { file, key, output } => {
            let cipher = read_input(&file)?;
            info!(%key, file = %file.display(), "decrypting");
            let message = CaesarCipher::new(transform).decrypt(&cipher, key);
            write_output(&message, output.as_deref())
        }
        Command::Crack { file, dictionary, output, scores } => {
            let cipher = read_input(&file)?;
            let dictionary = Dictionary::load(&dictionary)
                .with_context(|| format!("Failed to load dictionary {}", dictionary.display()))?;
            let outcome = Cracker::with_transform(dictionary, transform)
                .crack(&cipher)
                .with_context(|| format!("Failed to crack {}", file.display()))?;

            if scores {
                println!("Recovered key: {}", outcome.key);
                for (key, score) in &outcome.candidates {
                    println!("{}  {:.6}", key.letter(), score);
                }
            }
            write_output(&outcome.plaintext, output.as_deref())
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read the input file {}", path.display()))
}

fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write the output file {}", path.display())),
        None => {
            print!("{}", with_trailing_newline(text));
            Ok(())
        }
    }
}

fn with_trailing_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}
