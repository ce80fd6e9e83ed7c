// src/bin/pass2kdbx.rs
//! Interactive pass → KeePass2 migration, plus a scripted quick mode

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use pass2kdbx::{ConvertError, KdbxWriter, PassEntry, StoreReader};

#[derive(Parser, Debug)]
#[command(version, about = "Convert a pass password store into a KeePass2 (kdbx) database")]
struct Args {
    /// Password store location (defaults to the configured store directory)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Destination kdbx file (defaults to the configured output path)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scripted mode: one passphrase both unlocks the store and keys the new database
    #[arg(short, long)]
    quick: bool,

    /// Replace the destination file if it already exists
    #[arg(short, long)]
    force_overwrite: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    ctrlc::set_handler(|| {
        println!("\n\nAlright, bye!");
        process::exit(0);
    })
    .context("failed to install the SIGINT handler")?;

    let args = Args::parse();
    let config = pass2kdbx::load_config();
    let store_dir = args
        .input
        .unwrap_or_else(|| PathBuf::from(&config.paths.store_dir));
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.paths.output));

    if args.quick {
        run_quick(&store_dir, &output, args.force_overwrite)
    } else {
        run_interactive(&store_dir, &output, args.force_overwrite)
    }
}

/// Interactive script: banner, confirmation, separate database password.
fn run_interactive(store_dir: &Path, output: &Path, overwrite: bool) -> Result<()> {
    println!("Welcome! pass2kdbx will convert your pass database into a keepass2 one.\n");
    println!(
        "> WARNING < This tool DOES NOT try to be memory secure: your passwords will NOT be \
         encrypted while in memory, so you probably want to run it on trusted hardware.\n"
    );
    println!("The tool will now read your input password-store, so you will probably be asked to");
    println!("unlock it. Keep in mind this may take a while, depending on the number of entries.\n");
    println!("Input password-store: {}", store_dir.display());
    println!("Output keepass2 database: {}\n", output.display());

    if !confirm("Are you ready to proceed? [Y/n] ")? {
        println!("Ok, bye!");
        process::exit(1);
    }
    println!();

    let reader = StoreReader::with_root(store_dir);
    let entries = read_store(&reader);
    println!(
        "\nPassword-store decrypted! {} entries are ready to be converted.",
        entries.len()
    );

    println!("Now choose a strong password for your new keepass database!\n");
    let password = choose_password()?;

    println!("\nAlright! It's finally time to write the keepass db. Hold tight, this might take a while!\n");
    let count = convert(&entries, output, &password, overwrite);

    println!("\nALL DONE! {count} entries have been added to the new keepass database!");
    println!("Have a nice day!");
    Ok(())
}

/// Quick script: a single passphrase unlocks the store (loopback
/// pinentry) and keys the new database.
fn run_quick(store_dir: &Path, output: &Path, overwrite: bool) -> Result<()> {
    println!(
        "Insert the password that will be used for decrypting the pass \
         store and encrypting the new keepass db:"
    );
    let password = rpassword::prompt_password("-> ").context("failed to read the passphrase")?;

    let reader = StoreReader::with_root(store_dir).passphrase(password.clone());
    let entries = read_store(&reader);
    println!();

    let count = convert(&entries, output, &password, overwrite);
    println!("\nALL DONE! {count} entries converted! Bye!");
    Ok(())
}

fn read_store(reader: &StoreReader) -> Vec<PassEntry> {
    let result = reader.read_all(&mut |done: usize, total: usize| {
        print_percent(" > Reading password-store...", done, total);
    });
    println!();

    match result {
        Ok(entries) => entries,
        Err(err) => {
            warn!(%err, "store read failed");
            eprintln!("\n>> ERROR: error while parsing the password-store entries.");
            process::exit(1);
        }
    }
}

/// Create, populate and save the destination database. Every phase
/// failure prints a generic error and exits, matching the all-or-nothing
/// contract of the migration.
fn convert(entries: &[PassEntry], output: &Path, password: &str, overwrite: bool) -> usize {
    print_percent(" > Creating the new keepass database...", 0, 1);
    let mut writer = match KdbxWriter::create(output, password, overwrite) {
        Ok(writer) => writer,
        Err(ConvertError::DestinationExists(_)) => {
            eprintln!(
                "\n>> ERROR: keepass database file already exists! \
                 Use -f if you want to force overwriting."
            );
            process::exit(1);
        }
        Err(err) => {
            warn!(%err, "database creation failed");
            eprintln!("\n>> ERROR: error while writing the new db.");
            process::exit(1);
        }
    };
    print_percent(" > Creating the new keepass database...", 1, 1);
    println!();

    writer.populate(entries, &mut |done: usize, total: usize| {
        print_percent(" > Writing keepass database...", done, total);
    });
    println!();

    if let Err(err) = writer.save() {
        warn!(%err, "database save failed");
        eprintln!("\n>> ERROR: error while adding entries to the new db.");
        process::exit(1);
    }

    writer.entry_count()
}

/// Double-entry hidden prompt; loops until both entries match.
fn choose_password() -> Result<String> {
    loop {
        let first = rpassword::prompt_password("A strong password: ")
            .context("failed to read the password")?;
        let second =
            rpassword::prompt_password("Enter it again! ").context("failed to read the password")?;
        if first == second {
            return Ok(first);
        }
        println!("\n >>> Entered passwords do not match, try again.\n");
    }
}

/// `[Y/n]` line prompt; empty input counts as yes.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let answer = input.trim().to_ascii_lowercase();
    Ok(answer.is_empty() || answer == "y")
}

fn print_percent(label: &str, done: usize, total: usize) {
    let percent = if total == 0 {
        100
    } else {
        100 * done / total
    };
    print!("{label} {percent}%\r");
    let _ = io::stdout().flush();
}
