// ClipRing - Point d'entree
// Hote de demonstration du ring de copies
//
// Ce binaire joue le role de l'application hote : chaque ligne lue sur
// l'entree standard (ou chaque bloc separe par NUL avec `--null`) est
// traitee comme une copie, puis la boite a outils est affichee, la
// copie la plus recente en premier.
//
// # Configuration
// `--config` designe un fichier TOML ; sinon le fichier par defaut
// `<config_dir>/clipring/config.toml` est lu s'il existe.
// `--init-config` ecrit ce fichier avec les valeurs par defaut.
//
// # Journalisation
// Les traces vont sur stderr, niveau regle par RUST_LOG (defaut: info).

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clipring::{App, RingError, RingResult, Settings, ToolboxItem};

/// Ring de copies recentes, alimente par l'entree standard.
#[derive(Parser, Debug)]
#[command(name = "clipring", version, about)]
struct Cli {
    /// Fichier de configuration TOML
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Remplace la capacite du ring
    #[arg(long, value_name = "N")]
    capacity: Option<usize>,

    /// N'affiche que les copies contenant ce mot-cle (casse ignoree)
    #[arg(short, long, value_name = "KEYWORD")]
    filter: Option<String>,

    /// Copies separees par NUL au lieu de retours a la ligne
    #[arg(short = '0', long)]
    null: bool,

    /// Affiche l'apercu multi-ligne au lieu du nom
    #[arg(short, long)]
    preview: bool,

    /// Ecrit le fichier de configuration par defaut puis quitte
    #[arg(long)]
    init_config: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("clipring: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> RingResult<()> {
    if cli.init_config {
        let path = cli
            .config
            .or_else(Settings::default_path)
            .ok_or_else(|| RingError::Config("no configuration directory available".into()))?;
        Settings::save_default(&path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(capacity) = cli.capacity {
        settings.ring.capacity = capacity;
        settings = settings.validated();
    }

    let mut app = App::new(settings);
    let notifications = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notifications);
    app.subscribe(move || {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let copies: Vec<&str> = if cli.null {
        input.split('\0').collect()
    } else {
        input.lines().collect()
    };
    let changed = app.drain_copies(&mut copies.into_iter().map(|c| Some(c.to_string())));
    info!(
        changed,
        notifications = notifications.load(Ordering::Relaxed),
        items = app.ring().len(),
        "input consumed"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, node) in app.toolbox_items(cli.filter.as_deref()).iter().enumerate() {
        if cli.preview {
            writeln!(out, "{:>2}:", i)?;
            for line in node.description().lines() {
                writeln!(out, "    {}", line)?;
            }
        } else {
            writeln!(out, "{:>2}: {}", i, node.name())?;
        }
    }
    Ok(())
}

/// Un chemin explicite doit etre valide ; le chemin par defaut est optionnel.
fn load_settings(explicit: Option<&std::path::Path>) -> RingResult<Settings> {
    match explicit {
        Some(path) => Settings::load(path),
        None => Ok(Settings::default_path()
            .map(|path| Settings::load_or_default(&path))
            .unwrap_or_default()),
    }
}
