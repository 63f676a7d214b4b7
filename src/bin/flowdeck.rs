use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = "\
The folder holds exactly one *.yml file and one *.svg per distinct flow id.
The output <name>.html is written next to the *.yml, named after it.

YAML schema:

    min: 1em                  # minimized narration font size (em, px or vmax)
    max: 2.5em                # expanded font size
    sections:
    - flows:
      - html: ...             # narration HTML
        seconds: 2            # seconds to dwell on this flow
        id: intro             # intro.svg is displayed
        centered: true        # optional
        focus: \"0,0,1000,1000;250,250,500,500 1 3\"
        highlight: \"100,100,200,80 #ff0000 4 0;1 0 1\"
      subsections:
      - flows:
        - html: ...
          seconds: 2
          id: intro

SVG files should be 1000x1000; --seed writes a guide canvas to start from.";

#[derive(Parser, Debug)]
#[command(name = "flowdeck", version, about, after_long_help = AFTER_HELP)]
struct Cli {
    /// Folder holding the *.yml description and its *.svg files.
    #[arg(short, long, default_value = "./")]
    folder: PathBuf,

    /// Populate the (empty) folder with a starter *.yml and *.svg instead of building.
    #[arg(short, long)]
    seed: bool,

    /// Output path; defaults to `<folder>/<yml name>.html`.
    #[arg(short, long, conflicts_with = "seed")]
    out: Option<PathBuf>,

    /// Compile and validate everything, but write nothing.
    #[arg(long, conflicts_with_all = ["seed", "out"])]
    check: bool,

    /// Log debug details of every pass.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let folder = std::path::absolute(&cli.folder)
        .with_context(|| format!("resolve folder '{}'", cli.folder.display()))?;
    tracing::info!(folder = %folder.display(), "working with folder");

    if cli.seed {
        for path in flowdeck::seed_folder(&folder)? {
            eprintln!("seeded {}", path.display());
        }
        return Ok(());
    }

    let project = flowdeck::Project::open(&folder)?;
    let opts = flowdeck::CompileOptions::default();
    let renderer = flowdeck::PageRenderer::default();

    if cli.check {
        let bytes = project.render(&opts, &renderer)?;
        eprintln!(
            "{} OK ({} bytes would be written)",
            project.document_path().display(),
            bytes.len()
        );
        return Ok(());
    }

    let out = cli
        .out
        .unwrap_or_else(|| project.default_output_path(&opts));
    project.build(&out, &opts, &renderer)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "flowdeck=debug" } else { "flowdeck=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
