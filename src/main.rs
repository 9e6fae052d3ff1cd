use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use offthehook::export::{self, html::HtmlEncoder, DocumentEncoder};
use offthehook::script::{self, Step};
use offthehook::{
    design, rendering, Artifact, Editor, EditorConfig, Exporter, LoadMode, Outcome,
};

#[derive(Parser)]
#[command(name = "offthehook", version, about = "Paint pixel grids and export them as document tables")]
struct Cli {
    /// Title placed above exported tables
    #[arg(long, global = true)]
    title: Option<String>,

    /// Pad or truncate designs whose color count does not match their size
    #[arg(long, global = true)]
    lenient: bool,

    /// Export HTML tables instead of the default document format
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Write an empty design file
    New {
        #[arg(long)]
        rows: i64,
        #[arg(long)]
        cols: i64,
        #[arg(long = "cell-size", default_value_t = 20)]
        cell_size: i64,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a design file as a document
    Export {
        design: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run an editor command script
    Run { script: PathBuf },
    /// Print a summary of a design file
    Info { design: PathBuf },
}

impl Cli {
    fn editor(&self) -> Editor {
        let mut config = EditorConfig::default();
        if let Some(title) = &self.title {
            config.document_title = title.clone();
        }
        if self.lenient {
            config.load_mode = LoadMode::Lenient;
        }
        Editor::with_encoder(config, self.encoder())
    }

    fn encoder(&self) -> Box<dyn DocumentEncoder> {
        if self.html {
            Box::new(HtmlEncoder::new())
        } else {
            export::new_encoder()
        }
    }
}

fn write_artifact(artifact: &Artifact, path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&artifact.file_name));
    fs::write(&path, &artifact.bytes).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {} ({} bytes)", path.display(), artifact.bytes.len());
    Ok(path)
}

fn load_file(editor: &mut Editor, path: &Path) -> anyhow::Result<()> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    editor
        .load_design(&bytes)
        .with_context(|| format!("loading {}", path.display()))
}

async fn run_script(editor: &mut Editor, exporter: &Exporter, path: &Path) -> anyhow::Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    for step in script::parse(&source)? {
        match step {
            Step::Apply(command) => match editor.apply(command)? {
                Outcome::Exported(a) | Outcome::Saved(a) => {
                    write_artifact(&a, None)?;
                }
                Outcome::Updated | Outcome::Unchanged => {}
            },
            Step::Save(target) => {
                let artifact = editor.save_design()?;
                write_artifact(&artifact, target.as_deref())?;
            }
            Step::Export(target) => {
                let artifact = editor.export_with(exporter).await?;
                write_artifact(&artifact, target.as_deref())?;
            }
            Step::Load(file) => load_file(editor, &file)?,
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut editor = cli.editor();
    let exporter = Exporter::with_encoder(cli.encoder());

    match &cli.command {
        Cmd::New { rows, cols, cell_size, output } => {
            editor.create_grid(*rows, *cols, *cell_size)?;
            let path = write_artifact(&editor.save_design()?, output.as_deref())?;
            println!("{}", path.display());
        }
        Cmd::Export { design, output } => {
            load_file(&mut editor, design)?;
            let artifact = editor.export_with(&exporter).await?;
            let path = write_artifact(&artifact, output.as_deref())?;
            println!("{}", path.display());
        }
        Cmd::Run { script } => run_script(&mut editor, &exporter, script).await?,
        Cmd::Info { design: path } => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let mode = editor.load_mode();
            let grid = design::load_bytes(&bytes, mode)?;
            let (width, height) = rendering::layout::canvas_size(&grid);
            println!("rows:      {}", grid.rows());
            println!("cols:      {}", grid.cols());
            println!("cell size: {}px", grid.cell_size());
            println!("painted:   {}/{}", grid.painted_count(), grid.len());
            println!("canvas:    {}x{}", width, height);
            match rendering::rasterize(&grid) {
                Ok(frame) => println!("digest:    {}", frame.digest()),
                Err(e) => println!("digest:    unavailable ({e})"),
            }
        }
    }

    exporter.close().await?;
    Ok(())
}
