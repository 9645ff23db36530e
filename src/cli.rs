use std::path::PathBuf;

mod hier;
mod lineage;
mod paths;
mod show;
mod summary;
mod typedefs;

use anyhow::Context;
use clap::ArgAction;
use godag::{GoDag, LoadOptions, OptionalAttr};
use hier::Hier;
use lineage::Lineage;
use paths::Paths;
use show::Show;
use summary::Summary;
use tracing::instrument;
use typedefs::Typedefs;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The OBO file to load
    #[arg(long, default_value = "go-basic.obo", global = true)]
    obo: PathBuf,

    /// A TOML file of load options
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Load an optional term attribute (repeatable)
    ///
    /// One of: comment, def (or defn), is_class_level, is_metadata_tag,
    /// is_transitive, transitive_over, consider, replaced_by, subset,
    /// synonym, xref, relationship.
    #[arg(short = 'a', long = "attr", global = true)]
    attrs: Vec<OptionalAttr>,

    /// Keep terms marked obsolete
    #[arg(long, global = true)]
    load_obsolete: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let dag = self.load()?;
        self.command
            .unwrap_or_else(|| Command::Summary(Summary::default()))
            .run(&dag)
    }

    #[instrument(level = "debug", skip(self))]
    fn load(&self) -> anyhow::Result<GoDag> {
        let mut options = match &self.options {
            Some(path) => LoadOptions::load(path)
                .with_context(|| format!("failed to read load options from {}", path.display()))?,
            None => LoadOptions::default(),
        };
        for attr in &self.attrs {
            options.enable(*attr);
        }
        if self.load_obsolete {
            options = options.with_obsolete(true);
        }

        GoDag::load(&self.obo, &options)
            .with_context(|| format!("failed to load {}", self.obo.display()))
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Summarise the loaded ontology (default)
    Summary(Summary),

    /// Show a single term
    Show(Show),

    /// Print the hierarchy below one or more terms
    ///
    /// With no terms, every root is printed in identifier order.
    Hier(Hier),

    /// Print every path from a root down to a term
    Paths(Paths),

    /// Export the lineage of one or more terms as Graphviz DOT
    Lineage(Lineage),

    /// List the relationship types declared in the file
    Typedefs(Typedefs),
}

impl Command {
    fn run(self, dag: &GoDag) -> anyhow::Result<()> {
        match self {
            Self::Summary(command) => command.run(dag)?,
            Self::Show(command) => command.run(dag)?,
            Self::Hier(command) => command.run(dag)?,
            Self::Paths(command) => command.run(dag)?,
            Self::Lineage(command) => command.run(dag)?,
            Self::Typedefs(command) => command.run(dag)?,
        }
        Ok(())
    }
}
