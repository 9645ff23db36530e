use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use godag::{GoDag, LineageOptions};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Export the lineage of one or more terms as Graphviz DOT")]
pub struct Lineage {
    /// The query terms
    #[arg(required = true)]
    ids: Vec<String>,

    /// Write the DOT text here instead of to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave out the ancestors of the query terms
    #[arg(long)]
    no_parents: bool,

    /// Leave out the descendants of the query terms
    #[arg(long)]
    no_children: bool,

    /// Border colour of each node
    #[arg(long, default_value = "mediumseagreen")]
    node_color: String,

    /// Colour of each edge
    #[arg(long, default_value = "lightslateblue")]
    edge_color: String,

    /// Resolution hint for the renderer
    #[arg(long, default_value_t = 96)]
    dpi: u32,
}

impl Lineage {
    #[instrument(level = "debug", skip(dag))]
    pub fn run(self, dag: &GoDag) -> anyhow::Result<()> {
        let options = LineageOptions {
            draw_parents: !self.no_parents,
            draw_children: !self.no_children,
            node_color: self.node_color,
            edge_color: self.edge_color,
            dpi: self.dpi,
        };
        let lineage = dag.lineage(&self.ids, options);

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                let mut out = BufWriter::new(file);
                lineage.write_dot(&mut out)?;
                out.flush()?;
                tracing::info!("lineage for {:?} written to {}", self.ids, path.display());
            }
            None => {
                let mut out = std::io::stdout().lock();
                lineage.write_dot(&mut out)?;
                out.flush()?;
            }
        }
        Ok(())
    }
}
