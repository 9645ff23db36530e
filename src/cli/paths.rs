use clap::Parser;
use godag::{GoDag, TermView};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Print every path from a root down to a term")]
pub struct Paths {
    /// The term to trace
    id: String,
}

impl Paths {
    #[instrument(level = "debug", skip(dag))]
    pub fn run(self, dag: &GoDag) -> anyhow::Result<()> {
        let Some(paths) = dag.paths_to_top(&self.id) else {
            anyhow::bail!("term {} not found", self.id);
        };
        for path in paths {
            let ids: Vec<_> = path.into_iter().map(TermView::id).collect();
            println!("{}", ids.join(" > "));
        }
        Ok(())
    }
}
