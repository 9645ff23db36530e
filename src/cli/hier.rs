use std::{collections::BTreeSet, io::Write};

use clap::Parser;
use godag::{GoDag, HierOptions};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Print the hierarchy below one or more terms")]
pub struct Hier {
    /// Terms to start from (defaults to every root)
    ids: Vec<String>,

    /// Deepest level to print, counting the starting term as 1
    #[arg(long)]
    max_depth: Option<usize>,

    /// Expand each repeated subtree only once
    #[arg(long)]
    short: bool,

    /// Prefix each line with the number of descendants
    #[arg(long)]
    num_child: bool,

    /// Flag these terms in a leading mark column
    #[arg(long, value_delimiter = ',')]
    mark: Vec<String>,

    /// Print only these terms
    #[arg(long, value_delimiter = ',')]
    include_only: Vec<String>,

    /// Omit the dash column
    #[arg(long)]
    no_dashes: bool,
}

impl Hier {
    #[instrument(level = "debug", skip(dag))]
    pub fn run(self, dag: &GoDag) -> anyhow::Result<()> {
        let options = HierOptions {
            len_dash: (!self.no_dashes).then_some(1),
            max_depth: self.max_depth,
            num_child: self.num_child,
            short_prt: self.short,
            include_only: non_empty(self.include_only),
            marks: non_empty(self.mark),
        };

        let mut out = std::io::stdout().lock();
        if self.ids.is_empty() {
            dag.write_hier_all(&mut out, &options)?;
        } else {
            for id in &self.ids {
                dag.write_hier(id, &mut out, &options)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn non_empty(ids: Vec<String>) -> Option<BTreeSet<String>> {
    (!ids.is_empty()).then(|| ids.into_iter().collect())
}
