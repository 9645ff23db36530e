use std::collections::BTreeMap;

use clap::Parser;
use godag::GoDag;
use tracing::instrument;

#[derive(Debug, Parser, Default)]
#[command(about = "Summarise the loaded ontology")]
pub struct Summary {
    /// Also list every root term
    #[arg(long)]
    roots: bool,
}

impl Summary {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, dag: &GoDag) -> anyhow::Result<()> {
        println!("{}", dag.version_summary());

        let mut namespaces: BTreeMap<&str, usize> = BTreeMap::new();
        for term in dag.terms() {
            *namespaces.entry(term.term().namespace.as_str()).or_insert(0) += 1;
        }
        for (namespace, count) in &namespaces {
            let namespace = if namespace.is_empty() { "(none)" } else { *namespace };
            println!("  {namespace:<20} {count:>8}");
        }

        let mut roots: Vec<_> = dag.roots().collect();
        roots.sort_by_key(|root| root.id());
        println!(
            "{} terms, {} roots, {} typedefs",
            dag.len(),
            roots.len(),
            dag.typedefs().len()
        );
        if !dag.unresolved().is_empty() {
            println!("{} unresolved references", dag.unresolved().len());
        }

        if self.roots {
            for root in roots {
                println!("  {}\t{}", root.id(), root.name);
            }
        }
        Ok(())
    }
}
