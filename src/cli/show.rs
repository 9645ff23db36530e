use clap::Parser;
use godag::{GoDag, TermView};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Display a term and its immediate neighbourhood")]
pub struct Show {
    /// The term to display (alternate identifiers are accepted)
    id: String,

    /// List every ancestor
    #[arg(long)]
    ancestors: bool,

    /// List every descendant
    #[arg(long)]
    descendants: bool,
}

impl Show {
    #[instrument(level = "debug", skip(dag))]
    pub fn run(self, dag: &GoDag) -> anyhow::Result<()> {
        let Some(term) = dag.query_term(&self.id) else {
            anyhow::bail!("term {} not found", self.id);
        };

        println!("{term}");
        if term.id() != self.id {
            println!("  (alternate id of {})", term.id());
        }
        if !term.alt_ids.is_empty() {
            println!("  alt_id:    {}", term.alt_ids.join(", "));
        }
        print_ids("is_a", term.parents());
        print_ids("children", term.children());

        for typedef in term.relationship_types() {
            print_ids(typedef, term.relationship(typedef));
        }
        for (attr, value) in term.attrs.scalars() {
            println!("  {attr}: {value}");
        }
        for (attr, values) in term.attrs.sets() {
            for value in values {
                println!("  {attr}: {value}");
            }
        }

        if self.ancestors {
            println!("ancestors:");
            for id in term.all_parents() {
                println!("  {id}");
            }
        }
        if self.descendants {
            println!("descendants:");
            for id in term.all_children() {
                println!("  {id}");
            }
        }
        Ok(())
    }
}

fn print_ids<'a>(label: &str, terms: impl Iterator<Item = TermView<'a>>) {
    let ids: Vec<_> = terms.map(TermView::id).collect();
    if !ids.is_empty() {
        println!("  {label}: {}", ids.join(", "));
    }
}
