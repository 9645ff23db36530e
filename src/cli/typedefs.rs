use clap::Parser;
use godag::GoDag;
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "List the relationship types declared in the file")]
pub struct Typedefs {
    /// Print only the typedef identifiers
    #[arg(long)]
    ids_only: bool,
}

impl Typedefs {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, dag: &GoDag) -> anyhow::Result<()> {
        if dag.typedefs().is_empty() {
            println!("no typedefs declared in {}", dag.source());
            return Ok(());
        }
        for (id, typedef) in dag.typedefs() {
            if self.ids_only {
                println!("{id}");
            } else {
                println!("{typedef}");
            }
        }
        Ok(())
    }
}
