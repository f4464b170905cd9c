extern crate env_logger;
#[macro_use]
extern crate log;
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use seqsieve::cli::{self, Cli, Commands};
use seqsieve::filter::FilterConfig;
use seqsieve::{fasta, pipeline, seq};

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Filter {
            input,
            output,
            gc,
            len,
            qual,
            out_dir,
            summary,
        } => {
            info!("seqsieve v{}", cli::VERSION);

            let config = FilterConfig::new(*gc, *len, *qual);
            info!(
                "Filtering with GC {}-{}%, length {}-{}, quality >= {}",
                config.gc_bounds.min,
                config.gc_bounds.max,
                config.length_bounds.min,
                config.length_bounds.max,
                config.quality_threshold
            );

            let output = Path::new(out_dir).join(output);
            let stats = pipeline::run_filter_fastq(input, &output, config)?;

            if let Some(path) = summary {
                stats.write_json(path)?;
                info!("Wrote summary to {path}");
            }
            info!("Completed filtering to {}", output.display());
        }
        Commands::Transform { operation, seqs } => {
            for result in seq::run_dna_rna_tools(seqs.as_slice(), operation)? {
                println!("{result}");
            }
        }
        Commands::Oneline {
            input,
            output,
            out_dir,
        } => {
            let path = fasta::convert_multiline_fasta_to_oneline(input, output.as_deref(), out_dir)?;
            info!("Completed conversion to {}", path.display());
        }
    };
    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        std::process::exit(1);
    }
}
