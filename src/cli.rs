use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{Parser, Subcommand};

use crate::filter::{parse_gc_bounds, BoundsArg, MAX_GC, MAX_LENGTH};

fn parse_quality(arg: &str) -> Result<f64, String> {
    let qual: f64 = arg
        .trim()
        .parse()
        .map_err(|_| format!("'{arg}' is not a number"))?;
    if !qual.is_finite() || qual < 0.0 {
        return Err(format!(
            "quality threshold must be a finite, non-negative number, got '{arg}'"
        ));
    }
    Ok(qual)
}

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 seqsieve version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   streaming FASTQ filtering and nucleotide sequence utilities";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    flatten_help = true,
    styles = STYLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter a .fastq file by GC content, read length and average quality
    #[command(arg_required_else_help = true)]
    Filter {
        /// the input .fastq file
        input: String,

        /// the output .fastq file name, placed inside --out-dir. must not already exist
        output: String,

        /// keep reads whose GC percentage is within the interval [a,b], both inclusive.
        /// a single value b is shorthand for `0,b`. both must lie within 0 and 100.
        #[arg(
            long,
            value_parser = parse_gc_bounds,
            default_value_t = BoundsArg::Pair(0.0, MAX_GC),
            hide_default_value = true,
            verbatim_doc_comment
        )]
        gc: BoundsArg<f64>,

        /// keep reads whose length is within the interval [a,b], both inclusive.
        /// a single value b is shorthand for `0,b`, and b can be `inf`:
        ///   --len 150
        ///   --len 50,150
        ///   --len 50,inf
        #[arg(
            long,
            value_parser = |x: &str| x.parse::<BoundsArg<u64>>(),
            default_value_t = BoundsArg::Pair(0, MAX_LENGTH),
            hide_default_value = true,
            verbatim_doc_comment
        )]
        len: BoundsArg<u64>,

        /// keep reads whose mean Phred+33 quality is at least this value
        #[arg(long, value_parser = parse_quality, default_value_t = 0.0)]
        qual: f64,

        /// the directory the output file is written to. created if missing
        #[arg(short = 'd', long, default_value = "filtered")]
        out_dir: String,

        /// write a JSON summary of the run to this file
        #[arg(long)]
        summary: Option<String>,
    },

    /// Apply a transform to one or more DNA or RNA sequences, printing one result per line
    #[command(arg_required_else_help = true)]
    Transform {
        /// one of: is_nucleic_acid, transcribe, reverse, complement, reverse_complement
        operation: String,

        /// the sequences to transform
        #[arg(required = true)]
        seqs: Vec<String>,
    },

    /// Convert a multiline .fasta file so that every sequence is on a single line
    #[command(arg_required_else_help = true)]
    Oneline {
        /// the input .fasta file
        input: String,

        /// the output file name. defaults to `<input stem>_oneline<input extension>`
        #[arg(short)]
        output: Option<String>,

        /// the directory the output file is written to. created if missing
        #[arg(short = 'd', long, default_value = crate::fasta::DEFAULT_OUT_DIR)]
        out_dir: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Bounds;

    #[test]
    fn parse_filter_args() {
        let cli = Cli::try_parse_from([
            "seqsieve", "filter", "in.fastq", "out.fastq", "--gc", "40,60", "--len", "150",
            "--qual", "20",
        ])
        .unwrap();

        match cli.command {
            Commands::Filter {
                gc, len, qual, out_dir, ..
            } => {
                assert_eq!(gc.resolve(), Bounds::new(40.0, 60.0));
                assert_eq!(len.resolve(), Bounds::new(0, 150));
                assert_eq!(qual, 20.0);
                assert_eq!(out_dir, "filtered");
            }
            _ => panic!("expected the filter command"),
        }
    }

    #[test]
    fn filter_defaults() {
        let cli = Cli::try_parse_from(["seqsieve", "filter", "in.fastq", "out.fastq"]).unwrap();

        match cli.command {
            Commands::Filter { gc, len, qual, .. } => {
                assert_eq!(gc.resolve(), Bounds::new(0.0, MAX_GC));
                assert_eq!(len.resolve(), Bounds::new(0, MAX_LENGTH));
                assert_eq!(qual, 0.0);
            }
            _ => panic!("expected the filter command"),
        }
    }

    #[test]
    fn rejects_inverted_bounds() {
        let res = Cli::try_parse_from([
            "seqsieve", "filter", "in.fastq", "out.fastq", "--len", "100,10",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_unbounded_gc() {
        for gc in ["50,inf", "inf", "120"] {
            let res = Cli::try_parse_from(["seqsieve", "filter", "in.fastq", "out.fastq", "--gc", gc]);
            assert!(res.is_err(), "--gc {gc} should be rejected");
        }
    }

    #[test]
    fn rejects_bad_quality() {
        for qual in ["nan", "inf", "-1", "abc"] {
            let res = Cli::try_parse_from([
                "seqsieve", "filter", "in.fastq", "out.fastq", "--qual", qual,
            ]);
            assert!(res.is_err(), "--qual {qual} should be rejected");
        }
        assert_eq!(parse_quality("20.5"), Ok(20.5));
    }
}
