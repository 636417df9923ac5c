use clap::{command, value_parser, Arg, ArgAction, Command};

use crate::log_utils::LogLevel;

pub(super) fn cli_model() -> Command {
    command!()
        .next_help_heading("Input/Output")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .required(true)
                .value_parser(value_parser!(String))
                .value_name("FASTA")
                .help("Input fasta file containing the reads of both samples"),
        )
        .arg(
            Arg::new("n_reads0")
                .short('n')
                .long("first-sample-reads")
                .required(true)
                .value_parser(value_parser!(u64).range(1..))
                .value_name("INT")
                .help("Number of reads in the first sample"),
        )
        .arg(
            Arg::new("bcr")
                .long("bcr")
                .action(ArgAction::SetTrue)
                .help("Suffix array entries are stored in the reduced (BCR) record layout"),
        )
        .next_help_heading("Variant calling")
        .arg(
            Arg::new("k_left")
                .short('L')
                .long("left-context")
                .default_value("31")
                .value_parser(value_parser!(usize))
                .value_name("LEN")
                .help("Length of the left context, variant position included"),
        )
        .arg(
            Arg::new("k_right")
                .short('R')
                .long("right-context")
                .default_value("30")
                .value_parser(value_parser!(usize))
                .value_name("LEN")
                .help("Length of the right context, variant position excluded"),
        )
        .arg(
            Arg::new("max_gap")
                .short('g')
                .long("max-gap")
                .default_value("10")
                .value_parser(value_parser!(usize))
                .value_name("LEN")
                .help("Maximum indel length. 0 disables indel detection"),
        )
        .arg(
            Arg::new("max_snvs")
                .short('v')
                .long("max-snvs")
                .default_value("2")
                .value_parser(value_parser!(usize))
                .value_name("INT")
                .help("Maximum number of mismatches allowed in the left contexts, main variant excluded"),
        )
        .arg(
            Arg::new("mcov_out")
                .short('m')
                .long("min-coverage")
                .default_value("5")
                .value_parser(value_parser!(usize))
                .value_name("COV")
                .help(
                    "Minimum coverage per sample per reported allele. \
                     The minimum cluster length is set to twice this value",
                ),
        )
        .next_help_heading("Cluster selection")
        .arg(
            Arg::new("pval")
                .short('p')
                .long("pval")
                .default_value("0.85")
                .value_parser(value_parser!(f64))
                .value_name("FRACTION")
                .help("Choose the maximum cluster length so that this fraction of clustered bases is analyzed"),
        )
        .arg(
            Arg::new("max_clust_length")
                .short('M')
                .long("max-cluster-length")
                .default_value("150")
                .value_parser(value_parser!(usize))
                .value_name("LEN")
                .help("Hard upper bound on cluster length. The automatic choice driven by -p can only lower it"),
        )
        .next_help_heading("Operation")
        .arg(
            Arg::new("loglevel")
                .short('l')
                .long("loglevel")
                .value_name("LOGLEVEL")
                .value_parser(value_parser!(LogLevel))
                .ignore_case(true)
                .default_value("info")
                .help("Set log level"),
        )
}
