// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// ftbridge - Maximum-likelihood phylogenetic tree approximation with FastTree
pub struct Args {
    /// input alignment file (FASTA or interleaved phylip)
    #[argh(positional)]
    pub input: Option<String>,

    /// sequence type: 4 for nucleotide, 20 for protein
    #[argh(option)]
    pub ncodes: Option<i32>,

    /// use pseudocounts to estimate distances between sequences with little or no overlap
    #[argh(switch)]
    pub pseudo: bool,

    /// quote sequence names in the output and allow spaces, commas, parentheses and colons in them
    #[argh(switch)]
    pub quote: bool,

    /// maximum likelihood model: jtt, wag, lg, jc, gtr (default: engine default)
    #[argh(option)]
    pub ml_model: Option<String>,

    /// number of rate categories of sites, 1 for no CAT model (default: 20)
    #[argh(option)]
    pub ncat: Option<i32>,

    /// use the 2nd-level top hits heuristic to reduce memory usage and running time
    #[argh(switch)]
    pub second: bool,

    /// speed up the neighbor-joining phase, recommended for over 50,000 sequences
    #[argh(switch)]
    pub fastest: bool,

    /// number of subtree-prune-regraft rounds (default: 2)
    #[argh(option)]
    pub spr: Option<i32>,

    /// rounds of maximum-likelihood NNIs, -1 for 2*log(N) rounds (default: -1)
    #[argh(option)]
    pub mlnni: Option<i32>,

    /// exhaustive NNIs: turn off constant-subtree heuristics and optimize all 5 branches at each NNI
    #[argh(switch)]
    pub exhaustive: bool,

    /// extra argument passed verbatim to the engine (repeatable)
    #[argh(option, long = "arg")]
    pub args: Vec<String>,

    /// load options from a TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// print a sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// save the merged configuration to a TOML file
    #[argh(option)]
    pub save_config: Option<String>,

    /// resolve and print settings without invoking the engine
    #[argh(switch)]
    pub dry_run: bool,

    /// write a JSON run report to this path
    #[argh(option)]
    pub report: Option<String>,
}
