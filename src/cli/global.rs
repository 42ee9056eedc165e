use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Extra alphabets.toml merged over the built-in and user alphabets
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, default_value = "1048576")]
    pub max_size: usize,

    /// Process inputs exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,
}
