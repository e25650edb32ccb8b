mod args;

use clap::Parser;
use uniq_lines_domain::UniqueOptions;
use uniq_lines_ports::streams::ResolutionPolicy;
use uniq_lines_shared_kernel::StreamTarget;

pub use args::Args;

use crate::{
    config::Config,
    error::{PresentationError, PresentationResult},
};

/// Parse process arguments and materialise a [`Config`].
///
/// # Errors
/// See [`build_config`].
pub fn load_config() -> PresentationResult<Config> {
    build_config(Args::parse())
}

/// Convert parsed CLI arguments into a run configuration.
///
/// The mode conflict is checked before the positional arguments, so
/// `-u -d` with no paths reports the conflict.
///
/// # Errors
/// - [`PresentationError::InvalidOptions`] when both `-u` and `-d` are given
/// - [`PresentationError::MissingEndpoints`] when no positional argument is given
pub fn build_config(args: Args) -> PresentationResult<Config> {
    let options = UniqueOptions::from_flags(args.count, args.repeated, args.unique)?;

    // 位置引数ゼロは "-" 指定と同等でもエラー扱い
    let input = args.input.ok_or(PresentationError::MissingEndpoints)?;
    let output = args.output.map_or(StreamTarget::Standard, StreamTarget::from);

    let policy = if args.strict { ResolutionPolicy::Strict } else { ResolutionPolicy::Lenient };

    Ok(Config { input: StreamTarget::from(input), output, options, policy })
}
