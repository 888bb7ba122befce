//! One module per subcommand, each exposing
//! `handle_<name>_command(...) -> Result<(), CliError>` with output streams
//! passed in.

mod cfg;
mod deal;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
