//! CLI commands

mod add;
mod check;
mod completions;
mod extract;
mod init;
mod release;
mod remove;
mod scaffold;
mod show;
mod sync;
mod validate;

pub use add::AddCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use extract::ExtractCommand;
pub use init::InitCommand;
pub use release::ReleaseCommand;
pub use remove::RemoveCommand;
pub use scaffold::ScaffoldCommand;
pub use show::ShowCommand;
pub use sync::SyncCommand;
pub use validate::ValidateCommand;
