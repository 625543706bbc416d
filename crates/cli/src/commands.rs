/// Branch protection and merge settings for a repository
pub mod init;
/// Mark a pull request ready, squash merge it and sync the local branch
pub mod ready_merge;
/// File the Copilot onboarding issue
pub mod setup_ai;
/// Premium request usage report
pub mod usage;
