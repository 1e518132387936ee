use crate::areas::dolly::Dolly;
use anyhow::Context;
use std::io::Write;
use std::process::ExitStatus;
use std::time::Duration;
use tokio::process::Command;

const GIT_PROGRAM: &str = "git";
const SUBCOMMAND: &str = "dolly";
pub const FAILURE_EXIT_CODE: u8 = 1;
const INTERRUPT_GRACE_PERIOD: Duration = Duration::from_millis(250);

/// Drop the leading `dolly` token left over when invoked as a git subcommand
pub fn effective_args(mut args: Vec<String>) -> Vec<String> {
    if args.first().is_some_and(|arg| arg == SUBCOMMAND) {
        args.remove(0);
    }

    args
}

impl Dolly {
    /// Clone the repository named by the last argument into its resolved directory.
    ///
    /// Every argument is passed to `git clone` unchanged, followed by the target path.
    /// Returns the exit code of `git clone`.
    pub async fn clone_repository(&mut self, args: &[String]) -> anyhow::Result<u8> {
        let reference = args.last().context("no repository reference given")?;
        let target = self.workspace().target_for(reference)?;

        if self.workspace().is_occupied(&target)? {
            anyhow::bail!(
                "destination path '{}' already exists and is not an empty directory",
                target.display()
            );
        }

        self.workspace().create_parent_dirs(&target)?;

        writeln!(self.writer(), "Cloning {} into {}", reference, target.display())?;
        self.writer().flush()?;

        let mut child = Command::new(GIT_PROGRAM)
            .arg("clone")
            .args(args)
            .arg(&target)
            .spawn()
            .context("failed to run git clone")?;

        let status = tokio::select! {
            status = child.wait() => status.context("failed to wait for git clone")?,
            Ok(()) = tokio::signal::ctrl_c() => {
                // git got the same SIGINT and removes its partial clone before exiting
                if tokio::time::timeout(INTERRUPT_GRACE_PERIOD, child.wait()).await.is_err() {
                    child.kill().await.context("failed to stop git clone")?;
                }
                anyhow::bail!("interrupted while cloning into {}", target.display());
            }
        };

        debug_log!("git clone finished with {status}");
        Ok(exit_code(status))
    }
}

/// Mirror the child's exit code; signals and codes outside `u8` map to failure
fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(FAILURE_EXIT_CODE)
}
