//! Shell completions command

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::{Result, unsupported_shell};

/// Map a shell name (any case) to its completion generator
fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "elvish" => Ok(Shell::Elvish),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "zsh" => Ok(Shell::Zsh),
        _ => Err(unsupported_shell(name)),
    }
}

fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "backpack", out);
}

/// Generate shell completions on stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    write_completions(shell, &mut std::io::stdout().lock());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BackpackError;

    macro_rules! test_parse_shell {
        ($test_name:ident, $name:expr, $expected:expr) => {
            #[test]
            fn $test_name() {
                assert_eq!(parse_shell($name).unwrap(), $expected);
            }
        };
    }

    test_parse_shell!(test_parse_shell_bash, "bash", Shell::Bash);
    test_parse_shell!(test_parse_shell_elvish, "elvish", Shell::Elvish);
    test_parse_shell!(test_parse_shell_fish, "fish", Shell::Fish);
    test_parse_shell!(test_parse_shell_powershell, "powershell", Shell::PowerShell);
    test_parse_shell!(test_parse_shell_pwsh, "pwsh", Shell::PowerShell);
    test_parse_shell!(test_parse_shell_zsh, "zsh", Shell::Zsh);
    test_parse_shell!(test_parse_shell_uppercase, "BASH", Shell::Bash);
    test_parse_shell!(test_parse_shell_mixed_case, "Zsh", Shell::Zsh);

    #[test]
    fn test_unknown_shell_is_an_error() {
        let err = parse_shell("tcsh").unwrap_err();
        assert_eq!(
            err,
            BackpackError::UnsupportedShell {
                shell: "tcsh".to_string()
            }
        );
    }

    #[test]
    fn test_run_unknown_shell_returns_error() {
        let args = CompletionsArgs {
            shell: "tcsh".to_string(),
        };
        assert!(matches!(
            run(args),
            Err(BackpackError::UnsupportedShell { .. })
        ));
    }

    #[test]
    fn test_bash_completions_name_the_binary() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("backpack"));
        assert!(script.contains("--capacity"));
    }
}
