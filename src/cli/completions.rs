use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bash:\n    backpack completions bash > ~/.bash_completion.d/backpack\n\n\
                  Zsh:\n    backpack completions zsh > ~/.zfunc/_backpack\n\n\
                  Fish:\n    backpack completions fish > ~/.config/fish/completions/backpack.fish")]
pub struct CompletionsArgs {
    /// Shell to generate for: bash, elvish, fish, powershell (or pwsh), zsh
    pub shell: String,
}
