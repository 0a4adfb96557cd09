use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ac completions bash > ~/.bash_completion.d/ac\n\n\
                  Generate zsh completions:\n    ac completions zsh > ~/.zfunc/_ac\n\n\
                  Generate fish completions:\n    ac completions fish > ~/.config/fish/completions/ac.fish\n\n\
                  Generate PowerShell completions:\n    ac completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
