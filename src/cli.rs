use clap::Parser;

#[derive(Parser)]
#[command(name = "vuln-demo")]
#[command(about = "An educational demo of GitHub Actions credential exposure")]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Skip the package banner, printing only the demonstration
    #[arg(short, long)]
    pub quiet: bool,
}
