use clap::Parser;
use cutsheet::cli::commands::run::RunArgs;
use cutsheet::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    // Reset SIGPIPE so piping `cutsheet list` into `head` exits quietly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    cutsheet::logging::init(global.verbose, global.quiet);

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => cutsheet::cli::commands::run::run(args, &global),
        Commands::Show(args) => cutsheet::cli::commands::show::run(args, &global),
        Commands::List(args) => cutsheet::cli::commands::list::run(args, &global),
        Commands::Completions(args) => cutsheet::cli::commands::completions::run(args),
    }
}
