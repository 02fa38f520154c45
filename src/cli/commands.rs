use crate::core::interfaces::InputSource;
use crate::core::models::{BuildConfig, ConfigOverrides, PRODUCTION_FLAG};
use crate::core::services::ConfigAssembler;
use crate::infrastructure::ProjectInputSource;
use crate::utils::{ConfigLoader, Logger, PackUI, Result};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "fable-pack")]
#[command(about = "Assembles the bundler configuration for the Fable client and service worker")]
pub struct Cli {
    /// Bundle for production (no HMR plugins, no DEBUG define)
    #[arg(short = 'p', global = true)]
    pub production: bool,

    /// Project root; every configured path is resolved against it
    #[arg(short, long, default_value = ".", global = true)]
    pub root: String,

    /// Dev server host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Dev server port
    #[arg(long, global = true)]
    pub dev_port: Option<u16>,

    /// Public URL prefix for emitted bundles
    #[arg(long, global = true)]
    pub public_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the assembled configuration
    Config {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Show which rule and loader chain handle each file
    Route {
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Show where the dev server forwards each request path
    Proxy {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print an example fable-pack.config.json
    Init,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Summary,
}

pub struct CliHandler;

impl CliHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn run(&self) -> Result<()> {
        Logger::init();

        let cli = Cli::parse();

        match &cli.command {
            Commands::Init => self.handle_init_command(),
            Commands::Config { format } => {
                let config = self.assemble(&cli).await?;
                self.handle_config_command(&config, *format)
            }
            Commands::Route { files } => {
                let config = self.assemble(&cli).await?;
                self.handle_route_command(&config, files);
                Ok(())
            }
            Commands::Proxy { paths } => {
                let config = self.assemble(&cli).await?;
                self.handle_proxy_command(&config, paths);
                Ok(())
            }
        }
    }

    async fn assemble(&self, cli: &Cli) -> Result<BuildConfig> {
        let cli_overrides = ConfigOverrides {
            dev_server_host: cli.host.clone(),
            dev_server_port: cli.dev_port,
            public_path: cli.public_path.clone(),
            ..Default::default()
        };

        let mut source = ProjectInputSource::from_process(&cli.root).with_cli_overrides(cli_overrides);

        // clap also accepts `-p` bundled with other short flags; keep argv authoritative
        if cli.production {
            source = source.ensure_arg(PRODUCTION_FLAG);
        }

        let inputs = source.load().await?;
        Ok(ConfigAssembler::new().assemble(&inputs))
    }

    fn handle_config_command(&self, config: &BuildConfig, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
            OutputFormat::Summary => {
                PackUI::banner();
                PackUI::show_summary(config);
            }
        }
        Ok(())
    }

    fn handle_route_command(&self, config: &BuildConfig, files: &[String]) {
        let rules = &config.module.rules;
        for file in files {
            let routed = rules
                .route_index(file)
                .map(|index| (index, &rules.rules()[index]));
            PackUI::show_route(file, routed);
        }
    }

    fn handle_proxy_command(&self, config: &BuildConfig, paths: &[String]) {
        for path in paths {
            let forward = config
                .dev_server
                .proxy_for(path)
                .map(|rule| rule.forward_url(path));
            PackUI::show_proxy(path, forward);
        }
    }

    fn handle_init_command(&self) -> Result<()> {
        println!("{}", ConfigLoader::generate_example()?);
        Ok(())
    }
}

impl Default for CliHandler {
    fn default() -> Self {
        Self::new()
    }
}
