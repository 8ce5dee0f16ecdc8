//! YaoXiang Programming Language - CLI

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use yaoxiang::{NAME, VERSION};
use yaoxiang::util::logger::LogLevel;
use yaoxiang::util::i18n::set_lang_from_string;
use yaoxiang::util::diagnostic::{ErrorCodeDefinition, I18nRegistry, ErrorInfo};

/// Log level enum for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevelArg {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevelArg> for LogLevel {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Error => LogLevel::Error,
        }
    }
}

/// Language enum for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LangArg {
    En,
    Zh,
    ZhMiao,
}

impl From<LangArg> for String {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::En => "en".to_string(),
            LangArg::Zh => "zh".to_string(),
            LangArg::ZhMiao => "zh-x-miao".to_string(),
        }
    }
}

/// A high-performance programming language with "everything is type" philosophy
#[derive(Parser, Debug)]
#[command(name = "yaoxiang")]
#[command(author = "YaoXiang Team")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Set log level (debug, info, warn, error)
    #[arg(short, long, value_enum)]
    log_level: Option<LogLevelArg>,

    /// Set language (en, zh, zh-miao)
    #[arg(short = 'L', long, value_enum)]
    lang: Option<LangArg>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Explain an error code
    Explain {
        /// Error code to explain (e.g., E1001)
        #[arg(value_name = "CODE")]
        code: String,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,

        /// Language for explanation (en, zh)
        #[arg(short, long, value_enum)]
        lang: Option<LangArg>,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set language first (before logger init)
    let lang = args.lang.map(Into::<String>::into).unwrap_or_else(|| {
        std::env::var("YAOXIANG_LANG")
            .ok()
            .and_then(|s| {
                // Only use if it's a valid language
                if ["en", "zh", "zh-x-miao", "zh-miao"].contains(&s.as_str()) {
                    Some(s)
                } else {
                    None
                }
            })
            .unwrap_or_else(|| "en".to_string())
    });
    set_lang_from_string(lang);

    // Initialize logger with specified level
    match args.log_level {
        Some(level) => yaoxiang::util::logger::init_with_level(level.into()),
        None => yaoxiang::util::logger::init_cli(),
    }

    if args.verbose {
        info!("YaoXiang version: {}", VERSION);
        info!("Host: {}", std::env::consts::OS);
    }

    let command = args.command.unwrap_or(Commands::Version);
    match command {
        Commands::Explain { code, json, lang } => {
            if let Some(definition) = ErrorCodeDefinition::find(&code) {
                let lang_code = lang
                    .map(Into::<String>::into)
                    .unwrap_or_else(|| "zh".to_string());
                let i18n = I18nRegistry::new(&lang_code);
                let info = i18n.get_info(&code).unwrap_or(ErrorInfo {
                    title: "",
                    help: "",
                    example: None,
                    error_output: None,
                });

                if json {
                    // JSON output
                    #[derive(Serialize)]
                    struct ExplainOutput<'a> {
                        code: &'static str,
                        category: String,
                        title: &'a str,
                        template: &'static str,
                        help: &'a str,
                    }
                    let output = ExplainOutput {
                        code: definition.code,
                        category: definition.category.to_string(),
                        title: info.title,
                        template: definition.message_template,
                        help: info.help,
                    };
                    println!("{}", serde_json::to_string_pretty(&output).unwrap());
                } else {
                    // Human-readable output
                    println!("Error {}", definition.code);
                    println!("Category: {}", definition.category);
                    println!("Title: {}", info.title);
                    println!("Message Template: {}", definition.message_template);
                    if !info.help.is_empty() {
                        println!("Help: {}", info.help);
                    }
                }
            } else {
                eprintln!("Unknown error code: {}", code);
                std::process::exit(1);
            }
        }
        Commands::Version => {
            info!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}
