use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use stock_meta::config::AppConfig;
use stock_meta::export::{DirectoryTarget, ExportFormat, StdoutTarget};
use stock_meta::settings::Settings;
use stock_meta::studio::MetadataStudio;
use stock_meta::traits::ExportTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "stock-meta")]
#[command(about = "Generate titles, descriptions and keywords for stock media files")]
#[command(version)]
struct Cli {
    /// Media files; only their names are used
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// TOML config with [settings] and [app] sections
    #[arg(short, long, env = "STOCK_META_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long, env = "STOCK_META_SEED")]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: FormatArg,

    /// Write the export file here instead of printing it
    #[arg(short, long, env = "STOCK_META_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Simulated generation latency in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    #[command(flatten)]
    overrides: SettingsOverrides,
}

#[derive(clap::Args, Debug)]
struct SettingsOverrides {
    /// Zero or negative gives an empty title
    #[arg(long, allow_negative_numbers = true)]
    title_length: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    description_length: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    keywords_count: Option<i64>,

    #[arg(long)]
    image_type: Option<String>,

    #[arg(long)]
    platform: Option<String>,

    /// Text placed before every title
    #[arg(long)]
    prefix: Option<String>,

    /// Text placed after every title
    #[arg(long)]
    suffix: Option<String>,

    /// Text appended to every description
    #[arg(long)]
    negative_title: Option<String>,

    /// Comma separated terms appended to the keywords (first three are used)
    #[arg(long)]
    negative_keywords: Option<String>,

    /// Turn off a prefix enabled in the config
    #[arg(long, conflicts_with = "prefix")]
    no_prefix: bool,

    #[arg(long, conflicts_with = "suffix")]
    no_suffix: bool,

    #[arg(long, conflicts_with = "negative_title")]
    no_negative_title: bool,

    #[arg(long, conflicts_with = "negative_keywords")]
    no_negative_keywords: bool,
}

impl SettingsOverrides {
    fn apply(self, settings: &mut Settings) {
        if let Some(value) = self.title_length {
            settings.title_length = value;
        }
        if let Some(value) = self.description_length {
            settings.description_length = value;
        }
        if let Some(value) = self.keywords_count {
            settings.keywords_count = value;
        }
        if let Some(value) = self.image_type {
            settings.image_type = value;
        }
        if let Some(value) = self.platform {
            settings.platform = value;
        }
        if let Some(text) = self.prefix {
            settings.prefix = true;
            settings.prefix_text = text;
        }
        if let Some(text) = self.suffix {
            settings.suffix = true;
            settings.suffix_text = text;
        }
        if let Some(text) = self.negative_title {
            settings.negative_title = true;
            settings.negative_title_text = text;
        }
        if let Some(text) = self.negative_keywords {
            settings.negative_keywords = true;
            settings.negative_keywords_text = text;
        }
        if self.no_prefix {
            settings.prefix = false;
        }
        if self.no_suffix {
            settings.suffix = false;
        }
        if self.no_negative_title {
            settings.negative_title = false;
        }
        if self.no_negative_keywords {
            settings.negative_keywords = false;
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    cli.overrides.apply(&mut config.settings);
    if cli.seed.is_some() {
        config.app.seed = cli.seed;
    }
    if let Some(delay) = cli.delay_ms {
        config.app.generation_delay_ms = delay;
    }
    if cli.output_dir.is_some() {
        config.app.output_dir = cli.output_dir;
    }

    match config.app.seed {
        Some(seed) => info!("Using fixed seed {}", seed),
        None => info!("Seeding from system entropy"),
    }

    let filenames: Vec<String> = cli.files.iter().map(|path| file_name(path)).collect();

    let mut studio = MetadataStudio::from_config(&config);
    debug!("Active settings: {:?}", studio.settings());
    studio.generate(&filenames).await?;

    let target: Box<dyn ExportTarget> = match &config.app.output_dir {
        Some(dir) => Box::new(DirectoryTarget::new(dir.clone())),
        None => Box::new(StdoutTarget),
    };

    // Results stay valid when delivery fails; report and exit non-zero.
    if let Err(e) = studio.export(cli.format.into(), target.as_ref()).await {
        warn!("Export failed, {} results were generated but not saved", studio.results().len());
        return Err(e);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stock_meta::generator::generate;
    use stock_meta::random::seeded;

    #[test]
    fn text_overrides_turn_flags_on() {
        let cli = Cli::try_parse_from([
            "stock-meta",
            "--title-length",
            "40",
            "--prefix",
            "New",
            "--negative-keywords",
            "a, b",
            "photos/sunset.jpg",
        ])
        .unwrap();

        let mut settings = Settings::default();
        cli.overrides.apply(&mut settings);

        assert_eq!(settings.title_length, 40);
        assert!(settings.prefix);
        assert_eq!(settings.prefix_text, "New");
        assert!(settings.negative_keywords);
        assert!(!settings.suffix);
        assert_eq!(ExportFormat::from(cli.format), ExportFormat::Csv);
    }

    #[test]
    fn negative_length_is_accepted_and_gives_empty_title() {
        let cli = Cli::try_parse_from(["stock-meta", "--title-length", "-1", "a.png"]).unwrap();

        let mut settings = Settings::default();
        cli.overrides.apply(&mut settings);
        assert_eq!(settings.title_length, -1);

        let metadata = generate("a.png", &settings, &mut seeded(1));
        assert!(metadata.title.is_empty());
    }

    #[test]
    fn no_flags_turn_config_decorations_off() {
        let cli = Cli::try_parse_from([
            "stock-meta",
            "--no-prefix",
            "--no-suffix",
            "--no-negative-title",
            "--no-negative-keywords",
            "--format",
            "json",
            "a.png",
        ])
        .unwrap();

        let mut settings = Settings {
            prefix: true,
            prefix_text: "New".to_string(),
            suffix: true,
            suffix_text: "HD".to_string(),
            negative_title: true,
            negative_title_text: "extra".to_string(),
            negative_keywords: true,
            negative_keywords_text: "x".to_string(),
            ..Settings::default()
        };
        cli.overrides.apply(&mut settings);

        assert_eq!(settings.prefix_decoration(), None);
        assert_eq!(settings.suffix_decoration(), None);
        assert_eq!(settings.description_addition(), None);
        assert_eq!(settings.extra_keywords(), None);
        assert_eq!(ExportFormat::from(cli.format), ExportFormat::Json);
    }

    #[test]
    fn no_flag_conflicts_with_its_text() {
        assert!(Cli::try_parse_from(["stock-meta", "--prefix", "A", "--no-prefix", "a.png"]).is_err());
    }

    #[test]
    fn only_the_file_name_is_used() {
        assert_eq!(file_name(Path::new("photos/2024/sunset-beach.jpg")), "sunset-beach.jpg");
        assert_eq!(file_name(Path::new("plain.png")), "plain.png");
    }

    #[test]
    fn files_are_required() {
        assert!(Cli::try_parse_from(["stock-meta"]).is_err());
    }
}
