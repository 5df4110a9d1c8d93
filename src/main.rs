//! listkit viewer - Entry Point

use clap::Parser;
use listkit::cache::{FileStore, StateCache};
use listkit::component::Component;
use listkit::model::{ComponentModel, PageIndicatorPlacement};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::info;

/// listkit - lay out and browse a component model in the terminal
#[derive(Parser, Debug)]
#[command(name = "listkit")]
#[command(version)]
#[command(about = "Lay out and browse a list, grid or carousel model in the terminal")]
pub struct Args {
    /// Path to the component model JSON file
    pub model: PathBuf,

    /// Restore and save component state under this cache key
    #[arg(short = 'k', long)]
    pub cache_key: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Default column span for models without an explicit layout
    #[arg(short, long)]
    pub span: Option<f64>,

    /// Default page indicator placement for horizontal components
    #[arg(long, value_parser = ["below", "overlay"])]
    pub page_indicator: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = listkit::config::load_config_with_precedence(args.config.clone())?;
        let merged = listkit::config::merge_config(config_file);
        let with_env = listkit::config::apply_env_overrides(merged);

        let placement = args
            .page_indicator
            .as_deref()
            .and_then(PageIndicatorPlacement::parse);
        listkit::config::apply_cli_overrides(with_env, args.span, placement)
    };

    listkit::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    config.apply_to_process();

    let model = ComponentModel::from_file(&args.model)?;
    let component = match args.cache_key {
        Some(key) => {
            let cache = match &config.cache_dir {
                Some(dir) => StateCache::new(key, Rc::new(FileStore::new(dir))),
                None => StateCache::with_default_store(key),
            };
            Component::from_cache(cache, model)
        }
        None => Component::new(model),
    };

    listkit::view::run_viewer(component)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["listkit", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["listkit", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_model_path_is_required() {
        let result = Args::try_parse_from(["listkit"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_model_only_defaults() {
        let args = Args::parse_from(["listkit", "feed.json"]);
        assert_eq!(args.model, PathBuf::from("feed.json"));
        assert_eq!(args.cache_key, None);
        assert_eq!(args.config, None);
        assert_eq!(args.span, None);
        assert_eq!(args.page_indicator, None);
    }

    #[test]
    fn test_cache_key_short_and_long() {
        let args = Args::parse_from(["listkit", "feed.json", "-k", "home"]);
        assert_eq!(args.cache_key, Some("home".to_string()));
        let args = Args::parse_from(["listkit", "feed.json", "--cache-key", "home"]);
        assert_eq!(args.cache_key, Some("home".to_string()));
    }

    #[test]
    fn test_span_accepts_fractions() {
        let args = Args::parse_from(["listkit", "feed.json", "--span", "2.5"]);
        assert_eq!(args.span, Some(2.5));
    }

    #[test]
    fn test_span_rejects_text() {
        let result = Args::try_parse_from(["listkit", "feed.json", "--span", "wide"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_page_indicator_values() {
        let args = Args::parse_from(["listkit", "feed.json", "--page-indicator", "overlay"]);
        assert_eq!(args.page_indicator.as_deref(), Some("overlay"));

        let result = Args::try_parse_from(["listkit", "feed.json", "--page-indicator", "above"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::InvalidValue
        );
    }

    #[test]
    fn test_cli_flags_flow_through_config_precedence_chain() {
        use listkit::config::{apply_cli_overrides, apply_env_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            span: Some(3.0),
            page_indicator: Some(PageIndicatorPlacement::Below),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.span, 3.0);

        let with_env = apply_env_overrides(merged);
        let with_cli = apply_cli_overrides(with_env, Some(1.5), PageIndicatorPlacement::parse("overlay"));
        assert_eq!(with_cli.span, 1.5, "CLI span should override the config file");
        assert_eq!(
            with_cli.page_indicator,
            Some(PageIndicatorPlacement::Overlay)
        );
    }
}
