//! Subcommand implementations

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cardkit_app::prelude::*;
use cardkit_app::CONFIG_FILE;

use crate::OutputFormat;

pub struct RenderArgs {
    pub profile: Option<PathBuf>,
    pub theme: Option<ThemeName>,
    pub scheme: Option<ColorSchemePreference>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub id: Option<String>,
    pub config: Option<PathBuf>,
}

/// Explicit config path must exist; the implicit `./cardkit.toml` is optional
fn load_config(path: Option<&Path>) -> Result<CardkitConfig> {
    match path {
        Some(path) => CardkitConfig::load_from_dir(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => match CardkitConfig::load_from_dir(Path::new(".")) {
            Ok(config) => Ok(config),
            Err(CardkitError::ConfigNotFound(_)) => {
                tracing::debug!("no {} in current directory, using defaults", CONFIG_FILE);
                Ok(CardkitConfig::default())
            }
            Err(e) => Err(e).context("Failed to load ./cardkit.toml"),
        },
    }
}

pub fn render(args: RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let profile = match &args.profile {
        Some(path) => load_profile(path)
            .with_context(|| format!("Failed to load profile {}", path.display()))?,
        None => config.profile.clone().with_context(|| {
            format!("No profile given and no [profile] table in {}", CONFIG_FILE)
        })?,
    };

    let theme = args.theme.unwrap_or(config.card.theme);
    let preference = args.scheme.unwrap_or(config.appearance.scheme);
    let palette = config
        .to_palette()
        .context("Invalid [palette] section in config")?;

    ThemeState::init(preference, palette);
    CardStore::init(profile, theme);

    let scheme = ThemeState::get().scheme();
    tracing::info!("rendering '{}' theme in {} mode", theme, scheme);

    let mut card = render_from_store()?;
    if let Some(id) = args.id {
        card = card.id(id);
    }

    let out = match args.format {
        OutputFormat::Html => {
            let name = CardStore::get().profile().name;
            let title = if name.is_empty() {
                "Profile".to_string()
            } else {
                format!("{name} - Profile")
            };
            render_document(&card, scheme, &title)
        }
        OutputFormat::Fragment => card.to_html(),
        OutputFormat::Json => to_json(&card)?,
    };

    match args.output {
        Some(path) => {
            fs::write(&path, out)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => println!("{out}"),
    }

    Ok(())
}

pub fn themes() {
    for theme in ThemeName::all() {
        let marker = if *theme == ThemeName::default() {
            " (default)"
        } else {
            ""
        };
        println!("{:<8} {}{}", theme.id(), theme.display_name(), marker);
    }
}

pub fn init(dir: &Path, theme: ThemeName, force: bool) -> Result<()> {
    let target = dir.join(CONFIG_FILE);
    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            target.display()
        );
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = CardkitConfig::new(theme).save_to_dir(dir)?;

    println!("Created {}", path.display());
    Ok(())
}
