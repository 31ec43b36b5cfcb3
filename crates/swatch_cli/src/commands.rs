//! Subcommand implementations

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use swatch_brand::{
    detect_colors_from_svg, generate_color_variants, replace_color_in_svg, validate_vector,
    LogoType, SvgUpload,
};
use swatch_color::{ColorScheme, ColorToken};
use swatch_export::{export, ExportOptions};
use swatch_theme::{sync, StyleRoot, ThemeData, ThemePreset};
use tracing::{debug, info, warn};

use crate::cli::{Cli, Commands, ExportArgs, LogoCommand};
use crate::config::{LoadedConfig, SwatchConfig, CONFIG_FILE};

/// Run a parsed command line, writing user-facing output to `out`.
pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    if let Commands::Init {
        path,
        preset,
        force,
    } = &cli.command
    {
        return init_project(path, *preset, *force, out);
    }

    let loaded = SwatchConfig::load_from_dir(&cli.config)?;

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Export(args) => run_export(&loaded, args, out),
        Commands::Convert { color } => convert(&color, out),
        Commands::Apply { scheme, theme } => {
            let theme = load_theme(&loaded, theme.as_deref())?;
            apply(&theme, scheme, out)
        }
        Commands::Detect { svg } => {
            let markup = read_svg(&svg)?;
            for color in detect_colors_from_svg(&markup) {
                writeln!(out, "{color}")?;
            }
            Ok(())
        }
        Commands::Recolor {
            svg,
            from,
            to,
            output,
        } => {
            let markup = read_svg(&svg)?;
            let recolored = replace_color_in_svg(&markup, &from, &to)?;
            emit(&recolored, output.as_deref(), out)
        }
        Commands::Variants {
            svg,
            mono,
            scheme,
            out_dir,
        } => {
            let mono = match mono {
                Some(mono) => mono,
                None => theme_primary(&load_theme(&loaded, None)?, scheme),
            };
            write_variants(&svg, &mono, scheme, &out_dir, out)
        }
        Commands::Logo(command) => run_logo(&loaded, command, out),
    }
}

/// Create swatch.toml and a theme from a preset.
pub fn init_project(
    path: &Path,
    preset: ThemePreset,
    force: bool,
    out: &mut dyn Write,
) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let config = SwatchConfig::default();
    let config_path = path.join(CONFIG_FILE);
    let theme_path = path.join(&config.theme.path);

    for existing in [&config_path, &theme_path] {
        if existing.exists() && !force {
            bail!(
                "{} already exists (use --force to overwrite)",
                existing.display()
            );
        }
    }

    fs::write(&config_path, config.to_toml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    preset.theme().save(&theme_path)?;

    info!(preset = preset.id(), path = %path.display(), "initialized project");
    writeln!(out, "Created {} ({preset})", config_path.display())?;
    writeln!(out, "Created {}", theme_path.display())?;
    Ok(())
}

/// Read the theme from `path`, or the configured one.
///
/// A missing configured theme falls back to the default preset; a missing
/// explicit path is an error.
pub fn load_theme(loaded: &LoadedConfig, path: Option<&Path>) -> Result<ThemeData> {
    if let Some(path) = path {
        return ThemeData::load(path)
            .with_context(|| format!("Failed to load theme {}", path.display()));
    }

    let path = loaded.theme_path();
    if !path.exists() {
        warn!(path = %path.display(), "theme file missing, using the default preset");
        return Ok(ThemeData::default());
    }
    ThemeData::load(&path).with_context(|| format!("Failed to load theme {}", path.display()))
}

fn run_export(loaded: &LoadedConfig, args: ExportArgs, out: &mut dyn Write) -> Result<()> {
    let theme = load_theme(loaded, args.theme.as_deref())?;

    let defaults = loaded.config.export.options();
    let options = ExportOptions {
        kind: args.kind.unwrap_or(defaults.kind),
        format: args.format.unwrap_or(defaults.format),
        include_dark: defaults.include_dark && !args.no_dark,
    };

    let text = export(&theme, &options)?;
    let target = args
        .output
        .or_else(|| loaded.output_dir().map(|dir| dir.join(options.kind.file_name())));
    emit(&text, target.as_deref(), out)
}

/// Print every representation of one color.
pub fn convert(color: &str, out: &mut dyn Write) -> Result<()> {
    let Some(token) = ColorToken::parse("color", color) else {
        bail!("'{color}' is not a hex or oklch() color");
    };

    writeln!(out, "oklch  {}", token.css_value())?;
    writeln!(out, "hex    {}", token.hex)?;
    writeln!(out, "rgb    {}", token.rgb.to_css())?;
    writeln!(
        out,
        "hsv    {}, {}%, {}%",
        token.hsv.h, token.hsv.s, token.hsv.v
    )?;
    Ok(())
}

fn on_root_changed() {
    debug!("style root changed");
}

/// Project the theme onto the global style root and print the result.
pub fn apply(theme: &ThemeData, scheme: ColorScheme, out: &mut dyn Write) -> Result<()> {
    let root = StyleRoot::global();
    root.set_change_callback(on_root_changed);

    let changed = sync::apply_theme_to_root(root, theme, scheme);
    root.clear_change_callback();
    info!(scheme = %scheme, changed, "applied theme");

    out.write_all(root.to_css().as_bytes())?;
    Ok(())
}

fn theme_primary(theme: &ThemeData, scheme: ColorScheme) -> String {
    theme
        .primary(scheme)
        .map(|token| token.hex.clone())
        .unwrap_or_default()
}

fn read_upload(path: &Path) -> Result<SvgUpload> {
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(SvgUpload::new(file_name, data))
}

fn read_svg(path: &Path) -> Result<String> {
    let upload = read_upload(path)?;
    validate_vector(&upload).with_context(|| format!("Rejected {}", path.display()))
}

fn write_variants(
    svg: &Path,
    mono: &str,
    scheme: ColorScheme,
    out_dir: &Path,
    out: &mut dyn Write,
) -> Result<()> {
    let upload = read_upload(svg)?;
    let markup = validate_vector(&upload)?;
    let detected = detect_colors_from_svg(&markup);
    let variants = generate_color_variants(&markup, &detected, mono, scheme);

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let stem = upload.stem();
    for (suffix, content) in [
        ("white", &variants.white),
        ("black", &variants.black),
        ("gray", &variants.gray),
        ("mono", &variants.mono),
    ] {
        let path = out_dir.join(format!("{stem}-{suffix}.svg"));
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

fn emit(text: &str, target: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    match target {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "wrote artifact");
        }
        None => out.write_all(text.as_bytes())?,
    }
    Ok(())
}

fn run_logo(loaded: &LoadedConfig, command: LogoCommand, out: &mut dyn Write) -> Result<()> {
    let theme_path: PathBuf = loaded.theme_path();
    let mut theme = load_theme(loaded, None)?;

    match command {
        LogoCommand::List => {
            for logo in theme.brand.logos() {
                let dark = if logo.dark_mode_version().is_some() {
                    " +dark"
                } else {
                    ""
                };
                writeln!(
                    out,
                    "{}\t{}\t{}\tlight {}{}\tdark {}{}{dark}",
                    logo.id(),
                    logo.name(),
                    logo.logo_type(),
                    logo.light_mode().mono_color(),
                    link_marker(logo.light_mode().is_linked_to_primary()),
                    logo.dark_mode().mono_color(),
                    link_marker(logo.dark_mode().is_linked_to_primary()),
                )?;
            }
            return Ok(());
        }
        LogoCommand::Add { svg, logo_type } => {
            let upload = read_upload(&svg)?;
            let logo_type: LogoType = logo_type.unwrap_or(loaded.config.brand.logo_type);
            let light = theme_primary(&theme, ColorScheme::Light);
            let dark = theme_primary(&theme, ColorScheme::Dark);

            let id = theme
                .brand
                .add_from_upload(&upload, logo_type, &light)
                .with_context(|| format!("Rejected {}", svg.display()))?
                .id()
                .to_string();
            theme
                .brand
                .require_mut(&id)?
                .relink_to_primary(ColorScheme::Dark, &dark);
            writeln!(out, "{id}")?;
        }
        LogoCommand::Dark { id, svg } => {
            let upload = read_upload(&svg)?;
            theme
                .brand
                .require_mut(&id)?
                .set_dark_mode_version(&upload, loaded.config.brand.aspect_tolerance)
                .with_context(|| format!("Rejected {}", svg.display()))?;
        }
        LogoCommand::Undark { id } => {
            if theme.brand.require_mut(&id)?.remove_dark_mode_version().is_none() {
                writeln!(out, "{id} has no dark-mode version")?;
                return Ok(());
            }
        }
        LogoCommand::Mono { id, color, scheme } => {
            theme.brand.require_mut(&id)?.set_mono_color(scheme, color);
        }
        LogoCommand::Link { id, scheme } => {
            let primary = theme_primary(&theme, scheme);
            theme
                .brand
                .require_mut(&id)?
                .relink_to_primary(scheme, &primary);
        }
        LogoCommand::Recolor { id, from, to, dark } => {
            if dark {
                theme.brand.replace_dark_version_color(&id, &from, &to)?;
            } else {
                theme.brand.replace_color(&id, &from, &to)?;
            }
        }
        LogoCommand::Rename { id, name } => {
            theme.brand.require_mut(&id)?.rename(name);
        }
        LogoCommand::Remove { id } => {
            let removed = theme.brand.remove(&id)?;
            writeln!(out, "Removed {}", removed.name())?;
        }
    }

    theme
        .save(&theme_path)
        .with_context(|| format!("Failed to save {}", theme_path.display()))?;
    Ok(())
}

fn link_marker(linked: bool) -> &'static str {
    if linked {
        " (primary)"
    } else {
        ""
    }
}
