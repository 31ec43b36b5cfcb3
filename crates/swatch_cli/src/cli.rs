use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use swatch_brand::LogoType;
use swatch_color::{ColorFormat, ColorScheme};
use swatch_export::ExportKind;
use swatch_theme::ThemePreset;

/// Theme tokens and brand assets, from the command line
#[derive(Debug, Parser)]
#[command(name = "swatch", version)]
#[command(about = "Export theme tokens, inspect colors and recolor brand assets")]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory or swatch.toml to read
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write swatch.toml and a starter theme
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Preset to start from (neutral, slate, zinc)
        #[arg(short, long, default_value = "neutral")]
        preset: ThemePreset,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a CSS, tailwind config or JSON artifact
    Export(ExportArgs),

    /// Show every representation of a color
    Convert {
        /// Hex (`#1e66f5`) or `oklch(l c h)` text
        color: String,
    },

    /// Apply the theme to the style root and print it
    Apply {
        /// Display mode to apply
        #[arg(short, long, default_value = "light")]
        scheme: ColorScheme,

        /// Theme JSON (defaults to the configured theme)
        #[arg(long)]
        theme: Option<PathBuf>,
    },

    /// List the color literals in an SVG
    Detect {
        /// SVG file
        svg: PathBuf,
    },

    /// Replace one color literal in an SVG
    Recolor {
        /// SVG file
        svg: PathBuf,

        /// Color to replace
        #[arg(long)]
        from: String,

        /// Replacement color
        #[arg(long)]
        to: String,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the white, black, gray and mono variants of an SVG
    Variants {
        /// SVG file
        svg: PathBuf,

        /// Mono color (defaults to the theme primary)
        #[arg(long)]
        mono: Option<String>,

        /// Display mode the mono variant is for
        #[arg(short, long, default_value = "light")]
        scheme: ColorScheme,

        /// Directory for the variant files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Manage the logos stored in the theme
    #[command(subcommand)]
    Logo(LogoCommand),
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Theme JSON (defaults to the configured theme)
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// Artifact kind (css, tailwind-config, json)
    #[arg(short, long)]
    pub kind: Option<ExportKind>,

    /// Color notation for CSS (oklch, hex, rgb)
    #[arg(short, long)]
    pub format: Option<ColorFormat>,

    /// Leave out the dark-mode block
    #[arg(long)]
    pub no_dark: bool,

    /// Write here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum LogoCommand {
    /// Add an SVG logo
    Add {
        svg: PathBuf,

        /// Layout slot (icon, horizontal, vertical)
        #[arg(short = 't', long = "type")]
        logo_type: Option<LogoType>,
    },

    /// Attach a dark-mode version to a logo
    Dark { id: String, svg: PathBuf },

    /// Drop a logo's dark-mode version
    Undark { id: String },

    /// Set a custom mono color for one display mode
    Mono {
        id: String,
        color: String,

        #[arg(short, long, default_value = "light")]
        scheme: ColorScheme,
    },

    /// Make a mode's mono color follow the theme primary again
    Link {
        id: String,

        #[arg(short, long, default_value = "light")]
        scheme: ColorScheme,
    },

    /// Replace a color in a logo's base markup
    Recolor {
        id: String,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Recolor the dark-mode version instead
        #[arg(long)]
        dark: bool,
    },

    /// Change a logo's display name
    Rename { id: String, name: String },

    /// List stored logos
    List,

    /// Remove a logo
    Remove { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_export_flags_parse_into_types() {
        let cli = Cli::try_parse_from([
            "swatch", "export", "--kind", "tailwind-config", "--format", "hex", "--no-dark",
        ])
        .unwrap();
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.kind, Some(ExportKind::TailwindConfig));
                assert_eq!(args.format, Some(ColorFormat::Hex));
                assert!(args.no_dark);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_logo_mono_scheme() {
        let cli = Cli::try_parse_from([
            "swatch", "logo", "mono", "logo-1", "#ff0000", "--scheme", "dark",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Logo(LogoCommand::Mono { scheme: ColorScheme::Dark, .. })
        ));
    }

    #[test]
    fn test_logo_recolor_dark_flag() {
        let cli = Cli::try_parse_from([
            "swatch", "logo", "recolor", "logo-1", "--from", "#000", "--to", "#fff", "--dark",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Logo(LogoCommand::Recolor { dark: true, .. })
        ));
    }

    #[test]
    fn test_bad_preset_is_rejected() {
        assert!(Cli::try_parse_from(["swatch", "init", "--preset", "mocha"]).is_err());
    }
}
