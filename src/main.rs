// SPDX-License-Identifier: MIT
//
// swatch: HSL palettes, hex conversion and tweening from the command line.
//
// This binary wires the library crates to a clap front end:
//
//   swatch-color  → hsl/rgb/hex conversion, lightness and alpha helpers
//   swatch-theme  → builtin themes, JSON overrides, stylesheet rendering
//   swatch-motion → easing curves, tweens, transition presets
//
// Every subcommand writes its result to stdout. Logs go to stderr, filtered
// by SWATCH_LOG (EnvFilter syntax) or the -v count.

use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use swatch_color::{
    adjust_alpha, adjust_lightness, hex_to_rgb, try_hsl_to_rgb, try_rgb_to_hex,
};
use swatch_motion::{Lerp, MAX_FPS, Offset, Preset, Tween, transition};
use swatch_theme::{Slot, Theme, ThemeConfig, ThemeContext, ThemeError, builtin_theme};

const LOG_ENV: &str = "SWATCH_LOG";

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "swatch", version, about, propagate_version = true)]
struct Cli {
    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert HSL (degrees, percent, percent) to `r, g, b`.
    #[command(allow_negative_numbers = true)]
    HslToRgb { h: f64, s: f64, l: f64 },

    /// Convert HSL to `#rrggbb`.
    #[command(allow_negative_numbers = true)]
    HslToHex { h: f64, s: f64, l: f64 },

    /// Convert 0..=255 channels to `#rrggbb`.
    #[command(allow_negative_numbers = true)]
    RgbToHex { r: i64, g: i64, b: i64 },

    /// Parse `#rrggbb` (or `rrggbb`) into `r, g, b`.
    HexToRgb { hex: String },

    /// Shift lightness by AMOUNT percentage points, clamped to 0..=100.
    #[command(allow_negative_numbers = true)]
    Lightness { h: f64, s: f64, l: f64, amount: f64 },

    /// Render a hex color as `rgba(r, g, b, alpha)`.
    Alpha { hex: String, alpha: f64 },

    /// Print a theme's palette and toolkit roles, or its stylesheet.
    Theme {
        /// Builtin theme: default, light or dark.
        name: Option<String>,
        /// JSON override file. NAME, when given, replaces its base.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Print the rendered stylesheet instead of the palette.
        #[arg(long)]
        stylesheet: bool,
    },

    /// Sample a transition preset, one frame per line.
    Tween {
        /// fade-in, fade-out, scale-in, scale-out, slide-in-<dir>, slide-out-<dir>
        preset: String,
        /// Frames per second, 1 to 1000000000.
        #[arg(
            long,
            default_value_t = 60,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_FPS)),
        )]
        fps: u32,
        /// Emit frames in real time instead of all at once.
        #[arg(long)]
        play: bool,
    },
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(command = ?cli.command, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut out)
}

/// Install the stderr subscriber. `SWATCH_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::HslToRgb { h, s, l } => {
            let rgb = try_hsl_to_rgb(h, s, l).into_diagnostic()?;
            writeln!(out, "{}, {}, {}", rgb.r, rgb.g, rgb.b).into_diagnostic()
        }
        Command::HslToHex { h, s, l } => {
            let rgb = try_hsl_to_rgb(h, s, l).into_diagnostic()?;
            writeln!(out, "{}", rgb.to_hex()).into_diagnostic()
        }
        Command::RgbToHex { r, g, b } => {
            let hex = try_rgb_to_hex(r, g, b).into_diagnostic()?;
            writeln!(out, "{hex}").into_diagnostic()
        }
        Command::HexToRgb { hex } => {
            let rgb = hex_to_rgb(&hex).into_diagnostic()?;
            writeln!(out, "{}, {}, {}", rgb.r, rgb.g, rgb.b).into_diagnostic()
        }
        Command::Lightness { h, s, l, amount } => {
            let hsl = adjust_lightness(h, s, l, amount);
            writeln!(out, "{hsl} {}", hsl.to_hex()).into_diagnostic()
        }
        Command::Alpha { hex, alpha } => {
            let rgba = adjust_alpha(&hex, alpha).into_diagnostic()?;
            writeln!(out, "{rgba}").into_diagnostic()
        }
        Command::Theme {
            name,
            config,
            stylesheet,
        } => {
            let theme = resolve_theme(name.as_deref(), config.as_deref())?;
            let context = ThemeContext::new(theme);
            if stylesheet {
                out.write_all(context.stylesheet().as_bytes()).into_diagnostic()
            } else {
                write_palette(&context, out)
            }
        }
        Command::Tween { preset, fps, play } => {
            let preset = Preset::from_name(&preset).ok_or_else(|| {
                miette!(
                    help = format!("expected one of: {}", Preset::names().join(", ")),
                    "unknown transition preset `{preset}`"
                )
            })?;
            write_preset(preset, fps, play, out)
        }
    }
}

// ─── theme ──────────────────────────────────────────────────────────────────

fn resolve_theme(name: Option<&str>, config: Option<&Path>) -> Result<Theme> {
    if let Some(path) = config {
        let mut config = ThemeConfig::load(path).into_diagnostic()?;
        if let Some(name) = name {
            config.base = name.to_owned();
        }
        return config.into_theme().into_diagnostic();
    }
    let name = name.unwrap_or("default");
    builtin_theme(name)
        .ok_or_else(|| ThemeError::UnknownBase {
            name: name.to_owned(),
        })
        .into_diagnostic()
}

fn write_palette(context: &ThemeContext, out: &mut impl Write) -> Result<()> {
    let theme = context.theme();
    writeln!(
        out,
        "theme: {} ({})",
        theme.name,
        if theme.is_dark { "dark" } else { "light" }
    )
    .into_diagnostic()?;
    for slot in Slot::ALL {
        writeln!(out, "  {:<22} {}", slot.name(), theme.color(slot)).into_diagnostic()?;
    }
    writeln!(out, "roles:").into_diagnostic()?;
    for (role, hex) in context.roles() {
        writeln!(out, "  {:<22} {hex}", role.name()).into_diagnostic()?;
    }
    Ok(())
}

// ─── tween ──────────────────────────────────────────────────────────────────

/// Numeric or 2D, whichever the preset animates.
enum PresetTween {
    Scalar(Tween<f64>),
    Offset(Tween<Offset>),
}

fn preset_tween(preset: Preset) -> PresetTween {
    let distance = transition::DEFAULT_DISTANCE;
    match preset {
        Preset::FadeIn => PresetTween::Scalar(transition::fade_in()),
        Preset::FadeOut => PresetTween::Scalar(transition::fade_out()),
        Preset::ScaleIn => PresetTween::Scalar(transition::scale_in()),
        Preset::ScaleOut => PresetTween::Scalar(transition::scale_out()),
        Preset::SlideIn(direction) => PresetTween::Offset(transition::slide_in(direction, distance)),
        Preset::SlideOut(direction) => {
            PresetTween::Offset(transition::slide_out(direction, distance))
        }
    }
}

fn write_preset(preset: Preset, fps: u32, play: bool, out: &mut impl Write) -> Result<()> {
    match preset_tween(preset) {
        PresetTween::Scalar(tween) => write_frames(&tween, fps, play, out, |v| format!("{v:.4}")),
        PresetTween::Offset(tween) => write_frames(&tween, fps, play, out, |v| {
            format!("{:.2}, {:.2}", v.x, v.y)
        }),
    }
}

fn write_frames<T: Lerp>(
    tween: &Tween<T>,
    fps: u32,
    play: bool,
    out: &mut impl Write,
    format: impl Fn(T) -> String,
) -> Result<()> {
    let line = |index: u32, elapsed_ms: u128, value: T| {
        format!("{index:>4} {elapsed_ms:>5}ms {}", format(value))
    };
    if play {
        let flow = tween.play(fps, |frame| {
            let written = writeln!(out, "{}", line(frame.index, frame.elapsed.as_millis(), frame.value))
                .and_then(|()| out.flush());
            match written {
                Ok(()) => ControlFlow::Continue(()),
                Err(err) => ControlFlow::Break(err),
            }
        });
        return match flow {
            ControlFlow::Continue(()) => Ok(()),
            ControlFlow::Break(err) => Err(err).into_diagnostic(),
        };
    }
    for frame in tween.frames(fps) {
        writeln!(out, "{}", line(frame.index, frame.elapsed.as_millis(), frame.value))
            .into_diagnostic()?;
    }
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use swatch_theme::Role;

    fn output(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("swatch").chain(args.iter().copied()))
            .into_diagnostic()?;
        let mut buf = Vec::new();
        run(cli.command, &mut buf)?;
        String::from_utf8(buf).into_diagnostic()
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn hsl_conversions() {
        assert_eq!(output(&["hsl-to-rgb", "60", "100", "50"]).unwrap(), "254, 255, 0\n");
        assert_eq!(output(&["hsl-to-hex", "222.2", "84", "4.9"]).unwrap(), "#010816\n");
        assert_eq!(output(&["hsl-to-hex", "-120", "100", "50"]).unwrap(), "#0000ff\n");
    }

    #[test]
    fn hex_conversions() {
        assert_eq!(output(&["rgb-to-hex", "255", "0", "16"]).unwrap(), "#ff0010\n");
        assert_eq!(output(&["hex-to-rgb", "#0f172a"]).unwrap(), "15, 23, 42\n");
        assert_eq!(output(&["alpha", "#ff0000", "0.5"]).unwrap(), "rgba(255, 0, 0, 0.5)\n");
    }

    #[test]
    fn invalid_input_is_an_error() {
        assert!(output(&["rgb-to-hex", "256", "0", "0"]).is_err());
        assert!(output(&["hex-to-rgb", "#fff"]).is_err());
        assert!(output(&["hsl-to-rgb", "0", "120", "50"]).is_err());
        assert!(output(&["tween", "bounce"]).is_err());
        assert!(output(&["theme", "solarized"]).is_err());
    }

    #[test]
    fn lightness_clamps() {
        let text = output(&["lightness", "0", "0", "95", "10"]).unwrap();
        assert_eq!(text, "hsl(0 0% 100%) #ffffff\n");
    }

    #[test]
    fn theme_palette_lists_every_slot_and_role() {
        let text = output(&["theme", "dark"]).unwrap();
        assert!(text.starts_with("theme: dark (dark)\n"));
        assert_eq!(text.lines().count(), 1 + Slot::COUNT + 1 + Role::ALL.len());
        assert!(text.contains("secondary"));
        assert!(text.contains("#1e293b"));
    }

    #[test]
    fn theme_stylesheet() {
        let text = output(&["theme", "--stylesheet"]).unwrap();
        assert!(text.starts_with("QWidget {"));
        assert!(text.contains("QPushButton:hover"));
    }

    #[test]
    fn tween_frames() {
        let text = output(&["tween", "fade-in", "--fps", "10"]).unwrap();
        let lines: Vec<_> = text.lines().collect();
        // 300ms at 100ms intervals: 0, 100, 200, 300.
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "   0     0ms 0.0000");
        assert_eq!(lines[3], "   3   300ms 1.0000");
    }

    #[test]
    fn slide_frames_are_two_dimensional() {
        let text = output(&["tween", "slide-in-up", "--fps", "10"]).unwrap();
        assert_eq!(text.lines().next(), Some("   0     0ms 0.00, 50.00"));
        assert_eq!(text.lines().last(), Some("   3   300ms 0.00, 0.00"));
    }

    #[test]
    fn fps_outside_range_is_rejected() {
        assert!(output(&["tween", "fade-in", "--fps", "2000000000"]).is_err());
        assert!(output(&["tween", "fade-in", "--fps", "0"]).is_err());
        let text = output(&["tween", "fade-in", "--fps", "1"]).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn play_gives_up_on_first_write_error() {
        let tween = transition::fade_in().with_duration(std::time::Duration::from_secs(10));
        let start = std::time::Instant::now();
        let result = write_frames(&tween, 1, true, &mut BrokenPipe, |v| v.to_string());
        assert!(result.is_err());
        assert!(start.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn verbose_is_global_and_counted() {
        let cli = Cli::try_parse_from(["swatch", "hex-to-rgb", "-vv", "ffffff"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
