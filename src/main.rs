//! Command-line front end: turns the source logo into every icon asset the
//! build needs.  Paths default to the application tree layout and can be
//! overridden per invocation; subcommands narrow the run to one asset.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use image::{DynamicImage, GenericImageView};

use icongen::{favicon, icoio, iconset, resample, IconFamily};

#[derive(Parser)]
#[command(name = "icongen", version, about = "Generates Windows, Mac, and \
web icon assets from a single source logo.")]
struct Args {
    /// Source logo PNG.
    #[arg(long, default_value = "apps/desktop/assets/icon.png")]
    source: PathBuf,

    /// Windows icon output.
    #[arg(long, default_value = "apps/desktop/assets/icon.ico")]
    ico: PathBuf,

    /// Mac icon output.
    #[arg(long, default_value = "apps/desktop/assets/icon.icns")]
    icns: PathBuf,

    /// Favicon destination served by the web app.
    #[arg(long, default_value = "apps/web/public/favicon.ico")]
    favicon_public: PathBuf,

    /// Favicon copy embedded in the desktop build.
    #[arg(long, default_value = "apps/desktop/assets/favicon.ico")]
    favicon_embedded: PathBuf,

    /// Web logo preferred as the favicon source when present.
    #[arg(long, default_value = "apps/web/public/logo.png")]
    web_logo: PathBuf,

    /// Regenerate outputs that a full run would otherwise skip.
    #[arg(long)]
    force: bool,

    #[command(subcommand)]
    task: Option<Task>,
}

#[derive(Subcommand)]
enum Task {
    /// Generate every asset: icon.ico, icon.icns, favicon.ico (the default).
    All,
    /// Generate only the Windows icon.ico.
    Ico {
        /// Also include the 24-pixel toolbar entry.
        #[arg(long)]
        large: bool,
    },
    /// Generate only the Mac icon.icns.
    Icns {
        /// Write an iconset directory and compile it with iconutil instead
        /// of packing the container directly.
        #[arg(long)]
        iconset: bool,
    },
    /// Generate only the web favicon.ico.
    Favicon {
        /// Add the optional 64-pixel entry.
        #[arg(long)]
        with_64: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.source.exists() {
        bail!("source logo not found: {}", args.source.display());
    }
    let source = image::open(&args.source)
        .with_context(|| format!("reading {}", args.source.display()))?;
    let (width, height) = source.dimensions();
    println!("source logo: {} ({}x{})", args.source.display(), width, height);
    if width < 256 || height < 256 {
        println!("warning: source is small; 512x512 or larger is recommended");
    }

    match &args.task {
        None | Some(Task::All) => {
            generate_ico(&args, &source, &icoio::ICO_SIZES, !args.force)?;
            generate_icns_packed(&args, &source)?;
            generate_favicon(&args, &source, &favicon::FAVICON_SIZES)?;
            println!("all icon assets generated");
        }
        Some(Task::Ico { large }) => {
            let sizes: &[u32] = if *large {
                &icoio::ICO_SIZES_LARGE
            } else {
                &icoio::ICO_SIZES
            };
            generate_ico(&args, &source, sizes, false)?;
        }
        Some(Task::Icns { iconset }) => {
            if *iconset {
                generate_icns_iconset(&args, &source)?;
            } else {
                generate_icns_packed(&args, &source)?;
            }
        }
        Some(Task::Favicon { with_64 }) => {
            let sizes: &[u32] = if *with_64 {
                &favicon::FAVICON_SIZES_LARGE
            } else {
                &favicon::FAVICON_SIZES
            };
            generate_favicon(&args, &source, sizes)?;
        }
    }
    Ok(())
}

fn generate_ico(args: &Args,
                source: &DynamicImage,
                sizes: &[u32],
                skip_existing: bool)
                -> Result<()> {
    if skip_existing && args.ico.exists() {
        println!("{} already exists, skipping (pass --force to regenerate)",
                 args.ico.display());
        return Ok(());
    }
    let variants = resample::variant_set(source, sizes);
    icoio::write_ico_file(&variants, &args.ico)
        .with_context(|| format!("writing {}", args.ico.display()))?;
    println!("wrote {} (sizes {:?}, {:.1} KB)",
             args.ico.display(),
             sizes,
             file_kb(&args.ico)?);
    Ok(())
}

fn generate_icns_packed(args: &Args, source: &DynamicImage) -> Result<()> {
    let family = IconFamily::pack(source).context("packing icns")?;
    let mut file = BufWriter::new(File::create(&args.icns)
        .with_context(|| format!("creating {}", args.icns.display()))?);
    family.write(&mut file)
        .with_context(|| format!("writing {}", args.icns.display()))?;
    file.flush()?;
    println!("wrote {} ({} icons, {:.1} KB)",
             args.icns.display(),
             family.elements.len(),
             file_kb(&args.icns)?);
    Ok(())
}

fn generate_icns_iconset(args: &Args, source: &DynamicImage) -> Result<()> {
    match iconset::write_iconset_icns(source, &args.icns)
        .with_context(|| format!("writing {}", args.icns.display()))?
    {
        iconset::IcnsOutput::Icns(path) => {
            println!("wrote {} ({:.1} KB)", path.display(), file_kb(&path)?);
        }
        iconset::IcnsOutput::FallbackPng(path) => {
            println!("iconutil is not available on this platform");
            println!("wrote {} as a high-resolution substitute",
                     path.display());
        }
    }
    Ok(())
}

fn generate_favicon(args: &Args,
                    source: &DynamicImage,
                    sizes: &[u32])
                    -> Result<()> {
    let web_logo;
    let favicon_source = if args.web_logo.exists() {
        println!("using web logo {} for the favicon",
                 args.web_logo.display());
        web_logo = image::open(&args.web_logo)
            .with_context(|| format!("reading {}", args.web_logo.display()))?;
        &web_logo
    } else {
        source
    };
    favicon::write_favicon(favicon_source,
                           sizes,
                           &args.favicon_public,
                           &args.favicon_embedded)
        .context("writing favicon")?;
    println!("wrote {} and {} (byte-identical)",
             args.favicon_public.display(),
             args.favicon_embedded.display());
    Ok(())
}

fn file_kb(path: &Path) -> Result<f64> {
    let len = std::fs::metadata(path)
        .with_context(|| format!("inspecting {}", path.display()))?
        .len();
    Ok(len as f64 / 1024.0)
}
