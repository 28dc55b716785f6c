//! mdcv CLI - Markdown résumé converter

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use colored::Colorize;

use mdcv::{
    fit, parse_cv, render, FitOptions, JsonFormat, PageSize, ThemeRegistry, WeasyPrint,
    DEFAULT_THEME,
};

#[derive(Parser)]
#[command(name = "mdcv")]
#[command(version)]
#[command(about = "Convert a Markdown CV/résumé to an auto-fitted PDF or HTML", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE", required_unless_present = "list_themes")]
    input: Option<PathBuf>,

    /// Output file path (default: <input stem>.pdf)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also produce an HTML file alongside the PDF
    #[arg(long)]
    html: bool,

    /// Produce only HTML output, skip PDF generation
    #[arg(long, conflicts_with = "html")]
    html_only: bool,

    /// Also write the parsed CV model as JSON
    #[arg(long)]
    json: bool,

    /// Page size for PDF output
    #[arg(long, value_enum, default_value = "a4")]
    page_size: PageSizeArg,

    /// Disable auto-shrink to fit content on one page
    #[arg(long)]
    no_auto_fit: bool,

    /// Portrait photo (JPEG/PNG) to embed in the CV
    #[arg(long, value_name = "PATH")]
    photo: Option<PathBuf>,

    /// Theme to use for rendering
    #[arg(long, default_value = DEFAULT_THEME)]
    theme: String,

    /// Extra theme directory (shadows built-in themes)
    #[arg(long, value_name = "DIR", env = "MDCV_THEME_DIR")]
    theme_dir: Option<PathBuf>,

    /// List available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// weasyprint executable to use for rasterization
    #[arg(long, value_name = "PATH", env = "MDCV_WEASYPRINT", default_value = "weasyprint")]
    weasyprint: PathBuf,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PageSizeArg {
    /// ISO A4 (210mm x 297mm)
    A4,
    /// US Letter (8.5in x 11in)
    Letter,
}

impl From<PageSizeArg> for PageSize {
    fn from(size: PageSizeArg) -> Self {
        match size {
            PageSizeArg::A4 => PageSize::A4,
            PageSizeArg::Letter => PageSize::Letter,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let registry = match &cli.theme_dir {
        Some(dir) => ThemeRegistry::with_theme_dir(dir)?,
        None => ThemeRegistry::new(),
    };

    if cli.list_themes {
        for theme in registry.themes() {
            println!(
                "{:<14} {} — {}",
                theme.name.bold(),
                theme.display_name,
                theme.description
            );
        }
        return Ok(());
    }

    // Clap enforces the argument unless --list-themes was given.
    let Some(input) = cli.input else {
        return Err("missing input file".into());
    };

    let markdown = fs::read_to_string(&input)?;
    let mut cv = parse_cv(&markdown);
    if let Some(photo) = &cli.photo {
        cv.photo_path = Some(photo.clone());
    }

    let theme = registry.get(&cli.theme)?;
    let page_size = PageSize::from(cli.page_size);
    let out_base = cli.output.clone().unwrap_or_else(|| input.clone());

    if cli.json {
        let json_path = out_base.with_extension("json");
        fs::write(&json_path, render::to_json(&cv, JsonFormat::Pretty)?)?;
        print_written("JSON", &json_path);
    }

    let (width, height) = page_size.dimensions();
    let base_style = theme.default_style.with_page_dimensions(width, height);

    if cli.html_only {
        let html_path = out_base.with_extension("html");
        fs::write(&html_path, render::to_html(&cv, &base_style, theme)?)?;
        print_written("HTML", &html_path);
        return Ok(());
    }

    let options = FitOptions::new()
        .with_page_size(page_size)
        .with_auto_fit(!cli.no_auto_fit);
    let rasterizer = WeasyPrint::with_command(&cli.weasyprint);
    let result = fit::generate_pdf(&cv, theme, &options, &rasterizer)?;

    let pdf_path = out_base.with_extension("pdf");
    fs::write(&pdf_path, &result.pdf)?;
    print_written("PDF", &pdf_path);
    if result.overflow {
        eprintln!(
            "{}: content did not fit one page even at minimum scale; wrote {} pages",
            "Warning".yellow().bold(),
            result.page_count
        );
    } else if result.scale < 1.0 {
        println!("  auto-fit scale: {:.2}", result.scale);
    }

    if cli.html {
        let html_path = out_base.with_extension("html");
        fs::write(&html_path, render::to_html(&cv, &base_style, theme)?)?;
        print_written("HTML", &html_path);
    }

    Ok(())
}

fn print_written(kind: &str, path: &Path) {
    println!("{} written to {}", kind, path.display().to_string().green());
}
