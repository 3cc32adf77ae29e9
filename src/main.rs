use clap::Parser;
use std::{
    error::Error,
    io::Read,
    path::{Path, PathBuf},
};

use vendor_attrs::{
    format::DEFAULT_SEPARATOR, AttributeFormatter, Catalog, FixedWorkContext, FormatOptions,
    HtmlTextFormatter, LanguageId, TextFormatOptions, XmlAttributeParser,
};

/// Format a vendor attribute blob for display.
#[derive(Debug, Parser)]
struct Cli {
    /// The attribute blob to format, or `-` to read it from stdin.
    blob: PathBuf,

    /// JSON file with the attribute definitions and their predefined values.
    #[clap(long)]
    catalog: PathBuf,

    /// Language used to pick localized names.
    #[clap(long, default_value_t = 1)]
    language: LanguageId,

    /// Placed between the rendered values.
    #[clap(long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Print values as they are instead of HTML-encoding them.
    #[clap(long)]
    no_html_encode: bool,

    #[command(flatten)]
    text: TextOptions,

    /// Log skipped values and other details.
    #[clap(long)]
    verbose: bool,
}

/// How multiline values are rendered.
#[derive(Debug, Clone, Copy, Parser)]
struct TextOptions {
    /// Remove markup from multiline values.
    #[clap(long)]
    strip_tags: bool,

    /// Keep allow-listed markup in multiline values instead of encoding it.
    #[clap(long)]
    allow_html: bool,

    /// Keep line breaks in multiline values as they are.
    #[clap(long)]
    keep_line_breaks: bool,
}
impl From<TextOptions> for TextFormatOptions {
    fn from(options: TextOptions) -> Self {
        Self {
            strip_tags: options.strip_tags,
            allow_html: options.allow_html,
            convert_plain_text_to_html: !options.keep_line_breaks,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(level)?;

    log::debug!("Loading catalog from {:?}", cli.catalog);
    let catalog = Catalog::from_json(&std::fs::read_to_string(&cli.catalog)?)?;
    log::debug!(
        "Loaded {} attributes and {} values",
        catalog.attributes.len(),
        catalog.values.len()
    );

    let blob = read_blob(&cli.blob)?;

    let parser = XmlAttributeParser::new(&catalog);
    let work_context = FixedWorkContext(cli.language);
    let text_formatter = HtmlTextFormatter::new(cli.text.into());

    let options = FormatOptions {
        separator: cli.separator,
        html_encode: !cli.no_html_encode,
    };
    let formatted = AttributeFormatter::new(&parser, &catalog, &work_context, &text_formatter)
        .format_with(&blob, &options);

    if formatted.is_empty() {
        log::info!("Nothing to display for this blob");
    } else {
        println!("{formatted}");
    }

    Ok(())
}

fn read_blob(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut blob = String::new();
        std::io::stdin().read_to_string(&mut blob)?;
        Ok(blob)
    } else {
        std::fs::read_to_string(path)
    }
}
