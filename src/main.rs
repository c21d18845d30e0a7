use adstudio::logger::{self, LogLevel, LoggerConfig};
use adstudio::{AdImageGenerator, AdImageRequest, CampaignPipeline, CampaignRequest, Config};
use argh::FromArgs;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(FromArgs)]
/// Generate ad campaign images and captions through OpenRouter
struct Args {
    /// log at debug level
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Campaign(CampaignCommand),
    AdImage(AdImageCommand),
    Serve(ServeCommand),
}

#[derive(FromArgs)]
/// Run the full campaign pipeline: vision, prompt, image, caption
#[argh(subcommand, name = "campaign")]
struct CampaignCommand {
    /// brand name
    #[argh(option)]
    brand: String,

    /// industry, e.g. "Coffee"
    #[argh(option)]
    industry: String,

    /// campaign theme or occasion
    #[argh(option)]
    theme: String,

    /// headline or offer text that must appear in the image
    #[argh(option)]
    headline: String,

    /// visual style: Photorealistic, Neon, Pastel or Luxury
    #[argh(option, default = "String::from(\"Photorealistic\")")]
    style: String,

    /// brand color, e.g. "#8B4513"
    #[argh(option, default = "String::from(\"#000000\")")]
    color: String,

    /// optional product photo to ground the scene
    #[argh(option)]
    product_image: Option<PathBuf>,

    /// MIME type of the product photo; guessed from the extension if omitted
    #[argh(option)]
    mime_type: Option<String>,
}

#[derive(FromArgs)]
/// Generate a single ad image from a style preset
#[argh(subcommand, name = "ad-image")]
struct AdImageCommand {
    /// brand name
    #[argh(option)]
    brand: Option<String>,

    /// headline text overlay
    #[argh(option)]
    headline: Option<String>,

    /// style: photorealistic, cyberpunk, pastel, 3d-render or lifestyle
    #[argh(option)]
    style: Option<String>,

    /// short product description
    #[argh(option)]
    description: Option<String>,
}

#[derive(FromArgs)]
/// Serve the ad image endpoint over HTTP
#[argh(subcommand, name = "serve")]
struct ServeCommand {
    /// port to listen on, overrides PORT
    #[argh(option, short = 'p')]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    let dotenv_loaded = dotenv::dotenv().is_ok();

    let logger_config = if args.verbose {
        LoggerConfig::from_env().with_level(LogLevel::Debug)
    } else {
        LoggerConfig::from_env()
    };
    logger::init_with_config(logger_config)?;

    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    } else {
        log::debug!("No .env file found, using process environment");
    }

    let config = Config::from_env();

    match args.command {
        Command::Campaign(cmd) => run_campaign(&config, cmd).await?,
        Command::AdImage(cmd) => run_ad_image(&config, cmd).await?,
        Command::Serve(cmd) => run_server(config, cmd).await?,
    }

    Ok(())
}

async fn run_campaign(
    config: &Config,
    cmd: CampaignCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = CampaignPipeline::from_config(config)?;

    let (product_image_base64, product_image_mime_type) = match &cmd.product_image {
        Some(path) => {
            let bytes = fs::read(path)?;
            let mime = cmd
                .mime_type
                .clone()
                .or_else(|| guess_mime_type(path).map(String::from))
                .ok_or_else(|| {
                    format!("Cannot tell the image type of {}, pass --mime-type", path.display())
                })?;
            (Some(STANDARD.encode(bytes)), Some(mime))
        }
        None => (None, None),
    };

    let request = CampaignRequest {
        brand_name: cmd.brand,
        industry: cmd.industry,
        theme: cmd.theme,
        headline_text: cmd.headline,
        visual_style: cmd.style,
        brand_color: cmd.color,
        product_image_base64,
        product_image_mime_type,
    };

    let result = pipeline.generate(&request).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn run_ad_image(
    config: &Config,
    cmd: AdImageCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let generator = AdImageGenerator::from_config(config)?;
    let request = AdImageRequest {
        headline: cmd.headline,
        style: cmd.style,
        brand_name: cmd.brand,
        description: cmd.description,
        ..Default::default()
    };

    let image_url = generator.generate(&request).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&adstudio::models::AdImageResponse { image_url })?
    );
    Ok(())
}

#[cfg(feature = "server")]
async fn run_server(mut config: Config, cmd: ServeCommand) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(port) = cmd.port {
        config = config.with_port(port);
    }
    adstudio::edge::server::serve(config).await?;
    Ok(())
}

#[cfg(not(feature = "server"))]
async fn run_server(_config: Config, _cmd: ServeCommand) -> Result<(), Box<dyn std::error::Error>> {
    Err("adstudio was built without the `server` feature".into())
}

fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type(Path::new("mug.PNG")), Some("image/png"));
        assert_eq!(guess_mime_type(Path::new("shots/bag.jpeg")), Some("image/jpeg"));
        assert_eq!(guess_mime_type(Path::new("notes.txt")), None);
        assert_eq!(guess_mime_type(Path::new("no_extension")), None);
    }
}
