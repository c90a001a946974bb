// Prodshot Studio - one-shot styled product shoot from the terminal

use clap::Parser;
use prodshot::backend::GeminiClient;
use prodshot::export::{ExportFormat, QualityTier, export_image};
use prodshot::studio::catalog::Dimension;
use prodshot::studio::{ImageAsset, PromptMode, StudioSession};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "prodshot-studio",
    about = "Generate a styled commercial product photograph"
)]
struct Args {
    /// Product image (png, jpeg, or webp)
    #[arg(long)]
    product: PathBuf,

    /// Optional style-reference image; only its presence shapes the prompt
    #[arg(long)]
    style: Option<PathBuf>,

    /// Styling choices by catalog label, e.g. --aspect-ratio "Widescreen (16:9)"
    #[arg(long)]
    aspect_ratio: Option<String>,

    #[arg(long)]
    lighting_style: Option<String>,

    #[arg(long)]
    camera_perspective: Option<String>,

    #[arg(long)]
    image_quality: Option<String>,

    #[arg(long)]
    color_vibes: Option<String>,

    #[arg(long)]
    camera_lens: Option<String>,

    #[arg(long)]
    environment: Option<String>,

    /// Drop the environment clause from the prompt
    #[arg(long)]
    no_environment: bool,

    /// Use this prompt verbatim instead of the composed one
    #[arg(long)]
    prompt: Option<String>,

    /// Rewrite the prompt through the art-director persona before generating
    #[arg(long)]
    enhance: bool,

    /// Output format for the download
    #[arg(long, value_enum, default_value_t = ExportFormat::Png)]
    format: ExportFormat,

    /// JPEG quality tier (ignored for png)
    #[arg(long, value_enum, default_value_t = QualityTier::High)]
    quality: QualityTier,

    /// Directory the result is written into
    #[arg(long, default_value = ".")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // The single required credential; missing it is fatal before any work starts
    let api_key = std::env::var("GEMINI_API_KEY")
        .map_err(|_| "GEMINI_API_KEY environment variable is not set")?;

    println!("📸 Prodshot Studio");
    println!("==================\n");

    let backend = GeminiClient::new(api_key)?;
    let mut session = StudioSession::new(Arc::new(backend));

    let product = ImageAsset::from_path(&args.product).await?;
    println!("✓ Product image: {} ({} bytes)", product.name, product.bytes.len());
    session.set_product_image(product);

    if let Some(path) = &args.style {
        let style = ImageAsset::from_path(path).await?;
        println!("✓ Style reference: {} ({} bytes)", style.name, style.bytes.len());
        session.set_style_image(style);
    }

    let selections = [
        (Dimension::AspectRatio, &args.aspect_ratio),
        (Dimension::LightingStyle, &args.lighting_style),
        (Dimension::CameraPerspective, &args.camera_perspective),
        (Dimension::ImageQuality, &args.image_quality),
        (Dimension::ColorVibes, &args.color_vibes),
        (Dimension::CameraLens, &args.camera_lens),
        (Dimension::Environment, &args.environment),
    ];
    for (dimension, label) in selections {
        if let Some(label) = label {
            let choice = dimension.by_label(label).ok_or_else(|| {
                let labels: Vec<&str> =
                    dimension.choices().iter().map(|c| c.label).collect();
                format!(
                    "unknown {} {:?} (expected one of: {})",
                    dimension.as_str(),
                    label,
                    labels.join(", ")
                )
            })?;
            session.select(dimension, choice);
        }
    }

    if args.no_environment {
        session.set_environment_enabled(false);
    }

    if let Some(prompt) = &args.prompt {
        session.edit_prompt(prompt);
    }

    println!("\n📝 Prompt:\n{}\n", session.prompt_text());

    if args.enhance {
        println!("✨ Enhancing prompt...");
        session.enhance_prompt().await;
        match session.error() {
            Some(error) => eprintln!("⚠ {error} Continuing with the current prompt.\n"),
            None => println!("✓ Enhanced prompt:\n{}\n", session.prompt_text()),
        }
    }

    if session.prompt_mode() == PromptMode::Manual {
        println!("🔒 Prompt is in manual mode; styling controls no longer update it.\n");
    }

    println!("🎨 Generating styled image...");
    session.generate().await;

    if let Some(image) = session.status().image() {
        if let Some(caption) = &image.caption {
            println!("💬 {caption}");
        }
        let path = export_image(&image.bytes, args.format, args.quality, &args.output)?;
        println!("✓ Saved {}", path.display());
    } else {
        let message = session.error().unwrap_or("Failed to generate image.");
        eprintln!("❌ {message}");
        std::process::exit(1);
    }

    Ok(())
}
