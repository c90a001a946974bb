// Prodshot Prompt - preview the composed prompt without calling any service

use clap::Parser;
use prodshot::studio::catalog::{Dimension, StylingOptions};
use prodshot::studio::compose;

#[derive(Parser, Debug)]
#[command(
    name = "prodshot-prompt",
    about = "Print the prompt a styling selection composes to"
)]
struct Args {
    /// List every styling choice and exit
    #[arg(long)]
    list: bool,

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

    /// Compose as if a style-reference image were attached
    #[arg(long)]
    style_image: bool,

    /// Drop the environment clause
    #[arg(long)]
    no_environment: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.list {
        for dimension in Dimension::ALL {
            println!("{}:", dimension.as_str());
            for choice in dimension.choices() {
                println!("  {} -> {}", choice.label, choice.value);
            }
            println!();
        }
        return Ok(());
    }

    let mut options = StylingOptions::default();
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
            let choice = dimension
                .by_label(label)
                .ok_or_else(|| format!("unknown {} {:?}", dimension.as_str(), label))?;
            options.set(dimension, choice);
        }
    }

    println!("{}", compose(&options, args.style_image, !args.no_environment));
    Ok(())
}
