use argh::FromArgs;
use ebf::{
    encode::EncodeError,
    utils::{rgb222_to_rgb888, rgb888_to_rgb222},
};
use image::{ImageFormat, RgbImage};
use std::{fs::File, io::BufReader, str::FromStr};

/// EBF cli encoder and decoder.
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Encode(Encode),
    Decode(Decode),
}

#[derive(Debug)]
enum Format {
    Png,
    Jpg,
    Bmp,
}

impl FromStr for Format {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[rustfmt::skip]
        let Some(format) = s.eq_ignore_ascii_case("png").then_some(Format::Png)
               .or_else(|| s.eq_ignore_ascii_case("jpg").then_some(Format::Jpg))
               .or_else(|| s.eq_ignore_ascii_case("bmp").then_some(Format::Bmp))
        else { return Err("invalid string"); };

        Ok(format)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli { command } = argh::from_env();

    match command {
        Command::Encode(options) => encode(options),
        Command::Decode(options) => decode(options),
    }
}

/// Encodes an image as EBF8 and EBF4.
#[derive(FromArgs)]
#[argh(subcommand, name = "encode")]
struct Encode {
    /// input format, optional (png, jpg, bmp)
    #[argh(option)]
    format: Option<Format>,

    /// decode the encoded files again and verify them against the input
    #[argh(switch)]
    check: bool,

    /// the input file. This may be a PNG, JPG, or BMP.
    #[argh(positional)]
    input: String,
    /// the output path prefix; `.ebf8` and `.ebf4` are appended
    #[argh(positional)]
    output: String,
}

fn encode(options: Encode) -> Result<(), Box<dyn std::error::Error>> {
    let Encode {
        format,
        check,
        input,
        output,
    } = options;

    let image = match format {
        Some(Format::Png) => {
            image::io::Reader::with_format(BufReader::new(File::open(&input)?), ImageFormat::Png)
                .decode()?
        }
        Some(Format::Jpg) => {
            image::io::Reader::with_format(BufReader::new(File::open(&input)?), ImageFormat::Jpeg)
                .decode()?
        }
        Some(Format::Bmp) => {
            image::io::Reader::with_format(BufReader::new(File::open(&input)?), ImageFormat::Bmp)
                .decode()?
        }
        None => image::io::Reader::open(&input)?
            .with_guessed_format()?
            .decode()?,
    };

    let width = image.width();
    let height = image.height();

    println!("Encoding {width}x{height} image");

    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err("image dimensions are too large".into());
    }
    let (width, height) = (width as u16, height as u16);

    let rgb888: Vec<[u8; 3]> = image.into_rgb8().pixels().map(|p| p.0).collect();

    let mut encoded8 = Vec::with_capacity(ebf::ebf8_encoded_len(width, height));
    ebf::encode::ebf8_to_vec(width, height, &rgb888, &mut encoded8)?;
    let output8 = format!("{output}.ebf8");
    std::fs::write(&output8, &encoded8)?;
    println!("Written {} bytes to `{output8}`", encoded8.len());

    let mut encoded4 = Vec::with_capacity(ebf::ebf4_encoded_len(width, height));
    let output4 = match ebf::encode::ebf4_to_vec(width, height, &rgb888, &mut encoded4) {
        Ok(()) => {
            let output4 = format!("{output}.ebf4");
            std::fs::write(&output4, &encoded4)?;
            println!("Written {} bytes to `{output4}`", encoded4.len());
            Some(output4)
        }
        Err(e @ EncodeError::PaletteOverflow { .. }) => {
            println!("Skipping EBF4: {e}");
            None
        }
        Err(e) => return Err(e.into()),
    };

    if check {
        let expected: Vec<[u8; 3]> = rgb888
            .iter()
            .map(|&p| rgb222_to_rgb888(rgb888_to_rgb222(p)))
            .collect();

        let mut decoded = Vec::new();
        ebf::decode::ebf8_to_vec(&encoded8, &mut decoded)?;
        if decoded != expected {
            return Err(format!("check failed: `{output8}` does not decode to the input").into());
        }
        println!("EBF8 check passed");

        if let Some(output4) = output4 {
            let mut decoded = Vec::new();
            ebf::decode::ebf4_to_vec(&encoded4, &mut decoded)?;
            if decoded != expected {
                return Err(
                    format!("check failed: `{output4}` does not decode to the input").into(),
                );
            }
            println!("EBF4 check passed");
        }
    }

    Ok(())
}

/// Decodes an EBF8 or EBF4 image.
#[derive(FromArgs)]
#[argh(subcommand, name = "decode")]
struct Decode {
    /// output format (png, jpg, bmp)
    #[argh(option)]
    format: Format,

    /// the input file, either EBF8 or EBF4 (detected from the magic bytes)
    #[argh(positional)]
    input: String,
    /// the output file
    #[argh(positional)]
    output: String,
}

fn decode(options: Decode) -> Result<(), Box<dyn std::error::Error>> {
    let Decode {
        format,
        input,
        output,
    } = options;

    let data = std::fs::read(&input)?;

    println!("Decoding `{input}`");

    let mut pixels = Vec::new();
    let header = if data.starts_with(&ebf::consts::MAGIC_EBF4) {
        ebf::decode::ebf4_to_vec(&data, &mut pixels)?
    } else {
        ebf::decode::ebf8_to_vec(&data, &mut pixels)?
    };

    let mut rgb888_raw = Vec::with_capacity(pixels.len() * 3);
    for pixel in pixels {
        rgb888_raw.extend_from_slice(&pixel);
    }

    RgbImage::from_vec(u32::from(header.width), u32::from(header.height), rgb888_raw)
        .ok_or("failed to create image")?
        .save_with_format(
            &output,
            match format {
                Format::Png => ImageFormat::Png,
                Format::Jpg => ImageFormat::Jpeg,
                Format::Bmp => ImageFormat::Bmp,
            },
        )?;

    println!("Written {}x{} image to `{output}`", header.width, header.height);

    Ok(())
}
